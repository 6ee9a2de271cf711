//! 容差解析
//!
//! 容差写作数字（`12`、`12.04`）或标准答案的百分比（`34%`）。
//! 编辑时只保存原始字符串，这里在判分和提交前检查时才解析。

use std::sync::LazyLock;

use regex::Regex;

static PRECISENESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+(\.\d+)?\s*%?\s*$").expect("容差正则必须合法")
});

/// 容差
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preciseness {
    /// 绝对误差
    Absolute(f64),
    /// 相对标准答案的百分比
    Percent(f64),
}

impl Default for Preciseness {
    fn default() -> Self {
        Preciseness::Absolute(0.0)
    }
}

impl Preciseness {
    /// 解析容差字符串，无法解析的数值按 0 处理
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let value = raw
            .split('%')
            .next()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0);

        if raw.contains('%') {
            Preciseness::Percent(value)
        } else {
            Preciseness::Absolute(value)
        }
    }

    /// 针对标准答案计算允许的误差
    pub fn tolerance(self, answer: f64) -> f64 {
        match self {
            Preciseness::Absolute(value) => value.abs(),
            Preciseness::Percent(percent) => (percent * answer / 100.0).abs(),
        }
    }

    /// 提交值是否落在 `answer ± tolerance` 内（含边界）
    pub fn accepts(self, answer: f64, submitted: f64) -> bool {
        let tolerance = self.tolerance(answer);
        answer - tolerance <= submitted && submitted <= answer + tolerance
    }
}

/// 容差是否符合 `N`、`N.M`、`N%` 格式
pub fn is_well_formed_preciseness(raw: &str) -> bool {
    PRECISENESS_RE.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_and_percent() {
        assert_eq!(Preciseness::parse("12"), Preciseness::Absolute(12.0));
        assert_eq!(Preciseness::parse("12.04"), Preciseness::Absolute(12.04));
        assert_eq!(Preciseness::parse("34%"), Preciseness::Percent(34.0));
        assert_eq!(Preciseness::parse(" 5 % "), Preciseness::Percent(5.0));
    }

    #[test]
    fn test_parse_garbage_falls_back_to_zero() {
        assert_eq!(Preciseness::parse(""), Preciseness::Absolute(0.0));
        assert_eq!(Preciseness::parse("abc"), Preciseness::Absolute(0.0));
        assert_eq!(Preciseness::parse("x%"), Preciseness::Percent(0.0));
    }

    #[test]
    fn test_percent_tolerance_scales_with_answer() {
        let preciseness = Preciseness::parse("10%");
        assert_eq!(preciseness.tolerance(200.0), 20.0);
        assert!(preciseness.accepts(200.0, 180.0));
        assert!(preciseness.accepts(200.0, 220.0));
        assert!(!preciseness.accepts(200.0, 221.0));
    }

    #[test]
    fn test_zero_tolerance_requires_exact() {
        let preciseness = Preciseness::default();
        assert!(preciseness.accepts(3.5, 3.5));
        assert!(!preciseness.accepts(3.5, 3.6));
    }

    #[test]
    fn test_well_formed_grammar() {
        for ok in ["12", "12.04", "34%", " 7 "] {
            assert!(is_well_formed_preciseness(ok), "{}", ok);
        }
        for bad in ["", "%", "1.", ".5", "12%%", "-3", "abc"] {
            assert!(!is_well_formed_preciseness(bad), "{}", bad);
        }
    }
}
