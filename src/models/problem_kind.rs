use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 题型标签
///
/// 决定题型使用哪一部分答案数据：选项、数值答案、文本答案或表格。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    /// 单选（单选按钮）
    Radio,
    /// 多选
    Checkbox,
    /// 单选（下拉框）
    Select,
    /// 数值题，带容差
    Number,
    /// 文本题
    Text,
    /// 表格题
    Table,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 6] = [
        ProblemKind::Radio,
        ProblemKind::Checkbox,
        ProblemKind::Select,
        ProblemKind::Number,
        ProblemKind::Text,
        ProblemKind::Table,
    ];

    /// 获取标签字符串
    pub fn as_str(self) -> &'static str {
        match self {
            ProblemKind::Radio => "radio",
            ProblemKind::Checkbox => "checkbox",
            ProblemKind::Select => "select",
            ProblemKind::Number => "number",
            ProblemKind::Text => "text",
            ProblemKind::Table => "table",
        }
    }

    /// 是否为选择类题型（使用选项列表）
    pub fn is_choice(self) -> bool {
        self.choice_mode().is_some()
    }

    /// 选择类题型对应的选择模式
    pub fn choice_mode(self) -> Option<ChoiceMode> {
        match self {
            ProblemKind::Radio => Some(ChoiceMode::Radio),
            ProblemKind::Checkbox => Some(ChoiceMode::Checkbox),
            ProblemKind::Select => Some(ChoiceMode::Select),
            _ => None,
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的题型标签
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("未知题型: {0}")]
pub struct UnknownProblemKind(pub String);

impl FromStr for ProblemKind {
    type Err = UnknownProblemKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProblemKind(s.to_string()))
    }
}

/// 选择类题型的模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceMode {
    Radio,
    Checkbox,
    Select,
}

impl ChoiceMode {
    /// 单选语义：最多一个正确选项
    pub fn is_exclusive(self) -> bool {
        matches!(self, ChoiceMode::Radio | ChoiceMode::Select)
    }

    pub fn kind(self) -> ProblemKind {
        match self {
            ChoiceMode::Radio => ProblemKind::Radio,
            ChoiceMode::Checkbox => ProblemKind::Checkbox,
            ChoiceMode::Select => ProblemKind::Select,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_from_str() {
        assert_eq!("radio".parse::<ProblemKind>().unwrap(), ProblemKind::Radio);
        assert_eq!(" Table ".parse::<ProblemKind>().unwrap(), ProblemKind::Table);
        assert!("essay".parse::<ProblemKind>().is_err());
    }

    #[test]
    fn test_exclusive_modes() {
        assert!(ChoiceMode::Radio.is_exclusive());
        assert!(ChoiceMode::Select.is_exclusive());
        assert!(!ChoiceMode::Checkbox.is_exclusive());
        assert!(ProblemKind::Number.choice_mode().is_none());
    }

    #[test]
    fn test_serde_uses_lowercase_tag() {
        let json = serde_json::to_string(&ProblemKind::Checkbox).unwrap();
        assert_eq!(json, "\"checkbox\"");
    }
}
