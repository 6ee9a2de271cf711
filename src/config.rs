use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{AppError, AppResult, ConfigError, FileError};
use crate::models::{AnswerOption, ProblemKind, ProblemType};

/// 程序配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 课程题目 JSON 文件
    pub lesson_file: String,
    /// 编辑脚本 JSON 文件
    pub edit_script_file: String,
    /// 编辑结果输出文件
    pub output_file: String,
    /// 会话日志文件
    pub log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 新增题型的默认形态 ---
    pub default_problem_kind: ProblemKind,
    pub default_option_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lesson_file: "lesson.json".to_string(),
            edit_script_file: "edits.json".to_string(),
            output_file: "lesson.out.json".to_string(),
            log_file: "edit_log.txt".to_string(),
            verbose_logging: false,
            default_problem_kind: ProblemKind::Radio,
            default_option_count: 1,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        Ok(Self {
            lesson_file: std::env::var("LESSON_FILE").unwrap_or(default.lesson_file),
            edit_script_file: std::env::var("EDIT_SCRIPT_FILE").unwrap_or(default.edit_script_file),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            log_file: std::env::var("LOG_FILE").unwrap_or(default.log_file),
            verbose_logging: env_or("VERBOSE_LOGGING", "bool", default.verbose_logging)?,
            default_problem_kind: env_or(
                "DEFAULT_PROBLEM_KIND",
                "题型",
                default.default_problem_kind,
            )?,
            default_option_count: env_or(
                "DEFAULT_OPTION_COUNT",
                "usize",
                default.default_option_count,
            )?,
        })
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let path_str = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::file_read_failed(&path_str, e))?;
        toml::from_str(&content).map_err(|source| {
            AppError::File(FileError::TomlParseFailed {
                path: path_str,
                source,
            })
        })
    }

    /// 宿主新增题型时使用的默认题型
    pub fn default_problem_type(&self) -> ProblemType {
        ProblemType::new(self.default_problem_kind)
            .with_options(vec![AnswerOption::default(); self.default_option_count])
    }
}

fn env_or<T: FromStr>(var_name: &str, expected_type: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value,
            expected_type: expected_type.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_overrides_defaults() {
        let config = Config::from_toml_str(
            r#"
            lesson_file = "physics.json"
            default_problem_kind = "checkbox"
            default_option_count = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.lesson_file, "physics.json");
        assert_eq!(config.output_file, Config::default().output_file);

        let pt = config.default_problem_type();
        assert_eq!(pt.kind(), ProblemKind::Checkbox);
        assert_eq!(pt.options.len(), 3);
        assert!(pt.title.is_none());
    }

    #[test]
    fn test_from_env_reports_config_error() {
        std::env::set_var("DEFAULT_OPTION_COUNT", "lots");
        let err = Config::from_env().unwrap_err();
        std::env::remove_var("DEFAULT_OPTION_COUNT");
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarParseFailed { ref var_name, .. })
                if var_name == "DEFAULT_OPTION_COUNT"
        ));
    }

    #[test]
    fn test_invalid_toml_kind_is_rejected() {
        assert!(Config::from_toml_str("default_problem_kind = \"essay\"").is_err());
    }

    #[test]
    fn test_env_or_reports_bad_value() {
        std::env::set_var("QA_TEST_OPTION_COUNT", "many");
        let err = env_or::<usize>("QA_TEST_OPTION_COUNT", "usize", 1).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EnvVarParseFailed {
                var_name: "QA_TEST_OPTION_COUNT".to_string(),
                value: "many".to_string(),
                expected_type: "usize".to_string(),
            }
        );
        assert_eq!(env_or::<usize>("QA_TEST_UNSET_VAR", "usize", 4).unwrap(), 4);
    }
}
