use thiserror::Error;

use crate::models::ProblemKind;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 编辑操作错误
    #[error("编辑错误: {0}")]
    Edit(#[from] EditError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 判分错误
    #[error("判分错误: {0}")]
    Grade(#[from] GradeError),
}

/// 编辑操作错误
///
/// 合法的寻址永远不会出错；这里只描述调用方传入了越界索引的情况。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// 题目索引越界
    #[error("题目索引 {index} 超出范围 (共 {len} 题)")]
    QuestionOutOfRange { index: usize, len: usize },
    /// 题型索引越界
    #[error("题型索引 {index} 超出范围 (共 {len} 个题型)")]
    ProblemTypeOutOfRange { index: usize, len: usize },
    /// 选项索引越界
    #[error("题型 {problem_type} 的选项索引 {index} 超出范围 (共 {len} 个选项)")]
    OptionOutOfRange {
        problem_type: usize,
        index: usize,
        len: usize,
    },
    /// 图片索引越界
    #[error("图片索引 {index} 超出范围 (共 {len} 张图片)")]
    ImageOutOfRange { index: usize, len: usize },
    /// 修改标题前必须先添加标题
    #[error("题型 {problem_type} 尚未添加标题")]
    TitleAbsent { problem_type: usize },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 判分错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// 该题型不支持自动判分
    #[error("题型 {kind} 不支持自动判分")]
    Ungradable { kind: ProblemKind },
    /// 题目中保存的标准答案无法解析为数字
    #[error("标准答案 '{answer}' 不是有效数字")]
    InvalidStoredAnswer { answer: String },
}

// ========== 从常见错误类型转换 ==========

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 JSON 解析错误
    pub fn json_parse_failed(path: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::File(FileError::JsonParseFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 编辑操作结果类型
pub type EditResult<T> = Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_errors_convert_with_prefix() {
        let err: AppError = EditError::TitleAbsent { problem_type: 0 }.into();
        assert!(matches!(err, AppError::Edit(_)));
        assert_eq!(err.to_string(), "编辑错误: 题型 0 尚未添加标题");

        let err: AppError = GradeError::Ungradable {
            kind: ProblemKind::Table,
        }
        .into();
        assert!(err.to_string().starts_with("判分错误"));
    }
}
