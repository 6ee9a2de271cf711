use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::problem_type::ProblemType;

/// 题目
///
/// 一道题包含描述、图片、可选的仿真 iframe 和若干题型。
/// 脚手架（scaffolds）等由其他组件维护的数据放在 `extra` 中原样保存。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 富文本描述，内容由编辑器组件决定
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub img_urls: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iframe_url: Option<String>,

    #[serde(default)]
    pub is_scaffolds_enabled: bool,

    #[serde(default)]
    pub problem_types: Vec<ProblemType>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Default for Question {
    fn default() -> Self {
        Self::with_problem_type(ProblemType::default())
    }
}

impl Question {
    /// 以单个题型创建新题目
    pub fn with_problem_type(problem_type: ProblemType) -> Self {
        Self {
            description: String::new(),
            img_urls: Vec::new(),
            iframe_url: None,
            is_scaffolds_enabled: false,
            problem_types: vec![problem_type],
            extra: Map::new(),
        }
    }

    /// 最后一个题型的索引，用于新增题型后滚动定位
    pub fn last_problem_type_index(&self) -> Option<usize> {
        self.problem_types.len().checked_sub(1)
    }
}
