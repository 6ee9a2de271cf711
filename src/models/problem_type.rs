use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::problem_kind::{ChoiceMode, ProblemKind};

/// 选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// 学生看到的选项文字
    #[serde(default)]
    pub title: String,
    /// 是否为正确选项
    #[serde(default)]
    pub correct: bool,
}

impl AnswerOption {
    pub fn new(title: impl Into<String>, correct: bool) -> Self {
        Self {
            title: title.into(),
            correct,
        }
    }
}

/// 表格题数据，结构由表格编辑器决定，这里只原样保存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableData(pub JsonValue);

impl Default for TableData {
    fn default() -> Self {
        Self(JsonValue::Object(Default::default()))
    }
}

/// 各题型专属的答案数据
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemBody {
    /// 选择题，答案在选项列表中
    Choice(ChoiceMode),
    /// 数值题
    Number { answer: String, preciseness: String },
    /// 文本题
    Text { answer: String },
    /// 表格题
    Table { table_data: TableData },
}

impl ProblemBody {
    pub fn kind(&self) -> ProblemKind {
        match self {
            ProblemBody::Choice(mode) => mode.kind(),
            ProblemBody::Number { .. } => ProblemKind::Number,
            ProblemBody::Text { .. } => ProblemKind::Text,
            ProblemBody::Table { .. } => ProblemKind::Table,
        }
    }
}

/// 当前题型用不到的答案数据，切回对应题型时恢复
///
/// 只暂存有内容的字段，空字段与缺失等价，保存时不会凭空多出键。
#[derive(Debug, Clone, Default, PartialEq)]
struct ParkedFields {
    answer: Option<String>,
    preciseness: Option<String>,
    table_data: Option<TableData>,
}

impl ParkedFields {
    fn absorb(&mut self, body: ProblemBody) {
        match body {
            ProblemBody::Choice(_) => {}
            ProblemBody::Number {
                answer,
                preciseness,
            } => {
                self.answer = non_empty(answer);
                self.preciseness = non_empty(preciseness);
            }
            ProblemBody::Text { answer } => self.answer = non_empty(answer),
            ProblemBody::Table { table_data } => {
                self.table_data = (table_data != TableData::default()).then_some(table_data)
            }
        }
    }

    fn take_for(&mut self, kind: ProblemKind) -> ProblemBody {
        if let Some(mode) = kind.choice_mode() {
            return ProblemBody::Choice(mode);
        }
        match kind {
            ProblemKind::Number => ProblemBody::Number {
                answer: self.answer.take().unwrap_or_default(),
                preciseness: self.preciseness.take().unwrap_or_default(),
            },
            ProblemKind::Text => ProblemBody::Text {
                answer: self.answer.take().unwrap_or_default(),
            },
            _ => ProblemBody::Table {
                table_data: self.table_data.take().unwrap_or_default(),
            },
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// 题型（一道题中的一个小问）
///
/// `title` 为 `None` 表示没有标题；`Some("")` 表示已添加但为空，两者不同。
/// 选项列表在所有题型间共享，切换题型时保留选项文字和顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProblemType", into = "RawProblemType")]
pub struct ProblemType {
    pub title: Option<String>,
    pub options: Vec<AnswerOption>,
    body: ProblemBody,
    parked: ParkedFields,
}

impl Default for ProblemType {
    fn default() -> Self {
        Self::new(ProblemKind::Radio).with_options(vec![AnswerOption::default()])
    }
}

impl ProblemType {
    /// 创建指定题型的空白题型
    pub fn new(kind: ProblemKind) -> Self {
        let mut parked = ParkedFields::default();
        let body = parked.take_for(kind);
        Self {
            title: None,
            options: Vec::new(),
            body,
            parked,
        }
    }

    pub fn with_options(mut self, options: Vec<AnswerOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn kind(&self) -> ProblemKind {
        self.body.kind()
    }

    pub fn body(&self) -> &ProblemBody {
        &self.body
    }

    /// 切换题型
    ///
    /// 所有选项的 `correct` 重置为 `false`，选项文字按位置保留。
    /// 旧题型的答案数据被暂存，切回时恢复。
    pub fn switch_kind(mut self, kind: ProblemKind) -> Self {
        let previous = std::mem::replace(&mut self.body, ProblemBody::Choice(ChoiceMode::Radio));
        self.parked.absorb(previous);
        self.body = self.parked.take_for(kind);
        for option in &mut self.options {
            option.correct = false;
        }
        self
    }

    /// 数值题/文本题的答案（其他题型返回暂存值）
    pub fn answer(&self) -> Option<&str> {
        match &self.body {
            ProblemBody::Number { answer, .. } | ProblemBody::Text { answer } => Some(answer),
            _ => self.parked.answer.as_deref(),
        }
    }

    pub fn preciseness(&self) -> Option<&str> {
        match &self.body {
            ProblemBody::Number { preciseness, .. } => Some(preciseness),
            _ => self.parked.preciseness.as_deref(),
        }
    }

    pub fn table_data(&self) -> Option<&TableData> {
        match &self.body {
            ProblemBody::Table { table_data } => Some(table_data),
            _ => self.parked.table_data.as_ref(),
        }
    }

    pub fn set_answer(&mut self, value: impl Into<String>) {
        match &mut self.body {
            ProblemBody::Number { answer, .. } | ProblemBody::Text { answer } => {
                *answer = value.into()
            }
            _ => self.parked.answer = Some(value.into()),
        }
    }

    pub fn set_preciseness(&mut self, value: impl Into<String>) {
        match &mut self.body {
            ProblemBody::Number { preciseness, .. } => *preciseness = value.into(),
            _ => self.parked.preciseness = Some(value.into()),
        }
    }

    pub fn set_table_data(&mut self, data: TableData) {
        match &mut self.body {
            ProblemBody::Table { table_data } => *table_data = data,
            _ => self.parked.table_data = Some(data),
        }
    }

    /// 正确选项的文字列表
    pub fn correct_titles(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| option.correct)
            .map(|option| option.title.as_str())
            .collect()
    }
}

/// 题型在 JSON 中的扁平结构
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProblemType {
    #[serde(rename = "type")]
    kind: ProblemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default)]
    options: Vec<AnswerOption>,
    #[serde(
        default,
        deserialize_with = "deserialize_loose_string",
        skip_serializing_if = "Option::is_none"
    )]
    answer: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_loose_string",
        skip_serializing_if = "Option::is_none"
    )]
    preciseness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    table_data: Option<TableData>,
}

impl From<RawProblemType> for ProblemType {
    fn from(raw: RawProblemType) -> Self {
        let mut parked = ParkedFields {
            answer: raw.answer,
            preciseness: raw.preciseness,
            table_data: raw.table_data,
        };
        let body = parked.take_for(raw.kind);
        Self {
            title: raw.title,
            options: raw.options,
            body,
            parked,
        }
    }
}

impl From<ProblemType> for RawProblemType {
    fn from(problem_type: ProblemType) -> Self {
        let kind = problem_type.kind();
        let ProblemType {
            title,
            options,
            body,
            mut parked,
        } = problem_type;
        parked.absorb(body);
        Self {
            kind,
            title,
            options,
            answer: parked.answer,
            preciseness: parked.preciseness,
            table_data: parked.table_data,
        }
    }
}

// 答案可能被存成数字，也可能是字符串
fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct LooseStringVisitor;

    impl<'de> Visitor<'de> for LooseStringVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(LooseStringVisitor)
}
