//! 编辑核心 - 纯函数层
//!
//! 每个编辑操作都是 `(当前题目, 编辑描述) -> 新题目`，从不原地修改宿主持有的数据。
//! 新题目由上层通过唯一的 `question_changed` 通道交给宿主整体替换。
//!
//! - `problem_types` - 题型切换、标题、答案、题型增删
//! - `options` - 选项增删、正确性、文字
//! - `media` - 描述、图片、iframe、脚手架开关

pub mod media;
pub mod options;
pub mod problem_types;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EditError, EditResult};
use crate::models::{ProblemKind, ProblemType, Question, TableData};

/// 编辑描述
///
/// 索引均为当前序列中的位置索引。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum QuestionEdit {
    ChangeType {
        problem_type: usize,
        kind: ProblemKind,
    },
    AddOption {
        problem_type: usize,
    },
    RemoveOption {
        problem_type: usize,
        option: usize,
    },
    SetOptionCorrectness {
        problem_type: usize,
        option: usize,
        checked: bool,
    },
    SetOptionTitle {
        problem_type: usize,
        option: usize,
        text: String,
    },
    SetAnswer {
        problem_type: usize,
        value: String,
    },
    SetPreciseness {
        problem_type: usize,
        value: String,
    },
    SetTableData {
        problem_type: usize,
        table_data: TableData,
    },
    AddTitle {
        problem_type: usize,
    },
    SetTitle {
        problem_type: usize,
        text: String,
    },
    RemoveTitle {
        problem_type: usize,
    },
    AddProblemType,
    RemoveProblemType {
        problem_type: usize,
    },
    AddImage,
    RemoveImage {
        image: usize,
    },
    SetImage {
        image: usize,
        url: String,
    },
    SetIframeUrl {
        url: String,
    },
    SetDescription {
        content: String,
    },
    ToggleScaffolds,
}

impl QuestionEdit {
    /// 操作名称（用于日志）
    pub fn name(&self) -> &'static str {
        match self {
            QuestionEdit::ChangeType { .. } => "changeType",
            QuestionEdit::AddOption { .. } => "addOption",
            QuestionEdit::RemoveOption { .. } => "removeOption",
            QuestionEdit::SetOptionCorrectness { .. } => "setOptionCorrectness",
            QuestionEdit::SetOptionTitle { .. } => "setOptionTitle",
            QuestionEdit::SetAnswer { .. } => "setAnswer",
            QuestionEdit::SetPreciseness { .. } => "setPreciseness",
            QuestionEdit::SetTableData { .. } => "setTableData",
            QuestionEdit::AddTitle { .. } => "addTitle",
            QuestionEdit::SetTitle { .. } => "setTitle",
            QuestionEdit::RemoveTitle { .. } => "removeTitle",
            QuestionEdit::AddProblemType => "addProblemType",
            QuestionEdit::RemoveProblemType { .. } => "removeProblemType",
            QuestionEdit::AddImage => "addImage",
            QuestionEdit::RemoveImage { .. } => "removeImage",
            QuestionEdit::SetImage { .. } => "setImage",
            QuestionEdit::SetIframeUrl { .. } => "setIframeUrl",
            QuestionEdit::SetDescription { .. } => "setDescription",
            QuestionEdit::ToggleScaffolds => "toggleScaffolds",
        }
    }

    /// 操作指向的题型索引
    pub fn problem_type_index(&self) -> Option<usize> {
        match self {
            QuestionEdit::ChangeType { problem_type, .. }
            | QuestionEdit::AddOption { problem_type }
            | QuestionEdit::RemoveOption { problem_type, .. }
            | QuestionEdit::SetOptionCorrectness { problem_type, .. }
            | QuestionEdit::SetOptionTitle { problem_type, .. }
            | QuestionEdit::SetAnswer { problem_type, .. }
            | QuestionEdit::SetPreciseness { problem_type, .. }
            | QuestionEdit::SetTableData { problem_type, .. }
            | QuestionEdit::AddTitle { problem_type }
            | QuestionEdit::SetTitle { problem_type, .. }
            | QuestionEdit::RemoveTitle { problem_type }
            | QuestionEdit::RemoveProblemType { problem_type } => Some(*problem_type),
            _ => None,
        }
    }

    /// 是否为增删题型的结构性操作（由宿主执行）
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            QuestionEdit::AddProblemType | QuestionEdit::RemoveProblemType { .. }
        )
    }
}

/// 对题目应用一个编辑，返回新题目
///
/// `AddProblemType` 追加默认题型；需要宿主自定义默认题型时使用
/// [`problem_types::append`]。
pub fn apply(question: &Question, edit: &QuestionEdit) -> EditResult<Question> {
    debug!("应用编辑: {:?}", edit);

    match edit {
        QuestionEdit::ChangeType { problem_type, kind } => {
            problem_types::change_type(question, *problem_type, *kind)
        }
        QuestionEdit::AddOption { problem_type } => options::add_option(question, *problem_type),
        QuestionEdit::RemoveOption {
            problem_type,
            option,
        } => options::remove_option(question, *problem_type, *option),
        QuestionEdit::SetOptionCorrectness {
            problem_type,
            option,
            checked,
        } => options::set_option_correctness(question, *problem_type, *option, *checked),
        QuestionEdit::SetOptionTitle {
            problem_type,
            option,
            text,
        } => options::set_option_title(question, *problem_type, *option, text),
        QuestionEdit::SetAnswer {
            problem_type,
            value,
        } => problem_types::set_answer(question, *problem_type, value),
        QuestionEdit::SetPreciseness {
            problem_type,
            value,
        } => problem_types::set_preciseness(question, *problem_type, value),
        QuestionEdit::SetTableData {
            problem_type,
            table_data,
        } => problem_types::set_table_data(question, *problem_type, table_data.clone()),
        QuestionEdit::AddTitle { problem_type } => problem_types::add_title(question, *problem_type),
        QuestionEdit::SetTitle { problem_type, text } => {
            problem_types::set_title(question, *problem_type, text)
        }
        QuestionEdit::RemoveTitle { problem_type } => {
            problem_types::remove_title(question, *problem_type)
        }
        QuestionEdit::AddProblemType => {
            Ok(problem_types::append(question, ProblemType::default()))
        }
        QuestionEdit::RemoveProblemType { problem_type } => {
            problem_types::remove(question, *problem_type)
        }
        QuestionEdit::AddImage => Ok(media::add_image(question)),
        QuestionEdit::RemoveImage { image } => media::remove_image(question, *image),
        QuestionEdit::SetImage { image, url } => media::set_image(question, *image, url),
        QuestionEdit::SetIframeUrl { url } => Ok(media::set_iframe_url(question, url)),
        QuestionEdit::SetDescription { content } => Ok(media::set_description(question, content)),
        QuestionEdit::ToggleScaffolds => Ok(media::toggle_scaffolds(question)),
    }
}

/// 复制题目并替换指定位置的题型
///
/// 出错时原题目保持不变。
pub(crate) fn map_problem_type<F>(question: &Question, index: usize, f: F) -> EditResult<Question>
where
    F: FnOnce(ProblemType) -> EditResult<ProblemType>,
{
    let mut next = question.clone();
    let len = next.problem_types.len();
    let slot = next
        .problem_types
        .get_mut(index)
        .ok_or(EditError::ProblemTypeOutOfRange { index, len })?;
    let current = std::mem::take(slot);
    *slot = f(current)?;
    Ok(next)
}
