use crate::edit::map_problem_type;
use crate::error::{EditError, EditResult};
use crate::models::{ProblemKind, ProblemType, Question, TableData};

/// 切换题型，所有选项重置为未选中
pub fn change_type(question: &Question, problem_type: usize, kind: ProblemKind) -> EditResult<Question> {
    map_problem_type(question, problem_type, |pt| Ok(pt.switch_kind(kind)))
}

/// 设置数值题/文本题答案，不做格式校验
pub fn set_answer(question: &Question, problem_type: usize, value: &str) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| {
        pt.set_answer(value);
        Ok(pt)
    })
}

/// 设置容差（数字或百分比），不做格式校验
pub fn set_preciseness(question: &Question, problem_type: usize, value: &str) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| {
        pt.set_preciseness(value);
        Ok(pt)
    })
}

pub fn set_table_data(
    question: &Question,
    problem_type: usize,
    table_data: TableData,
) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| {
        pt.set_table_data(table_data);
        Ok(pt)
    })
}

/// 添加标题：无标题 -> 空标题
pub fn add_title(question: &Question, problem_type: usize) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| {
        pt.title = Some(String::new());
        Ok(pt)
    })
}

/// 修改标题，标题必须已存在
pub fn set_title(question: &Question, problem_type: usize, text: &str) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| match pt.title.as_mut() {
        Some(title) => {
            *title = text.to_string();
            Ok(pt)
        }
        None => Err(EditError::TitleAbsent { problem_type }),
    })
}

/// 删除标题，回到无标题状态
pub fn remove_title(question: &Question, problem_type: usize) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| {
        pt.title = None;
        Ok(pt)
    })
}

/// 在末尾追加题型
pub fn append(question: &Question, template: ProblemType) -> Question {
    let mut next = question.clone();
    next.problem_types.push(template);
    next
}

/// 按位置删除题型，不检查最少数量
pub fn remove(question: &Question, problem_type: usize) -> EditResult<Question> {
    let len = question.problem_types.len();
    if problem_type >= len {
        return Err(EditError::ProblemTypeOutOfRange {
            index: problem_type,
            len,
        });
    }

    let mut next = question.clone();
    next.problem_types.remove(problem_type);
    Ok(next)
}
