use crate::edit::map_problem_type;
use crate::error::{EditError, EditResult};
use crate::models::{AnswerOption, ProblemType, Question};

fn option_mut(
    pt: &mut ProblemType,
    problem_type: usize,
    option: usize,
) -> EditResult<&mut AnswerOption> {
    let len = pt.options.len();
    pt.options.get_mut(option).ok_or(EditError::OptionOutOfRange {
        problem_type,
        index: option,
        len,
    })
}

/// 追加一个空白选项
pub fn add_option(question: &Question, problem_type: usize) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| {
        pt.options.push(AnswerOption::default());
        Ok(pt)
    })
}

/// 删除选项，允许删到空（界面层负责禁止删除最后一个）
pub fn remove_option(question: &Question, problem_type: usize, option: usize) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| {
        option_mut(&mut pt, problem_type, option)?;
        pt.options.remove(option);
        Ok(pt)
    })
}

/// 设置选项正确性
///
/// 单选/下拉题型同时清除其他选项的正确标记；多选题型不影响其他选项。
pub fn set_option_correctness(
    question: &Question,
    problem_type: usize,
    option: usize,
    checked: bool,
) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| {
        option_mut(&mut pt, problem_type, option)?.correct = checked;

        let exclusive = pt
            .kind()
            .choice_mode()
            .is_some_and(|mode| mode.is_exclusive());
        if exclusive {
            for (index, sibling) in pt.options.iter_mut().enumerate() {
                if index != option {
                    sibling.correct = false;
                }
            }
        }
        Ok(pt)
    })
}

/// 修改选项文字，不影响正确性
pub fn set_option_title(
    question: &Question,
    problem_type: usize,
    option: usize,
    text: &str,
) -> EditResult<Question> {
    map_problem_type(question, problem_type, |mut pt| {
        option_mut(&mut pt, problem_type, option)?.title = text.to_string();
        Ok(pt)
    })
}
