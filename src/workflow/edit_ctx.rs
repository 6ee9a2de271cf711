//! 编辑上下文
//!
//! 封装"我正在编辑哪道题的哪个题型"这一信息

use std::fmt::Display;

use crate::edit::QuestionEdit;

/// 编辑上下文（仅用于日志定位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCtx {
    /// 题目索引
    pub question_index: usize,

    /// 题型索引，题目级操作为 `None`
    pub problem_type_index: Option<usize>,
}

impl EditCtx {
    pub fn new(question_index: usize, edit: &QuestionEdit) -> Self {
        Self {
            question_index,
            problem_type_index: edit.problem_type_index(),
        }
    }
}

impl Display for EditCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.problem_type_index {
            Some(pt) => write!(f, "[题目 #{} 题型 #{}]", self.question_index + 1, pt + 1),
            None => write!(f, "[题目 #{}]", self.question_index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        let ctx = EditCtx::new(0, &QuestionEdit::AddOption { problem_type: 2 });
        assert_eq!(ctx.to_string(), "[题目 #1 题型 #3]");

        let ctx = EditCtx::new(4, &QuestionEdit::AddImage);
        assert_eq!(ctx.to_string(), "[题目 #5]");
    }
}
