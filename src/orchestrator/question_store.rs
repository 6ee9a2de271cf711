//! 题目存储 - 宿主
//!
//! 持有题目列表和激活索引，是题目数据唯一的可变持有者

use tracing::info;

use crate::config::Config;
use crate::edit::{self, QuestionEdit};
use crate::error::{EditError, EditResult};
use crate::models::{ProblemType, Question};
use crate::workflow::QuestionHost;

/// 题目存储
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
    active_index: usize,
    active_generation: u64,
    default_problem_type: ProblemType,
    revision: u64,
}

impl QuestionStore {
    pub fn new(questions: Vec<Question>, default_problem_type: ProblemType) -> Self {
        Self {
            questions,
            active_index: 0,
            active_generation: 0,
            default_problem_type,
            revision: 0,
        }
    }

    pub fn from_config(questions: Vec<Question>, config: &Config) -> Self {
        Self::new(questions, config.default_problem_type())
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    pub fn active_question(&self) -> Option<&Question> {
        self.questions.get(self.active_index)
    }

    /// 成功替换的次数
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// 切换激活题目
    pub fn set_active(&mut self, index: usize) -> EditResult<()> {
        self.check_index(index)?;
        if index != self.active_index {
            self.active_index = index;
            self.active_generation += 1;
        }
        Ok(())
    }

    /// 新建题目（包含一个默认题型），返回其索引
    pub fn add_question(&mut self) -> usize {
        self.questions
            .push(Question::with_problem_type(self.default_problem_type.clone()));
        self.revision += 1;
        let index = self.questions.len() - 1;
        info!("新增题目 #{}", index + 1);
        index
    }

    /// 删除题目，激活索引保持在有效范围内
    ///
    /// 删除激活题目时，其他题目接替激活位置，视为一次切换。
    pub fn remove_question(&mut self, index: usize) -> EditResult<Question> {
        self.check_index(index)?;
        let removed = self.questions.remove(index);
        if index == self.active_index {
            self.active_generation += 1;
        }
        if self.active_index > index || self.active_index >= self.questions.len() {
            self.active_index = self.active_index.saturating_sub(1);
        }
        self.revision += 1;
        info!("删除题目 #{}", index + 1);
        Ok(removed)
    }

    /// 对指定题目直接应用编辑（不经过编辑组件）
    pub fn apply_at(&mut self, index: usize, change: &QuestionEdit) -> EditResult<()> {
        match change {
            QuestionEdit::AddProblemType => self.question_add_new_problem_type(index),
            QuestionEdit::RemoveProblemType { problem_type } => {
                self.question_remove_problem_type(index, *problem_type)
            }
            other => {
                let next = edit::apply(self.question(index)?, other)?;
                self.question_changed(index, next)
            }
        }
    }

    fn question(&self, index: usize) -> EditResult<&Question> {
        self.questions.get(index).ok_or(EditError::QuestionOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    fn check_index(&self, index: usize) -> EditResult<()> {
        self.question(index).map(|_| ())
    }
}

impl QuestionHost for QuestionStore {
    fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn active_question_index(&self) -> usize {
        self.active_index
    }

    fn active_question_generation(&self) -> u64 {
        self.active_generation
    }

    fn question_changed(&mut self, index: usize, question: Question) -> EditResult<()> {
        self.check_index(index)?;
        self.questions[index] = question;
        self.revision += 1;
        Ok(())
    }

    fn question_add_new_problem_type(&mut self, index: usize) -> EditResult<()> {
        let next = edit::problem_types::append(self.question(index)?, self.default_problem_type.clone());
        info!(
            "[题目 #{}] 新增题型，共 {} 个",
            index + 1,
            next.problem_types.len()
        );
        self.question_changed(index, next)
    }

    fn question_remove_problem_type(&mut self, index: usize, problem_type: usize) -> EditResult<()> {
        let next = edit::problem_types::remove(self.question(index)?, problem_type)?;
        info!(
            "[题目 #{}] 删除题型 #{}，剩余 {} 个",
            index + 1,
            problem_type + 1,
            next.problem_types.len()
        );
        self.question_changed(index, next)
    }
}
