//! 判分服务 - 业务能力层
//!
//! 判断单个题型的提交是否正确，并按成绩选择作者填写的反馈文字

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{AppResult, EditError, GradeError};
use crate::models::{ProblemBody, ProblemType, Question};
use crate::services::preciseness::Preciseness;

/// 判分结果，与学习平台的成绩事件格式一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub value: u8,
    pub max_value: u8,
}

impl Grade {
    pub fn from_correct(correct: bool) -> Self {
        Self {
            value: u8::from(correct),
            max_value: 1,
        }
    }

    pub fn is_full_marks(&self) -> bool {
        self.value == self.max_value
    }
}

/// 判断学生提交的答案是否正确
///
/// # 参数
/// - `problem_type`: 题型（含标准答案）
/// - `answers`: 学生提交的值，选择题为选中的选项文字
///
/// # 规则
/// - 数值题：任一提交值落在容差范围内即正确，无法解析的提交值忽略
/// - 文本题：任一提交值与答案完全相同即正确
/// - 选择题：提交的选项集合与正确选项集合相同
/// - 表格题：不支持自动判分
pub fn is_correct(problem_type: &ProblemType, answers: &[String]) -> Result<bool, GradeError> {
    let correct = match problem_type.body() {
        ProblemBody::Number {
            answer,
            preciseness,
        } => {
            let expected: f64 = answer
                .trim()
                .parse()
                .map_err(|_| GradeError::InvalidStoredAnswer {
                    answer: answer.clone(),
                })?;
            let preciseness = Preciseness::parse(preciseness);

            answers
                .iter()
                .filter_map(|value| value.trim().parse::<f64>().ok())
                .any(|submitted| preciseness.accepts(expected, submitted))
        }
        ProblemBody::Text { answer } => answers.iter().any(|value| value == answer),
        ProblemBody::Choice(_) => {
            let expected: HashSet<&str> = problem_type.correct_titles().into_iter().collect();
            let submitted: HashSet<&str> = answers.iter().map(String::as_str).collect();
            expected == submitted
        }
        ProblemBody::Table { .. } => {
            return Err(GradeError::Ungradable {
                kind: problem_type.kind(),
            })
        }
    };

    debug!(
        "判分: 题型 {} | 提交 {} 个值 | 结果 {}",
        problem_type.kind(),
        answers.len(),
        correct
    );
    Ok(correct)
}

/// 判分并返回成绩
pub fn grade(problem_type: &ProblemType, answers: &[String]) -> Result<Grade, GradeError> {
    is_correct(problem_type, answers).map(Grade::from_correct)
}

/// 一次提交的处理结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub grade: Grade,
    /// 学生自评的把握程度，不是整数时为 `None`
    pub confidence: Option<i64>,
    /// 作者填写的 `correctAnswerText` / `incorrectAnswerText`
    pub feedback: Option<String>,
}

/// 解析提交中的把握程度：整数、小数（取整）或整数字符串
pub fn parse_confidence(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 处理学生对某道题某个题型的提交
///
/// # 参数
/// - `question`: 题目（反馈文字保存在题目的附加字段中）
/// - `problem_type`: 题型索引
/// - `answers`: 学生提交的值
/// - `confidence`: 原始的把握程度字段
pub fn submit(
    question: &Question,
    problem_type: usize,
    answers: &[String],
    confidence: &Value,
) -> AppResult<SubmitOutcome> {
    let pt = question
        .problem_types
        .get(problem_type)
        .ok_or(EditError::ProblemTypeOutOfRange {
            index: problem_type,
            len: question.problem_types.len(),
        })?;
    let grade = grade(pt, answers)?;

    let feedback_key = if grade.is_full_marks() {
        "correctAnswerText"
    } else {
        "incorrectAnswerText"
    };
    let feedback = question
        .extra
        .get(feedback_key)
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(SubmitOutcome {
        grade,
        confidence: parse_confidence(confidence),
        feedback,
    })
}
