//! 提交前检查
//!
//! 编辑操作本身不做任何校验；这里在提交前列出可能的问题，交由调用方决定是否提示。

use std::fmt;

use crate::models::{ProblemBody, ProblemKind, Question};
use crate::services::preciseness::is_well_formed_preciseness;

/// 检查出的问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    /// 题目没有任何题型
    NoProblemTypes,
    /// 选择题没有选项
    NoOptions { problem_type: usize },
    /// 单选题正确选项数量不是 1
    ExclusiveCorrectCount {
        problem_type: usize,
        kind: ProblemKind,
        count: usize,
    },
    /// 多选题没有正确选项
    NoCorrectOption { problem_type: usize },
    /// 选项文字为空
    EmptyOptionTitle { problem_type: usize, option: usize },
    /// 答案为空
    EmptyAnswer { problem_type: usize },
    /// 数值题答案不是数字
    NonNumericAnswer { problem_type: usize, answer: String },
    /// 容差格式错误
    MalformedPreciseness { problem_type: usize, value: String },
    /// 图片地址为空
    EmptyImageUrl { image: usize },
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintIssue::NoProblemTypes => write!(f, "题目没有任何题型"),
            LintIssue::NoOptions { problem_type } => {
                write!(f, "题型 {} 没有选项", problem_type)
            }
            LintIssue::ExclusiveCorrectCount {
                problem_type,
                kind,
                count,
            } => write!(
                f,
                "题型 {} ({}) 应有且仅有 1 个正确选项，当前 {} 个",
                problem_type, kind, count
            ),
            LintIssue::NoCorrectOption { problem_type } => {
                write!(f, "题型 {} 没有正确选项", problem_type)
            }
            LintIssue::EmptyOptionTitle {
                problem_type,
                option,
            } => write!(f, "题型 {} 的选项 {} 文字为空", problem_type, option),
            LintIssue::EmptyAnswer { problem_type } => {
                write!(f, "题型 {} 答案为空", problem_type)
            }
            LintIssue::NonNumericAnswer {
                problem_type,
                answer,
            } => write!(f, "题型 {} 的答案 '{}' 不是数字", problem_type, answer),
            LintIssue::MalformedPreciseness {
                problem_type,
                value,
            } => write!(
                f,
                "题型 {} 的容差 '{}' 格式错误，应为 12、12.04 或 34%",
                problem_type, value
            ),
            LintIssue::EmptyImageUrl { image } => write!(f, "图片 {} 地址为空", image),
        }
    }
}

/// 检查一道题目
pub fn lint_question(question: &Question) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    if question.problem_types.is_empty() {
        issues.push(LintIssue::NoProblemTypes);
    }

    for (index, problem_type) in question.problem_types.iter().enumerate() {
        match problem_type.body() {
            ProblemBody::Choice(mode) => {
                if problem_type.options.is_empty() {
                    issues.push(LintIssue::NoOptions {
                        problem_type: index,
                    });
                    continue;
                }

                let count = problem_type.options.iter().filter(|o| o.correct).count();
                if mode.is_exclusive() && count != 1 {
                    issues.push(LintIssue::ExclusiveCorrectCount {
                        problem_type: index,
                        kind: mode.kind(),
                        count,
                    });
                } else if !mode.is_exclusive() && count == 0 {
                    issues.push(LintIssue::NoCorrectOption {
                        problem_type: index,
                    });
                }

                for (option, item) in problem_type.options.iter().enumerate() {
                    if item.title.trim().is_empty() {
                        issues.push(LintIssue::EmptyOptionTitle {
                            problem_type: index,
                            option,
                        });
                    }
                }
            }
            ProblemBody::Number {
                answer,
                preciseness,
            } => {
                if answer.trim().is_empty() {
                    issues.push(LintIssue::EmptyAnswer {
                        problem_type: index,
                    });
                } else if answer.trim().parse::<f64>().is_err() {
                    issues.push(LintIssue::NonNumericAnswer {
                        problem_type: index,
                        answer: answer.clone(),
                    });
                }

                // 空容差按 0 处理
                if !preciseness.trim().is_empty() && !is_well_formed_preciseness(preciseness) {
                    issues.push(LintIssue::MalformedPreciseness {
                        problem_type: index,
                        value: preciseness.clone(),
                    });
                }
            }
            ProblemBody::Text { answer } => {
                if answer.trim().is_empty() {
                    issues.push(LintIssue::EmptyAnswer {
                        problem_type: index,
                    });
                }
            }
            ProblemBody::Table { .. } => {}
        }
    }

    for (image, url) in question.img_urls.iter().enumerate() {
        if url.trim().is_empty() {
            issues.push(LintIssue::EmptyImageUrl { image });
        }
    }

    issues
}
