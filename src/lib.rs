//! # Question Authoring
//!
//! 课程题目编辑器的内存编辑模型
//!
//! ## 架构设计
//!
//! 与题目数据的所有交互都是"整体替换"：编辑从不原地修改宿主持有的题目，
//! 而是计算出新题目，再通过唯一的 `question_changed` 通道交给宿主。
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、题型、选项；题型是带标签的枚举
//! - `loaders` - 课程 JSON 文件读写
//!
//! ### ② 编辑核心（Edit）
//! - `edit/` - 纯函数 `(题目, 编辑) -> 新题目`
//!
//! ### ③ 业务能力层（Services）
//! - `preciseness` - 容差解析
//! - `grading` - 学生提交判分
//! - `validation` - 提交前检查
//!
//! ### ④ 流程层（Workflow）
//! - `QuestionEditor` - 把一次编辑路由到宿主，维护界面临时状态
//! - `QuestionHost` - 宿主契约
//!
//! ### ⑤ 编排层（Orchestration）
//! - `QuestionStore` - 宿主实现，题目唯一的可变持有者
//! - `EditSession` - 加载课程、执行编辑脚本、检查并保存

pub mod config;
pub mod edit;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use edit::{apply, QuestionEdit};
pub use error::{AppError, AppResult, EditError, EditResult};
pub use models::{AnswerOption, ProblemKind, ProblemType, Question};
pub use orchestrator::{EditSession, QuestionStore};
pub use workflow::{EditorEvent, QuestionEditor, QuestionHost, ViewState};
