//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `question_store` - 宿主
//! - 持有题目列表和激活索引
//! - 执行整体替换和题型增删
//! - 提供新增题型的默认形态
//!
//! ### `session` - 编辑会话
//! - 加载课程和编辑脚本
//! - 逐步执行，单步失败不中断
//! - 提交前检查并保存结果
//!
//! ## 层次关系
//!
//! ```text
//! session (处理编辑脚本)
//!     ↓
//! workflow::QuestionEditor (处理单次编辑)
//!     ↓
//! edit (纯函数：题目 -> 新题目)
//!     ↓
//! question_store (宿主：整体替换)
//! ```

pub mod question_store;
pub mod session;

// 重新导出主要类型
pub use question_store::QuestionStore;
pub use session::{lint_lesson, parse_edit_script, run_steps, EditSession, EditStep, SessionStats};
