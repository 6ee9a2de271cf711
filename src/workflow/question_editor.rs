//! 题目编辑组件 - 流程层
//!
//! 核心职责：把一次用户编辑变成一次宿主更新
//!
//! 流程：
//! 1. 从宿主读取当前激活的题目
//! 2. 增删题型 → 交给宿主执行，随后通知界面滚动到最后一个题型
//! 3. 其他编辑 → 计算新题目 → `question_changed` 整体替换

use tracing::{debug, info, warn};

use crate::edit::{self, QuestionEdit};
use crate::error::{EditError, EditResult};
use crate::models::Question;
use crate::workflow::edit_ctx::EditCtx;

/// 宿主（题目存储）契约
///
/// 宿主独占题目列表；编辑组件只读取并产出新值。
pub trait QuestionHost {
    fn questions(&self) -> &[Question];

    fn active_question_index(&self) -> usize;

    /// 激活题目的代数：切换激活题目、或激活题目被删除替换时递增
    fn active_question_generation(&self) -> u64;

    /// 用新题目整体替换指定位置的题目
    fn question_changed(&mut self, index: usize, question: Question) -> EditResult<()>;

    /// 在指定题目末尾追加宿主默认的题型
    fn question_add_new_problem_type(&mut self, index: usize) -> EditResult<()>;

    fn question_remove_problem_type(&mut self, index: usize, problem_type: usize)
        -> EditResult<()>;
}

/// 仅界面使用的临时状态，不随题目保存，切换激活题目时重置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    /// 显示仿真 iframe 而不是图片
    pub show_simulation: bool,
    /// 脚手架编辑器是否打开
    pub scaffold_editing: bool,
}

/// 需要界面层响应的事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// 题型列表结构变化后滚动到指定题型（最后一个）
    ScrollToProblemType { question: usize, problem_type: usize },
}

/// 题目编辑组件
#[derive(Debug, Default)]
pub struct QuestionEditor {
    view: ViewState,
    bound_generation: Option<u64>,
}

impl QuestionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// 在图片和仿真视图之间切换（作用于宿主当前激活的题目）
    pub fn toggle_simulation_view<H: QuestionHost + ?Sized>(&mut self, host: &H) {
        self.sync_active(host);
        self.view.show_simulation = !self.view.show_simulation;
    }

    pub fn set_scaffold_editing<H: QuestionHost + ?Sized>(&mut self, host: &H, editing: bool) {
        self.sync_active(host);
        self.view.scaffold_editing = editing;
    }

    /// 宿主切换了激活题目时重置界面状态
    pub fn sync_active<H: QuestionHost + ?Sized>(&mut self, host: &H) {
        let generation = host.active_question_generation();
        if self.bound_generation != Some(generation) {
            if self.bound_generation.is_some() {
                debug!(
                    "激活题目切换到 #{}，重置界面状态",
                    host.active_question_index() + 1
                );
            }
            self.view = ViewState::default();
            self.bound_generation = Some(generation);
        }
    }

    /// 对宿主当前激活的题目执行一次编辑
    ///
    /// # 返回
    /// 增删题型时返回滚动事件，其他编辑返回 `None`
    pub fn edit<H: QuestionHost + ?Sized>(
        &mut self,
        host: &mut H,
        edit: QuestionEdit,
    ) -> EditResult<Option<EditorEvent>> {
        self.sync_active(host);

        let index = host.active_question_index();
        let ctx = EditCtx::new(index, &edit);

        let result = self.dispatch(host, index, &edit);
        match &result {
            Ok(_) => debug!("{} ✓ {}", ctx, edit.name()),
            Err(e) => warn!("{} ⚠️ {} 失败: {}", ctx, edit.name(), e),
        }
        result
    }

    fn dispatch<H: QuestionHost + ?Sized>(
        &self,
        host: &mut H,
        index: usize,
        change: &QuestionEdit,
    ) -> EditResult<Option<EditorEvent>> {
        match change {
            QuestionEdit::AddProblemType => {
                host.question_add_new_problem_type(index)?;
                Ok(scroll_to_last(host, index))
            }
            QuestionEdit::RemoveProblemType { problem_type } => {
                host.question_remove_problem_type(index, *problem_type)?;
                Ok(scroll_to_last(host, index))
            }
            other => {
                let len = host.questions().len();
                let current = host
                    .questions()
                    .get(index)
                    .ok_or(EditError::QuestionOutOfRange { index, len })?;
                let next = edit::apply(current, other)?;
                host.question_changed(index, next)?;
                Ok(None)
            }
        }
    }
}

fn scroll_to_last<H: QuestionHost + ?Sized>(host: &H, index: usize) -> Option<EditorEvent> {
    let problem_type = host.questions().get(index)?.last_problem_type_index()?;
    info!("[题目 #{}] 题型数量变化，滚动到题型 #{}", index + 1, problem_type + 1);
    Some(EditorEvent::ScrollToProblemType {
        question: index,
        problem_type,
    })
}
