//! 编辑会话
//!
//! 加载课程 → 按脚本逐步编辑 → 提交前检查 → 保存

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

use crate::config::Config;
use crate::edit::QuestionEdit;
use crate::error::{AppError, AppResult};
use crate::models::{load_lesson_file, save_lesson_file, Question};
use crate::orchestrator::question_store::QuestionStore;
use crate::services::validation::{lint_question, LintIssue};
use crate::utils::logging;
use crate::workflow::{EditorEvent, QuestionEditor, QuestionHost};

/// 编辑脚本中的一步
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditStep {
    /// 题目索引（执行前切换为激活题目）
    pub question: usize,
    pub edit: QuestionEdit,
}

/// 解析编辑脚本（JSON 数组）
pub fn parse_edit_script(content: &str, source_name: &str) -> AppResult<Vec<EditStep>> {
    serde_json::from_str(content).map_err(|e| AppError::json_parse_failed(source_name, e))
}

pub async fn load_edit_script(path: &Path) -> AppResult<Vec<EditStep>> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;
    parse_edit_script(&content, &path_str)
}

/// 会话统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub applied: usize,
    pub rejected: usize,
    pub events: Vec<EditorEvent>,
}

/// 被拒绝的编辑步骤
#[derive(Debug)]
pub struct RejectedStep {
    pub step: usize,
    pub error: AppError,
}

/// 依次执行编辑步骤
///
/// 单步失败只记录，不中断后续步骤。
pub fn run_steps(
    store: &mut QuestionStore,
    editor: &mut QuestionEditor,
    steps: Vec<EditStep>,
) -> (SessionStats, Vec<RejectedStep>) {
    let mut stats = SessionStats::default();
    let mut rejected = Vec::new();

    for (step, EditStep { question, edit }) in steps.into_iter().enumerate() {
        let result = store
            .set_active(question)
            .and_then(|_| editor.edit(store, edit));

        match result {
            Ok(event) => {
                stats.applied += 1;
                stats.events.extend(event);
            }
            Err(e) => {
                stats.rejected += 1;
                rejected.push(RejectedStep {
                    step: step + 1,
                    error: e.into(),
                });
            }
        }
    }

    (stats, rejected)
}

/// 检查所有题目，返回 (题目索引, 问题) 列表
pub fn lint_lesson(questions: &[Question]) -> Vec<(usize, LintIssue)> {
    questions
        .iter()
        .enumerate()
        .flat_map(|(index, question)| {
            lint_question(question)
                .into_iter()
                .map(move |issue| (index, issue))
        })
        .collect()
}

/// 编辑会话
pub struct EditSession {
    config: Config,
}

impl EditSession {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行完整的编辑会话
    pub async fn run(&self) -> Result<SessionStats> {
        let config = &self.config;
        logging::init_log_file(&config.log_file)
            .with_context(|| format!("无法初始化日志文件: {}", config.log_file))?;

        let questions = load_lesson_file(Path::new(&config.lesson_file))
            .await
            .with_context(|| format!("无法加载课程: {}", config.lesson_file))?;
        let steps = load_edit_script(Path::new(&config.edit_script_file))
            .await
            .with_context(|| format!("无法加载编辑脚本: {}", config.edit_script_file))?;

        logging::log_session_start(&config.lesson_file, questions.len(), steps.len());

        let mut store = QuestionStore::from_config(questions, config);
        let mut editor = QuestionEditor::new();
        let (stats, rejected) = run_steps(&mut store, &mut editor, steps);

        for item in &rejected {
            warn!("⚠️ 步骤 {} 被拒绝: {}", item.step, item.error);
            logging::append_log_line(
                &config.log_file,
                &format!("步骤 {} 被拒绝: {}", item.step, item.error),
            )?;
        }

        let issues = lint_lesson(store.questions());
        for (index, issue) in &issues {
            let preview = logging::truncate_text(&store.questions()[*index].description, 40);
            warn!("[题目 #{}] {} | {}", index + 1, issue, preview);
            logging::append_log_line(
                &config.log_file,
                &format!("题目 {} | {}", index + 1, issue),
            )?;
        }

        info!("共执行 {} 次替换", store.revision());
        let questions = store.into_questions();
        save_lesson_file(Path::new(&config.output_file), &questions)
            .await
            .with_context(|| format!("无法保存结果: {}", config.output_file))?;

        logging::print_session_stats(
            stats.applied,
            stats.rejected,
            issues.len(),
            &config.output_file,
        );

        Ok(stats)
    }
}
