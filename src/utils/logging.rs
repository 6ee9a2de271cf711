//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 `debug` 或 `info`。
/// 重复调用时忽略（测试中会多次调用）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题目编辑日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// 记录会话启动信息
///
/// # 参数
/// - `lesson_file`: 课程文件
/// - `question_count`: 题目数量
/// - `step_count`: 编辑步骤数量
pub fn log_session_start(lesson_file: &str, question_count: usize, step_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 编辑会话启动");
    info!("📁 课程文件: {}", lesson_file);
    info!("📊 题目数量: {} | 编辑步骤: {}", question_count, step_count);
    info!("{}", "=".repeat(60));
}

/// 打印会话统计信息
///
/// # 参数
/// - `applied`: 成功的编辑数
/// - `rejected`: 被拒绝的编辑数
/// - `lint_issues`: 提交前检查发现的问题数
/// - `output_file`: 输出文件路径
pub fn print_session_stats(applied: usize, rejected: usize, lint_issues: usize, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 编辑会话完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", applied, applied + rejected);
    info!("❌ 拒绝: {}", rejected);
    info!("⚠️ 待检查问题: {}", lint_issues);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
