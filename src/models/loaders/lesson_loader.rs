use crate::error::{AppError, AppResult, FileError};
use crate::models::question::Question;
use std::path::Path;
use tokio::fs;

/// 从 JSON 字符串解析课程中的题目列表
pub fn parse_lesson(content: &str, source_name: &str) -> AppResult<Vec<Question>> {
    serde_json::from_str(content).map_err(|e| AppError::json_parse_failed(source_name, e))
}

/// 从 JSON 文件加载题目列表
pub async fn load_lesson_file(path: &Path) -> AppResult<Vec<Question>> {
    let path_str = path.display().to_string();

    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(FileError::NotFound { path: path_str }.into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let questions = parse_lesson(&content, &path_str)?;
    tracing::info!(
        "成功加载 {} 道题目: {}",
        questions.len(),
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(questions)
}

/// 将题目列表写回 JSON 文件
pub async fn save_lesson_file(path: &Path, questions: &[Question]) -> AppResult<()> {
    let path_str = path.display().to_string();
    let content = serde_json::to_string_pretty(questions)
        .map_err(|e| AppError::json_parse_failed(&path_str, e))?;

    fs::write(path, content)
        .await
        .map_err(|e| AppError::file_write_failed(&path_str, e))?;

    tracing::info!("已保存 {} 道题目到 {}", questions.len(), path_str);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lesson_reports_source_name() {
        let err = parse_lesson("[{\"problemTypes\": 3}]", "lesson.json").unwrap_err();
        assert!(err.to_string().contains("lesson.json"));
    }

    #[test]
    fn test_parse_empty_lesson() {
        assert!(parse_lesson("[]", "inline").unwrap().is_empty());
    }
}
