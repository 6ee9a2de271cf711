use anyhow::Result;
use question_authoring::utils::logging;
use question_authoring::{Config, EditSession};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：优先使用 QA_CONFIG 指定的 TOML 文件
    let config = match std::env::var("QA_CONFIG") {
        Ok(path) => Config::from_toml_file(std::path::Path::new(&path))?,
        Err(_) => Config::from_env()?,
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    EditSession::new(config).run().await?;

    Ok(())
}
