mod api;
mod app;
mod config;

use anyhow::{Context, Result};
use app::notify::ConsoleNotifier;
use config::AppConfig;
use serde_json::Value;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    app::logger::init();

    let app_config = AppConfig::load()?;
    info!("上传地址: {}", app_config.endpoint);

    // 读取模板文件
    let raw = tokio::fs::read_to_string(&app_config.template_path)
        .await
        .with_context(|| format!("无法读取模板文件: {}", app_config.template_path))?;
    let template: Value = serde_json::from_str(&raw)
        .with_context(|| format!("模板文件不是合法的 JSON: {}", app_config.template_path))?;

    match api::store_template(
        &template,
        app_config.extra_headers(),
        &app_config.endpoint,
        &ConsoleNotifier,
    )
    .await
    {
        Some(resp) => info!("模板保存完成: {}", resp),
        None => warn!("模板未保存"),
    }

    Ok(())
}
