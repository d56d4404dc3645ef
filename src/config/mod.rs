use anyhow::Context;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// 模板保存接口地址
    pub endpoint: String,
    /// 本地模板 JSON 文件路径
    pub template_path: String,
    /// 追加到请求中的额外请求头
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,
}

impl AppConfig {
    /// application.yaml（可选）+ 环境变量，例如 APP_ENDPOINT、APP_EXTRA_HEADERS__X_TOKEN
    pub fn load() -> anyhow::Result<Self> {
        Self::from_builder(
            Config::builder()
                .add_source(
                    config::File::with_name("application")
                        .format(FileFormat::Yaml)
                        .required(false),
                )
                .add_source(
                    config::Environment::with_prefix("APP")
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        builder
            .build()
            .with_context(|| anyhow::anyhow!("Failed to load config"))?
            .try_deserialize()
            .with_context(|| anyhow::anyhow!("Failed to deserialize config"))
    }

    /// 无额外请求头时返回 None
    pub fn extra_headers(&self) -> Option<&HashMap<String, String>> {
        (!self.extra_headers.is_empty()).then_some(&self.extra_headers)
    }
}
