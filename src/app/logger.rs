use tracing_subscriber::{
    EnvFilter, Registry, fmt::layer, layer::Layer, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// RUST_LOG 优先，未设置时使用 `default_level`
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// 统一的输出格式：文件、行号、线程 ID，不打印 target
fn fmt_layer(for_test: bool) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false);
    if for_test {
        layer.with_test_writer().boxed()
    } else {
        layer.boxed()
    }
}

pub fn init() {
    tracing_subscriber::registry()
        .with(fmt_layer(false))
        .with(env_filter("info"))
        .init();
}

/// 测试用日志，多个测试重复调用时忽略已初始化的错误
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(fmt_layer(true))
        .with(env_filter("debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_is_idempotent() {
        init_test();
        init_test();
        tracing::debug!("logger ready");
    }
}
