use tracing::{error, info};

/// 面向用户的提示（成功 / 失败），由调用方注入
pub trait Notifier {
    fn success(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
}

/// 通过日志输出提示的默认实现
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, title: &str, message: &str) {
        info!("✓ [{}] {}", title, message);
    }

    fn error(&self, title: &str, message: &str) {
        error!("✗ [{}] {}", title, message);
    }
}

#[cfg(test)]
pub mod testing {
    use super::Notifier;
    use std::sync::Mutex;

    /// 记录所有提示调用，供断言使用
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub successes: Mutex<Vec<(String, String)>>,
        pub errors: Mutex<Vec<(String, String)>>,
    }

    impl RecordingNotifier {
        pub fn success_count(&self) -> usize {
            self.successes.lock().unwrap().len()
        }

        pub fn error_count(&self) -> usize {
            self.errors.lock().unwrap().len()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, title: &str, message: &str) {
            self.successes
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
        }

        fn error(&self, title: &str, message: &str) {
            self.errors
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
        }
    }
}
