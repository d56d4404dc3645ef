pub mod logger;
pub mod notify;
