pub mod store_template;
pub use store_template::store_template;
