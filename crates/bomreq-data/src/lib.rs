//! # BomReq Data
//!
//! 內建靜態資料集（行程啟動時載入一次，之後唯讀）

pub mod builtin;

// Re-export 主要類型
pub use builtin::{default_catalogs, default_weights};
