//! # BomReq Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod component;
pub mod product;
pub mod selection;
pub mod weight;

// Re-export 主要類型
pub use catalog::{Catalog, CatalogSet};
pub use component::Component;
pub use product::{Product, ProductKind, PRODUCTION_BATCH_SIZE};
pub use selection::{OrderSheet, Selection};
pub use weight::WeightTable;

/// 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum BomError {
    #[error("無效的訂購數量: {0}（必須大於 0）")]
    InvalidQuantity(rust_decimal::Decimal),

    #[error("產品代碼重複: {0}")]
    DuplicateProduct(String),

    #[error("目錄鍵與產品代碼不一致: 鍵 {key}, 代碼 {code}")]
    CodeMismatch { key: String, code: String },

    #[error("資料解析錯誤: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO 錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BomError>;
