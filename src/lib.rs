//! # BomReq
//!
//! 原料需求彙總計算系統：依訂購的成品（生產/包裝）與數量展開配方比率，
//! 按原料彙總總用量，以參考重量表換算公斤數，並輸出文字報表。

pub use bomreq_calc::{
    AggregatedRequirement, ProductSearcher, RequirementCalculator, RequirementTotals, SearchHit,
    UsageRecord,
};
pub use bomreq_core::{
    BomError, Catalog, CatalogSet, Component, OrderSheet, Product, ProductKind, Result, Selection,
    WeightTable, PRODUCTION_BATCH_SIZE,
};
pub use bomreq_data::{default_catalogs, default_weights};
pub use bomreq_report::ReportWriter;
