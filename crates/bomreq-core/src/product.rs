//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Component;

/// 生產配方的基準批量（配方比率以每 1000 成品表示）
pub const PRODUCTION_BATCH_SIZE: i64 = 1000;

/// 產品類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    /// 生產品（配方比率以每 1000 成品為基準）
    Production,
    /// 包裝品（配方比率以每 1 成品為基準）
    Packaging,
}

impl ProductKind {
    /// 計算單一配方行分攤的用量
    ///
    /// 生產品配方以每 1000 成品表示，包裝品以每 1 成品表示，
    /// 呼叫端必須提供正確的產品類型，此處不做單位制驗證。
    pub fn usage_amount(&self, ratio: Decimal, quantity: Decimal) -> Decimal {
        match self {
            ProductKind::Production => ratio * (quantity / Decimal::from(PRODUCTION_BATCH_SIZE)),
            ProductKind::Packaging => ratio * quantity,
        }
    }
}

/// 產品（成品與其配方）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品代碼（目錄內唯一鍵）
    pub code: String,

    /// 產品名稱
    pub name: String,

    /// 成品計量單位
    pub unit: String,

    /// 配方行（依配方順序）
    pub components: Vec<Component>,
}

impl Product {
    /// 創建新的產品（空配方）
    pub fn new(code: String, name: String, unit: String) -> Self {
        Self {
            code,
            name,
            unit,
            components: Vec::new(),
        }
    }

    /// 建構器模式：附加一條配方行
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// 建構器模式：設置全部配方行
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }
}
