//! 彙總需求模型

use bomreq_core::Component;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 使用明細（單一訂單行對單一原料的貢獻）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// 使用該原料的產品名稱
    pub product_name: String,

    /// 該產品的訂購數量
    pub quantity: Decimal,

    /// 分攤到該原料的用量
    pub amount: Decimal,

    /// 原料計量單位
    pub unit: String,
}

/// 彙總需求（單一原料跨全部訂單行的總需求）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRequirement {
    /// 原料代碼
    pub code: String,

    /// 原料名稱
    pub name: String,

    /// 原料計量單位
    pub unit: String,

    /// 總用量（原料單位）
    pub total_quantity: Decimal,

    /// 每單位參考重量（公斤）
    pub package_weight: Decimal,

    /// 總重量（公斤）
    pub total_kg: Decimal,

    /// 使用明細（依貢獻順序，重複訂單行各自成筆）
    pub used_in: Vec<UsageRecord>,
}

impl AggregatedRequirement {
    /// 創建新的彙總需求（累計值歸零）
    pub fn new(component: &Component, package_weight: Decimal) -> Self {
        Self {
            code: component.code.clone(),
            name: component.name.clone(),
            unit: component.unit.clone(),
            total_quantity: Decimal::ZERO,
            package_weight,
            total_kg: Decimal::ZERO,
            used_in: Vec::new(),
        }
    }

    /// 累計一筆用量並附加使用明細
    pub fn accumulate(&mut self, amount: Decimal, usage: UsageRecord) {
        self.total_quantity += amount;
        self.total_kg += amount * self.package_weight;
        self.used_in.push(usage);
    }
}

/// 彙總合計（報表的總計區塊）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementTotals {
    /// 總重量（公斤）
    pub total_weight_kg: Decimal,

    /// 總單位數
    pub total_units: Decimal,
}

impl RequirementTotals {
    /// 計算一組彙總需求的合計
    pub fn of(requirements: &[AggregatedRequirement]) -> Self {
        Self {
            total_weight_kg: requirements.iter().map(|r| r.total_kg).sum(),
            total_units: requirements.iter().map(|r| r.total_quantity).sum(),
        }
    }
}
