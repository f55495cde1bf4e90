//! 參考重量表

use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Result;

/// 參考重量表（原料 → 每單位公斤數）
///
/// 靜態唯讀；未登錄的原料回退為每單位 1 公斤。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    /// 原料代碼（或名稱）→ 每單位重量（公斤）
    weights: HashMap<String, Decimal>,
}

impl WeightTable {
    /// 創建空重量表
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    /// 從 (鍵, 重量) 列表建立重量表
    pub fn from_entries(entries: Vec<(String, Decimal)>) -> Self {
        Self {
            weights: entries.into_iter().collect(),
        }
    }

    /// 登錄一筆重量
    pub fn insert(&mut self, key: String, weight: Decimal) {
        self.weights.insert(key, weight);
    }

    /// 解析原料的每單位重量
    ///
    /// 先以代碼查詢，再以名稱查詢；查無或登錄值非正時回退為 1。
    pub fn weight_for(&self, code: &str, name: &str) -> Decimal {
        let found = self
            .weights
            .get(code)
            .or_else(|| self.weights.get(name))
            .copied();

        match found {
            Some(weight) if weight > Decimal::ZERO => weight,
            _ => Decimal::ONE,
        }
    }

    /// 依鍵查詢登錄值（不套用回退規則）
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.weights.get(key).copied()
    }

    /// 登錄筆數
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// 重量表是否為空
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// 走訪全部登錄（鍵, 重量）
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Decimal)> {
        self.weights.iter()
    }

    /// 從 JSON 字串載入重量表
    pub fn from_json_str(json: &str) -> Result<Self> {
        let weights: HashMap<String, Decimal> = serde_json::from_str(json)?;
        Ok(Self { weights })
    }

    /// 從檔案載入重量表
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
