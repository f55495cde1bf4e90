//! 原料需求彙總計算

use std::collections::HashMap;

use bomreq_core::{CatalogSet, Selection, WeightTable};

use crate::requirement::{AggregatedRequirement, UsageRecord};

/// 需求彙總計算器
pub struct RequirementCalculator {
    /// 產品目錄（生產 + 包裝）
    catalogs: CatalogSet,

    /// 參考重量表
    weights: WeightTable,
}

impl RequirementCalculator {
    /// 創建新的需求彙總計算器
    pub fn new(catalogs: CatalogSet, weights: WeightTable) -> Self {
        Self { catalogs, weights }
    }

    /// 主彙總計算入口
    ///
    /// 對固定的訂單行列表而言是純函數：相同輸入必得相同輸出。
    /// 空列表得空結果。
    pub fn aggregate(&self, selections: &[Selection]) -> Vec<AggregatedRequirement> {
        tracing::info!("開始需求彙總：訂單行 {} 筆", selections.len());

        // 彙總條目依首次出現順序保存，另以代碼索引
        let mut entries: Vec<AggregatedRequirement> = Vec::new();
        let mut index_by_code: HashMap<String, usize> = HashMap::new();

        for selection in selections {
            // 依訂單行類型在對應目錄解析產品；查無代碼即略過（既定策略）
            let product = match self.catalogs.resolve(selection.kind, &selection.code) {
                Some(product) => product,
                None => {
                    tracing::debug!("訂單行 {} 查無產品，略過", selection.code);
                    continue;
                }
            };

            for component in &product.components {
                let amount = selection.kind.usage_amount(component.ratio, selection.quantity);

                let idx = match index_by_code.get(&component.code) {
                    Some(&idx) => idx,
                    None => {
                        let weight = self.weights.weight_for(&component.code, &component.name);
                        entries.push(AggregatedRequirement::new(component, weight));
                        index_by_code.insert(component.code.clone(), entries.len() - 1);
                        entries.len() - 1
                    }
                };

                entries[idx].accumulate(
                    amount,
                    UsageRecord {
                        product_name: selection.name.clone(),
                        quantity: selection.quantity,
                        amount,
                        unit: component.unit.clone(),
                    },
                );
            }
        }

        // 依總用量遞減排序；穩定排序讓同值維持首次出現順序
        entries.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));

        tracing::info!("需求彙總完成：原料 {} 項", entries.len());
        entries
    }

    /// 獲取目錄組引用
    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// 獲取重量表引用
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }
}
