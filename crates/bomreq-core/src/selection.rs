//! 訂單行模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{BomError, CatalogSet, Product, ProductKind, Result};

/// 訂單行（一筆已加入工作清單的成品訂購）
///
/// 建立後不就地修改；移除或清空皆以整列替換。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// 訂單行ID
    pub id: Uuid,

    /// 產品代碼
    pub code: String,

    /// 產品名稱
    pub name: String,

    /// 訂購數量（恆大於 0）
    pub quantity: Decimal,

    /// 成品計量單位
    pub unit: String,

    /// 產品類型
    pub kind: ProductKind,
}

impl Selection {
    /// 由目錄產品建立訂單行
    ///
    /// 數量必須大於 0，否則訂單行不會被建立。
    pub fn from_product(product: &Product, quantity: Decimal, kind: ProductKind) -> Result<Self> {
        if quantity <= Decimal::ZERO {
            return Err(BomError::InvalidQuantity(quantity));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            code: product.code.clone(),
            name: product.name.clone(),
            quantity,
            unit: product.unit.clone(),
            kind,
        })
    }
}

/// 工作清單（呼叫端持有的訂單行列表）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSheet {
    /// 訂單行（依加入順序）
    lines: Vec<Selection>,
}

impl OrderSheet {
    /// 創建空工作清單
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// 加入一筆訂單行
    ///
    /// 在對應類型的目錄解析代碼；查無代碼時不加入且不視為錯誤
    /// （既定策略），回傳 `Ok(None)`。成功加入時回傳新行的 ID。
    pub fn add_line(
        &mut self,
        catalogs: &CatalogSet,
        code: &str,
        quantity: Decimal,
        kind: ProductKind,
    ) -> Result<Option<Uuid>> {
        if quantity <= Decimal::ZERO {
            return Err(BomError::InvalidQuantity(quantity));
        }

        let product = match catalogs.resolve(kind, code) {
            Some(product) => product,
            None => return Ok(None),
        };

        let line = Selection::from_product(product, quantity, kind)?;
        let id = line.id;
        self.lines.push(line);
        Ok(Some(id))
    }

    /// 移除指定 ID 的訂單行
    pub fn remove_line(&mut self, id: Uuid) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() < before
    }

    /// 清空全部訂單行
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// 取得全部訂單行（依加入順序）
    pub fn lines(&self) -> &[Selection] {
        &self.lines
    }

    /// 訂單行筆數
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// 工作清單是否為空
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Component};

    fn sample_catalogs() -> CatalogSet {
        let production = Catalog::from_products(vec![Product::new(
            "PRD-101".to_string(),
            "金桔檸檬汁 1L".to_string(),
            "瓶".to_string(),
        )
        .with_component(Component::new(
            "RM-SUG".to_string(),
            "砂糖".to_string(),
            Decimal::new(19, 1),
            "袋".to_string(),
        ))])
        .unwrap();

        let packaging = Catalog::from_products(vec![Product::new(
            "PKG-501".to_string(),
            "1L 果汁裝箱（12 入）".to_string(),
            "箱".to_string(),
        )])
        .unwrap();

        CatalogSet::new(production, packaging)
    }

    #[test]
    fn test_add_line() {
        let catalogs = sample_catalogs();
        let mut sheet = OrderSheet::new();

        let id = sheet
            .add_line(&catalogs, "PRD-101", Decimal::from(2000), ProductKind::Production)
            .unwrap();

        assert!(id.is_some());
        assert_eq!(sheet.len(), 1);

        let line = &sheet.lines()[0];
        // 名稱與單位取自目錄產品
        assert_eq!(line.name, "金桔檸檬汁 1L");
        assert_eq!(line.unit, "瓶");
        assert_eq!(line.quantity, Decimal::from(2000));
        assert_eq!(line.kind, ProductKind::Production);
    }

    #[test]
    fn test_add_line_rejects_non_positive_quantity() {
        let catalogs = sample_catalogs();
        let mut sheet = OrderSheet::new();

        let zero = sheet.add_line(&catalogs, "PRD-101", Decimal::ZERO, ProductKind::Production);
        assert!(matches!(zero, Err(BomError::InvalidQuantity(_))));

        let negative =
            sheet.add_line(&catalogs, "PRD-101", Decimal::from(-5), ProductKind::Production);
        assert!(matches!(negative, Err(BomError::InvalidQuantity(_))));

        assert!(sheet.is_empty());
    }

    #[test]
    fn test_add_line_unknown_code_skipped() {
        let catalogs = sample_catalogs();
        let mut sheet = OrderSheet::new();

        // 查無代碼不是錯誤，僅不加入
        let result = sheet
            .add_line(&catalogs, "PRD-999", Decimal::from(100), ProductKind::Production)
            .unwrap();

        assert!(result.is_none());
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_add_line_kind_must_match_catalog() {
        let catalogs = sample_catalogs();
        let mut sheet = OrderSheet::new();

        // 包裝代碼在生產目錄下不可解析
        let result = sheet
            .add_line(&catalogs, "PKG-501", Decimal::from(10), ProductKind::Production)
            .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_remove_line_and_clear() {
        let catalogs = sample_catalogs();
        let mut sheet = OrderSheet::new();

        let first = sheet
            .add_line(&catalogs, "PRD-101", Decimal::from(1000), ProductKind::Production)
            .unwrap()
            .unwrap();
        sheet
            .add_line(&catalogs, "PKG-501", Decimal::from(50), ProductKind::Packaging)
            .unwrap()
            .unwrap();

        assert!(sheet.remove_line(first));
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.lines()[0].code, "PKG-501");

        // 同一 ID 再移除一次無效果
        assert!(!sheet.remove_line(first));

        sheet.clear();
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_repeated_product_keeps_separate_lines() {
        let catalogs = sample_catalogs();
        let mut sheet = OrderSheet::new();

        let a = sheet
            .add_line(&catalogs, "PRD-101", Decimal::from(1000), ProductKind::Production)
            .unwrap()
            .unwrap();
        let b = sheet
            .add_line(&catalogs, "PRD-101", Decimal::from(500), ProductKind::Production)
            .unwrap()
            .unwrap();

        // 重複加入同一產品是預期行為，各自成行
        assert_ne!(a, b);
        assert_eq!(sheet.len(), 2);
    }
}
