//! 產品目錄模型

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BomError, Product, ProductKind, Result};

/// 產品目錄（以產品代碼為鍵）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// 代碼 → 產品
    products: HashMap<String, Product>,
}

impl Catalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// 從產品列表建立目錄
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product)?;
        }
        Ok(catalog)
    }

    /// 插入產品（代碼必須唯一）
    pub fn insert(&mut self, product: Product) -> Result<()> {
        if self.products.contains_key(&product.code) {
            return Err(BomError::DuplicateProduct(product.code));
        }
        self.products.insert(product.code.clone(), product);
        Ok(())
    }

    /// 依代碼查詢產品（不假定存在）
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// 目錄內產品數量
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// 目錄是否為空
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 走訪全部產品
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// 驗證映射鍵與產品代碼一致（反序列化後使用）
    fn validate(&self) -> Result<()> {
        for (key, product) in &self.products {
            if key != &product.code {
                return Err(BomError::CodeMismatch {
                    key: key.clone(),
                    code: product.code.clone(),
                });
            }
        }
        Ok(())
    }
}

/// 目錄組（生產目錄 + 包裝目錄，兩者互斥）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSet {
    /// 生產品目錄
    pub production: Catalog,

    /// 包裝品目錄
    pub packaging: Catalog,
}

impl CatalogSet {
    /// 創建新的目錄組
    pub fn new(production: Catalog, packaging: Catalog) -> Self {
        Self {
            production,
            packaging,
        }
    }

    /// 取得指定類型的目錄
    pub fn catalog(&self, kind: ProductKind) -> &Catalog {
        match kind {
            ProductKind::Production => &self.production,
            ProductKind::Packaging => &self.packaging,
        }
    }

    /// 依類型與代碼解析產品
    pub fn resolve(&self, kind: ProductKind, code: &str) -> Option<&Product> {
        self.catalog(kind).get(code)
    }

    /// 從 JSON 字串載入目錄組
    pub fn from_json_str(json: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(json)?;
        set.production.validate()?;
        set.packaging.validate()?;
        Ok(set)
    }

    /// 從檔案載入目錄組（行程啟動時載入一次，之後唯讀）
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
