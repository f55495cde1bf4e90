//! 產品目錄搜尋

use bomreq_core::{Catalog, CatalogSet, Product, ProductKind};
use serde::{Deserialize, Serialize};

/// 搜尋命中（標記來源目錄）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// 命中的產品
    pub product: Product,

    /// 來源目錄類型
    pub source: ProductKind,
}

/// 目錄搜尋器
pub struct ProductSearcher;

impl ProductSearcher {
    /// 以關鍵字搜尋兩個目錄
    ///
    /// 名稱或代碼的子字串比對，區分大小寫；空關鍵字得空結果。
    /// 生產目錄命中在前，目錄內依產品代碼排序。
    pub fn search(catalogs: &CatalogSet, term: &str) -> Vec<SearchHit> {
        if term.is_empty() {
            return Vec::new();
        }

        let mut hits = Vec::new();
        Self::collect(&catalogs.production, ProductKind::Production, term, &mut hits);
        Self::collect(&catalogs.packaging, ProductKind::Packaging, term, &mut hits);
        hits
    }

    fn collect(catalog: &Catalog, source: ProductKind, term: &str, hits: &mut Vec<SearchHit>) {
        let mut matched: Vec<&Product> = catalog
            .products()
            .filter(|p| p.name.contains(term) || p.code.contains(term))
            .collect();
        matched.sort_by(|a, b| a.code.cmp(&b.code));

        for product in matched {
            hits.push(SearchHit {
                product: product.clone(),
                source,
            });
        }
    }
}
