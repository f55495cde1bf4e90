//! 目錄搜尋示例

use anyhow::Result;
use bomreq::{default_catalogs, ProductKind, ProductSearcher};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "果汁".to_string());
    let catalogs = default_catalogs()?;

    let hits = ProductSearcher::search(&catalogs, &term);
    println!("關鍵字「{}」命中 {} 筆:", term, hits.len());

    for hit in &hits {
        let tag = match hit.source {
            ProductKind::Production => "生產",
            ProductKind::Packaging => "包裝",
        };
        println!(
            "  [{}] {} {}（{} 條配方行）",
            tag,
            hit.product.code,
            hit.product.name,
            hit.product.components.len()
        );
    }

    Ok(())
}
