//! 內建資料集（食品廠示範目錄與重量表）
//!
//! 生產配方以每 1000 成品為基準，包裝配方以每 1 成品為基準。
//! 以袋/桶計數的原料在重量表登錄每單位公斤數；
//! 以公斤計數的原料不登錄，套用預設重量 1。

use bomreq_core::{Catalog, CatalogSet, Component, Product, Result, WeightTable};
use rust_decimal::Decimal;

/// 內建產品目錄（生產 + 包裝）
pub fn default_catalogs() -> Result<CatalogSet> {
    let production = Catalog::from_products(vec![
        Product::new(
            "PRD-101".to_string(),
            "金桔檸檬汁 1L".to_string(),
            "瓶".to_string(),
        )
        .with_components(vec![
            Component::new(
                "RM-SUG".to_string(),
                "砂糖".to_string(),
                Decimal::new(19, 1),
                "袋".to_string(),
            ),
            Component::new(
                "RM-KUM".to_string(),
                "金桔原汁".to_string(),
                Decimal::from(120),
                "公斤".to_string(),
            ),
            Component::new(
                "RM-ACD".to_string(),
                "檸檬酸".to_string(),
                Decimal::new(15, 1),
                "公斤".to_string(),
            ),
        ]),
        Product::new(
            "PRD-102".to_string(),
            "芒果汁 1L".to_string(),
            "瓶".to_string(),
        )
        .with_components(vec![
            Component::new(
                "RM-SUG".to_string(),
                "砂糖".to_string(),
                Decimal::new(16, 1),
                "袋".to_string(),
            ),
            Component::new(
                "RM-MGO".to_string(),
                "芒果原漿".to_string(),
                Decimal::from(150),
                "公斤".to_string(),
            ),
            Component::new(
                "RM-ACD".to_string(),
                "檸檬酸".to_string(),
                Decimal::new(12, 1),
                "公斤".to_string(),
            ),
        ]),
        Product::new(
            "PRD-201".to_string(),
            "草莓果醬 450g".to_string(),
            "罐".to_string(),
        )
        .with_components(vec![
            Component::new(
                "RM-SUG".to_string(),
                "砂糖".to_string(),
                Decimal::from(6),
                "袋".to_string(),
            ),
            Component::new(
                "RM-SBR".to_string(),
                "草莓果粒".to_string(),
                Decimal::from(200),
                "公斤".to_string(),
            ),
            Component::new(
                "RM-PEC".to_string(),
                "果膠".to_string(),
                Decimal::from(4),
                "公斤".to_string(),
            ),
        ]),
        Product::new(
            "PRD-301".to_string(),
            "蘇打餅乾".to_string(),
            "箱".to_string(),
        )
        .with_components(vec![
            Component::new(
                "RM-FLR".to_string(),
                "麵粉".to_string(),
                Decimal::new(216, 1),
                "袋".to_string(),
            ),
            Component::new(
                "RM-OIL".to_string(),
                "棕櫚油".to_string(),
                Decimal::new(6, 1),
                "桶".to_string(),
            ),
            Component::new(
                "RM-SLT".to_string(),
                "精鹽".to_string(),
                Decimal::from(9),
                "公斤".to_string(),
            ),
        ]),
    ])?;

    let packaging = Catalog::from_products(vec![
        Product::new(
            "PKG-501".to_string(),
            "1L 果汁裝箱（12 入）".to_string(),
            "箱".to_string(),
        )
        .with_components(vec![
            Component::new(
                "PM-BTL".to_string(),
                "1L PET 瓶".to_string(),
                Decimal::from(12),
                "個".to_string(),
            ),
            Component::new(
                "PM-CAP".to_string(),
                "瓶蓋".to_string(),
                Decimal::from(12),
                "個".to_string(),
            ),
            Component::new(
                "PM-LBL".to_string(),
                "標籤".to_string(),
                Decimal::from(12),
                "張".to_string(),
            ),
            Component::new(
                "PM-CTN".to_string(),
                "瓦楞紙箱".to_string(),
                Decimal::from(1),
                "個".to_string(),
            ),
        ]),
        Product::new(
            "PKG-502".to_string(),
            "450g 果醬裝箱（24 入）".to_string(),
            "箱".to_string(),
        )
        .with_components(vec![
            Component::new(
                "PM-JAR".to_string(),
                "450g 玻璃罐".to_string(),
                Decimal::from(24),
                "個".to_string(),
            ),
            Component::new(
                "PM-LID".to_string(),
                "金屬旋蓋".to_string(),
                Decimal::from(24),
                "個".to_string(),
            ),
            Component::new(
                "PM-CTN".to_string(),
                "瓦楞紙箱".to_string(),
                Decimal::from(1),
                "個".to_string(),
            ),
        ]),
        Product::new(
            "PKG-503".to_string(),
            "餅乾禮盒".to_string(),
            "盒".to_string(),
        )
        .with_components(vec![
            Component::new(
                "PM-TRY".to_string(),
                "內襯托盤".to_string(),
                Decimal::from(4),
                "個".to_string(),
            ),
            Component::new(
                "PM-BOX".to_string(),
                "彩印紙盒".to_string(),
                Decimal::from(1),
                "個".to_string(),
            ),
            Component::new(
                "PM-FLM".to_string(),
                "收縮膜".to_string(),
                Decimal::new(8, 2),
                "公斤".to_string(),
            ),
        ]),
    ])?;

    Ok(CatalogSet::new(production, packaging))
}

/// 內建參考重量表（每單位公斤數）
pub fn default_weights() -> WeightTable {
    WeightTable::from_entries(vec![
        ("RM-SUG".to_string(), Decimal::from(50)),
        ("RM-FLR".to_string(), Decimal::from(25)),
        ("RM-OIL".to_string(), Decimal::from(180)),
        ("PM-BTL".to_string(), Decimal::new(3, 2)),
        ("PM-CAP".to_string(), Decimal::new(3, 3)),
        ("PM-LBL".to_string(), Decimal::new(1, 3)),
        ("PM-CTN".to_string(), Decimal::new(45, 2)),
        ("PM-JAR".to_string(), Decimal::new(22, 2)),
        ("PM-LID".to_string(), Decimal::new(12, 3)),
        ("PM-TRY".to_string(), Decimal::new(5, 2)),
        ("PM-BOX".to_string(), Decimal::new(12, 2)),
    ])
}
