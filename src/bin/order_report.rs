//! 訂單彙總與報表輸出示例

use anyhow::Result;
use bomreq::{
    default_catalogs, default_weights, OrderSheet, ProductKind, ReportWriter,
    RequirementCalculator, RequirementTotals,
};
use rust_decimal::Decimal;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let catalogs = default_catalogs()?;
    let weights = default_weights();

    // 建立工作清單
    let mut sheet = OrderSheet::new();
    sheet.add_line(
        &catalogs,
        "PRD-102",
        Decimal::from(2000),
        ProductKind::Production,
    )?;
    sheet.add_line(
        &catalogs,
        "PRD-101",
        Decimal::from(1000),
        ProductKind::Production,
    )?;
    sheet.add_line(
        &catalogs,
        "PKG-501",
        Decimal::from(50),
        ProductKind::Packaging,
    )?;

    // 彙總計算
    let calculator = RequirementCalculator::new(catalogs, weights);
    let requirements = calculator.aggregate(sheet.lines());
    let totals = RequirementTotals::of(&requirements);

    // 輸出報表
    let report = ReportWriter::render(
        sheet.lines(),
        &requirements,
        &totals,
        chrono::Local::now().naive_local(),
    );
    println!("{}", report);

    Ok(())
}
