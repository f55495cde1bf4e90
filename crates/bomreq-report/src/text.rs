//! 文字報表輸出

use std::path::Path;

use bomreq_calc::{AggregatedRequirement, RequirementTotals};
use bomreq_core::{Result, Selection};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// 報表輸出器
pub struct ReportWriter;

impl ReportWriter {
    /// 產生報表文字
    ///
    /// 版面：標題與時間戳、訂購清單、合計區塊、編號的原料需求明細。
    /// 合計與公斤取 2 位小數、用量取 3 位小數。
    pub fn render(
        selections: &[Selection],
        requirements: &[AggregatedRequirement],
        totals: &RequirementTotals,
        generated_at: NaiveDateTime,
    ) -> String {
        // BOM 前綴讓試算表/記事本正確辨識 UTF-8
        let mut txt = String::from("\u{feff}");
        txt.push_str("原料需求計算報表\n");
        txt.push_str(&format!(
            "日期: {}\n",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        txt.push_str("==========================================\n");

        txt.push_str("訂購產品:\n");
        for line in selections {
            txt.push_str(&format!(
                "  - {} [{}]: {} {}\n",
                line.name, line.code, line.quantity, line.unit
            ));
        }

        txt.push_str("\n合計:\n");
        txt.push_str(&format!("  - 總重量: {:.2} 公斤\n", totals.total_weight_kg));
        txt.push_str(&format!("  - 總單位數: {:.2}\n", totals.total_units));

        txt.push_str("\n原料需求明細:\n");
        txt.push_str("------------------------------------------\n");
        for (index, requirement) in requirements.iter().enumerate() {
            txt.push_str(&format!("{}. {}\n", index + 1, requirement.name));
            txt.push_str(&format!(
                "   數量: {:.3} {}",
                requirement.total_quantity, requirement.unit
            ));
            if requirement.total_kg > Decimal::ZERO {
                txt.push_str(&format!(" ({:.2} 公斤)", requirement.total_kg));
            }
            txt.push('\n');
        }

        txt
    }

    /// 輸出報表到檔案（以當下時間為時間戳）
    pub fn save_to_file(
        path: &Path,
        selections: &[Selection],
        requirements: &[AggregatedRequirement],
        totals: &RequirementTotals,
    ) -> Result<()> {
        let generated_at = chrono::Local::now().naive_local();
        let txt = Self::render(selections, requirements, totals, generated_at);
        std::fs::write(path, txt)?;
        Ok(())
    }
}
