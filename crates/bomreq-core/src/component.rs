//! 配方行模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 配方行（產品配方中的單一原料用量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// 原料代碼
    pub code: String,

    /// 原料名稱
    pub name: String,

    /// 用量比率（生產品：每 1000 成品；包裝品：每 1 成品）
    pub ratio: Decimal,

    /// 計量單位
    pub unit: String,
}

impl Component {
    /// 創建新的配方行
    pub fn new(code: String, name: String, ratio: Decimal, unit: String) -> Self {
        Self {
            code,
            name,
            ratio,
            unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_component() {
        let component = Component::new(
            "RM-SUG".to_string(),
            "砂糖".to_string(),
            Decimal::new(19, 1),
            "袋".to_string(),
        );

        assert_eq!(component.code, "RM-SUG");
        assert_eq!(component.ratio, Decimal::new(19, 1));
        assert_eq!(component.unit, "袋");
    }
}
