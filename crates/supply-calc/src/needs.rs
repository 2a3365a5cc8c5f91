//! 總需求計算

use rust_decimal::Decimal;
use supply_core::ProtocolSpec;

/// 單一品項的總需求
#[derive(Debug, Clone, PartialEq)]
pub struct ItemNeed {
    /// 品項名稱
    pub item: String,

    /// 總需求量（每樣本用量 × 樣本數）
    pub required: Decimal,
}

impl ItemNeed {
    /// 創建新的需求記錄
    pub fn new(item: impl Into<String>, required: Decimal) -> Self {
        Self {
            item: item.into(),
            required,
        }
    }
}

/// 總需求計算器
pub struct NeedsCalculator;

impl NeedsCalculator {
    /// 計算總需求
    ///
    /// 對方案中每個品項輸出一筆需求，數量 = 每樣本用量 × 樣本數，
    /// 順序與方案一致。樣本數為 0 時產生全零需求（合法輸入，不是錯誤）。
    pub fn calculate(protocol: &ProtocolSpec, sample_count: u32) -> Vec<ItemNeed> {
        let count = Decimal::from(sample_count);

        protocol
            .supplies_per_sample
            .iter()
            .map(|req| ItemNeed::new(req.item.clone(), req.qty_per_sample * count))
            .collect()
    }
}
