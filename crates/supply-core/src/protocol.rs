//! 實驗方案模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 方案中的單一耗材需求（每樣本用量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyRequirement {
    /// 品項名稱
    pub item: String,

    /// 每樣本用量
    pub qty_per_sample: Decimal,
}

impl SupplyRequirement {
    /// 創建新的耗材需求
    pub fn new(item: impl Into<String>, qty_per_sample: Decimal) -> Self {
        Self {
            item: item.into(),
            qty_per_sample,
        }
    }
}

/// 實驗方案（每樣本耗材規格）
///
/// 載入後不再變動。`supplies_per_sample` 保留文件中的鍵順序，
/// 報表輸出順序由此決定。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolSpec {
    /// 單位標籤（選填，僅供顯示，計算不使用）
    pub unit: String,

    /// 每樣本耗材清單（依文件順序）
    pub supplies_per_sample: Vec<SupplyRequirement>,
}

impl ProtocolSpec {
    /// 創建新的方案
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            supplies_per_sample: Vec::new(),
        }
    }

    /// 建構器模式：添加耗材需求
    pub fn with_supply(mut self, item: impl Into<String>, qty_per_sample: Decimal) -> Self {
        self.supplies_per_sample
            .push(SupplyRequirement::new(item, qty_per_sample));
        self
    }

    /// 方案中的品項數
    pub fn len(&self) -> usize {
        self.supplies_per_sample.len()
    }

    /// 方案是否為空
    pub fn is_empty(&self) -> bool {
        self.supplies_per_sample.is_empty()
    }
}
