//! 庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 庫存映射（品項名稱 → 庫存記錄）
///
/// 查不到鍵代表「未知品項」，不等於庫存為零。
pub type InventoryMap = HashMap<String, InventoryRecord>;

/// 庫存記錄（盤點快照中的單一品項）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// 品項名稱（已去除前後空白）
    pub item: String,

    /// 計量單位
    pub unit: String,

    /// 現有庫存
    pub stock: Decimal,

    /// 補貨門檻
    pub threshold: Decimal,
}

impl InventoryRecord {
    /// 創建新的庫存記錄
    pub fn new(
        item: impl Into<String>,
        unit: impl Into<String>,
        stock: Decimal,
        threshold: Decimal,
    ) -> Self {
        Self {
            item: item.into(),
            unit: unit.into(),
            stock,
            threshold,
        }
    }

    /// 檢查現有庫存是否足以覆蓋需求（邊界含等於）
    pub fn covers(&self, required: Decimal) -> bool {
        self.stock >= required
    }

    /// 扣除需求後的預計庫存
    pub fn projected_remaining(&self, required: Decimal) -> Decimal {
        self.stock - required
    }

    /// 檢查扣除需求後是否跌破補貨門檻（嚴格小於）
    ///
    /// 庫存足以覆蓋當前需求時仍可能為 true：預計餘量低於門檻
    /// 就該提前補貨，而不是等到缺料。
    pub fn reorder_needed(&self, required: Decimal) -> bool {
        self.projected_remaining(required) < self.threshold
    }
}
