//! 需求與庫存對照報表

use rust_decimal::Decimal;
use supply_core::InventoryMap;

use crate::needs::ItemNeed;

/// 品項庫存狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// 庫存足以覆蓋需求
    Ok,
    /// 庫存不足
    Low,
    /// 盤點資料中找不到該品項
    Missing,
}

impl StockStatus {
    /// 報表中顯示的狀態代碼
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Ok => "OK",
            StockStatus::Low => "LOW",
            StockStatus::Missing => "MISSING",
        }
    }
}

/// 報表單列
#[derive(Debug, Clone)]
pub struct ReportRow {
    /// 品項名稱
    pub item: String,

    /// 總需求量
    pub required: Decimal,

    /// 現有庫存（品項不在盤點資料中時為 None）
    pub stock: Option<Decimal>,

    /// 計量單位（來自盤點資料）
    pub unit: Option<String>,

    /// 狀態分類
    pub status: StockStatus,

    /// 是否需要補貨（MISSING 時無法判定，為 None）
    pub reorder: Option<bool>,
}

/// 對照報表（依方案順序的報表列）
#[derive(Debug, Clone)]
pub struct SupplyReport {
    /// 報表列
    pub rows: Vec<ReportRow>,
}

impl SupplyReport {
    /// 狀態為 OK 的筆數
    pub fn ok_count(&self) -> usize {
        self.status_count(StockStatus::Ok)
    }

    /// 狀態為 LOW 的筆數
    pub fn low_count(&self) -> usize {
        self.status_count(StockStatus::Low)
    }

    /// 狀態為 MISSING 的筆數
    pub fn missing_count(&self) -> usize {
        self.status_count(StockStatus::Missing)
    }

    fn status_count(&self, status: StockStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }

    /// 是否有任何品項需要處理（缺料、待補貨或未知品項）
    pub fn needs_attention(&self) -> bool {
        self.rows
            .iter()
            .any(|r| r.status != StockStatus::Ok || r.reorder == Some(true))
    }

    /// 渲染為文字表格
    ///
    /// 欄位：Item（30 字元）、Need（8.2）、Stock（8.2，未知顯示 ?）、
    /// Status、Reorder（MISSING 列顯示 ⚠️）。
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!(
            "{:<30} | {:>8} | {:>8} | {:>6} | {}\n",
            "Item", "Need", "Stock", "Status", "Reorder"
        ));
        out.push_str(&"-".repeat(70));
        out.push('\n');

        for row in &self.rows {
            match row.stock {
                Some(stock) => {
                    let reorder_flag = if row.reorder == Some(true) { "YES" } else { "NO" };
                    out.push_str(&format!(
                        "{:<30} | {:>8.2} | {:>8.2} | {:>6} | {}\n",
                        row.item,
                        row.required,
                        stock,
                        row.status.label(),
                        reorder_flag
                    ));
                }
                None => {
                    out.push_str(&format!(
                        "{:<30} | {:>8.2} | {:>8} | {:>6} | {}\n",
                        row.item,
                        row.required,
                        "?",
                        row.status.label(),
                        "⚠️"
                    ));
                }
            }
        }

        out
    }
}

/// 對照報表計算器
pub struct ReportCalculator;

impl ReportCalculator {
    /// 產生對照報表
    ///
    /// 依需求清單順序單趟掃描：
    /// - 品項不在盤點資料中 ⇒ MISSING，該列仍會輸出
    /// - 其餘依庫存覆蓋與否分類 OK / LOW，並以預計餘量對門檻判定補貨
    pub fn generate(needs: &[ItemNeed], inventory: &InventoryMap) -> SupplyReport {
        let mut rows = Vec::with_capacity(needs.len());

        for need in needs {
            let row = match inventory.get(&need.item) {
                None => {
                    tracing::debug!("品項 {} 不在盤點資料中", need.item);
                    ReportRow {
                        item: need.item.clone(),
                        required: need.required,
                        stock: None,
                        unit: None,
                        status: StockStatus::Missing,
                        reorder: None,
                    }
                }
                Some(record) => {
                    let status = if record.covers(need.required) {
                        StockStatus::Ok
                    } else {
                        StockStatus::Low
                    };
                    let reorder = record.reorder_needed(need.required);
                    tracing::debug!(
                        "品項 {}：需求 {}，庫存 {}，狀態 {}",
                        need.item,
                        need.required,
                        record.stock,
                        status.label()
                    );
                    ReportRow {
                        item: need.item.clone(),
                        required: need.required,
                        stock: Some(record.stock),
                        unit: Some(record.unit.clone()),
                        status,
                        reorder: Some(reorder),
                    }
                }
            };
            rows.push(row);
        }

        let report = SupplyReport { rows };
        tracing::info!(
            "對照完成：OK {} 筆，LOW {} 筆，MISSING {} 筆",
            report.ok_count(),
            report.low_count(),
            report.missing_count()
        );

        report
    }
}
