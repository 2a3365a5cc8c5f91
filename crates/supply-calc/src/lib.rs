//! # Supply Calculation Engine
//!
//! 核心需求對照計算引擎

pub mod needs;
pub mod report;

// Re-export 主要類型
pub use needs::{ItemNeed, NeedsCalculator};
pub use report::{ReportCalculator, ReportRow, StockStatus, SupplyReport};
