//! # Supply IO
//!
//! 檔案載入層（庫存 CSV 與方案 YAML）

pub mod inventory_csv;
pub mod protocol_yaml;

// Re-export 主要類型
pub use inventory_csv::{load_inventory, parse_inventory};
pub use protocol_yaml::{load_protocol, parse_protocol};
