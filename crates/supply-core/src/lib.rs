//! # Supply Core
//!
//! 核心資料模型與類型定義

pub mod inventory;
pub mod protocol;

// Re-export 主要類型
pub use inventory::{InventoryMap, InventoryRecord};
pub use protocol::{ProtocolSpec, SupplyRequirement};

/// 耗材檢查錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SupplyError {
    #[error("無法讀取檔案 {path}: {message}")]
    FileAccess { path: String, message: String },

    #[error("{file} 第 {row} 列的 {column} 欄位無法轉換為數值: {value:?}")]
    InvalidNumber {
        file: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("{file} 缺少必要欄位: {column}")]
    MissingColumn { file: String, column: String },

    #[error("CSV 格式錯誤 ({file} 第 {row} 列): {message}")]
    MalformedCsv {
        file: String,
        row: usize,
        message: String,
    },

    #[error("YAML 格式錯誤 ({file}): {message}")]
    MalformedYaml { file: String, message: String },

    #[error("{file} 缺少 supplies_per_sample 映射")]
    MissingSupplies { file: String },

    #[error("{file} 品項 {item} 的每樣本用量不是數值")]
    InvalidQuantity { file: String, item: String },
}

pub type Result<T> = std::result::Result<T, SupplyError>;
