//! 方案 YAML 載入
//!
//! 頂層鍵：`unit`（選填字串）與 `supplies_per_sample`（必要映射）。

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde_yaml::Value;
use supply_core::{ProtocolSpec, Result, SupplyError};

/// 從檔案載入實驗方案
pub fn load_protocol(path: impl AsRef<Path>) -> Result<ProtocolSpec> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SupplyError::FileAccess {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_protocol(&text, &path.display().to_string())
}

/// 解析方案 YAML
///
/// `supplies_per_sample` 的鍵順序即 serde_yaml Mapping 的插入順序，
/// 原樣保留到 `ProtocolSpec` 中。缺少該映射視為格式錯誤。
pub fn parse_protocol(text: &str, file: &str) -> Result<ProtocolSpec> {
    let doc: Value = serde_yaml::from_str(text).map_err(|e| SupplyError::MalformedYaml {
        file: file.to_string(),
        message: e.to_string(),
    })?;

    // unit 選填；缺漏或非字串時以空字串代替（僅供顯示）
    let unit = doc
        .get("unit")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let supplies = doc
        .get("supplies_per_sample")
        .and_then(Value::as_mapping)
        .ok_or_else(|| SupplyError::MissingSupplies {
            file: file.to_string(),
        })?;

    let mut protocol = ProtocolSpec::new(unit);
    for (key, value) in supplies {
        let item = key.as_str().ok_or_else(|| SupplyError::MalformedYaml {
            file: file.to_string(),
            message: "supplies_per_sample 的鍵必須是字串".to_string(),
        })?;

        let qty = decimal_from_yaml(value).ok_or_else(|| SupplyError::InvalidQuantity {
            file: file.to_string(),
            item: item.to_string(),
        })?;

        protocol = protocol.with_supply(item, qty);
    }

    Ok(protocol)
}

fn decimal_from_yaml(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            if let Some(i) = number.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = number.as_u64() {
                Some(Decimal::from(u))
            } else {
                number.as_f64().and_then(|f| Decimal::try_from(f).ok())
            }
        }
        _ => None,
    }
}
