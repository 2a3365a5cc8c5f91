//! 庫存 CSV 載入
//!
//! 欄位：`Item, Unit, Stock Quantity, Reorder Threshold`。
//! 檔案一次讀完，離開作用域即釋放；解析失敗也不例外。

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use supply_core::{InventoryMap, InventoryRecord, Result, SupplyError};

const COL_ITEM: &str = "Item";
const COL_UNIT: &str = "Unit";
const COL_STOCK: &str = "Stock Quantity";
const COL_THRESHOLD: &str = "Reorder Threshold";

/// 從檔案載入庫存快照
pub fn load_inventory(path: impl AsRef<Path>) -> Result<InventoryMap> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SupplyError::FileAccess {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_inventory(file, &path.display().to_string())
}

/// 解析庫存 CSV 為品項映射
///
/// 品項名稱去除前後空白後作為鍵；重複品項以後出現者為準。
/// csv crate 會自動剝除開頭的 UTF-8 BOM。
pub fn parse_inventory(reader: impl Read, file: &str) -> Result<InventoryMap> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| SupplyError::MalformedCsv {
            file: file.to_string(),
            row: 1,
            message: e.to_string(),
        })?
        .clone();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| SupplyError::MissingColumn {
                file: file.to_string(),
                column: name.to_string(),
            })
    };

    let item_idx = column(COL_ITEM)?;
    let unit_idx = column(COL_UNIT)?;
    let stock_idx = column(COL_STOCK)?;
    let threshold_idx = column(COL_THRESHOLD)?;

    let mut inventory = InventoryMap::new();

    for (i, record) in csv_reader.records().enumerate() {
        // 表頭佔第 1 列，資料列從第 2 列起算
        let row = i + 2;

        let record = record.map_err(|e| SupplyError::MalformedCsv {
            file: file.to_string(),
            row,
            message: e.to_string(),
        })?;

        let field = |idx: usize| record.get(idx).unwrap_or("");

        let parse_decimal = |idx: usize, column: &str| -> Result<Decimal> {
            let value = field(idx);
            value
                .trim()
                .parse::<Decimal>()
                .map_err(|_| SupplyError::InvalidNumber {
                    file: file.to_string(),
                    row,
                    column: column.to_string(),
                    value: value.to_string(),
                })
        };

        let item = field(item_idx).trim().to_string();
        let unit = field(unit_idx).trim().to_string();
        let stock = parse_decimal(stock_idx, COL_STOCK)?;
        let threshold = parse_decimal(threshold_idx, COL_THRESHOLD)?;

        // 重複品項：後者覆蓋前者
        inventory.insert(item.clone(), InventoryRecord::new(item, unit, stock, threshold));
    }

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = "\
Item,Unit,Stock Quantity,Reorder Threshold
Swab,pcs,30,5
Buffer ML,ml,250.5,60
";

    #[test]
    fn test_parse_inventory() {
        let inventory = parse_inventory(SAMPLE.as_bytes(), "inventory.csv").unwrap();

        assert_eq!(inventory.len(), 2);
        let swab = &inventory["Swab"];
        assert_eq!(swab.unit, "pcs");
        assert_eq!(swab.stock, Decimal::from(30));
        assert_eq!(swab.threshold, Decimal::from(5));
        assert_eq!(inventory["Buffer ML"].stock, "250.5".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_utf8_bom_tolerated() {
        let mut data = Vec::from(&b"\xef\xbb\xbf"[..]);
        data.extend_from_slice(SAMPLE.as_bytes());

        let inventory = parse_inventory(data.as_slice(), "inventory.csv").unwrap();

        assert!(inventory.contains_key("Swab"));
    }

    #[test]
    fn test_item_names_trimmed() {
        let data = "\
Item,Unit,Stock Quantity,Reorder Threshold
  Swab  , pcs ,30,5
";
        let inventory = parse_inventory(data.as_bytes(), "inventory.csv").unwrap();

        let swab = &inventory["Swab"];
        assert_eq!(swab.item, "Swab");
        assert_eq!(swab.unit, "pcs");
    }

    #[test]
    fn test_duplicate_item_last_wins() {
        let data = "\
Item,Unit,Stock Quantity,Reorder Threshold
Swab,pcs,30,5
Swab,pcs,12,5
";
        let inventory = parse_inventory(data.as_bytes(), "inventory.csv").unwrap();

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory["Swab"].stock, Decimal::from(12));
    }

    #[test]
    fn test_invalid_number_names_row_and_column() {
        let data = "\
Item,Unit,Stock Quantity,Reorder Threshold
Swab,pcs,thirty,5
";
        let err = parse_inventory(data.as_bytes(), "inventory.csv").unwrap_err();

        match err {
            SupplyError::InvalidNumber { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, COL_STOCK);
                assert_eq!(value, "thirty");
            }
            other => panic!("預期 InvalidNumber，實際為 {other:?}"),
        }
    }

    #[test]
    fn test_missing_column() {
        let data = "\
Item,Unit,Stock Quantity
Swab,pcs,30
";
        let err = parse_inventory(data.as_bytes(), "inventory.csv").unwrap_err();

        assert!(matches!(
            err,
            SupplyError::MissingColumn { ref column, .. } if column == COL_THRESHOLD
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_inventory("no/such/inventory.csv").unwrap_err();

        assert!(matches!(err, SupplyError::FileAccess { .. }));
    }

    proptest! {
        /// 任意合法資料列都能解析回等值記錄
        #[test]
        fn prop_roundtrip_rows(
            item in "[A-Za-z][A-Za-z ]{0,18}[A-Za-z]",
            stock in 0u32..100_000,
            threshold in 0u32..10_000,
        ) {
            let data = format!(
                "Item,Unit,Stock Quantity,Reorder Threshold\n{item},pcs,{stock},{threshold}\n"
            );

            let inventory = parse_inventory(data.as_bytes(), "inventory.csv").unwrap();
            let record = &inventory[item.trim()];

            prop_assert_eq!(record.stock, Decimal::from(stock));
            prop_assert_eq!(record.threshold, Decimal::from(threshold));
        }
    }
}
