//! 耗材需求檢查示例

use rust_decimal::Decimal;
use supply_calc::{NeedsCalculator, ReportCalculator};
use supply_core::{InventoryMap, InventoryRecord, ProtocolSpec};

fn main() {
    println!("=== 耗材需求檢查示例 ===");

    // 建立實驗方案（每樣本用量）
    let protocol = ProtocolSpec::new("per_sample")
        .with_supply("Spin Column", Decimal::from(1))
        .with_supply("Buffer ML", "2.5".parse().unwrap())
        .with_supply("Swab", Decimal::from(2))
        .with_supply("Pipette Tip", Decimal::from(4));

    println!("方案品項:");
    for req in &protocol.supplies_per_sample {
        println!("  - {}: 每樣本 {}", req.item, req.qty_per_sample);
    }

    // 建立庫存快照
    let mut inventory = InventoryMap::new();
    for record in [
        InventoryRecord::new("Spin Column", "pcs", Decimal::from(180), Decimal::from(50)),
        InventoryRecord::new("Buffer ML", "ml", Decimal::from(250), Decimal::from(60)),
        InventoryRecord::new("Swab", "pcs", Decimal::from(30), Decimal::from(5)),
    ] {
        inventory.insert(record.item.clone(), record);
    }

    // 計算 12 個樣本的總需求並對照庫存
    let needs = NeedsCalculator::calculate(&protocol, 12);
    let report = ReportCalculator::generate(&needs, &inventory);

    print!("{}", report.render_table());

    if report.needs_attention() {
        println!("\n有品項需要處理（缺料、待補貨或未知品項）");
    } else {
        println!("\n庫存足以覆蓋本批需求");
    }
}
