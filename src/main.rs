//! # Supply Check
//!
//! 依實驗方案與樣本數計算耗材總需求，對照庫存快照並標記補貨狀態。
//!
//! ## Usage
//!
//! ```bash
//! # 以預設路徑計算 24 個樣本的需求
//! supply-check --samples 24
//!
//! # 指定庫存與方案檔案
//! supply-check --samples 24 \
//!     --inventory inventory/inventory.csv \
//!     --protocol protocols/dna_extraction_mn.yaml
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use supply_calc::{NeedsCalculator, ReportCalculator};
use supply_io::{load_inventory, load_protocol};

#[derive(Parser, Debug)]
#[command(name = "supply-check")]
#[command(about = "依實驗方案與樣本數對照庫存，計算耗材需求與補貨狀態")]
#[command(version)]
struct Args {
    /// 樣本數
    #[arg(short, long)]
    samples: u32,

    /// 庫存 CSV 路徑
    #[arg(short, long, default_value = "inventory/inventory.csv")]
    inventory: PathBuf,

    /// 方案 YAML 路徑
    #[arg(short, long, default_value = "protocols/dna_extraction_mn.yaml")]
    protocol: PathBuf,

    /// 顯示詳細日誌
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // 日誌走 stderr，stdout 留給報表
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let inventory = load_inventory(&args.inventory)
        .with_context(|| format!("載入庫存失敗: {}", args.inventory.display()))?;
    let protocol = load_protocol(&args.protocol)
        .with_context(|| format!("載入方案失敗: {}", args.protocol.display()))?;

    tracing::debug!(
        "方案載入完成：{} 個品項，單位標籤 {:?}",
        protocol.len(),
        protocol.unit
    );

    let needs = NeedsCalculator::calculate(&protocol, args.samples);
    let report = ReportCalculator::generate(&needs, &inventory);

    print!("{}", report.render_table());

    Ok(())
}
