// ==========================================
// 模块化厨房配置系统 - 命令行入口
// ==========================================
// 用途: 打开配置存储 → 载入快照 → 全量重算
//       → 打印布局与报价单,可选导出拆单 CSV
// 说明: UI 壳由宿主承担,此入口仅作演算与排障
// ==========================================

use kitchen_configurator::engine::orchestrator::ConfiguratorPipeline;
use kitchen_configurator::export::write_production_csv;
use kitchen_configurator::logging;
use kitchen_configurator::store::config_store::{default_store_path, ConfigStore};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", kitchen_configurator::APP_NAME);
    tracing::info!("系统版本: {}", kitchen_configurator::VERSION);
    tracing::info!("==================================================");

    // 参数: [--db <path>] [--export <csv path>]
    let mut db_path: Option<PathBuf> = None;
    let mut export_path: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--db" => db_path = args.next().map(PathBuf::from),
            "--export" => export_path = args.next().map(PathBuf::from),
            other => {
                anyhow::bail!("未知参数: {} (支持 --db <path> / --export <path>)", other)
            }
        }
    }

    let db_path = db_path.unwrap_or_else(default_store_path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::info!("使用配置存储: {}", db_path.display());

    let store = ConfigStore::open(&db_path.to_string_lossy())?;
    let cfg = store.load_config()?;

    let result = ConfiguratorPipeline::new().recompute(&cfg);

    // ===== 布局 =====
    println!("布局: {}", cfg.layout);
    for run in &result.layout.runs {
        println!(
            "  墙线 {}: 长 {}mm, 占用 {}mm, 剩余 {}mm — {}",
            run.key, run.length_mm, run.used_mm, run.remaining_mm, run.note
        );
    }
    if let Some(note) = &result.layout.note {
        println!("  说明: {}", note);
    }
    println!("模块数: {} (吊柜 {})", result.layout.modules.len(), result.layout.upper_count);

    // ===== 报价单 =====
    println!();
    println!("{:<14} {:<42} {:>6} {:>10} {:>12}", "代码", "名称", "单位", "数量", "金额");
    for line in &result.price.bom {
        println!(
            "{:<14} {:<42} {:>6} {:>10.2} {:>12.0}",
            line.code, line.name, line.unit, line.quantity, line.amount
        );
    }
    println!("合计: {:.0}", result.price.totals.grand);

    // ===== 拆单导出 =====
    if let Some(path) = export_path {
        write_production_csv(&result.production, &path)?;
        println!("拆单 CSV 已导出: {}", path.display());
    }

    Ok(())
}
