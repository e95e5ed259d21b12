// ==========================================
// 模块化厨房配置系统 - 拆单表导出
// ==========================================
// 职责: 拆单结果 → 分号分隔 CSV (固定表头,车间用)
// ==========================================

use crate::domain::production::ProductionSheet;
use csv::WriterBuilder;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 固定表头 (车间侧解析依赖列顺序)
pub const PRODUCTION_CSV_HEADER: [&str; 11] = [
    "Group", "Code", "Name", "Material", "L_mm", "W_mm", "T_mm", "Unit", "Qty", "Module", "Note",
];

// ==========================================
// 导出错误
// ==========================================
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 写出失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("缓冲区回收失败: {0}")]
    Buffer(String),
}

/// 无尾零的数值列格式
fn fmt_num(v: f64) -> String {
    format!("{}", v)
}

/// 拆单结果序列化为 CSV 文本
///
/// 行序: DETAILS → EDGES → OPERATIONS → FACADES,
/// 与拆单表内各清单的生成顺序一致
pub fn production_sheet_to_csv(sheet: &ProductionSheet) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(Vec::new());

    writer.write_record(PRODUCTION_CSV_HEADER)?;

    for p in &sheet.parts {
        writer.write_record([
            "DETAILS".to_string(),
            p.code.clone(),
            p.name.clone(),
            p.material.clone(),
            fmt_num(p.length_mm),
            fmt_num(p.width_mm),
            fmt_num(p.thickness_mm),
            p.unit.clone(),
            p.qty.to_string(),
            p.module_ref.clone(),
            p.note.clone(),
        ])?;
    }

    for e in &sheet.edges {
        writer.write_record([
            "EDGES".to_string(),
            e.code.clone(),
            e.name.clone(),
            e.material.clone(),
            fmt_num(e.length_mm),
            String::new(),
            String::new(),
            e.unit.clone(),
            e.qty.to_string(),
            e.module_ref.clone(),
            e.note.clone(),
        ])?;
    }

    for o in &sheet.operations {
        writer.write_record([
            "OPERATIONS".to_string(),
            o.code.clone(),
            o.name.clone(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            o.unit.clone(),
            fmt_num(o.qty),
            "ALL".to_string(),
            o.note.clone(),
        ])?;
    }

    for f in &sheet.facade_items {
        writer.write_record([
            "FACADES".to_string(),
            f.code.clone(),
            f.name.clone(),
            f.material.clone(),
            fmt_num(f.length_mm),
            fmt_num(f.height_mm),
            fmt_num(f.thickness_mm),
            "件".to_string(),
            f.qty.to_string(),
            f.module_ref.clone(),
            f.note.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

/// 拆单结果写出到文件
pub fn write_production_csv(sheet: &ProductionSheet, path: &Path) -> Result<(), ExportError> {
    let csv = production_sheet_to_csv(sheet)?;
    std::fs::write(path, csv)?;
    info!(path = %path.display(), "拆单 CSV 已写出");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::module::Module;
    use crate::domain::types::{FunctionalBucket, ModuleRole};
    use crate::production::decomposer::ProductionDecomposer;

    fn sample_sheet() -> ProductionSheet {
        let modules = vec![Module::new(
            "A_BASE_1",
            FunctionalBucket::Base,
            ModuleRole::Base,
            600.0,
            "地柜 600",
        )];
        ProductionDecomposer::new().decompose(&modules)
    }

    #[test]
    fn test_csv_header_and_row_counts() {
        let sheet = sample_sheet();
        let csv = production_sheet_to_csv(&sheet).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Group;Code;Name;Material;L_mm;W_mm;T_mm;Unit;Qty;Module;Note"
        );
        let expected_rows = 1
            + sheet.parts.len()
            + sheet.edges.len()
            + sheet.operations.len()
            + sheet.facade_items.len();
        assert_eq!(lines.len(), expected_rows);
    }

    #[test]
    fn test_csv_detail_row_shape() {
        let sheet = sample_sheet();
        let csv = production_sheet_to_csv(&sheet).unwrap();
        let first_detail = csv.lines().nth(1).unwrap();

        assert!(first_detail.starts_with("DETAILS;SIDE;"));
        assert_eq!(first_detail.split(';').count(), 11);
        assert!(first_detail.contains(";830;560;18;"));
    }

    #[test]
    fn test_empty_sheet_exports_header_only() {
        let csv = production_sheet_to_csv(&ProductionSheet::default()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
