// ==========================================
// 模块化厨房配置系统 - 生产拆单引擎
// ==========================================
// 职责: 模块列表 → 板件清单 + 封边清单 + 聚合工序
//       + 门板工艺清单
// 输入: 已分配的模块列表 (只读)
// 输出: 车间拆单表
// ==========================================
// 说明: 门板工艺行走裁切口径 (宽×门高×厚),
//       与报价引擎的面积口径互不对账
// ==========================================

use crate::domain::module::Module;
use crate::domain::production::{EdgeBand, FacadeTechItem, Operation, Part, ProductionSheet};
use crate::domain::types::FunctionalBucket;
use crate::engine::quantity::resolve_front_counts;
use tracing::{info, instrument};

/// 柜体板厚 (mm)
pub const CORPUS_THICKNESS_MM: f64 = 18.0;
/// 背板厚 (mm)
pub const BACK_THICKNESS_MM: f64 = 4.0;
/// 门板工艺厚 (mm)
pub const FACADE_THICKNESS_MM: f64 = 19.0;
/// 地柜类门板标准高 (柜高 830 对应门高 716)
pub const BASE_FACADE_HEIGHT_MM: f64 = 716.0;

// ==========================================
// ProductionDecomposer - 生产拆单引擎
// ==========================================
pub struct ProductionDecomposer {
    // 无状态引擎,不需要注入依赖
}

impl ProductionDecomposer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 拆单
    ///
    /// 每个模块固定产出: 侧板×2、底板、顶板、层板×N、背板,
    /// 以及每块板前沿长边的封边行;工序跨模块聚合
    #[instrument(skip_all, fields(modules = modules.len()))]
    pub fn decompose(&self, modules: &[Module]) -> ProductionSheet {
        let fronts = resolve_front_counts(modules);

        let mut sheet = ProductionSheet::default();

        let mut edge_front_total_m = 0.0_f64;
        let mut cut90_total = 0_u32;
        let mut drill5_shelf_total = 0_u32;
        let mut drill5_hinge_total = 0_u32;
        let mut cup35_total = 0_u32;
        let mut drawer_op_total = 0_u32;

        for (m, fc) in modules.iter().zip(fronts.iter()) {
            let w = m.width_mm;
            let h = m.resolved_height_mm();
            let d = m.resolved_depth_mm();
            if w <= 0.0 || h <= 0.0 || d <= 0.0 {
                continue;
            }

            let module_ref = format!("{}:{}", m.id, m.bucket);
            let tag = format!("{}:{}×{}×{}", module_ref, w, h, d);

            // 内宽/内深: 底顶层板夹在两侧板之间
            let inner_w = (w - 2.0 * CORPUS_THICKNESS_MM).max(0.0);
            let inner_d = (d - CORPUS_THICKNESS_MM).max(0.0);

            // ===== 门板工艺行 =====
            let facade_h = match m.bucket {
                FunctionalBucket::Upper | FunctionalBucket::Tall => h,
                // 地柜类柜高 830 → 门高 716
                _ => BASE_FACADE_HEIGHT_MM,
            };

            if fc.doors > 0 {
                sheet.facade_items.push(FacadeTechItem {
                    code: "F-MDF".to_string(),
                    name: "门板 (MDF)".to_string(),
                    material: "MDF".to_string(),
                    length_mm: w.round(),
                    height_mm: facade_h.round(),
                    thickness_mm: FACADE_THICKNESS_MM,
                    qty: fc.doors,
                    module_ref: module_ref.clone(),
                    note: "门板".to_string(),
                });
            }
            if fc.drawers > 0 {
                sheet.facade_items.push(FacadeTechItem {
                    code: "F-MDF".to_string(),
                    name: "门板 (MDF)".to_string(),
                    material: "MDF".to_string(),
                    length_mm: w.round(),
                    height_mm: facade_h.round(),
                    thickness_mm: FACADE_THICKNESS_MM,
                    qty: fc.drawers,
                    module_ref: module_ref.clone(),
                    note: "抽面".to_string(),
                });
            }

            // ===== 板件行 =====
            let push_part =
                |sheet: &mut ProductionSheet, code: &str, name: &str, material: &str, l: f64, ww: f64, t: f64, qty: u32| {
                    sheet.parts.push(Part {
                        code: code.to_string(),
                        name: name.to_string(),
                        material: material.to_string(),
                        length_mm: l.round(),
                        width_mm: ww.round(),
                        thickness_mm: t,
                        unit: "件".to_string(),
                        qty,
                        module_ref: module_ref.clone(),
                        note: tag.clone(),
                    });
                };

            push_part(&mut sheet, "SIDE", "侧板", "刨花板 18", h, d, CORPUS_THICKNESS_MM, 2);
            push_part(&mut sheet, "BOTTOM", "底板", "刨花板 18", inner_w, inner_d, CORPUS_THICKNESS_MM, 1);
            push_part(&mut sheet, "TOP", "顶板", "刨花板 18", inner_w, inner_d, CORPUS_THICKNESS_MM, 1);

            // 层板: 显式数量优先,否则按角色/分桶推导
            let shelf_count = match m.shelf_count {
                Some(n) if n > 0 => n,
                _ => self.default_shelf_count(m),
            };

            if shelf_count > 0 {
                let shelf_depth = match m.bucket {
                    FunctionalBucket::Upper => {
                        (FunctionalBucket::Upper.default_depth_mm() - CORPUS_THICKNESS_MM).max(0.0)
                    }
                    _ => (FunctionalBucket::Base.default_depth_mm() - CORPUS_THICKNESS_MM).max(0.0),
                };
                push_part(
                    &mut sheet,
                    "SHELF",
                    "层板",
                    "刨花板 18",
                    inner_w,
                    shelf_depth,
                    CORPUS_THICKNESS_MM,
                    shelf_count,
                );
                // 层板托 Ø5: 每层 4 孔
                drill5_shelf_total += 4 * shelf_count;
            }

            push_part(&mut sheet, "BACK", "背板", "HDF 4", inner_w, h, BACK_THICKNESS_MM, 1);

            // ===== 封边行 (逐板前沿长边) =====
            let mut push_edge = |sheet: &mut ProductionSheet, len_mm: f64, qty: u32, note: &str| {
                if len_mm <= 0.0 || qty == 0 {
                    return;
                }
                sheet.edges.push(EdgeBand {
                    code: "EDGE-FRONT".to_string(),
                    name: "前沿封边".to_string(),
                    material: "PVC".to_string(),
                    length_mm: len_mm.round(),
                    unit: "m".to_string(),
                    qty,
                    module_ref: module_ref.clone(),
                    note: note.to_string(),
                });
                edge_front_total_m += (len_mm / 1000.0) * qty as f64;
            };

            push_edge(&mut sheet, h, 2, "侧板 (前沿)");
            push_edge(&mut sheet, inner_w, 1, "底板 (前沿)");
            push_edge(&mut sheet, inner_w, 1, "顶板 (前沿)");
            if shelf_count > 0 {
                push_edge(&mut sheet, inner_w, shelf_count, "层板 (前沿)");
            }

            // ===== 工序累计 =====
            // 每件板 4 刀 (固定比例)
            let part_count = 2 + 1 + 1 + shelf_count + 1;
            cut90_total += part_count * 4;

            if fc.doors > 0 {
                // 铰链杯孔 Ø35: 每门 2; 铰链底孔 Ø5: 每门 4
                cup35_total += fc.doors * 2;
                drill5_hinge_total += fc.doors * 4;
            }
            if fc.drawers > 0 {
                drawer_op_total += fc.drawers;
            }
        }

        // ===== 聚合工序行 =====
        let push_op = |sheet: &mut ProductionSheet, code: &str, name: &str, unit: &str, qty: f64, note: &str| {
            if qty > 0.0 {
                sheet.operations.push(Operation {
                    code: code.to_string(),
                    name: name.to_string(),
                    unit: unit.to_string(),
                    qty,
                    note: note.to_string(),
                });
            }
        };

        push_op(&mut sheet, "CUT-90", "90° 裁切", "刀", cut90_total as f64, "每件板 4 刀");
        push_op(
            &mut sheet,
            "EDGE-OP",
            "前沿封边加工",
            "m",
            (edge_front_total_m * 100.0).round() / 100.0,
            "EDGE-FRONT 合计",
        );
        push_op(&mut sheet, "DRILL-5", "Ø5 孔 (层板托)", "孔", drill5_shelf_total as f64, "每层板 4 孔");
        push_op(
            &mut sheet,
            "DRILL-5-HINGE",
            "Ø5 孔 (铰链)",
            "孔",
            drill5_hinge_total as f64,
            "每门 4 孔 (2 铰 × 2 孔)",
        );
        push_op(&mut sheet, "CUP-35", "Ø35 杯孔", "孔", cup35_total as f64, "每门 2 杯孔");
        push_op(&mut sheet, "DRAWER-OP", "抽屉安装工序", "次", drawer_op_total as f64, "每抽 1 次");

        info!(
            parts = sheet.parts.len(),
            edges = sheet.edges.len(),
            operations = sheet.operations.len(),
            facade_items = sheet.facade_items.len(),
            "拆单完成"
        );

        sheet
    }

    /// 层板默认数量: 柜内被设备占用的角色不配层板;
    /// 吊柜 1 层,高柜 3 层,地柜类 1 层
    fn default_shelf_count(&self, m: &Module) -> u32 {
        if m.role.shelves_excluded() {
            return 0;
        }
        match m.bucket {
            FunctionalBucket::Upper => 1,
            FunctionalBucket::Tall => 3,
            _ => 1,
        }
    }
}

impl Default for ProductionDecomposer {
    fn default() -> Self {
        Self::new()
    }
}
