// ==========================================
// 模块化厨房配置系统 - 数量提取引擎
// ==========================================
// 职责: 模块列表 → 板材面积 (按功能分桶) + 五金件数
// 输入: 已分配的模块列表 (只读)
// 输出: 面积汇总 + 五金汇总
// ==========================================
// 红线: 四类汇总必须可由模块列表独立复算,
//       不依赖配置快照 (角色推导表本身是常量)
// ==========================================

use crate::domain::module::Module;
use crate::domain::types::{FunctionalBucket, ModuleRole};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ==========================================
// AreaSummary - 面积汇总 (m²)
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaSummary {
    // ===== 柜体板 =====
    pub corp_sides_m2: f64,
    pub corp_bottom_top_m2: f64,
    pub corp_shelves_m2: f64,
    pub corp_m2: f64,

    // ===== 背板 (薄料,单独累计) =====
    pub back_m2: f64,

    // ===== 门板 (按分桶) =====
    pub facade_base_m2: f64,
    pub facade_upper_m2: f64,
    pub facade_tall_m2: f64,
    pub facade_m2: f64,
    /// 可用玻璃/型材门板的吊柜面积 (剔除烟机吊柜与冰箱列)
    pub facade_glass_eligible_m2: f64,
}

// ==========================================
// HardwareCounts - 五金汇总
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareCounts {
    pub doors: u32,
    pub base_doors: u32,
    pub upper_doors: u32,
    pub tall_doors: u32,
    pub drawers: u32,
    /// 铰链数 = 门数 × 2 (固定比例,不可配置)
    pub hinge_qty: u32,
    /// 短款上翻机构 (吊柜宽 ≤ 600)
    pub lift_hk_qty: u32,
    /// 长款上翻机构 (吊柜宽 > 600)
    pub lift_hf_qty: u32,
    /// true: 件数来自模块显式数量; false: 来自角色推导表
    pub explicit_source: bool,
}

// ==========================================
// QuantitySummary - 数量提取结果
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantitySummary {
    pub areas: AreaSummary,
    pub hardware: HardwareCounts,
}

// ==========================================
// FrontCounts - 单模块门/抽解析结果
// ==========================================
// 数量提取与生产拆单共用同一解析口径
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrontCounts {
    pub doors: u32,
    pub drawers: u32,
}

/// 逐模块解析门/抽数量
///
/// 全局开关: 列表中任一模块带显式数量时,整表走显式口径
/// (未填写的模块视为 0),否则整表走角色推导表
pub fn resolve_front_counts(modules: &[Module]) -> Vec<FrontCounts> {
    let has_explicit = modules.iter().any(|m| m.has_explicit_fronts());

    modules
        .iter()
        .map(|m| {
            if has_explicit {
                FrontCounts {
                    doors: m.door_count.unwrap_or(0),
                    drawers: m.drawer_count.unwrap_or(0),
                }
            } else {
                default_front_counts(m)
            }
        })
        .collect()
}

/// 角色推导表 (常量业务规则)
fn default_front_counts(m: &Module) -> FrontCounts {
    match m.role {
        ModuleRole::Sink
        | ModuleRole::Base
        | ModuleRole::Base450
        | ModuleRole::Cargo300
        | ModuleRole::Corner
        | ModuleRole::Island => FrontCounts { doors: 2, drawers: 0 },
        ModuleRole::Dishwasher | ModuleRole::Fridge => FrontCounts { doors: 1, drawers: 0 },
        ModuleRole::Cooking => FrontCounts { doors: 0, drawers: 3 },
        ModuleRole::Upper | ModuleRole::Hood => FrontCounts {
            doors: if m.width_mm > 600.0 { 2 } else { 1 },
            drawers: 0,
        },
    }
}

// ==========================================
// QuantityExtractor - 数量提取引擎
// ==========================================
pub struct QuantityExtractor {
    // 无状态引擎,不需要注入依赖
}

impl QuantityExtractor {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 提取面积与五金汇总
    pub fn extract(&self, modules: &[Module]) -> QuantitySummary {
        let areas = self.compute_areas(modules);
        let hardware = self.count_hardware(modules);

        debug!(
            corp_m2 = areas.corp_m2,
            facade_m2 = areas.facade_m2,
            doors = hardware.doors,
            drawers = hardware.drawers,
            "数量提取完成"
        );

        QuantitySummary { areas, hardware }
    }

    // ==========================================
    // 面积统计
    // ==========================================

    /// 逐模块累计板材面积
    ///
    /// 柜体板 = 2×(高×深) [侧板] + 2×(宽×深) [底+顶]
    ///        + 层板数×(宽×深) [仅显式层板]
    /// 背板 = 宽×高 (薄料单独口径)
    pub fn compute_areas(&self, modules: &[Module]) -> AreaSummary {
        let mm2 = |a: f64, b: f64| a.max(0.0) * b.max(0.0);
        let to_m2 = |v: f64| v / 1_000_000.0;

        let mut sides_mm2 = 0.0;
        let mut tb_mm2 = 0.0;
        let mut shelves_mm2 = 0.0;
        let mut back_mm2 = 0.0;
        let mut facade_base_mm2 = 0.0;
        let mut facade_upper_mm2 = 0.0;
        let mut facade_tall_mm2 = 0.0;
        let mut glass_eligible_mm2 = 0.0;

        for m in modules {
            let w = m.width_mm.max(0.0);
            let h = m.resolved_height_mm();
            let d = m.resolved_depth_mm();

            sides_mm2 += 2.0 * mm2(h, d);
            tb_mm2 += 2.0 * mm2(w, d);

            let shelves = m.shelf_count.unwrap_or(0);
            if shelves > 0 {
                shelves_mm2 += shelves as f64 * mm2(w, d);
            }

            back_mm2 += mm2(w, h);

            let facade_mm2 = self.facade_area_mm2(m, w, h);
            if facade_mm2 <= 0.0 {
                continue;
            }

            match m.bucket {
                FunctionalBucket::Upper => facade_upper_mm2 += facade_mm2,
                FunctionalBucket::Tall => facade_tall_mm2 += facade_mm2,
                _ => facade_base_mm2 += facade_mm2,
            }

            if m.bucket == FunctionalBucket::Upper
                && m.role != ModuleRole::Hood
                && m.role != ModuleRole::Fridge
            {
                glass_eligible_mm2 += facade_mm2;
            }
        }

        let corp_sides_m2 = to_m2(sides_mm2);
        let corp_bottom_top_m2 = to_m2(tb_mm2);
        let corp_shelves_m2 = to_m2(shelves_mm2);

        AreaSummary {
            corp_sides_m2,
            corp_bottom_top_m2,
            corp_shelves_m2,
            corp_m2: corp_sides_m2 + corp_bottom_top_m2 + corp_shelves_m2,
            back_m2: to_m2(back_mm2),
            facade_base_m2: to_m2(facade_base_mm2),
            facade_upper_m2: to_m2(facade_upper_mm2),
            facade_tall_m2: to_m2(facade_tall_mm2),
            facade_m2: to_m2(facade_base_mm2 + facade_upper_mm2 + facade_tall_mm2),
            facade_glass_eligible_m2: to_m2(glass_eligible_mm2),
        }
    }

    /// 单模块门板面积 (mm²),按优先级解析:
    /// 1) 显式预算面积 → 2) 显式门/抽数量 → 3) 角色默认整面
    fn facade_area_mm2(&self, m: &Module, w: f64, h: f64) -> f64 {
        if let Some(direct) = m.facade_area_m2 {
            if direct > 0.0 {
                return direct * 1_000_000.0;
            }
        }

        if m.has_explicit_fronts() || m.role.has_default_front() {
            return w.max(0.0) * h.max(0.0);
        }
        0.0
    }

    // ==========================================
    // 五金统计
    // ==========================================

    /// 统计门/抽/铰链/上翻机构
    pub fn count_hardware(&self, modules: &[Module]) -> HardwareCounts {
        let fronts = resolve_front_counts(modules);
        let explicit = modules.iter().any(|m| m.has_explicit_fronts());

        let mut counts = HardwareCounts {
            explicit_source: explicit,
            ..HardwareCounts::default()
        };

        for (m, fc) in modules.iter().zip(fronts.iter()) {
            if fc.doors > 0 {
                match m.role {
                    ModuleRole::Upper | ModuleRole::Hood => counts.upper_doors += fc.doors,
                    ModuleRole::Fridge => counts.tall_doors += fc.doors,
                    _ => counts.base_doors += fc.doors,
                }
            }
            counts.drawers += fc.drawers;

            // 上翻机构只配吊柜门: 宽 > 600 用长款,否则短款
            if matches!(m.role, ModuleRole::Upper | ModuleRole::Hood)
                && fc.doors > 0
                && m.width_mm > 0.0
            {
                if m.width_mm > 600.0 {
                    counts.lift_hf_qty += 1;
                } else {
                    counts.lift_hk_qty += 1;
                }
            }
        }

        counts.doors = counts.base_doors + counts.upper_doors + counts.tall_doors;
        counts.hinge_qty = counts.doors * 2;
        counts
    }
}

impl Default for QuantityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(
        id: &str,
        bucket: FunctionalBucket,
        role: ModuleRole,
        width_mm: f64,
    ) -> Module {
        Module::new(id, bucket, role, width_mm, "测试模块")
    }

    #[test]
    fn test_areas_single_base_module() {
        // 600×830×560: 侧板 2×(830×560), 底顶 2×(600×560), 背板 600×830
        let modules = vec![module("A_BASE_1", FunctionalBucket::Base, ModuleRole::Base, 600.0)];
        let areas = QuantityExtractor::new().compute_areas(&modules);

        assert!((areas.corp_sides_m2 - 0.9296).abs() < 1e-9);
        assert!((areas.corp_bottom_top_m2 - 0.672).abs() < 1e-9);
        assert_eq!(areas.corp_shelves_m2, 0.0);
        assert!((areas.back_m2 - 0.498).abs() < 1e-9);
        // 整面门板 = 宽×高
        assert!((areas.facade_base_m2 - 0.498).abs() < 1e-9);
        assert_eq!(areas.facade_glass_eligible_m2, 0.0);
    }

    #[test]
    fn test_cargo_has_no_default_front() {
        let modules = vec![module(
            "A_CAB_300",
            FunctionalBucket::Base,
            ModuleRole::Cargo300,
            300.0,
        )];
        let areas = QuantityExtractor::new().compute_areas(&modules);
        assert_eq!(areas.facade_m2, 0.0);
    }

    #[test]
    fn test_glass_eligibility_excludes_hood_and_fridge() {
        let modules = vec![
            module("U_A_BASE_1", FunctionalBucket::Upper, ModuleRole::Upper, 600.0),
            module("U_A_COOKING", FunctionalBucket::Upper, ModuleRole::Hood, 600.0),
            module("A_FRIDGE", FunctionalBucket::Tall, ModuleRole::Fridge, 600.0),
        ];
        let areas = QuantityExtractor::new().compute_areas(&modules);

        // 仅普通吊柜计入玻璃口径: 600×720
        assert!((areas.facade_glass_eligible_m2 - 0.432).abs() < 1e-9);
        // 烟机吊柜仍计入吊柜门板面积
        assert!((areas.facade_upper_m2 - 0.864).abs() < 1e-9);
        // 冰箱列门板计入高柜口径: 600×2300
        assert!((areas.facade_tall_m2 - 1.38).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_facade_area_wins() {
        let mut m = module("A_BASE_1", FunctionalBucket::Base, ModuleRole::Base, 600.0);
        m.facade_area_m2 = Some(1.25);
        let areas = QuantityExtractor::new().compute_areas(&[m]);
        assert!((areas.facade_base_m2 - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_shelves_add_area() {
        let mut m = module("A_BASE_1", FunctionalBucket::Base, ModuleRole::Base, 600.0);
        m.shelf_count = Some(2);
        let areas = QuantityExtractor::new().compute_areas(&[m]);
        assert!((areas.corp_shelves_m2 - 2.0 * 0.336).abs() < 1e-9);
    }

    #[test]
    fn test_hardware_role_table() {
        let modules = vec![
            module("A_SINK", FunctionalBucket::Base, ModuleRole::Sink, 600.0),
            module("A_COOKING", FunctionalBucket::Base, ModuleRole::Cooking, 600.0),
            module("A_DISHWASHER", FunctionalBucket::Base, ModuleRole::Dishwasher, 600.0),
            module("A_FRIDGE", FunctionalBucket::Tall, ModuleRole::Fridge, 600.0),
            module("U_1", FunctionalBucket::Upper, ModuleRole::Upper, 600.0),
            module("U_2", FunctionalBucket::Upper, ModuleRole::Upper, 900.0),
        ];
        let hw = QuantityExtractor::new().count_hardware(&modules);

        assert!(!hw.explicit_source);
        assert_eq!(hw.base_doors, 2 + 1); // 水槽 2 + 洗碗机 1
        assert_eq!(hw.tall_doors, 1);
        assert_eq!(hw.upper_doors, 1 + 2); // 600 吊柜 1 门, 900 吊柜 2 门
        assert_eq!(hw.drawers, 3);
        assert_eq!(hw.doors, 7);
        assert_eq!(hw.hinge_qty, 14);
        assert_eq!(hw.lift_hk_qty, 1);
        assert_eq!(hw.lift_hf_qty, 1);
    }

    #[test]
    fn test_explicit_counts_disable_role_table_globally() {
        let mut with_counts = module("A_BASE_1", FunctionalBucket::Base, ModuleRole::Base, 600.0);
        with_counts.door_count = Some(1);
        let plain = module("A_BASE_2", FunctionalBucket::Base, ModuleRole::Base, 600.0);

        let hw = QuantityExtractor::new().count_hardware(&[with_counts, plain]);
        assert!(hw.explicit_source);
        // 未填写的模块按 0 计,不再回落角色表
        assert_eq!(hw.doors, 1);
        assert_eq!(hw.hinge_qty, 2);
    }

    #[test]
    fn test_hinge_ratio_is_fixed() {
        let modules = vec![
            module("A_BASE_1", FunctionalBucket::Base, ModuleRole::Base, 600.0),
            module("A_BASE_2", FunctionalBucket::Base, ModuleRole::Base, 600.0),
            module("A_BASE_3", FunctionalBucket::Base, ModuleRole::Base, 600.0),
        ];
        let hw = QuantityExtractor::new().count_hardware(&modules);
        assert_eq!(hw.doors, 6);
        assert_eq!(hw.hinge_qty, 12);
    }
}
