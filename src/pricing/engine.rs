// ==========================================
// 模块化厨房配置系统 - 报价引擎
// ==========================================
// 职责: 面积/件数 × 档位预设 × 人工覆写 → 分项报价单
// 输入: 配置快照 + 模块列表 (均只读)
// 输出: BOM 行 + 汇总
// ==========================================
// 红线: 缺价回落预设,绝不静默取零,绝不报错;
//       所有乘数上游已钳制 ≥ 0,金额不可能为负
// ==========================================

use crate::domain::bom::{BomLine, FxSource, HardwareMode};
use crate::domain::config::KitchenConfig;
use crate::domain::module::Module;
use crate::domain::types::{
    FunctionalBucket, HardwarePackage, LayoutShape, LedMode, MaterialTier, ModuleRole,
};
use crate::engine::quantity::{HardwareCounts, QuantityExtractor};
use crate::pricing::fx::resolve_eur_rate;
use crate::pricing::presets::{
    self, hardware_coef, preset_for, sheet_area_m2, ANTRESOL_SERVICE_BOOST, SERVICES_PCT_MAX,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ==========================================
// ResolvedPricing - 解析后的计价参数
// ==========================================
// 覆写优先于预设;服务比例在此处已含顶柜附加与钳制
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPricing {
    pub tier: MaterialTier,
    pub package: HardwarePackage,
    pub has_antresol: bool,

    pub corp_sheet_price: f64,
    pub corp_waste: f64,

    pub facade_m2_price_econom: f64,
    pub facade_m2_price_standard: f64,
    pub facade_m2_price_premium: f64,
    pub facade_m2_price_glass_profile: f64,
    pub facade_waste: f64,

    pub back_sheet_price: f64,
    pub back_waste: f64,

    pub top_on: bool,
    pub top_per_m: f64,
    pub top_depth_mm: f64,

    pub bsp_on: bool,
    pub bsp_per_m2: f64,
    pub bsp_height_mm: f64,

    pub services_pct: f64,
    pub hardware_pct: f64,
    pub hardware_coef: f64,

    pub led_under_per_m: f64,
    pub led_profile_per_m: f64,
    pub led_smart_per_m: f64,
}

// ==========================================
// PriceTotals - 报价汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTotals {
    pub corp_cost: f64,
    pub corp_sheets_eq: f64,
    pub back_cost: f64,
    pub back_sheets_eq: f64,

    pub facade_cost: f64,
    pub facade_glass_need_m2: f64,
    pub facade_mdf_need_m2: f64,
    pub facade_glass_cost: f64,
    pub facade_mdf_cost: f64,

    pub materials_cost: f64,

    pub hardware_cost: f64,
    pub hardware_mode: HardwareMode,
    pub services_cost: f64,
    pub services_pct: f64,

    pub top_cost: f64,
    pub top_len_m: f64,
    pub bsp_cost: f64,
    pub bsp_m2: f64,

    pub led_mode: LedMode,
    pub led_len_m: f64,
    pub led_cost: f64,

    pub grand: f64,

    pub eur_rate: f64,
    pub fx_source: FxSource,
    pub hardware: HardwareCounts,
}

// ==========================================
// PriceResult - 报价结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub bom: Vec<BomLine>,
    pub totals: PriceTotals,
}

impl PriceResult {
    /// 报价单行金额之和 (应与 grand 一致,仅有展示取整差)
    pub fn bom_amount_sum(&self) -> f64 {
        self.bom.iter().map(|l| l.amount).sum()
    }
}

// ==========================================
// PricingEngine - 报价引擎
// ==========================================
pub struct PricingEngine {
    extractor: QuantityExtractor,
}

impl PricingEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            extractor: QuantityExtractor::new(),
        }
    }

    // ==========================================
    // 参数解析
    // ==========================================

    /// 解析计价参数: 覆写优先,缺项回落档位预设
    pub fn resolve_params(&self, cfg: &KitchenConfig) -> ResolvedPricing {
        let preset = preset_for(cfg.material_tier);
        let ov = &cfg.overrides;

        // 服务比例: 覆写即终价;无覆写时预设 + 顶柜附加,最后统一钳制
        let services_base = match ov.services_pct {
            Some(pct) => pct,
            None => {
                let mut pct = preset.services_pct;
                if cfg.has_antresol {
                    pct += ANTRESOL_SERVICE_BOOST;
                }
                pct
            }
        };
        let services_pct = services_base.clamp(0.0, SERVICES_PCT_MAX);

        ResolvedPricing {
            tier: cfg.material_tier,
            package: cfg.hardware_package,
            has_antresol: cfg.has_antresol,

            corp_sheet_price: ov.corp_sheet_price.unwrap_or(preset.corp_sheet_price),
            corp_waste: ov.corp_waste.unwrap_or(preset.corp_waste).max(1.0),

            facade_m2_price_econom: ov
                .facade_m2_price_econom
                .unwrap_or(preset.facade_m2_price_econom),
            facade_m2_price_standard: ov
                .facade_m2_price_standard
                .or(ov.facade_m2_price)
                .unwrap_or(preset.facade_m2_price_standard),
            facade_m2_price_premium: ov
                .facade_m2_price_premium
                .unwrap_or(preset.facade_m2_price_premium),
            facade_m2_price_glass_profile: ov
                .facade_m2_price_glass_profile
                .unwrap_or(preset.facade_m2_price_glass_profile),
            facade_waste: ov.facade_waste.unwrap_or(preset.facade_waste).max(1.0),

            back_sheet_price: ov.back_sheet_price.unwrap_or(preset.back_sheet_price),
            back_waste: ov.back_waste.unwrap_or(preset.back_waste).max(1.0),

            top_on: ov.top_on.unwrap_or(preset.top_on),
            top_per_m: ov.top_per_m.unwrap_or(preset.top_per_m),
            top_depth_mm: ov.top_depth_mm.unwrap_or(preset.top_depth_mm),

            bsp_on: ov.bsp_on.unwrap_or(preset.bsp_on),
            bsp_per_m2: ov.bsp_per_m2.unwrap_or(preset.bsp_per_m2),
            bsp_height_mm: ov.bsp_height_mm.unwrap_or(preset.bsp_height_mm),

            services_pct,
            hardware_pct: ov.hardware_pct.unwrap_or(0.0).max(0.0),
            hardware_coef: ov
                .hardware_coef
                .unwrap_or_else(|| hardware_coef(cfg.hardware_package)),

            led_under_per_m: ov.led_under_per_m.unwrap_or(preset.led_under_per_m),
            led_profile_per_m: ov.led_profile_per_m.unwrap_or(preset.led_profile_per_m),
            led_smart_per_m: ov.led_smart_per_m.unwrap_or(preset.led_smart_per_m),
        }
    }

    /// 台面/挡水的计价线长 (mm)
    ///
    /// 口径: 布局占用的墙线长度之和,选冰箱列时扣 600
    /// (冰箱列脚下无台面)
    pub fn countertop_run_mm(&self, cfg: &KitchenConfig) -> f64 {
        let d = &cfg.dims;
        let mut run = match cfg.layout {
            LayoutShape::Straight => d.a_mm,
            LayoutShape::CornerL => d.a_mm + d.b_mm,
            LayoutShape::UShaped => d.a_mm + d.b_mm + d.effective_c_mm(),
            LayoutShape::Island => {
                // 岛台布局的基础形态由次墙长度决定
                if d.b_mm >= 1200.0 {
                    d.a_mm + d.b_mm
                } else {
                    d.a_mm
                }
            }
        };
        if cfg.appliances.fridge {
            run -= 600.0;
        }
        run.max(0.0)
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算完整报价单
    #[instrument(skip_all, fields(tier = %cfg.material_tier, package = %cfg.hardware_package))]
    pub fn price(&self, cfg: &KitchenConfig, modules: &[Module]) -> PriceResult {
        let q = self.extractor.extract(modules);
        let areas = q.areas;
        let hw = q.hardware;
        let p = self.resolve_params(cfg);
        let (eur_rate, fx_source) = resolve_eur_rate(&cfg.fx);

        // ===== 柜体 =====
        let corp_need_m2 = areas.corp_m2 * p.corp_waste;
        let corp_sheets_eq = corp_need_m2 / sheet_area_m2();
        let corp_cost = corp_sheets_eq * p.corp_sheet_price;

        // ===== 门板: 玻璃/MDF 双口径 =====
        let mdf_price_per_m2 = match p.tier {
            MaterialTier::Econom => p.facade_m2_price_econom,
            MaterialTier::Standard => p.facade_m2_price_standard,
            MaterialTier::Premium => p.facade_m2_price_premium,
        };
        let mdf_label = match p.tier {
            MaterialTier::Econom => "门板 (覆膜MDF)",
            MaterialTier::Standard => "门板 (烤漆MDF)",
            MaterialTier::Premium => "门板 (AGT / Cleaf)",
        };

        let glass_raw_m2 = if cfg.glass_profile_facade {
            areas.facade_glass_eligible_m2
        } else {
            0.0
        };
        let mdf_raw_m2 = (areas.facade_m2 - glass_raw_m2).max(0.0);

        let facade_glass_need_m2 = glass_raw_m2 * p.facade_waste;
        let facade_mdf_need_m2 = mdf_raw_m2 * p.facade_waste;

        let facade_glass_cost = facade_glass_need_m2 * p.facade_m2_price_glass_profile;
        let facade_mdf_cost = facade_mdf_need_m2 * mdf_price_per_m2;
        let facade_cost = facade_glass_cost + facade_mdf_cost;

        // ===== 背板 =====
        let back_need_m2 = areas.back_m2 * p.back_waste;
        let back_sheets_eq = back_need_m2 / sheet_area_m2();
        let back_cost = back_sheets_eq * p.back_sheet_price;

        let materials_cost = corp_cost + facade_cost + back_cost;

        // ===== 五金: 三种互斥模式 =====
        let hinge_set = presets::BLUM_STANDARD.hinge_set * eur_rate;
        let drawer_set = presets::BLUM_STANDARD.drawer_set * eur_rate;
        let lift_hk_set = presets::BLUM_STANDARD.lift_hk_set * eur_rate;
        let lift_hf_set = presets::BLUM_STANDARD.lift_hf_set * eur_rate;

        let std_hardware_cost = hw.hinge_qty as f64 * hinge_set
            + hw.drawers as f64 * drawer_set
            + hw.lift_hk_qty as f64 * lift_hk_set
            + hw.lift_hf_qty as f64 * lift_hf_set;

        let (hardware_cost, hardware_mode) = if p.package == HardwarePackage::Standard {
            (std_hardware_cost, HardwareMode::Standard)
        } else if p.hardware_pct > 0.0 {
            (materials_cost * p.hardware_pct, HardwareMode::Percentage)
        } else {
            (std_hardware_cost * p.hardware_coef, HardwareMode::Coefficient)
        };

        // ===== 服务 (服务比例已含顶柜附加与钳制) =====
        let services_cost = materials_cost * p.services_pct;

        // ===== 台面 / 挡水 =====
        let top_len_m = self.countertop_run_mm(cfg) / 1000.0;
        let top_cost = if p.top_on { top_len_m * p.top_per_m } else { 0.0 };

        let bsp_m2 = top_len_m * (p.bsp_height_mm / 1000.0);
        let bsp_cost = if p.bsp_on { bsp_m2 * p.bsp_per_m2 } else { 0.0 };

        // ===== LED =====
        // 吊柜计价线长: 剔除烟机吊柜与冰箱列 (两者同样不可用玻璃门)
        let upper_run_mm: f64 = modules
            .iter()
            .filter(|m| {
                m.bucket == FunctionalBucket::Upper
                    && m.role != ModuleRole::Hood
                    && m.role != ModuleRole::Fridge
                    && m.width_mm > 0.0
            })
            .map(|m| m.width_mm)
            .sum();
        let upper_run_m = upper_run_mm / 1000.0;

        let (led_len_m, led_per_m, led_name) = match cfg.led_mode {
            LedMode::Under => (upper_run_m, p.led_under_per_m, "LED 灯带 (吊柜底部)"),
            LedMode::Profile => {
                // 型材灯带只随玻璃/型材门板出现
                let len = if cfg.glass_profile_facade { upper_run_m } else { 0.0 };
                (len, p.led_profile_per_m, "LED 灯带 (型材/玻璃柜)")
            }
            LedMode::Smart => (upper_run_m, p.led_smart_per_m, "LED 灯带 (智能场景)"),
            LedMode::None => (0.0, 0.0, "LED"),
        };
        let led_cost = led_len_m.max(0.0) * led_per_m.max(0.0);

        let grand =
            materials_cost + hardware_cost + services_cost + top_cost + bsp_cost + led_cost;

        debug!(
            materials = materials_cost,
            hardware = hardware_cost,
            services = services_cost,
            grand,
            "报价分项计算完成"
        );

        // ===== 报价单行 =====
        let mut bom = vec![
            BomLine::new("CORP-CHIP", "柜体 (刨花板)", "张", corp_sheets_eq, corp_cost),
            BomLine::new("BACK", "背板 (HDF)", "张", back_sheets_eq, back_cost),
        ];

        if cfg.glass_profile_facade {
            bom.push(BomLine::new(
                "FACADE_GLASS",
                "门板 (玻璃+型材)",
                "m²",
                facade_glass_need_m2,
                facade_glass_cost,
            ));
            bom.push(BomLine::new(
                "FACADE_MDF",
                mdf_label,
                "m²",
                facade_mdf_need_m2,
                facade_mdf_cost,
            ));
        } else {
            bom.push(BomLine::new(
                "FACADE",
                mdf_label,
                "m²",
                facade_mdf_need_m2,
                facade_mdf_cost,
            ));
        }

        bom.push(BomLine::new(
            "WORKTOP",
            "台面",
            "m",
            if p.top_on { top_len_m } else { 0.0 },
            top_cost,
        ));
        bom.push(BomLine::new(
            "BACKSPL",
            "挡水墙板",
            "m²",
            if p.bsp_on { bsp_m2 } else { 0.0 },
            bsp_cost,
        ));
        bom.push(BomLine::new("LED", led_name, "m", led_len_m, led_cost));

        let hardware_name = match (p.package, hardware_mode) {
            (HardwarePackage::Standard, _) => format!(
                "五金 (BLUM Standard: 铰链 {} / 抽屉 {} / AVENTOS HK {} HF {})",
                hw.hinge_qty, hw.drawers, hw.lift_hk_qty, hw.lift_hf_qty
            ),
            (HardwarePackage::Econom, HardwareMode::Coefficient) => {
                format!("五金 (Müller 系: ~×{:.2} 对标 Standard)", p.hardware_coef)
            }
            (HardwarePackage::Econom, _) => "五金 (Müller 系)".to_string(),
            (HardwarePackage::Premium, HardwareMode::Coefficient) => {
                format!("五金 (BLUM Premium: ~×{:.2} 对标 Standard)", p.hardware_coef)
            }
            (HardwarePackage::Premium, _) => "五金 (Premium)".to_string(),
        };
        let (hardware_unit, hardware_qty) = if hardware_mode == HardwareMode::Percentage {
            ("%".to_string(), (p.hardware_pct * 100.0).round())
        } else {
            (
                "套".to_string(),
                (hw.hinge_qty + hw.drawers + hw.lift_hk_qty + hw.lift_hf_qty) as f64,
            )
        };
        bom.push(BomLine::new(
            "HARDWARE",
            hardware_name,
            hardware_unit,
            hardware_qty,
            hardware_cost,
        ));

        let services_label = (p.services_pct * 100.0).round();
        let services_name = if p.has_antresol {
            format!("安装与服务 ({}%, 含顶柜加高)", services_label)
        } else {
            format!("安装与服务 ({}%)", services_label)
        };
        bom.push(BomLine::new(
            "SERV",
            services_name,
            "%",
            p.services_pct,
            services_cost,
        ));

        info!(grand, bom_lines = bom.len(), "报价单生成完成");

        PriceResult {
            bom,
            totals: PriceTotals {
                corp_cost,
                corp_sheets_eq,
                back_cost,
                back_sheets_eq,
                facade_cost,
                facade_glass_need_m2,
                facade_mdf_need_m2,
                facade_glass_cost,
                facade_mdf_cost,
                materials_cost,
                hardware_cost,
                hardware_mode,
                services_cost,
                services_pct: p.services_pct,
                top_cost,
                top_len_m,
                bsp_cost,
                bsp_m2,
                led_mode: cfg.led_mode,
                led_len_m,
                led_cost,
                grand,
                eur_rate,
                fx_source,
                hardware: hw,
            },
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{Appliances, RunLengths};

    fn base_module(id: &str) -> Module {
        Module::new(id, FunctionalBucket::Base, ModuleRole::Base, 600.0, "地柜 600")
    }

    fn upper_module(id: &str, w: f64) -> Module {
        Module::new(id, FunctionalBucket::Upper, ModuleRole::Upper, w, "吊柜")
    }

    fn cfg_with(tier: MaterialTier, pkg: HardwarePackage) -> KitchenConfig {
        KitchenConfig {
            material_tier: tier,
            hardware_package: pkg,
            ..KitchenConfig::default()
        }
    }

    #[test]
    fn test_standard_hardware_exact_pricing() {
        // 显式 6 门 2 抽 → 铰链 12, 精确逐件计价
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Standard);
        cfg.fx.manual_eur = Some(50.0);

        let mut m1 = base_module("A_BASE_1");
        m1.door_count = Some(6);
        let mut m2 = base_module("A_BASE_2");
        m2.drawer_count = Some(2);

        let result = PricingEngine::new().price(&cfg, &[m1, m2]);
        let t = &result.totals;

        assert_eq!(t.hardware.hinge_qty, 12);
        assert_eq!(t.hardware_mode, HardwareMode::Standard);
        let expected = 12.0 * 3.57 * 50.0 + 2.0 * 77.43 * 50.0;
        assert!((t.hardware_cost - expected).abs() < 1e-6);
    }

    #[test]
    fn test_grand_equals_bom_sum() {
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Standard);
        cfg.dims = RunLengths {
            a_mm: 2700.0,
            ..RunLengths::default()
        };
        cfg.appliances = Appliances {
            fridge: true,
            ..Appliances::default()
        };
        cfg.led_mode = LedMode::Under;

        let modules = vec![
            base_module("A_BASE_1"),
            base_module("A_BASE_2"),
            upper_module("U_A_BASE_1", 600.0),
            upper_module("U_A_BASE_2", 900.0),
        ];

        let result = PricingEngine::new().price(&cfg, &modules);
        assert!((result.totals.grand - result.bom_amount_sum()).abs() < 1e-6);
        // 构造上不可能出现负金额
        assert!(result.bom.iter().all(|l| l.amount >= 0.0));
    }

    #[test]
    fn test_antresol_boost_without_override() {
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Standard);
        cfg.has_antresol = true;

        let p = PricingEngine::new().resolve_params(&cfg);
        assert!((p.services_pct - 0.48).abs() < 1e-9);
    }

    #[test]
    fn test_antresol_skipped_when_override_present() {
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Standard);
        cfg.has_antresol = true;
        cfg.overrides.services_pct = Some(0.30);

        let p = PricingEngine::new().resolve_params(&cfg);
        assert!((p.services_pct - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_services_pct_clamped() {
        let mut cfg = cfg_with(MaterialTier::Premium, HardwarePackage::Standard);
        cfg.overrides.services_pct = Some(1.5);
        let p = PricingEngine::new().resolve_params(&cfg);
        assert_eq!(p.services_pct, 0.9);

        cfg.overrides.services_pct = Some(-0.2);
        let p = PricingEngine::new().resolve_params(&cfg);
        assert_eq!(p.services_pct, 0.0);
    }

    #[test]
    fn test_coefficient_mode_for_premium() {
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Premium);
        cfg.fx.manual_eur = Some(50.0);

        let modules = vec![base_module("A_BASE_1")]; // 角色表: 2 门 → 4 铰链
        let result = PricingEngine::new().price(&cfg, &modules);
        let t = &result.totals;

        assert_eq!(t.hardware_mode, HardwareMode::Coefficient);
        let std_cost = 4.0 * 3.57 * 50.0;
        assert!((t.hardware_cost - std_cost * 1.65).abs() < 1e-6);
    }

    #[test]
    fn test_percentage_override_mode() {
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Econom);
        cfg.overrides.hardware_pct = Some(0.12);

        let modules = vec![base_module("A_BASE_1")];
        let result = PricingEngine::new().price(&cfg, &modules);
        let t = &result.totals;

        assert_eq!(t.hardware_mode, HardwareMode::Percentage);
        assert!((t.hardware_cost - t.materials_cost * 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_countertop_run_subtracts_fridge_column() {
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Standard);
        cfg.layout = LayoutShape::CornerL;
        cfg.dims = RunLengths {
            a_mm: 2400.0,
            b_mm: 1800.0,
            ..RunLengths::default()
        };
        cfg.appliances.fridge = true;

        let engine = PricingEngine::new();
        assert_eq!(engine.countertop_run_mm(&cfg), 3600.0);

        cfg.appliances.fridge = false;
        assert_eq!(engine.countertop_run_mm(&cfg), 4200.0);
    }

    #[test]
    fn test_led_under_uses_upper_run() {
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Standard);
        cfg.led_mode = LedMode::Under;

        let mut hood = upper_module("U_A_COOKING", 600.0);
        hood.role = ModuleRole::Hood;
        let modules = vec![
            upper_module("U_1", 600.0),
            upper_module("U_2", 900.0),
            hood, // 烟机吊柜不计入
        ];

        let result = PricingEngine::new().price(&cfg, &modules);
        assert!((result.totals.led_len_m - 1.5).abs() < 1e-9);
        assert!((result.totals.led_cost - 1.5 * 350.0).abs() < 1e-6);
    }

    #[test]
    fn test_led_profile_requires_glass_facade() {
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Standard);
        cfg.led_mode = LedMode::Profile;

        let modules = vec![upper_module("U_1", 600.0)];
        let engine = PricingEngine::new();

        let plain = engine.price(&cfg, &modules);
        assert_eq!(plain.totals.led_cost, 0.0);

        cfg.glass_profile_facade = true;
        let glass = engine.price(&cfg, &modules);
        assert!((glass.totals.led_cost - 0.6 * 650.0).abs() < 1e-6);
    }

    #[test]
    fn test_glass_facade_splits_bom_lines() {
        let mut cfg = cfg_with(MaterialTier::Standard, HardwarePackage::Standard);
        cfg.glass_profile_facade = true;

        let modules = vec![base_module("A_BASE_1"), upper_module("U_1", 600.0)];
        let result = PricingEngine::new().price(&cfg, &modules);

        assert!(result.bom.iter().any(|l| l.code == "FACADE_GLASS"));
        assert!(result.bom.iter().any(|l| l.code == "FACADE_MDF"));
        assert!(result.bom.iter().all(|l| l.code != "FACADE"));

        // 玻璃口径 = 吊柜门板面积, MDF 口径 = 其余
        let glass_need = 0.432 * 1.15;
        assert!((result.totals.facade_glass_need_m2 - glass_need).abs() < 1e-9);
        assert!((result.totals.facade_glass_cost - glass_need * 5400.0).abs() < 1e-6);
    }

    #[test]
    fn test_override_wins_over_preset() {
        let mut cfg = cfg_with(MaterialTier::Econom, HardwarePackage::Standard);
        cfg.overrides.corp_sheet_price = Some(2750.0);
        cfg.overrides.corp_waste = Some(0.5); // 非法损耗钳到 ≥ 1

        let p = PricingEngine::new().resolve_params(&cfg);
        assert_eq!(p.corp_sheet_price, 2750.0);
        assert_eq!(p.corp_waste, 1.0);
        // 未覆写字段仍取预设
        assert_eq!(p.back_sheet_price, 650.0);
    }

    #[test]
    fn test_missing_price_falls_back_to_preset_not_zero() {
        let cfg = cfg_with(MaterialTier::Premium, HardwarePackage::Standard);
        let p = PricingEngine::new().resolve_params(&cfg);
        assert_eq!(p.corp_sheet_price, 3200.0);
        assert_eq!(p.top_per_m, 3500.0);
        assert!(p.facade_m2_price_glass_profile > 0.0);
    }
}
