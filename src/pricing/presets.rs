// ==========================================
// 模块化厨房配置系统 - 档位预设
// ==========================================
// 职责: 三档材料预设 + 五金基准价 + 通用计价常量
// 说明: 预设是 MissingPriceInput 的兜底来源,
//       缺价一律回落到这里,绝不静默取零
// ==========================================

use crate::domain::types::{HardwarePackage, MaterialTier};

/// 原料板标准幅面 (mm)
pub const SHEET_WIDTH_MM: f64 = 2800.0;
pub const SHEET_HEIGHT_MM: f64 = 2070.0;

/// 标准幅面面积 (m²)
pub fn sheet_area_m2() -> f64 {
    (SHEET_WIDTH_MM * SHEET_HEIGHT_MM) / 1_000_000.0
}

/// 顶柜加高时的服务比例附加
pub const ANTRESOL_SERVICE_BOOST: f64 = 0.10;
/// 服务比例安全上限
pub const SERVICES_PCT_MAX: f64 = 0.9;

// ==========================================
// TierPreset - 档位预设
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierPreset {
    pub corp_sheet_price: f64,
    pub corp_waste: f64,

    // 门板单价按工艺档分列 (与材料档位解耦,四价并存)
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

    pub led_under_per_m: f64,
    pub led_profile_per_m: f64,
    pub led_smart_per_m: f64,
}

const PRESET_ECONOM: TierPreset = TierPreset {
    corp_sheet_price: 2200.0,
    corp_waste: 1.15,
    facade_m2_price_econom: 1900.0,
    facade_m2_price_standard: 2600.0,
    facade_m2_price_premium: 4200.0,
    facade_m2_price_glass_profile: 5400.0,
    facade_waste: 1.15,
    back_sheet_price: 650.0,
    back_waste: 1.05,
    top_on: true,
    top_per_m: 2500.0,
    top_depth_mm: 600.0,
    bsp_on: true,
    bsp_per_m2: 1800.0,
    bsp_height_mm: 600.0,
    services_pct: 0.28,
    led_under_per_m: 350.0,
    led_profile_per_m: 650.0,
    led_smart_per_m: 1200.0,
};

const PRESET_STANDARD: TierPreset = TierPreset {
    corp_sheet_price: 2600.0,
    corp_waste: 1.15,
    facade_m2_price_econom: 1900.0,
    facade_m2_price_standard: 2600.0,
    facade_m2_price_premium: 4200.0,
    facade_m2_price_glass_profile: 5400.0,
    facade_waste: 1.15,
    back_sheet_price: 750.0,
    back_waste: 1.05,
    top_on: true,
    top_per_m: 2800.0,
    top_depth_mm: 600.0,
    bsp_on: true,
    bsp_per_m2: 2100.0,
    bsp_height_mm: 600.0,
    services_pct: 0.38,
    led_under_per_m: 350.0,
    led_profile_per_m: 650.0,
    led_smart_per_m: 1200.0,
};

const PRESET_PREMIUM: TierPreset = TierPreset {
    corp_sheet_price: 3200.0,
    corp_waste: 1.15,
    facade_m2_price_econom: 1900.0,
    facade_m2_price_standard: 2600.0,
    facade_m2_price_premium: 4200.0,
    facade_m2_price_glass_profile: 5400.0,
    facade_waste: 1.15,
    back_sheet_price: 900.0,
    back_waste: 1.05,
    top_on: true,
    top_per_m: 3500.0,
    top_depth_mm: 600.0,
    bsp_on: true,
    bsp_per_m2: 2800.0,
    bsp_height_mm: 600.0,
    services_pct: 0.48,
    led_under_per_m: 350.0,
    led_profile_per_m: 650.0,
    led_smart_per_m: 1200.0,
};

/// 按材料档位取预设
pub fn preset_for(tier: MaterialTier) -> &'static TierPreset {
    match tier {
        MaterialTier::Econom => &PRESET_ECONOM,
        MaterialTier::Standard => &PRESET_STANDARD,
        MaterialTier::Premium => &PRESET_PREMIUM,
    }
}

// ==========================================
// 五金基准价 (BLUM Standard, EUR)
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct HardwareRefPricesEur {
    pub hinge_set: f64,
    pub drawer_set: f64,
    pub lift_hk_set: f64,
    pub lift_hf_set: f64,
}

pub const BLUM_STANDARD: HardwareRefPricesEur = HardwareRefPricesEur {
    hinge_set: 3.57,
    drawer_set: 77.43,
    lift_hk_set: 62.3,
    lift_hf_set: 101.82,
};

/// 非 standard 套餐的五金系数 (对标 standard 模式成本)
pub fn hardware_coef(pkg: HardwarePackage) -> f64 {
    match pkg {
        HardwarePackage::Econom => 0.55,
        HardwarePackage::Standard => 1.0,
        HardwarePackage::Premium => 1.65,
    }
}
