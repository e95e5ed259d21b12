// ==========================================
// 模块化厨房配置系统 - 配置快照领域模型
// ==========================================
// 职责: 每次计算一份、计算期内只读的用户选择快照
// 红线: 历史键名别名只在本文件的载入边界归一化,
//       核心管线内部不做多键回退
// ==========================================

use crate::domain::types::{
    FridgeSide, HardwarePackage, LayoutShape, LedMode, MaterialTier,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// RunLengths - 墙线长度 (mm)
// ==========================================
// A 为主墙/入口墙; U型时 C 缺省取 B
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunLengths {
    pub a_mm: f64,
    pub b_mm: f64,
    pub c_mm: f64,
    pub island_mm: f64, // 岛台长度 (带岛台布局时有效)
}

impl RunLengths {
    /// U 型的有效 C 线长度 (缺省取 B)
    pub fn effective_c_mm(&self) -> f64 {
        if self.c_mm > 0.0 {
            self.c_mm
        } else {
            self.b_mm
        }
    }
}

// ==========================================
// Appliances - 电器选择
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appliances {
    pub fridge: bool,
    pub dishwasher: bool,
    pub dishwasher_width_mm: f64, // 缺省 600
    pub sink: bool,
    pub hob: bool,
    pub oven: bool,
    pub hood: bool,
}

impl Default for Appliances {
    fn default() -> Self {
        Self {
            fridge: false,
            dishwasher: false,
            dishwasher_width_mm: 600.0,
            sink: false,
            hob: false,
            oven: false,
            hood: false,
        }
    }
}

// ==========================================
// FxQuote - 汇率输入
// ==========================================
// 解析链: 人工价 → 第二来源报价 → 固定兜底常量
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FxQuote {
    pub manual_eur: Option<f64>,
    pub secondary_eur: Option<f64>,
}

// ==========================================
// PricingOverrides - 报价字段人工覆写
// ==========================================
// 稀疏结构: 仅填写的字段生效,未填写字段回落到档位预设
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingOverrides {
    pub corp_sheet_price: Option<f64>,
    pub corp_waste: Option<f64>,

    pub facade_m2_price_econom: Option<f64>,
    pub facade_m2_price_standard: Option<f64>,
    pub facade_m2_price_premium: Option<f64>,
    pub facade_m2_price_glass_profile: Option<f64>,
    pub facade_m2_price: Option<f64>, // 历史单价键,等价于 standard 档
    pub facade_waste: Option<f64>,

    pub back_sheet_price: Option<f64>,
    pub back_waste: Option<f64>,

    pub top_on: Option<bool>,
    pub top_per_m: Option<f64>,
    pub top_depth_mm: Option<f64>,

    pub bsp_on: Option<bool>,
    pub bsp_per_m2: Option<f64>,
    pub bsp_height_mm: Option<f64>,

    pub services_pct: Option<f64>,
    pub hardware_pct: Option<f64>,
    pub hardware_coef: Option<f64>,

    pub led_under_per_m: Option<f64>,
    pub led_profile_per_m: Option<f64>,
    pub led_smart_per_m: Option<f64>,
}

// ==========================================
// KitchenConfig - 配置快照
// ==========================================
// 由外部配置存储产出,管线全程只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenConfig {
    pub layout: LayoutShape,
    pub dims: RunLengths,
    pub fridge_side: FridgeSide,
    pub appliances: Appliances,

    pub material_tier: MaterialTier,
    pub hardware_package: HardwarePackage,

    /// 门板风格原始文本 (仅展示用)
    pub facade_style: String,
    /// 载入时已解析的玻璃/型材门板标志
    pub glass_profile_facade: bool,

    pub led_mode: LedMode,
    pub has_antresol: bool,

    /// 吊柜自动生成开关 (缺省开启)
    pub upper_zone_on: bool,

    pub overrides: PricingOverrides,
    pub fx: FxQuote,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            layout: LayoutShape::Straight,
            dims: RunLengths::default(),
            fridge_side: FridgeSide::default(),
            appliances: Appliances::default(),
            material_tier: MaterialTier::default(),
            hardware_package: HardwarePackage::default(),
            facade_style: String::new(),
            glass_profile_facade: false,
            led_mode: LedMode::default(),
            has_antresol: false,
            upper_zone_on: true,
            overrides: PricingOverrides::default(),
            fx: FxQuote::default(),
        }
    }
}

// ==========================================
// 载入边界: 键值快照 → 规范快照
// ==========================================

/// 按别名优先级取第一个存在的键值
fn pick<'a>(map: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|k| map.get(*k))
        .map(|s| s.as_str())
}

/// 宽松布尔解析 ("1"/"true"/"yes"/"on" 为真)
fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw {
        None => default,
        Some(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "y" | "on" => true,
            "0" | "false" | "no" | "off" | "" => false,
            _ => default,
        },
    }
}

/// 宽松数值解析 (非法输入回落默认值)
fn parse_num(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(default)
}

fn parse_opt_num(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

fn parse_opt_bool(raw: Option<&str>) -> Option<bool> {
    raw.map(|s| parse_bool(Some(s), false))
}

/// 布局文本归一化
///
/// 兼容历史取值: "line"/"single" 一字型, "l"/"corner" 转角,
/// "u" U型, "island" 岛台
pub fn normalize_layout(raw: &str) -> LayoutShape {
    let s = raw.trim().to_lowercase();
    if s.contains("island") || s.contains("岛") {
        LayoutShape::Island
    } else if s.contains("straight") || s.contains("single") || s.contains("line") || s == "i" {
        LayoutShape::Straight
    } else if s.contains("corner") || s.contains("l-shaped") || s == "l" {
        LayoutShape::CornerL
    } else if s.contains("u-shaped") || s == "u" {
        LayoutShape::UShaped
    } else {
        LayoutShape::Straight
    }
}

/// 档位文本归一化 (材料档位与五金套餐共用词表)
pub fn normalize_tier(raw: &str) -> Option<&'static str> {
    let s = raw.trim().to_lowercase();
    if ["econom", "eco", "economy", "econom+", "muller", "müller", "mueller"]
        .contains(&s.as_str())
    {
        Some("econom")
    } else if ["standard", "std", "blum", "blum standard"].contains(&s.as_str()) {
        Some("standard")
    } else if ["premium", "prem", "blum premium", "tip-on", "tipon", "legrabox"]
        .contains(&s.as_str())
    {
        Some("premium")
    } else {
        None
    }
}

/// 玻璃/型材门板判定 (载入时执行一次,下游只读标志)
pub fn detect_glass_profile(facade_style: &str) -> bool {
    let s = facade_style.to_lowercase();
    s.contains("glass") || s.contains("profile") || s.contains("玻璃") || s.contains("型材")
}

fn normalize_material_tier(raw: Option<&str>) -> MaterialTier {
    match raw.and_then(normalize_tier) {
        Some("econom") => MaterialTier::Econom,
        Some("premium") => MaterialTier::Premium,
        _ => MaterialTier::Standard,
    }
}

fn normalize_hardware_package(raw: Option<&str>) -> HardwarePackage {
    match raw.and_then(normalize_tier) {
        Some("econom") => HardwarePackage::Econom,
        Some("premium") => HardwarePackage::Premium,
        _ => HardwarePackage::Standard,
    }
}

fn normalize_led_mode(raw: Option<&str>) -> LedMode {
    match raw.map(|s| s.trim().to_lowercase()) {
        Some(s) if s == "under" => LedMode::Under,
        Some(s) if s == "profile" => LedMode::Profile,
        Some(s) if s == "smart" => LedMode::Smart,
        _ => LedMode::None,
    }
}

impl KitchenConfig {
    /// 从配置存储的键值快照构建规范配置
    ///
    /// # 参数
    /// - `kv`: 扁平键值快照 (历史别名在此处一次性收敛)
    ///
    /// # 返回
    /// 规范化后的配置快照;缺失键一律取默认值,不报错
    pub fn from_kv_snapshot(kv: &HashMap<String, String>) -> Self {
        let layout = pick(kv, &["layout", "planning", "kitchen_shape"])
            .map(normalize_layout)
            .unwrap_or(LayoutShape::Straight);

        let dims = RunLengths {
            a_mm: parse_num(pick(kv, &["dim_a_mm", "dims.A", "wall_width"]), 0.0),
            b_mm: parse_num(pick(kv, &["dim_b_mm", "dims.B", "wall_width_b"]), 0.0),
            c_mm: parse_num(pick(kv, &["dim_c_mm", "dims.C", "wall_width_c"]), 0.0),
            island_mm: parse_num(pick(kv, &["island_mm", "dims.island", "island_length"]), 0.0),
        };

        let fridge_side = match pick(kv, &["fridge_side", "modules_prefs.fridge_side"]) {
            Some(s) if s.trim().eq_ignore_ascii_case("right") => FridgeSide::Right,
            _ => FridgeSide::Left,
        };

        let appliances = Appliances {
            fridge: parse_bool(pick(kv, &["fridge", "tech.fridge"]), false),
            dishwasher: parse_bool(pick(kv, &["dishwasher", "tech.dishwasher"]), false),
            dishwasher_width_mm: parse_num(
                pick(kv, &["dishwasher_width_mm", "dw_width", "tech.dishwasher_width"]),
                600.0,
            ),
            sink: parse_bool(pick(kv, &["sink", "tech.sink"]), false),
            hob: parse_bool(pick(kv, &["hob", "tech.hob"]), false),
            oven: parse_bool(pick(kv, &["oven", "tech.oven"]), false),
            hood: parse_bool(pick(kv, &["hood", "tech.hood"]), false),
        };

        let facade_style = pick(kv, &["facade_style", "facade_type", "facade"])
            .unwrap_or("")
            .to_string();

        let overrides = PricingOverrides {
            corp_sheet_price: parse_opt_num(pick(kv, &["ov.corp_sheet_price"])),
            corp_waste: parse_opt_num(pick(kv, &["ov.corp_waste"])),
            facade_m2_price_econom: parse_opt_num(pick(kv, &["ov.facade_m2_price_econom"])),
            facade_m2_price_standard: parse_opt_num(pick(kv, &["ov.facade_m2_price_standard"])),
            facade_m2_price_premium: parse_opt_num(pick(kv, &["ov.facade_m2_price_premium"])),
            facade_m2_price_glass_profile: parse_opt_num(pick(
                kv,
                &["ov.facade_m2_price_glass_profile"],
            )),
            facade_m2_price: parse_opt_num(pick(kv, &["ov.facade_m2_price"])),
            facade_waste: parse_opt_num(pick(kv, &["ov.facade_waste"])),
            back_sheet_price: parse_opt_num(pick(kv, &["ov.back_sheet_price"])),
            back_waste: parse_opt_num(pick(kv, &["ov.back_waste"])),
            top_on: parse_opt_bool(pick(kv, &["ov.top_on"])),
            top_per_m: parse_opt_num(pick(kv, &["ov.top_per_m"])),
            top_depth_mm: parse_opt_num(pick(kv, &["ov.top_depth_mm"])),
            bsp_on: parse_opt_bool(pick(kv, &["ov.bsp_on"])),
            bsp_per_m2: parse_opt_num(pick(kv, &["ov.bsp_per_m2"])),
            bsp_height_mm: parse_opt_num(pick(kv, &["ov.bsp_height_mm"])),
            services_pct: parse_opt_num(pick(kv, &["ov.services_pct"])),
            hardware_pct: parse_opt_num(pick(kv, &["ov.hardware_pct"])),
            hardware_coef: parse_opt_num(pick(kv, &["ov.hardware_coef"])),
            led_under_per_m: parse_opt_num(pick(kv, &["ov.led_under_per_m"])),
            led_profile_per_m: parse_opt_num(pick(kv, &["ov.led_profile_per_m"])),
            led_smart_per_m: parse_opt_num(pick(kv, &["ov.led_smart_per_m"])),
        };

        Self {
            layout,
            dims,
            fridge_side,
            appliances,
            material_tier: normalize_material_tier(pick(kv, &["material_tier", "package"])),
            hardware_package: normalize_hardware_package(pick(
                kv,
                &["hardware_package", "comfort_kit", "comfort"],
            )),
            glass_profile_facade: detect_glass_profile(&facade_style),
            facade_style,
            led_mode: normalize_led_mode(pick(kv, &["led_mode", "led_type", "led"])),
            has_antresol: parse_bool(
                pick(kv, &["has_antresol", "antresol", "antresoli", "mezzanine"]),
                false,
            ),
            upper_zone_on: parse_bool(pick(kv, &["upper_zone_on", "uppers_on"]), true),
            overrides,
            fx: FxQuote {
                manual_eur: parse_opt_num(pick(kv, &["fx_eur_manual"])),
                secondary_eur: parse_opt_num(pick(kv, &["fx_eur_secondary", "fx_eur_nbu"])),
            },
        }
    }
}
