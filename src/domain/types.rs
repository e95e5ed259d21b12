// ==========================================
// 模块化厨房配置系统 - 领域类型定义
// ==========================================
// 所有分类维度均为封闭枚举,在配置载入时一次性解析
// 红线: 下游各阶段禁止再对自由文本做模式匹配
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 布局形态 (Layout Shape)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutShape {
    Straight, // 一字型
    CornerL,  // 转角 (L型)
    UShaped,  // U型
    Island,   // 带岛台
}

impl fmt::Display for LayoutShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutShape::Straight => write!(f, "straight"),
            LayoutShape::CornerL => write!(f, "corner_l"),
            LayoutShape::UShaped => write!(f, "u_shaped"),
            LayoutShape::Island => write!(f, "island"),
        }
    }
}

// ==========================================
// 冰箱位置 (Fridge Side)
// ==========================================
// 一字型: 左端/右端; L型: A线/B线; U型: C线/B线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FridgeSide {
    #[default]
    Left,
    Right,
}

// ==========================================
// 材料档位 (Material Tier)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialTier {
    Econom,
    #[default]
    Standard,
    Premium,
}

impl fmt::Display for MaterialTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialTier::Econom => write!(f, "econom"),
            MaterialTier::Standard => write!(f, "standard"),
            MaterialTier::Premium => write!(f, "premium"),
        }
    }
}

// ==========================================
// 五金套餐 (Hardware Package)
// ==========================================
// econom: Müller 系; standard: BLUM Standard; premium: BLUM Premium / Legrabox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwarePackage {
    Econom,
    #[default]
    Standard,
    Premium,
}

impl fmt::Display for HardwarePackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwarePackage::Econom => write!(f, "econom"),
            HardwarePackage::Standard => write!(f, "standard"),
            HardwarePackage::Premium => write!(f, "premium"),
        }
    }
}

// ==========================================
// LED 灯光模式 (LED Mode)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedMode {
    #[default]
    None,    // 无灯光
    Under,   // 吊柜底部灯带
    Profile, // 型材/玻璃柜灯带
    Smart,   // 智能场景灯光
}

// ==========================================
// 功能分桶 (Functional Bucket)
// ==========================================
// 决定模块的默认高度/深度,以及面积统计归属
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalBucket {
    Base,   // 地柜
    Upper,  // 吊柜
    Tall,   // 高柜
    Island, // 岛台柜
    Corner, // 转角柜
}

impl FunctionalBucket {
    /// 默认高度 (mm)
    pub fn default_height_mm(&self) -> f64 {
        match self {
            FunctionalBucket::Upper => 720.0,
            FunctionalBucket::Tall => 2300.0,
            // 地柜/岛台/转角共用地柜外形
            _ => 830.0,
        }
    }

    /// 默认深度 (mm)
    pub fn default_depth_mm(&self) -> f64 {
        match self {
            FunctionalBucket::Upper => 320.0,
            _ => 560.0,
        }
    }
}

impl fmt::Display for FunctionalBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionalBucket::Base => write!(f, "base"),
            FunctionalBucket::Upper => write!(f, "upper"),
            FunctionalBucket::Tall => write!(f, "tall"),
            FunctionalBucket::Island => write!(f, "island"),
            FunctionalBucket::Corner => write!(f, "corner"),
        }
    }
}

// ==========================================
// 模块角色 (Module Role)
// ==========================================
// 驱动五金件数量推导与门板面积推导
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleRole {
    Base,       // 标准地柜 600
    Sink,       // 水槽柜
    Dishwasher, // 洗碗机柜
    Cooking,    // 灶台/烤箱柜
    Fridge,     // 冰箱高柜
    Corner,     // 转角柜 900×900
    #[serde(rename = "cargo_300")]
    Cargo300,   // 拉篮/窄柜 300
    #[serde(rename = "base_450")]
    Base450,    // 地柜 450
    Upper,      // 吊柜
    Hood,       // 烟机吊柜 (灶台上方)
    Island,     // 岛台柜
}

impl ModuleRole {
    /// 该角色默认是否带整面门板 (仅拉篮 300 例外)
    pub fn has_default_front(&self) -> bool {
        !matches!(self, ModuleRole::Cargo300)
    }

    /// 拆单时是否默认不配层板 (柜内被设备占用)
    pub fn shelves_excluded(&self) -> bool {
        matches!(
            self,
            ModuleRole::Sink
                | ModuleRole::Dishwasher
                | ModuleRole::Cooking
                | ModuleRole::Cargo300
                | ModuleRole::Hood
                | ModuleRole::Fridge
        )
    }
}

impl fmt::Display for ModuleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleRole::Base => write!(f, "base"),
            ModuleRole::Sink => write!(f, "sink"),
            ModuleRole::Dishwasher => write!(f, "dishwasher"),
            ModuleRole::Cooking => write!(f, "cooking"),
            ModuleRole::Fridge => write!(f, "fridge"),
            ModuleRole::Corner => write!(f, "corner"),
            ModuleRole::Cargo300 => write!(f, "cargo_300"),
            ModuleRole::Base450 => write!(f, "base_450"),
            ModuleRole::Upper => write!(f, "upper"),
            ModuleRole::Hood => write!(f, "hood"),
            ModuleRole::Island => write!(f, "island"),
        }
    }
}
