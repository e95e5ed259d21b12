// ==========================================
// 模块化厨房配置系统 - 模块领域模型
// ==========================================
// 红线: 模块只由布局分配器创建,创建后全程只读;
//       数量提取/报价/拆单只读取,不回写
// ==========================================

use crate::domain::types::{FunctionalBucket, ModuleRole};
use serde::{Deserialize, Serialize};

// ==========================================
// Module - 已落位的柜体模块
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// 布局内唯一、跨重算稳定的标识 (如 "A_SINK"、"A_BASE_4"、"U_A_COOKING")
    pub id: String,
    pub bucket: FunctionalBucket,
    pub role: ModuleRole,
    /// 目录固定宽度 (300/450/600/900)
    pub width_mm: f64,
    /// 展示文本,无语义
    pub label: String,

    // ===== 可选覆写 (缺省由分桶默认值解析) =====
    pub height_mm: Option<f64>,
    pub depth_mm: Option<f64>,

    // ===== 可选显式数量 (缺省走角色推导表) =====
    pub shelf_count: Option<u32>,
    pub door_count: Option<u32>,
    pub drawer_count: Option<u32>,
    /// 预算好的门板面积 (m²),优先于一切推导
    pub facade_area_m2: Option<f64>,
}

impl Module {
    /// 按目录宽度创建模块 (尺寸覆写与显式数量留空)
    pub fn new(
        id: impl Into<String>,
        bucket: FunctionalBucket,
        role: ModuleRole,
        width_mm: f64,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            bucket,
            role,
            width_mm,
            label: label.into(),
            height_mm: None,
            depth_mm: None,
            shelf_count: None,
            door_count: None,
            drawer_count: None,
            facade_area_m2: None,
        }
    }

    /// 解析后的高度 (mm): 显式覆写优先,否则取分桶默认
    pub fn resolved_height_mm(&self) -> f64 {
        match self.height_mm {
            Some(h) if h > 0.0 => h,
            _ => self.bucket.default_height_mm(),
        }
    }

    /// 解析后的深度 (mm)
    pub fn resolved_depth_mm(&self) -> f64 {
        match self.depth_mm {
            Some(d) if d > 0.0 => d,
            _ => self.bucket.default_depth_mm(),
        }
    }

    /// 是否带显式门/抽数量
    pub fn has_explicit_fronts(&self) -> bool {
        self.door_count.unwrap_or(0) > 0 || self.drawer_count.unwrap_or(0) > 0
    }
}
