// ==========================================
// 模块化厨房配置系统 - 报价单领域模型
// ==========================================
// 说明: quantity 一律为未取整的物理量
//       (面积 m² / 长度 m / 件数); amount = 数量 × 解析单价
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// BomLine - 报价单行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub code: String,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub amount: f64,
}

impl BomLine {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        quantity: f64,
        amount: f64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            unit: unit.into(),
            quantity,
            amount,
        }
    }
}

// ==========================================
// HardwareMode - 五金计价模式
// ==========================================
// 三种互斥模式,由五金套餐选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareMode {
    /// standard 套餐: 逐件精确计价 (EUR 报价 × 汇率)
    Standard,
    /// 人工百分比覆写: 材料小计 × 百分比
    Percentage,
    /// econom/premium 缺省: standard 模式成本 × 档位系数
    Coefficient,
}

// ==========================================
// FxSource - 汇率来源
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FxSource {
    Manual,    // 人工价
    Secondary, // 第二来源报价
    Fallback,  // 固定兜底常量
}
