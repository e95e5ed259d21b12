// ==========================================
// 模块化厨房配置系统 - 拆单领域模型
// ==========================================
// 说明: 拆单输出面向车间,与报价单的门板面积口径
//       刻意不对账 (一个管成本、一个管裁切)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Part - 板件行
// ==========================================
// 每个模块的同类裁切板一行 (侧板/底板/顶板/层板/背板)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub code: String,
    pub name: String,
    pub material: String,
    pub length_mm: f64,
    pub width_mm: f64,
    pub thickness_mm: f64,
    pub unit: String,
    pub qty: u32,
    /// 所属模块标识 ("{id}:{bucket}")
    pub module_ref: String,
    pub note: String,
}

// ==========================================
// EdgeBand - 封边行
// ==========================================
// 每块板的前沿长边一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeBand {
    pub code: String,
    pub name: String,
    pub material: String,
    pub length_mm: f64,
    pub unit: String,
    pub qty: u32,
    pub module_ref: String,
    pub note: String,
}

// ==========================================
// Operation - 聚合工序行
// ==========================================
// 跨全部模块聚合 (不逐板件)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub code: String,
    pub name: String,
    pub unit: String,
    pub qty: f64,
    pub note: String,
}

// ==========================================
// FacadeTechItem - 门板工艺行
// ==========================================
// 按模块的门组/抽组各一行,带裁切尺寸
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacadeTechItem {
    pub code: String,
    pub name: String,
    pub material: String,
    pub length_mm: f64,
    pub height_mm: f64,
    pub thickness_mm: f64,
    pub qty: u32,
    pub module_ref: String,
    pub note: String,
}

// ==========================================
// ProductionSheet - 拆单结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionSheet {
    pub parts: Vec<Part>,
    pub edges: Vec<EdgeBand>,
    pub operations: Vec<Operation>,
    pub facade_items: Vec<FacadeTechItem>,
}

impl ProductionSheet {
    /// 物理板件总数 (行内数量展开)
    pub fn total_part_count(&self) -> u32 {
        self.parts.iter().map(|p| p.qty).sum()
    }

    /// 按工序代码取聚合数量
    pub fn operation_qty(&self, code: &str) -> f64 {
        self.operations
            .iter()
            .find(|o| o.code == code)
            .map(|o| o.qty)
            .unwrap_or(0.0)
    }
}
