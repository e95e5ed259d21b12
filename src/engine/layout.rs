// ==========================================
// 模块化厨房配置系统 - 布局分配引擎
// ==========================================
// 职责: 按布局形态把模块落到一至三条墙线上,
//       再追加岛台区与吊柜区
// 输入: 配置快照
// 输出: 扁平模块列表 + 逐墙线元数据
// ==========================================
// 红线: 每种形态是固定落位脚本,不是搜索;
//       尺寸不足时降级为空布局 + 诊断说明,不报错
// ==========================================

mod core;

#[cfg(test)]
mod tests;

pub use core::{LayoutAllocator, LayoutResult};
