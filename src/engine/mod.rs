// ==========================================
// 模块化厨房配置系统 - 引擎层
// ==========================================
// 职责: 实现布局/数量/编排业务规则
// 红线: 引擎是纯函数,所有降级场景必须输出说明
// ==========================================

pub mod layout;
pub mod orchestrator;
pub mod quantity;
pub mod run_builder;

// 重导出核心引擎
pub use layout::{LayoutAllocator, LayoutResult};
pub use orchestrator::{ConfiguratorPipeline, FullResult};
pub use quantity::{
    resolve_front_counts, AreaSummary, FrontCounts, HardwareCounts, QuantityExtractor,
    QuantitySummary,
};
pub use run_builder::{PlaceError, RunBuilder};
