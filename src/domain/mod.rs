// ==========================================
// 模块化厨房配置系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、封闭枚举、容量约束接口
// 红线: 不含布局/计价逻辑,不含数据访问逻辑
// ==========================================

pub mod bom;
pub mod config;
pub mod module;
pub mod production;
pub mod run;
pub mod types;

// 重导出核心类型
pub use bom::{BomLine, FxSource, HardwareMode};
pub use config::{Appliances, FxQuote, KitchenConfig, PricingOverrides, RunLengths};
pub use module::Module;
pub use production::{EdgeBand, FacadeTechItem, Operation, Part, ProductionSheet};
pub use run::{LinearCapacity, Run, RunMeta};
pub use types::{
    FridgeSide, FunctionalBucket, HardwarePackage, LayoutShape, LedMode, MaterialTier, ModuleRole,
};
