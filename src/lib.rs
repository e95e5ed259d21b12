// ==========================================
// 模块化厨房配置系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite (配置存储)
// 系统定位: 确定性派生管线
//   布局分配 → 数量提取 → 报价 / 生产拆单
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 布局/数量/编排
pub mod engine;

// 报价层 - 预设/汇率/报价引擎
pub mod pricing;

// 生产层 - 拆单
pub mod production;

// 存储层 - 外部键值配置存储
pub mod store;

// 导出 - 拆单 CSV
pub mod export;

// 交接 - 跨边界生产交接记录
pub mod handoff;

// 通知 - 线索汇总与发送接口
pub mod notify;

// 日志系统
pub mod logging;

// API 层 - 对外操作
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    FridgeSide, FunctionalBucket, HardwarePackage, LayoutShape, LedMode, MaterialTier, ModuleRole,
};

// 领域实体
pub use domain::{
    Appliances, BomLine, FxQuote, FxSource, HardwareMode, KitchenConfig, Module, PricingOverrides,
    ProductionSheet, Run, RunLengths, RunMeta,
};

// 引擎
pub use engine::{
    ConfiguratorPipeline, FullResult, LayoutAllocator, LayoutResult, QuantityExtractor,
    QuantitySummary, RunBuilder,
};

// 报价与拆单
pub use pricing::{PriceResult, PriceTotals, PricingEngine};
pub use production::ProductionDecomposer;

// 外围设施
pub use handoff::ProductionHandoff;
pub use notify::{LeadContact, LeadNotifier, NoOpNotifier};
pub use store::ConfigStore;

// API
pub use api::{
    allocate_layout, decompose_production, extract_quantities, price_kitchen, recompute,
    recompute_from_store, ApiError, ApiResult,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "模块化厨房配置系统";
