// ==========================================
// 模块化厨房配置系统 - API 层
// ==========================================
// 职责: 对外暴露四个核心纯函数操作 + recompute,
//       以及存储驱动的便捷入口
// ==========================================

pub mod error;

pub use error::{ApiError, ApiResult};

use crate::domain::config::KitchenConfig;
use crate::domain::module::Module;
use crate::domain::production::ProductionSheet;
use crate::engine::layout::{LayoutAllocator, LayoutResult};
use crate::engine::orchestrator::{ConfiguratorPipeline, FullResult};
use crate::engine::quantity::{QuantityExtractor, QuantitySummary};
use crate::pricing::engine::{PriceResult, PricingEngine};
use crate::production::decomposer::ProductionDecomposer;
use crate::store::config_store::ConfigStore;

/// 布局分配: 配置快照 → 模块列表 + 逐墙线元数据
pub fn allocate_layout(cfg: &KitchenConfig) -> LayoutResult {
    LayoutAllocator::new().allocate(cfg)
}

/// 数量提取: 模块列表 → 面积/五金汇总
pub fn extract_quantities(modules: &[Module]) -> QuantitySummary {
    QuantityExtractor::new().extract(modules)
}

/// 报价: 配置快照 + 模块列表 → 分项报价单
pub fn price_kitchen(cfg: &KitchenConfig, modules: &[Module]) -> PriceResult {
    PricingEngine::new().price(cfg, modules)
}

/// 拆单: 模块列表 → 车间拆单表
pub fn decompose_production(modules: &[Module]) -> ProductionSheet {
    ProductionDecomposer::new().decompose(modules)
}

/// 全量重算 (外部存储的变更通知应调用这里)
pub fn recompute(cfg: &KitchenConfig) -> FullResult {
    ConfiguratorPipeline::new().recompute(cfg)
}

/// 便捷入口: 从配置存储载入快照并全量重算
pub fn recompute_from_store(store: &ConfigStore) -> ApiResult<FullResult> {
    let cfg = store.load_config()?;
    Ok(recompute(&cfg))
}
