// ==========================================
// 模块化厨房配置系统 - 管线编排器
// ==========================================
// 用途: 协调 布局 → 数量 → 报价 / 拆单 的执行顺序
// 红线: 纯函数,无悬挂点,无共享可变状态;
//       同一配置重算两次必须得到完全一致的结果
// ==========================================

use crate::domain::config::KitchenConfig;
use crate::engine::layout::{LayoutAllocator, LayoutResult};
use crate::engine::quantity::{QuantityExtractor, QuantitySummary};
use crate::pricing::engine::{PriceResult, PricingEngine};
use crate::production::decomposer::ProductionDecomposer;
use crate::domain::production::ProductionSheet;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ==========================================
// FullResult - 管线全量结果
// ==========================================
// 配置变更后旧结果整体废弃重建,不做增量修补
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullResult {
    pub layout: LayoutResult,
    pub quantities: QuantitySummary,
    pub price: PriceResult,
    pub production: ProductionSheet,
}

// ==========================================
// ConfiguratorPipeline - 管线编排器
// ==========================================
pub struct ConfiguratorPipeline {
    allocator: LayoutAllocator,
    extractor: QuantityExtractor,
    pricing: PricingEngine,
    decomposer: ProductionDecomposer,
}

impl ConfiguratorPipeline {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            allocator: LayoutAllocator::new(),
            extractor: QuantityExtractor::new(),
            pricing: PricingEngine::new(),
            decomposer: ProductionDecomposer::new(),
        }
    }

    /// 全量重算
    ///
    /// 外部配置存储的变更通知应当调用这里;
    /// 核心自身不订阅任何事件
    ///
    /// # 参数
    /// - `cfg`: 配置快照 (只读)
    ///
    /// # 返回
    /// 布局 + 数量 + 报价 + 拆单的全量结果
    #[instrument(skip_all, fields(layout = %cfg.layout))]
    pub fn recompute(&self, cfg: &KitchenConfig) -> FullResult {
        // 步骤1: 布局分配 —— 模块列表是后续两路消费的唯一共享产物
        let layout = self.allocator.allocate(cfg);

        // 步骤2: 数量提取
        let quantities = self.extractor.extract(&layout.modules);

        // 步骤3: 报价
        let price = self.pricing.price(cfg, &layout.modules);

        // 步骤4: 拆单 (与报价互相独立)
        let production = self.decomposer.decompose(&layout.modules);

        info!(
            modules = layout.modules.len(),
            grand = price.totals.grand,
            parts = production.parts.len(),
            "全量重算完成"
        );

        FullResult {
            layout,
            quantities,
            price,
            production,
        }
    }
}

impl Default for ConfiguratorPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{Appliances, RunLengths};
    use crate::domain::types::LayoutShape;

    #[test]
    fn test_recompute_is_deterministic() {
        let cfg = KitchenConfig {
            layout: LayoutShape::CornerL,
            dims: RunLengths {
                a_mm: 2700.0,
                b_mm: 1800.0,
                ..RunLengths::default()
            },
            appliances: Appliances {
                fridge: true,
                dishwasher: true,
                sink: true,
                hob: true,
                hood: true,
                ..Appliances::default()
            },
            ..KitchenConfig::default()
        };

        let pipeline = ConfiguratorPipeline::new();
        let first = pipeline.recompute(&cfg);
        let second = pipeline.recompute(&cfg);
        assert_eq!(first, second);
    }

    #[test]
    fn test_degraded_layout_flows_through() {
        // 尺寸不足: 空布局 + 诊断说明,两路下游各自得到空结果,不报错
        let cfg = KitchenConfig {
            layout: LayoutShape::Straight,
            dims: RunLengths {
                a_mm: 200.0,
                ..RunLengths::default()
            },
            ..KitchenConfig::default()
        };

        let result = ConfiguratorPipeline::new().recompute(&cfg);
        assert!(result.layout.modules.is_empty());
        assert!(result.layout.note.is_some());
        assert_eq!(result.quantities.areas.corp_m2, 0.0);
        assert_eq!(result.production.parts.len(), 0);
    }
}
