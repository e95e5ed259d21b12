// ==========================================
// 模块化厨房配置系统 - 生产交接记录
// ==========================================
// 职责: 把配置快照 + 模块列表序列化为交接记录,
//       跨进程/页面边界递交给拆单宿主
// 载体: JSON 文本,默认落在配置存储的固定键下
// ==========================================

use crate::domain::config::{KitchenConfig, PricingOverrides, RunLengths};
use crate::domain::module::Module;
use crate::domain::types::{HardwarePackage, LayoutShape, LedMode, MaterialTier};
use crate::pricing::fx::resolve_eur_rate;
use crate::store::config_store::{ConfigStore, StoreError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// 交接记录格式版本
pub const HANDOFF_VERSION: u32 = 1;
/// 配置存储内的交接键
pub const HANDOFF_STORE_KEY: &str = "production_handoff_v1";

// ==========================================
// 交接错误
// ==========================================
#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("交接记录序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("配置存储错误: {0}")]
    Store(#[from] StoreError),
}

// ==========================================
// HandoffSelections - 选择快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffSelections {
    pub hardware_package: HardwarePackage,
    pub material_tier: MaterialTier,
    pub facade_style: String,
    pub led_mode: LedMode,
    pub has_antresol: bool,
}

// ==========================================
// HandoffPricing - 计价输入快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffPricing {
    /// 已解析的有效汇率 (接收方不再跑解析链)
    pub eur_rate: f64,
    pub overrides: PricingOverrides,
}

// ==========================================
// ProductionHandoff - 交接记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionHandoff {
    pub version: u32,
    pub handoff_id: String,
    pub created_at: NaiveDateTime,

    pub layout: LayoutShape,
    pub dims: RunLengths,
    pub modules: Vec<Module>,
    pub selections: HandoffSelections,
    pub pricing: HandoffPricing,
}

impl ProductionHandoff {
    /// 由配置快照与模块列表构建交接记录
    pub fn build(cfg: &KitchenConfig, modules: &[Module]) -> Self {
        let (eur_rate, _) = resolve_eur_rate(&cfg.fx);

        Self {
            version: HANDOFF_VERSION,
            handoff_id: Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            layout: cfg.layout,
            dims: cfg.dims,
            modules: modules.to_vec(),
            selections: HandoffSelections {
                hardware_package: cfg.hardware_package,
                material_tier: cfg.material_tier,
                facade_style: cfg.facade_style.clone(),
                led_mode: cfg.led_mode,
                has_antresol: cfg.has_antresol,
            },
            pricing: HandoffPricing {
                eur_rate,
                overrides: cfg.overrides,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, HandoffError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, HandoffError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 写入配置存储的固定交接键
    pub fn save(&self, store: &ConfigStore) -> Result<(), HandoffError> {
        store.set_patch(&vec![(HANDOFF_STORE_KEY.to_string(), self.to_json()?)])?;
        info!(
            handoff_id = %self.handoff_id,
            modules = self.modules.len(),
            "交接记录已写入存储"
        );
        Ok(())
    }

    /// 从配置存储读取 (无记录时返回 None)
    pub fn load(store: &ConfigStore) -> Result<Option<Self>, HandoffError> {
        match store.get(HANDOFF_STORE_KEY)? {
            Some(raw) => Ok(Some(Self::from_json(&raw)?)),
            None => Ok(None),
        }
    }
}
