// ==========================================
// 模块化厨房配置系统 - 报价层
// ==========================================
// 职责: 档位预设、汇率解析链、分项报价引擎
// ==========================================

pub mod engine;
pub mod fx;
pub mod presets;

// 重导出核心类型
pub use engine::{PriceResult, PriceTotals, PricingEngine, ResolvedPricing};
pub use fx::{resolve_eur_rate, FALLBACK_EUR_RATE};
pub use presets::{hardware_coef, preset_for, sheet_area_m2, TierPreset, BLUM_STANDARD};
