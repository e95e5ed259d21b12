// ==========================================
// 模块化厨房配置系统 - 汇率解析
// ==========================================
// 职责: EUR 参考价 → 本币的汇率解析链
// 解析链: 人工价 → 第二来源报价 → 固定兜底常量
// 红线: 永不失败,永不取零
// ==========================================

use crate::domain::bom::FxSource;
use crate::domain::config::FxQuote;
use tracing::debug;

/// 兜底汇率常量 (EUR → 本币)
pub const FALLBACK_EUR_RATE: f64 = 50.4;

/// 解析有效汇率
///
/// # 参数
/// - `quote`: 汇率输入 (人工价与第二来源报价均可缺失)
///
/// # 返回
/// (有效汇率, 来源标记)
pub fn resolve_eur_rate(quote: &FxQuote) -> (f64, FxSource) {
    if let Some(manual) = quote.manual_eur {
        if manual > 0.0 {
            return (manual, FxSource::Manual);
        }
    }
    if let Some(secondary) = quote.secondary_eur {
        if secondary > 0.0 {
            return (secondary, FxSource::Secondary);
        }
    }

    debug!(rate = FALLBACK_EUR_RATE, "汇率无可用报价,使用兜底常量");
    (FALLBACK_EUR_RATE, FxSource::Fallback)
}
