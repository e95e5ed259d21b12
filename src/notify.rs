// ==========================================
// 模块化厨房配置系统 - 线索通知
// ==========================================
// 职责: 把报价结果汇总成自由文本,交给通知端发送
// 红线: 核心不依赖任何具体传输;trait 由宿主实现
// ==========================================

use crate::domain::config::KitchenConfig;
use crate::pricing::engine::PriceResult;
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

// ==========================================
// 通知错误
// ==========================================
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("通知发送失败: {0}")]
    Send(String),
}

// ==========================================
// LeadContact - 客户联系信息
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct LeadContact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub comment: String,
}

/// 电话校验: 至少 10 位数字
pub fn is_valid_phone(raw: &str) -> bool {
    raw.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

/// 报价结果 → 自由文本汇总
///
/// 内容: 联系信息 + 布局/尺寸 + 预估合计 + 逐行报价单
pub fn build_lead_summary(
    cfg: &KitchenConfig,
    price: &PriceResult,
    contact: &LeadContact,
) -> String {
    let mut text = String::new();
    text.push_str("新线索: 厨房配置单\n\n");

    text.push_str(&format!(
        "客户: {} {}\n电话: {}\n",
        contact.first_name, contact.last_name, contact.phone
    ));
    if !contact.comment.trim().is_empty() {
        text.push_str(&format!("备注: {}\n", contact.comment.trim()));
    }

    text.push_str(&format!(
        "\n布局: {}\n尺寸: A={} B={} C={} 岛台={}\n",
        cfg.layout, cfg.dims.a_mm, cfg.dims.b_mm, cfg.dims.c_mm, cfg.dims.island_mm
    ));

    text.push_str(&format!(
        "预估合计: {:.0}\n\n报价明细:\n",
        price.totals.grand
    ));
    for line in &price.bom {
        text.push_str(&format!(
            "{}; {}; {}; {:.2}; {:.0}\n",
            line.code, line.name, line.unit, line.quantity, line.amount
        ));
    }

    text
}

// ==========================================
// LeadNotifier Trait
// ==========================================
// 核心只定义接口,传输 (HTTP/消息队列/...) 由宿主注入
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    /// 发送线索文本
    async fn send_lead(&self, text: &str) -> Result<(), NotifyError>;
}

/// 空操作通知端 (测试与无外联场景)
#[derive(Debug, Clone, Default)]
pub struct NoOpNotifier;

#[async_trait]
impl LeadNotifier for NoOpNotifier {
    async fn send_lead(&self, text: &str) -> Result<(), NotifyError> {
        debug!(chars = text.len(), "NoOpNotifier: 跳过线索发送");
        Ok(())
    }
}
