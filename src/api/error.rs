// ==========================================
// 模块化厨房配置系统 - API 层错误类型
// ==========================================
// 职责: 汇聚外围设施 (存储/导出/交接/通知) 的错误,
//       转换为带显式原因的调用方错误
// 说明: 管线核心永不抛错 —— 降级场景都以
//       带说明的结果值表达,错误只来自外围 I/O
// ==========================================

use crate::export::ExportError;
use crate::handoff::HandoffError;
use crate::notify::NotifyError;
use crate::store::config_store::StoreError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("配置存储错误: {0}")]
    Store(#[from] StoreError),

    #[error("导出失败: {0}")]
    Export(#[from] ExportError),

    #[error("交接记录错误: {0}")]
    Handoff(#[from] HandoffError),

    #[error("通知失败: {0}")]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
