// ==========================================
// 食品加工产能测算系统 - 配置错误类型
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 错误分级
// 工具: thiserror 派生宏
// ==========================================
// 红线: 配置错误对单次测算是致命的,绝不静默替换默认值
// ==========================================

use thiserror::Error;

/// 配置错误类型
///
/// 仅覆盖致命错误: 未知产品/序列、非法配置值、非法请求值。
/// 可恢复的跳过 (产品缺少产量) 不走错误通道,见 `AggregationIssue`。
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 引用错误 =====
    #[error("未知产品: {key}")]
    UnknownProduct { key: String },

    #[error("未知生产序列: {id}")]
    UnknownSequence { id: String },

    // ===== 配置值错误 =====
    #[error("非法日产能 (product={key}): {value} (必须大于 0)")]
    InvalidCapacity { key: String, value: f64 },

    #[error("非法单位加工时间 (product={key}): {value} (必须大于 0)")]
    InvalidRate { key: String, value: f64 },

    // ===== 请求值错误 =====
    #[error("产量不能为负 (product={key}): {value}")]
    NegativeQuantity { key: String, value: f64 },

    // ===== 配置文件错误 =====
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
