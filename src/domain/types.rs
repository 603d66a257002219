// ==========================================
// 食品加工产能测算系统 - 领域类型定义
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 错误分级
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 汇总过程问题 (Aggregation Issue)
// ==========================================
// 红线: 可恢复问题随报告携带,不作为错误中断汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationIssue {
    /// 序列引用的产品没有供应产量,该成员被跳过
    MissingQuantity { product_key: String },

    /// 单个成员测算失败 (配置错误), 兄弟成员继续
    MemberError { product_key: String, message: String },
}

impl AggregationIssue {
    /// 问题涉及的产品键
    pub fn product_key(&self) -> &str {
        match self {
            AggregationIssue::MissingQuantity { product_key } => product_key,
            AggregationIssue::MemberError { product_key, .. } => product_key,
        }
    }
}

impl fmt::Display for AggregationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationIssue::MissingQuantity { product_key } => {
                write!(f, "产量未定义, 跳过产品 {}", product_key)
            }
            AggregationIssue::MemberError {
                product_key,
                message,
            } => {
                write!(f, "产品 {} 测算失败: {}", product_key, message)
            }
        }
    }
}
