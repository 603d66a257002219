// ==========================================
// 食品加工产能测算系统 - 测算报告模型
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 数据模型
// ==========================================
// 红线: 所有派生数值字段都是输入的确定性纯函数,
//       一经构造不再修改
// ==========================================

use crate::domain::types::AggregationIssue;
use crate::WORK_HOURS_PER_DAY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// ProductEstimate - 单产品测算结果
// ==========================================
// 不变量: effective_days >= capacity_days (整天上取整 vs 精确比值)
// 不变量: quantity <= daily_capacity 时 effective_days == 1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEstimate {
    // ===== 标识 =====
    pub product_key: String,       // 产品键
    pub product_name: String,      // 产品名称 (展示用)
    pub unit: String,              // 计量单位

    // ===== 输入快照 =====
    pub quantity: f64,             // 请求产量

    // ===== 派生字段 =====
    pub processing_hours: f64,     // 总加工工时 = quantity × 单位加工时间
    pub capacity_days: f64,        // 精确天数 = quantity / 日产能 (仅报告用, 可为小数)
    pub effective_days: u32,       // 占用整生产日数 = ceil(quantity / 日产能), 最少 1
    pub total_available_hours: f64, // 可用工时 = effective_days × 8
}

// ==========================================
// SequenceReport - 序列测算报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceReport {
    pub sequence_id: String,             // 序列标识
    pub estimates: Vec<ProductEstimate>, // 成员测算结果, 保持序列配置顺序

    // ===== 序列总量 =====
    pub total_processing_hours: f64, // 成员工时之和
    pub total_days: u32,             // 成员 effective_days 的最大值 (并行线假设, 非求和)
    pub average_hours_per_day: f64,  // total_processing_hours / max(total_days, 1)

    // ===== 可恢复问题 =====
    pub issues: Vec<AggregationIssue>, // 跳过/失败的成员, 随报告携带
}

impl SequenceReport {
    /// 工作日利用率 (%)
    ///
    /// 以 8 小时工作日为基准: average_hours_per_day / 8 × 100
    pub fn day_utilization_pct(&self) -> f64 {
        self.average_hours_per_day / WORK_HOURS_PER_DAY * 100.0
    }
}

// ==========================================
// SequenceOutcome - 序列汇总结果
// ==========================================
// 用途: 工厂报告中按配置顺序逐序列记录;
//       退化序列 (无可解析成员) 显式记录为 report=None, 不滚入总量
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceOutcome {
    pub sequence_id: String,
    pub report: Option<SequenceReport>,
}

// ==========================================
// FacilityReport - 工厂测算报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityReport {
    pub generated_at: DateTime<Utc>,      // 报告生成时间
    pub quantities: HashMap<String, f64>, // 输入产量快照
    pub sequences: Vec<SequenceOutcome>,  // 各序列结果, 按配置顺序

    // ===== 工厂总量 =====
    pub total_processing_hours: f64, // 各序列工时之和
    pub total_days: u32,             // 各序列 total_days 的最大值 (最慢序列决定工期)
    pub average_hours_per_day: f64,  // total_processing_hours / max(total_days, 1)
    pub total_quantity: f64,         // 全部请求产量之和 (含不属于任何序列的产品)
}

impl FacilityReport {
    /// 按序列标识查找序列报告
    pub fn sequence_report(&self, sequence_id: &str) -> Option<&SequenceReport> {
        self.sequences
            .iter()
            .find(|outcome| outcome.sequence_id == sequence_id)
            .and_then(|outcome| outcome.report.as_ref())
    }

    /// 工作日利用率 (%)
    pub fn day_utilization_pct(&self) -> f64 {
        self.average_hours_per_day / WORK_HOURS_PER_DAY * 100.0
    }
}
