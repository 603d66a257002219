// ==========================================
// 食品加工产能测算系统 - 汇总引擎
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 序列与工厂汇总
// ==========================================
// 职责: 逐序列折叠单产品测算, 再折叠成工厂报告
// 红线: 产品各有独立产线, 序列/工厂工期取成员最大天数而非求和;
//       单成员配置错误隔离失败, 不中断同批兄弟成员
// ==========================================

use crate::config::ConfigStore;
use crate::domain::report::{FacilityReport, SequenceOutcome, SequenceReport};
use crate::domain::request::ProductionRequest;
use crate::domain::sequence::Sequence;
use crate::domain::types::AggregationIssue;
use crate::engine::estimator::EstimateEngine;
use chrono::Utc;

// ==========================================
// ReportEngine - 汇总引擎
// ==========================================
// 红线: 无状态引擎, 配置与请求均为只读输入
pub struct ReportEngine {
    estimator: EstimateEngine,
}

impl ReportEngine {
    /// 创建新的汇总引擎
    pub fn new() -> Self {
        Self {
            estimator: EstimateEngine::new(),
        }
    }

    // ==========================================
    // 序列汇总
    // ==========================================

    /// 汇总一条生产序列
    ///
    /// 按序列配置顺序逐产品测算:
    /// - 未供应产量 → 可恢复跳过, 记入 issues 并继续
    /// - 产品未登记 / 配置非法 → 该成员隔离失败, 记入 issues 并继续
    ///
    /// # 返回
    /// - `Some(SequenceReport)`: 至少一个成员可解析
    /// - `None`: 退化序列 (无可解析成员), 显式空结果而非崩溃
    pub fn aggregate_sequence(
        &self,
        store: &ConfigStore,
        request: &ProductionRequest,
        sequence: &Sequence,
    ) -> Option<SequenceReport> {
        let mut estimates = Vec::with_capacity(sequence.len());
        let mut issues = Vec::new();

        for product_key in &sequence.product_keys {
            // 缺失条目表示"跳过", 不等价于产量为 0
            let quantity = match request.quantity_of(product_key) {
                Some(q) => q,
                None => {
                    tracing::warn!(
                        sequence_id = %sequence.id,
                        product_key = %product_key,
                        "产量未定义, 跳过该产品"
                    );
                    issues.push(AggregationIssue::MissingQuantity {
                        product_key: product_key.clone(),
                    });
                    continue;
                }
            };

            match self.estimator.estimate_by_key(store, product_key, quantity) {
                Ok(estimate) => estimates.push(estimate),
                Err(err) => {
                    // 配置错误只中止受影响的成员, 兄弟成员继续
                    tracing::warn!(
                        sequence_id = %sequence.id,
                        product_key = %product_key,
                        error = %err,
                        "成员测算失败, 隔离后继续"
                    );
                    issues.push(AggregationIssue::MemberError {
                        product_key: product_key.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        if estimates.is_empty() {
            tracing::warn!(
                sequence_id = %sequence.id,
                issue_count = issues.len(),
                "退化序列: 无可解析成员"
            );
            return None;
        }

        let total_processing_hours: f64 =
            estimates.iter().map(|e| e.processing_hours).sum();
        // 并行线假设: 序列工期由天数最多的成员决定
        let total_days = estimates
            .iter()
            .map(|e| e.effective_days)
            .max()
            .unwrap_or(1);
        let average_hours_per_day =
            total_processing_hours / f64::from(total_days.max(1));

        Some(SequenceReport {
            sequence_id: sequence.id.clone(),
            estimates,
            total_processing_hours,
            total_days,
            average_hours_per_day,
            issues,
        })
    }

    /// 按序列标识汇总
    ///
    /// # 错误
    /// - `ConfigError::UnknownSequence`: 序列标识未登记
    pub fn aggregate_sequence_by_id(
        &self,
        store: &ConfigStore,
        request: &ProductionRequest,
        sequence_id: &str,
    ) -> crate::domain::error::ConfigResult<Option<SequenceReport>> {
        let sequence = store.sequence(sequence_id)?;
        Ok(self.aggregate_sequence(store, request, sequence))
    }

    // ==========================================
    // 工厂汇总
    // ==========================================

    /// 生成工厂级测算报告
    ///
    /// 逐序列调用序列汇总 (按配置顺序), 工厂总量:
    /// - 工时跨序列求和
    /// - 工期取各序列最大值 (工厂吞吐受最慢序列约束)
    /// - 总产量统计全部请求条目, 含不属于任何序列的产品
    ///
    /// 工厂汇总从不整体失败, 退化序列以空结果落地。
    pub fn aggregate_facility(
        &self,
        store: &ConfigStore,
        request: &ProductionRequest,
    ) -> FacilityReport {
        let mut sequences = Vec::with_capacity(store.sequences().len());
        let mut total_processing_hours = 0.0;
        let mut total_days = 0u32;

        for sequence in store.sequences() {
            let report = self.aggregate_sequence(store, request, sequence);

            if let Some(ref seq_report) = report {
                total_processing_hours += seq_report.total_processing_hours;
                total_days = total_days.max(seq_report.total_days);
            }

            sequences.push(SequenceOutcome {
                sequence_id: sequence.id.clone(),
                report,
            });
        }

        let average_hours_per_day =
            total_processing_hours / f64::from(total_days.max(1));

        FacilityReport {
            generated_at: Utc::now(),
            quantities: request.snapshot(),
            sequences,
            total_processing_hours,
            total_days,
            average_hours_per_day,
            total_quantity: request.total_quantity(),
        }
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}
