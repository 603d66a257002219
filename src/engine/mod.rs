// ==========================================
// 食品加工产能测算系统 - 引擎层
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 测算与汇总
// ==========================================
// 职责: 实现测算与汇总规则, 无状态纯计算
// 红线: 引擎不持有配置, 配置以只读句柄传入;
//       引擎不做 I/O, 渲染交给应用层
// ==========================================

pub mod aggregator;
pub mod estimator;
pub mod quantity;

// 重导出核心引擎
pub use aggregator::ReportEngine;
pub use estimator::EstimateEngine;
pub use quantity::QuantityGenerator;
