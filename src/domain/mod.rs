// ==========================================
// 食品加工产能测算系统 - 领域模型层
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 数据模型
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含测算逻辑,不含渲染逻辑
// ==========================================

pub mod error;
pub mod product;
pub mod report;
pub mod request;
pub mod sequence;
pub mod types;

// 重导出核心类型
pub use error::{ConfigError, ConfigResult};
pub use product::{DailyThroughput, ProductSpec};
pub use report::{FacilityReport, ProductEstimate, SequenceOutcome, SequenceReport};
pub use request::ProductionRequest;
pub use sequence::Sequence;
pub use types::AggregationIssue;
