// ==========================================
// 食品加工产能测算系统 - 核心库
// ==========================================
// 依据: 产能测算业务规则 v0.1
// 系统定位: 决策支持工具 (纯计算核心, 无外部 I/O)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 产品/序列配置仓库
pub mod config;

// 引擎层 - 测算与汇总
pub mod engine;

// 应用层 - 控制台渲染
pub mod app;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    FacilityReport, ProductEstimate, ProductSpec, ProductionRequest, Sequence, SequenceOutcome,
    SequenceReport,
};

// 领域类型
pub use domain::types::AggregationIssue;
pub use domain::{ConfigError, ConfigResult};

// 配置
pub use config::ConfigStore;

// 引擎
pub use engine::{EstimateEngine, QuantityGenerator, ReportEngine};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "食品加工产能测算系统";

// 每日工作小时数 (固定 8 小时工作制)
pub const WORK_HOURS_PER_DAY: f64 = 8.0;

// ==========================================
// 预编译检查
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
