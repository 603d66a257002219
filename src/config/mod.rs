// ==========================================
// 食品加工产能测算系统 - 配置层
// ==========================================
// 职责: 产品/序列配置的装载、查询、覆写管理
// ==========================================

pub mod store;

pub use store::ConfigStore;
