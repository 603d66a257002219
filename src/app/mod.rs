// ==========================================
// 食品加工产能测算系统 - 应用层
// ==========================================
// 职责: 报告的控制台渲染 (展示胶水, 不含测算逻辑)
// ==========================================

pub mod console;

pub use console::ConsoleRenderer;
