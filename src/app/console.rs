// ==========================================
// 食品加工产能测算系统 - 控制台渲染
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 报告展示
// ==========================================
// 职责: 把结构化报告渲染为控制台文本
// 红线: 只做展示层舍入 (两位小数), 核心数值保持精确
// ==========================================

use crate::domain::report::{FacilityReport, SequenceReport};
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

// ==========================================
// ConsoleRenderer - 控制台渲染器
// ==========================================
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// 创建渲染器
    pub fn new() -> Self {
        Self
    }

    /// 渲染完整工厂报告
    pub fn render_facility(&self, report: &FacilityReport) -> String {
        let mut out = String::new();

        self.push_rule(&mut out, '=');
        let _ = writeln!(out, "工厂生产测算报告");
        self.push_rule(&mut out, '=');
        let _ = writeln!(
            out,
            "报告时间: {}",
            report.generated_at.format("%d/%m/%Y %H:%M")
        );
        let _ = writeln!(out);

        // ===== 输入产量 =====
        let _ = writeln!(out, "请求产量:");
        let mut keys: Vec<&String> = report.quantities.keys().collect();
        keys.sort_unstable();
        for key in keys {
            let _ = writeln!(out, "  • {}: {:.0} kg", key, report.quantities[key]);
        }
        let _ = writeln!(out);

        // ===== 各序列 =====
        for outcome in &report.sequences {
            match &outcome.report {
                Some(seq_report) => self.push_sequence(&mut out, seq_report),
                None => {
                    self.push_rule(&mut out, '=');
                    let _ = writeln!(out, "序列: {}", outcome.sequence_id);
                    self.push_rule(&mut out, '=');
                    let _ = writeln!(out, "  (无可解析成员, 未计算)");
                    let _ = writeln!(out);
                }
            }
        }

        // ===== 工厂总量 =====
        self.push_rule(&mut out, '=');
        let _ = writeln!(out, "工厂总量");
        self.push_rule(&mut out, '=');
        let _ = writeln!(
            out,
            "总加工工时: {:.2} 小时",
            report.total_processing_hours
        );
        let _ = writeln!(out, "总生产天数: {} 天", report.total_days);
        let _ = writeln!(
            out,
            "日均工时: {:.2} 小时/天",
            report.average_hours_per_day
        );
        let _ = writeln!(out, "总请求产量: {:.0} kg", report.total_quantity);
        self.push_rule(&mut out, '=');
        let _ = writeln!(out);

        // ===== 利用率分析 =====
        let _ = writeln!(out, "工作日利用率 (8 小时基准):");
        for outcome in &report.sequences {
            if let Some(seq_report) = &outcome.report {
                let _ = writeln!(
                    out,
                    "  • {}: {:.1}%",
                    seq_report.sequence_id,
                    seq_report.day_utilization_pct()
                );
            }
        }

        out
    }

    /// 渲染单条序列报告段落
    fn push_sequence(&self, out: &mut String, report: &SequenceReport) {
        self.push_rule(out, '=');
        let _ = writeln!(out, "序列: {}", report.sequence_id);
        self.push_rule(out, '=');

        for estimate in &report.estimates {
            let _ = writeln!(out, "{}:", estimate.product_name);
            let _ = writeln!(
                out,
                "  • 产量: {:.0} {}",
                estimate.quantity, estimate.unit
            );
            let _ = writeln!(
                out,
                "  • 加工工时: {:.2} 小时",
                estimate.processing_hours
            );
            let _ = writeln!(out, "  • 占用天数: {} 天", estimate.effective_days);
        }

        for issue in &report.issues {
            let _ = writeln!(out, "  ⚠ {}", issue);
        }

        self.push_rule(out, '─');
        let _ = writeln!(out, "序列总量:");
        let _ = writeln!(
            out,
            "  • 总加工工时: {:.2} 小时",
            report.total_processing_hours
        );
        let _ = writeln!(out, "  • 总生产天数: {} 天", report.total_days);
        let _ = writeln!(
            out,
            "  • 日均工时: {:.2} 小时/天",
            report.average_hours_per_day
        );
        let _ = writeln!(out);
    }

    fn push_rule(&self, out: &mut String, ch: char) {
        for _ in 0..RULE_WIDTH {
            out.push(ch);
        }
        out.push('\n');
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}
