// ==========================================
// 食品加工产能测算系统 - 产品领域模型
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 产品配置
// ==========================================
// 红线: 产能约束在构造时校验,使用点不再兜底
// ==========================================

use crate::domain::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductSpec - 产品配置
// ==========================================
// 用途: 单产品测算的不可变参考数据,按产品键查找
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpec {
    // ===== 展示信息 =====
    pub name: String,              // 产品名称 (展示用)
    pub unit: String,              // 计量单位 (如 "kg")

    // ===== 产能参数 =====
    pub processing_hours_per_unit: f64, // 单位加工时间 (小时/单位)
    pub daily_capacity: f64,            // 日最大产能 (单位/天)
}

impl ProductSpec {
    /// 创建产品配置,构造时校验不变量
    ///
    /// # 参数
    /// - `name`: 产品名称
    /// - `unit`: 计量单位
    /// - `processing_hours_per_unit`: 单位加工时间, 必须 > 0
    /// - `daily_capacity`: 日最大产能, 必须 > 0
    ///
    /// # 错误
    /// - `ConfigError::InvalidRate`: 单位加工时间非正
    /// - `ConfigError::InvalidCapacity`: 日产能非正
    pub fn new(
        name: &str,
        unit: &str,
        processing_hours_per_unit: f64,
        daily_capacity: f64,
    ) -> ConfigResult<Self> {
        if !(processing_hours_per_unit > 0.0) {
            return Err(ConfigError::InvalidRate {
                key: name.to_string(),
                value: processing_hours_per_unit,
            });
        }
        if !(daily_capacity > 0.0) {
            return Err(ConfigError::InvalidCapacity {
                key: name.to_string(),
                value: daily_capacity,
            });
        }

        Ok(Self {
            name: name.to_string(),
            unit: unit.to_string(),
            processing_hours_per_unit,
            daily_capacity,
        })
    }
}

// ==========================================
// Trait: DailyThroughput
// ==========================================
// 用途: 测算引擎的产能约束接口
pub trait DailyThroughput {
    /// 检查产量是否在单个生产日内可完成
    fn fits_single_day(&self, quantity: f64) -> bool;

    /// 计算占用的整生产日数 (最少 1 天, 余量不折算部分天)
    fn days_required(&self, quantity: f64) -> u32;

    /// 计算总加工工时 (不受日产能约束)
    fn labor_hours(&self, quantity: f64) -> f64;
}

// ==========================================
// DailyThroughput trait 实现
// ==========================================
impl DailyThroughput for ProductSpec {
    /// 检查产量是否在单个生产日内可完成
    ///
    /// # 返回
    /// - `true`: quantity ≤ daily_capacity
    /// - `false`: 需要分摊到多个生产日
    fn fits_single_day(&self, quantity: f64) -> bool {
        quantity <= self.daily_capacity
    }

    /// 计算占用的整生产日数
    ///
    /// 任何在单日产能内的产量仍占用一个完整生产日;
    /// 超出部分向上取整到整天。
    fn days_required(&self, quantity: f64) -> u32 {
        if self.fits_single_day(quantity) {
            1
        } else {
            (quantity / self.daily_capacity).ceil() as u32
        }
    }

    /// 计算总加工工时
    ///
    /// # 返回
    /// 工时 (小时), 与产量成线性关系
    fn labor_hours(&self, quantity: f64) -> f64 {
        quantity * self.processing_hours_per_unit
    }
}
