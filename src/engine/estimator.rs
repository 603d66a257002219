// ==========================================
// 食品加工产能测算系统 - 测算引擎
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 单产品测算
// ==========================================
// 职责: (产品配置, 请求产量) → 多日生产测算
// 输入: ProductSpec + 产量
// 输出: ProductEstimate
// ==========================================

use crate::domain::error::{ConfigError, ConfigResult};
use crate::domain::product::{DailyThroughput, ProductSpec};
use crate::domain::report::ProductEstimate;
use crate::config::ConfigStore;
use crate::WORK_HOURS_PER_DAY;

// ==========================================
// EstimateEngine - 测算引擎
// ==========================================
// 红线: 无状态引擎, 所有方法都是纯函数
pub struct EstimateEngine;

impl EstimateEngine {
    /// 创建新的测算引擎
    pub fn new() -> Self {
        Self
    }

    /// 测算某产品给定产量的生产时间
    ///
    /// # 参数
    /// - `product_key`: 产品键 (结果标识用)
    /// - `spec`: 产品配置
    /// - `quantity`: 请求产量, 必须 >= 0
    ///
    /// # 算法
    /// 1. capacity_days = quantity / 日产能 (精确小数, 仅报告用)
    /// 2. effective_days = 单日可完成则 1, 否则向上取整到整天
    /// 3. processing_hours = quantity × 单位加工时间 (不受日产能钳制)
    /// 4. total_available_hours = effective_days × 8
    ///
    /// # 错误
    /// - `ConfigError::InvalidCapacity`: 日产能非正 (配置错误, 在测算前报告)
    /// - `ConfigError::NegativeQuantity`: 产量为负
    pub fn estimate(
        &self,
        product_key: &str,
        spec: &ProductSpec,
        quantity: f64,
    ) -> ConfigResult<ProductEstimate> {
        // 除零防线: 非正产能一律视为配置错误, 不产出任何测算
        if !(spec.daily_capacity > 0.0) {
            return Err(ConfigError::InvalidCapacity {
                key: product_key.to_string(),
                value: spec.daily_capacity,
            });
        }
        if quantity < 0.0 {
            return Err(ConfigError::NegativeQuantity {
                key: product_key.to_string(),
                value: quantity,
            });
        }

        let capacity_days = quantity / spec.daily_capacity;
        let effective_days = spec.days_required(quantity);
        let processing_hours = spec.labor_hours(quantity);
        let total_available_hours = f64::from(effective_days) * WORK_HOURS_PER_DAY;

        Ok(ProductEstimate {
            product_key: product_key.to_string(),
            product_name: spec.name.clone(),
            unit: spec.unit.clone(),
            quantity,
            processing_hours,
            capacity_days,
            effective_days,
            total_available_hours,
        })
    }

    /// 按产品键测算 (从配置仓库查找产品)
    ///
    /// # 错误
    /// - `ConfigError::UnknownProduct`: 产品键未登记
    /// - 其余同 `estimate`
    pub fn estimate_by_key(
        &self,
        store: &ConfigStore,
        product_key: &str,
        quantity: f64,
    ) -> ConfigResult<ProductEstimate> {
        let spec = store.product(product_key)?;
        self.estimate(product_key, spec, quantity)
    }
}

impl Default for EstimateEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn beef_spec() -> ProductSpec {
        ProductSpec::new("牛肉", "kg", 0.15, 500.0).unwrap()
    }

    #[test]
    fn test_estimate_within_single_day() {
        let engine = EstimateEngine::new();
        let estimate = engine.estimate("beef", &beef_spec(), 300.0).unwrap();

        assert_eq!(estimate.effective_days, 1);
        assert!((estimate.capacity_days - 0.6).abs() < 1e-9);
        assert!((estimate.processing_hours - 45.0).abs() < 1e-9);
        assert!((estimate.total_available_hours - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_reference_case_650kg() {
        // 参考用例: 日产能 500, 单位加工 0.15 h, 产量 650
        let engine = EstimateEngine::new();
        let estimate = engine.estimate("beef", &beef_spec(), 650.0).unwrap();

        assert!((estimate.capacity_days - 1.3).abs() < 1e-9);
        assert_eq!(estimate.effective_days, 2);
        assert!((estimate.processing_hours - 97.5).abs() < 1e-9);
        assert!((estimate.total_available_hours - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_at_exact_capacity_is_one_day() {
        let engine = EstimateEngine::new();
        let estimate = engine.estimate("beef", &beef_spec(), 500.0).unwrap();

        assert_eq!(estimate.effective_days, 1);
        assert!((estimate.capacity_days - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_over_capacity_at_least_two_days() {
        let engine = EstimateEngine::new();

        let estimate = engine.estimate("beef", &beef_spec(), 500.1).unwrap();
        assert_eq!(estimate.effective_days, 2);

        let estimate = engine.estimate("beef", &beef_spec(), 1250.0).unwrap();
        assert_eq!(estimate.effective_days, 3);
        assert!((estimate.capacity_days - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_zero_quantity_occupies_one_day() {
        let engine = EstimateEngine::new();
        let estimate = engine.estimate("beef", &beef_spec(), 0.0).unwrap();

        assert_eq!(estimate.effective_days, 1);
        assert!((estimate.processing_hours).abs() < 1e-9);
        assert!((estimate.capacity_days).abs() < 1e-9);
    }

    #[test]
    fn test_effective_days_never_below_capacity_days() {
        let engine = EstimateEngine::new();
        let spec = beef_spec();

        for quantity in [0.0, 10.0, 499.0, 500.0, 501.0, 650.0, 1234.5, 10000.0] {
            let estimate = engine.estimate("beef", &spec, quantity).unwrap();
            assert!(f64::from(estimate.effective_days) >= estimate.capacity_days);
            assert!(estimate.effective_days >= 1);
        }
    }

    #[test]
    fn test_processing_hours_linear_in_quantity() {
        let engine = EstimateEngine::new();
        let spec = beef_spec();

        let single = engine.estimate("beef", &spec, 320.0).unwrap();
        let double = engine.estimate("beef", &spec, 640.0).unwrap();

        assert!((double.processing_hours - 2.0 * single.processing_hours).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_rejects_negative_quantity() {
        let engine = EstimateEngine::new();
        let result = engine.estimate("beef", &beef_spec(), -1.0);

        assert!(matches!(
            result,
            Err(ConfigError::NegativeQuantity { .. })
        ));
    }

    #[test]
    fn test_estimate_reports_non_positive_capacity_before_computing() {
        let engine = EstimateEngine::new();

        // 反序列化等路径可能绕过构造校验, 引擎自身守住除零
        let broken = ProductSpec {
            name: "牛肉".to_string(),
            unit: "kg".to_string(),
            processing_hours_per_unit: 0.15,
            daily_capacity: 0.0,
        };

        let result = engine.estimate("beef", &broken, 100.0);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn test_estimate_by_key_unknown_product() {
        let engine = EstimateEngine::new();
        let store = ConfigStore::default_plant();

        let result = engine.estimate_by_key(&store, "tofu", 100.0);
        assert!(matches!(result, Err(ConfigError::UnknownProduct { .. })));
    }
}
