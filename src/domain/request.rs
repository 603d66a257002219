// ==========================================
// 食品加工产能测算系统 - 生产请求
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 数据模型
// ==========================================
// 红线: 缺失条目表示"跳过",不等价于产量为 0
// ==========================================

use crate::domain::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// ProductionRequest - 生产请求
// ==========================================
// 用途: 产品键 → 请求产量的点时快照,单次汇总按引用消费
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionRequest {
    quantities: HashMap<String, f64>,
}

impl ProductionRequest {
    /// 创建空的生产请求
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置某产品的请求产量
    ///
    /// # 错误
    /// - `ConfigError::NegativeQuantity`: 产量为负
    pub fn set(&mut self, product_key: &str, quantity: f64) -> ConfigResult<()> {
        if quantity < 0.0 {
            return Err(ConfigError::NegativeQuantity {
                key: product_key.to_string(),
                value: quantity,
            });
        }

        self.quantities.insert(product_key.to_string(), quantity);
        Ok(())
    }

    /// 查询某产品的请求产量
    ///
    /// # 返回
    /// - `Some(f64)`: 请求产量
    /// - `None`: 未供应产量 (汇总时跳过该产品)
    pub fn quantity_of(&self, product_key: &str) -> Option<f64> {
        self.quantities.get(product_key).copied()
    }

    /// 请求是否为空
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// 所有请求产量之和 (含不属于任何序列的产品)
    pub fn total_quantity(&self) -> f64 {
        self.quantities.values().sum()
    }

    /// 请求产量快照 (报告留存用)
    pub fn snapshot(&self) -> HashMap<String, f64> {
        self.quantities.clone()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_negative_quantity() {
        let mut request = ProductionRequest::new();
        let result = request.set("beef", -1.0);

        assert!(matches!(
            result,
            Err(ConfigError::NegativeQuantity { .. })
        ));
        assert!(request.quantity_of("beef").is_none());
    }

    #[test]
    fn test_missing_entry_is_none_not_zero() {
        let mut request = ProductionRequest::new();
        request.set("beef", 0.0).unwrap();

        assert_eq!(request.quantity_of("beef"), Some(0.0));
        assert_eq!(request.quantity_of("pork"), None);
    }

    #[test]
    fn test_total_quantity_sums_all_entries() {
        let mut request = ProductionRequest::new();
        request.set("beef", 120.0).unwrap();
        request.set("pork", 80.0).unwrap();
        request.set("cheese", 50.5).unwrap();

        assert!((request.total_quantity() - 250.5).abs() < 1e-9);
    }
}
