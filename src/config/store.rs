// ==========================================
// 食品加工产能测算系统 - 配置仓库
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 配置项全集
// ==========================================
// 职责: 配置装载、查询、覆写管理
// 红线: 显式句柄传入引擎调用, 禁止全局可变状态;
//       单写者顺序模型, 覆写对后续调用立即生效
// ==========================================

use crate::domain::error::{ConfigError, ConfigResult};
use crate::domain::product::ProductSpec;
use crate::domain::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// ConfigStore - 配置仓库
// ==========================================
// 存储: 产品键 → ProductSpec 映射 + 有序序列表
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigStore {
    products: HashMap<String, ProductSpec>,
    sequences: Vec<Sequence>,
}

impl ConfigStore {
    /// 创建空的配置仓库
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建默认工厂配置
    ///
    /// 参考产线: 屠宰线 (牛肉、猪肉) 与深加工线 (腌腊制品、奶酪),
    /// 单位加工时间与日产能取自产线基准参数。
    pub fn default_plant() -> Self {
        let mut store = Self::new();

        // 构造参数均为正值, 校验不会失败
        store
            .add_product("beef", ProductSpec::new("牛肉", "kg", 0.15, 500.0).unwrap())
            .add_product("pork", ProductSpec::new("猪肉", "kg", 0.12, 400.0).unwrap())
            .add_product(
                "cured_meats",
                ProductSpec::new("腌腊制品", "kg", 0.25, 200.0).unwrap(),
            )
            .add_product("cheese", ProductSpec::new("奶酪", "kg", 0.20, 150.0).unwrap());

        store.add_sequence(Sequence::new("slaughter_line", &["beef", "pork"]));
        store.add_sequence(Sequence::new("processing_line", &["cured_meats", "cheese"]));

        store
    }

    // ==========================================
    // 产品配置
    // ==========================================

    /// 登记产品配置 (已存在则覆盖)
    pub fn add_product(&mut self, product_key: &str, spec: ProductSpec) -> &mut Self {
        self.products.insert(product_key.to_string(), spec);
        self
    }

    /// 查询产品配置
    ///
    /// # 错误
    /// - `ConfigError::UnknownProduct`: 产品键未登记
    pub fn product(&self, product_key: &str) -> ConfigResult<&ProductSpec> {
        self.products
            .get(product_key)
            .ok_or_else(|| ConfigError::UnknownProduct {
                key: product_key.to_string(),
            })
    }

    /// 产品是否已登记
    pub fn has_product(&self, product_key: &str) -> bool {
        self.products.contains_key(product_key)
    }

    /// 已登记的产品键 (排序后, 遍历顺序稳定)
    pub fn product_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.products.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    // ==========================================
    // 配置覆写 (按键更新单字段, 立即生效)
    // ==========================================

    /// 更新某产品的单位加工时间
    ///
    /// # 错误
    /// - `ConfigError::UnknownProduct`: 产品键未登记
    /// - `ConfigError::InvalidRate`: 新值非正
    pub fn set_processing_hours(&mut self, product_key: &str, hours: f64) -> ConfigResult<()> {
        if !(hours > 0.0) {
            return Err(ConfigError::InvalidRate {
                key: product_key.to_string(),
                value: hours,
            });
        }

        let spec = self
            .products
            .get_mut(product_key)
            .ok_or_else(|| ConfigError::UnknownProduct {
                key: product_key.to_string(),
            })?;

        spec.processing_hours_per_unit = hours;
        tracing::info!(
            product_key,
            hours,
            "单位加工时间已更新"
        );
        Ok(())
    }

    /// 更新某产品的日最大产能
    ///
    /// # 错误
    /// - `ConfigError::UnknownProduct`: 产品键未登记
    /// - `ConfigError::InvalidCapacity`: 新值非正
    pub fn set_daily_capacity(&mut self, product_key: &str, capacity: f64) -> ConfigResult<()> {
        if !(capacity > 0.0) {
            return Err(ConfigError::InvalidCapacity {
                key: product_key.to_string(),
                value: capacity,
            });
        }

        let spec = self
            .products
            .get_mut(product_key)
            .ok_or_else(|| ConfigError::UnknownProduct {
                key: product_key.to_string(),
            })?;

        spec.daily_capacity = capacity;
        tracing::info!(
            product_key,
            capacity,
            "日最大产能已更新"
        );
        Ok(())
    }

    // ==========================================
    // 序列配置
    // ==========================================

    /// 登记生产序列 (保持配置顺序)
    pub fn add_sequence(&mut self, sequence: Sequence) -> &mut Self {
        self.sequences.push(sequence);
        self
    }

    /// 所有序列, 按配置顺序
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// 按标识查找序列
    ///
    /// # 错误
    /// - `ConfigError::UnknownSequence`: 序列标识未登记
    pub fn sequence(&self, sequence_id: &str) -> ConfigResult<&Sequence> {
        self.sequences
            .iter()
            .find(|seq| seq.id == sequence_id)
            .ok_or_else(|| ConfigError::UnknownSequence {
                id: sequence_id.to_string(),
            })
    }

    // ==========================================
    // 配置快照 (JSON)
    // ==========================================

    /// 导出配置快照 (JSON 字符串)
    pub fn snapshot_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从配置快照恢复
    pub fn from_snapshot_json(json: &str) -> ConfigResult<Self> {
        let store: Self = serde_json::from_str(json)?;
        store.validate()?;
        Ok(store)
    }

    /// 从配置文件装载
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let store = Self::from_snapshot_json(&raw)?;
        tracing::info!(path = %path.display(), "配置文件装载成功");
        Ok(store)
    }

    /// 校验整库配置不变量
    ///
    /// 反序列化绕过了 `ProductSpec::new`, 装载后统一补校验。
    fn validate(&self) -> ConfigResult<()> {
        for (key, spec) in &self.products {
            if !(spec.daily_capacity > 0.0) {
                return Err(ConfigError::InvalidCapacity {
                    key: key.clone(),
                    value: spec.daily_capacity,
                });
            }
            if !(spec.processing_hours_per_unit > 0.0) {
                return Err(ConfigError::InvalidRate {
                    key: key.clone(),
                    value: spec.processing_hours_per_unit,
                });
            }
        }

        for sequence in &self.sequences {
            for product_key in &sequence.product_keys {
                if !self.has_product(product_key) {
                    return Err(ConfigError::UnknownProduct {
                        key: product_key.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
