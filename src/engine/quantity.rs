// ==========================================
// 食品加工产能测算系统 - 产量生成器
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 产量来源
// ==========================================
// 职责: 为每个已登记产品生成一个随机请求产量
// 定位: 核心外部的"产量来源"参考实现, 核心只消费其输出
// ==========================================

use crate::config::ConfigStore;
use crate::domain::request::ProductionRequest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// 默认产量区间 (kg)
const DEFAULT_MIN_QTY: u32 = 50;
const DEFAULT_MAX_QTY: u32 = 300;

// ==========================================
// QuantityGenerator - 产量生成器
// ==========================================
// 种子化后可复现, 用于演示与测试
pub struct QuantityGenerator {
    rng: StdRng,
    min_qty: u32,
    max_qty: u32,
}

impl QuantityGenerator {
    /// 创建生成器 (熵种子, 不可复现)
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// 创建种子化生成器 (可复现)
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            min_qty: DEFAULT_MIN_QTY,
            max_qty: DEFAULT_MAX_QTY,
        }
    }

    /// 设置产量区间 [min, max]
    ///
    /// min > max 时交换两端, 保证区间始终合法。
    pub fn with_range(mut self, min_qty: u32, max_qty: u32) -> Self {
        self.min_qty = min_qty.min(max_qty);
        self.max_qty = min_qty.max(max_qty);
        self
    }

    /// 为配置仓库中每个产品生成请求产量
    ///
    /// 产量在 [min, max] 区间内均匀取整数 (kg 粒度),
    /// 遍历顺序按产品键排序, 保证种子化后结果稳定。
    pub fn generate(&mut self, store: &ConfigStore) -> ProductionRequest {
        let mut request = ProductionRequest::new();

        for product_key in store.product_keys() {
            let quantity = f64::from(self.rng.gen_range(self.min_qty..=self.max_qty));
            // 区间下界为 u32, 生成值不可能为负, set 不会失败
            let _ = request.set(product_key, quantity);
            tracing::debug!(product_key, quantity, "已生成请求产量");
        }

        request
    }
}

impl Default for QuantityGenerator {
    fn default() -> Self {
        Self::new()
    }
}
