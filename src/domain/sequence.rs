// ==========================================
// 食品加工产能测算系统 - 生产序列
// ==========================================
// 依据: 产能测算业务规则 v0.1 - 序列配置
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Sequence - 生产序列
// ==========================================
// 用途: 一组相关产品的有序分组 (如屠宰线、深加工线)
// 红线: 成员顺序只影响报告展示,不影响总量 (sum/max 与顺序无关)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    pub id: String,                // 序列标识
    pub product_keys: Vec<String>, // 成员产品键, 按配置顺序
}

impl Sequence {
    /// 创建生产序列
    pub fn new(id: &str, product_keys: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            product_keys: product_keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// 序列成员数
    pub fn len(&self) -> usize {
        self.product_keys.len()
    }

    /// 序列是否没有成员
    pub fn is_empty(&self) -> bool {
        self.product_keys.is_empty()
    }
}
