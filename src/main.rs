// ==========================================
// 食品加工产能测算系统 - 控制台入口
// ==========================================
// 依据: 产能测算业务规则 v0.1
// 系统定位: 决策支持工具
// ==========================================

use anyhow::Context;
use food_plant_capacity::app::ConsoleRenderer;
use food_plant_capacity::config::ConfigStore;
use food_plant_capacity::engine::{QuantityGenerator, ReportEngine};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    food_plant_capacity::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", food_plant_capacity::APP_NAME);
    tracing::info!("系统版本: {}", food_plant_capacity::VERSION);
    tracing::info!("==================================================");

    // 可选命令行种子: food-plant-capacity [seed]
    let seed = std::env::args()
        .nth(1)
        .map(|raw| raw.parse::<u64>().context("种子必须是非负整数"))
        .transpose()?;

    // 默认工厂配置
    let mut store = ConfigStore::default_plant();

    // 示例配置覆写: 牛肉工时上调, 腌腊制品产能扩容
    store
        .set_processing_hours("beef", 0.18)
        .context("配置覆写失败")?;
    store
        .set_daily_capacity("cured_meats", 220.0)
        .context("配置覆写失败")?;

    // 生成请求产量 (80-250 kg)
    let mut generator = match seed {
        Some(seed) => {
            tracing::info!(seed, "使用种子化产量生成器");
            QuantityGenerator::from_seed(seed)
        }
        None => QuantityGenerator::new(),
    }
    .with_range(80, 250);
    let request = generator.generate(&store);

    // 生成并渲染工厂报告
    let report = ReportEngine::new().aggregate_facility(&store, &request);
    let text = ConsoleRenderer::new().render_facility(&report);
    println!("{}", text);

    tracing::info!("测算完成");
    Ok(())
}
