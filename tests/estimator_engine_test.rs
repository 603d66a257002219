// ==========================================
// 测算引擎集成测试
// ==========================================
// 职责: 验证单产品测算的公式与边界行为
// 场景: 单日/多日产量、零产量、配置错误
// ==========================================

use food_plant_capacity::config::ConfigStore;
use food_plant_capacity::domain::{ConfigError, ProductSpec};
use food_plant_capacity::engine::EstimateEngine;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用产品配置
fn make_spec(rate: f64, capacity: f64) -> ProductSpec {
    ProductSpec::new("测试产品", "kg", rate, capacity).unwrap()
}

// ==========================================
// 公式验证
// ==========================================

#[test]
fn test_quantity_within_capacity_takes_one_full_day() {
    let engine = EstimateEngine::new();
    let spec = make_spec(0.15, 500.0);

    for quantity in [1.0, 120.0, 499.0, 500.0] {
        let estimate = engine.estimate("beef", &spec, quantity).unwrap();

        assert_eq!(estimate.effective_days, 1, "quantity={}", quantity);
        assert!(estimate.capacity_days <= 1.0 + 1e-9);
    }
}

#[test]
fn test_quantity_over_capacity_rounds_up_to_whole_days() {
    let engine = EstimateEngine::new();
    let spec = make_spec(0.15, 500.0);

    let cases = [(501.0, 2), (650.0, 2), (1000.0, 2), (1001.0, 3), (2600.0, 6)];
    for (quantity, expected_days) in cases {
        let estimate = engine.estimate("beef", &spec, quantity).unwrap();

        assert_eq!(estimate.effective_days, expected_days, "quantity={}", quantity);
        assert!(estimate.effective_days >= 2);
        assert!(f64::from(estimate.effective_days) >= estimate.capacity_days);
    }
}

#[test]
fn test_reference_case_650kg_at_500_per_day() {
    let engine = EstimateEngine::new();
    let spec = make_spec(0.15, 500.0);

    let estimate = engine.estimate("beef", &spec, 650.0).unwrap();

    assert!((estimate.capacity_days - 1.3).abs() < 1e-9);
    assert_eq!(estimate.effective_days, 2);
    assert!((estimate.processing_hours - 97.5).abs() < 1e-9);
    assert!((estimate.total_available_hours - 16.0).abs() < 1e-9);
}

#[test]
fn test_processing_hours_scale_linearly() {
    let engine = EstimateEngine::new();
    let spec = make_spec(0.25, 200.0);

    let base = engine.estimate("cured_meats", &spec, 90.0).unwrap();
    let doubled = engine.estimate("cured_meats", &spec, 180.0).unwrap();

    assert!((doubled.processing_hours - 2.0 * base.processing_hours).abs() < 1e-9);
}

#[test]
fn test_available_hours_not_clamping_processing_hours() {
    let engine = EstimateEngine::new();
    // 高工时产品: 工时可超过可用工时, 不做钳制
    let spec = make_spec(2.0, 100.0);

    let estimate = engine.estimate("aged_cheese", &spec, 100.0).unwrap();

    assert!((estimate.processing_hours - 200.0).abs() < 1e-9);
    assert!((estimate.total_available_hours - 8.0).abs() < 1e-9);
    assert!(estimate.processing_hours > estimate.total_available_hours);
}

// ==========================================
// 错误路径
// ==========================================

#[test]
fn test_unknown_product_is_configuration_error() {
    let engine = EstimateEngine::new();
    let store = ConfigStore::default_plant();

    let result = engine.estimate_by_key(&store, "ghost_product", 10.0);

    match result {
        Err(ConfigError::UnknownProduct { key }) => assert_eq!(key, "ghost_product"),
        other => panic!("期望 UnknownProduct, 得到 {:?}", other),
    }
}

#[test]
fn test_estimate_by_key_uses_current_configuration() {
    let engine = EstimateEngine::new();
    let mut store = ConfigStore::default_plant();

    let before = engine.estimate_by_key(&store, "beef", 100.0).unwrap();
    store.set_processing_hours("beef", 0.30).unwrap();
    let after = engine.estimate_by_key(&store, "beef", 100.0).unwrap();

    // 覆写对后续调用立即生效
    assert!((before.processing_hours - 15.0).abs() < 1e-9);
    assert!((after.processing_hours - 30.0).abs() < 1e-9);
}
