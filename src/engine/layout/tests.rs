use crate::domain::config::{Appliances, KitchenConfig, RunLengths};
use crate::domain::types::{FridgeSide, FunctionalBucket, LayoutShape, ModuleRole};
use crate::engine::layout::LayoutAllocator;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用配置快照
fn make_config(layout: LayoutShape, a: f64, b: f64, c: f64) -> KitchenConfig {
    KitchenConfig {
        layout,
        dims: RunLengths {
            a_mm: a,
            b_mm: b,
            c_mm: c,
            island_mm: 0.0,
        },
        ..KitchenConfig::default()
    }
}

fn roles_of(result: &crate::engine::layout::LayoutResult) -> Vec<ModuleRole> {
    result.modules.iter().map(|m| m.role).collect()
}

// ==========================================
// 一字型
// ==========================================

#[test]
fn test_straight_placement_order_with_fridge_left() {
    // A=2700, 水槽+洗碗机(600)+冰箱(左): 预期
    // [冰箱, 洗碗机, 水槽] → 600 地柜填充 → 残余补位
    let mut cfg = make_config(LayoutShape::Straight, 2700.0, 0.0, 0.0);
    cfg.appliances = Appliances {
        fridge: true,
        dishwasher: true,
        sink: true,
        ..Appliances::default()
    };
    cfg.fridge_side = FridgeSide::Left;
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    let roles = roles_of(&result);

    assert_eq!(
        roles,
        vec![
            ModuleRole::Fridge,
            ModuleRole::Dishwasher,
            ModuleRole::Sink,
            ModuleRole::Base,
            ModuleRole::Cargo300,
        ]
    );

    // 占用精确到每一个已落位宽度
    let run = &result.runs[0];
    assert_eq!(run.used_mm, 600.0 + 600.0 + 600.0 + 600.0 + 300.0);
    assert_eq!(run.remaining_mm, 0.0);
}

#[test]
fn test_straight_fridge_right_yields_to_base_fill() {
    // 右置冰箱列排在 600 填充之后: 墙线被填满时冰箱列让位
    let mut cfg = make_config(LayoutShape::Straight, 1800.0, 0.0, 0.0);
    cfg.appliances.fridge = true;
    cfg.fridge_side = FridgeSide::Right;
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    let roles = roles_of(&result);

    assert_eq!(
        roles,
        vec![ModuleRole::Base, ModuleRole::Base, ModuleRole::Base]
    );
    assert!(roles.iter().all(|r| *r != ModuleRole::Fridge));
}

#[test]
fn test_straight_undersized_degrades_to_empty() {
    let cfg = make_config(LayoutShape::Straight, 200.0, 0.0, 0.0);
    let result = LayoutAllocator::new().allocate(&cfg);

    assert!(result.modules.is_empty());
    assert!(result.note.is_some());
    assert_eq!(result.runs.len(), 1);
    assert_eq!(result.runs[0].used_mm, 0.0);
    assert!(!result.runs[0].note.is_empty());
}

#[test]
fn test_straight_dishwasher_left_of_sink() {
    // 固定业务规则: 两者都选时洗碗机紧贴水槽左侧
    let mut cfg = make_config(LayoutShape::Straight, 1200.0, 0.0, 0.0);
    cfg.appliances.sink = true;
    cfg.appliances.dishwasher = true;
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    let roles = roles_of(&result);
    let dw = roles.iter().position(|r| *r == ModuleRole::Dishwasher).unwrap();
    let sink = roles.iter().position(|r| *r == ModuleRole::Sink).unwrap();
    assert_eq!(sink, dw + 1);
}

// ==========================================
// 转角 (L型)
// ==========================================

#[test]
fn test_corner_minimal_runs_reserve_corner_and_cargo() {
    // A=1200, B=1200: 各预留 900 转角,剩 300 各补一个拉篮,
    // 不出现 600 地柜
    let cfg = make_config(LayoutShape::CornerL, 1200.0, 1200.0, 0.0);
    let mut cfg = cfg;
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    let roles = roles_of(&result);

    assert_eq!(
        roles,
        vec![
            ModuleRole::Corner,
            ModuleRole::Cargo300,
            ModuleRole::Corner,
            ModuleRole::Cargo300,
        ]
    );
    assert!(roles.iter().all(|r| *r != ModuleRole::Base));
    for run in &result.runs {
        assert_eq!(run.used_mm, 1200.0);
    }
}

#[test]
fn test_corner_undersized_degrades() {
    let cfg = make_config(LayoutShape::CornerL, 2400.0, 900.0, 0.0);
    let result = LayoutAllocator::new().allocate(&cfg);

    assert!(result.modules.is_empty());
    assert!(result.note.is_some());
    assert_eq!(result.runs.len(), 2);
}

#[test]
fn test_corner_wet_block_falls_back_to_run_b() {
    // A 线被转角+冰箱占满后水槽落不下 → 落到 B 线
    let mut cfg = make_config(LayoutShape::CornerL, 1500.0, 2400.0, 0.0);
    cfg.appliances.fridge = true;
    cfg.appliances.sink = true;
    cfg.fridge_side = FridgeSide::Left;
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    let sink = result
        .modules
        .iter()
        .find(|m| m.role == ModuleRole::Sink)
        .unwrap();
    assert!(sink.id.starts_with("B_"));
}

// ==========================================
// U型
// ==========================================

#[test]
fn test_u_minimal_four_corner_reservations() {
    // A=1800 吃满两个转角; B/C 各 900+300 拉篮
    let mut cfg = make_config(LayoutShape::UShaped, 1800.0, 1200.0, 1200.0);
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    let roles = roles_of(&result);

    let corners = roles.iter().filter(|r| **r == ModuleRole::Corner).count();
    let cargos = roles.iter().filter(|r| **r == ModuleRole::Cargo300).count();
    assert_eq!(corners, 4);
    assert_eq!(cargos, 2); // 仅 B/C
    assert!(roles.iter().all(|r| *r != ModuleRole::Base));

    assert_eq!(result.runs[0].remaining_mm, 0.0); // A
    assert_eq!(result.runs[1].remaining_mm, 0.0); // B: 900+300
    assert_eq!(result.runs[2].remaining_mm, 0.0); // C
}

#[test]
fn test_u_c_defaults_to_b() {
    let mut cfg = make_config(LayoutShape::UShaped, 1800.0, 1500.0, 0.0);
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    assert!(result.note.is_none());
    assert_eq!(result.runs[2].length_mm, 1500.0);
}

#[test]
fn test_u_fridge_left_prefers_run_c() {
    let mut cfg = make_config(LayoutShape::UShaped, 1800.0, 2400.0, 2400.0);
    cfg.appliances.fridge = true;
    cfg.fridge_side = FridgeSide::Left;
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    let fridge = result
        .modules
        .iter()
        .find(|m| m.role == ModuleRole::Fridge)
        .unwrap();
    assert_eq!(fridge.id, "C_FRIDGE");
}

// ==========================================
// 岛台
// ==========================================

#[test]
fn test_island_zone_appended_after_base() {
    let mut cfg = make_config(LayoutShape::Island, 2400.0, 0.0, 0.0);
    cfg.dims.island_mm = 1500.0;
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);

    let island_modules: Vec<_> = result
        .modules
        .iter()
        .filter(|m| m.bucket == FunctionalBucket::Island)
        .collect();
    // 1500 = 600×2 + 300 拉篮 (拉篮是 base 桶补位)
    assert_eq!(island_modules.len(), 2);
    assert!(result.runs.iter().any(|r| r.key == "I"));

    // 岛台模块追加在主形态模块之后
    let first_island = result
        .modules
        .iter()
        .position(|m| m.bucket == FunctionalBucket::Island)
        .unwrap();
    assert!(result
        .modules
        .iter()
        .take(first_island)
        .all(|m| m.bucket != FunctionalBucket::Island));
}

#[test]
fn test_island_too_short_is_skipped() {
    let mut cfg = make_config(LayoutShape::Island, 2400.0, 0.0, 0.0);
    cfg.dims.island_mm = 900.0;
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    assert!(result.runs.iter().all(|r| r.key != "I"));
}

// ==========================================
// 吊柜区
// ==========================================

#[test]
fn test_upper_zone_mirrors_base_widths() {
    let mut cfg = make_config(LayoutShape::Straight, 1800.0, 0.0, 0.0);
    cfg.appliances.hob = true;
    cfg.appliances.hood = true;

    let result = LayoutAllocator::new().allocate(&cfg);

    let base: Vec<_> = result
        .modules
        .iter()
        .filter(|m| m.bucket != FunctionalBucket::Upper)
        .collect();
    let uppers: Vec<_> = result
        .modules
        .iter()
        .filter(|m| m.bucket == FunctionalBucket::Upper)
        .collect();

    assert_eq!(uppers.len(), base.len());
    assert_eq!(result.upper_count, uppers.len());
    for (b, u) in base.iter().zip(uppers.iter()) {
        assert_eq!(b.width_mm, u.width_mm);
        assert_eq!(u.id, format!("U_{}", b.id));
    }

    // 灶台上方生成烟机吊柜 (按角色标记,不看文本)
    let hood = uppers.iter().find(|m| m.role == ModuleRole::Hood).unwrap();
    assert_eq!(hood.id, "U_A_COOKING");
}

#[test]
fn test_upper_zone_skips_tall_and_island() {
    let mut cfg = make_config(LayoutShape::Island, 2400.0, 0.0, 0.0);
    cfg.dims.island_mm = 1200.0;
    cfg.appliances.fridge = true;

    let result = LayoutAllocator::new().allocate(&cfg);

    for m in result
        .modules
        .iter()
        .filter(|m| m.bucket == FunctionalBucket::Upper)
    {
        let src_id = m.id.trim_start_matches("U_");
        let src = result.modules.iter().find(|b| b.id == src_id).unwrap();
        assert_ne!(src.bucket, FunctionalBucket::Tall);
        assert_ne!(src.bucket, FunctionalBucket::Island);
    }
}

#[test]
fn test_upper_zone_flag_off() {
    let mut cfg = make_config(LayoutShape::Straight, 1800.0, 0.0, 0.0);
    cfg.upper_zone_on = false;

    let result = LayoutAllocator::new().allocate(&cfg);
    assert_eq!(result.upper_count, 0);
    assert!(result
        .modules
        .iter()
        .all(|m| m.bucket != FunctionalBucket::Upper));
}

// ==========================================
// 不变量
// ==========================================

#[test]
fn test_no_run_ever_overflows() {
    let cases = vec![
        make_config(LayoutShape::Straight, 2700.0, 0.0, 0.0),
        make_config(LayoutShape::CornerL, 3100.0, 2450.0, 0.0),
        make_config(LayoutShape::UShaped, 3600.0, 1850.0, 2200.0),
        {
            let mut c = make_config(LayoutShape::Island, 2750.0, 1300.0, 0.0);
            c.dims.island_mm = 1850.0;
            c
        },
    ];

    let allocator = LayoutAllocator::new();
    for mut cfg in cases {
        cfg.appliances = Appliances {
            fridge: true,
            dishwasher: true,
            sink: true,
            hob: true,
            hood: true,
            ..Appliances::default()
        };
        let result = allocator.allocate(&cfg);
        for run in &result.runs {
            assert!(
                run.used_mm <= run.length_mm,
                "墙线 {} 超容: used={} len={}",
                run.key,
                run.used_mm,
                run.length_mm
            );
        }
    }
}

#[test]
fn test_allocate_is_idempotent() {
    let mut cfg = make_config(LayoutShape::UShaped, 3000.0, 1800.0, 2400.0);
    cfg.appliances = Appliances {
        fridge: true,
        dishwasher: true,
        sink: true,
        oven: true,
        ..Appliances::default()
    };

    let allocator = LayoutAllocator::new();
    let first = allocator.allocate(&cfg);
    let second = allocator.allocate(&cfg);

    assert_eq!(first, second);
    // 标识在布局内唯一
    let mut ids: Vec<_> = first.modules.iter().map(|m| m.id.clone()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
