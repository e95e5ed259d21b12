// ==========================================
// 模块化厨房配置系统 - 布局分配引擎核心
// ==========================================
// 落位顺序为固定业务规则:
//   冰箱列(左) → 洗碗机+水槽 → 灶台块 → 600 地柜填充
//   → 冰箱列(右) → 残余补位
// 红线: 洗碗机永远紧贴水槽左侧 (两者都选时)
// ==========================================

use crate::domain::config::KitchenConfig;
use crate::domain::module::Module;
use crate::domain::run::{LinearCapacity, Run, RunMeta};
use crate::domain::types::{FridgeSide, FunctionalBucket, LayoutShape, ModuleRole};
use crate::engine::run_builder::RunBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// 转角模块宽度 (mm)
pub const CORNER_MODULE_MM: f64 = 900.0;
/// 标准地柜填充宽度 (mm)
pub const BASE_UNIT_MM: f64 = 600.0;
/// 冰箱高柜宽度 (mm)
pub const FRIDGE_COLUMN_MM: f64 = 600.0;

/// 形态最小尺寸 (mm)
const MIN_STRAIGHT_A_MM: f64 = 300.0;
const MIN_CORNER_RUN_MM: f64 = 1200.0;
const MIN_U_PRIMARY_MM: f64 = 1800.0;
const MIN_ISLAND_MM: f64 = 1200.0;

// ==========================================
// LayoutResult - 布局结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// 扁平模块列表: 地柜/岛台在前,吊柜统一追加在后。
    /// 下游必须按 bucket/role 区分上下柜,不得依赖列表位置
    pub modules: Vec<Module>,
    /// 逐墙线元数据 (含岛台线 "I")
    pub runs: Vec<RunMeta>,
    /// 吊柜区自动生成的模块数
    pub upper_count: usize,
    /// 布局级诊断说明 (尺寸不足等降级场景)
    pub note: Option<String>,
}

impl LayoutResult {
    /// 全部墙线的已占用长度之和 (mm)
    pub fn total_used_mm(&self) -> f64 {
        self.runs.iter().map(|r| r.used_mm).sum()
    }
}

// 单形态脚本的中间产物
struct ShapeOutcome {
    runs: Vec<Run>,
    notes: Vec<String>,
    note: Option<String>,
}

impl ShapeOutcome {
    fn failed(runs: Vec<Run>, note: String) -> Self {
        let notes = runs.iter().map(|_| note.clone()).collect();
        Self {
            runs,
            notes,
            note: Some(note),
        }
    }
}

// ==========================================
// LayoutAllocator - 布局分配引擎
// ==========================================
pub struct LayoutAllocator {
    builder: RunBuilder,
}

impl LayoutAllocator {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            builder: RunBuilder::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分配完整布局
    ///
    /// # 参数
    /// - `cfg`: 配置快照 (只读)
    ///
    /// # 返回
    /// 布局结果。尺寸不足时返回空模块列表 + 逐墙线说明,
    /// 由调用方决定如何呈现
    #[instrument(skip_all, fields(layout = %cfg.layout))]
    pub fn allocate(&self, cfg: &KitchenConfig) -> LayoutResult {
        let mut outcome = match cfg.layout {
            LayoutShape::Straight => self.allocate_straight(cfg),
            LayoutShape::CornerL => self.allocate_corner(cfg),
            LayoutShape::UShaped => self.allocate_u(cfg),
            LayoutShape::Island => {
                // 岛台布局: 先按有效次墙长度走一字型或转角脚本
                let mut base = if cfg.dims.b_mm >= MIN_CORNER_RUN_MM {
                    self.allocate_corner(cfg)
                } else {
                    self.allocate_straight(cfg)
                };
                self.append_island_zone(cfg, &mut base);
                base
            }
        };

        let mut modules: Vec<Module> = outcome
            .runs
            .iter()
            .flat_map(|r| r.modules.iter().cloned())
            .collect();

        let upper_count = self.append_upper_zone(cfg, &mut modules);

        let runs: Vec<RunMeta> = outcome
            .runs
            .iter()
            .zip(outcome.notes.iter())
            .map(|(run, note)| RunMeta::from_run(run, note.clone()))
            .collect();

        info!(
            modules = modules.len(),
            runs = runs.len(),
            upper_count,
            degraded = outcome.note.is_some(),
            "布局分配完成"
        );

        LayoutResult {
            modules,
            runs,
            upper_count,
            note: outcome.note.take(),
        }
    }

    // ==========================================
    // 形态脚本: 一字型
    // ==========================================

    fn allocate_straight(&self, cfg: &KitchenConfig) -> ShapeOutcome {
        let a = cfg.dims.a_mm.max(0.0);
        if a < MIN_STRAIGHT_A_MM {
            return ShapeOutcome::failed(
                vec![Run::new("A", a)],
                "墙宽不足,无法布置模块 (A 线需 ≥ 300mm)。".to_string(),
            );
        }

        let mut run = Run::new("A", a);
        let t = &cfg.appliances;

        if t.fridge && cfg.fridge_side == FridgeSide::Left {
            self.builder.place_if_fits(&mut run, fridge_module("A"));
        }

        self.place_wet_block(&mut run, cfg);

        if (t.hob || t.oven) && run.can_fit(BASE_UNIT_MM) {
            self.builder.place_if_fits(&mut run, cooking_module("A"));
        }

        self.fill_base_units(&mut run);

        if t.fridge && cfg.fridge_side == FridgeSide::Right {
            self.builder.place_if_fits(&mut run, fridge_module("A"));
        }

        let note = self.builder.fill_residual(&mut run);

        ShapeOutcome {
            runs: vec![run],
            notes: vec![note],
            note: None,
        }
    }

    // ==========================================
    // 形态脚本: 转角 (L型)
    // ==========================================

    fn allocate_corner(&self, cfg: &KitchenConfig) -> ShapeOutcome {
        let a = cfg.dims.a_mm.max(0.0);
        let b = cfg.dims.b_mm.max(0.0);
        if a < MIN_CORNER_RUN_MM || b < MIN_CORNER_RUN_MM {
            return ShapeOutcome::failed(
                vec![Run::new("A", a), Run::new("B", b)],
                "转角 (L型) 布局需要 A、B 两线尺寸 (各 ≥ 1200mm)。".to_string(),
            );
        }

        let mut run_a = Run::new("A", a);
        let mut run_b = Run::new("B", b);
        let t = &cfg.appliances;

        // 两线各预留一个 900 转角
        self.builder.place_if_fits(&mut run_a, corner_module("A_CORNER"));
        self.builder.place_if_fits(&mut run_b, corner_module("B_CORNER"));

        if t.fridge && cfg.fridge_side == FridgeSide::Left {
            self.builder.place_if_fits(&mut run_a, fridge_module("A"));
        }

        // 水槽/洗碗机: A 线优先,放不下落到 B 线
        if !self.place_wet_block(&mut run_a, cfg) {
            self.place_wet_block(&mut run_b, cfg);
        }

        // 灶台: A 线优先
        if t.hob || t.oven {
            if run_a.can_fit(BASE_UNIT_MM) {
                self.builder.place_if_fits(&mut run_a, cooking_module("A"));
            } else if run_b.can_fit(BASE_UNIT_MM) {
                self.builder.place_if_fits(&mut run_b, cooking_module("B"));
            }
        }

        self.fill_base_units(&mut run_a);
        self.fill_base_units(&mut run_b);

        if t.fridge && cfg.fridge_side == FridgeSide::Right {
            self.builder.place_if_fits(&mut run_b, fridge_module("B"));
        }

        let note_a = self.builder.fill_residual(&mut run_a);
        let note_b = self.builder.fill_residual(&mut run_b);

        ShapeOutcome {
            runs: vec![run_a, run_b],
            notes: vec![note_a, note_b],
            note: None,
        }
    }

    // ==========================================
    // 形态脚本: U型
    // ==========================================

    fn allocate_u(&self, cfg: &KitchenConfig) -> ShapeOutcome {
        let a = cfg.dims.a_mm.max(0.0);
        let b = cfg.dims.b_mm.max(0.0);
        let c = cfg.dims.effective_c_mm().max(0.0);

        if a < MIN_U_PRIMARY_MM || b < MIN_CORNER_RUN_MM || c < MIN_CORNER_RUN_MM {
            return ShapeOutcome::failed(
                vec![Run::new("A", a), Run::new("B", b), Run::new("C", c)],
                "U型布局需要 A、B、C 三线尺寸 (A ≥ 1800mm, B/C ≥ 1200mm)。".to_string(),
            );
        }

        let mut run_a = Run::new("A", a);
        let mut run_b = Run::new("B", b);
        let mut run_c = Run::new("C", c);
        let t = &cfg.appliances;

        // 四个转角预留: A×2, B×1, C×1
        self.builder.place_if_fits(&mut run_a, corner_module("A_CORNER_L"));
        self.builder.place_if_fits(&mut run_a, corner_module("A_CORNER_R"));
        self.builder.place_if_fits(&mut run_b, corner_module("B_CORNER"));
        self.builder.place_if_fits(&mut run_c, corner_module("C_CORNER"));

        // 冰箱列: left → C 优先 B 兜底; right → B 优先 C 兜底
        if t.fridge {
            let (first, first_key, second, second_key) = match cfg.fridge_side {
                FridgeSide::Left => (&mut run_c, "C", &mut run_b, "B"),
                FridgeSide::Right => (&mut run_b, "B", &mut run_c, "C"),
            };
            if first.can_fit(FRIDGE_COLUMN_MM) {
                self.builder.place_if_fits(first, fridge_module(first_key));
            } else {
                self.builder.place_if_fits(second, fridge_module(second_key));
            }
        }

        // 水槽/洗碗机优先级: A → C → B
        if !self.place_wet_block(&mut run_a, cfg) {
            if !self.place_wet_block(&mut run_c, cfg) {
                self.place_wet_block(&mut run_b, cfg);
            }
        }

        // 灶台优先级: A → B → C
        if t.hob || t.oven {
            if run_a.can_fit(BASE_UNIT_MM) {
                self.builder.place_if_fits(&mut run_a, cooking_module("A"));
            } else if run_b.can_fit(BASE_UNIT_MM) {
                self.builder.place_if_fits(&mut run_b, cooking_module("B"));
            } else if run_c.can_fit(BASE_UNIT_MM) {
                self.builder.place_if_fits(&mut run_c, cooking_module("C"));
            }
        }

        self.fill_base_units(&mut run_a);
        self.fill_base_units(&mut run_b);
        self.fill_base_units(&mut run_c);

        let note_a = self.builder.fill_residual(&mut run_a);
        let note_b = self.builder.fill_residual(&mut run_b);
        let note_c = self.builder.fill_residual(&mut run_c);

        ShapeOutcome {
            runs: vec![run_a, run_b, run_c],
            notes: vec![note_a, note_b, note_c],
            note: None,
        }
    }

    // ==========================================
    // 岛台区
    // ==========================================

    /// 岛台长度达标时,独立建一条 "I" 线并纯填岛台柜。
    /// 岛台区不依赖主形态是否成功
    fn append_island_zone(&self, cfg: &KitchenConfig, outcome: &mut ShapeOutcome) {
        let island_len = cfg.dims.island_mm;
        if island_len < MIN_ISLAND_MM {
            debug!(island_mm = island_len, "岛台长度不足,跳过岛台区");
            return;
        }

        let mut run = Run::new("I", island_len);
        while run.can_fit(BASE_UNIT_MM) {
            let idx = run.modules.len() + 1;
            self.builder.place_if_fits(
                &mut run,
                Module::new(
                    format!("I_BASE_{}", idx),
                    FunctionalBucket::Island,
                    ModuleRole::Island,
                    BASE_UNIT_MM,
                    "岛台柜 600",
                ),
            );
        }
        let note = self.builder.fill_residual(&mut run);

        outcome.runs.push(run);
        outcome.notes.push(note);
    }

    // ==========================================
    // 吊柜区
    // ==========================================

    /// 对每个非岛台、非高柜模块镜像生成同宽吊柜。
    /// 转角吊柜单独标注;灶台上方且选抽油烟机时生成烟机吊柜
    fn append_upper_zone(&self, cfg: &KitchenConfig, modules: &mut Vec<Module>) -> usize {
        if !cfg.upper_zone_on {
            return 0;
        }

        let uppers: Vec<Module> = modules
            .iter()
            .filter(|m| {
                m.bucket != FunctionalBucket::Island
                    && m.bucket != FunctionalBucket::Tall
                    && m.width_mm > 0.0
            })
            .map(|m| {
                let w = m.width_mm;
                let (role, label) = match m.role {
                    ModuleRole::Corner => {
                        (ModuleRole::Upper, format!("转角吊柜 {}×{}", w, w))
                    }
                    ModuleRole::Cooking if cfg.appliances.hood => {
                        (ModuleRole::Hood, format!("烟机吊柜 {}", w))
                    }
                    _ => (ModuleRole::Upper, format!("吊柜 {}", w)),
                };
                Module::new(format!("U_{}", m.id), FunctionalBucket::Upper, role, w, label)
            })
            .collect();

        let count = uppers.len();
        modules.extend(uppers);
        count
    }

    // ==========================================
    // 公共落位片段
    // ==========================================

    /// 水区块: 洗碗机永远紧贴水槽左侧。
    ///
    /// # 返回
    /// 本线是否完成了水区块的"关键件"落位
    /// (选水槽时以水槽为准,否则以洗碗机为准)
    fn place_wet_block(&self, run: &mut Run, cfg: &KitchenConfig) -> bool {
        let t = &cfg.appliances;
        let key = run.key.clone();
        let dw_width = if t.dishwasher_width_mm > 0.0 {
            t.dishwasher_width_mm
        } else {
            600.0
        };

        if t.sink {
            if t.dishwasher && run.can_fit(dw_width) {
                self.builder
                    .place_if_fits(run, dishwasher_module(&key, dw_width));
            }
            if run.can_fit(BASE_UNIT_MM) {
                self.builder.place_if_fits(run, sink_module(&key));
                return true;
            }
            false
        } else if t.dishwasher {
            if run.can_fit(dw_width) {
                self.builder
                    .place_if_fits(run, dishwasher_module(&key, dw_width));
                return true;
            }
            false
        } else {
            // 无水区设备: 视为已完成,不再尝试其它墙线
            true
        }
    }

    /// 600 地柜填充至容量耗尽
    fn fill_base_units(&self, run: &mut Run) {
        while run.can_fit(BASE_UNIT_MM) {
            let idx = run.modules.len() + 1;
            let key = run.key.clone();
            self.builder.place_if_fits(
                run,
                Module::new(
                    format!("{}_BASE_{}", key, idx),
                    FunctionalBucket::Base,
                    ModuleRole::Base,
                    BASE_UNIT_MM,
                    "地柜 600",
                ),
            );
        }
    }
}

impl Default for LayoutAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 模块构造助手
// ==========================================

fn fridge_module(run_key: &str) -> Module {
    Module::new(
        format!("{}_FRIDGE", run_key),
        FunctionalBucket::Tall,
        ModuleRole::Fridge,
        FRIDGE_COLUMN_MM,
        "冰箱高柜 600",
    )
}

fn corner_module(id: &str) -> Module {
    Module::new(
        id,
        FunctionalBucket::Corner,
        ModuleRole::Corner,
        CORNER_MODULE_MM,
        "转角模块 900×900",
    )
}

fn dishwasher_module(run_key: &str, width_mm: f64) -> Module {
    Module::new(
        format!("{}_DISHWASHER", run_key),
        FunctionalBucket::Base,
        ModuleRole::Dishwasher,
        width_mm,
        format!("洗碗机柜 {}", width_mm),
    )
}

fn sink_module(run_key: &str) -> Module {
    Module::new(
        format!("{}_SINK", run_key),
        FunctionalBucket::Base,
        ModuleRole::Sink,
        BASE_UNIT_MM,
        "水槽柜 600",
    )
}

fn cooking_module(run_key: &str) -> Module {
    Module::new(
        format!("{}_COOKING", run_key),
        FunctionalBucket::Base,
        ModuleRole::Cooking,
        BASE_UNIT_MM,
        "灶台/烤箱柜 600",
    )
}
