// ==========================================
// 模块化厨房配置系统 - 墙线填充引擎
// ==========================================
// 职责: 单面墙线的容量受控落位与残余补位
// 输入: 墙线累加器 + 待落位模块
// 输出: 更新后的墙线 + 补位说明
// ==========================================
// 红线: 落位前必须过容量检查,落位后不回退不改宽
// ==========================================

use crate::domain::module::Module;
use crate::domain::run::{LinearCapacity, Run};
use crate::domain::types::{FunctionalBucket, ModuleRole};
use thiserror::Error;
use tracing::debug;

/// 残余补位的大补位宽度 (mm)
pub const RESIDUAL_FILLER_LARGE_MM: f64 = 450.0;
/// 残余补位的小补位宽度 (mm)
pub const RESIDUAL_FILLER_SMALL_MM: f64 = 300.0;

// ==========================================
// 落位错误
// ==========================================
// 注: 对外不可观测 —— 所有调用点先 can_fit 再 place
#[derive(Error, Debug)]
pub enum PlaceError {
    #[error("墙线 {run_key} 容量不足: 需要 {width_mm}mm, 剩余 {remaining_mm}mm")]
    CapacityExceeded {
        run_key: String,
        width_mm: f64,
        remaining_mm: f64,
    },
}

// ==========================================
// RunBuilder - 墙线填充引擎
// ==========================================
pub struct RunBuilder {
    // 无状态引擎,不需要注入依赖
}

impl RunBuilder {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 落位一个模块
    ///
    /// # 参数
    /// - `run`: 目标墙线 (会被修改)
    /// - `module`: 待落位模块
    ///
    /// # 返回
    /// - `Ok(())`: 已追加并累计占用
    /// - `Err(PlaceError::CapacityExceeded)`: 容量不足,墙线不变
    pub fn place(&self, run: &mut Run, module: Module) -> Result<(), PlaceError> {
        if !run.can_fit(module.width_mm) {
            return Err(PlaceError::CapacityExceeded {
                run_key: run.key.clone(),
                width_mm: module.width_mm,
                remaining_mm: run.remaining_mm(),
            });
        }

        run.used_mm += module.width_mm;
        run.modules.push(module);
        Ok(())
    }

    /// 容量允许时落位,否则静默跳过
    ///
    /// # 返回
    /// 是否实际落位
    pub fn place_if_fits(&self, run: &mut Run, module: Module) -> bool {
        if !run.can_fit(module.width_mm) {
            debug!(
                run_key = %run.key,
                width_mm = module.width_mm,
                remaining_mm = run.remaining_mm(),
                "容量不足,跳过落位"
            );
            return false;
        }
        // 已过容量检查,place 不会失败
        self.place(run, module).is_ok()
    }

    /// 残余补位
    ///
    /// 规则 (单调,不回溯):
    /// 1) 剩余 ≥ 450 → 追加 450 地柜
    /// 2) 剩余 ≥ 300 → 追加 300 拉篮
    /// 3) 剩余 > 0 且 < 300 → 留缝,出说明
    ///
    /// # 返回
    /// 面向调用方的补位说明
    pub fn fill_residual(&self, run: &mut Run) -> String {
        let remaining = run.remaining_mm();

        if remaining >= RESIDUAL_FILLER_LARGE_MM {
            let module = Module::new(
                format!("{}_CAB_450", run.key),
                FunctionalBucket::Base,
                ModuleRole::Base450,
                RESIDUAL_FILLER_LARGE_MM,
                "地柜 450",
            );
            self.place_if_fits(run, module);
            "已追加 450 地柜。".to_string()
        } else if remaining >= RESIDUAL_FILLER_SMALL_MM {
            let module = Module::new(
                format!("{}_CAB_300", run.key),
                FunctionalBucket::Base,
                ModuleRole::Cargo300,
                RESIDUAL_FILLER_SMALL_MM,
                "拉篮/地柜 300",
            );
            self.place_if_fits(run, module);
            "已追加 300 模块 (拉篮)。".to_string()
        } else if remaining > 0.0 {
            "剩余 < 300mm,留缝/现场封板。".to_string()
        } else {
            "无剩余。".to_string()
        }
    }
}

impl Default for RunBuilder {
    fn default() -> Self {
        Self::new()
    }
}
