// ==========================================
// 模块化厨房配置系统 - 墙线领域模型
// ==========================================
// 红线: 容量约束优先,任何落位必须先过容量检查;
//       已落位模块不回退、不改宽
// ==========================================

use crate::domain::module::Module;
use serde::{Deserialize, Serialize};

// ==========================================
// Run - 单面墙线累加器
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// 墙线标识 (A/B/C/I)
    pub key: String,
    /// 墙线总长 (mm)
    pub length_mm: f64,
    /// 已占用长度 (mm),恒等于已落位模块宽度之和
    pub used_mm: f64,
    /// 已落位模块 (按落位顺序)
    pub modules: Vec<Module>,
}

// ==========================================
// Trait: LinearCapacity
// ==========================================
// 用途: 墙线填充引擎的容量检查接口
pub trait LinearCapacity {
    /// 检查给定宽度是否可落位
    fn can_fit(&self, width_mm: f64) -> bool;

    /// 剩余可用长度 (mm)
    fn remaining_mm(&self) -> f64;
}

impl Run {
    /// 创建空墙线
    pub fn new(key: impl Into<String>, length_mm: f64) -> Self {
        Self {
            key: key.into(),
            length_mm,
            used_mm: 0.0,
            modules: Vec::new(),
        }
    }
}

impl LinearCapacity for Run {
    fn can_fit(&self, width_mm: f64) -> bool {
        self.used_mm + width_mm <= self.length_mm
    }

    fn remaining_mm(&self) -> f64 {
        (self.length_mm - self.used_mm).max(0.0)
    }
}

// ==========================================
// RunMeta - 墙线结果元数据
// ==========================================
// 面向调用方的诊断视图: 长度/占用/剩余/说明
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMeta {
    pub key: String,
    pub length_mm: f64,
    pub used_mm: f64,
    pub remaining_mm: f64,
    pub note: String,
}

impl RunMeta {
    /// 从墙线生成元数据
    pub fn from_run(run: &Run, note: impl Into<String>) -> Self {
        Self {
            key: run.key.clone(),
            length_mm: run.length_mm,
            used_mm: run.used_mm,
            remaining_mm: run.remaining_mm(),
            note: note.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{FunctionalBucket, ModuleRole};

    #[test]
    fn test_capacity_check() {
        let mut run = Run::new("A", 1000.0);
        assert!(run.can_fit(1000.0));
        assert!(!run.can_fit(1000.1));

        run.used_mm = 700.0;
        assert!(run.can_fit(300.0));
        assert!(!run.can_fit(301.0));
        assert_eq!(run.remaining_mm(), 300.0);
    }

    #[test]
    fn test_remaining_clamped_at_zero() {
        let mut run = Run::new("A", 600.0);
        run.used_mm = 600.0;
        assert_eq!(run.remaining_mm(), 0.0);
    }

    #[test]
    fn test_meta_from_run() {
        let mut run = Run::new("B", 1200.0);
        run.modules.push(Module::new(
            "B_CORNER",
            FunctionalBucket::Corner,
            ModuleRole::Corner,
            900.0,
            "转角模块 900×900",
        ));
        run.used_mm = 900.0;

        let meta = RunMeta::from_run(&run, "剩余 300mm");
        assert_eq!(meta.key, "B");
        assert_eq!(meta.used_mm, 900.0);
        assert_eq!(meta.remaining_mm, 300.0);
    }
}
