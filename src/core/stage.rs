use super::rotation::FrameSample;
use smallvec::SmallVec;
use std::f32::consts::TAU;
use thiserror::Error;

/// UI stage selected by the model's yaw. Stages start at 1.
pub type Stage = u8;

/// Reduce any finite angle to `[0, 2π)`.
///
/// Non-finite input maps to 0 so callers never see NaN stages.
#[inline]
pub fn normalize(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    // `%` is exact, so values already in range come back unchanged
    let mut n = angle % TAU;
    if n < 0.0 {
        n += TAU;
    }
    // tiny negative inputs round up to exactly TAU
    if n >= TAU {
        0.0
    } else {
        n
    }
}

// Smallest f32 above a non-negative finite `x`.
#[inline]
fn next_up(x: f32) -> f32 {
    f32::from_bits(x.to_bits() + 1)
}

/// Inclusive `[lower, upper]` band of normalized yaw mapped to a stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageRange {
    pub lower: f32,
    pub upper: f32,
    pub stage: Stage,
}

impl StageRange {
    pub const fn new(lower: f32, upper: f32, stage: Stage) -> Self {
        Self {
            lower,
            upper,
            stage,
        }
    }

    #[inline]
    pub fn contains(&self, normalized: f32) -> bool {
        normalized >= self.lower && normalized <= self.upper
    }

    #[inline]
    fn intersects(&self, other: &StageRange) -> bool {
        self.lower.max(other.lower) <= self.upper.min(other.upper)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StageTableError {
    #[error("range {index} has a non-finite bound")]
    NonFinite { index: usize },
    #[error("range {index} is inverted ({lower} > {upper})")]
    Inverted { index: usize, lower: f32, upper: f32 },
    #[error("range {index} leaves [0, 2π] ({lower}..={upper})")]
    OutsideCircle { index: usize, lower: f32, upper: f32 },
    #[error("range {index} maps to stage 0; stages start at 1")]
    ZeroStage { index: usize },
}

/// Ordered threshold table for one model.
///
/// Ranges are tested in order and the first match wins. They need not tile
/// the circle; gaps classify as `None`. Overlaps are allowed at runtime and
/// can be reported with [`overlaps`](Self::overlaps).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StageTable {
    ranges: SmallVec<[StageRange; 4]>,
}

impl StageTable {
    pub fn new(ranges: &[StageRange]) -> Self {
        Self {
            ranges: SmallVec::from_slice(ranges),
        }
    }

    #[inline]
    pub fn ranges(&self) -> &[StageRange] {
        &self.ranges
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Largest stage number in the table, used to size UI panel lookups.
    pub fn max_stage(&self) -> Option<Stage> {
        self.ranges.iter().map(|r| r.stage).max()
    }

    /// Stage of the first range containing `normalize(angle)`.
    pub fn classify(&self, angle: f32) -> Option<Stage> {
        let n = normalize(angle);
        self.ranges.iter().find(|r| r.contains(n)).map(|r| r.stage)
    }

    /// Check bounds and stage numbers. Does not reject overlaps or gaps.
    pub fn validate(&self) -> Result<(), StageTableError> {
        for (index, r) in self.ranges.iter().enumerate() {
            if !(r.lower.is_finite() && r.upper.is_finite()) {
                return Err(StageTableError::NonFinite { index });
            }
            if r.lower > r.upper {
                return Err(StageTableError::Inverted {
                    index,
                    lower: r.lower,
                    upper: r.upper,
                });
            }
            if r.lower < 0.0 || r.upper > TAU {
                return Err(StageTableError::OutsideCircle {
                    index,
                    lower: r.lower,
                    upper: r.upper,
                });
            }
            if r.stage == 0 {
                return Err(StageTableError::ZeroStage { index });
            }
        }
        Ok(())
    }

    /// Index pairs `(i, j)`, `i < j`, of ranges that share at least one angle.
    pub fn overlaps(&self) -> SmallVec<[(usize, usize); 4]> {
        let mut out = SmallVec::new();
        for (i, a) in self.ranges.iter().enumerate() {
            for (j, b) in self.ranges.iter().enumerate().skip(i + 1) {
                if a.intersects(b) {
                    out.push((i, j));
                }
            }
        }
        out
    }

    /// Whether every angle in `[0, 2π)` falls in some range.
    pub fn tiles_circle(&self) -> bool {
        let mut sorted: SmallVec<[StageRange; 4]> = self.ranges.clone();
        sorted.sort_by(|a, b| a.lower.total_cmp(&b.lower));
        let mut covered = 0.0_f32;
        for r in &sorted {
            // the next range may start one ulp past the covered edge
            if r.lower > next_up(covered) {
                return false;
            }
            covered = covered.max(r.upper);
        }
        covered >= TAU
    }
}

/// Remembers the last stage reported to the UI.
///
/// Classification runs only while the model is being rotated, unless the
/// tracker was built with `classify_while_idle`; otherwise the stage from the
/// last gesture stays on screen while the model coasts.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageTracker {
    current: Option<Stage>,
    classify_while_idle: bool,
}

impl StageTracker {
    pub fn new(classify_while_idle: bool) -> Self {
        Self {
            current: None,
            classify_while_idle,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<Stage> {
        self.current
    }

    /// Classify `sample` and call `set_stage` when the stage changes.
    /// Returns the stage now in effect.
    pub fn update(
        &mut self,
        sample: &FrameSample,
        table: &StageTable,
        mut set_stage: impl FnMut(Option<Stage>),
    ) -> Option<Stage> {
        if !(sample.rotating || self.classify_while_idle) {
            return self.current;
        }
        let next = table.classify(sample.angle);
        if next != self.current {
            self.current = next;
            set_stage(next);
        }
        self.current
    }
}
