use super::constants::*;
use super::highlight::{Highlight, HighlightColor};
use super::phase::{PhaseChanges, PhaseSchedule};
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AimPhase {
    Idle,
    Countdown,
    Playing,
    Ended,
}

/// When a hit counts as a score milestone (gold flash instead of green).
///
/// `EveryHit` reproduces the shipped game, whose milestone check was always
/// true. `AtLeast(n)` is the threshold the check appears to have meant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MilestoneRule {
    #[default]
    EveryHit,
    AtLeast(u32),
}

impl MilestoneRule {
    #[inline]
    pub fn reached(self, score: u32) -> bool {
        match self {
            MilestoneRule::EveryHit => true,
            MilestoneRule::AtLeast(n) => score >= n,
        }
    }
}

/// Timing and rules for one aim round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimConfig {
    pub countdown: Duration,
    pub round: Duration,
    pub spawn_interval: Duration,
    pub target_lifetime: Duration,
    pub max_targets: usize,
    pub flash: Duration,
    pub milestone: MilestoneRule,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            countdown: Duration::from_millis(AIM_COUNTDOWN_MS),
            round: Duration::from_millis(AIM_ROUND_MS),
            spawn_interval: Duration::from_millis(AIM_SPAWN_INTERVAL_MS),
            target_lifetime: Duration::from_millis(AIM_TARGET_LIFETIME_MS),
            max_targets: AIM_MAX_TARGETS,
            flash: Duration::from_millis(HIGHLIGHT_FLASH_MS),
            milestone: MilestoneRule::default(),
        }
    }
}

/// A live target. `x`/`y` are normalized 0..1 screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub remaining: Duration,
}

/// First-person aim trainer: countdown, a timed round of spawning targets,
/// then a final score.
pub struct AimGame {
    config: AimConfig,
    schedule: PhaseSchedule<AimPhase>,
    rng: StdRng,
    targets: SmallVec<[Target; 8]>,
    next_id: u32,
    spawn_accum: Duration,
    score: u32,
    misses: u32,
    highlight: Highlight,
}

impl AimGame {
    pub fn new(config: AimConfig, seed: u64) -> Self {
        let mut config = config;
        let min_interval = Duration::from_millis(AIM_MIN_SPAWN_INTERVAL_MS);
        if config.spawn_interval < min_interval {
            log::warn!(
                "[aim] spawn interval {:?} too short; using {:?}",
                config.spawn_interval,
                min_interval
            );
            config.spawn_interval = min_interval;
        }
        let schedule = PhaseSchedule::new(
            AimPhase::Idle,
            &[
                (AimPhase::Countdown, config.countdown),
                (AimPhase::Playing, config.round),
            ],
            AimPhase::Ended,
        );
        Self {
            config,
            schedule,
            rng: StdRng::seed_from_u64(seed),
            targets: SmallVec::new(),
            next_id: 0,
            spawn_accum: Duration::ZERO,
            score: 0,
            misses: 0,
            highlight: Highlight::default(),
        }
    }

    #[inline]
    pub fn phase(&self) -> AimPhase {
        self.schedule.phase()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn misses(&self) -> u32 {
        self.misses
    }

    #[inline]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[inline]
    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    /// Time left in the countdown or the round.
    #[inline]
    pub fn time_left(&self) -> Duration {
        self.schedule.remaining()
    }

    /// Whole seconds to show during the countdown (3, 2, 1).
    pub fn countdown_display(&self) -> Option<u64> {
        (self.phase() == AimPhase::Countdown)
            .then(|| self.time_left().as_millis().div_ceil(1000) as u64)
    }

    /// Begin a new round from any phase, clearing the previous score.
    pub fn start(&mut self) -> PhaseChanges<AimPhase> {
        self.score = 0;
        self.misses = 0;
        self.targets.clear();
        self.spawn_accum = Duration::ZERO;
        self.highlight.clear();
        self.schedule.start()
    }

    pub fn tick(&mut self, dt: Duration) -> PhaseChanges<AimPhase> {
        self.highlight.tick(dt);
        let changes = self.schedule.tick(dt);
        match self.phase() {
            AimPhase::Playing => {
                // only the part of `dt` spent inside the round counts
                let entered = changes.iter().any(|c| c.to == AimPhase::Playing);
                let played = if entered {
                    self.config.round.saturating_sub(self.schedule.remaining())
                } else {
                    dt
                };
                self.age_targets(played);
                self.spawn_accum += played;
                while self.spawn_accum >= self.config.spawn_interval {
                    self.spawn_accum -= self.config.spawn_interval;
                    self.spawn();
                }
            }
            AimPhase::Ended => self.targets.clear(),
            AimPhase::Idle | AimPhase::Countdown => {}
        }
        changes
    }

    /// Register a hit on target `id`. Returns the new score, or `None` when
    /// the round is not running or the target is gone.
    pub fn hit(&mut self, id: u32) -> Option<u32> {
        if self.phase() != AimPhase::Playing {
            return None;
        }
        let pos = self.targets.iter().position(|t| t.id == id)?;
        self.targets.remove(pos);
        self.score += 1;
        let color = if self.config.milestone.reached(self.score) {
            HighlightColor::Gold
        } else {
            HighlightColor::Green
        };
        self.highlight.flash(color, self.config.flash);
        Some(self.score)
    }

    /// A shot that hit nothing.
    pub fn miss(&mut self) {
        if self.phase() != AimPhase::Playing {
            return;
        }
        self.misses += 1;
        self.highlight.flash(HighlightColor::Red, self.config.flash);
    }

    fn age_targets(&mut self, dt: Duration) {
        for t in &mut self.targets {
            t.remaining = t.remaining.saturating_sub(dt);
        }
        self.targets.retain(|t| !t.remaining.is_zero());
    }

    fn spawn(&mut self) {
        if self.targets.len() >= self.config.max_targets {
            return;
        }
        let target = Target {
            id: self.next_id,
            x: self.rng.gen_range(0.1..0.9),
            y: self.rng.gen_range(0.15..0.85),
            remaining: self.config.target_lifetime,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.targets.push(target);
    }
}
