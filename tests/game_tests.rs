// Host-side tests for the aim game and the math quiz.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod folio_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod highlight {
        include!("../src/core/highlight.rs");
    }
    pub mod phase {
        include!("../src/core/phase.rs");
    }
    pub mod aim {
        include!("../src/core/aim.rs");
    }
    pub mod quiz {
        include!("../src/core/quiz.rs");
    }
}

use folio_core::aim::*;
use folio_core::constants::{AIM_MAX_TARGETS, QUIZ_OPERAND_LIMIT};
use folio_core::highlight::HighlightColor;
use folio_core::phase::PhaseChange;
use folio_core::quiz::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn playing_aim(config: AimConfig) -> AimGame {
    let mut game = AimGame::new(config, 7);
    game.start();
    game.tick(config.countdown);
    assert_eq!(game.phase(), AimPhase::Playing);
    game
}

#[test]
fn aim_runs_countdown_round_then_ends() {
    let mut game = AimGame::new(AimConfig::default(), 1);
    assert_eq!(game.phase(), AimPhase::Idle);
    let changes = game.start();
    assert_eq!(
        changes.as_slice(),
        &[PhaseChange { from: AimPhase::Idle, to: AimPhase::Countdown }]
    );
    assert_eq!(game.countdown_display(), Some(3));
    game.tick(ms(1500));
    assert_eq!(game.countdown_display(), Some(2));
    game.tick(ms(1500));
    assert_eq!(game.phase(), AimPhase::Playing);
    assert_eq!(game.countdown_display(), None);

    let changes = game.tick(ms(30_000));
    assert_eq!(
        changes.as_slice(),
        &[PhaseChange { from: AimPhase::Playing, to: AimPhase::Ended }]
    );
    assert!(game.targets().is_empty());
}

#[test]
fn aim_spawns_on_interval_and_expires_targets() {
    let mut game = playing_aim(AimConfig::default());
    assert!(game.targets().is_empty());
    game.tick(ms(800));
    assert_eq!(game.targets().len(), 1);
    game.tick(ms(800));
    assert_eq!(game.targets().len(), 2);
    // first target reaches its 1.2 s lifetime here
    game.tick(ms(800));
    assert_eq!(game.targets().len(), 2);
    assert!(game.targets().iter().all(|t| t.id >= 1));
    for t in game.targets() {
        assert!((0.0..=1.0).contains(&t.x) && (0.0..=1.0).contains(&t.y));
    }
}

#[test]
fn aim_caps_live_targets() {
    let config = AimConfig {
        target_lifetime: ms(60_000),
        max_targets: 3,
        ..AimConfig::default()
    };
    let mut game = playing_aim(config);
    for _ in 0..10 {
        game.tick(ms(800));
    }
    assert_eq!(game.targets().len(), 3);
}

#[test]
fn aim_zero_spawn_interval_is_clamped() {
    let config = AimConfig {
        spawn_interval: Duration::ZERO,
        ..AimConfig::default()
    };
    let mut game = AimGame::new(config, 1);
    game.start();
    game.tick(ms(3100));
    assert_eq!(game.phase(), AimPhase::Playing);
    assert_eq!(game.targets().len(), AIM_MAX_TARGETS);
}

#[test]
fn aim_target_ids_are_whole_u32_values() {
    let config = AimConfig {
        target_lifetime: ms(60_000),
        ..AimConfig::default()
    };
    let mut game = playing_aim(config);
    game.tick(ms(2400));
    let ids: Vec<u32> = game.targets().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(game.hit(ids[2]), Some(1));
}

#[test]
fn aim_hit_scores_and_flashes() {
    let mut game = playing_aim(AimConfig::default());
    game.tick(ms(800));
    let id = game.targets()[0].id;
    assert_eq!(game.hit(id), Some(1));
    assert!(game.targets().is_empty());
    // the default milestone rule fires on every hit
    assert_eq!(game.highlight().color(), Some(HighlightColor::Gold));
    assert_eq!(game.hit(id), None);
    assert_eq!(game.score(), 1);
}

#[test]
fn aim_threshold_milestone_uses_green_until_reached() {
    let config = AimConfig {
        milestone: MilestoneRule::AtLeast(2),
        target_lifetime: ms(60_000),
        ..AimConfig::default()
    };
    let mut game = playing_aim(config);
    game.tick(ms(1600));
    let ids: Vec<u32> = game.targets().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 2);
    game.hit(ids[0]);
    assert_eq!(game.highlight().color(), Some(HighlightColor::Green));
    game.hit(ids[1]);
    assert_eq!(game.highlight().color(), Some(HighlightColor::Gold));
}

#[test]
fn aim_miss_flashes_red_only_while_playing() {
    let mut game = AimGame::new(AimConfig::default(), 3);
    game.miss();
    assert_eq!(game.misses(), 0);

    let mut game = playing_aim(AimConfig::default());
    game.miss();
    assert_eq!(game.misses(), 1);
    assert_eq!(game.highlight().color(), Some(HighlightColor::Red));
    game.tick(ms(300));
    assert_eq!(game.highlight().color(), None);
}

#[test]
fn aim_ignores_hits_outside_the_round() {
    let mut game = AimGame::new(AimConfig::default(), 5);
    game.start();
    assert_eq!(game.hit(0), None);
    game.tick(ms(3000 + 800));
    let id = game.targets()[0].id;
    game.tick(ms(30_000));
    assert_eq!(game.phase(), AimPhase::Ended);
    assert_eq!(game.hit(id), None);
}

#[test]
fn aim_restart_clears_score() {
    let mut game = playing_aim(AimConfig::default());
    game.tick(ms(800));
    let id = game.targets()[0].id;
    game.hit(id);
    game.start();
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), AimPhase::Countdown);
    assert!(game.targets().is_empty());
}

#[test]
fn aim_is_deterministic_for_a_seed() {
    let run = || {
        let mut game = playing_aim(AimConfig::default());
        game.tick(ms(1600));
        game.targets().iter().map(|t| (t.x, t.y)).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn milestone_rules() {
    assert!(MilestoneRule::EveryHit.reached(0));
    assert!(!MilestoneRule::AtLeast(30).reached(29));
    assert!(MilestoneRule::AtLeast(30).reached(30));
    assert_eq!(MilestoneRule::default(), MilestoneRule::EveryHit);
}

#[test]
fn quiz_round_lifecycle() {
    let mut quiz = MathQuiz::new(QuizConfig::default(), 11);
    assert_eq!(quiz.phase(), QuizPhase::Idle);
    assert!(quiz.question().is_none());
    assert_eq!(quiz.submit(4), None);

    quiz.start();
    assert_eq!(quiz.phase(), QuizPhase::Playing);
    let q = *quiz.question().expect("question while playing");
    assert_eq!(quiz.submit(q.answer()), Some(true));
    assert_eq!(quiz.score(), 1);
    assert_eq!(quiz.highlight().color(), Some(HighlightColor::Green));

    let q = *quiz.question().expect("next question");
    assert_eq!(quiz.submit(q.answer() + 1), Some(false));
    assert_eq!(quiz.score(), 1);
    assert_eq!(quiz.answered(), 2);
    assert_eq!(quiz.highlight().color(), Some(HighlightColor::Red));

    quiz.tick(ms(60_000));
    assert_eq!(quiz.phase(), QuizPhase::Ended);
    assert!(quiz.question().is_none());
    assert_eq!(quiz.submit(0), None);
}

#[test]
fn quiz_questions_stay_in_range() {
    let mut quiz = MathQuiz::new(QuizConfig::default(), 99);
    for _ in 0..500 {
        let q = quiz.next_question();
        assert!((1..=12).contains(&q.a) && (1..=12).contains(&q.b));
        if q.op == Operator::Sub {
            assert!(q.answer() >= 0);
        }
    }
}

#[test]
fn quiz_swaps_inverted_operand_bounds() {
    let config = QuizConfig {
        min_operand: 5,
        max_operand: 2,
        ..QuizConfig::default()
    };
    let mut quiz = MathQuiz::new(config, 1);
    let q = quiz.next_question();
    assert!((2..=5).contains(&q.a));
}

#[test]
fn quiz_huge_operand_ranges_do_not_overflow() {
    let config = QuizConfig {
        min_operand: i32::MIN,
        max_operand: i32::MAX,
        ..QuizConfig::default()
    };
    let mut quiz = MathQuiz::new(config, 4);
    for _ in 0..200 {
        let q = quiz.next_question();
        assert!(q.a.abs() <= QUIZ_OPERAND_LIMIT && q.b.abs() <= QUIZ_OPERAND_LIMIT);
        let _ = q.answer();
    }
    assert_eq!(Operator::Mul.apply(i32::MAX, 2), i32::MAX);
    assert_eq!(Operator::Sub.apply(i32::MIN, 1), i32::MIN);
}

#[test]
fn question_prompt_and_answer() {
    let q = Question {
        a: 7,
        b: 8,
        op: Operator::Mul,
    };
    assert_eq!(q.answer(), 56);
    assert_eq!(q.prompt(), "7 × 8 = ?");
    assert_eq!(Operator::Sub.apply(9, 4), 5);
    assert_eq!(Operator::Add.symbol(), "+");
}
