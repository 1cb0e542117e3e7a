use super::constants::*;
use super::highlight::{Highlight, HighlightColor};
use super::phase::{PhaseChanges, PhaseSchedule};
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "−",
            Operator::Mul => "×",
        }
    }

    #[inline]
    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Operator::Add => a.saturating_add(b),
            Operator::Sub => a.saturating_sub(b),
            Operator::Mul => a.saturating_mul(b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub a: i32,
    pub b: i32,
    pub op: Operator,
}

impl Question {
    #[inline]
    pub fn answer(&self) -> i32 {
        self.op.apply(self.a, self.b)
    }

    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.a, self.op.symbol(), self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Playing,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizConfig {
    pub round: Duration,
    pub min_operand: i32,
    pub max_operand: i32,
    pub flash: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            round: Duration::from_millis(QUIZ_ROUND_MS),
            min_operand: QUIZ_MIN_OPERAND,
            max_operand: QUIZ_MAX_OPERAND,
            flash: Duration::from_millis(HIGHLIGHT_FLASH_MS),
        }
    }
}

/// Timed arithmetic quiz. Subtraction never produces negative answers.
pub struct MathQuiz {
    config: QuizConfig,
    schedule: PhaseSchedule<QuizPhase>,
    rng: StdRng,
    question: Option<Question>,
    score: u32,
    answered: u32,
    highlight: Highlight,
}

impl MathQuiz {
    pub fn new(config: QuizConfig, seed: u64) -> Self {
        let mut config = config;
        if config.min_operand > config.max_operand {
            std::mem::swap(&mut config.min_operand, &mut config.max_operand);
        }
        let bounded = (
            config.min_operand.clamp(-QUIZ_OPERAND_LIMIT, QUIZ_OPERAND_LIMIT),
            config.max_operand.clamp(-QUIZ_OPERAND_LIMIT, QUIZ_OPERAND_LIMIT),
        );
        if bounded != (config.min_operand, config.max_operand) {
            log::warn!(
                "[quiz] operands {}..={} clamped to {}..={}",
                config.min_operand,
                config.max_operand,
                bounded.0,
                bounded.1
            );
            (config.min_operand, config.max_operand) = bounded;
        }
        Self {
            schedule: PhaseSchedule::new(
                QuizPhase::Idle,
                &[(QuizPhase::Playing, config.round)],
                QuizPhase::Ended,
            ),
            config,
            rng: StdRng::seed_from_u64(seed),
            question: None,
            score: 0,
            answered: 0,
            highlight: Highlight::default(),
        }
    }

    #[inline]
    pub fn phase(&self) -> QuizPhase {
        self.schedule.phase()
    }

    /// Current question while the round runs.
    #[inline]
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[inline]
    pub fn time_left(&self) -> Duration {
        self.schedule.remaining()
    }

    #[inline]
    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    pub fn start(&mut self) -> PhaseChanges<QuizPhase> {
        self.score = 0;
        self.answered = 0;
        self.highlight.clear();
        let changes = self.schedule.start();
        self.question = if self.phase() == QuizPhase::Playing {
            Some(self.next_question())
        } else {
            None
        };
        changes
    }

    pub fn tick(&mut self, dt: Duration) -> PhaseChanges<QuizPhase> {
        self.highlight.tick(dt);
        let changes = self.schedule.tick(dt);
        if self.phase() != QuizPhase::Playing {
            self.question = None;
        }
        changes
    }

    /// Draw a fresh question from the quiz RNG.
    pub fn next_question(&mut self) -> Question {
        let range = self.config.min_operand..=self.config.max_operand;
        let op = *Operator::ALL.choose(&mut self.rng).unwrap_or(&Operator::Add);
        let mut a = self.rng.gen_range(range.clone());
        let mut b = self.rng.gen_range(range);
        if op == Operator::Sub && a < b {
            std::mem::swap(&mut a, &mut b);
        }
        Question { a, b, op }
    }

    /// Check an answer against the current question. `None` outside a round.
    pub fn submit(&mut self, answer: i32) -> Option<bool> {
        if self.phase() != QuizPhase::Playing {
            return None;
        }
        let question = self.question?;
        let correct = question.answer() == answer;
        self.answered += 1;
        if correct {
            self.score += 1;
            self.highlight.flash(HighlightColor::Green, self.config.flash);
        } else {
            self.highlight.flash(HighlightColor::Red, self.config.flash);
        }
        self.question = Some(self.next_question());
        Some(correct)
    }
}
