use crate::constants::*;
use crate::core::{
    AimConfig, AimGame, AimPhase, MathQuiz, PhaseChange, QuizConfig, QuizPhase,
};
use crate::dom;
use crate::input;
use crate::panels;
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn seed() -> u64 {
    let t = js_sys::Date::now() as u64;
    let r = (js_sys::Math::random() * u32::MAX as f64) as u64;
    t ^ (r << 21)
}

pub fn log_changes<P: Debug>(tag: &str, changes: &[PhaseChange<P>]) {
    for c in changes {
        log::info!("[{}] {:?} -> {:?}", tag, c.from, c.to);
    }
}

/// Aim game wiring. Returns `None` when the page has no aim-game markup.
pub fn wire_aim(document: &web::Document) -> Option<Rc<RefCell<AimGame>>> {
    document.get_element_by_id(AIM_SCORE_ID)?;
    let game = Rc::new(RefCell::new(AimGame::new(AimConfig::default(), seed())));
    let game_start = game.clone();
    let wired = dom::add_click_listener(document, AIM_START_ID, move || {
        let changes = game_start.borrow_mut().start();
        log_changes("aim", &changes);
    });
    if !wired {
        log::info!("[aim] no #{}; aim game disabled", AIM_START_ID);
        return None;
    }
    Some(game)
}

pub fn render_aim(document: &web::Document, game: &AimGame) {
    let score = format!("Score: {}  Misses: {}", game.score(), game.misses());
    dom::set_text(document, AIM_SCORE_ID, &score);
    let time = match game.phase() {
        AimPhase::Idle => String::new(),
        AimPhase::Countdown => game
            .countdown_display()
            .map(|s| s.to_string())
            .unwrap_or_default(),
        AimPhase::Playing => format!("{:.1}s", game.time_left().as_secs_f32()),
        AimPhase::Ended => "Time!".to_string(),
    };
    dom::set_text(document, AIM_TIME_ID, &time);
    panels::apply_highlight(document, AIM_SCORE_ID, game.highlight().color());
}

/// Quiz wiring: a start button plus an answer field submitted with Enter.
pub fn wire_quiz(document: &web::Document) -> Option<Rc<RefCell<MathQuiz>>> {
    let answer = document
        .get_element_by_id(QUIZ_ANSWER_ID)?
        .dyn_into::<web::HtmlInputElement>()
        .ok()?;
    let quiz = Rc::new(RefCell::new(MathQuiz::new(QuizConfig::default(), seed())));

    let quiz_start = quiz.clone();
    let wired = dom::add_click_listener(document, QUIZ_START_ID, move || {
        let changes = quiz_start.borrow_mut().start();
        log_changes("quiz", &changes);
    });
    if !wired {
        log::info!("[quiz] no #{}; quiz disabled", QUIZ_START_ID);
        return None;
    }

    let quiz_answer = quiz.clone();
    let field = answer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let Some(value) = input::parse_answer(&field.value()) else {
            return;
        };
        if let Some(correct) = quiz_answer.borrow_mut().submit(value) {
            log::info!("[quiz] answer {} correct={}", value, correct);
        }
        field.set_value("");
    }) as Box<dyn FnMut(_)>);
    _ = answer.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();

    Some(quiz)
}

pub fn render_quiz(document: &web::Document, quiz: &MathQuiz) {
    let prompt = match quiz.phase() {
        QuizPhase::Idle => String::new(),
        QuizPhase::Playing => quiz.question().map(|q| q.prompt()).unwrap_or_default(),
        QuizPhase::Ended => format!("{} of {} correct", quiz.score(), quiz.answered()),
    };
    dom::set_text(document, QUIZ_QUESTION_ID, &prompt);
    dom::set_text(document, QUIZ_SCORE_ID, &format!("Score: {}", quiz.score()));
    let time = match quiz.phase() {
        QuizPhase::Playing => format!("{}s", quiz.time_left().as_secs()),
        _ => String::new(),
    };
    dom::set_text(document, QUIZ_TIME_ID, &time);
    panels::apply_highlight(document, QUIZ_SCORE_ID, quiz.highlight().color());
}
