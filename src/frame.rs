use crate::constants::MAX_FRAME_DT_MS;
use crate::core::{AimGame, MathQuiz};
use crate::games;
use crate::scene::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub document: web::Document,
    pub scenes: Rc<Vec<Rc<RefCell<Scene>>>>,
    pub aim: Option<Rc<RefCell<AimGame>>>,
    pub quiz: Option<Rc<RefCell<MathQuiz>>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        // Rotation integrates per frame, not per second, matching the input tuning
        for scene in self.scenes.iter() {
            scene.borrow_mut().step(&self.document);
        }

        if let Some(aim) = &self.aim {
            let changes = aim.borrow_mut().tick(dt);
            games::log_changes("aim", &changes);
            games::render_aim(&self.document, &aim.borrow());
        }

        if let Some(quiz) = &self.quiz {
            let changes = quiz.borrow_mut().tick(dt);
            games::log_changes("quiz", &changes);
            games::render_quiz(&self.document, &quiz.borrow());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
