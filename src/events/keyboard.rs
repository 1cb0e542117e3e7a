use crate::constants::GRABBING_CLASS;
use crate::dom;
use crate::scene::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Typing in a form field must not spin the models
fn targets_text_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .map(|t| t.dyn_ref::<web::HtmlInputElement>().is_some())
        .unwrap_or(false)
}

pub fn handle_keydown(ev: &web::KeyboardEvent, scenes: &[Rc<RefCell<Scene>>]) {
    if targets_text_field(ev) {
        return;
    }
    let key = ev.key();
    let mut handled = false;
    for scene in scenes {
        handled |= scene.borrow_mut().controller.on_key_down(&key);
    }
    if handled {
        ev.prevent_default();
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, scenes: &[Rc<RefCell<Scene>>]) {
    let key = ev.key();
    for scene in scenes {
        scene.borrow_mut().controller.on_key_up(&key);
    }
}

/// Arrow keys rotate every scene on the page.
pub fn wire_arrow_keys(scenes: Rc<Vec<Rc<RefCell<Scene>>>>) {
    let Some(window) = web::window() else {
        return;
    };

    let down_scenes = scenes.clone();
    let down = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &down_scenes);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref());
    down.forget();

    let up_scenes = scenes.clone();
    let up = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &up_scenes);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref());
    up.forget();

    // keyup never arrives once the page loses focus
    let blur = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        for scene in scenes.iter() {
            let mut s = scene.borrow_mut();
            s.controller.stop();
            dom::set_class(&s.canvas, GRABBING_CLASS, false);
        }
        log::debug!("[keys] window blur; gestures released");
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
