use crate::constants::GRABBING_CLASS;
use crate::dom;
use crate::input;
use crate::scene::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach pointer, touch and wheel listeners that drive one scene.
pub fn wire_scene_input(scene: &Rc<RefCell<Scene>>) {
    wire_pointerdown(scene);
    wire_pointermove(scene);
    wire_pointerup(scene);
    wire_touch(scene);
    wire_wheel(scene);
}

fn wire_pointerdown(scene: &Rc<RefCell<Scene>>) {
    let scene_cb = scene.clone();
    let canvas = scene.borrow().canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // touch is handled by the touch listeners
        if ev.pointer_type() == "touch" {
            return;
        }
        let mut s = scene_cb.borrow_mut();
        let x = input::canvas_local_x(ev.client_x() as f32, dom::canvas_left(&s.canvas));
        s.controller.on_drag_start(x);
        _ = s.canvas.set_pointer_capture(ev.pointer_id());
        dom::set_class(&s.canvas, GRABBING_CLASS, true);
        log::info!("[drag] begin on {}", s.preset.name());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(scene: &Rc<RefCell<Scene>>) {
    let scene = scene.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.pointer_type() == "touch" {
            return;
        }
        let mut s = scene.borrow_mut();
        if !s.controller.is_dragging() {
            return;
        }
        let width = dom::canvas_css_width(&s.canvas);
        let x = input::canvas_local_x(ev.client_x() as f32, dom::canvas_left(&s.canvas));
        s.controller.on_drag_move(x, width);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(scene: &Rc<RefCell<Scene>>) {
    let scene = scene.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.pointer_type() == "touch" {
            return;
        }
        let mut s = scene.borrow_mut();
        if !s.controller.on_drag_end() {
            return;
        }
        dom::set_class(&s.canvas, GRABBING_CLASS, false);
        log::info!(
            "[drag] end on {} v={:.4}",
            s.preset.name(),
            s.controller.velocity()
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        for kind in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

fn touch_x(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<f32> {
    let list = ev.touches();
    let left = dom::canvas_left(canvas);
    let xs: Vec<f32> = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| input::canvas_local_x(t.client_x() as f32, left))
        .collect();
    input::primary_touch_x(&xs)
}

fn wire_touch(scene: &Rc<RefCell<Scene>>) {
    let canvas = scene.borrow().canvas.clone();

    let scene_start = scene.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let mut s = scene_start.borrow_mut();
        if let Some(x) = touch_x(&ev, &s.canvas) {
            s.controller.on_touch_start(x);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref());
    start.forget();

    let scene_move = scene.clone();
    let moved = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let mut s = scene_move.borrow_mut();
        // a touch list without a usable point is a zero delta
        if let Some(x) = touch_x(&ev, &s.canvas) {
            let width = dom::canvas_css_width(&s.canvas);
            s.controller.on_touch_move(x, width);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("touchmove", moved.as_ref().unchecked_ref());
    moved.forget();

    let scene_end = scene.clone();
    let end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        scene_end.borrow_mut().controller.on_touch_end();
    }) as Box<dyn FnMut(_)>);
    for kind in ["touchend", "touchcancel"] {
        _ = canvas.add_event_listener_with_callback(kind, end.as_ref().unchecked_ref());
    }
    end.forget();
}

fn wire_wheel(scene: &Rc<RefCell<Scene>>) {
    let scene_cb = scene.clone();
    let canvas = scene.borrow().canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let mut s = scene_cb.borrow_mut();
        let page_h = s.canvas.get_bounding_client_rect().height() as f32;
        let dy = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), page_h);
        s.controller.on_wheel(dy);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
