#![cfg(target_arch = "wasm32")]
use crate::constants::SCENE_CANVAS_SELECTOR;
use crate::scene::Scene;
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod games;
mod input;
mod panels;
mod scene;

use crate::core::AimGame;

// Handles the scene host reaches through the exported bindings below
#[derive(Default)]
struct Registry {
    scenes: FnvHashMap<String, Rc<RefCell<Scene>>>,
    aim: Option<Rc<RefCell<AimGame>>>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

fn with_scene<R>(canvas_id: &str, f: impl FnOnce(&Scene) -> R) -> Option<R> {
    REGISTRY.with(|r| {
        r.borrow()
            .scenes
            .get(canvas_id)
            .map(|scene| f(&*scene.borrow()))
    })
}

fn with_aim<R>(f: impl FnOnce(&mut AimGame) -> R) -> Option<R> {
    REGISTRY.with(|r| r.borrow().aim.as_ref().map(|aim| f(&mut *aim.borrow_mut())))
}

/// Current yaw (radians) of the model on canvas `canvas_id`.
#[wasm_bindgen]
pub fn scene_yaw(canvas_id: &str) -> Option<f32> {
    with_scene(canvas_id, |s| s.controller.angle())
}

/// Current yaw as a quaternion `[x, y, z, w]`.
#[wasm_bindgen]
pub fn scene_yaw_quat(canvas_id: &str) -> Option<Vec<f32>> {
    with_scene(canvas_id, |s| s.controller.yaw().to_array().to_vec())
}

#[wasm_bindgen]
pub fn scene_stage(canvas_id: &str) -> Option<u8> {
    with_scene(canvas_id, |s| s.stage()).flatten()
}

/// Ids of the live aim targets, in the same order as [`aim_target_positions`].
#[wasm_bindgen]
pub fn aim_target_ids() -> Vec<u32> {
    with_aim(|g| g.targets().iter().map(|t| t.id).collect()).unwrap_or_default()
}

/// Live aim target positions flattened as `[x, y, x, y, ...]` in 0..1 screen space.
#[wasm_bindgen]
pub fn aim_target_positions() -> Vec<f32> {
    with_aim(|g| g.targets().iter().flat_map(|t| [t.x, t.y]).collect()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn aim_hit(target_id: u32) -> Option<u32> {
    with_aim(|g| g.hit(target_id)).flatten()
}

#[wasm_bindgen]
pub fn aim_miss() {
    with_aim(|g| g.miss());
}

fn collect_scenes(document: &web::Document) -> anyhow::Result<Vec<Rc<RefCell<Scene>>>> {
    let nodes = document
        .query_selector_all(SCENE_CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut scenes = Vec::new();
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        let Ok(canvas) = node.dyn_into::<web::HtmlCanvasElement>() else {
            continue;
        };
        let id = match canvas.id() {
            id if id.is_empty() => format!("scene-{i}"),
            id => id,
        };
        match Scene::from_canvas(canvas) {
            Ok(scene) => {
                log::info!("[scene] {} uses {}", id, scene.preset.name());
                let scene = Rc::new(RefCell::new(scene));
                REGISTRY.with(|r| r.borrow_mut().scenes.insert(id, scene.clone()));
                scenes.push(scene);
            }
            Err(e) => log::error!("[scene] {} skipped: {}", id, e),
        }
    }
    Ok(scenes)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let scenes = Rc::new(collect_scenes(&document)?);
    for scene in scenes.iter() {
        events::wire_scene_input(scene);
    }
    events::wire_arrow_keys(scenes.clone());

    let aim = games::wire_aim(&document);
    REGISTRY.with(|r| r.borrow_mut().aim = aim.clone());
    let quiz = games::wire_quiz(&document);

    log::info!(
        "[init] scenes={} aim={} quiz={}",
        scenes.len(),
        aim.is_some(),
        quiz.is_some()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        scenes,
        aim,
        quiz,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
