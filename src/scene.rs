use crate::constants::{DEFAULT_PANEL_PREFIX, INITIAL_YAW_ATTR, MODEL_ATTR, PANEL_PREFIX_ATTR};
use crate::core::{ModelPreset, RotationController, Stage, StageTable, StageTracker};
use crate::panels;
use web_sys as web;

/// One rotatable model: its canvas, controller and stage bookkeeping.
pub struct Scene {
    pub canvas: web::HtmlCanvasElement,
    pub preset: ModelPreset,
    pub controller: RotationController,
    table: StageTable,
    tracker: StageTracker,
    panel_prefix: String,
}

impl Scene {
    pub fn from_canvas(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let name = canvas
            .get_attribute(MODEL_ATTR)
            .ok_or_else(|| anyhow::anyhow!("canvas has no {MODEL_ATTR}"))?;
        let preset = ModelPreset::from_name(&name)
            .ok_or_else(|| anyhow::anyhow!("unknown model {name:?}"))?;
        let table = preset.stage_table();
        anyhow::ensure!(!table.is_empty(), "{} has no stage ranges", preset.name());
        table.validate()?;
        log::debug!(
            "[stage] {} ranges={} covers_circle={}",
            preset.name(),
            table.ranges().len(),
            table.tiles_circle()
        );
        let overlaps = table.overlaps();
        if !overlaps.is_empty() {
            log::info!(
                "[stage] {} ranges overlap at {:?}; first match wins",
                preset.name(),
                overlaps
            );
        }
        let panel_prefix = canvas
            .get_attribute(PANEL_PREFIX_ATTR)
            .unwrap_or_else(|| DEFAULT_PANEL_PREFIX.to_string());
        let initial_yaw = canvas
            .get_attribute(INITIAL_YAW_ATTR)
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(0.0);
        let controller = RotationController::new(preset.rotation_config()).with_angle(initial_yaw);
        Ok(Self {
            canvas,
            preset,
            controller,
            table,
            tracker: StageTracker::new(preset.classify_while_idle()),
            panel_prefix,
        })
    }

    #[inline]
    pub fn stage(&self) -> Option<Stage> {
        self.tracker.current()
    }

    /// Integrate one frame and push stage changes to the panels.
    pub fn step(&mut self, document: &web::Document) {
        let sample = self.controller.tick();
        let max_stage = self.table.max_stage().unwrap_or(0);
        let name = self.preset.name();
        self.tracker.update(&sample, &self.table, |stage| {
            log::info!("[stage] {} -> {:?}", name, stage);
            panels::show_stage(document, &self.panel_prefix, max_stage, stage);
        });
    }
}
