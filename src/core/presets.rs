use super::rotation::RotationConfig;
use super::stage::{StageRange, StageTable};
use std::f32::consts::{PI, TAU};

// Threshold tables per model. These were tuned scene by scene and differ
// between near-identical models (stage 2 starts at 2.4, 1.7 or 1.4); keep
// them as data rather than merging them into one mapping.

pub const ISLAND_STAGES: &[StageRange] = &[
    StageRange::new(5.45, 5.85, 4),
    StageRange::new(0.85, 1.3, 3),
    StageRange::new(2.4, 2.6, 2),
    StageRange::new(4.25, 4.75, 1),
];

pub const SHOWROOM_STAGES: &[StageRange] = &[
    StageRange::new(5.45, 5.85, 4),
    StageRange::new(0.85, 1.3, 3),
    StageRange::new(1.7, 2.6, 2),
    StageRange::new(4.25, 4.75, 1),
];

pub const ROOM_STAGES: &[StageRange] = &[
    StageRange::new(5.45, 5.85, 4),
    StageRange::new(0.85, 1.3, 3),
    StageRange::new(1.4, 2.6, 2),
    StageRange::new(4.25, 4.75, 1),
];

// Quarter turns with shared edges; every angle maps to a stage.
pub const GHOST_KITTY_STAGES: &[StageRange] = &[
    StageRange::new(0.0, 1.6, 1),
    StageRange::new(1.5, 3.2, 2),
    StageRange::new(3.1, 4.8, 3),
    StageRange::new(4.7, TAU, 4),
];

/// The rotatable models shown on the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModelPreset {
    #[default]
    Island,
    Showroom,
    Room,
    GhostKitty,
}

impl ModelPreset {
    pub const ALL: [ModelPreset; 4] = [
        ModelPreset::Island,
        ModelPreset::Showroom,
        ModelPreset::Room,
        ModelPreset::GhostKitty,
    ];

    /// Parse the `data-model` attribute of a scene canvas.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if let Some(preset) = Self::ALL.into_iter().find(|p| p.name() == name) {
            return Some(preset);
        }
        match name.as_str() {
            "car" | "cars" => Some(ModelPreset::Showroom),
            "ghostkitty" | "kitty" => Some(ModelPreset::GhostKitty),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ModelPreset::Island => "island",
            ModelPreset::Showroom => "showroom",
            ModelPreset::Room => "room",
            ModelPreset::GhostKitty => "ghost-kitty",
        }
    }

    pub fn rotation_config(self) -> RotationConfig {
        let base = RotationConfig::default();
        match self {
            ModelPreset::Island => base,
            ModelPreset::Showroom => RotationConfig {
                key_step: 0.01 * PI,
                key_velocity: 0.005,
                ..base
            },
            ModelPreset::Room => RotationConfig {
                key_step: 0.01 * PI,
                key_velocity: 0.005,
                epsilon: 1e-4,
                ..base
            },
            ModelPreset::GhostKitty => RotationConfig {
                touch_multiplier: 0.005,
                auto_rotate: Some(0.003),
                ..base
            },
        }
    }

    pub fn stage_ranges(self) -> &'static [StageRange] {
        match self {
            ModelPreset::Island => ISLAND_STAGES,
            ModelPreset::Showroom => SHOWROOM_STAGES,
            ModelPreset::Room => ROOM_STAGES,
            ModelPreset::GhostKitty => GHOST_KITTY_STAGES,
        }
    }

    pub fn stage_table(self) -> StageTable {
        StageTable::new(self.stage_ranges())
    }

    /// The auto-rotating model keeps its stage in sync while it spins.
    pub fn classify_while_idle(self) -> bool {
        matches!(self, ModelPreset::GhostKitty)
    }
}
