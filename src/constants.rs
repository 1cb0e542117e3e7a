// DOM contract between the page and the front-end.

// Scene canvases carry the model name in `data-model`
pub const SCENE_CANVAS_SELECTOR: &str = "canvas[data-model]";
pub const MODEL_ATTR: &str = "data-model";
// Optional per-canvas prefix for stage panel ids, e.g. "stage-panel-" -> #stage-panel-3
pub const PANEL_PREFIX_ATTR: &str = "data-panel-prefix";
// Optional starting yaw in radians
pub const INITIAL_YAW_ATTR: &str = "data-initial-yaw";
pub const DEFAULT_PANEL_PREFIX: &str = "stage-panel-";

pub const HIDDEN_CLASS: &str = "hidden";
pub const GRABBING_CLASS: &str = "grabbing";

// Aim game
pub const AIM_START_ID: &str = "aim-start";
pub const AIM_SCORE_ID: &str = "aim-score";
pub const AIM_TIME_ID: &str = "aim-time";

// Math quiz
pub const QUIZ_START_ID: &str = "quiz-start";
pub const QUIZ_QUESTION_ID: &str = "quiz-question";
pub const QUIZ_ANSWER_ID: &str = "quiz-answer";
pub const QUIZ_SCORE_ID: &str = "quiz-score";
pub const QUIZ_TIME_ID: &str = "quiz-time";

// Frame deltas above this are clamped (tab switches, debugger pauses)
pub const MAX_FRAME_DT_MS: u64 = 250;
