// Pure conversions from DOM event fields to controller inputs. Kept free of
// web-sys types so host tests can include this file directly.

// WheelEvent.deltaMode values
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

// Pixels per wheel "line" when the browser reports line deltas (Firefox)
pub const WHEEL_LINE_HEIGHT_PX: f32 = 16.0;

/// Horizontal pointer position relative to the canvas' left edge.
#[inline]
pub fn canvas_local_x(client_x: f32, rect_left: f32) -> f32 {
    client_x - rect_left
}

/// Convert a wheel delta to pixels regardless of the browser's delta mode.
/// Unknown modes and non-finite deltas give 0.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_height_px: f32) -> f32 {
    if !delta_y.is_finite() {
        return 0.0;
    }
    let dy = delta_y as f32;
    match delta_mode {
        DOM_DELTA_PIXEL => dy,
        DOM_DELTA_LINE => dy * WHEEL_LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => dy * page_height_px.max(0.0),
        _ => 0.0,
    }
}

/// X of the first usable touch point. A missing or non-finite touch yields
/// `None`, which the controller treats as no movement.
#[inline]
pub fn primary_touch_x(touch_xs: &[f32]) -> Option<f32> {
    touch_xs.first().copied().filter(|x| x.is_finite())
}

/// Parse the quiz answer field; surrounding whitespace and a leading `+`
/// are accepted.
#[inline]
pub fn parse_answer(text: &str) -> Option<i32> {
    let t = text.trim();
    t.strip_prefix('+').unwrap_or(t).parse().ok()
}
