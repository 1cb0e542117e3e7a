use std::time::Duration;

/// Score flash colors. The DOM layer maps these to CSS classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightColor {
    Green,
    Red,
    Gold,
}

impl HighlightColor {
    pub const ALL: [HighlightColor; 3] =
        [HighlightColor::Green, HighlightColor::Red, HighlightColor::Gold];

    pub fn css_class(self) -> &'static str {
        match self {
            HighlightColor::Green => "highlight-green",
            HighlightColor::Red => "highlight-red",
            HighlightColor::Gold => "highlight-gold",
        }
    }
}

/// Transient highlight that expires after its duration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Highlight {
    flash: Option<(HighlightColor, Duration)>,
}

impl Highlight {
    /// Replace any running flash.
    pub fn flash(&mut self, color: HighlightColor, duration: Duration) {
        self.flash = (!duration.is_zero()).then_some((color, duration));
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some((color, remaining)) = self.flash {
            let left = remaining.saturating_sub(dt);
            self.flash = (!left.is_zero()).then_some((color, left));
        }
    }

    #[inline]
    pub fn color(&self) -> Option<HighlightColor> {
        self.flash.map(|(c, _)| c)
    }

    pub fn clear(&mut self) {
        self.flash = None;
    }
}
