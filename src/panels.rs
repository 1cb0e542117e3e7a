use crate::constants::HIDDEN_CLASS;
use crate::core::{HighlightColor, Stage};
use crate::dom;
use web_sys as web;

/// Show the panel for `stage` and hide the others (`#<prefix>1..=max`).
pub fn show_stage(document: &web::Document, prefix: &str, max_stage: Stage, stage: Option<Stage>) {
    for n in 1..=max_stage {
        if let Some(el) = document.get_element_by_id(&format!("{prefix}{n}")) {
            dom::set_class(&el, HIDDEN_CLASS, stage != Some(n));
        }
    }
}

/// Mirror a highlight color onto the element's classes.
pub fn apply_highlight(document: &web::Document, element_id: &str, color: Option<HighlightColor>) {
    if let Some(el) = document.get_element_by_id(element_id) {
        for c in HighlightColor::ALL {
            dom::set_class(&el, c.css_class(), color == Some(c));
        }
    }
}
