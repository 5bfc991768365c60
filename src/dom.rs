use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::state::sections::{SectionBounds, SectionId};
use crate::state::theme::Theme;

pub fn prefers_dark_scheme() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map_or(false, |query| query.matches())
}

/// Mirrors the theme onto `<html class="dark">` for the stylesheet.
pub fn apply_theme_class(theme: Theme) {
    if let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls a section to the top of the viewport. Returns `false`
/// when the section is not in the document.
pub fn scroll_to_section(id: SectionId) -> bool {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id.dom_id()));
    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            debug!("No #{} in the document, ignoring navigation", id.dom_id());
            false
        }
    }
}

pub fn measure_section(id: SectionId) -> Option<SectionBounds> {
    let element = window()?
        .document()?
        .get_element_by_id(id.dom_id())?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionBounds {
        id,
        offset_top: f64::from(element.offset_top()),
        offset_height: f64::from(element.offset_height()),
    })
}
