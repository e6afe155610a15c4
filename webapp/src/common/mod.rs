pub mod share;
pub mod storage;
pub mod style;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::window;

use crate::preferences::Theme;

pub const TITLE_ACTIVE: &str = "Kalp Patel | Portfolio";
pub const TITLE_HIDDEN: &str = "Come Back to Portfolio";

pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

pub fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// the palettes are keyed off the body class, so the whole document
// switches together with the store
pub fn apply_body_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        body.set_class_name(theme.class());
    }
}

// swap the tab title while the page is hidden; the listener lives for
// the whole session
pub fn watch_visibility() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let doc = document.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        let title = if doc.hidden() { TITLE_HIDDEN } else { TITLE_ACTIVE };
        doc.set_title(title);
    });

    if document
        .add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

// map the stored transition direction onto the entrance animation class;
// the store accepts any string, so unrecognized names fade
pub fn entrance_class(direction: &str) -> &'static str {
    match direction {
        "slide-right" => "page enter-slide-right",
        "slide-left" => "page enter-slide-left",
        _ => "page enter-fade",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_class_covers_unknown_directions() {
        assert_eq!(entrance_class("slide-right"), "page enter-slide-right");
        assert_eq!(entrance_class("slide-left"), "page enter-slide-left");
        assert_eq!(entrance_class("fade"), "page enter-fade");
        assert_eq!(entrance_class("spiral"), "page enter-fade");
    }
}
