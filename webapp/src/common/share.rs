use wasm_bindgen::JsValue;
use web_sys::{ShareData, window};

// Hand the post to the native share sheet when the host browser has one,
// otherwise copy a composed line to the clipboard and confirm.  Both
// branches return promises we deliberately do not await.
pub fn share_post(title: &str, text: &str) {
    let Some(win) = window() else {
        return;
    };

    let href = win.location().href().unwrap_or_default();
    let navigator = win.navigator();

    let has_native_share =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false);

    if has_native_share {
        let data = ShareData::new();
        data.set_title(title);
        data.set_text(text);
        data.set_url(&href);

        let _ = navigator.share_with_data(&data);
    } else {
        let _ = navigator.clipboard().write_text(&format!("{title} - {href}"));
        let _ = win.alert_with_message("Link copied to clipboard!");
    }
}
