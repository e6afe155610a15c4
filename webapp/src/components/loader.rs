use dioxus::prelude::*;

use content::profile;

#[component]
pub fn PageLoader() -> Element {
    rsx! {
        div { class: "page-loader",
            div { class: "spinner" }
            span { "{profile::NAME}" }
        }
    }
}
