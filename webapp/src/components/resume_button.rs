use dioxus::prelude::*;

use content::profile;

#[component]
pub fn ResumeButton() -> Element {
    rsx! {
        a {
            class: "btn btn-primary btn-pill",
            href: "{profile::RESUME_URL}",
            target: "_blank",
            rel: "noopener noreferrer",
            "Download Resume"
        }
    }
}
