use dioxus::prelude::*;

use content::certificates::CERTIFICATES;

use crate::components::resume_button::ResumeButton;
use crate::{SharedPreferences, common};

#[component]
pub fn Resume() -> Element {
    let prefs = use_context::<SharedPreferences>();
    let entrance = common::entrance_class(&prefs.read().get().transition_direction);

    rsx! {
        div { class: "{entrance}",
            div { class: "container",
                h1 { class: "page-heading",
                    "MY "
                    span { class: "accent", "RESUME" }
                }
                div { class: "page-subheading",
                    span { class: "rule" }
                    span { "PROFESSIONAL CERTIFICATES" }
                }

                div { class: "prose",
                    p {
                        "View my professional certifications and courses. For personal \
                         information, skills, and education, check the About section."
                    }
                }

                div { style: "margin: var(--space-8) 0;",
                    ResumeButton {}
                }

                div { class: "cert-grid",
                    for cert in CERTIFICATES.iter() {
                        div { key: "{cert.id}", class: "{cert.accent.class()}",
                            span { class: "cert-kind", "{cert.kind}" }
                            h3 { "{cert.title}" }
                            span { "{cert.platform}" }
                            a {
                                class: "cert-link",
                                href: "{cert.verify_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "View Certificate"
                            }
                        }
                    }
                }
            }
        }
    }
}
