use dioxus::prelude::*;

use content::profile;

use crate::common::share;
use crate::{SharedPreferences, common};

#[component]
pub fn Contact() -> Element {
    let prefs = use_context::<SharedPreferences>();
    let entrance = common::entrance_class(&prefs.read().get().transition_direction);

    rsx! {
        div { class: "{entrance}",
            div { class: "container",
                h1 { class: "page-heading",
                    "GET IN "
                    span { class: "accent", "TOUCH" }
                }
                div { class: "page-subheading",
                    span { class: "rule" }
                    span { "CONTACT" }
                }

                div { class: "prose",
                    p {
                        "Have a project in mind, or just want to talk web development or \
                         photography? Reach out through any of the channels below."
                    }
                }

                div { class: "contact-grid", style: "margin-top: var(--space-8);",
                    div { class: "contact-card rise",
                        h3 { class: "section-title", "Email" }
                        a { href: "mailto:{profile::EMAIL}", "{profile::EMAIL}" }
                    }
                    div { class: "contact-card rise",
                        h3 { class: "section-title", "Phone" }
                        span { "{profile::PHONE}" }
                    }
                    div { class: "contact-card rise",
                        h3 { class: "section-title", "Location" }
                        span { "{profile::LOCATION}" }
                    }
                }

                div { class: "social-row",
                    for social in profile::SOCIALS.iter() {
                        a {
                            key: "{social.name}",
                            class: "btn btn-outline",
                            href: "{social.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{social.name}"
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| share::share_post(profile::NAME, profile::INTRO),
                        "Share this site"
                    }
                }
            }
        }
    }
}
