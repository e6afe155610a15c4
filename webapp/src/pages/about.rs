use dioxus::prelude::*;

use content::profile;

use crate::components::resume_button::ResumeButton;
use crate::{SharedPreferences, common};

#[component]
pub fn About() -> Element {
    let prefs = use_context::<SharedPreferences>();
    let entrance = common::entrance_class(&prefs.read().get().transition_direction);

    rsx! {
        div { class: "{entrance}",
            div { class: "container",
                h1 { class: "page-heading",
                    "ABOUT "
                    span { class: "accent", "ME" }
                }
                div { class: "page-subheading",
                    span { class: "rule" }
                    span { "PERSONAL INFO" }
                }

                section { class: "rise", style: "margin-bottom: var(--space-16);",
                    h3 { class: "section-title",
                        "I'm {profile::NAME}, a "
                        span { class: "accent", "Web Developer" }
                        " and Tech Enthusiast"
                    }

                    div { class: "prose",
                        for paragraph in profile::BIO.iter() {
                            p { "{paragraph}" }
                        }
                    }

                    div { class: "detail-grid", style: "margin-top: var(--space-8);",
                        for detail in profile::DETAILS.iter() {
                            div { key: "{detail.label}",
                                span { class: "label", "{detail.label}:" }
                                span { class: "value", "{detail.value}" }
                            }
                        }
                    }

                    div { style: "margin-top: var(--space-8);",
                        ResumeButton {}
                    }
                }

                section { class: "rise", style: "margin-bottom: var(--space-16);",
                    h3 { class: "section-title", "Skills & Technologies" }

                    div { class: "skills-strip",
                        div { class: "skills-track",
                            for skill in profile::SKILLS.iter() {
                                span { class: "skill-pill", "{skill}" }
                            }
                            // duplicate set for a seamless loop
                            for skill in profile::SKILLS.iter() {
                                span { class: "skill-pill", "{skill}" }
                            }
                        }
                    }
                }

                section { class: "rise",
                    h3 { class: "section-title", "Education" }

                    for school in profile::EDUCATION.iter() {
                        div { key: "{school.degree}", class: "education-card",
                            span { class: "years", "{school.years}" }
                            h3 { "{school.degree}" }
                            p { class: "institution", "{school.institution}" }
                            p { "{school.summary}" }
                        }
                    }
                }
            }
        }
    }
}
