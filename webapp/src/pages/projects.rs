use dioxus::prelude::*;

use content::projects::{PROJECT_CATEGORIES, PROJECTS, Project, ProjectCategory};

use crate::components::modal::{MODAL_STACK, Modal, ModalBox};
use crate::{SharedPreferences, common};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: &'static Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    // load failures drop the thumbnail, not the card
    let mut failed = use_signal(|| false);

    rsx! {
        div {
            class: "card project-card",
            onclick: move |_| {
                MODAL_STACK.with_mut(|v| v.push(Modal::Project(project.id)));
            },

            div { class: "thumb",
                if failed() {
                    div { class: "image-placeholder", "Preview unavailable" }
                } else {
                    img {
                        src: "{project.image}",
                        alt: "{project.title}",
                        loading: "lazy",
                        onerror: move |_| failed.set(true),
                    }
                }
            }

            div { class: "body",
                h3 { "{project.title}" }
                p { "{project.description}" }

                if !project.tech_stack.is_empty() {
                    div { class: "tech-chips",
                        for tech in project.tech_stack.iter() {
                            span { class: "tech-chip", "{tech}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let prefs = use_context::<SharedPreferences>();
    let entrance = common::entrance_class(&prefs.read().get().transition_direction);

    let mut active_filter = use_signal(|| ProjectCategory::All);

    let filtered: Vec<&'static Project> = PROJECTS
        .iter()
        .filter(|project| active_filter().matches(project))
        .collect();

    rsx! {
        div { class: "{entrance}",
            div { class: "container",
                h1 { class: "page-heading",
                    "MY "
                    span { class: "accent", "PROJECTS" }
                }
                div { class: "page-subheading",
                    span { class: "rule" }
                    span { "WORKS" }
                }

                div { class: "chip-row",
                    for category in PROJECT_CATEGORIES.iter() {
                        button {
                            key: "{category.display()}",
                            class: if active_filter() == *category { "chip active" } else { "chip" },
                            onclick: move |_| active_filter.set(*category),
                            "{category.display()}"
                        }
                    }
                }

                div { class: "project-grid",
                    for project in filtered {
                        ProjectCard { key: "{project.id}", project }
                    }
                }
            }
        }

        ModalBox {}
    }
}
