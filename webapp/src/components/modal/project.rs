use dioxus::prelude::*;

use content::projects::{Project, ProjectId};

use crate::components::modal::MODAL_STACK;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectModalProps {
    project_id: ProjectId,
}

#[component]
pub fn ProjectModal(props: ProjectModalProps) -> Element {
    let Some(project) = Project::find(props.project_id) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                MODAL_STACK.with_mut(|v| {
                    v.pop();
                });
            },

            div {
                class: "modal-card",
                onclick: move |event| event.stop_propagation(),

                button {
                    class: "modal-close",
                    onclick: move |_| {
                        MODAL_STACK.with_mut(|v| {
                            v.pop();
                        });
                    },
                    "×"
                }

                div { class: "lightbox-body",
                    h2 { class: "section-title", "{project.title}" }

                    iframe {
                        class: "demo-frame",
                        src: "{project.link}",
                        title: "Live Demo",
                        allowfullscreen: true,
                    }

                    div { class: "prose",
                        p { "{project.description}" }
                    }

                    if !project.tech_stack.is_empty() {
                        div {
                            span { class: "label", "Tech Stack:" }
                            div { class: "tech-chips",
                                for tech in project.tech_stack.iter() {
                                    span { class: "tech-chip", "{tech}" }
                                }
                            }
                        }
                    }

                    div { class: "modal-links",
                        a {
                            class: "btn btn-primary",
                            href: "{project.link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Live Demo"
                        }
                        if let Some(github) = project.github {
                            a {
                                class: "btn btn-outline",
                                href: "{github}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "GitHub Repo"
                            }
                        }
                        if let Some(docs) = project.backend_docs {
                            a {
                                class: "btn btn-outline",
                                href: "{docs}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Backend Docs"
                            }
                        }
                    }

                    if let Some(diagram) = project.db_diagram {
                        div {
                            span { class: "label", "Database Schema:" }
                            iframe {
                                class: "demo-frame",
                                src: "{diagram}",
                                title: "DB Diagram",
                                allowfullscreen: true,
                            }
                        }
                    }
                }
            }
        }
    }
}
