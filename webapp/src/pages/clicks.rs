use dioxus::prelude::*;

use content::photos::{PHOTO_CATEGORIES, PHOTO_POSTS, PhotoCategory, PhotoId, PhotoPost};

use crate::common::share;
use crate::components::modal::{MODAL_STACK, Modal, ModalBox};
use crate::{SharedPreferences, SharedStats, common};

#[derive(Clone, PartialEq, Props)]
struct PhotoCardProps {
    post: &'static PhotoPost,
    // position within the filtered list handed to the lightbox
    index: usize,
    ids: Vec<PhotoId>,
}

#[component]
fn PhotoCard(props: PhotoCardProps) -> Element {
    let post = props.post;
    let index = props.index;
    let ids = props.ids.clone();

    let mut stats = use_context::<SharedStats>();

    let post_id = post.id;
    let liked = stats.read().is_liked(post_id);
    let likes = stats.read().likes(post_id);
    let views = stats.read().views(post_id);

    rsx! {
        div {
            class: "card photo-card",
            onclick: move |_| {
                stats.write().record_view(post_id);
                MODAL_STACK.with_mut(|v| {
                    v.push(Modal::Lightbox { ids: ids.clone(), index });
                });
            },

            div { class: "frame",
                img {
                    src: "{post.image}",
                    alt: "{post.title}",
                    loading: "lazy",
                }
                span { class: "photo-badge", "{post.category.display()}" }

                div { class: "photo-overlay",
                    div { class: "group",
                        button {
                            class: if liked { "stat-button liked" } else { "stat-button" },
                            onclick: move |event| {
                                event.stop_propagation();
                                stats.write().toggle_like(post_id);
                            },
                            "♥ {likes}"
                        }
                        span { class: "stat-button", "{views} views" }
                    }
                    button {
                        class: "stat-button",
                        onclick: move |event| {
                            event.stop_propagation();
                            share::share_post(post.title, post.description);
                        },
                        "Share"
                    }
                }
            }

            div { class: "caption", "{post.title}" }
        }
    }
}

#[component]
pub fn Clicks() -> Element {
    let prefs = use_context::<SharedPreferences>();
    let entrance = common::entrance_class(&prefs.read().get().transition_direction);

    let mut active_filter = use_signal(|| PhotoCategory::All);

    let filtered: Vec<&'static PhotoPost> = PHOTO_POSTS
        .iter()
        .filter(|post| active_filter().matches(post))
        .collect();

    let filtered_ids: Vec<PhotoId> = filtered.iter().map(|post| post.id).collect();

    rsx! {
        div { class: "{entrance}",
            div { class: "container",
                div { style: "text-align: center;",
                    h1 { class: "page-heading",
                        "MY "
                        span { class: "accent", "CLICKS" }
                    }
                    div { class: "page-subheading", style: "justify-content: center;",
                        span { class: "rule" }
                        span { "CAPTURING MOMENTS IN NATURE" }
                        span { class: "rule" }
                    }
                    div { class: "prose", style: "max-width: 720px; margin: 0 auto var(--space-12);",
                        p {
                            "A collection of my favorite nature photographs, each telling a \
                             unique story of beauty, tranquility, and the wonders of the \
                             natural world."
                        }
                    }
                }

                div { class: "chip-row",
                    for category in PHOTO_CATEGORIES.iter() {
                        button {
                            key: "{category.display()}",
                            class: if active_filter() == *category { "chip active" } else { "chip" },
                            onclick: move |_| active_filter.set(*category),
                            "{category.display()}"
                        }
                    }
                }

                div { class: "photo-grid",
                    for (index, post) in filtered.iter().enumerate() {
                        PhotoCard {
                            key: "{post.id}",
                            post: *post,
                            index,
                            ids: filtered_ids.clone(),
                        }
                    }
                }
            }
        }

        ModalBox {}
    }
}
