use dioxus::prelude::*;

use content::photos::{PhotoId, PhotoPost};

use crate::SharedStats;
use crate::common::share;
use crate::components::modal::{MODAL_STACK, Modal};

// move the open lightbox through its id list, wrapping at both ends
fn step(delta: isize) {
    MODAL_STACK.with_mut(|stack| {
        if let Some(Modal::Lightbox { ids, index }) = stack.last_mut() {
            let len = ids.len() as isize;
            if len > 0 {
                *index = (*index as isize + delta).rem_euclid(len) as usize;
            }
        }
    });
}

fn close() {
    MODAL_STACK.with_mut(|stack| {
        stack.pop();
    });
}

#[derive(Clone, PartialEq, Props)]
pub struct PhotoLightboxProps {
    ids: Vec<PhotoId>,
    index: usize,
}

#[component]
pub fn PhotoLightbox(props: PhotoLightboxProps) -> Element {
    let mut stats = use_context::<SharedStats>();

    let Some(post) = props
        .ids
        .get(props.index)
        .copied()
        .and_then(PhotoPost::find)
    else {
        return rsx! {};
    };

    let post_id = post.id;
    let position = props.index + 1;
    let total = props.ids.len();

    let liked = stats.read().is_liked(post_id);
    let likes = stats.read().likes(post_id);
    let views = stats.read().views(post_id);

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            autofocus: true,
            onclick: move |_| close(),
            onkeydown: move |event| match event.key() {
                Key::ArrowLeft => step(-1),
                Key::ArrowRight => step(1),
                Key::Escape => close(),
                _ => {}
            },

            div {
                class: "modal-card",
                onclick: move |event| event.stop_propagation(),

                button { class: "lightbox-nav prev", onclick: move |_| step(-1), "‹" }
                button { class: "lightbox-nav next", onclick: move |_| step(1), "›" }
                button { class: "modal-close", onclick: move |_| close(), "×" }

                div { style: "position: relative;",
                    img {
                        class: "lightbox-image",
                        src: "{post.image}",
                        alt: "{post.title}",
                    }
                    div { class: "lightbox-counter", "{position} / {total}" }
                }

                div { class: "lightbox-body",
                    h2 { class: "section-title", "{post.title}" }
                    div { class: "prose",
                        p { "{post.description}" }
                    }

                    div { class: "lightbox-meta",
                        div { class: "group",
                            span { "{post.date}" }
                            span { "{post.location}" }
                        }
                        div { class: "group",
                            button {
                                class: if liked { "stat-button liked" } else { "stat-button" },
                                onclick: move |_| stats.write().toggle_like(post_id),
                                "♥ {likes}"
                            }
                            span { class: "stat-button", "{views} views" }
                            button {
                                class: "stat-button",
                                onclick: move |_| share::share_post(post.title, post.description),
                                "Share"
                            }
                        }
                    }
                }
            }
        }
    }
}
