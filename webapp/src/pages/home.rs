use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_timers::future::TimeoutFuture;

use content::profile;

use crate::{Route, SharedPreferences, common};

const ROLE_INTERVAL_MS: u32 = 3_000;

#[component]
pub fn Home() -> Element {
    let prefs = use_context::<SharedPreferences>();

    let mut role_index = use_signal(|| 0usize);

    // cycle the headline label; the task is dropped with the page, which
    // cancels the timer
    use_future(move || async move {
        loop {
            TimeoutFuture::new(ROLE_INTERVAL_MS).await;
            role_index.with_mut(|i| *i = (*i + 1) % profile::ROLES.len());
        }
    });

    let entrance = common::entrance_class(&prefs.read().get().transition_direction);
    let role = profile::ROLES[role_index() % profile::ROLES.len()];

    rsx! {
        div { class: "{entrance}",
            div { class: "hero",
                div { class: "hero-text",
                    span { class: "hero-tagline", "{profile::TAGLINE}" }

                    h1 { class: "hero-title",
                        span { "Hi, I'm" }
                        span { class: "hero-name", "{profile::NAME}" }
                        span { class: "role-line",
                            // keyed so the entrance replays on every swap
                            span { key: "{role_index()}", class: "role-label", "{role}" }
                            span { class: "role-caret" }
                        }
                    }

                    p { class: "hero-intro", "{profile::INTRO}" }

                    div { class: "hero-actions",
                        Link { to: Route::About {}, class: "btn btn-primary", "EXPLORE MY WORK" }
                        Link { to: Route::Contact {}, class: "btn btn-outline", "CONTACT ME" }
                    }
                }

                div { class: "portrait",
                    div { class: "portrait-ring",
                        div { class: "portrait-ring-inner",
                            img { src: "{profile::PORTRAIT_URL}", alt: "Profile" }
                        }
                    }
                    div { class: "portrait-badge",
                        p { class: "badge-top", "STILL" }
                        p { class: "badge-bottom", "LEARNING" }
                    }
                }
            }
        }
    }
}
