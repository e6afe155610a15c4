use dioxus::prelude::*;
use dioxus_router::prelude::*;

use content::profile;

use crate::preferences::Theme;
use crate::{Route, SharedPreferences, common};

// nav order drives the slide direction when moving between pages
fn nav_index(route: &Route) -> usize {
    match route {
        Route::Home {} => 0,
        Route::About {} => 1,
        Route::Resume {} => 2,
        Route::Projects {} => 3,
        Route::Clicks {} => 4,
        Route::Contact {} => 5,
        Route::PageNotFound { .. } => 0,
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    name: String,
    target: Route,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let name = props.name;
    let target = props.target;

    let mut prefs = use_context::<SharedPreferences>();

    let current: Route = use_route();
    let current_index = nav_index(&current);
    let target_index = nav_index(&target);

    rsx! {
        Link {
            class: if current == target { "nav-link active" } else { "nav-link" },
            to: target.clone(),
            onclick: move |_| {
                let direction = if target_index > current_index {
                    "slide-left"
                } else {
                    "slide-right"
                };

                let mut store = prefs.write();
                store.set_transition_direction(direction);

                // close the mobile drawer when a destination is picked
                if store.get().sidebar_open {
                    store.toggle_sidebar();
                }
            },
            "{name}"
        }
    }
}

#[component]
pub fn NavShell() -> Element {
    let mut prefs = use_context::<SharedPreferences>();
    let route: Route = use_route();

    // reset scroll and restore the title on every navigation
    let mut last_path = use_signal(String::new);
    let path = route.to_string();
    if *last_path.peek() != path {
        last_path.set(path);
        common::scroll_to_top();
        common::set_document_title(common::TITLE_ACTIVE);
    }

    let snapshot = prefs.read().get();
    let theme_label = match snapshot.theme {
        Theme::Dark => "Switch to light",
        Theme::Light => "Switch to dark",
    };

    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        div { class: "app-shell",
            aside {
                class: if snapshot.sidebar_open { "app-sidebar open" } else { "app-sidebar" },

                Link { to: Route::Home {}, class: "logo",
                    span { class: "logo-mark", "K" }
                    span { "{profile::NAME}" }
                }

                nav { class: "nav-links",
                    NavLink { name: "Home".to_owned(), target: Route::Home {} }
                    NavLink { name: "About".to_owned(), target: Route::About {} }
                    NavLink { name: "Resume".to_owned(), target: Route::Resume {} }
                    NavLink { name: "Projects".to_owned(), target: Route::Projects {} }
                    NavLink { name: "Clicks".to_owned(), target: Route::Clicks {} }
                    NavLink { name: "Contact".to_owned(), target: Route::Contact {} }
                }

                button {
                    class: "theme-toggle",
                    onclick: move |_| {
                        let theme = prefs.write().toggle_theme();
                        common::apply_body_theme(theme);
                    },
                    "{theme_label}"
                }
            }

            div { class: "app-main",
                header { class: "app-header",
                    button {
                        class: "hamburger",
                        onclick: move |_| prefs.write().toggle_sidebar(),
                        "☰"
                    }
                    span { "{profile::NAME}" }
                }

                main {
                    Outlet::<Route> {}
                }

                footer { class: "app-footer",
                    "© {year} Portfolio. All rights reserved."
                }
            }
        }
    }
}
