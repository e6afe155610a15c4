#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use common::storage::BrowserStorage;

mod preferences;
use preferences::PreferenceStore;

mod stats;
use stats::StatsStore;

mod components;
use components::loader::PageLoader;
use components::navigation::NavShell;

mod pages;
use pages::{About, Clicks, Contact, Home, PageNotFound, Projects, Resume};

// how long the startup placeholder stays up
const STARTUP_DELAY_MS: u32 = 1_000;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

// preference and counter stores live in signals provided once at the root,
// so navigating between pages never reinitializes them
pub type SharedPreferences = Signal<PreferenceStore<BrowserStorage>>;
pub type SharedStats = Signal<StatsStore<BrowserStorage>>;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavShell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/resume")]
        Resume {},
        #[route("/projects")]
        Projects {},
        #[route("/clicks")]
        Clicks {},
        #[route("/contact")]
        Contact {},
    #[end_layout]
    #[redirect("/:..segments", |segments: Vec<String>| Route::Home {})]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let store = PreferenceStore::load(BrowserStorage);
        common::apply_body_theme(store.theme());
        Signal::new(store)
    });
    use_context_provider(|| Signal::new(StatsStore::load(BrowserStorage)));

    use_hook(common::watch_visibility);

    let mut loading = use_signal(|| true);

    use_future(move || async move {
        gloo_timers::future::TimeoutFuture::new(STARTUP_DELAY_MS).await;
        loading.set(false);
    });

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        style { "{common::style::HOME_STYLES}" }

        if loading() {
            PageLoader {}
        } else {
            Router::<Route> { config: RouterConfig::default }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> Route {
        path.parse()
            .unwrap_or_else(|_| panic!("path {path} did not resolve"))
    }

    #[test]
    fn fixed_table_resolves() {
        assert_eq!(resolve("/"), Route::Home {});
        assert_eq!(resolve("/about"), Route::About {});
        assert_eq!(resolve("/resume"), Route::Resume {});
        assert_eq!(resolve("/projects"), Route::Projects {});
        assert_eq!(resolve("/clicks"), Route::Clicks {});
        assert_eq!(resolve("/contact"), Route::Contact {});
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(resolve("/unknown"), Route::Home {});
        assert_eq!(resolve("/clicks/extra"), Route::Home {});
        assert_eq!(resolve("/a/b/c"), Route::Home {});
    }
}
