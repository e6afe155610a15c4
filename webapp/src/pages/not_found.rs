use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::debug;

use crate::Route;

// unknown paths land on the home page, not a 404
#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    debug!("redirecting unknown path /{}", route.join("/"));

    let navigator = use_navigator();
    navigator.replace(Route::Home {});

    rsx! {}
}
