use dioxus::prelude::*;

use content::photos::PhotoId;
use content::projects::ProjectId;

mod lightbox;
use lightbox::PhotoLightbox;

mod project;
use project::ProjectModal;

// global modal stack
//
// rather than having each page carry its own modal signal logic, a global
// signal keeps the open modal alive across re-renders of whichever page
// pushed it
pub static MODAL_STACK: GlobalSignal<Vec<Modal>> = Signal::global(Vec::new);

// Modal
//
// enumerates the boxes we can display and the data needed to show the
// right one.  the lightbox carries the filtered id list from the moment
// it was opened, so previous/next wrap within the active category
#[derive(Clone, PartialEq)]
pub enum Modal {
    Project(ProjectId),
    Lightbox { ids: Vec<PhotoId>, index: usize },
}

// renders whatever is on top of the stack, once included into a page
#[component]
pub fn ModalBox() -> Element {
    match MODAL_STACK.read().last() {
        Some(Modal::Project(project_id)) => rsx! {
            ProjectModal { project_id: *project_id }
        },
        Some(Modal::Lightbox { ids, index }) => rsx! {
            PhotoLightbox { ids: ids.clone(), index: *index }
        },
        None => rsx! {},
    }
}
