mod about;
pub use about::About;

mod clicks;
pub use clicks::Clicks;

mod contact;
pub use contact::Contact;

mod home;
pub use home::Home;

mod not_found;
pub use not_found::PageNotFound;

mod projects;
pub use projects::Projects;

mod resume;
pub use resume::Resume;
