pub mod certificates;
pub mod photos;
pub mod profile;
pub mod projects;
