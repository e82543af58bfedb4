pub mod carousel;
pub mod contact;
pub mod navigation;
pub mod projects;
pub mod reveal;
