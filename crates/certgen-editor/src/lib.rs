pub mod editor;
pub mod history;
pub mod input;
pub mod notice;
pub mod persist;
pub mod shortcuts;
pub mod template;
pub mod viewer;
