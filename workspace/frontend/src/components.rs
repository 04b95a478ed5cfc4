pub mod common;
pub mod dashboard;
pub mod entry;
pub mod history;
pub mod layout;
