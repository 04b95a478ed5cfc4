mod filters;
mod table;
mod view;

pub use view::History;
