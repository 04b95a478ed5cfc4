pub mod feed;
pub mod history;
pub mod predict;

pub use feed::{FeedFields, feed};
pub use history::history;
pub use predict::predict;
