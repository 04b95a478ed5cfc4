pub mod advisory;
pub mod loading;

pub use advisory::AdvisoryPanel;
pub use loading::LoadingIndicator;
