mod regime;
mod stats;
mod strategy;
mod view;

pub use view::ForecastDashboard;
