pub mod alert;
pub mod analytics;
pub mod chart;
pub mod fund;
pub mod news;
pub mod price;
pub mod settings;
pub mod timeframe;
