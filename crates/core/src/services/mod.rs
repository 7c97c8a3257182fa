pub mod alert_service;
pub mod chart_service;
pub mod currency_service;
pub mod indicators;
pub mod news_service;
pub mod portfolio_service;
pub mod return_service;
pub mod series_service;
