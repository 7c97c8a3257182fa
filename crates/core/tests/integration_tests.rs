use chrono::NaiveDate;
use fund_tracker_core::errors::CoreError;
use fund_tracker_core::models::alert::{AlertKind, AlertSettings};
use fund_tracker_core::models::chart::FundChart;
use fund_tracker_core::models::fund::{Fund, FundChanges};
use fund_tracker_core::models::news::{NewsItem, Sentiment};
use fund_tracker_core::models::settings::Settings;
use fund_tracker_core::models::timeframe::Timeframe;
use fund_tracker_core::repository::catalog::{reference_funds, reference_news};
use fund_tracker_core::repository::memory::InMemoryFundRepository;
use fund_tracker_core::repository::traits::FundRepository;
use fund_tracker_core::FundTracker;

// ═══════════════════════════════════════════════════════════════════
// Mock Fund Repository (a catalog supplied by the host)
// ═══════════════════════════════════════════════════════════════════

struct MockFundRepository {
    funds: Vec<Fund>,
    news: Vec<NewsItem>,
}

impl MockFundRepository {
    fn new() -> Self {
        Self {
            funds: vec![Fund {
                id: "mock-balanced".into(),
                isin: "XX0000000001".into(),
                name: "Mock Balanced Fund".into(),
                current_nav: 200.0,
                currency: "USD".into(),
                changes: FundChanges {
                    daily: -7.5,
                    weekly: 0.0,
                    monthly: 0.0,
                    yearly: 25.0,
                },
                investment: 1000.0,
                top_holdings: Vec::new(),
                sector_allocation: Vec::new(),
                geographic_exposure: Vec::new(),
            }],
            news: vec![NewsItem {
                id: "mock-news".into(),
                title: "Mock headline".into(),
                source: "Wire".into(),
                date: make_date(2025, 1, 10),
                sentiment: Sentiment::Negative,
                impact: -4,
                summary: "Something happened.".into(),
                related_funds: vec!["mock-balanced".into()],
            }],
        }
    }
}

impl FundRepository for MockFundRepository {
    fn name(&self) -> &str {
        "Mock"
    }

    fn funds(&self) -> &[Fund] {
        &self.funds
    }

    fn news(&self) -> &[NewsItem] {
        &self.news
    }
}

fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    make_date(2025, 1, 15)
}

fn seeded_tracker(seed: u64) -> FundTracker {
    let mut tracker = FundTracker::new();
    tracker.set_seed(Some(seed));
    tracker
}

// ═══════════════════════════════════════════════════════════════════
// Reference catalog
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_reference_catalog_has_four_funds() {
    let tracker = FundTracker::new();
    let ids: Vec<&str> = tracker.funds().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "jupiter-gold-silver",
            "allianz-income-growth",
            "franklin-technology",
            "franklin-us-opportunities",
        ]
    );
}

#[test]
fn test_reference_breakdowns_sum_to_one_hundred() {
    for fund in reference_funds() {
        assert_eq!(fund.top_holdings.len(), 10, "{}", fund.id);
        assert!((Fund::breakdown_total(&fund.sector_allocation) - 100.0).abs() < 1e-9);
        assert!((Fund::breakdown_total(&fund.geographic_exposure) - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_fund_lookup() {
    let tracker = FundTracker::new();
    let fund = tracker.fund("franklin-technology").unwrap();
    assert_eq!(fund.current_nav, 157.83);
    assert_eq!(fund.investment, 6500.0);
}

#[test]
fn test_unknown_fund_is_not_found_everywhere() {
    let tracker = FundTracker::new();

    assert!(matches!(tracker.fund("nope"), Err(CoreError::FundNotFound(ref id)) if id == "nope"));
    assert!(tracker.fund_returns("nope").unwrap_err().is_not_found());
    assert!(tracker
        .fund_chart_at("nope", Timeframe::OneMonth, false, today())
        .unwrap_err()
        .is_not_found());
    assert!(tracker.news_for_fund("nope").unwrap_err().is_not_found());
    assert!(tracker.net_news_impact("nope").unwrap_err().is_not_found());
}

#[test]
fn test_fund_lookup_is_case_sensitive() {
    let tracker = FundTracker::new();
    assert!(tracker.fund("Franklin-Technology").is_err());
}

// ═══════════════════════════════════════════════════════════════════
// Returns & portfolio
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_fund_returns_through_facade() {
    let tracker = FundTracker::new();
    let r = tracker.fund_returns("jupiter-gold-silver").unwrap();
    assert!((r.current_value - 5725.0).abs() < 1e-9);
    assert!((r.profit - 725.0).abs() < 1e-9);
    assert!((r.profit_percentage - 14.5).abs() < 1e-9);
}

#[test]
fn test_all_fund_returns_match_totals() {
    let tracker = FundTracker::new();
    let all = tracker.all_fund_returns();
    let totals = tracker.portfolio_totals();

    assert_eq!(all.len(), 4);
    let value: f64 = all.iter().map(|r| r.current_value).sum();
    let profit: f64 = all.iter().map(|r| r.profit).sum();
    assert_eq!(totals.total_investment, 26500.0);
    assert!((totals.total_current_value - value).abs() < 1e-9);
    assert!((totals.total_profit - profit).abs() < 1e-9);
}

#[test]
fn test_portfolio_allocation_through_facade() {
    let tracker = FundTracker::new();
    let slices = tracker.portfolio_allocation();
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Jupiter Gold", "Allianz Income", "Franklin Technology", "Franklin U.S."]
    );
    let total: f64 = slices.iter().map(|s| s.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

// ═══════════════════════════════════════════════════════════════════
// Charts
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_chart_point_counts_per_timeframe() {
    let tracker = seeded_tracker(1);
    let expected = [
        (Timeframe::OneWeek, 7),
        (Timeframe::OneMonth, 30),
        (Timeframe::ThreeMonths, 90),
        (Timeframe::SixMonths, 180),
        (Timeframe::OneYear, 365),
        (Timeframe::Max, 731),
    ];
    for (tf, count) in expected {
        let chart = tracker
            .fund_chart_at("allianz-income-growth", tf, false, today())
            .unwrap();
        assert_eq!(chart.points.len(), count, "{tf}");
        assert_eq!(chart.points.last().unwrap().date, today());
    }
}

#[test]
fn test_chart_moving_average_coverage() {
    let tracker = seeded_tracker(2);
    let month = tracker
        .fund_chart_at("franklin-technology", Timeframe::OneMonth, false, today())
        .unwrap();
    let max = tracker
        .fund_chart_at("franklin-technology", Timeframe::Max, false, today())
        .unwrap();
    assert_eq!(month.averaged_points(), 0);
    assert_eq!(max.averaged_points(), 682);
}

#[test]
fn test_seeded_charts_are_reproducible() {
    let a = seeded_tracker(7)
        .fund_chart_at("jupiter-gold-silver", Timeframe::OneYear, false, today())
        .unwrap();
    let b = seeded_tracker(7)
        .fund_chart_at("jupiter-gold-silver", Timeframe::OneYear, false, today())
        .unwrap();
    assert_eq!(a.points, b.points);
    assert_eq!(a.domain, b.domain);
}

#[test]
fn test_unseeded_charts_draw_fresh_noise() {
    let tracker = FundTracker::new();
    let a = tracker
        .fund_chart_at("jupiter-gold-silver", Timeframe::Max, false, today())
        .unwrap();
    let b = tracker
        .fund_chart_at("jupiter-gold-silver", Timeframe::Max, false, today())
        .unwrap();
    assert_ne!(a.points, b.points);
}

#[test]
fn test_converted_chart_uses_display_currency() {
    let tracker = seeded_tracker(3);
    let plain = tracker
        .fund_chart_at("franklin-us-opportunities", Timeframe::OneWeek, false, today())
        .unwrap();
    let aed = tracker
        .fund_chart_at("franklin-us-opportunities", Timeframe::OneWeek, true, today())
        .unwrap();

    assert_eq!(plain.currency, "USD");
    assert_eq!(aed.currency, "AED");
    for (p, c) in plain.points.iter().zip(&aed.points) {
        assert!((c.price - p.price * 3.67).abs() < 1e-9);
    }
    let (pd, cd) = (plain.domain.unwrap(), aed.domain.unwrap());
    assert!((cd.min - pd.min * 3.67).abs() < 1e-9);
    assert!((cd.max - pd.max * 3.67).abs() < 1e-9);
}

#[test]
fn test_fund_chart_ends_today() {
    let tracker = FundTracker::new();
    let chart = tracker
        .fund_chart("jupiter-gold-silver", Timeframe::OneWeek, false)
        .unwrap();
    assert_eq!(chart.points.len(), 7);
    let last = chart.points.last().unwrap().date;
    let now = chrono::Utc::now().date_naive();
    // Allow for a UTC midnight rollover between the two calls
    assert!(last == now || last.succ_opt() == Some(now));
}

#[test]
fn test_moving_average_window_setting() {
    let mut tracker = seeded_tracker(4);
    tracker.set_moving_average_window(5);
    assert_eq!(tracker.settings().moving_average_window, 5);

    let chart = tracker
        .fund_chart_at("jupiter-gold-silver", Timeframe::OneWeek, false, today())
        .unwrap();
    assert_eq!(chart.averaged_points(), 3);

    tracker.set_moving_average_window(0);
    let chart = tracker
        .fund_chart_at("jupiter-gold-silver", Timeframe::Max, false, today())
        .unwrap();
    assert_eq!(chart.averaged_points(), 0);
}

#[test]
fn test_chart_json_export() {
    let tracker = seeded_tracker(5);
    let chart = tracker
        .fund_chart_at("jupiter-gold-silver", Timeframe::OneWeek, true, today())
        .unwrap();
    let json = FundTracker::chart_to_json(&chart).unwrap();

    assert!(json.contains("\"timeframe\":\"1W\""));
    assert!(json.contains("\"currency\":\"AED\""));

    let back: FundChart = serde_json::from_str(&json).unwrap();
    assert_eq!(back.points.len(), 7);
    assert_eq!(back.timeframe, Timeframe::OneWeek);
}

// ═══════════════════════════════════════════════════════════════════
// Currency
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_convert_and_format_defaults() {
    let tracker = FundTracker::new();
    assert!((tracker.convert(100.0) - 367.0).abs() < 1e-9);
    assert_eq!(tracker.format_amount(1234.5), "AED 1,234.50");
}

#[test]
fn test_set_exchange_rate() {
    let mut tracker = FundTracker::new();
    tracker.set_exchange_rate(4.0).unwrap();
    assert_eq!(tracker.settings().exchange_rate, 4.0);
    assert!((tracker.convert(2.5) - 10.0).abs() < 1e-9);
}

#[test]
fn test_invalid_exchange_rate_keeps_previous() {
    let mut tracker = FundTracker::new();
    for rate in [0.0, -3.67, f64::NAN] {
        let err = tracker.set_exchange_rate(rate).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }
    assert_eq!(tracker.settings().exchange_rate, 3.67);
    assert!((tracker.convert(100.0) - 367.0).abs() < 1e-9);
}

// ═══════════════════════════════════════════════════════════════════
// News
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_news_feed_and_fund_filter() {
    let tracker = FundTracker::new();
    assert_eq!(tracker.news_feed().len(), 5);
    assert_eq!(tracker.news_feed()[0].id, "news1");

    let tech: Vec<&str> = tracker
        .news_for_fund("franklin-technology")
        .unwrap()
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(tech, vec!["news2", "news3", "news5"]);
    assert_eq!(tracker.net_news_impact("jupiter-gold-silver").unwrap(), 5);
}

// ═══════════════════════════════════════════════════════════════════
// Alerts
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_default_alert_settings() {
    let tracker = FundTracker::new();
    let s = tracker.alert_settings();
    assert!(s.price_alerts);
    assert!(s.news_alerts);
    assert!(!s.report_alerts);
    assert_eq!(s.daily_change_threshold, 5.0);
}

#[test]
fn test_set_alert_settings_and_evaluate() {
    let mut tracker = FundTracker::new();
    tracker
        .set_alert_settings(AlertSettings {
            news_alerts: false,
            daily_change_threshold: 1.0,
            ..Default::default()
        })
        .unwrap();

    let alerts = tracker.evaluate_alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::PriceMove);
    assert_eq!(alerts[0].fund_id, "franklin-technology");
    assert_eq!(alerts[0].message, "Franklin Technology Fund moved +1.20% today");
}

#[test]
fn test_rejected_alert_settings_are_not_saved() {
    let mut tracker = FundTracker::new();
    for threshold in [0.0, 0.05, 20.5, f64::NAN] {
        let result = tracker.set_alert_settings(AlertSettings {
            daily_change_threshold: threshold,
            ..Default::default()
        });
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }
    assert_eq!(tracker.alert_settings(), &AlertSettings::default());
}

#[test]
fn test_threshold_bounds_are_inclusive() {
    let mut tracker = FundTracker::new();
    for threshold in [0.1, 20.0] {
        tracker
            .set_alert_settings(AlertSettings {
                daily_change_threshold: threshold,
                ..Default::default()
            })
            .unwrap();
    }
    assert_eq!(tracker.alert_settings().daily_change_threshold, 20.0);
}

#[test]
fn test_alert_ids_are_unique() {
    let tracker = FundTracker::new();
    let alerts = tracker.evaluate_alerts();
    let ids: std::collections::HashSet<_> = alerts.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), alerts.len());
}

// ═══════════════════════════════════════════════════════════════════
// Custom repositories & settings
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_with_mock_repository() {
    let tracker =
        FundTracker::with_repository(Box::new(MockFundRepository::new()), Settings::default())
            .unwrap();

    assert_eq!(tracker.funds().len(), 1);
    assert!(tracker.fund("jupiter-gold-silver").is_err());

    let r = tracker.fund_returns("mock-balanced").unwrap();
    assert!((r.current_value - 1250.0).abs() < 1e-9);

    let alerts = tracker.evaluate_alerts();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].kind, AlertKind::PriceMove);
    assert_eq!(alerts[1].kind, AlertKind::NewsImpact);
    assert_eq!(alerts[1].value, -4.0);

    assert!(format!("{tracker:?}").contains("Mock"));
}

#[test]
fn test_with_repository_rejects_invalid_settings() {
    let settings = Settings {
        exchange_rate: 0.0,
        ..Default::default()
    };
    let result = FundTracker::with_repository(Box::new(InMemoryFundRepository::reference()), settings);
    assert!(matches!(result, Err(CoreError::ValidationError(_))));
}

#[test]
fn test_oversized_lookback_rejected_before_charting() {
    let settings = Settings {
        max_lookback_days: usize::MAX,
        ..Default::default()
    };
    let result = FundTracker::with_repository(Box::new(InMemoryFundRepository::reference()), settings);
    assert!(matches!(result, Err(CoreError::ValidationError(_))));
}

#[test]
fn test_custom_settings_flow_through() {
    let settings = Settings::from_json(
        r#"{ "display_currency": "EUR", "exchange_rate": 0.5, "max_lookback_days": 99, "seed": 11 }"#,
    )
    .unwrap();
    let tracker =
        FundTracker::with_repository(Box::new(InMemoryFundRepository::default()), settings).unwrap();

    assert_eq!(tracker.format_amount(10.0), "EUR 10.00");
    let chart = tracker
        .fund_chart_at("jupiter-gold-silver", Timeframe::Max, true, today())
        .unwrap();
    assert_eq!(chart.points.len(), 100);
    assert_eq!(chart.currency, "EUR");
}

#[test]
fn test_repository_from_json_round_trip() {
    let tracker = FundTracker::new();
    let funds_json = tracker.funds_to_json().unwrap();
    let news_json = serde_json::to_string(&reference_news()).unwrap();

    let repo = InMemoryFundRepository::from_json(&funds_json, &news_json).unwrap();
    assert_eq!(repo.funds(), reference_funds().as_slice());
    assert_eq!(repo.news(), reference_news().as_slice());
    assert_eq!(repo.find_fund("franklin-technology").unwrap().currency, "USD");
}

#[test]
fn test_repository_rejects_duplicate_ids() {
    let mut funds = reference_funds();
    funds.push(funds[0].clone());
    let result = InMemoryFundRepository::new(funds, Vec::new());
    assert!(matches!(result, Err(CoreError::ValidationError(_))));
}

#[test]
fn test_repository_rejects_out_of_range_impact() {
    let mut news = reference_news();
    news[0].impact = 7;
    let result = InMemoryFundRepository::new(reference_funds(), news);
    assert!(matches!(result, Err(CoreError::ValidationError(_))));
}

#[test]
fn test_repository_from_malformed_json() {
    let result = InMemoryFundRepository::from_json("[{", "[]");
    assert!(matches!(result, Err(CoreError::Deserialization(_))));
}
