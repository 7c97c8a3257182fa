use chrono::NaiveDate;

use crate::models::fund::{Allocation, Fund, FundChanges, Holding};
use crate::models::news::{NewsItem, Sentiment};

fn holding(name: &str, weight: f64, change: f64) -> Holding {
    Holding {
        name: name.to_string(),
        weight,
        change,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("catalog dates are valid calendar dates")
}

/// The seeded fund catalog: four funds, 26,500 invested in total.
pub fn reference_funds() -> Vec<Fund> {
    vec![
        Fund {
            id: "jupiter-gold-silver".into(),
            isin: "IE00BYVJRD56".into(),
            name: "Jupiter Gold & Silver Fund I USD ACC".into(),
            current_nav: 129.42,
            currency: "USD".into(),
            changes: FundChanges {
                daily: 0.8,
                weekly: 2.3,
                monthly: -1.2,
                yearly: 14.5,
            },
            investment: 5000.0,
            top_holdings: vec![
                holding("Newmont Corporation", 8.2, 0.6),
                holding("Barrick Gold Corp", 7.5, 1.2),
                holding("Franco-Nevada Corp", 6.8, 0.3),
                holding("Wheaton Precious Metals", 5.9, -0.4),
                holding("Agnico Eagle Mines", 5.2, 0.7),
                holding("Royal Gold Inc", 4.8, 0.2),
                holding("AngloGold Ashanti", 4.3, -0.5),
                holding("Gold Fields Ltd", 3.9, 0.8),
                holding("Kinross Gold Corp", 3.6, 1.5),
                holding("Pan American Silver", 3.4, -0.2),
            ],
            sector_allocation: vec![
                Allocation::new("Gold Mining", 65.0),
                Allocation::new("Silver Mining", 20.0),
                Allocation::new("Precious Metals", 12.0),
                Allocation::new("Other", 3.0),
            ],
            geographic_exposure: vec![
                Allocation::new("North America", 58.0),
                Allocation::new("Australia", 14.0),
                Allocation::new("South Africa", 12.0),
                Allocation::new("Russia", 8.0),
                Allocation::new("Other", 8.0),
            ],
        },
        Fund {
            id: "allianz-income-growth".into(),
            isin: "LU0913601281".into(),
            name: "Allianz Income and Growth A H2 EUR".into(),
            current_nav: 95.67,
            currency: "EUR".into(),
            changes: FundChanges {
                daily: -0.3,
                weekly: 1.2,
                monthly: 3.5,
                yearly: 8.7,
            },
            investment: 7000.0,
            top_holdings: vec![
                holding("Microsoft Corp", 4.8, 1.1),
                holding("Apple Inc", 4.2, -0.8),
                holding("Alphabet Inc", 3.8, 0.7),
                holding("Amazon.com Inc", 3.5, -0.5),
                holding("Tesla Inc", 2.9, -1.2),
                holding("Nvidia Corp", 2.7, 2.4),
                holding("Meta Platforms Inc", 2.4, 0.9),
                holding("Johnson & Johnson", 2.2, 0.3),
                holding("JPMorgan Chase & Co", 2.0, -0.2),
                holding("Visa Inc", 1.9, 0.5),
            ],
            sector_allocation: vec![
                Allocation::new("Technology", 32.0),
                Allocation::new("Consumer Discretionary", 18.0),
                Allocation::new("Healthcare", 15.0),
                Allocation::new("Financials", 14.0),
                Allocation::new("Communication Services", 12.0),
                Allocation::new("Other", 9.0),
            ],
            geographic_exposure: vec![
                Allocation::new("United States", 75.0),
                Allocation::new("Europe", 15.0),
                Allocation::new("Asia", 8.0),
                Allocation::new("Other", 2.0),
            ],
        },
        Fund {
            id: "franklin-technology".into(),
            isin: "LU0109392836".into(),
            name: "Franklin Technology Fund".into(),
            current_nav: 157.83,
            currency: "USD".into(),
            changes: FundChanges {
                daily: 1.2,
                weekly: 3.7,
                monthly: -2.1,
                yearly: 22.6,
            },
            investment: 6500.0,
            top_holdings: vec![
                holding("Apple Inc", 8.5, -0.8),
                holding("Microsoft Corp", 7.9, 1.1),
                holding("Nvidia Corp", 6.8, 2.4),
                holding("Advanced Micro Devices", 5.3, 1.8),
                holding("Salesforce Inc", 4.7, 0.5),
                holding("Adobe Inc", 4.2, -0.3),
                holding("Taiwan Semiconductor", 3.8, 0.7),
                holding("ServiceNow Inc", 3.6, 1.5),
                holding("Intuit Inc", 3.2, 0.2),
                holding("Broadcom Inc", 2.9, -0.5),
            ],
            sector_allocation: vec![
                Allocation::new("Software", 42.0),
                Allocation::new("Semiconductors", 28.0),
                Allocation::new("IT Services", 15.0),
                Allocation::new("Hardware", 12.0),
                Allocation::new("Other", 3.0),
            ],
            geographic_exposure: vec![
                Allocation::new("United States", 82.0),
                Allocation::new("Taiwan", 6.0),
                Allocation::new("Netherlands", 4.0),
                Allocation::new("South Korea", 3.0),
                Allocation::new("Other", 5.0),
            ],
        },
        Fund {
            id: "franklin-us-opportunities".into(),
            isin: "LU0109391861".into(),
            name: "Franklin U.S. Opportunities Fund".into(),
            current_nav: 54.21,
            currency: "USD".into(),
            changes: FundChanges {
                daily: 0.6,
                weekly: 2.2,
                monthly: 4.5,
                yearly: 17.8,
            },
            investment: 8000.0,
            top_holdings: vec![
                holding("Amazon.com Inc", 6.2, -0.5),
                holding("Microsoft Corp", 5.8, 1.1),
                holding("Apple Inc", 5.3, -0.8),
                holding("Alphabet Inc", 4.7, 0.7),
                holding("Mastercard Inc", 3.9, 0.4),
                holding("Visa Inc", 3.7, 0.5),
                holding("Nvidia Corp", 3.4, 2.4),
                holding("UnitedHealth Group", 3.1, 0.2),
                holding("PayPal Holdings", 2.8, -1.2),
                holding("Adobe Inc", 2.6, -0.3),
            ],
            sector_allocation: vec![
                Allocation::new("Technology", 35.0),
                Allocation::new("Consumer Discretionary", 22.0),
                Allocation::new("Healthcare", 18.0),
                Allocation::new("Communication Services", 12.0),
                Allocation::new("Financials", 8.0),
                Allocation::new("Other", 5.0),
            ],
            geographic_exposure: vec![
                Allocation::new("United States", 92.0),
                Allocation::new("Netherlands", 3.0),
                Allocation::new("United Kingdom", 3.0),
                Allocation::new("Other", 2.0),
            ],
        },
    ]
}

/// Sample news feed for the reference catalog.
pub fn reference_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "news1".into(),
            title: "Gold prices surge as inflation concerns mount".into(),
            source: "Financial Times".into(),
            date: date(2023, 4, 22),
            sentiment: Sentiment::Positive,
            impact: 3,
            summary: "Gold prices reached a six-month high as investors seek safe-haven assets amid rising inflation concerns.".into(),
            related_funds: vec!["jupiter-gold-silver".into()],
        },
        NewsItem {
            id: "news2".into(),
            title: "Apple reports record quarterly revenue".into(),
            source: "CNBC".into(),
            date: date(2023, 4, 21),
            sentiment: Sentiment::Positive,
            impact: 2,
            summary: "Apple Inc. announced record-breaking quarterly revenues, exceeding analyst expectations by 8%.".into(),
            related_funds: vec![
                "allianz-income-growth".into(),
                "franklin-technology".into(),
                "franklin-us-opportunities".into(),
            ],
        },
        NewsItem {
            id: "news3".into(),
            title: "Microsoft cloud business growth slows".into(),
            source: "Reuters".into(),
            date: date(2023, 4, 20),
            sentiment: Sentiment::Negative,
            impact: -1,
            summary: "Microsoft reported slower-than-expected growth in its cloud business division, causing concerns among investors.".into(),
            related_funds: vec![
                "allianz-income-growth".into(),
                "franklin-technology".into(),
                "franklin-us-opportunities".into(),
            ],
        },
        NewsItem {
            id: "news4".into(),
            title: "Silver mining output decreases due to labor disputes".into(),
            source: "Mining Weekly".into(),
            date: date(2023, 4, 19),
            sentiment: Sentiment::Positive,
            impact: 2,
            summary: "Global silver production declined by 3% in Q1 due to ongoing labor disputes in major mining regions, potentially driving prices higher.".into(),
            related_funds: vec!["jupiter-gold-silver".into()],
        },
        NewsItem {
            id: "news5".into(),
            title: "Tech sector faces headwinds as interest rates rise".into(),
            source: "Wall Street Journal".into(),
            date: date(2023, 4, 18),
            sentiment: Sentiment::Negative,
            impact: -2,
            summary: "Rising interest rates are putting pressure on technology company valuations, particularly affecting growth-oriented firms.".into(),
            related_funds: vec!["franklin-technology".into(), "franklin-us-opportunities".into()],
        },
    ]
}
