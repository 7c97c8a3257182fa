use crate::models::news::NewsItem;

/// Orders and filters the news-impact feed.
pub struct NewsService;

impl NewsService {
    pub fn new() -> Self {
        Self
    }

    /// All items, newest first. Items sharing a date keep their stored order.
    #[must_use]
    pub fn feed<'a>(&self, news: &'a [NewsItem]) -> Vec<&'a NewsItem> {
        let mut items: Vec<&NewsItem> = news.iter().collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }

    /// Items affecting `fund_id`, newest first.
    #[must_use]
    pub fn for_fund<'a>(&self, news: &'a [NewsItem], fund_id: &str) -> Vec<&'a NewsItem> {
        self.feed(news)
            .into_iter()
            .filter(|n| n.affects(fund_id))
            .collect()
    }

    /// Estimated impact on a fund's holdings: the sum of related items' impact scores.
    #[must_use]
    pub fn net_impact(&self, news: &[NewsItem], fund_id: &str) -> i32 {
        news.iter()
            .filter(|n| n.affects(fund_id))
            .map(|n| i32::from(n.impact))
            .sum()
    }
}

impl Default for NewsService {
    fn default() -> Self {
        Self::new()
    }
}
