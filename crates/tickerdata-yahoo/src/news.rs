//! News operation (search endpoint).
//!
//! The search endpoint has no result/error envelope; an absent news array is
//! simply an empty answer.

use serde::Deserialize;
use tracing::warn;

use tickerdata_core::{NewsArticle, Result, Symbol};

use crate::client::{YahooClient, validate_symbol};
use crate::urls;

/// Number of articles requested when the caller does not say.
const DEFAULT_NEWS_COUNT: usize = 8;

impl YahooClient {
    /// Fetches recent news articles related to a symbol.
    ///
    /// `count` bounds the number of articles requested upstream; `None` asks
    /// for the default batch.
    pub async fn news(&self, symbol: &Symbol, count: Option<usize>) -> Result<Vec<NewsArticle>> {
        validate_symbol(symbol)?;
        let url = urls::search_url(
            &self.base_urls().search,
            symbol.as_str(),
            count.unwrap_or(DEFAULT_NEWS_COUNT),
        );
        let response: SearchResponse = self.get_json(&url, symbol).await?;
        Ok(map_news(symbol, response))
    }
}

fn map_news(symbol: &Symbol, response: SearchResponse) -> Vec<NewsArticle> {
    response
        .news
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            let Some(title) = row.title else {
                warn!("Skipping news row without a title for {}", symbol);
                return None;
            };
            Some(NewsArticle {
                title,
                publisher: row.publisher,
                link: row.link,
                published_at: row.provider_publish_time,
                article_type: row.article_type,
                related_tickers: row.related_tickers.unwrap_or_default(),
            })
        })
        .collect()
}

// ============================================================================
// Search API Response Types
// ============================================================================

/// Search API response; only the news section is consumed.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    news: Option<Vec<NewsRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsRow {
    title: Option<String>,
    publisher: Option<String>,
    link: Option<String>,
    provider_publish_time: Option<i64>,
    #[serde(rename = "type")]
    article_type: Option<String>,
    related_tickers: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol() -> Symbol {
        Symbol::new("AAPL")
    }

    #[test]
    fn news_rows_map_with_optional_fields_preserved() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "news": [
                    {
                        "uuid": "abc-123",
                        "title": "Apple unveils new chip",
                        "publisher": "Reuters",
                        "link": "https://example.test/apple-chip",
                        "providerPublishTime": 1717027200,
                        "type": "STORY",
                        "relatedTickers": ["AAPL", "TSM"]
                    },
                    {"publisher": "No headline wire"},
                    {"title": "Bare minimum article"}
                ],
                "quotes": []
            }"#,
        )
        .unwrap();

        let articles = map_news(&symbol(), response);
        assert_eq!(articles.len(), 2);

        assert_eq!(articles[0].title, "Apple unveils new chip");
        assert_eq!(articles[0].publisher.as_deref(), Some("Reuters"));
        assert_eq!(articles[0].published_at, Some(1_717_027_200));
        assert_eq!(articles[0].related_tickers, vec!["AAPL", "TSM"]);

        assert_eq!(articles[1].title, "Bare minimum article");
        assert_eq!(articles[1].publisher, None);
        assert!(articles[1].related_tickers.is_empty());
    }

    #[test]
    fn absent_news_array_is_an_empty_answer() {
        let response: SearchResponse = serde_json::from_str(r#"{"quotes": []}"#).unwrap();
        assert!(map_news(&symbol(), response).is_empty());
    }
}
