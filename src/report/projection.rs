//! Read-only projections of an [`AnalysisResult`] into displayable sections.
//!
//! Every writer (text, Markdown, template, and the search screen) renders
//! from an [`AnalysisReport`], so absent-field handling lives in one place.
//! Projections never mutate or cache the payload.

use serde::Serialize;

use crate::analysis::{
    AnalysisResult, PlatformSentiment, PlatformStats, Review, SentimentBreakdown,
};

use super::format::{
    MISSING, format_percentage, format_price, format_rating, format_score, or_missing,
};

/// Displayable sections derived from one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Product summary.
    pub product: ProductSummary,
    /// One row per offer, in payload order. May be empty.
    pub prices: Vec<PriceRow>,
    /// Overall sentiment, when the payload carries one.
    pub sentiment: Option<SentimentRow>,
    /// Platform comparison, when the payload carries a non-empty map.
    pub comparison: Option<ComparisonTable>,
    /// Positive points.
    pub pros: Vec<String>,
    /// Negative points.
    pub cons: Vec<String>,
    /// Reviews grouped by platform in order of first appearance.
    pub review_groups: Vec<ReviewGroup>,
}

/// Product heading data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    /// Product name or [`MISSING`].
    pub name: String,
    /// Formatted score (`7.0/10`).
    pub score: Option<String>,
    /// Recommended platform.
    pub best_platform: Option<String>,
}

/// One line of the price table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRow {
    /// Platform name or [`MISSING`].
    pub platform: String,
    /// `<currency> <amount>` or [`MISSING`].
    pub price: String,
    /// Offer URL or [`MISSING`].
    pub link: String,
}

impl PriceRow {
    /// Renders the row as `platform / price / link`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} / {} / {}", self.platform, self.price, self.link)
    }
}

/// Formatted sentiment percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentRow {
    /// Positive share, e.g. `70%`.
    pub positive: String,
    /// Neutral share.
    pub neutral: String,
    /// Negative share.
    pub negative: String,
}

impl SentimentRow {
    /// Renders the row as `positive / neutral / negative`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} / {} / {}", self.positive, self.neutral, self.negative)
    }
}

impl From<&SentimentBreakdown> for SentimentRow {
    fn from(breakdown: &SentimentBreakdown) -> Self {
        Self {
            positive: format_percentage(breakdown.positive),
            neutral: format_percentage(breakdown.neutral),
            negative: format_percentage(breakdown.negative),
        }
    }
}

/// Per-platform comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    /// One row per platform, in payload order.
    pub rows: Vec<ComparisonRow>,
    /// Platform flagged as best by the backend.
    pub best_platform: Option<String>,
}

/// Aggregates for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Platform name.
    pub platform: String,
    /// Mean rating with one decimal, or [`MISSING`].
    pub average_rating: String,
    /// Review count, or [`MISSING`].
    pub review_count: String,
    /// Sentiment split or label, or [`MISSING`].
    pub sentiment: String,
    /// Verdict label, or [`MISSING`].
    pub overall_sentiment: String,
    /// Whether this is the best platform.
    pub is_best: bool,
}

/// Reviews from one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewGroup {
    /// Platform name or [`MISSING`].
    pub platform: String,
    /// Reviews in payload order.
    pub reviews: Vec<ReviewLine>,
}

/// One displayed review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewLine {
    /// Headline, when present.
    pub title: Option<String>,
    /// Rating with one decimal, when present.
    pub rating: Option<String>,
    /// Body text; empty when absent.
    pub content: String,
}

impl AnalysisReport {
    /// Projects `result` into report sections.
    #[must_use]
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            product: product_summary(result),
            prices: result
                .prices()
                .iter()
                .map(|offer| PriceRow {
                    platform: or_missing(offer.platform.as_deref()),
                    price: format_price(offer.price, offer.currency.as_deref()),
                    link: or_missing(offer.url.as_deref()),
                })
                .collect(),
            sentiment: result.sentiment().map(SentimentRow::from),
            comparison: comparison_table(result),
            pros: result.pros().to_vec(),
            cons: result.cons().to_vec(),
            review_groups: group_reviews(result.reviews()),
        }
    }
}

fn product_summary(result: &AnalysisResult) -> ProductSummary {
    let analysis = result.analysis.as_ref();
    ProductSummary {
        name: or_missing(result.product_name()),
        score: analysis
            .and_then(|analysis| analysis.score)
            .map(format_score),
        best_platform: analysis
            .and_then(|analysis| analysis.best_platform.clone())
            .filter(|platform| !platform.trim().is_empty()),
    }
}

fn comparison_table(result: &AnalysisResult) -> Option<ComparisonTable> {
    let comparison = result.comparison()?;
    let best_platform = result
        .platform_comparison
        .as_ref()
        .and_then(|block| block.best_platform.clone());

    let rows = comparison
        .iter()
        .map(|(platform, stats)| comparison_row(platform, stats, best_platform.as_deref()))
        .collect();

    Some(ComparisonTable {
        rows,
        best_platform,
    })
}

fn comparison_row(platform: &str, stats: &PlatformStats, best: Option<&str>) -> ComparisonRow {
    ComparisonRow {
        platform: platform.to_owned(),
        average_rating: format_rating(stats.average_rating),
        review_count: stats
            .review_count
            .map_or_else(|| MISSING.to_owned(), |count| count.to_string()),
        sentiment: match &stats.sentiment {
            Some(PlatformSentiment::Breakdown(breakdown)) => {
                SentimentRow::from(breakdown).summary()
            }
            Some(PlatformSentiment::Label(label)) => or_missing(Some(label.as_str())),
            None => MISSING.to_owned(),
        },
        overall_sentiment: or_missing(stats.overall_sentiment.as_deref()),
        is_best: best == Some(platform),
    }
}

/// Groups reviews by platform, keeping first-occurrence order of platforms
/// and payload order within each group.
fn group_reviews(reviews: &[Review]) -> Vec<ReviewGroup> {
    let mut groups: Vec<ReviewGroup> = Vec::new();

    for review in reviews {
        let platform = or_missing(review.platform.as_deref());
        let line = ReviewLine {
            title: review
                .title
                .clone()
                .filter(|title| !title.trim().is_empty()),
            rating: review.rating.map(|rating| format_rating(Some(rating))),
            content: review.content.clone().unwrap_or_default(),
        };

        match groups.iter_mut().find(|group| group.platform == platform) {
            Some(group) => group.reviews.push(line),
            None => groups.push(ReviewGroup {
                platform,
                reviews: vec![line],
            }),
        }
    }

    groups
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
