//! Payload types returned by the backend's `/analyze` endpoint.
//!
//! Every field is optional. The backend assembles the payload from scrapers
//! and a language model that fail independently, so any object, list, or
//! scalar may be missing or `null`. The `analysis` block is whatever JSON the
//! model produced, so a field of the wrong type decodes as absent instead of
//! rejecting the payload. Unknown fields are ignored.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Full response of a single analysis request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// Scraped product data.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub product: Option<Product>,
    /// Aggregated review analysis across all platforms.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub analysis: Option<ReviewAnalysis>,
    /// Per-platform breakdown.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub platform_comparison: Option<PlatformComparison>,
    /// Payload exactly as the backend sent it.
    #[serde(skip)]
    pub(crate) raw: Option<Value>,
}

/// Product identity together with its offers and reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Product name as searched.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Lower-cased lookup key used by the backend.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub normalized_name: Option<String>,
    /// Offers found on each marketplace.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_list")]
    pub prices: Option<Vec<PriceInfo>>,
    /// Reviews collected across marketplaces.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_list")]
    pub reviews: Option<Vec<Review>>,
}

/// A single marketplace offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceInfo {
    /// Marketplace name (e.g. "Amazon").
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub platform: Option<String>,
    /// Listed price.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    /// ISO currency code; the backend assumes INR when absent.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub currency: Option<String>,
    /// Product page URL.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// A single scraped review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Marketplace the review came from.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub platform: Option<String>,
    /// Review headline.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Star rating, usually 1-5.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    /// Review body.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub content: Option<String>,
}

/// Overall review analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewAnalysis {
    /// Sentiment split in percent.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub sentiment: Option<SentimentBreakdown>,
    /// Recurring positive points.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_strings")]
    pub pros: Option<Vec<String>>,
    /// Recurring negative points.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_strings")]
    pub cons: Option<Vec<String>>,
    /// Overall score on a 0-10 scale.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub score: Option<f64>,
    /// Marketplace the model recommends buying from.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub best_platform: Option<String>,
}

/// Positive/neutral/negative split, each expressed as a percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentBreakdown {
    /// Share of positive reviews.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub positive: Option<f64>,
    /// Share of neutral reviews.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub neutral: Option<f64>,
    /// Share of negative reviews.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub negative: Option<f64>,
}

/// Per-platform comparison block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformComparison {
    /// Aggregates keyed by platform, in payload order.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_map")]
    pub comparison: Option<IndexMap<String, PlatformStats>>,
    /// Platform with the best aggregate outcome.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub best_platform: Option<String>,
}

/// Aggregated figures for one platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStats {
    /// Mean star rating.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_number")]
    pub average_rating: Option<f64>,
    /// Number of reviews analysed.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_count")]
    pub review_count: Option<u64>,
    /// Sentiment for this platform.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub sentiment: Option<PlatformSentiment>,
    /// Single-word verdict such as "positive".
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub overall_sentiment: Option<String>,
}

/// Platform sentiment as emitted by the backend.
///
/// Older backends send a bare label; newer ones send a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlatformSentiment {
    /// Percentage split.
    Breakdown(SentimentBreakdown),
    /// Free-form label.
    Label(String),
}

impl AnalysisResult {
    /// Decodes a backend payload, keeping the original JSON alongside.
    ///
    /// # Errors
    ///
    /// Returns an error when `payload` cannot be read as an object, such as a
    /// bare string or number.
    pub fn from_payload(payload: Value) -> Result<Self, serde_json::Error> {
        let mut result = Self::deserialize(&payload)?;
        result.raw = Some(payload);
        Ok(result)
    }

    /// Returns the payload as received, when decoded by [`Self::from_payload`].
    #[must_use]
    pub const fn raw_payload(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    /// Returns the product name, if any.
    #[must_use]
    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().and_then(|product| product.name.as_deref())
    }

    /// Returns price rows, or an empty slice when absent.
    #[must_use]
    pub fn prices(&self) -> &[PriceInfo] {
        self.product
            .as_ref()
            .and_then(|product| product.prices.as_deref())
            .unwrap_or_default()
    }

    /// Returns reviews, or an empty slice when absent.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        self.product
            .as_ref()
            .and_then(|product| product.reviews.as_deref())
            .unwrap_or_default()
    }

    /// Returns the overall sentiment breakdown, if any.
    #[must_use]
    pub fn sentiment(&self) -> Option<&SentimentBreakdown> {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.sentiment.as_ref())
    }

    /// Returns pros, or an empty slice when absent.
    #[must_use]
    pub fn pros(&self) -> &[String] {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.pros.as_deref())
            .unwrap_or_default()
    }

    /// Returns cons, or an empty slice when absent.
    #[must_use]
    pub fn cons(&self) -> &[String] {
        self.analysis
            .as_ref()
            .and_then(|analysis| analysis.cons.as_deref())
            .unwrap_or_default()
    }

    /// Returns the comparison map only when it holds at least one platform.
    #[must_use]
    pub fn comparison(&self) -> Option<&IndexMap<String, PlatformStats>> {
        self.platform_comparison
            .as_ref()
            .and_then(|block| block.comparison.as_ref())
            .filter(|map| !map.is_empty())
    }
}

/// Decodes a field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|inner| serde_json::from_value(inner).ok()))
}

/// Decodes a list, dropping entries of the wrong shape.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(None);
    };

    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}

/// Decodes a keyed map in payload order, dropping entries of the wrong shape.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<Option<IndexMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(entries)) = value else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .filter_map(|(key, entry)| serde_json::from_value(entry).ok().map(|decoded| (key, decoded)))
            .collect(),
    ))
}

/// Accepts a JSON number or a numeric string.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Accepts any JSON number with no fractional part, or a numeric string.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|inner| match inner {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(|float| float.to_string().parse().ok())),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }))
}

/// Keeps string and scalar entries of a list, dropping nested values.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(None);
    };

    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                Value::Number(number) => Some(number.to_string()),
                Value::Bool(flag) => Some(flag.to_string()),
                _ => None,
            })
            .collect(),
    ))
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite()),
        _ => None,
    }
}
