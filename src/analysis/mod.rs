//! Client side of the product analysis exchange.
//!
//! - [`model`]: the `/analyze` payload, with every field optional
//! - [`gateway`]: the HTTP boundary and its trait seam
//! - [`session`]: query/loading/error/result state and the submit cycle
//! - [`error`]: the errors surfaced to users

pub mod error;
pub mod gateway;
pub mod model;
pub mod session;

pub use error::AnalysisError;
pub use gateway::{AnalysisGateway, HealthStatus, HttpAnalysisGateway};
pub use model::{
    AnalysisResult, PlatformComparison, PlatformSentiment, PlatformStats, PriceInfo, Product,
    Review, ReviewAnalysis, SentimentBreakdown,
};
pub use session::{FALLBACK_ERROR_MESSAGE, SearchSession};
