//! Scalar formatting shared by every report writer.

/// Placeholder rendered for an absent value.
pub const MISSING: &str = "—";

/// Currency assumed when an offer does not name one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Formats a number the way the payload expressed it.
///
/// Whole numbers print without a fractional part (`79900`, not `79900.0`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    value.to_string()
}

/// Formats an offer price as `<currency> <amount>`, or [`MISSING`].
///
/// A missing or empty currency falls back to [`DEFAULT_CURRENCY`].
#[must_use]
pub fn format_price(price: Option<f64>, currency: Option<&str>) -> String {
    price.map_or_else(
        || MISSING.to_owned(),
        |amount| {
            let code = currency
                .filter(|code| !code.is_empty())
                .unwrap_or(DEFAULT_CURRENCY);
            format!("{code} {}", format_amount(amount))
        },
    )
}

/// Formats a percentage with at most one decimal (`70%`, `33.3%`).
#[must_use]
pub fn format_percentage(value: Option<f64>) -> String {
    value.map_or_else(
        || MISSING.to_owned(),
        |percent| {
            let fixed = format!("{percent:.1}");
            let trimmed = fixed.strip_suffix(".0").unwrap_or(&fixed);
            format!("{trimmed}%")
        },
    )
}

/// Formats a star rating with one decimal.
#[must_use]
pub fn format_rating(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |rating| format!("{rating:.1}"))
}

/// Formats a 0-10 score as `x.x/10`.
#[must_use]
pub fn format_score(value: f64) -> String {
    format!("{value:.1}/10")
}

/// Returns `value`, or [`MISSING`] when it is absent or blank.
#[must_use]
pub fn or_missing(value: Option<&str>) -> String {
    value
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(MISSING)
        .to_owned()
}
