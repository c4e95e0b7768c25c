//! Unit tests for the plain-text report.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::analysis::AnalysisResult;

fn report_for(value: serde_json::Value) -> AnalysisReport {
    let result: AnalysisResult =
        serde_json::from_value(value).expect("fixture payload should decode");
    AnalysisReport::from_result(&result)
}

#[fixture]
fn full_report() -> AnalysisReport {
    report_for(json!({
        "product": {
            "name": "iPhone 15",
            "prices": [
                {"platform": "Amazon", "price": 79900, "currency": "INR", "url": "https://amazon.test/iphone15"},
                {"platform": "Flipkart", "price": 78999.5}
            ],
            "reviews": [
                {"platform": "Amazon", "title": "Great", "rating": 5, "content": "Loved it"},
                {"platform": "Flipkart", "rating": 4, "content": "Solid"},
                {"platform": "Amazon", "content": "Battery ok"}
            ]
        },
        "analysis": {
            "sentiment": {"positive": 70, "neutral": 20, "negative": 10},
            "pros": ["Fast", "Great camera"],
            "cons": ["Pricey"],
            "score": 8.2,
            "best_platform": "Amazon"
        },
        "platform_comparison": {
            "comparison": {
                "Amazon": {
                    "average_rating": 4.5,
                    "review_count": 2,
                    "sentiment": {"positive": 60, "neutral": 30, "negative": 10},
                    "overall_sentiment": "positive"
                },
                "Flipkart": {"average_rating": 4, "review_count": 1, "overall_sentiment": "neutral"}
            },
            "best_platform": "Amazon"
        }
    }))
}

#[rstest]
fn full_report_renders_every_section(full_report: AnalysisReport) {
    insta::assert_snapshot!("full_report", render_text(&full_report));
}

#[rstest]
fn minimal_example_renders_price_row_and_sentiment() {
    let report = report_for(json!({
        "product": {
            "name": "iPhone 15",
            "prices": [{"platform": "Amazon", "price": 79900, "currency": "INR"}]
        },
        "analysis": {
            "sentiment": {"positive": 70, "neutral": 20, "negative": 10},
            "pros": ["Fast"],
            "cons": ["Pricey"]
        }
    }));

    let text = render_text(&report);

    assert!(text.contains("  Amazon / INR 79900 / —\n"), "{text}");
    assert!(text.contains("  70% / 20% / 10%\n"), "{text}");
    assert!(!text.contains("Platform Comparison"), "{text}");
    assert!(!text.contains("Reviews"), "{text}");
}

#[rstest]
fn empty_prices_render_header_without_rows() {
    let report = report_for(json!({"product": {"name": "Pixel 8", "prices": []}}));

    let text = render_text(&report);

    assert!(
        text.contains("Prices (platform / price / link)\n\nSentiment"),
        "{text}"
    );
    assert!(text.contains("  No sentiment available\n"), "{text}");
    assert!(text.contains("Pros\n  None listed\n"), "{text}");
}

#[rstest]
#[case::all_parts(Some("Great"), Some("5.0"), "Loved it", "[5.0] Great: Loved it")]
#[case::title_only(Some("Great"), None, "", "Great")]
#[case::content_only(None, None, "Solid", "Solid")]
#[case::rating_and_content(None, Some("4.0"), "Solid", "[4.0] Solid")]
fn review_line_skips_absent_parts(
    #[case] title: Option<&str>,
    #[case] rating: Option<&str>,
    #[case] content: &str,
    #[case] expected: &str,
) {
    let review = ReviewLine {
        title: title.map(ToOwned::to_owned),
        rating: rating.map(ToOwned::to_owned),
        content: content.to_owned(),
    };

    assert_eq!(review_line(&review), expected);
}

#[rstest]
fn write_text_writes_rendered_report(full_report: AnalysisReport) {
    let mut buffer = Vec::new();
    write_text(&mut buffer, &full_report).expect("write should succeed");

    let written = String::from_utf8(buffer).expect("output should be UTF-8");
    assert_eq!(written, render_text(&full_report));
}
