//! Behavioural tests for report rendering.

use appraise::{AnalysisReport, AnalysisResult, ReportFormat, ReportRequest, write_report};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;

#[derive(ScenarioState, Default)]
struct RenderState {
    payload: Slot<AnalysisResult>,
    output: Slot<String>,
}

#[fixture]
fn render_state() -> RenderState {
    RenderState::default()
}

fn get_output(render_state: &RenderState) -> Result<String, Box<dyn std::error::Error>> {
    render_state
        .output
        .get()
        .ok_or_else(|| "no output was rendered".into())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a payload with reviews from {platforms}")]
fn payload_with_reviews(
    render_state: &RenderState,
    platforms: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let reviews: Vec<_> = platforms
        .trim_matches('"')
        .split(',')
        .enumerate()
        .map(|(index, platform)| {
            json!({"platform": platform, "content": format!("review {index}")})
        })
        .collect();

    let payload = serde_json::from_value(json!({
        "product": {"name": "Headphones", "prices": [], "reviews": reviews}
    }))?;
    render_state.payload.set(payload);
    Ok(())
}

#[given("a payload with one offer priced {price:f64} and no currency")]
fn payload_with_uncurrencied_offer(
    render_state: &RenderState,
    price: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = serde_json::from_value(json!({
        "product": {"name": "Headphones", "prices": [{"platform": "Store", "price": price}]}
    }))?;
    render_state.payload.set(payload);
    Ok(())
}

#[given("a payload with no prices")]
fn payload_without_prices(render_state: &RenderState) -> Result<(), Box<dyn std::error::Error>> {
    let payload = serde_json::from_value(json!({
        "product": {"name": "Headphones", "prices": []}
    }))?;
    render_state.payload.set(payload);
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the report is written as {format}")]
fn write_in_format(
    render_state: &RenderState,
    format: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let report_format: ReportFormat = format.trim_matches('"').parse()?;
    let payload = render_state.payload.get().ok_or("no payload was prepared")?;

    let mut buffer = Vec::new();
    write_report(
        &mut buffer,
        &payload,
        &ReportRequest {
            format: report_format,
            query: "headphones",
            template: None,
        },
    )?;
    render_state.output.set(String::from_utf8(buffer)?);
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the output contains {text}")]
fn assert_output_contains(
    render_state: &RenderState,
    text: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = get_output(render_state)?;
    let expected = text.trim_matches('"');
    if !output.contains(expected) {
        return Err(format!("expected output to contain '{expected}', got:\n{output}").into());
    }
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the review groups are {platforms}")]
fn assert_review_groups(
    render_state: &RenderState,
    platforms: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = render_state.payload.get().ok_or("no payload was prepared")?;
    let report = AnalysisReport::from_result(&payload);
    let actual: Vec<&str> = report
        .review_groups
        .iter()
        .map(|group| group.platform.as_str())
        .collect();
    let expected: Vec<&str> = platforms.trim_matches('"').split(',').collect();

    if actual != expected {
        return Err(format!("expected groups {expected:?}, got {actual:?}").into());
    }
    Ok(())
}

#[then("the price table has no rows")]
fn assert_empty_price_table(
    render_state: &RenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = get_output(render_state)?;
    let after_separator = output
        .split_once("| --- | --- | --- |\n")
        .map(|(_, rest)| rest)
        .ok_or("price table separator missing")?;

    if after_separator.starts_with('|') {
        return Err(format!("expected no price rows, got:\n{output}").into());
    }
    Ok(())
}

#[then("the output is JSON with {count:usize} offer")]
fn assert_json_offers(
    render_state: &RenderState,
    count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = get_output(render_state)?;
    let decoded: AnalysisResult = serde_json::from_str(&output)?;

    if decoded.prices().len() != count {
        return Err(format!("expected {count} offers, got:\n{output}").into());
    }
    Ok(())
}

#[scenario(path = "tests/features/report_rendering.feature", index = 0)]
fn reviews_grouped_by_platform(render_state: RenderState) {
    let _ = render_state;
}

#[scenario(path = "tests/features/report_rendering.feature", index = 1)]
fn missing_currency_defaults_to_rupees(render_state: RenderState) {
    let _ = render_state;
}

#[scenario(path = "tests/features/report_rendering.feature", index = 2)]
fn empty_prices_render_empty_table(render_state: RenderState) {
    let _ = render_state;
}

#[scenario(path = "tests/features/report_rendering.feature", index = 3)]
fn json_output_round_trips(render_state: RenderState) {
    let _ = render_state;
}
