//! Single product analysis operation.
//!
//! Runs one submit cycle against the backend and writes the report to
//! stdout in the configured format.

use std::io::{self, Write};
use std::time::Instant;

use appraise::report::read_template;
use appraise::{
    AnalysisError, AnalysisGateway, AppraiseConfig, ReportRequest, SearchSession, TelemetryEvent,
    TelemetrySink, write_report,
};

use super::{build_gateway, telemetry_sink};

/// Analyses the configured product and prints the report.
///
/// # Errors
///
/// Returns [`AnalysisError::MissingQuery`] if no product is configured.
/// Returns [`AnalysisError::Io`] if the template cannot be read or output
/// cannot be written. Request failures are returned unchanged.
pub async fn run(config: &AppraiseConfig) -> Result<(), AnalysisError> {
    let product = config.require_product()?;
    let format = config.report_format()?;
    let template = config.template_path().map(read_template).transpose()?;

    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);

    let request = ReportRequest {
        format,
        query: product,
        template: template.as_deref(),
    };
    analyze_and_write(&gateway, telemetry.as_ref(), &mut io::stdout(), &request).await
}

/// Submits `request.query` through `gateway` and writes the report.
///
/// A telemetry event is recorded for both outcomes.
///
/// # Errors
///
/// Returns the request error, or [`AnalysisError::Io`] if writing fails.
pub async fn analyze_and_write<G, W>(
    gateway: &G,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
    request: &ReportRequest<'_>,
) -> Result<(), AnalysisError>
where
    G: AnalysisGateway + ?Sized,
    W: Write,
{
    let mut session = SearchSession::with_query(request.query);
    let started = Instant::now();

    if let Err(error) = session.submit(gateway).await {
        telemetry.record(TelemetryEvent::AnalysisFailed {
            product: request.query.to_owned(),
            message: error.to_string(),
        });
        return Err(error);
    }

    let result = session.result().ok_or_else(|| AnalysisError::Decode {
        message: "backend returned no payload".to_owned(),
    })?;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "Latency over u64::MAX milliseconds is unrealistic"
    )]
    let latency_ms = started.elapsed().as_millis() as u64;
    telemetry.record(TelemetryEvent::AnalysisCompleted {
        product: request.query.to_owned(),
        latency_ms,
        price_count: result.prices().len(),
        review_count: result.reviews().len(),
    });

    write_report(writer, result, request)?;
    writer.flush().map_err(|error| AnalysisError::io(&error))
}

#[cfg(test)]
mod tests {
    use appraise::telemetry::test_support::RecordingTelemetrySink;
    use appraise::{HttpAnalysisGateway, ReportFormat};
    use rstest::{fixture, rstest};
    use serde_json::json;
    use tokio::runtime::Runtime;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    struct Harness {
        runtime: Runtime,
        server: MockServer,
        gateway: HttpAnalysisGateway,
    }

    #[fixture]
    fn harness() -> Harness {
        let runtime = Runtime::new().expect("runtime should start");
        let server = runtime.block_on(MockServer::start());
        let api_base = Url::parse(&server.uri()).expect("mock server URI should parse");
        let gateway = HttpAnalysisGateway::new(api_base, std::time::Duration::from_secs(5))
            .expect("gateway should build");
        Harness {
            runtime,
            server,
            gateway,
        }
    }

    fn request(format: ReportFormat) -> ReportRequest<'static> {
        ReportRequest {
            format,
            query: "iPhone 15",
            template: None,
        }
    }

    #[rstest]
    fn writes_report_and_records_completion(harness: Harness) {
        harness.runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/analyze"))
                .and(query_param("product", "iPhone 15"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "product": {
                        "name": "iPhone 15",
                        "prices": [{"platform": "Amazon", "price": 79900, "currency": "INR"}],
                        "reviews": [{"platform": "Amazon", "content": "Great"}]
                    },
                    "analysis": {"sentiment": {"positive": 70, "neutral": 20, "negative": 10}}
                })))
                .mount(&harness.server),
        );
        let telemetry = RecordingTelemetrySink::default();
        let mut output = Vec::new();

        harness
            .runtime
            .block_on(analyze_and_write(
                &harness.gateway,
                &telemetry,
                &mut output,
                &request(ReportFormat::Text),
            ))
            .expect("analysis should succeed");

        let text = String::from_utf8(output).expect("output should be UTF-8");
        assert!(text.contains("Amazon / INR 79900 / —"), "{text}");
        assert!(text.contains("70% / 20% / 10%"), "{text}");

        let events = telemetry.take();
        assert!(matches!(
            events.as_slice(),
            [TelemetryEvent::AnalysisCompleted {
                price_count: 1,
                review_count: 1,
                ..
            }]
        ));
    }

    #[rstest]
    fn failure_records_event_and_writes_nothing(harness: Harness) {
        harness.runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/analyze"))
                .respond_with(
                    ResponseTemplate::new(500).set_body_json(json!({"detail": "scraper offline"})),
                )
                .mount(&harness.server),
        );
        let telemetry = RecordingTelemetrySink::default();
        let mut output = Vec::new();

        let error = harness
            .runtime
            .block_on(analyze_and_write(
                &harness.gateway,
                &telemetry,
                &mut output,
                &request(ReportFormat::Json),
            ))
            .expect_err("backend failure should propagate");

        assert_eq!(
            error,
            AnalysisError::Api {
                status: 500,
                message: "scraper offline".to_owned(),
            }
        );
        assert!(output.is_empty());
        assert_eq!(
            telemetry.take(),
            vec![TelemetryEvent::AnalysisFailed {
                product: "iPhone 15".to_owned(),
                message: error.to_string(),
            }]
        );
    }

    #[rstest]
    fn run_rejects_missing_product() {
        let runtime = Runtime::new().expect("runtime should start");
        let config = AppraiseConfig::default();

        let error = runtime
            .block_on(run(&config))
            .expect_err("missing product should fail");

        assert_eq!(error, AnalysisError::MissingQuery);
    }
}
