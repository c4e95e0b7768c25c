//! Backend health check operation.

use std::io::{self, Write};

use appraise::{AnalysisError, AnalysisGateway, AppraiseConfig};
use url::Url;

use super::build_gateway;

/// Checks `GET /health` on the configured backend.
///
/// # Errors
///
/// Returns the request error, or [`AnalysisError::Unhealthy`] when the
/// backend answers with a status other than `ok`.
pub async fn run(config: &AppraiseConfig) -> Result<(), AnalysisError> {
    let gateway = build_gateway(config)?;
    let api_base = gateway.api_base().clone();
    check_health(&gateway, &api_base, &mut io::stdout()).await
}

/// Probes `gateway` and writes a one-line verdict.
///
/// # Errors
///
/// See [`run`].
pub async fn check_health<G, W>(
    gateway: &G,
    api_base: &Url,
    writer: &mut W,
) -> Result<(), AnalysisError>
where
    G: AnalysisGateway + ?Sized,
    W: Write,
{
    let status = gateway.health().await?;

    if !status.is_healthy() {
        return Err(AnalysisError::Unhealthy {
            status: status.status.unwrap_or_default(),
        });
    }

    writeln!(writer, "backend at {api_base} is healthy").map_err(|error| AnalysisError::io(&error))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use appraise::HttpAnalysisGateway;
    use rstest::rstest;
    use serde_json::json;
    use tokio::runtime::Runtime;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn probe(response: ResponseTemplate) -> (Result<(), AnalysisError>, String, Url) {
        let runtime = Runtime::new().expect("runtime should start");
        let server = runtime.block_on(MockServer::start());
        runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/health"))
                .respond_with(response)
                .mount(&server),
        );
        let api_base = Url::parse(&server.uri()).expect("mock server URI should parse");
        let gateway = HttpAnalysisGateway::new(api_base.clone(), Duration::from_secs(5))
            .expect("gateway should build");

        let mut output = Vec::new();
        let outcome = runtime.block_on(check_health(&gateway, &api_base, &mut output));
        let text = String::from_utf8(output).expect("output should be UTF-8");
        (outcome, text, api_base)
    }

    #[rstest]
    fn reports_healthy_backend() {
        let (outcome, text, api_base) =
            probe(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})));

        assert_eq!(outcome, Ok(()));
        assert_eq!(text, format!("backend at {api_base} is healthy\n"));
    }

    #[rstest]
    fn rejects_unexpected_status() {
        let (outcome, text, _) =
            probe(ResponseTemplate::new(200).set_body_json(json!({"status": "degraded"})));

        assert_eq!(
            outcome,
            Err(AnalysisError::Unhealthy {
                status: "degraded".to_owned(),
            })
        );
        assert!(text.is_empty());
    }

    #[rstest]
    fn propagates_server_errors() {
        let (outcome, _, _) = probe(ResponseTemplate::new(503).set_body_string("down"));

        assert!(matches!(outcome, Err(AnalysisError::Api { status: 503, .. })));
    }
}
