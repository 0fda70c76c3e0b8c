// ═══════════════════════════════════════════════════════════════════
// Provider Tests — HttpChartDataSource against a local server, StaticPage
// ═══════════════════════════════════════════════════════════════════

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use portfolio_charts_core::errors::ChartError;
use portfolio_charts_core::models::period::Frequency;
use portfolio_charts_core::models::settings::EndpointConfig;
use portfolio_charts_core::providers::http::HttpChartDataSource;
use portfolio_charts_core::providers::page::StaticPage;
use portfolio_charts_core::providers::traits::{ChartDataSource, PageSource};

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — one-shot HTTP server
// ═══════════════════════════════════════════════════════════════════

/// Serve exactly one response, returning the base URL and a handle that
/// resolves to the raw request head.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let n = socket.read(&mut buf).await.unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}

fn source_for(base_url: &str) -> HttpChartDataSource {
    HttpChartDataSource::new(&EndpointConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..EndpointConfig::default()
    })
}

// ═══════════════════════════════════════════════════════════════════
// HttpChartDataSource
// ═══════════════════════════════════════════════════════════════════

mod http_source {
    use super::*;

    #[test]
    fn url_includes_frequency_code() {
        let source = source_for("https://portfolio.example");
        assert_eq!(
            source.url_for(Frequency::Quarterly),
            "https://portfolio.example/portfolio/chart-data?freq=Q"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let source = source_for("https://portfolio.example/");
        assert_eq!(
            source.url_for(Frequency::Daily),
            "https://portfolio.example/portfolio/chart-data?freq=D"
        );
    }

    #[test]
    fn default_points_at_local_server() {
        let source = HttpChartDataSource::default();
        assert_eq!(source.name(), "chart-data endpoint");
        assert!(source.url_for(Frequency::Weekly).ends_with("/portfolio/chart-data?freq=W"));
    }

    #[tokio::test]
    async fn success_decodes_payload() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"labels":["2024-01","2024-02"],"values":[1000.5,1100.0],"costs":[900,900]}"#,
        )
        .await;

        let payload = source_for(&base)
            .fetch_time_series(Frequency::Monthly)
            .await
            .unwrap();

        assert_eq!(payload.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(payload.values, vec![1000.5, 1100.0]);
        assert_eq!(payload.costs, Some(vec![900.0, 900.0]));

        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /portfolio/chart-data?freq=M "),
            "unexpected request: {request}"
        );
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = source_for(&base)
            .fetch_time_series(Frequency::Daily)
            .await
            .unwrap_err();

        match err {
            ChartError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("Expected Api, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_response_parse_error() {
        let (base, server) = serve_once("200 OK", "<html>login</html>").await;

        let err = source_for(&base)
            .fetch_time_series(Frequency::Weekly)
            .await
            .unwrap_err();

        assert!(matches!(err, ChartError::ResponseParse(_)), "got {:?}", err);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source_for(&format!("http://{addr}"))
            .fetch_time_series(Frequency::Daily)
            .await
            .unwrap_err();

        match err {
            ChartError::Network(msg) => {
                assert!(!msg.contains("freq="), "query leaked: {msg}");
                assert!(msg.contains("?<query redacted>"), "got {msg}");
            }
            other => panic!("Expected Network, got {:?}", other),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// StaticPage
// ═══════════════════════════════════════════════════════════════════

mod static_page {
    use super::*;

    #[test]
    fn returns_element_text() {
        let page = StaticPage::new().with_element("ts-data", "{}");
        assert_eq!(page.text_content("ts-data").as_deref(), Some("{}"));
        assert!(page.text_content("inflation-data").is_none());
    }

    #[test]
    fn later_element_replaces_earlier() {
        let page = StaticPage::new()
            .with_element("ts-data", "{")
            .with_element("ts-data", "{}");
        assert_eq!(page.text_content("ts-data").as_deref(), Some("{}"));
    }

    #[test]
    fn canvas_heights() {
        let page = StaticPage::new().with_canvas_height("valueChart", 320);
        assert_eq!(page.canvas_height("valueChart"), Some(320));
        assert_eq!(page.canvas_height("inflationCompare"), None);
    }
}
