use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use oncall_api::types::{CreateIntegrationOptions, Team, UpdateRouteOptions};
use oncall_api::{
    Client, ClientConfig, Error, ListAlertGroupOptions, ListEscalationOptions,
    ListIntegrationOptions, ListTeamOptions, ListUserNotificationRuleOptions, Query, RateLimit,
    RetryPolicy, DEFAULT_USER_AGENT, UNKNOWN_ERROR_FORMAT,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

/// Counts ERROR-level events on the thread it is installed on.
struct ErrorEventCounter(Arc<AtomicUsize>);

impl tracing::Subscriber for ErrorEventCounter {
    fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(1)
    }

    fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _: &tracing::span::Id) {}

    fn exit(&self, _: &tracing::span::Id) {}
}

fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(2, Duration::from_millis(1), Duration::from_millis(2))
}

fn client_for(server: &MockServer) -> Client {
    Client::from_config(
        ClientConfig::new(&server.uri(), TOKEN)
            .with_retry_policy(fast_retry())
            .without_rate_limit(),
    )
    .unwrap()
}

async fn received_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}

#[tokio::test]
async fn list_alert_groups_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/alert_groups/"))
        .and(query_param("page", "2"))
        .and(header("authorization", TOKEN))
        .and(header("accept", "application/json"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("alert_groups.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .alert_groups()
        .list(&ListAlertGroupOptions::default().with_page(2))
        .await
        .unwrap();

    assert_eq!(page.count, 3);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].id, "I68T24C13IFW1");
}

#[tokio::test]
async fn labels_are_sent_as_repeated_pairs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/alert_groups/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0, "next": null, "previous": null, "results": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .alert_groups()
        .list(
            &ListAlertGroupOptions::default()
                .with_label("env:prod")
                .with_label("severity:high"),
        )
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("label=env%3Aprod&label=severity%3Ahigh")
    );
}

#[tokio::test]
async fn empty_options_send_no_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/integrations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0, "next": null, "previous": null, "results": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .integrations()
        .list(&ListIntegrationOptions::default())
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn grafana_url_header_only_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/T3HRAP3K3IKOP/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "T3HRAP3K3IKOP", "name": "test team"
        })))
        .mount(&mock_server)
        .await;

    let plain = client_for(&mock_server);
    plain.teams().get("T3HRAP3K3IKOP").await.unwrap();

    let with_grafana = Client::from_config(
        ClientConfig::new(&mock_server.uri(), TOKEN)
            .with_grafana_url("https://grafana.example.com")
            .without_rate_limit(),
    )
    .unwrap();
    let team: Team = with_grafana.teams().get("T3HRAP3K3IKOP").await.unwrap();
    assert_eq!(team.name, "test team");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].headers.get("x-grafana-url").is_none());
    assert_eq!(
        requests[1].headers.get("x-grafana-url").unwrap(),
        "https://grafana.example.com"
    );
}

#[tokio::test]
async fn api_error_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/integrations/CFRPV98RPR1U8/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "error"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.integrations().get("CFRPV98RPR1U8").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        format!(
            "GET {}/api/v1/integrations/CFRPV98RPR1U8/: 400 {{detail: error}}",
            mock_server.uri()
        )
    );
    match err {
        Error::Api(api) => {
            assert_eq!(api.status().as_u16(), 400);
            assert_eq!(api.message(), "{detail: error}");
            assert_eq!(api.body(), br#"{"detail":"error"}"#);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn failures_are_not_logged_at_error_level() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "error"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/T1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::from_config(
        ClientConfig::new(&mock_server.uri(), TOKEN)
            .with_retry_policy(RetryPolicy::disabled())
            .without_rate_limit(),
    )
    .unwrap();

    let errors = Arc::new(AtomicUsize::new(0));
    let _guard = tracing::subscriber::set_default(ErrorEventCounter(Arc::clone(&errors)));

    let err = client
        .teams()
        .list(&ListTeamOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    let err = client.teams().get("T1").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));

    assert_eq!(errors.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_json_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/routes/RH2V5FYIPYJ1M/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<html>Forbidden</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.routes().delete("RH2V5FYIPYJ1M").await.unwrap_err();
    match err {
        Error::Api(api) => assert_eq!(api.message(), UNKNOWN_ERROR_FORMAT),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/schedules/MISSING/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.schedules().get("MISSING").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn server_error_then_success_is_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/routes/RH2V5FYIPYJ1M/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/routes/RH2V5FYIPYJ1M/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("route.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let route = client.routes().get("RH2V5FYIPYJ1M").await.unwrap();
    assert_eq!(route.routing_type, "regex");
    assert_eq!(received_count(&mock_server).await, 2);
}

#[tokio::test]
async fn retries_exhausted_surface_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!(["unavailable"])))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .teams()
        .list(&ListTeamOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
    assert!(err.is_transient());
    assert!(err.to_string().ends_with("503 [unavailable]"));
}

#[tokio::test]
async fn rate_limited_response_honors_reset_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/escalation_policies/"))
        .respond_with(ResponseTemplate::new(429).insert_header("RateLimit-Reset", "1"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/escalation_policies/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"id": "E3GA6SJETWWJS", "escalation_chain_id": "RIYGUJXCPFHXY", "position": 0, "type": "wait", "duration": 60}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let start = Instant::now();
    let page = client
        .escalations()
        .list(&ListEscalationOptions::default())
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_secs(1));
    assert_eq!(page.results[0].duration, Some(60));
}

#[tokio::test]
async fn cancelled_before_send_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    token.cancel();
    let client = client_for(&mock_server).with_cancellation(token);

    let err = client.teams().get("T3HRAP3K3IKOP").await.unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert_eq!(received_count(&mock_server).await, 0);
}

#[tokio::test]
async fn cancellation_interrupts_backoff() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let client = Client::from_config(
        ClientConfig::new(&mock_server.uri(), TOKEN)
            .with_retry_policy(RetryPolicy::new(
                4,
                Duration::from_secs(10),
                Duration::from_secs(20),
            ))
            .without_rate_limit(),
    )
    .unwrap()
    .with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        client.teams().list(&ListTeamOptions::default()),
    )
    .await
    .expect("cancellation should end the call well before the backoff");
    assert!(matches!(result, Err(Error::Cancelled)));
    canceller.await.unwrap();
    assert_eq!(received_count(&mock_server).await, 1);
}

#[tokio::test]
async fn invalid_time_range_sends_nothing() {
    let mock_server = MockServer::start().await;

    let client = client_for(&mock_server);
    let err = client
        .alert_groups()
        .list(
            &ListAlertGroupOptions::default()
                .with_started_at("2024-03-21T10:00:00_2024-03-20T10:00:00"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(received_count(&mock_server).await, 0);
}

#[tokio::test]
async fn create_integration_sends_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/integrations/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "team_id": "",
            "name": "Test Grafana",
            "type": "grafana"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("integration.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let integration = client
        .integrations()
        .create(&CreateIntegrationOptions::new("Test Grafana", "grafana"))
        .await
        .unwrap();
    assert_eq!(integration.id, "CFRPV98RPR1U8");
}

#[tokio::test]
async fn update_route_uses_put_on_member_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/routes/RH2V5FYIPYJ1M/"))
        .and(body_json(json!({"position": 1, "routing_regex": "us-west"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("route.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let options = UpdateRouteOptions {
        position: Some(1),
        routing_regex: Some("us-west".to_string()),
        ..Default::default()
    };
    let route = client
        .routes()
        .update("RH2V5FYIPYJ1M", &options)
        .await
        .unwrap();
    assert_eq!(route.id, "RH2V5FYIPYJ1M");
}

#[tokio::test]
async fn delete_returns_unit_on_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/actions/KGEFG74LU1D8L/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.custom_actions().delete("KGEFG74LU1D8L").await.unwrap();
}

#[tokio::test]
async fn notification_rules_use_personal_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/personal_notification_rules/"))
        .and(query_param("important", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("user_notification_rules.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .user_notification_rules()
        .list(&ListUserNotificationRuleOptions::default().with_important(true))
        .await
        .unwrap();
    assert_eq!(page.results.len(), 2);
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/U4DNY931HHJS5/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.users().get("U4DNY931HHJS5").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn next_page_follows_cursor() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/api/v1/teams/?page=2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "previous": format!("{}/api/v1/teams/", mock_server.uri()),
            "results": [{"id": "T2", "name": "second"}]
        })))
        .with_priority(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": next,
            "previous": null,
            "results": [{"id": "T1", "name": "first"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let first = client.teams().list(&ListTeamOptions::default()).await.unwrap();
    assert!(first.has_next());

    let second = client.next_page(&first).await.unwrap().unwrap();
    assert_eq!(second.results[0].name, "second");
    assert!(client.next_page(&second).await.unwrap().is_none());
}

#[tokio::test]
async fn follow_rejects_relative_cursor() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);
    let err = client.follow::<Team>("teams/?page=2").await.unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
}

#[tokio::test]
async fn follow_rejects_cursor_on_another_origin() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .follow::<Team>("https://elsewhere.example.com/api/v1/teams/?page=2")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
    assert_eq!(received_count(&mock_server).await, 0);
}

#[tokio::test]
async fn client_side_limiter_paces_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/T1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "T1", "name": "first"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    // One token every 500ms, burst of one.
    let client = Client::from_config(
        ClientConfig::new(&mock_server.uri(), TOKEN)
            .with_rate_limit(RateLimit::new(2, Duration::from_secs(1), 1)),
    )
    .unwrap();

    let start = Instant::now();
    client.teams().get("T1").await.unwrap();
    client.teams().get("T1").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(450));
}

#[test]
fn page_builder_is_available_on_every_filter() {
    let options = ListTeamOptions::default().with_name("ops").with_page(3);
    assert_eq!(options.common.page, Some(3));
}
