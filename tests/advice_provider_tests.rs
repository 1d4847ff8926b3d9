use solpower::advice::{
    AdviceProvider, AdviceRequest, FALLBACK_ADVICE, GeminiProvider, OpenRouterProvider,
    ProviderError, UnconfiguredProvider, get_tech_advice,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn inverter_request() -> AdviceRequest {
    AdviceRequest {
        product_type: "inverter".to_string(),
        issue_category: "Lỗi AC Overload".to_string(),
        description: "Inverter báo lỗi vào buổi trưa".to_string(),
    }
}

fn gemini(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new(
        "test-key".to_string(),
        "gemini-test".to_string(),
        Some(server.uri()),
    )
}

fn openrouter(server: &MockServer) -> OpenRouterProvider {
    OpenRouterProvider::new(
        "test-key".to_string(),
        "test/model".to_string(),
        Some(server.uri()),
    )
}

// ============================================================================
// Gemini Provider Tests
// ============================================================================

#[tokio::test]
async fn test_gemini_returns_candidate_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_string_contains("Lỗi AC Overload"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r###"{"candidates":[{"content":{"role":"model","parts":[{"text":"## Chẩn đoán\n"},{"text":"Quá tải AC."}]}}]}"###,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let advice = get_tech_advice(&gemini(&mock_server), &inverter_request()).await;
    assert_eq!(advice, "## Chẩn đoán\nQuá tải AC.");
}

#[tokio::test]
async fn test_gemini_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&mock_server)
        .await;

    let result = gemini(&mock_server).generate("xin chào").await;
    match result {
        Err(ProviderError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert!(message.contains("API key not valid"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_gemini_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let result = gemini(&mock_server).generate("xin chào").await;
    assert!(matches!(result, Err(ProviderError::Parse(_))));
}

#[tokio::test]
async fn test_gemini_blocked_candidate_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#),
        )
        .mount(&mock_server)
        .await;

    let result = gemini(&mock_server).generate("xin chào").await;
    assert!(matches!(result, Err(ProviderError::Empty)));

    let advice = get_tech_advice(&gemini(&mock_server), &inverter_request()).await;
    assert_eq!(advice, FALLBACK_ADVICE);
}

// ============================================================================
// OpenRouter Provider Tests
// ============================================================================

#[tokio::test]
async fn test_openrouter_returns_message_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_string_contains("test/model"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Kiểm tra CB tổng.  "}}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let advice = get_tech_advice(&openrouter(&mock_server), &inverter_request()).await;
    assert_eq!(advice, "Kiểm tra CB tổng.");
}

#[tokio::test]
async fn test_openrouter_http_error_falls_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let provider = openrouter(&mock_server);
    let result = provider.generate("xin chào").await;
    assert!(matches!(result, Err(ProviderError::Api { status: 500, .. })));

    let advice = get_tech_advice(&provider, &inverter_request()).await;
    assert_eq!(advice, FALLBACK_ADVICE);
}

#[tokio::test]
async fn test_openrouter_no_choices_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"choices":[]}"#))
        .mount(&mock_server)
        .await;

    let result = openrouter(&mock_server).generate("xin chào").await;
    assert!(matches!(result, Err(ProviderError::Empty)));
}

#[tokio::test]
async fn test_openrouter_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"choices\": ["))
        .mount(&mock_server)
        .await;

    let result = openrouter(&mock_server).generate("xin chào").await;
    assert!(matches!(result, Err(ProviderError::Parse(_))));
}

// ============================================================================
// Fallback Tests
// ============================================================================

#[tokio::test]
async fn test_network_failure_falls_back() {
    // Nothing listens on this port once the server is dropped
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let provider = GeminiProvider::new("k".to_string(), "m".to_string(), Some(uri));

    let result = provider.generate("xin chào").await;
    assert!(matches!(result, Err(ProviderError::Network(_))));
    assert_eq!(
        get_tech_advice(&provider, &inverter_request()).await,
        FALLBACK_ADVICE
    );
}

#[tokio::test]
async fn test_unconfigured_provider_falls_back() {
    let advice = get_tech_advice(&UnconfiguredProvider, &inverter_request()).await;
    assert_eq!(advice, FALLBACK_ADVICE);
}
