use crate::e2e::helpers::{provider_mocks, TestContext};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn it_should_reject_empty_text() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/api/tts", &json!({"text": "", "lang": "en"}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Matn kiritilmagan");
}

#[tokio::test]
async fn it_should_synthesize_text_to_speech() {
    let ctx = TestContext::new().await.unwrap();
    provider_mocks::mock_tts(&ctx.tts_server).await;

    let response = ctx
        .client
        .post("/api/tts", &json!({"text": "Hello", "lang": "en"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let audio_url = body["audio_url"].as_str().expect("audio_url should be set");
    assert!(audio_url.starts_with("/static/audio/"));
    assert!(audio_url.ends_with(".mp3"));

    // The file exists on disk immediately after the response
    let filename = audio_url.rsplit('/').next().unwrap();
    let written = std::fs::read(ctx.audio_dir.join(filename)).unwrap();
    assert_eq!(written, provider_mocks::fake_mp3());
}

#[tokio::test]
async fn it_should_serve_the_generated_audio_file() {
    let ctx = TestContext::new().await.unwrap();
    provider_mocks::mock_tts(&ctx.tts_server).await;

    let response = ctx
        .client
        .post("/api/tts", &json!({"text": "Hello", "lang": "en"}))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    let audio_url = response.body.as_ref().unwrap()["audio_url"]
        .as_str()
        .unwrap()
        .to_string();

    let audio_response = ctx.client.get(&audio_url).await.unwrap();
    audio_response.assert_status(StatusCode::OK);
    assert_eq!(audio_response.body_bytes, provider_mocks::fake_mp3());
}

#[tokio::test]
async fn it_should_default_the_language_to_english() {
    let ctx = TestContext::new().await.unwrap();
    provider_mocks::mock_tts(&ctx.tts_server).await;

    let response = ctx
        .client
        .post("/api/tts", &json!({"text": "Hello"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn it_should_fail_when_the_synthesis_provider_fails() {
    let ctx = TestContext::new().await.unwrap();
    provider_mocks::mock_tts_failure(&ctx.tts_server).await;

    let response = ctx
        .client
        .post("/api/tts", &json!({"text": "Hello", "lang": "en"}))
        .await
        .unwrap();

    // Audio is the sole product here, so synthesis failure fails the request
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.as_ref().unwrap().get("error").is_some());
    assert!(ctx.audio_files().is_empty());
}

#[tokio::test]
async fn it_should_produce_distinct_files_for_consecutive_requests() {
    let ctx = TestContext::new().await.unwrap();
    provider_mocks::mock_tts(&ctx.tts_server).await;

    let mut urls = Vec::new();
    for _ in 0..3 {
        let response = ctx
            .client
            .post("/api/tts", &json!({"text": "Hello", "lang": "en"}))
            .await
            .unwrap();
        response.assert_status(StatusCode::OK);
        urls.push(
            response.body.as_ref().unwrap()["audio_url"]
                .as_str()
                .unwrap()
                .to_string(),
        );
    }

    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), 3);
    assert_eq!(ctx.audio_files().len(), 3);
}
