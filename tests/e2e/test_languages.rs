use crate::e2e::helpers::TestContext;
use hyper::StatusCode;

#[tokio::test]
async fn it_should_list_all_registered_languages() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let languages = body.as_object().expect("body should be a map");
    assert_eq!(languages.len(), 20);
}

#[tokio::test]
async fn it_should_populate_all_display_fields_for_every_language() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/api/languages").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    for (code, entry) in body.as_object().unwrap() {
        for field in ["name", "uz_name", "native", "flag"] {
            let value = entry
                .get(field)
                .and_then(|v| v.as_str())
                .unwrap_or_else(|| panic!("language {} is missing field {}", code, field));
            assert!(!value.is_empty(), "language {} has empty {}", code, field);
        }
    }
}

#[tokio::test]
async fn it_should_return_the_expected_entry_for_english() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/api/languages").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let english = body.get("en").expect("en should be listed");
    assert_eq!(english.get("name").and_then(|v| v.as_str()), Some("English"));
    assert_eq!(
        english.get("uz_name").and_then(|v| v.as_str()),
        Some("Inglizcha")
    );
    assert_eq!(
        english.get("native").and_then(|v| v.as_str()),
        Some("English")
    );
    assert_eq!(english.get("flag").and_then(|v| v.as_str()), Some("EN"));
}
