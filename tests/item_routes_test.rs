mod common;

use myshop::test::utils::{event_field, LogCapture};
use poem::http::StatusCode;
use serde_json::json;

use common::{bearer_for, client_for, seeded_store, token_for};

#[tokio::test]
async fn test_root_redirects_to_table() {
    let cli = client_for(seeded_store());

    let resp = cli.get("/").send().await;
    resp.assert_status(StatusCode::SEE_OTHER);
    resp.assert_header("location", "/Item/Table");
}

#[tokio::test]
async fn test_table_and_grid_list_every_item() {
    let cli = client_for(seeded_store());

    let resp = cli.get("/Item/Table").send().await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("data-view=\"Table\""));
    assert!(body.contains("Pizza"));
    assert!(body.contains("Coke"));
    assert!(body.contains("Tacos"));

    let resp = cli.get("/Item/Grid").send().await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("data-view=\"Grid\""));
    assert!(body.contains("Pizza"));
}

#[tokio::test]
async fn test_unavailable_list_is_not_found() {
    let store = seeded_store();
    store.set_list_unavailable(true);
    let cli = client_for(store.clone());

    let resp = cli.get("/Item/Table").send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_text("Item list not found").await;
}

#[tokio::test]
async fn test_details_found_and_missing() {
    let cli = client_for(seeded_store());

    let resp = cli.get("/Item/Details").query("id", &1).send().await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("Pizza"));
    assert!(body.contains("150.00"));

    let resp = cli.get("/Item/Details").query("id", &7).send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    resp.assert_text("Item not found for the ItemId").await;
}

#[tokio::test]
async fn test_details_with_unbindable_id_is_not_found_and_logged() {
    let cli = client_for(seeded_store());

    for query in ["", "?id=abc", "?id="] {
        let (logs, _guard) = LogCapture::install();

        let resp = cli.get(format!("/Item/Details{}", query)).send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_text("Item not found for the ItemId").await;

        let errors = logs.events_at("ERROR");
        assert_eq!(errors.len(), 1, "query {:?}", query);
        assert_eq!(event_field(&errors[0], "item_id"), Some(&json!(0)));
    }
}

#[tokio::test]
async fn test_delete_confirmed_without_id_is_bad_request_and_logged() {
    let store = seeded_store();
    let cli = client_for(store.clone());
    let (logs, _guard) = LogCapture::install();

    let resp = cli
        .post("/Item/DeleteConfirmed")
        .header("Authorization", bearer_for("clerk"))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_text("Item deletion failed").await;

    let errors = logs.events_at("ERROR");
    assert_eq!(errors.len(), 1);
    assert_eq!(event_field(&errors[0], "item_id"), Some(&json!(0)));
    assert_eq!(store.snapshot().await.len(), 3);
}

#[tokio::test]
async fn test_update_and_delete_forms_with_garbage_id_are_bad_request() {
    let cli = client_for(seeded_store());
    let (logs, _guard) = LogCapture::install();

    for path in ["/Item/Update?id=x", "/Item/Delete?id=x"] {
        let resp = cli.get(path).header("Authorization", bearer_for("clerk")).send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    assert_eq!(logs.events_at("ERROR").len(), 2);
}

#[tokio::test]
async fn test_mutating_pages_require_bearer_token() {
    let store = seeded_store();
    let cli = client_for(store.clone());

    let resp = cli.get("/Item/Create").send().await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
    resp.assert_header("www-authenticate", "Bearer");

    let resp = cli
        .post("/Item/Create")
        .form(&[("name", "Tea"), ("price", "19.5")])
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);

    let resp = cli
        .post("/Item/DeleteConfirmed")
        .query("id", &1)
        .header("Authorization", "Bearer forged")
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);

    assert_eq!(store.call_count(), 0);
    assert_eq!(store.snapshot().await.len(), 3);
}

#[tokio::test]
async fn test_form_post_with_access_cookie_is_admitted() {
    let store = seeded_store();
    let cli = client_for(store.clone());

    let resp = cli
        .post("/Item/Create")
        .header("Cookie", format!("access_token={}", token_for("clerk")))
        .form(&[("name", "Tea"), ("price", "20")])
        .send()
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    resp.assert_header("location", "/Item/Table");
    assert!(store.snapshot().await.iter().any(|item| item.name == "Tea"));
}

#[tokio::test]
async fn test_sign_in_cookie_opens_update_link() {
    let cli = client_for(seeded_store());

    let resp = cli
        .post("/Account/SignIn")
        .form(&[("token", token_for("clerk").as_str())])
        .send()
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    let set_cookie = resp.0.headers().get("set-cookie").unwrap().to_str().unwrap();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let resp = cli.get("/Item/Update").query("id", &1).header("Cookie", cookie).send().await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("Pizza"));
}

#[tokio::test]
async fn test_forged_access_cookie_is_rejected() {
    let store = seeded_store();
    let cli = client_for(store.clone());

    let resp = cli
        .post("/Item/Create")
        .header("Cookie", "access_token=forged")
        .form(&[("name", "Tea"), ("price", "20")])
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_create_valid_item_redirects_to_table() {
    let store = seeded_store();
    let cli = client_for(store.clone());

    let resp = cli.get("/Item/Create").header("Authorization", bearer_for("clerk")).send().await;
    resp.assert_status_is_ok();

    let resp = cli
        .post("/Item/Create")
        .header("Authorization", bearer_for("clerk"))
        .form(&[("name", "Tea"), ("price", "19.5"), ("description", "Hot"), ("image_url", "")])
        .send()
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    resp.assert_header("location", "/Item/Table");

    let items = store.snapshot().await;
    let tea = items.iter().find(|item| item.name == "Tea").unwrap();
    assert_eq!(tea.price, 19.5);
    assert_eq!(tea.description.as_deref(), Some("Hot"));
    assert_eq!(tea.image_url, None);
}

#[tokio::test]
async fn test_create_invalid_item_redisplays_form() {
    let store = seeded_store();
    let cli = client_for(store.clone());

    let resp = cli
        .post("/Item/Create")
        .header("Authorization", bearer_for("clerk"))
        .form(&[("name", ""), ("price", "0")])
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("The Name field is required."));
    assert!(body.contains("The Price must be greater than 0."));

    assert_eq!(store.call_count(), 0);
    assert_eq!(store.snapshot().await.len(), 3);
}

#[tokio::test]
async fn test_update_form_for_missing_item_is_bad_request() {
    let cli = client_for(seeded_store());

    let resp = cli
        .get("/Item/Update")
        .query("id", &7)
        .header("Authorization", bearer_for("clerk"))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_text("Item not found for the ItemId").await;

    let resp = cli
        .get("/Item/Update")
        .query("id", &42)
        .header("Authorization", bearer_for("clerk"))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("Tacos"));
    assert!(body.contains("value=\"42\""));
}

#[tokio::test]
async fn test_update_submission_overwrites_item() {
    let store = seeded_store();
    let cli = client_for(store.clone());

    let resp = cli
        .post("/Item/Update")
        .header("Authorization", bearer_for("clerk"))
        .form(&[("item_id", "1"), ("name", "Pizza Grande"), ("price", "175")])
        .send()
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    resp.assert_header("location", "/Item/Table");

    let items = store.snapshot().await;
    assert_eq!(items[0].item_id, 1);
    assert_eq!(items[0].name, "Pizza Grande");
    assert_eq!(items[0].price, 175.0);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let store = seeded_store();
    let cli = client_for(store.clone());

    let resp = cli
        .get("/Item/Delete")
        .query("id", &2)
        .header("Authorization", bearer_for("clerk"))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("Coke"));

    let resp = cli
        .post("/Item/DeleteConfirmed")
        .query("id", &2)
        .header("Authorization", bearer_for("clerk"))
        .send()
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    resp.assert_header("location", "/Item/Table");
    assert!(store.snapshot().await.iter().all(|item| item.item_id != 2));

    let resp = cli
        .post("/Item/DeleteConfirmed")
        .query("id", &2)
        .header("Authorization", bearer_for("clerk"))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.assert_text("Item deletion failed").await;
}

#[tokio::test]
async fn test_health_reports_database_not_configured() {
    let cli = client_for(seeded_store());

    let resp = cli.get("/api/health").send().await;
    resp.assert_status_is_ok();
    let json = resp.json().await;
    let value = json.value().object();
    value.get("status").assert_string("healthy");
    value.get("database").assert_string("not_configured");
}
