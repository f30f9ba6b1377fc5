use axum::http::StatusCode;
use serde_json::json;

use crate::integration::common::setup_test_app;

#[tokio::test]
async fn create_and_list_testimonials() {
    let app = setup_test_app().await;

    let (status, json) = app
        .post_json(
            "/api/v1/create-testimonial",
            &json!({"name": "Karim", "quote": "Supplies arrived within a day"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Your Testimonial Created successfully");
    let id = json["data"]["insertedId"].as_str().unwrap().to_string();

    let (status, json) = app.get("/api/v1/getAllTestimonial").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"],
        json!([{"id": id, "name": "Karim", "quote": "Supplies arrived within a day"}])
    );
}

#[tokio::test]
async fn testimonials_do_not_leak_into_supplies() {
    let app = setup_test_app().await;

    app.post_json("/api/v1/create-testimonial", &json!({"quote": "Thanks"}))
        .await;

    let (status, json) = app.get("/api/v1/getAllSupply").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn testimonials_have_no_single_item_routes() {
    let app = setup_test_app().await;

    let (status, _) = app.get("/api/v1/getSingleTestimonial/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
