use std::sync::Arc;
use std::time::Duration;

use actix_web::{test, web, App};

use csvwash::http::{self, AppState};
use csvwash::store::ResultStore;

const BOUNDARY: &str = "------------------------csvwashtest";

fn state_with_limit(max_upload_bytes: usize) -> web::Data<AppState> {
    web::Data::new(AppState {
        store: Arc::new(ResultStore::new(Duration::from_secs(60))),
        max_upload_bytes,
    })
}

fn state() -> web::Data<AppState> {
    state_with_limit(1024 * 1024)
}

fn multipart_body(field_name: &str, filename: &str, csv_data: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
         filename=\"{filename}\"\r\nContent-Type: text/csv\r\n\r\n{csv_data}\r\n--{BOUNDARY}--\r\n"
    )
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test::init_service(App::new().app_data(state()).configure(http::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn index_serves_the_upload_form() {
    let app = test::init_service(App::new().app_data(state()).configure(http::configure)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<form action=\"/clean\""));
    assert!(html.contains("name=\"file\""));
}

#[actix_web::test]
async fn clean_then_download_roundtrip() {
    let app = test::init_service(App::new().app_data(state()).configure(http::configure)).await;

    let csv_data = "Name ,Age\nAlice,30\nalice,30\nBob,unknown\n";
    let req = test::TestRequest::post()
        .uri("/clean")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body("file", "people.csv", csv_data))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["filename"], "cleaned_people.csv");
    assert_eq!(body["summary"]["original_row_count"], 3);
    assert_eq!(body["summary"]["rows_removed"], 2);
    let session = body["session"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/download?session={session}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("cleaned_people.csv"));

    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"name,age\nalice,30\n");

    // Retrieval is single-use.
    let req = test::TestRequest::get()
        .uri(&format!("/download?session={session}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"no cleaned file available");
}

#[actix_web::test]
async fn headers_only_uploads_clean_to_headers_only_files() {
    let app = test::init_service(App::new().app_data(state()).configure(http::configure)).await;

    let req = test::TestRequest::post()
        .uri("/clean")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body("file", "empty.csv", "First Name,Age\n"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["summary"]["original_row_count"], 0);
    assert_eq!(body["summary"]["rows_removed"], 0);
    let session = body["session"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/download?session={session}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"first_name,age\n");
}

#[actix_web::test]
async fn uploads_without_a_file_field_are_rejected() {
    let app = test::init_service(App::new().app_data(state()).configure(http::configure)).await;

    let req = test::TestRequest::post()
        .uri("/clean")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body("other", "people.csv", "a\n1\n"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"no file uploaded");
}

#[actix_web::test]
async fn unparseable_csv_is_rejected() {
    let app = test::init_service(App::new().app_data(state()).configure(http::configure)).await;

    let req = test::TestRequest::post()
        .uri("/clean")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body("file", "ragged.csv", "a,b\n1,2\n3\n"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let body = test::read_body(resp).await;
    let message = String::from_utf8(body.to_vec()).unwrap();
    assert!(message.contains("could not parse CSV"));
}

#[actix_web::test]
async fn oversized_uploads_are_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(state_with_limit(8))
            .configure(http::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/clean")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body("file", "big.csv", "a,b,c\n1,2,3\n4,5,6\n"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_web::test]
async fn download_rejects_malformed_and_unknown_sessions() {
    let app = test::init_service(App::new().app_data(state()).configure(http::configure)).await;

    let req = test::TestRequest::get()
        .uri("/download?session=not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/download?session={}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}
