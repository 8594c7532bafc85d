use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use greensys_gateway::backend::Backend;
use greensys_gateway::backend::memory::{MemoryBackend, PDF_PROXY_KEY};
use greensys_gateway::config::AppConfig;
use greensys_gateway::errors::GreenSysError;
use greensys_gateway::models::AppStartTime;
use greensys_gateway::routes;
use greensys_gateway::utils::{json_error_handler, query_error_handler};

const TOKEN: &str = "Bearer guru-token";

fn fixture() -> Value {
    let names = [
        "Sari Wulandari",
        "Budi Santoso",
        "Andi Pratama",
        "Rina Marlina",
        "Dewi Lestari",
        "Agus Salim",
        "Putri Ayu",
        "Rudi Hartono",
        "Maya Sarita",
        "Joko Widodo",
        "Fajar Nugroho",
        "Lina Kusuma",
    ];
    let certificates: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, nama)| {
            json!({
                "id": i + 1,
                "certificateUrl": format!("https://cdn.greensys.id/cert/{}.pdf", i + 1),
                "createdAt": format!("2024-03-{:02}T08:00:00Z", i + 1),
                "siswa": {"id": i + 1, "nama": nama, "nis": format!("2024{:03}", i + 1)},
                "modul": {"judul": "Ekosistem"}
            })
        })
        .collect();

    json!({
        "/kelas": [
            {"id": 1, "kelas": "10", "namaKelas": "X IPA 1"},
            {"id": 2, "kelas": "11", "namaKelas": "XI IPS 2"},
            {"id": 3, "kelas": "12", "namaKelas": "XII IPA 3"}
        ],
        "/siswa": [
            {"id": 1, "nama": "Sari Wulandari", "nis": "2024001", "gender": "P", "kelasId": 1},
            {"id": 2, "nama": "Budi Santoso", "nis": "2024002", "gender": "L", "kelasId": 1},
            {"id": 3, "nama": "Andi Pratama", "nis": "2024003", "gender": "L", "kelasId": 2},
            {"id": 4, "nama": "Rina Marlina", "nis": "2024004", "gender": "P", "kelasId": null}
        ],
        "/users": [
            {"uuid": "u-1", "username": "admin", "email": "admin@greensys.id", "role": "admin"},
            {"uuid": "u-2", "username": "bu.dewi", "email": "dewi@greensys.id", "role": "guru"},
            {"uuid": "u-3", "username": "pak.agus", "email": "agus@greensys.id", "role": "guru"},
            {"uuid": "u-4", "username": "sari", "email": "sari@greensys.id", "role": "siswa"}
        ],
        "/certificate": certificates,
        "/all-results": [
            {"id": 1, "skor": 95.0, "siswa": {"id": 1, "nama": "Sari Wulandari"}, "groupSoal": {"judul": "Kuis 1"}},
            {"id": 2, "skor": 72.0, "siswa": {"id": 2, "nama": "Budi Santoso"}, "groupSoal": {"judul": "Kuis 1"}},
            {"id": 3, "skor": 58.0, "siswa": {"id": 1, "nama": "Sari Wulandari"}, "groupSoal": {"judul": "Kuis 2"}},
            {"id": 4, "skor": 61.0, "siswa": {"id": 3, "nama": "Andi Pratama"}, "groupSoal": {"judul": "Kuis 2"}}
        ],
        "/guru": [],
        "/modul": [],
        "/group-soal": []
    })
}

fn memory_backend() -> Arc<MemoryBackend> {
    Arc::new(MemoryBackend::from_fixture(fixture()).expect("fixture should load"))
}

macro_rules! gateway {
    ($memory:expr) => {{
        let backend: Arc<dyn Backend> = $memory.clone();
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new(backend))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(routes::configure_all),
        )
        .await
    }};
}

fn items(body: &Value) -> &Vec<Value> {
    body["data"]["items"].as_array().expect("items array")
}

#[actix_web::test]
async fn test_missing_token_redirects_to_login() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get().uri("/api/v1/kelas").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["data"]["redirect"],
        AppConfig::get().session.login_route.as_str()
    );
}

#[actix_web::test]
async fn test_upstream_session_expiry_uses_same_redirect() {
    let memory = memory_backend();
    memory.revoke_token("guru-token");
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/users")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["data"]["redirect"],
        AppConfig::get().session.login_route.as_str()
    );
}

#[actix_web::test]
async fn test_users_search_and_role_filter() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/users?search=GURU&sort=username&order=desc")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = items(&body)
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["pak.agus", "bu.dewi"]);

    let req = test::TestRequest::get()
        .uri("/api/v1/users?role=siswa")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(items(&body).len(), 1);
    assert_eq!(body["data"]["pagination"]["total"], 1);
}

#[actix_web::test]
async fn test_unknown_sort_key_is_rejected() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/users?sort=password")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_certificate_search_single_page() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/certificates?search=sari")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let matched: Vec<&str> = items(&body)
        .iter()
        .map(|c| c["siswa"]["nama"].as_str().unwrap())
        .collect();
    assert_eq!(matched, vec!["Sari Wulandari", "Maya Sarita"]);
    assert_eq!(body["data"]["pagination"]["totalPages"], 1);
    assert_eq!(body["data"]["pagination"]["total"], 2);
}

#[actix_web::test]
async fn test_certificates_paginate_by_configured_page_size() {
    let memory = memory_backend();
    let app = gateway!(memory);
    let page_size = AppConfig::get().listing.page_size;

    let req = test::TestRequest::get()
        .uri("/api/v1/certificates?page=2")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["pagination"]["total"], 12);
    assert_eq!(
        items(&body).len(),
        12usize.saturating_sub(page_size).min(page_size)
    );
}

#[actix_web::test]
async fn test_results_band_filter() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/results?band=poor")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let scores: Vec<f64> = items(&body)
        .iter()
        .map(|r| r["skor"].as_f64().unwrap())
        .collect();
    assert_eq!(scores, vec![58.0]);
}

#[actix_web::test]
async fn test_results_degrade_to_empty_view() {
    let memory = memory_backend();
    memory.fail_path("/all-results", GreenSysError::server_fault("boom"));
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/results")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(items(&body).is_empty());
    assert!(body["data"]["warning"].is_string());
}

#[actix_web::test]
async fn test_student_results_only_for_that_student() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/results/student/1")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(items(&body).len(), 2);
    assert!(items(&body).iter().all(|r| r["siswa"]["id"] == 1));
}

#[actix_web::test]
async fn test_users_failure_is_not_silenced() {
    let memory = memory_backend();
    memory.fail_path("/users", GreenSysError::server_fault("boom"));
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/users")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn test_delete_returns_refreshed_view_then_not_found() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::delete()
        .uri("/api/v1/kelas/2")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let ids: Vec<i64> = items(&body)
        .iter()
        .map(|k| k["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(memory.collection_len("/kelas"), 2);

    let req = test::TestRequest::delete()
        .uri("/api/v1/kelas/2")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(memory.collection_len("/kelas"), 2);
}

#[actix_web::test]
async fn test_invalid_id_is_rejected_before_upstream() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::delete()
        .uri("/api/v1/kelas/2;drop")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(memory.collection_len("/kelas"), 3);
}

#[actix_web::test]
async fn test_get_kelas_by_id() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/kelas/1")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["namaKelas"], "X IPA 1");

    let req = test::TestRequest::get()
        .uri("/api/v1/kelas/99")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn test_stats_route_is_not_taken_as_id() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/kelas/stats")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["items"].is_array());
}

#[actix_web::test]
async fn test_get_guru_modul_group_soal_by_id() {
    let memory = memory_backend();
    memory.insert_collection(
        "/guru",
        vec![json!({"id": 7, "nip": 198703152010012001_i64, "nama": "Dewi Lestari"})],
    );
    memory.insert_collection(
        "/modul",
        vec![json!({"id": 3, "judul": "Ekosistem", "kelasId": 1})],
    );
    memory.insert_collection(
        "/group-soal",
        vec![json!({"id": 5, "judul": "Kuis 1", "durasi": 30, "kelasId": 1})],
    );
    let app = gateway!(memory);

    let cases = [
        ("/api/v1/guru/7", "nama", "Dewi Lestari"),
        ("/api/v1/modul/3", "judul", "Ekosistem"),
        ("/api/v1/group-soal/5", "judul", "Kuis 1"),
    ];
    for (uri, field, expected) in cases {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header((AUTHORIZATION, TOKEN))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][field], expected, "{uri}");
    }

    // NIP 保持数字类型
    let req = test::TestRequest::get()
        .uri("/api/v1/guru/7")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["nip"], 198703152010012001_i64);

    for uri in ["/api/v1/guru/5", "/api/v1/modul/9", "/api/v1/group-soal/9"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header((AUTHORIZATION, TOKEN))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn test_kelas_stats_joins_both_collections() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/kelas/stats")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let stats = &body["data"];
    assert_eq!(stats["totalSiswa"], 4);
    assert_eq!(stats["unassignedSiswa"], 1);
    let first = &stats["items"][0];
    assert_eq!(first["namaKelas"], "X IPA 1");
    assert_eq!(first["totalSiswa"], 2);
    assert_eq!(first["lakiLaki"], 1);
    assert_eq!(first["perempuan"], 1);
}

#[actix_web::test]
async fn test_kelas_stats_reports_failed_side() {
    let memory = memory_backend();
    memory.fail_path("/siswa", GreenSysError::network("connection refused"));
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/kelas/stats")
        .insert_header((AUTHORIZATION, TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["failed"], json!(["siswa"]));
}

#[actix_web::test]
async fn test_create_kelas_requires_name() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::post()
        .uri("/api/v1/kelas")
        .insert_header((AUTHORIZATION, TOKEN))
        .set_json(json!({"kelas": 10, "namaKelas": "  "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(memory.collection_len("/kelas"), 3);

    let req = test::TestRequest::post()
        .uri("/api/v1/kelas")
        .insert_header((AUTHORIZATION, TOKEN))
        .set_json(json!({"kelas": 10, "namaKelas": "X IPA 2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], 4);
    assert_eq!(body["data"]["kelas"], 10);
}

#[actix_web::test]
async fn test_create_guru_from_multipart_form() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let boundary = "greensysboundary";
    let mut payload = Vec::new();
    payload.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"nama\"\r\n\r\nDewi Lestari\r\n"
        )
        .as_bytes(),
    );
    payload.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"foto\"; filename=\"dewi.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    payload.extend_from_slice(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00]);
    payload.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let req = test::TestRequest::post()
        .uri("/api/v1/guru")
        .insert_header((AUTHORIZATION, TOKEN))
        .insert_header((
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        ))
        .set_payload(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(memory.collection_len("/guru"), 1);
}

#[actix_web::test]
async fn test_certificate_download_is_an_attachment() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::post()
        .uri("/api/v1/certificates/download")
        .insert_header((AUTHORIZATION, TOKEN))
        .set_json(json!({"pdfUrl": "https://cdn.greensys.id/cert/1.pdf"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/pdf");
    assert_eq!(
        resp.headers().get(CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"1.pdf\""
    );

    let bytes = test::read_body(resp).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[actix_web::test]
async fn test_certificate_download_failure_surfaces_message() {
    let memory = memory_backend();
    memory.fail_path(PDF_PROXY_KEY, GreenSysError::not_found("gone"));
    let app = gateway!(memory);

    let req = test::TestRequest::post()
        .uri("/api/v1/certificates/download")
        .insert_header((AUTHORIZATION, TOKEN))
        .set_json(json!({"pdfUrl": "https://cdn.greensys.id/cert/99.pdf"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_health_needs_no_session() {
    let memory = memory_backend();
    let app = gateway!(memory);

    let req = test::TestRequest::get()
        .uri("/api/v1/system/health")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["upstream"], "memory");
}
