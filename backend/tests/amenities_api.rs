//! End-to-end amenity API tests over in-memory adapters.

mod support;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::Value;
use uuid::Uuid;

use support::{InMemoryStore, login_as, room_payload, spawn_app};

#[actix_web::test]
async fn an_amenity_survives_the_full_lifecycle() {
    let store = InMemoryStore::new();
    let app = spawn_app(&store).await;
    let cookie = login_as(&app, "Ada Lovelace").await;

    let create = actix_test::TestRequest::post()
        .uri("/api/v1/amenities")
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "name": "Wifi", "description": "Fibre uplink" }))
        .to_request();
    let response = actix_test::call_service(&app, create).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = actix_test::read_body_json(response).await;
    let amenity_id = created["id"].as_str().expect("amenity id").to_owned();
    assert_eq!(created["name"], "Wifi");

    let lookup = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/amenities/{amenity_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(lookup.status(), StatusCode::OK);

    let update = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/amenities/{amenity_id}"))
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "name": "Fast wifi" }))
        .to_request();
    let response = actix_test::call_service(&app, update).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = actix_test::read_body_json(response).await;
    assert_eq!(updated["name"], "Fast wifi");
    assert_eq!(updated["description"], "Fibre uplink");

    let delete = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/amenities/{amenity_id}"))
        .cookie(cookie)
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, delete).await.status(),
        StatusCode::NO_CONTENT
    );

    let lookup = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/amenities/{amenity_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(lookup.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn amenities_list_in_name_order() {
    let store = InMemoryStore::new();
    store.seed_amenity("Wifi");
    store.seed_amenity("Balcony");
    store.seed_amenity("Parking");
    let app = spawn_app(&store).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/amenities")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let names: Vec<&str> = body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|amenity| amenity["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Balcony", "Parking", "Wifi"]);
    assert_eq!(body["total"], 3);
}

#[actix_web::test]
async fn an_empty_patch_reads_back_the_stored_amenity() {
    let store = InMemoryStore::new();
    let amenity_id = store.seed_amenity("Wifi");
    let app = spawn_app(&store).await;
    let cookie = login_as(&app, "Ada Lovelace").await;

    let update = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/amenities/{amenity_id}"))
        .cookie(cookie)
        .set_json(serde_json::json!({}))
        .to_request();
    let response = actix_test::call_service(&app, update).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["name"], "Wifi");
}

#[actix_web::test]
async fn updates_and_deletes_of_unknown_amenities_are_not_found() {
    let store = InMemoryStore::new();
    let app = spawn_app(&store).await;
    let cookie = login_as(&app, "Ada Lovelace").await;
    let missing = Uuid::new_v4();

    let update = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/amenities/{missing}"))
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "name": "Sauna" }))
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, update).await.status(),
        StatusCode::NOT_FOUND
    );

    let delete = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/amenities/{missing}"))
        .cookie(cookie)
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, delete).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn creating_an_amenity_requires_a_session() {
    let store = InMemoryStore::new();
    let app = spawn_app(&store).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/amenities")
        .set_json(serde_json::json!({ "name": "Wifi" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn deleting_an_amenity_detaches_it_from_rooms() {
    let store = InMemoryStore::new();
    let wifi = store.seed_amenity("Wifi");
    let app = spawn_app(&store).await;
    let cookie = login_as(&app, "Ada Lovelace").await;

    let create = actix_test::TestRequest::post()
        .uri("/api/v1/rooms")
        .cookie(cookie.clone())
        .set_json(room_payload(&[wifi]))
        .to_request();
    let created: Value = actix_test::read_body_json(actix_test::call_service(&app, create).await).await;
    let room_id = created["id"].as_str().expect("room id").to_owned();

    let delete = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/amenities/{wifi}"))
        .cookie(cookie)
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, delete).await.status(),
        StatusCode::NO_CONTENT
    );

    let lookup = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/rooms/{room_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(lookup.status(), StatusCode::OK);
    let room: Value = actix_test::read_body_json(lookup).await;
    assert!(room["amenities"].as_array().expect("amenities").is_empty());
}
