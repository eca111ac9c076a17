//! Tests for room HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use super::*;
use crate::domain::ports::{MockRoomsCommand, MockRoomsQuery};
use crate::domain::{Category, CategoryKind, UserId};
use crate::inbound::http::test_utils::{fixture_http_state, test_session_middleware};
use crate::inbound::http::users::{LoginRequestBody, login};

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(
            web::scope("/api/v1")
                .service(login)
                .service(list_rooms)
                .service(get_room)
                .service(create_room)
                .service(update_room)
                .service(delete_room),
        )
}

async fn login_and_get_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> actix_web::cookie::Cookie<'static> {
    let login_req = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(LoginRequestBody {
            display_name: "Ada Lovelace".into(),
        })
        .to_request();
    let login_res = actix_test::call_service(app, login_req).await;
    assert!(login_res.status().is_success());
    login_res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

fn sample_room(owner_id: UserId) -> Room {
    Room {
        id: uuid::Uuid::new_v4(),
        owner_id,
        name: "Seaside loft".into(),
        country: "PT".into(),
        city: "Lisbon".into(),
        price: 120,
        rooms: 2,
        toilets: 1,
        description: "Bright loft near the water".into(),
        address: "Rua do Mar 12".into(),
        pet_friendly: true,
        kind: RoomKind::EntirePlace,
        category: Category {
            id: uuid::Uuid::new_v4(),
            name: "Tiny homes".into(),
            kind: CategoryKind::Rooms,
        },
        amenities: Vec::new(),
    }
}

fn sample_create_payload() -> Value {
    serde_json::json!({
        "name": "Seaside loft",
        "country": "PT",
        "city": "Lisbon",
        "price": 120,
        "rooms": 2,
        "toilets": 1,
        "description": "Bright loft near the water",
        "address": "Rua do Mar 12",
        "petFriendly": true,
        "kind": "entire_place",
        "category": uuid::Uuid::new_v4().to_string(),
        "amenities": [uuid::Uuid::new_v4().to_string()]
    })
}

#[actix_web::test]
async fn create_room_requires_an_authenticated_session() {
    let app = actix_test::init_service(test_app(fixture_http_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(sample_create_payload())
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn create_room_returns_the_hydrated_room() {
    let mut rooms = MockRoomsCommand::new();
    rooms
        .expect_create_room()
        .withf(|request| request.draft.name() == "Seaside loft" && request.amenity_ids.len() == 1)
        .returning(|request| Ok(sample_room(request.owner_id)));

    let mut state = fixture_http_state();
    state.rooms = Arc::new(rooms);
    let app = actix_test::init_service(test_app(state)).await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/rooms")
        .cookie(cookie)
        .set_json(sample_create_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("name").and_then(Value::as_str), Some("Seaside loft"));
    assert!(body.get("category").is_some());
}

#[actix_web::test]
async fn create_room_rejects_an_unknown_kind() {
    let app = actix_test::init_service(test_app(fixture_http_state())).await;
    let cookie = login_and_get_cookie(&app).await;

    let mut payload = sample_create_payload();
    payload["kind"] = Value::String("castle".to_owned());

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/rooms")
        .cookie(cookie)
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "kind");
}

#[actix_web::test]
async fn create_room_rejects_a_malformed_amenity_id() {
    let app = actix_test::init_service(test_app(fixture_http_state())).await;
    let cookie = login_and_get_cookie(&app).await;

    let mut payload = sample_create_payload();
    payload["amenities"] = serde_json::json!(["not-a-uuid"]);

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/rooms")
        .cookie(cookie)
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["field"], "amenities");
    assert_eq!(body["details"]["index"], 0);
}

#[actix_web::test]
async fn get_room_rejects_a_malformed_identifier() {
    let app = actix_test::init_service(test_app(fixture_http_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/rooms/not-a-uuid")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["field"], "roomId");
}

#[actix_web::test]
async fn get_room_returns_the_room_from_the_query_port() {
    let room = sample_room(UserId::random());
    let room_id = room.id;
    let mut rooms_query = MockRoomsQuery::new();
    let returned = room.clone();
    rooms_query
        .expect_get_room()
        .withf(move |id| *id == room_id)
        .return_once(move |_| Ok(returned));

    let mut state = fixture_http_state();
    state.rooms_query = Arc::new(rooms_query);
    let app = actix_test::init_service(test_app(state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/rooms/{room_id}"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("id").and_then(Value::as_str),
        Some(room_id.to_string().as_str())
    );
}

#[actix_web::test]
async fn list_rooms_returns_an_empty_fixture_page() {
    let app = actix_test::init_service(test_app(fixture_http_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/rooms?page=junk")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["total"], 0);
    assert!(body["items"].as_array().expect("items array").is_empty());
}

#[actix_web::test]
async fn update_room_returns_not_found_for_an_unknown_room() {
    let app = actix_test::init_service(test_app(fixture_http_state())).await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/v1/rooms/{}", uuid::Uuid::new_v4()))
        .cookie(cookie)
        .set_json(serde_json::json!({ "price": 99 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_room_returns_no_content() {
    let mut rooms = MockRoomsCommand::new();
    rooms.expect_delete_room().returning(|_, _| Ok(()));

    let mut state = fixture_http_state();
    state.rooms = Arc::new(rooms);
    let app = actix_test::init_service(test_app(state)).await;
    let cookie = login_and_get_cookie(&app).await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/v1/rooms/{}", uuid::Uuid::new_v4()))
        .cookie(cookie)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
