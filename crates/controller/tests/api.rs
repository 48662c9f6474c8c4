// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::web::Data;
use actix_web::App;
use arc_swap::ArcSwap;
use db_storage::Db;
use rsvp_controller_core::services::{AdminService, RsvpService};
use rsvp_controller_core::settings::{Settings, SharedSettings};
use rsvp_controller_core::v1_scope;
use std::sync::Arc;
use test_util::database::StorageContext;
use test_util::serde_json::{json, Value};
use test_util::{assert_eq, assert_eq_json};

/// Initializes the `/v1` scope on top of `db` with the given settings
macro_rules! init_app {
    ($db:expr, $settings:expr) => {{
        let db: Arc<Db> = $db;
        let settings: SharedSettings = Arc::new(ArcSwap::from_pointee($settings));

        test::init_service(
            App::new()
                .app_data(Data::new(RsvpService::new(db.clone())))
                .app_data(Data::new(AdminService::new(db, settings)))
                .service(v1_scope()),
        )
        .await
    }};
}

macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn submit_and_list_rsvps() {
    let ctx = StorageContext::new();
    let app = init_app!(ctx.db.clone(), Settings::default());

    let (status, body) = call!(
        app,
        TestRequest::post()
            .uri("/v1/rsvps")
            .set_json(json!({"guestName": "Jane", "rsvp": "attending", "guestCount": 2}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "RSVP submitted successfully!");
    assert_eq!(body["rsvp"]["guestName"], "Jane");
    assert_eq!(body["rsvp"]["guestCount"], "2");
    assert_eq!(body["rsvp"]["dietaryRestrictions"], "none");
    assert_eq!(body["rsvp"]["inviteCode"], "single-link");

    let (status, _) = call!(
        app,
        TestRequest::post()
            .uri("/v1/rsvps")
            .set_json(json!({"guestName": "Joe", "rsvp": "not-attending", "guestCount": "4"}))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(app, TestRequest::get().uri("/v1/rsvps"));
    assert_eq!(status, StatusCode::OK);
    assert_eq_json!(
        body["stats"],
        {
            "total": 2,
            "attending": 1,
            "notAttending": 1,
            "totalGuests": 2,
        }
    );
    assert_eq!(body["rsvps"][1]["guestCount"], "0");

    // Records survive a restart
    let reopened = init_app!(Arc::new(ctx.reopen()), Settings::default());
    let (_, body) = call!(reopened, TestRequest::get().uri("/v1/rsvps"));
    assert_eq!(body["stats"]["total"], 2);
}

#[actix_web::test]
async fn submit_rsvp_as_form() {
    let app = init_app!(Arc::new(Db::in_memory()), Settings::default());

    let (status, body) = call!(
        app,
        TestRequest::post().uri("/v1/rsvps").set_form([
            ("guestName", "Jane"),
            ("rsvp", "attending"),
            ("guestCount", "3"),
            ("dietaryRestrictions", "vegan"),
            ("inviteCode", "j_a1b2c3"),
        ])
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rsvp"]["guestCount"], "3");
    assert_eq!(body["rsvp"]["dietaryRestrictions"], "vegan");
    assert_eq!(body["rsvp"]["inviteCode"], "j_a1b2c3");
}

#[actix_web::test]
async fn invalid_rsvp_is_rejected() {
    let app = init_app!(Arc::new(Db::in_memory()), Settings::default());

    let (status, body) = call!(
        app,
        TestRequest::post()
            .uri("/v1/rsvps")
            .set_json(json!({"guestName": "  ", "rsvp": "attending"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "validation_failed");

    let (status, body) = call!(
        app,
        TestRequest::post()
            .uri("/v1/rsvps")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"guestName\": ")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "invalid_json");

    let (_, body) = call!(app, TestRequest::get().uri("/v1/rsvps"));
    assert_eq!(body["stats"]["total"], 0);
}

#[actix_web::test]
async fn add_guest_and_resolve_invite() {
    let app = init_app!(Arc::new(Db::in_memory()), Settings::default());

    let (status, body) = call!(
        app,
        TestRequest::post()
            .uri("/v1/guests")
            .set_json(json!({"name": "John Smith", "phone": "+1234567890"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Guest added successfully!");
    assert_eq!(body["guest"]["family"], "John Smith");

    let invite_code = body["guest"]["inviteCode"].as_str().unwrap().to_owned();
    assert!(invite_code.starts_with("js_"));

    let (status, body) = call!(
        app,
        TestRequest::get().uri(&format!("/v1/invites/{invite_code}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guest"]["name"], "John Smith");

    let (status, body) = call!(app, TestRequest::get().uri("/v1/invites/xx_000000"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "invalid_invite_link");

    let (_, body) = call!(app, TestRequest::get().uri("/v1/guests"));
    assert_eq!(body["guests"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn guest_without_name_is_rejected() {
    let app = init_app!(Arc::new(Db::in_memory()), Settings::default());

    let (status, body) = call!(
        app,
        TestRequest::post()
            .uri("/v1/guests")
            .set_form([("phone", "+1234567890")])
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation_failed");
}

#[actix_web::test]
async fn links_use_request_host() {
    let app = init_app!(Arc::new(Db::in_memory()), Settings::default());

    let (_, body) = call!(
        app,
        TestRequest::post()
            .uri("/v1/guests")
            .set_json(json!({"name": "Lisa Wilson"}))
    );
    let invite_code = body["guest"]["inviteCode"].as_str().unwrap().to_owned();

    let (status, body) = call!(
        app,
        TestRequest::get()
            .uri("/v1/guests/links")
            .insert_header(("host", "party.local:3000"))
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["baseUrl"], "http://party.local:3000");

    let link = &body["guestLinks"][0];
    assert_eq!(
        link["rsvpLink"],
        format!("http://party.local:3000/rsvp/{invite_code}")
    );
    assert!(link["whatsappLink"]
        .as_str()
        .unwrap()
        .starts_with("https://wa.me/?text=Hi%20Lisa%20Wilson!"));
}

#[actix_web::test]
async fn links_use_public_url() {
    let mut settings = Settings::default();
    settings.invitation.public_url = Some("https://party.example.org".parse().unwrap());
    let app = init_app!(Arc::new(Db::in_memory()), settings);

    let (status, body) = call!(app, TestRequest::get().uri("/v1/guests/links"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["baseUrl"], "https://party.example.org");
    assert_eq!(body["guestLinks"], json!([]));
}

#[actix_web::test]
async fn storage_failure_is_internal_error() {
    let ctx = StorageContext::new();
    // A directory passes the existence check on open but cannot be written
    let db = Db::open(ctx.dir.path(), &ctx.rsvps_file).unwrap();
    let app = init_app!(Arc::new(db), Settings::default());

    let (status, body) = call!(
        app,
        TestRequest::post()
            .uri("/v1/guests")
            .set_json(json!({"name": "Robert Brown"}))
    );

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "internal_server_error");
}
