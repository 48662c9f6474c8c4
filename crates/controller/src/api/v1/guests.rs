// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Contains the guest list related REST endpoints.
use crate::api::v1::{ApiResponse, DefaultApiResult};
use crate::services::{AddGuest, AdminService, GuestLink};
use actix_web::web::{Data, Either, Form, Json};
use actix_web::{get, post, HttpRequest};
use db_storage::guests::Guest;
use serde::Serialize;

/// Response body for *POST /guests*
#[derive(Debug, Serialize)]
pub struct AddedGuest {
    pub message: &'static str,
    pub guest: Guest,
}

/// Response body for *GET /guests*
#[derive(Debug, Serialize)]
pub struct GuestList {
    pub guests: Vec<Guest>,
}

/// Response body for *GET /guests/links*
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestLinks {
    pub base_url: String,
    pub guest_links: Vec<GuestLink>,
}

/// API Endpoint *POST /guests*
///
/// Adds the guest and assigns a new invite code
#[post("/guests")]
pub async fn add(
    admin_service: Data<AdminService>,
    body: Either<Json<AddGuest>, Form<AddGuest>>,
) -> DefaultApiResult<AddedGuest> {
    let new_guest = body.into_inner();

    let guest = crate::block(move || admin_service.add_guest(new_guest)).await??;

    Ok(ApiResponse::new(AddedGuest {
        message: "Guest added successfully!",
        guest,
    }))
}

/// API Endpoint *GET /guests*
#[get("/guests")]
pub async fn get_all(admin_service: Data<AdminService>) -> DefaultApiResult<GuestList> {
    let guests = crate::block(move || admin_service.list_guests()).await?;

    Ok(ApiResponse::new(GuestList { guests }))
}

/// API Endpoint *GET /guests/links*
///
/// Returns the RSVP and share links of all guests. The links are based on the configured public
/// url, or on the scheme and host of this request if none is configured.
#[get("/guests/links")]
pub async fn generate_links(
    req: HttpRequest,
    admin_service: Data<AdminService>,
) -> DefaultApiResult<GuestLinks> {
    let base_url = admin_service.public_url().unwrap_or_else(|| {
        let conn = req.connection_info();
        format!("{}://{}", conn.scheme(), conn.host())
    });

    let (base_url, guest_links) = crate::block(move || {
        let guest_links = admin_service.generate_links(&base_url);
        (base_url, guest_links)
    })
    .await?;

    Ok(ApiResponse::new(GuestLinks {
        base_url,
        guest_links,
    }))
}
