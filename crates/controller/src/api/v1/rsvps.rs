// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Contains the RSVP related REST endpoints.
use crate::api::v1::{ApiResponse, DefaultApiResult};
use crate::services::{AdminService, RsvpService, SubmitRsvp};
use actix_web::web::{Data, Either, Form, Json};
use actix_web::{get, post};
use db_storage::rsvps::{Rsvp, RsvpStats};
use serde::Serialize;

/// Response body for *POST /rsvps*
#[derive(Debug, Serialize)]
pub struct SubmittedRsvp {
    pub message: &'static str,
    pub rsvp: Rsvp,
}

/// Response body for *GET /rsvps*
#[derive(Debug, Serialize)]
pub struct RsvpList {
    pub stats: RsvpStats,
    pub rsvps: Vec<Rsvp>,
}

/// API Endpoint *POST /rsvps*
///
/// Stores the submitted [`SubmitRsvp`] and returns the stored [`Rsvp`]
#[post("/rsvps")]
pub async fn submit(
    rsvp_service: Data<RsvpService>,
    body: Either<Json<SubmitRsvp>, Form<SubmitRsvp>>,
) -> DefaultApiResult<SubmittedRsvp> {
    let submission = body.into_inner();

    let rsvp = crate::block(move || rsvp_service.submit(submission)).await??;

    Ok(ApiResponse::new(SubmittedRsvp {
        message: "RSVP submitted successfully!",
        rsvp,
    }))
}

/// API Endpoint *GET /rsvps*
///
/// Returns all RSVPs in submission order together with their [`RsvpStats`]
#[get("/rsvps")]
pub async fn get_all(admin_service: Data<AdminService>) -> DefaultApiResult<RsvpList> {
    let (stats, rsvps) = crate::block(move || admin_service.list_rsvps()).await?;

    Ok(ApiResponse::new(RsvpList { stats, rsvps }))
}
