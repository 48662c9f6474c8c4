// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Contains the invite code resolution endpoint.
use crate::api::v1::{ApiError, ApiResponse, DefaultApiResult};
use crate::services::{AdminService, ServiceError};
use actix_web::get;
use actix_web::web::{Data, Path};
use db_storage::guests::Guest;
use serde::Serialize;

/// Response body for *GET /invites/{invite_code}*
#[derive(Debug, Serialize)]
pub struct InvitedGuest {
    pub guest: Guest,
}

/// API Endpoint *GET /invites/{invite_code}*
///
/// Resolves a personalized RSVP link to its guest. Invite codes are matched exactly.
#[get("/invites/{invite_code}")]
pub async fn get_guest(
    admin_service: Data<AdminService>,
    invite_code: Path<String>,
) -> DefaultApiResult<InvitedGuest> {
    let invite_code = invite_code.into_inner();

    let guest = crate::block(move || admin_service.find_guest_by_invite_code(&invite_code))
        .await?
        .map_err(|e| match e {
            ServiceError::NotFound => ApiError::not_found()
                .with_code("invalid_invite_link")
                .with_message(
                    "This invitation link is not valid. Please check the link or contact the host.",
                ),
            e => e.into(),
        })?;

    Ok(ApiResponse::new(InvitedGuest { guest }))
}
