// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! REST API v1
//!
//! Current Endpoints. See their respective function:
//! - `/rsvps` ([GET](rsvps::get_all), [POST](rsvps::submit))
//! - `/guests` ([GET](guests::get_all), [POST](guests::add))
//! - `/guests/links` ([GET](guests::generate_links))
//! - `/invites/{invite_code}` ([GET](invites::get_guest))
//!
//! Write endpoints accept JSON as well as urlencoded form bodies.

pub use response::{ApiError, ApiResponse, DefaultApiResult};

pub mod guests;
pub mod invites;
pub mod response;
pub mod rsvps;
