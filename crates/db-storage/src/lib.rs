// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Contains the guest and RSVP records of the controller
//! Builds upon rsvp-database
//!
//! Each record type owns one [`Collection`](database::Collection) inside of [`Db`].
//! Records are append-only, there are no update or delete operations.

#[macro_use]
mod macros;
mod db;

pub mod guests;
pub mod invite_codes;
pub mod rsvps;
pub mod utils;

pub use db::Db;
