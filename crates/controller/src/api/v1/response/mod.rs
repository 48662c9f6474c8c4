// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Response types for REST APIv1
//!
//! These all implement the [`Responder`](actix_web::Responder) trait.
pub mod error;
mod ok;

pub use error::ApiError;
pub use ok::ApiResponse;

pub const CODE_VALUE_REQUIRED: &str = "value_required";
pub const CODE_MISSING_VALUE: &str = "missing_value";
pub const CODE_INVALID_LENGTH: &str = "invalid_length";
pub const CODE_INVALID_VALUE: &str = "invalid_value";

/// The default API Result
pub type DefaultApiResult<T> = Result<ApiResponse<T>, ApiError>;
