// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Success response types for REST APIv1
use actix_web::body::BoxBody;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

/// Successful response, the fields of `T` are sent next to `"success": true`
#[derive(Debug, Clone)]
pub struct ApiResponse<T: Serialize> {
    data: T,
}

#[derive(Serialize)]
struct SuccessBody<'a, T> {
    success: bool,
    #[serde(flatten)]
    data: &'a T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates new [`ApiResponse`]
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse {
        let body = SuccessBody {
            success: true,
            data: &self.data,
        };

        match serde_json::to_string(&body) {
            Ok(body) => HttpResponse::Ok()
                .content_type(mime::APPLICATION_JSON)
                .body(body),
            Err(err) => {
                HttpResponse::from_error(actix_web::error::JsonPayloadError::Serialize(err))
            }
        }
    }
}
