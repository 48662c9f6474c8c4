// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::Error;
use controller_shared::settings::Logging;
use tracing::Span;
use tracing_actix_web::{root_span, RootSpanBuilder};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber, `log` records are forwarded to it
///
/// Filters come from `RUST_LOG` extended by the configured default directives.
pub fn init(settings: &Logging) -> anyhow::Result<()> {
    let filter = settings
        .default_directives
        .iter()
        .try_fold(EnvFilter::from_default_env(), |filter, directive| {
            directive
                .parse()
                .map(|directive| filter.add_directive(directive))
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()?;

    Ok(())
}

/// Root span of a HTTP request, completed with the response status and the error message
pub struct RequestSpanBuilder;

impl RootSpanBuilder for RequestSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        root_span!(request)
    }

    fn on_request_end<B>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        let (status, error) = match outcome {
            Ok(response) => (response.status(), response.response().error()),
            Err(error) => (error.as_response_error().status_code(), Some(error)),
        };

        span.record("http.status_code", status.as_u16());

        if let Some(error) = error {
            span.record("exception.message", tracing::field::display(error));
        }
    }
}
