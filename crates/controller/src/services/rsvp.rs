// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use super::{not_blank, ServiceError};
use db_storage::invite_codes::InviteCode;
use db_storage::rsvps::{NewRsvp, Rsvp, RsvpStatus};
use db_storage::utils::deserialize_optional_count;
use db_storage::Db;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// A RSVP as submitted by a guest
///
/// Accepted as JSON or urlencoded form, `guestCount` may be a string or a number.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmitRsvp {
    #[serde(rename = "guestName", default)]
    #[validate(required, custom = "not_blank")]
    pub guest_name: Option<String>,

    #[serde(default)]
    #[validate(required, custom = "not_blank")]
    pub rsvp: Option<String>,

    #[serde(
        rename = "guestCount",
        default,
        deserialize_with = "deserialize_optional_count"
    )]
    pub guest_count: Option<String>,

    #[serde(rename = "dietaryRestrictions", default)]
    pub dietary_restrictions: Option<String>,

    #[serde(rename = "inviteCode", default)]
    pub invite_code: Option<String>,
}

impl SubmitRsvp {
    /// Applies the defaults for all optional fields
    ///
    /// Must only be called on validated submissions.
    fn into_new_rsvp(self) -> NewRsvp {
        let rsvp = RsvpStatus::from(self.rsvp.unwrap_or_default());

        let guest_count = if rsvp.is_attending() {
            non_empty(self.guest_count).unwrap_or_else(|| "1".into())
        } else {
            "0".into()
        };

        NewRsvp {
            guest_name: self.guest_name.unwrap_or_default().trim().to_owned(),
            rsvp,
            guest_count,
            dietary_restrictions: non_empty(self.dietary_restrictions)
                .unwrap_or_else(|| "none".into()),
            invite_code: non_empty(self.invite_code)
                .map(InviteCode::from)
                .unwrap_or_else(InviteCode::single_link),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Accepts RSVP submissions
pub struct RsvpService {
    db: Arc<Db>,
}

impl RsvpService {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    /// Validates and stores the submission, returns the stored record
    #[tracing::instrument(skip_all)]
    pub fn submit(&self, submission: SubmitRsvp) -> Result<Rsvp, ServiceError> {
        submission.validate()?;

        let rsvp = submission.into_new_rsvp().insert(&self.db)?;

        log::info!(
            "Stored RSVP {} from {} ({}, {} guests)",
            rsvp.id,
            rsvp.guest_name,
            rsvp.rsvp,
            rsvp.guest_count
        );

        Ok(rsvp)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn service() -> RsvpService {
        RsvpService::new(Arc::new(Db::in_memory()))
    }

    fn submission(name: &str, status: &str) -> SubmitRsvp {
        SubmitRsvp {
            guest_name: Some(name.into()),
            rsvp: Some(status.into()),
            ..Default::default()
        }
    }

    #[test]
    fn attending_with_defaults() {
        let service = service();

        let rsvp = service.submit(submission("Jane", "attending")).unwrap();

        assert_eq!(rsvp.guest_name, "Jane");
        assert_eq!(rsvp.rsvp, RsvpStatus::Attending);
        assert_eq!(rsvp.guest_count, "1");
        assert_eq!(rsvp.dietary_restrictions, "none");
        assert_eq!(rsvp.invite_code.as_str(), "single-link");
        assert_eq!(Rsvp::get_all(&service.db), vec![rsvp]);
    }

    #[test]
    fn guest_name_is_trimmed() {
        let rsvp = service()
            .submit(submission("  Jane Doe \t", "attending"))
            .unwrap();

        assert_eq!(rsvp.guest_name, "Jane Doe");
    }

    #[test]
    fn not_attending_forces_zero_guests() {
        let rsvp = service()
            .submit(SubmitRsvp {
                guest_count: Some("5".into()),
                ..submission("Joe", "not-attending")
            })
            .unwrap();

        assert_eq!(rsvp.rsvp, RsvpStatus::NotAttending);
        assert_eq!(rsvp.guest_count, "0");
    }

    #[test]
    fn keeps_supplied_values() {
        let rsvp = service()
            .submit(SubmitRsvp {
                guest_count: Some("3".into()),
                dietary_restrictions: Some("vegetarian".into()),
                invite_code: Some("js_a1b2c3".into()),
                ..submission("John Smith", "attending")
            })
            .unwrap();

        assert_eq!(rsvp.guest_count, "3");
        assert_eq!(rsvp.dietary_restrictions, "vegetarian");
        assert_eq!(rsvp.invite_code.as_str(), "js_a1b2c3");
    }

    #[test]
    fn empty_optionals_use_defaults() {
        let rsvp = service()
            .submit(SubmitRsvp {
                guest_count: Some("".into()),
                dietary_restrictions: Some("".into()),
                invite_code: Some("".into()),
                ..submission("Jane", "attending")
            })
            .unwrap();

        assert_eq!(rsvp.guest_count, "1");
        assert_eq!(rsvp.dietary_restrictions, "none");
        assert_eq!(rsvp.invite_code.as_str(), "single-link");
    }

    #[test]
    fn unknown_status_is_stored_as_is() {
        let rsvp = service().submit(submission("Jane", "maybe")).unwrap();

        assert_eq!(rsvp.rsvp, RsvpStatus::Other("maybe".into()));
        assert_eq!(rsvp.guest_count, "0");
    }

    #[test]
    fn missing_or_blank_fields_are_rejected() {
        let service = service();

        for submission in [
            SubmitRsvp::default(),
            SubmitRsvp {
                rsvp: None,
                ..submission("Jane", "attending")
            },
            submission("", "attending"),
            submission("   ", "attending"),
            submission("Jane", ""),
        ] {
            assert!(matches!(
                service.submit(submission),
                Err(ServiceError::Validation(_))
            ));
        }

        assert!(Rsvp::get_all(&service.db).is_empty());
    }

    #[test]
    fn submission_from_json() {
        let submission: SubmitRsvp = serde_json::from_str(
            r#"{"guestName": "Jane", "rsvp": "attending", "guestCount": 2, "dietaryRestrictions": null}"#,
        )
        .unwrap();

        assert_eq!(submission.guest_count.as_deref(), Some("2"));
        assert_eq!(submission.dietary_restrictions, None);
        assert_eq!(submission.invite_code, None);
    }
}
