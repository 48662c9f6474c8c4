// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use rsvp_db_storage::invite_codes::InviteCode;
use rsvp_db_storage::rsvps::{NewRsvp, Rsvp, RsvpStats, RsvpStatus};
use test_util::database::StorageContext;
use test_util::{assert_eq, assert_eq_json};

fn new_rsvp(name: &str, status: RsvpStatus, guest_count: &str) -> NewRsvp {
    NewRsvp {
        guest_name: name.into(),
        rsvp: status,
        guest_count: guest_count.into(),
        dietary_restrictions: "none".into(),
        invite_code: InviteCode::single_link(),
    }
}

#[test]
fn round_trip_keeps_fields_and_order() {
    let ctx = StorageContext::new();

    let first = new_rsvp("Jane", RsvpStatus::Attending, "2")
        .insert(&ctx.db)
        .unwrap();
    let second = new_rsvp("Joe", RsvpStatus::Other("maybe".into()), "0")
        .insert(&ctx.db)
        .unwrap();

    assert_eq!(Rsvp::get_all(&ctx.reopen()), vec![first, second]);
}

#[test]
fn stored_as_camel_case_json() {
    let ctx = StorageContext::new();

    let rsvp = new_rsvp("Jane", RsvpStatus::NotAttending, "0")
        .insert(&ctx.db)
        .unwrap();

    let stored: test_util::serde_json::Value =
        test_util::serde_json::from_slice(&std::fs::read(&ctx.rsvps_file).unwrap()).unwrap();

    assert_eq_json!(
        stored,
        [{
            "id": rsvp.id.as_str(),
            "guestName": "Jane",
            "rsvp": "not-attending",
            "guestCount": "0",
            "dietaryRestrictions": "none",
            "inviteCode": "single-link",
            "submittedAt": stored[0]["submittedAt"],
        }]
    );
}

#[test]
fn stats_over_stored_rsvps() {
    let ctx = StorageContext::new();

    new_rsvp("A", RsvpStatus::Attending, "2")
        .insert(&ctx.db)
        .unwrap();
    new_rsvp("B", RsvpStatus::Attending, "3")
        .insert(&ctx.db)
        .unwrap();
    new_rsvp("C", RsvpStatus::NotAttending, "0")
        .insert(&ctx.db)
        .unwrap();

    assert_eq_json!(
        RsvpStats::from_rsvps(&Rsvp::get_all(&ctx.db)),
        {
            "total": 3,
            "attending": 2,
            "notAttending": 1,
            "totalGuests": 5,
        }
    );
}

#[test]
fn numeric_guest_count_in_file_is_accepted() {
    let ctx = StorageContext::new();

    std::fs::write(
        &ctx.rsvps_file,
        r#"[{
            "id": "1700000000000",
            "guestName": "Jane",
            "rsvp": "attending",
            "guestCount": 4,
            "dietaryRestrictions": "vegan",
            "inviteCode": "j_abcdef",
            "submittedAt": "2023-11-14T22:13:20.000Z"
        }]"#,
    )
    .unwrap();

    let rsvps = Rsvp::get_all(&ctx.db);
    assert_eq!(rsvps.len(), 1);
    assert_eq!(rsvps[0].guest_count, "4");
    assert_eq!(rsvps[0].party_size(), 4);
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let ctx = StorageContext::new();

    std::fs::write(&ctx.rsvps_file, "[{\"id\": ").unwrap();

    assert!(Rsvp::get_all(&ctx.db).is_empty());
}
