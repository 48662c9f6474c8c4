// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use database::{DatabaseError, OptionalExt};
use rsvp_db_storage::guests::{Guest, NewGuest};
use rsvp_db_storage::Db;
use test_util::assert_eq;
use test_util::database::StorageContext;

fn new_guest(name: &str, phone: Option<&str>, family: Option<&str>) -> NewGuest {
    NewGuest {
        name: name.into(),
        phone: phone.map(Into::into),
        family: family.map(Into::into),
    }
}

#[test]
fn add_single_guest() {
    let ctx = StorageContext::new();

    let guest = new_guest("John Smith", Some("+1234567890"), Some("Smith Family"))
        .insert(&ctx.db)
        .unwrap();

    let guests = Guest::get_all(&ctx.db);
    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0], guest);
    assert!(!guest.invite_code.as_str().is_empty());
    assert!(guest.invite_code.as_str().starts_with("js_"));
    assert!(guest.id.as_str().starts_with("guest_"));
    assert_eq!(guest.family, "Smith Family");
    assert_eq!(guest.phone_digits(), "1234567890");
}

#[test]
fn defaults_for_missing_phone_and_family() {
    let db = Db::in_memory();

    let guest = new_guest("Rachel Green", None, Some("")).insert(&db).unwrap();

    assert_eq!(guest.phone, "");
    assert_eq!(guest.family, "Rachel Green");
}

#[test]
fn find_by_invite_code() {
    let ctx = StorageContext::new();

    let john = new_guest("John Smith", None, None).insert(&ctx.db).unwrap();
    let sarah = new_guest("Sarah Johnson", None, None)
        .insert(&ctx.db)
        .unwrap();

    assert_eq!(
        Guest::get_by_invite_code(&ctx.db, john.invite_code.as_str()).unwrap(),
        john
    );
    assert_eq!(
        Guest::get_by_invite_code(&ctx.db, sarah.invite_code.as_str()).unwrap(),
        sarah
    );
    assert!(matches!(
        Guest::get_by_invite_code(&ctx.db, "xx_000000"),
        Err(DatabaseError::NotFound)
    ));
    assert_eq!(
        Guest::get_by_invite_code(&ctx.db, "").optional().unwrap(),
        None
    );
}

#[test]
fn guests_survive_reopen() {
    let ctx = StorageContext::new();

    let inserted = NewGuest::insert_all(
        &ctx.db,
        vec![
            new_guest("David Miller", Some("+1234567894"), Some("Miller Family")),
            new_guest("Lisa Wilson", None, None),
        ],
    )
    .unwrap();

    let reopened = ctx.reopen();

    assert_eq!(Guest::get_all(&reopened), inserted);
}

#[test]
fn bulk_insert_merges_with_existing() {
    let ctx = StorageContext::new();

    let existing = new_guest("Robert Brown", None, None)
        .insert(&ctx.db)
        .unwrap();
    let imported = NewGuest::insert_all(
        &ctx.db,
        vec![
            new_guest("Jennifer Davis", None, None),
            new_guest("William Garcia", None, None),
        ],
    )
    .unwrap();

    let names = Guest::get_all(&ctx.db)
        .into_iter()
        .map(|guest| guest.name)
        .collect::<Vec<_>>();

    assert_eq!(imported.len(), 2);
    assert_eq!(names, ["Robert Brown", "Jennifer Davis", "William Garcia"]);
    assert_ne!(imported[0].invite_code, existing.invite_code);
}

#[test]
fn reads_records_written_by_hand() {
    let ctx = StorageContext::new();

    std::fs::write(
        &ctx.guests_file,
        r#"[
  {
    "id": "guest_1700000000000",
    "name": "Michael Cohen",
    "phone": "+1234567892",
    "family": "Cohen Family",
    "inviteCode": "mc_a1b2c3",
    "createdAt": "2023-11-14T22:13:20.000Z"
  }
]"#,
    )
    .unwrap();

    let guest = Guest::get_by_invite_code(&ctx.db, "mc_a1b2c3").unwrap();
    assert_eq!(guest.id.as_str(), "guest_1700000000000");
    assert_eq!(guest.family, "Cohen Family");
}
