// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::services::AddGuest;
use anyhow::{Context, Result};
use controller_shared::settings::Settings;
use db_storage::guests::Guest;
use db_storage::invite_codes::InviteCode;
use std::path::Path;
use tabled::{Style, Table, Tabled};

#[derive(Tabled)]
struct GuestTableRow {
    name: String,
    family: String,
    phone: String,
    #[tabled(rename = "invite code")]
    invite_code: InviteCode,
}

impl GuestTableRow {
    fn from_guest(guest: Guest) -> Self {
        Self {
            name: guest.name,
            family: guest.family,
            phone: guest.phone,
            invite_code: guest.invite_code,
        }
    }
}

/// Implementation of the `rsvp-controller import-guests <csv-file>` command
pub fn import_guests(settings: Settings, csv_file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(csv_file)
        .with_context(|| format!("Failed to read CSV file {}", csv_file.display()))?;

    let guests = parse_csv(&content);
    println!(
        "Importing {} guests from {}",
        guests.len(),
        csv_file.display()
    );

    let service = super::admin_service(settings)?;
    let imported = service
        .import_guests(guests)
        .context("Failed to import guests")?;
    let total = service.list_guests().len();

    let rows: Vec<GuestTableRow> = imported
        .into_iter()
        .map(GuestTableRow::from_guest)
        .collect();

    println!("{}", Table::new(rows).with(Style::psql()));
    println!("The guest list now contains {total} guests");

    Ok(())
}

/// Parses guests from simple comma separated values
///
/// The first line names the columns, `name`, `phone` and `family` are recognized regardless of
/// case. Quotes are stripped from all values, quoted commas are not supported. Rows without a
/// name are skipped.
fn parse_csv(content: &str) -> Vec<AddGuest> {
    let mut lines = content.trim().lines();

    let headers: Vec<String> = match lines.next() {
        Some(header) => header
            .split(',')
            .map(|h| h.trim().to_lowercase())
            .collect(),
        None => return Vec::new(),
    };

    lines
        .filter_map(|line| {
            let mut guest = AddGuest::default();

            for (header, value) in headers.iter().zip(line.split(',')) {
                let value = value.trim().replace('"', "");

                if value.is_empty() {
                    continue;
                }

                match header.as_str() {
                    "name" => guest.name = Some(value),
                    "phone" => guest.phone = Some(value),
                    "family" => guest.family = Some(value),
                    _ => {}
                }
            }

            guest.name.is_some().then_some(guest)
        })
        .collect()
}
