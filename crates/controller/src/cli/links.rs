// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::services::GuestLink;
use anyhow::{Context, Result};
use controller_shared::settings::Settings;
use tabled::{Style, Table, Tabled};
use url::Url;

#[derive(Tabled)]
struct LinkTableRow {
    name: String,
    #[tabled(rename = "rsvp link")]
    rsvp_link: String,
    #[tabled(rename = "whatsapp link")]
    whatsapp_link: String,
}

impl LinkTableRow {
    fn from_link(link: GuestLink) -> Self {
        Self {
            name: link.name,
            rsvp_link: link.rsvp_link,
            whatsapp_link: link.whatsapp_link,
        }
    }
}

/// Implementation of the `rsvp-controller links [--base-url <url>]` command
pub fn print_links(settings: Settings, base_url: Option<Url>) -> Result<()> {
    let service = super::admin_service(settings)?;

    let base_url = base_url
        .map(|url| url.as_str().trim_end_matches('/').to_owned())
        .or_else(|| service.public_url())
        .context("No base url available, pass --base-url or set invitation.public_url")?;

    let rows: Vec<LinkTableRow> = service
        .generate_links(&base_url)
        .into_iter()
        .map(LinkTableRow::from_link)
        .collect();

    println!("{}", Table::new(rows).with(Style::psql()));

    Ok(())
}
