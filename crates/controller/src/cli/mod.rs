// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::services::AdminService;
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use clap::{Parser, Subcommand};
use controller_shared::settings::Settings;
use db_storage::Db;
use std::path::PathBuf;
use std::sync::Arc;

mod import;
mod links;
mod reload;

#[derive(Parser, Debug, Clone)]
#[clap(name = "rsvp-controller", version)]
pub struct Args {
    #[clap(
        short,
        long,
        default_value = "config.toml",
        help = "Specify path to configuration file"
    )]
    pub config: PathBuf,

    /// Triggers a reload of the invitation settings of all running controllers
    #[clap(long)]
    pub reload: bool,

    #[clap(subcommand)]
    cmd: Option<SubCommand>,
}

#[derive(Subcommand, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
enum SubCommand {
    /// Import guests from a CSV file with a `name,phone,family` header row
    ///
    /// Imported guests are added after the existing ones.
    ImportGuests {
        /// Path to the CSV file
        csv_file: PathBuf,
    },
    /// Print the personalized RSVP and WhatsApp links of all guests
    Links {
        /// Base url of the links, defaults to `invitation.public_url`
        #[clap(long)]
        base_url: Option<url::Url>,
    },
}

impl Args {
    /// Returns true if we want to startup the controller after we finished the cli part
    pub fn controller_should_start(&self) -> bool {
        !(self.reload || self.cmd.is_some())
    }
}

/// Parses the CLI-Arguments into [`Args`]
///
/// Also runs (optional) cli commands if necessary
pub async fn parse_args() -> Result<Args> {
    let args = Args::parse();

    if args.reload {
        reload::trigger_reload()?;
    }
    if let Some(sub_command) = args.cmd.clone() {
        let settings = Settings::load(&args.config)?;
        match sub_command {
            SubCommand::ImportGuests { csv_file } => {
                import::import_guests(settings, &csv_file)?;
            }
            SubCommand::Links { base_url } => {
                links::print_links(settings, base_url)?;
            }
        }
    }

    Ok(args)
}

/// Opens the configured storage for a CLI command
fn admin_service(settings: Settings) -> Result<AdminService> {
    let db = Db::connect(&settings.storage).context("Failed to open storage")?;

    Ok(AdminService::new(
        Arc::new(db),
        Arc::new(ArcSwap::from_pointee(settings)),
    ))
}
