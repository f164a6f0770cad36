mod articles;
mod events;
mod incitement;
mod session;
mod sources;
mod spectrum;

use std::sync::Arc;

use newslens_core::config::default_session_path;
use newslens_core::datetime::{parse_query_date, to_iso_date_time};
use newslens_core::{ClientConfig, CredentialStore, FileStorage, NewslensClient, Pagination};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, Command, PageArgs};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let session_path = cli
        .session_file
        .clone()
        .unwrap_or_else(default_session_path);
    debug!(path = %session_path.display(), "restoring admin session");
    let credentials = CredentialStore::restore(Arc::new(FileStorage::new(session_path)))?;

    let client = NewslensClient::with_reqwest(client_config(cli.base_url.as_deref())?, credentials);
    dispatch(&cli.command, &client).await
}

pub async fn dispatch(command: &Command, client: &NewslensClient) -> Result<Value, CliError> {
    match command {
        Command::Login(args) => session::login(args, client),
        Command::Logout => session::logout(client),
        Command::Status => session::status(client),
        Command::Articles(args) => articles::run(&args.command, client).await,
        Command::Events(args) => events::run(&args.command, client).await,
        Command::Sources(args) => sources::run(&args.command, client).await,
        Command::Spectrum(args) => spectrum::run(&args.command, client).await,
        Command::Incitement(args) => incitement::run(&args.command, client).await,
    }
}

fn client_config(base_url: Option<&str>) -> Result<ClientConfig, CliError> {
    let from_env = ClientConfig::from_env()?;
    match base_url {
        Some(url) => Ok(ClientConfig::new(url)?.with_timeout(from_env.timeout)),
        None => Ok(from_env),
    }
}

/// Admin commands refuse to run without a session, before any request.
fn require_admin(client: &NewslensClient) -> Result<(), CliError> {
    if client.credentials().is_authenticated() {
        Ok(())
    } else {
        Err(CliError::LoginRequired)
    }
}

/// Normalize a user-typed date into the ISO form query parameters expect.
fn query_date(raw: Option<&str>) -> Result<Option<String>, CliError> {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };
    parse_query_date(raw)
        .map(|parsed| Some(to_iso_date_time(parsed)))
        .ok_or_else(|| {
            CliError::Command(format!(
                "invalid date '{raw}': expected YYYY-MM-DD or YYYY-MM-DD HH:mm:ss"
            ))
        })
}

fn pagination(args: PageArgs) -> Pagination {
    Pagination {
        page: args.page,
        size: args.size,
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}
