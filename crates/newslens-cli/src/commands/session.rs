use newslens_core::{sanitize_api_key, NewslensClient};
use serde_json::{json, Value};

use crate::cli::LoginArgs;
use crate::error::CliError;

pub fn login(args: &LoginArgs, client: &NewslensClient) -> Result<Value, CliError> {
    if args.key.trim().is_empty() {
        return Err(CliError::Command(String::from("API key must not be empty")));
    }
    // Reject keys the admin transport would refuse to send anyway.
    sanitize_api_key(&args.key)?;

    client.credentials().login(args.key.as_str())?;
    Ok(json!({ "authenticated": true }))
}

pub fn logout(client: &NewslensClient) -> Result<Value, CliError> {
    client.credentials().logout()?;
    Ok(json!({ "authenticated": false }))
}

pub fn status(client: &NewslensClient) -> Result<Value, CliError> {
    Ok(json!({
        "authenticated": client.credentials().is_authenticated(),
        "baseUrl": client.public().config().base_url(),
    }))
}
