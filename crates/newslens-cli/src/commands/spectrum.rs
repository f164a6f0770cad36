use newslens_core::NewslensClient;
use serde_json::Value;

use crate::cli::SpectrumCommand;
use crate::error::CliError;

use super::to_json;

pub async fn run(command: &SpectrumCommand, client: &NewslensClient) -> Result<Value, CliError> {
    match command {
        SpectrumCommand::Search(args) => {
            to_json(&client.search_spectrum(&args.query, args.limit).await?)
        }
    }
}
