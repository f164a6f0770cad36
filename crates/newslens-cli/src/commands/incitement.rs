use newslens_core::{NewslensClient, TrendQuery};
use serde_json::Value;

use crate::cli::IncitementCommand;
use crate::error::CliError;

use super::{query_date, to_json};

pub async fn run(command: &IncitementCommand, client: &NewslensClient) -> Result<Value, CliError> {
    match command {
        IncitementCommand::Spectrum(args) => {
            to_json(&client.get_incitement_spectrum(args.event).await?)
        }
        IncitementCommand::Trend(args) => {
            let query = TrendQuery {
                start_date: query_date(args.start.as_deref())?,
                end_date: query_date(args.end.as_deref())?,
                outlet: args.outlet.clone(),
                window: args.window.map(Into::into),
            };
            to_json(&client.get_incitement_trend(&query).await?)
        }
    }
}
