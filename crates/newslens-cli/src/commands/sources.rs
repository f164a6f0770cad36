use newslens_core::{MediaSource, MediaSourceUpdate, NewslensClient};
use serde_json::Value;

use crate::cli::{SourceFieldArgs, SourceUpdateArgs, SourceUpsertArgs, SourcesCommand};
use crate::error::CliError;

use super::{require_admin, to_json};

pub async fn run(command: &SourcesCommand, client: &NewslensClient) -> Result<Value, CliError> {
    match command {
        SourcesCommand::List => to_json(&client.get_sources().await?),
        SourcesCommand::Upsert(args) => {
            require_admin(client)?;
            to_json(&client.upsert_media_source(&media_source(args)).await?)
        }
        SourcesCommand::Update(args) => {
            require_admin(client)?;
            let update = media_source_update(args);
            if update.is_empty() {
                return Err(CliError::Command(String::from(
                    "nothing to update: pass at least one field",
                )));
            }
            to_json(&client.update_media_source(args.id, &update).await?)
        }
        SourcesCommand::Delete(args) => {
            require_admin(client)?;
            to_json(&client.delete_media_source(args.id).await?)
        }
    }
}

fn media_source(args: &SourceUpsertArgs) -> MediaSource {
    let SourceFieldArgs {
        home_url,
        bias,
        weight,
        factuality,
        ownership,
        category,
    } = &args.fields;

    MediaSource {
        home_url: home_url.clone(),
        default_bias_score: *bias,
        weight: *weight,
        factuality: factuality.map(Into::into),
        ownership_info: ownership.clone(),
        category: category.map(Into::into),
        ..MediaSource::new(args.name.trim(), args.code.trim())
    }
}

fn media_source_update(args: &SourceUpdateArgs) -> MediaSourceUpdate {
    MediaSourceUpdate {
        name: args.name.clone(),
        code: args.code.clone(),
        home_url: args.fields.home_url.clone(),
        default_bias_score: args.fields.bias,
        weight: args.fields.weight,
        factuality: args.fields.factuality.map(Into::into),
        ownership_info: args.fields.ownership.clone(),
        category: args.fields.category.map(Into::into),
    }
}
