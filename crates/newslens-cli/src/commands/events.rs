use newslens_core::{EventCreateRequest, EventQuery, NewslensClient};
use serde_json::Value;

use crate::cli::{EventCreateArgs, EventsCommand};
use crate::error::CliError;

use super::{pagination, query_date, require_admin, to_json};

pub async fn run(command: &EventsCommand, client: &NewslensClient) -> Result<Value, CliError> {
    match command {
        EventsCommand::List(args) => {
            let query = EventQuery {
                topic: args.topic.clone(),
                state: args.state.map(Into::into),
                published: args.published,
                pagination: pagination(args.page),
            };
            to_json(&client.get_events(&query).await?)
        }
        EventsCommand::Trending(args) => to_json(&client.get_trending_events(args.limit).await?),
        EventsCommand::Recent(args) => to_json(&client.get_recent_events(args.limit).await?),
        EventsCommand::Get(args) => to_json(&client.get_event(args.id).await?),
        EventsCommand::Articles(args) => to_json(&client.get_event_articles(args.id).await?),
        EventsCommand::Spectrum(args) => to_json(&client.get_event_spectrum(args.id).await?),
        EventsCommand::Incitement(args) => {
            to_json(&client.get_event_incitement(args.id, args.evidence).await?)
        }
        admin => run_admin(admin, client).await,
    }
}

async fn run_admin(command: &EventsCommand, client: &NewslensClient) -> Result<Value, CliError> {
    require_admin(client)?;

    match command {
        EventsCommand::Create(args) => to_json(&client.create_event(&create_request(args)?).await?),
        EventsCommand::Suggest(args) => to_json(&client.suggest_event(&args.article_ids).await?),
        EventsCommand::Delete(args) => to_json(&client.delete_event(args.id).await?),
        EventsCommand::Dissolve(args) => to_json(&client.dissolve_event(args.id).await?),
        EventsCommand::Recalculate(args) => to_json(&client.recalculate_event(args.id).await?),
        EventsCommand::Regenerate(args) => to_json(&client.regenerate_event(args.id).await?),
        EventsCommand::Publish(args) => to_json(&client.publish_event(args.id, args.value).await?),
        EventsCommand::Headline(args) => {
            to_json(&client.set_event_headline(args.id, args.value).await?)
        }
        EventsCommand::AddArticles(args) => {
            to_json(&client.add_event_articles(args.id, &args.article_ids).await?)
        }
        EventsCommand::RemoveArticles(args) => {
            to_json(&client.remove_event_articles(args.id, &args.article_ids).await?)
        }
        read => Err(CliError::Command(format!(
            "not an admin event command: {read:?}"
        ))),
    }
}

fn create_request(args: &EventCreateArgs) -> Result<EventCreateRequest, CliError> {
    let topic = args.topic.trim();
    if topic.is_empty() {
        return Err(CliError::Command(String::from("event topic must not be empty")));
    }

    let mut request = EventCreateRequest::new(topic);
    request.core_summary = args.summary.clone();
    request.start_time = query_date(args.start.as_deref())?;
    request.end_time = query_date(args.end.as_deref())?;
    request.state = args.state.map(Into::into);
    request.article_ids = (!args.article_ids.is_empty()).then(|| args.article_ids.clone());
    request.key_points = (!args.key_points.is_empty()).then(|| args.key_points.clone());
    request.location_tag = args.location.clone();
    Ok(request)
}
