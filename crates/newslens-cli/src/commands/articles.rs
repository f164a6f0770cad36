use newslens_core::{ArticleQuery, ArticleSearch, NewslensClient};
use serde_json::Value;

use crate::cli::ArticlesCommand;
use crate::error::CliError;

use super::{pagination, query_date, require_admin, to_json};

pub async fn run(command: &ArticlesCommand, client: &NewslensClient) -> Result<Value, CliError> {
    match command {
        ArticlesCommand::List(args) => {
            let query = ArticleQuery {
                source_name: args.source.clone(),
                start_date: query_date(args.start.as_deref())?,
                end_date: query_date(args.end.as_deref())?,
                pagination: pagination(args.page),
            };
            to_json(&client.get_articles(&query).await?)
        }
        ArticlesCommand::Get(args) => to_json(&client.get_article(args.id).await?),
        ArticlesCommand::Search(args) => {
            let search = ArticleSearch {
                q: args.query.clone(),
                pagination: pagination(args.page),
            };
            to_json(&client.search_articles(&search).await?)
        }
        ArticlesCommand::Semantic(args) => {
            to_json(&client.search_articles_semantic(&args.query, args.limit).await?)
        }
        ArticlesCommand::Incitement(args) => {
            to_json(&client.get_article_incitement(args.id).await?)
        }
        ArticlesCommand::Evidence(args) => {
            to_json(&client.get_article_incitement_evidence(args.id).await?)
        }
        ArticlesCommand::Reaggregate(args) => {
            require_admin(client)?;
            to_json(&client.batch_reaggregate(&args.article_ids).await?)
        }
    }
}
