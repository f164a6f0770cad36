//! CLI argument definitions for newslens.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `login` / `logout` / `status` | Manage the persisted admin session |
//! | `articles` | List, search and inspect articles |
//! | `events` | Browse events and run admin event operations |
//! | `sources` | List and maintain media sources |
//! | `spectrum` | Keyword bias-spectrum search |
//! | `incitement` | Incitement scatter and trend reports |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `NEWSLENS_API_BASE_URL` or `http://localhost:8080` | Backend root |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--session-file` | `$NEWSLENS_HOME/session.json` | Where the API key is kept |
//!
//! # Examples
//!
//! ```bash
//! newslens login abc123
//! newslens events trending --limit 5 --pretty
//! newslens articles search "typhoon" --size 50
//! newslens events publish 42 --published true
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use newslens_core::{EventState, Factuality, SourceCategory, TrendWindow};

/// Newslens - news aggregation and media bias console
#[derive(Debug, Parser)]
#[command(
    name = "newslens",
    author,
    version,
    about = "News aggregation and media bias console",
    long_about = "Query articles, events, media sources and bias/incitement reports from a \
newslens backend, and run admin operations with a persisted API key.\n\
\n\
Use 'newslens <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Backend root url (overrides NEWSLENS_API_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Session file holding the admin API key.
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an admin API key for later admin commands.
    Login(LoginArgs),

    /// Forget the stored admin API key.
    Logout,

    /// Show whether an admin session is active.
    Status,

    /// Articles and their incitement analysis.
    Articles(ArticlesArgs),

    /// Events, their spectrum and admin maintenance.
    Events(EventsArgs),

    /// Media sources.
    Sources(SourcesArgs),

    /// Bias spectrum search.
    Spectrum(SpectrumArgs),

    /// Cross-event incitement reports.
    Incitement(IncitementArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Admin API key issued by the backend operator.
    pub key: String,
}

/// 0-based page index and page size shared by list commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    /// Page index, starting at 0.
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size (default: 20).
    #[arg(long)]
    pub size: Option<u32>,
}

// =============================================================================
// articles
// =============================================================================

#[derive(Debug, Args)]
pub struct ArticlesArgs {
    #[command(subcommand)]
    pub command: ArticlesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ArticlesCommand {
    /// List articles, newest first.
    List(ArticleListArgs),

    /// Fetch one article.
    Get(IdArgs),

    /// Keyword search.
    Search(ArticleSearchArgs),

    /// Semantic (embedding) search.
    Semantic(SemanticArgs),

    /// Incitement analysis of an article (empty when not analyzed yet).
    Incitement(IdArgs),

    /// Evidence snippets behind an article's incitement score.
    Evidence(IdArgs),

    /// Re-run event aggregation for articles (admin).
    Reaggregate(ArticleIdsArgs),
}

#[derive(Debug, Args)]
pub struct ArticleListArgs {
    /// Only articles from this outlet.
    #[arg(long)]
    pub source: Option<String>,

    /// Earliest publication date (YYYY-MM-DD or YYYY-MM-DD HH:mm:ss).
    #[arg(long)]
    pub start: Option<String>,

    /// Latest publication date (YYYY-MM-DD or YYYY-MM-DD HH:mm:ss).
    #[arg(long)]
    pub end: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct ArticleSearchArgs {
    /// Search keywords.
    pub query: String,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct SemanticArgs {
    /// Natural language query.
    pub query: String,

    /// Maximum number of results (default: 10).
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    pub id: i64,
}

#[derive(Debug, Args)]
pub struct ArticleIdsArgs {
    /// Article ids.
    #[arg(required = true, num_args = 1..)]
    pub article_ids: Vec<i64>,
}

// =============================================================================
// events
// =============================================================================

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List events, most recently updated first.
    List(EventListArgs),

    /// Hottest events.
    Trending(LimitArgs),

    /// Latest events.
    Recent(LimitArgs),

    /// Fetch one event.
    Get(IdArgs),

    /// Articles attached to an event.
    Articles(IdArgs),

    /// Bias spectrum of an event.
    Spectrum(IdArgs),

    /// Per-outlet incitement scores of an event.
    Incitement(EventIncitementArgs),

    /// Create an event (admin).
    Create(EventCreateArgs),

    /// Draft topic and summary for a set of articles (admin).
    Suggest(ArticleIdsArgs),

    /// Delete an event (admin).
    Delete(IdArgs),

    /// Detach all articles and remove the event (admin).
    Dissolve(IdArgs),

    /// Recompute event statistics (admin).
    Recalculate(IdArgs),

    /// Regenerate summary and key points (admin).
    Regenerate(IdArgs),

    /// Publish or unpublish an event (admin).
    Publish(EventFlagArgs),

    /// Mark or unmark an event as headline (admin).
    Headline(EventFlagArgs),

    /// Attach articles to an event (admin).
    AddArticles(EventArticlesArgs),

    /// Detach articles from an event (admin).
    RemoveArticles(EventArticlesArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventStateArg {
    Open,
    Closed,
}

impl From<EventStateArg> for EventState {
    fn from(value: EventStateArg) -> Self {
        match value {
            EventStateArg::Open => Self::Open,
            EventStateArg::Closed => Self::Closed,
        }
    }
}

#[derive(Debug, Args)]
pub struct EventListArgs {
    /// Topic keyword filter.
    #[arg(long)]
    pub topic: Option<String>,

    #[arg(long, value_enum)]
    pub state: Option<EventStateArg>,

    /// Only published (true) or unpublished (false) events.
    #[arg(long)]
    pub published: Option<bool>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct LimitArgs {
    /// Number of events (default: 10).
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Debug, Args)]
pub struct EventIncitementArgs {
    pub id: i64,

    /// Include evidence snippets per outlet.
    #[arg(long, default_value_t = false)]
    pub evidence: bool,
}

#[derive(Debug, Args)]
pub struct EventCreateArgs {
    /// Event topic.
    pub topic: String,

    #[arg(long)]
    pub summary: Option<String>,

    /// Start time (YYYY-MM-DD or YYYY-MM-DD HH:mm:ss).
    #[arg(long)]
    pub start: Option<String>,

    /// End time (YYYY-MM-DD or YYYY-MM-DD HH:mm:ss).
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long, value_enum)]
    pub state: Option<EventStateArg>,

    /// Articles to attach on creation.
    #[arg(long = "article", num_args = 1..)]
    pub article_ids: Vec<i64>,

    /// Key point (repeatable).
    #[arg(long = "key-point")]
    pub key_points: Vec<String>,

    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Debug, Args)]
pub struct EventFlagArgs {
    pub id: i64,

    /// New flag value.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub value: bool,
}

#[derive(Debug, Args)]
pub struct EventArticlesArgs {
    pub id: i64,

    /// Article ids.
    #[arg(required = true, num_args = 1..)]
    pub article_ids: Vec<i64>,
}

// =============================================================================
// sources
// =============================================================================

#[derive(Debug, Args)]
pub struct SourcesArgs {
    #[command(subcommand)]
    pub command: SourcesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SourcesCommand {
    /// List media sources, including virtual ones.
    List,

    /// Create or update a media source by code (admin).
    Upsert(SourceUpsertArgs),

    /// Change selected fields of a media source (admin).
    Update(SourceUpdateArgs),

    /// Delete a media source (admin).
    Delete(IdArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FactualityArg {
    High,
    Mixed,
    Low,
    Unknown,
}

impl From<FactualityArg> for Factuality {
    fn from(value: FactualityArg) -> Self {
        match value {
            FactualityArg::High => Self::High,
            FactualityArg::Mixed => Self::Mixed,
            FactualityArg::Low => Self::Low,
            FactualityArg::Unknown => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Traditional,
    Online,
    Independent,
    Other,
}

impl From<CategoryArg> for SourceCategory {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Traditional => Self::Traditional,
            CategoryArg::Online => Self::Online,
            CategoryArg::Independent => Self::Independent,
            CategoryArg::Other => Self::Unclassified,
        }
    }
}

/// Optional media source attributes shared by upsert and update.
#[derive(Debug, Args)]
pub struct SourceFieldArgs {
    #[arg(long)]
    pub home_url: Option<String>,

    /// Default bias score (-10 left .. 10 right).
    #[arg(long, allow_hyphen_values = true)]
    pub bias: Option<f64>,

    /// Aggregation weight.
    #[arg(long)]
    pub weight: Option<f64>,

    #[arg(long, value_enum)]
    pub factuality: Option<FactualityArg>,

    #[arg(long)]
    pub ownership: Option<String>,

    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,
}

#[derive(Debug, Args)]
pub struct SourceUpsertArgs {
    /// Display name.
    pub name: String,

    /// Unique outlet code.
    pub code: String,

    #[command(flatten)]
    pub fields: SourceFieldArgs,
}

#[derive(Debug, Args)]
pub struct SourceUpdateArgs {
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub code: Option<String>,

    #[command(flatten)]
    pub fields: SourceFieldArgs,
}

// =============================================================================
// spectrum / incitement
// =============================================================================

#[derive(Debug, Args)]
pub struct SpectrumArgs {
    #[command(subcommand)]
    pub command: SpectrumCommand,
}

#[derive(Debug, Subcommand)]
pub enum SpectrumCommand {
    /// Bias distribution of articles matching a keyword.
    Search(SpectrumSearchArgs),
}

#[derive(Debug, Args)]
pub struct SpectrumSearchArgs {
    pub query: String,

    /// Maximum number of articles considered (default: 20).
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Debug, Args)]
pub struct IncitementArgs {
    #[command(subcommand)]
    pub command: IncitementCommand,
}

#[derive(Debug, Subcommand)]
pub enum IncitementCommand {
    /// Stance/incitement scatter, for one event or all.
    Spectrum(IncitementSpectrumArgs),

    /// Incitement time series of an outlet.
    Trend(TrendArgs),
}

#[derive(Debug, Args)]
pub struct IncitementSpectrumArgs {
    /// Restrict to one event.
    #[arg(long)]
    pub event: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowArg {
    Day,
    Week,
    Month,
}

impl From<WindowArg> for TrendWindow {
    fn from(value: WindowArg) -> Self {
        match value {
            WindowArg::Day => Self::Day,
            WindowArg::Week => Self::Week,
            WindowArg::Month => Self::Month,
        }
    }
}

#[derive(Debug, Args)]
pub struct TrendArgs {
    #[arg(long)]
    pub outlet: Option<String>,

    /// First day (YYYY-MM-DD or YYYY-MM-DD HH:mm:ss).
    #[arg(long)]
    pub start: Option<String>,

    /// Last day (YYYY-MM-DD or YYYY-MM-DD HH:mm:ss).
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long, value_enum)]
    pub window: Option<WindowArg>,
}
