//! # Domain Records
//!
//! Value types exchanged with the newslens backend. They mirror the wire
//! format (camelCase JSON) and carry no behaviour of their own; scoring
//! and aggregation happen server-side.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Article`] | Crawled article with processing status |
//! | [`Event`] | Aggregated news event |
//! | [`MediaSource`] | Outlet with bias metrics; `id` absent for virtual sources |
//! | [`SpectrumDto`] | Bias distribution for an event or search |
//! | [`IncitementDto`] | Per-outlet incitement scores for an event |
//! | [`Page`] | Pagination envelope (0-based) |
//! | [`OperationSummary`] | Result of admin batch operations |
//!
//! Timestamps stay in the backend's `YYYY-MM-DD HH:mm:ss` form; see
//! [`crate::datetime`] for conversions.
//!
//! Enumerations the backend may extend (statuses, categories) are open:
//! unknown values deserialize into an `Other(String)` variant instead of
//! failing the whole response.

macro_rules! open_string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value this client does not know, kept verbatim.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod article;
mod event;
mod incitement;
mod page;
mod source;
mod spectrum;

pub use article::{Article, ProcessingStatus};
pub use event::{Event, EventCreateRequest, EventState, EventSuggestRequest, EventSuggestResponse};
pub use incitement::{
    ArticleIncitementAnalysis, ArticleIncitementEvidence, AttributionType, IncitementBaseline,
    IncitementDto, IncitementEvidence, IncitementSpectrumDto, IncitementStatistics,
    IncitementTrendDataPoint, IncitementTrendDto, OutletIncitement, SpectrumPoint, TrendWindow,
};
pub use page::{OperationSummary, Page};
pub use source::{Factuality, MediaSource, MediaSourceUpdate, SourceCategory};
pub use spectrum::{SpectrumDto, SpectrumSourceStance};
