//! Presentation models for user feeds.
//!
//! [`UiModel`] has exactly four shapes. The canned states never carry rows and
//! only [`UiModel::Loading`] reports loading, so combinations such as
//! "loading with an error" cannot be built.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::feed::{FeedItem, UserSummary, activity_label};

const EMPTY_HEADER: &str = "No data";
const LOADING_HEADER: &str = "Loading...";
const ERROR_HEADER: &str = "Error";

/// One selectable row of a rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiListRow {
    /// Row identifier.
    pub id: i64,
    /// Text shown on the row.
    pub title: String,
    /// Secondary text.
    pub subtitle: Option<String>,
    /// Mirrors the originating user's active flag.
    pub selected: bool,
}

/// Presentation model handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum UiModel {
    /// Rows to display.
    Populated {
        /// Header text.
        header: String,
        /// Rows in display order.
        rows: Vec<UiListRow>,
    },
    /// Nothing to display.
    Empty {
        /// Header text.
        header: String,
    },
    /// Content is being fetched.
    Loading {
        /// Header text.
        header: String,
    },
    /// Fetching failed.
    Error {
        /// Header text.
        header: String,
        /// Failure description shown to the user.
        message: String,
    },
}

impl UiModel {
    /// Header text of any state.
    pub fn header(&self) -> &str {
        match self {
            Self::Populated { header, .. }
            | Self::Empty { header }
            | Self::Loading { header }
            | Self::Error { header, .. } => header.as_str(),
        }
    }

    /// Rows; always empty outside [`UiModel::Populated`].
    pub fn rows(&self) -> &[UiListRow] {
        match self {
            Self::Populated { rows, .. } => rows.as_slice(),
            Self::Empty { .. } | Self::Loading { .. } | Self::Error { .. } => &[],
        }
    }

    /// Whether this is the loading state.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Error message of the error state.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Collapse a fallible load into a model, rendering failures with
    /// [`UiMapper::error_state`].
    ///
    /// # Examples
    /// ```
    /// use feed::domain::UiModel;
    ///
    /// let failed: Result<UiModel, &str> = Err("offline");
    /// assert_eq!(UiModel::from_result(failed).error(), Some("offline"));
    /// ```
    pub fn from_result<E: fmt::Display>(result: Result<Self, E>) -> Self {
        result.unwrap_or_else(|error| UiMapper.error_state(error.to_string()))
    }
}

/// Maps feed items to presentation models.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiMapper;

impl UiMapper {
    /// Render feed items as a populated model.
    ///
    /// Row titles are prefixed with their 1-based position.
    ///
    /// # Examples
    /// ```
    /// use feed::domain::{DomainUser, UiMapper, to_feed_items};
    ///
    /// let items = to_feed_items(&[DomainUser::new(1, "Ada", true)]);
    /// let model = UiMapper.map_to_ui(&items);
    /// assert_eq!(model.header(), "Feed (1)");
    /// assert_eq!(model.rows()[0].title, "1. User Ada");
    /// ```
    pub fn map_to_ui(&self, items: &[FeedItem]) -> UiModel {
        let rows = items
            .iter()
            .zip(1_usize..)
            .map(|(item, position)| UiListRow {
                id: item.id,
                title: format!("{position}. {}", item.title),
                subtitle: item.subtitle.clone(),
                selected: item.summary.is_active,
            })
            .collect();
        UiModel::Populated {
            header: format!("Feed ({})", items.len()),
            rows,
        }
    }

    /// Model shown when there is nothing to display.
    pub fn empty_state(&self) -> UiModel {
        UiModel::Empty {
            header: EMPTY_HEADER.to_owned(),
        }
    }

    /// Model shown while content is fetched.
    pub fn loading_state(&self) -> UiModel {
        UiModel::Loading {
            header: LOADING_HEADER.to_owned(),
        }
    }

    /// Model shown when fetching failed.
    pub fn error_state(&self, message: impl Into<String>) -> UiModel {
        UiModel::Error {
            header: ERROR_HEADER.to_owned(),
            message: message.into(),
        }
    }
}

/// Map summaries straight to rows, skipping feed items.
///
/// Row ids are positions; titles are the bare names.
pub fn map_summaries_to_ui_items(summaries: &[UserSummary]) -> Vec<UiListRow> {
    summaries
        .iter()
        .zip(0_i64..)
        .map(|(summary, position)| UiListRow {
            id: position,
            title: summary.name.clone(),
            subtitle: Some(activity_label(summary.is_active).to_owned()),
            selected: summary.is_active,
        })
        .collect()
}
