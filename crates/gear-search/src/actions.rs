//! Bulk actions over a filtered item subset.
//!
//! The side effects themselves (talking to the game service, persisting tags)
//! belong to an [`ActionSink`]. [`run_bulk_action`] only sequences the calls,
//! collects per-item failures and reports one summary to a [`Notifier`].

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use gear_model_rs::{Item, TagValue};
use thiserror::Error;

/// A bulk action applied to every eligible item of a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkAction {
    /// Set the given tag.
    Tag(TagValue),
    /// Remove any tag.
    ClearTag,
    Lock,
    Unlock,
}

impl BulkAction {
    /// Every action, in menu order.
    pub fn all() -> Vec<BulkAction> {
        TagValue::ALL
            .into_iter()
            .map(BulkAction::Tag)
            .chain([BulkAction::ClearTag, BulkAction::Lock, BulkAction::Unlock])
            .collect()
    }

    /// Returns true if the action can be applied to this item.
    ///
    /// Lock actions need a lockable item, tag actions a taggable one.
    pub fn applies_to(&self, item: &Item) -> bool {
        match self {
            BulkAction::Lock | BulkAction::Unlock => item.lockable,
            BulkAction::Tag(_) | BulkAction::ClearTag => item.taggable,
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkAction::Tag(tag) => write!(f, "{tag}"),
            BulkAction::ClearTag => f.write_str("clear"),
            BulkAction::Lock => f.write_str("lock"),
            BulkAction::Unlock => f.write_str("unlock"),
        }
    }
}

impl FromStr for BulkAction {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clear" => Ok(BulkAction::ClearTag),
            "lock" => Ok(BulkAction::Lock),
            "unlock" => Ok(BulkAction::Unlock),
            other => other
                .parse::<TagValue>()
                .map(BulkAction::Tag)
                .map_err(|_| ActionError::UnknownAction(s.to_string())),
        }
    }
}

/// Errors from a single item's bulk action call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The action name is not recognized.
    #[error("unknown bulk action: {0}")]
    UnknownAction(String),

    /// The sink has no item with this id.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// The sink rejected the call.
    #[error("action failed for item {item_id}: {message}")]
    Failed {
        /// The item the call was made for.
        item_id: String,
        /// Sink-supplied reason.
        message: String,
    },
}

impl ActionError {
    /// Creates a failure for an item.
    pub fn failed(item_id: impl Into<String>, message: impl Into<String>) -> Self {
        ActionError::Failed {
            item_id: item_id.into(),
            message: message.into(),
        }
    }
}

/// Performs the per-item side effect of a bulk action.
#[async_trait]
pub trait ActionSink: Send + Sync {
    /// Locks or unlocks one item.
    async fn set_lock_state(&self, item: &Item, locked: bool) -> Result<(), ActionError>;

    /// Sets or clears one item's tag.
    async fn set_tag(&self, item: &Item, tag: Option<TagValue>) -> Result<(), ActionError>;
}

/// Receives the outcome of a bulk action.
pub trait Notifier: Send + Sync {
    /// Called once with the aggregate result.
    fn notify(&self, summary: &ActionSummary);

    /// Called at most once, after the summary, when item state may have changed.
    fn refresh(&self);
}

/// A failed item within a bulk action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionFailure {
    pub item_id: String,
    pub error: ActionError,
}

/// Aggregate outcome of a bulk action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSummary {
    pub action: BulkAction,
    /// Items the sink was called for.
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<ActionFailure>,
}

impl ActionSummary {
    /// Number of items whose call failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if no call failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for ActionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} succeeded, {} failed",
            self.action,
            self.succeeded,
            self.failed()
        )
    }
}

/// Applies `action` to every eligible item, one call at a time.
///
/// Items the action does not apply to are skipped. A failed call is recorded
/// and the loop moves on. When the loop finishes the notifier receives exactly
/// one summary, then one refresh if any call was made.
pub async fn run_bulk_action<S, N>(
    items: &[&Item],
    action: BulkAction,
    sink: &S,
    notifier: &N,
) -> ActionSummary
where
    S: ActionSink + ?Sized,
    N: Notifier + ?Sized,
{
    let mut summary = ActionSummary {
        action,
        attempted: 0,
        succeeded: 0,
        failures: Vec::new(),
    };

    for item in items.iter().filter(|item| action.applies_to(item)) {
        summary.attempted += 1;
        let result = match action {
            BulkAction::Lock => sink.set_lock_state(item, true).await,
            BulkAction::Unlock => sink.set_lock_state(item, false).await,
            BulkAction::Tag(tag) => sink.set_tag(item, Some(tag)).await,
            BulkAction::ClearTag => sink.set_tag(item, None).await,
        };

        match result {
            Ok(()) => summary.succeeded += 1,
            Err(error) => {
                tracing::warn!(item = %item.id, %action, %error, "bulk action failed");
                summary.failures.push(ActionFailure {
                    item_id: item.id.clone(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        %action,
        attempted = summary.attempted,
        succeeded = summary.succeeded,
        failed = summary.failed(),
        "bulk action complete"
    );

    notifier.notify(&summary);
    if summary.attempted > 0 {
        notifier.refresh();
    }
    summary
}
