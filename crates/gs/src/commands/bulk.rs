//! Bulk command implementation.
//!
//! Applies a lock or tag action to every item matching a query, then writes
//! the updated inventory back to its file.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use gear_model_rs::{Inventory, Item, TagValue};
use gear_search_rs::{
    compile, run_bulk_action, search_inventory, ActionError, ActionSink, ActionSummary,
    BulkAction, Notifier,
};

use super::{report_diagnostics, CommandContext, Result, Session};
use crate::output::{format_summary_json, format_summary_table};

/// Applies actions to a working copy of the inventory.
pub struct InventorySink {
    inventory: Mutex<Inventory>,
}

impl InventorySink {
    /// Creates a sink over a copy of `inventory`.
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: Mutex::new(inventory),
        }
    }

    /// Returns the updated inventory.
    pub fn into_inventory(self) -> Inventory {
        self.inventory
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn update(
        &self,
        item: &Item,
        apply: impl FnOnce(&mut Item),
    ) -> std::result::Result<(), ActionError> {
        let mut inventory = self
            .inventory
            .lock()
            .map_err(|_| ActionError::failed(&item.id, "inventory lock poisoned"))?;
        let target = inventory
            .item_mut(&item.id)
            .ok_or_else(|| ActionError::ItemNotFound(item.id.clone()))?;
        apply(target);
        Ok(())
    }
}

#[async_trait]
impl ActionSink for InventorySink {
    async fn set_lock_state(
        &self,
        item: &Item,
        locked: bool,
    ) -> std::result::Result<(), ActionError> {
        self.update(item, |target| target.locked = locked)
    }

    async fn set_tag(
        &self,
        item: &Item,
        tag: Option<TagValue>,
    ) -> std::result::Result<(), ActionError> {
        self.update(item, |target| target.tag = tag)
    }
}

/// Prints the summary and remembers whether a save is needed.
struct CliNotifier<'a> {
    ctx: &'a CommandContext,
    query: &'a str,
    matched: usize,
    refreshed: AtomicBool,
}

impl Notifier for CliNotifier<'_> {
    fn notify(&self, summary: &ActionSummary) {
        if self.ctx.json_output {
            match format_summary_json(self.query, self.matched, summary) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!(error = %e, "failed to serialize bulk summary"),
            }
        } else if !self.ctx.quiet || !summary.is_success() {
            print!("{}", format_summary_table(summary, self.ctx.use_colors));
        }
    }

    fn refresh(&self) {
        self.refreshed.store(true, Ordering::SeqCst);
    }
}

/// Executes the bulk command.
///
/// # Errors
///
/// Returns an error if the updated inventory can't be written. Per-item
/// failures are part of the printed summary.
pub async fn execute(
    ctx: &CommandContext,
    session: &Session,
    query: &str,
    action: BulkAction,
) -> Result<()> {
    let compiled = compile(query, &session.registry);
    report_diagnostics(ctx, &compiled);

    let matches = search_inventory(&session.inventory, &compiled);
    let sink = InventorySink::new(session.inventory.clone());
    let notifier = CliNotifier {
        ctx,
        query,
        matched: matches.len(),
        refreshed: AtomicBool::new(false),
    };

    run_bulk_action(&matches, action, &sink, &notifier).await;

    if notifier.refreshed.load(Ordering::SeqCst) {
        sink.into_inventory().save(&session.inventory_path)?;
        tracing::info!(path = %session.inventory_path.display(), "saved inventory");
    }

    Ok(())
}
