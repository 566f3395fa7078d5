// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, Mutex, PoisonError};

use jiff::Timestamp;
use tokio::sync::watch;

use crate::config::{ConfigError, ItemConfig};
use crate::controller::{Gesture, InteractionController, TapError, TapOutcome};
use crate::matcher::{ItemMatcher, MatcherError};
use crate::render::{RowRenderer, RowView};
use crate::source::{ListSource, SourceError};

/// Errors surfaced by a [`Card`].
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The display name could not be turned into a matcher.
    #[error(transparent)]
    Matcher(#[from] MatcherError),

    /// The list could not be fetched; no row was drawn.
    #[error("Error fetching items: {0}")]
    SnapshotUnavailable(#[source] SourceError),

    /// A tap failed.
    #[error(transparent)]
    Tap(#[from] TapError),
}

/// One item row bound to a remote list.
///
/// A card redraws from a fresh snapshot on every render, and only keeps the
/// last host update timestamp it has seen to skip redundant renders.
#[derive(Debug)]
pub struct Card {
    config: ItemConfig,
    matcher: ItemMatcher,
    controller: InteractionController,
    renderer: RowRenderer,
    source: Arc<dyn ListSource>,
    last_updated: Mutex<Option<Timestamp>>,
}

impl Card {
    /// Creates a card, validating its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ItemConfig, source: Arc<dyn ListSource>) -> Result<Self, CardError> {
        config.validate()?;
        let matcher = ItemMatcher::new(&config.display_name())?;
        let controller =
            InteractionController::new(source.clone(), &config.todo_list, config.quantity_enabled())
                .with_timeout(config.lock_timeout());

        Ok(Self {
            config,
            matcher,
            controller,
            renderer: RowRenderer::default(),
            source,
            last_updated: Mutex::new(None),
        })
    }

    /// The configuration of this card.
    pub fn config(&self) -> &ItemConfig {
        &self.config
    }

    /// Name the item is stored under.
    pub fn display_name(&self) -> &str {
        self.matcher.display_name()
    }

    /// Whether a mutation is in flight.
    pub fn is_busy(&self) -> bool {
        self.controller.is_busy()
    }

    /// Subscribes to refresh signals raised after applied mutations.
    pub fn subscribe_refresh(&self) -> watch::Receiver<u64> {
        self.controller.subscribe_refresh()
    }

    /// Notifies the card that the host state of its list changed.
    ///
    /// Returns `Ok(None)` without touching the list when `last_updated` was
    /// already seen.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be fetched.
    pub async fn on_snapshot_changed(
        &self,
        last_updated: Timestamp,
    ) -> Result<Option<RowView>, CardError> {
        {
            let mut seen = self.seen();
            if *seen == Some(last_updated) {
                tracing::trace!(%last_updated, "state already rendered");
                return Ok(None);
            }
            *seen = Some(last_updated);
        }

        self.render().await.map(Some)
    }

    /// Fetches the list and draws the row.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be fetched.
    pub async fn render(&self) -> Result<RowView, CardError> {
        let list = &self.config.todo_list;
        tracing::debug!(%list, "fetching list snapshot");
        let snapshot = self.source.list_items(list).await.map_err(|e| {
            tracing::error!(%list, err = %e, "error fetching items");
            CardError::SnapshotUnavailable(e)
        })?;

        let matched = self.matcher.find(&snapshot);
        tracing::debug!(name = self.display_name(), ?matched, "matched list snapshot");
        Ok(self
            .renderer
            .render(&self.config, matched, self.controller.is_busy()))
    }

    /// Dispatches a tap against the row it was made on.
    ///
    /// After an applied mutation the last seen timestamp is forgotten, so
    /// the next host update always renders.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation fails.
    pub async fn tap(&self, view: &RowView, gesture: Gesture) -> Result<TapOutcome, CardError> {
        let outcome = self
            .controller
            .handle_tap(gesture, &view.matched, self.display_name())
            .await?;

        if let TapOutcome::Applied(_) = outcome {
            *self.seen() = None;
        }
        Ok(outcome)
    }

    fn seen(&self) -> std::sync::MutexGuard<'_, Option<Timestamp>> {
        self.last_updated
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
