// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Turning taps into list mutations, one at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::matcher::MatchResult;
use crate::source::{ListSource, SourceError};

/// What the user tapped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Gesture {
    /// The "+" quantity control.
    Increment,

    /// The "-" quantity control.
    Decrement,

    /// The row itself, toggling the item on or off the list.
    #[default]
    Row,
}

/// A single change to the remote list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Append a new entry.
    Add {
        /// Text of the new entry.
        text: String,
    },

    /// Remove an existing entry.
    Remove {
        /// Exact stored text of the entry.
        text: String,
    },

    /// Rename an existing entry, used to change its quantity.
    Rename {
        /// Exact stored text of the entry.
        from: String,
        /// New text.
        to: String,
    },
}

/// Encodes `quantity` into the stored text: 1 is the bare name, anything
/// above is suffixed with ` (N)`.
pub fn encode_quantity(display_name: &str, quantity: u32) -> String {
    if quantity > 1 {
        format!("{display_name} ({quantity})")
    } else {
        display_name.to_owned()
    }
}

/// Decides which mutation, if any, a gesture triggers.
pub fn decide(
    gesture: Gesture,
    matched: &MatchResult,
    display_name: &str,
    quantity_enabled: bool,
) -> Option<Mutation> {
    let entry = matched.matched_entry.as_ref().filter(|_| matched.present);
    match (gesture, entry) {
        (Gesture::Row, None) => Some(Mutation::Add {
            text: display_name.to_owned(),
        }),

        (Gesture::Row, Some(entry)) if !quantity_enabled || matched.quantity <= 1 => {
            Some(Mutation::Remove {
                text: entry.clone(),
            })
        }

        // with several on the list, the quantity controls must bring it down first
        (Gesture::Row, Some(_)) => None,

        (Gesture::Increment, Some(entry)) => Some(Mutation::Rename {
            from: entry.clone(),
            to: encode_quantity(display_name, matched.quantity.saturating_add(1)),
        }),

        (Gesture::Decrement, Some(entry)) if matched.quantity > 1 => Some(Mutation::Rename {
            from: entry.clone(),
            to: encode_quantity(display_name, matched.quantity - 1),
        }),

        (Gesture::Decrement | Gesture::Increment, _) => None,
    }
}

/// Result of a tap that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Another mutation was in flight, the tap was dropped.
    Busy,

    /// The tap maps to no mutation in the current state.
    Ignored,

    /// The mutation was applied and a refresh was signalled.
    Applied(Mutation),
}

/// A tap whose mutation did not go through.
#[derive(Debug, thiserror::Error)]
pub enum TapError {
    /// The list source rejected the mutation.
    #[error("list mutation failed: {0}")]
    Source(#[source] SourceError),

    /// The mutation did not settle in time.
    #[error("list mutation did not settle within {0:?}")]
    TimedOut(Duration),
}

/// Dispatches taps to a [`ListSource`], allowing at most one mutation in
/// flight.
#[derive(Debug)]
pub struct InteractionController {
    source: Arc<dyn ListSource>,
    list: String,
    quantity_enabled: bool,
    timeout: Option<Duration>,
    lock: AtomicBool,
    refresh: watch::Sender<u64>,
}

impl InteractionController {
    /// Creates a controller mutating `list` on `source`.
    pub fn new(source: Arc<dyn ListSource>, list: impl Into<String>, quantity_enabled: bool) -> Self {
        let (refresh, _) = watch::channel(0);
        Self {
            source,
            list: list.into(),
            quantity_enabled,
            timeout: None,
            lock: AtomicBool::new(false),
            refresh,
        }
    }

    /// Bounds how long a single mutation may hold the lock.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a mutation is in flight.
    pub fn is_busy(&self) -> bool {
        self.lock.load(Ordering::Acquire)
    }

    /// Subscribes to refresh signals. The value is bumped after every
    /// applied mutation.
    pub fn subscribe_refresh(&self) -> watch::Receiver<u64> {
        self.refresh.subscribe()
    }

    /// Handles one tap against the result of the current render.
    ///
    /// A tap arriving while another mutation is in flight is dropped, not
    /// queued.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation fails or times out. The lock is
    /// released either way.
    pub async fn handle_tap(
        &self,
        gesture: Gesture,
        matched: &MatchResult,
        display_name: &str,
    ) -> Result<TapOutcome, TapError> {
        if self.is_busy() {
            tracing::debug!(?gesture, "mutation in flight, dropping tap");
            return Ok(TapOutcome::Busy);
        }

        let Some(mutation) = decide(gesture, matched, display_name, self.quantity_enabled) else {
            tracing::debug!(?gesture, ?matched, "tap maps to no mutation");
            return Ok(TapOutcome::Ignored);
        };

        let Some(_guard) = self.try_lock() else {
            tracing::debug!(?gesture, "mutation in flight, dropping tap");
            return Ok(TapOutcome::Busy);
        };

        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.apply(&mutation))
                .await
                .map_err(|_| {
                    tracing::warn!(?mutation, ?timeout, "list mutation timed out");
                    TapError::TimedOut(timeout)
                })?,
            None => self.apply(&mutation).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(list = %self.list, ?mutation, "list mutation applied");
                self.refresh.send_modify(|a| *a = a.wrapping_add(1));
                Ok(TapOutcome::Applied(mutation))
            }
            Err(e) => {
                tracing::warn!(list = %self.list, ?mutation, err = %e, "list mutation failed");
                Err(TapError::Source(e))
            }
        }
    }

    async fn apply(&self, mutation: &Mutation) -> Result<(), SourceError> {
        match mutation {
            Mutation::Add { text } => self.source.add_item(&self.list, text).await,
            Mutation::Remove { text } => self.source.remove_item(&self.list, text).await,
            Mutation::Rename { from, to } => self.source.rename_item(&self.list, from, to).await,
        }
    }

    fn try_lock(&self) -> Option<LockGuard<'_>> {
        self.lock
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LockGuard(&self.lock))
    }
}

/// Releases the interaction lock when the mutation settles, times out, or
/// the tap future is dropped.
#[derive(Debug)]
struct LockGuard<'a>(&'a AtomicBool);

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
