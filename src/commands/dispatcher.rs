//! Action Dispatcher
//!
//! Every trigger becomes a numbered ticket carrying its action, target and
//! the request built from the forms at trigger time. Completions are applied
//! in arrival order with no staleness check: when two tickets target the
//! same state object, the one that completes last wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, warn};

use super::Transport;
use crate::reconcile::reconcile;
use crate::request::{build_request, Action, ApiRequest, Target};
use crate::response::Outcome;
use crate::store::AppState;

/// One in-flight request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub action: Action,
    pub target: Target,
    pub request: ApiRequest,
}

/// A ticket paired with whatever came back for it
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Outcome,
}

impl Completion {
    /// Reconcile into `state`, regardless of newer tickets still in flight
    pub fn apply(self, state: &mut AppState) {
        debug!(
            "[DISPATCH] Applying #{} {:?} to {:?}",
            self.ticket.id, self.ticket.action, self.ticket.target
        );
        reconcile(self.ticket.action, self.outcome, state);
    }
}

#[derive(Clone)]
pub struct Dispatcher<T> {
    transport: T,
    next_ticket: Arc<AtomicU64>,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            next_ticket: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Snapshot the forms into a request for `action`
    pub fn issue(&self, action: Action, state: &AppState) -> Ticket {
        let id = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        let request = build_request(action, &state.wishlist_form, &state.item_form);
        debug!(
            "[DISPATCH] Issued #{} {:?}: {} {}",
            id,
            action,
            request.method.as_str(),
            request.url("")
        );
        Ticket {
            id,
            action,
            target: action.target(),
            request,
        }
    }

    /// Send a ticket; transport errors become an outcome, never an `Err`
    pub async fn send(&self, ticket: Ticket) -> Completion {
        let outcome = match self.transport.send(&ticket.request).await {
            Ok(raw) => raw.into_outcome(),
            Err(err) => {
                warn!(
                    "[DISPATCH] #{} {:?} transport error: {}",
                    ticket.id, ticket.action, err
                );
                Outcome::from(err)
            }
        };
        Completion { ticket, outcome }
    }
}
