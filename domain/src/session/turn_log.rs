//! Append-only turn history

use super::entities::Turn;
use super::value_objects::TurnId;
use crate::generation::outcome::GenerationOutcome;
use serde::Serialize;

/// What [`TurnLog::reconcile`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Result fields were populated
    Resolved,
    /// Request failed; the turn stays without a result
    Unresolved,
    /// The turn had already settled; nothing changed
    AlreadySettled,
    /// No turn at that index (e.g. the log was cleared meanwhile)
    Missing,
}

impl Reconciliation {
    /// Whether the log was mutated
    pub fn applied(&self) -> bool {
        matches!(self, Reconciliation::Resolved | Reconciliation::Unresolved)
    }
}

/// Ordered history of one session's turns.
///
/// Insertion order is display order. Turns are addressed by [`TurnId`]
/// and never removed individually; only [`TurnLog::clear`] drops them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TurnLog {
    turns: Vec<Turn>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end and return its address.
    ///
    /// No validation: the caller guarantees at most one pending turn.
    pub fn append(&mut self, turn: Turn) -> TurnId {
        self.turns.push(turn);
        TurnId::new(self.turns.len() - 1)
    }

    /// Settle the turn at `id` with `outcome`.
    ///
    /// A turn settles once. Later calls for the same index, and calls for
    /// an index that no longer exists, are no-ops.
    pub fn reconcile(&mut self, id: TurnId, outcome: &GenerationOutcome) -> Reconciliation {
        match self.turns.get_mut(id.index()) {
            Some(turn) => turn.settle(outcome),
            None => Reconciliation::Missing,
        }
    }

    /// Drop every turn. Only used by an explicit session reset.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn get(&self, id: TurnId) -> Option<&Turn> {
        self.turns.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> impl Iterator<Item = (TurnId, &Turn)> {
        self.turns
            .iter()
            .enumerate()
            .map(|(i, turn)| (TurnId::new(i), turn))
    }

    /// The turn still waiting for its request, if any
    pub fn pending(&self) -> Option<TurnId> {
        self.iter()
            .find(|(_, turn)| turn.is_pending())
            .map(|(id, _)| id)
    }
}
