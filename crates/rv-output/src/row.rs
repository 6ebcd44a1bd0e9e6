//! Plain data row types written by trace backends.

/// One robot move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRow {
    /// Zero-based run index within one observer.
    pub run:          u32,
    pub policy:       String,
    /// Turns taken including this move (the first move is 1).
    pub turn:         u64,
    pub from:         String,
    pub direction:    String,
    pub parcels_left: u64,
}

/// How one run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub run:          u32,
    pub policy:       String,
    pub turns:        u64,
    /// `false` when the turn limit cut the run off.
    pub completed:    bool,
    pub parcels_left: u64,
}
