//! The render contract.
//!
//! A list screen renders to exactly one of four states, each visually
//! distinguishable. Zero visible records always produce [`RenderState::Empty`]
//! with an explicit placeholder, never a header-only table.

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The record's stable id, used as the render key and the target of
    /// row-level actions.
    pub key: String,

    /// Projected cell text, one entry per column.
    pub cells: Vec<String>,
}

/// What a list screen shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// First load in progress, nothing to show yet.
    Loading,

    /// The last fetch failed and there is no earlier data to fall back on.
    Failed(String),

    /// Load succeeded (or filters excluded everything); show the
    /// placeholder instead of an empty table body.
    Empty(String),

    /// Visible records, in pipeline order.
    Rows(Vec<Row>),
}

/// Default placeholder for screens that don't configure their own.
pub const NO_DATA_PLACEHOLDER: &str = "No records found";
