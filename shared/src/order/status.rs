//! Order status and transition graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status
///
/// ```text
/// open ──► paid
///   │
///   └───► cancelled
/// ```
///
/// `paid` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Open, Self::Paid, Self::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a status string, `None` for anything outside open / paid / cancelled
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "paid" => Some(Self::Paid),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }

    /// Items can be added or removed only while open
    pub fn accepts_items(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether `self -> next` is an edge of the status graph.
    ///
    /// `open -> open` is accepted as a no-op.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::Open) | (Self::Open, Self::Paid) | (Self::Open, Self::Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
