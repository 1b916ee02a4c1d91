// UI models module
// Which calendar view is active and where its time grid starts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewType {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewType {
    /// Hour at the top of the view's time grid. The month view has no grid.
    pub fn grid_start_hour(&self) -> Option<i32> {
        match self {
            Self::Day => Some(7),
            Self::Week => Some(8),
            Self::Month => None,
        }
    }

    /// The view whose time grid gets drawn. The month view has none, so it
    /// falls back to the week grid.
    pub fn grid_view(&self) -> Self {
        match self {
            Self::Month => Self::Week,
            view => *view,
        }
    }

    /// Number of hour rows the view draws.
    pub fn visible_hours(&self) -> Option<u8> {
        match self {
            Self::Day => Some(12),
            Self::Week => Some(7),
            Self::Month => None,
        }
    }
}
