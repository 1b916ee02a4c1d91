//! Category model for organizing events.
//!
//! Every event belongs to one of a fixed set of categories. The category
//! decides the colour class renderers paint the event block with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A category for organizing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    #[default]
    Education,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Education];

    /// Display name shown in pickers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Education => "Education",
        }
    }

    /// Background colour class used for event blocks of this category.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Work => "bg-blue-100",
            Self::Personal => "bg-green-100",
            Self::Education => "bg-purple-100",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
