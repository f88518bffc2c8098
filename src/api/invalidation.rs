use serde::{Deserialize, Serialize};

/// Ordered repaint classes requested by chart mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Redraw with unchanged data, axes and style.
    Light,
    /// Data, axes, style or geometry changed.
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        !matches!(self, Self::None)
    }
}
