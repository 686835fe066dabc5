use crate::{Error, Result};

/// Tunables fixed at tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    min_range_width: u64,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeOptions {
    /// Default options: ranges of a single element are accepted.
    pub const fn new() -> Self {
        TreeOptions { min_range_width: 1 }
    }

    /// Set the minimum number of elements an aggregated or range proof must
    /// cover. Narrower ranges fail with [`Error::RangeTooSmall`].
    pub const fn with_min_range_width(mut self, min_range_width: u64) -> Self {
        self.min_range_width = min_range_width;
        self
    }

    /// The minimum number of elements a range proof must cover.
    pub fn min_range_width(&self) -> u64 {
        self.min_range_width
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.min_range_width == 0 {
            return Err(Error::InvalidOptions(
                "minimum range width must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
