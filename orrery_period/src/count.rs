// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::RangeInclusive;

/// Number of periods a timeline widget can present.
///
/// Fewer than two leaves nothing to navigate between; more than six no longer
/// fits around the ring.
pub const PERIOD_COUNT_RANGE: RangeInclusive<usize> = 2..=6;

/// A period sequence whose length falls outside [`PERIOD_COUNT_RANGE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodCountError {
    /// No periods were supplied.
    Empty,
    /// Fewer periods than the minimum; holds the supplied count.
    TooFew(usize),
    /// More periods than the maximum; holds the supplied count.
    TooMany(usize),
}

impl PeriodCountError {
    /// Returns the offending period count.
    #[must_use]
    pub fn count(&self) -> usize {
        match *self {
            Self::Empty => 0,
            Self::TooFew(n) | Self::TooMany(n) => n,
        }
    }
}

impl fmt::Display for PeriodCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = (*PERIOD_COUNT_RANGE.start(), *PERIOD_COUNT_RANGE.end());
        match self {
            Self::Empty => write!(f, "timeline has no periods; expected between {min} and {max}"),
            Self::TooFew(n) | Self::TooMany(n) => {
                write!(f, "timeline has {n} periods; expected between {min} and {max}")
            }
        }
    }
}

impl core::error::Error for PeriodCountError {}

/// Checks that `len` periods can be presented by a timeline widget.
pub fn validate_period_count(len: usize) -> Result<(), PeriodCountError> {
    if len == 0 {
        Err(PeriodCountError::Empty)
    } else if len < *PERIOD_COUNT_RANGE.start() {
        Err(PeriodCountError::TooFew(len))
    } else if len > *PERIOD_COUNT_RANGE.end() {
        Err(PeriodCountError::TooMany(len))
    } else {
        Ok(())
    }
}
