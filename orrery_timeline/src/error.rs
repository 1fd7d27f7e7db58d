// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use orrery_period::PeriodCountError;

/// Why a timeline declined to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineError {
    /// The period sequence is empty or outside the presentable range.
    PeriodCount(PeriodCountError),
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeriodCount(err) => write!(f, "cannot present timeline: {err}"),
        }
    }
}

impl core::error::Error for TimelineError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::PeriodCount(err) => Some(err),
        }
    }
}

impl From<PeriodCountError> for TimelineError {
    fn from(err: PeriodCountError) -> Self {
        Self::PeriodCount(err)
    }
}
