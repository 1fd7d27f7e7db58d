// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

/// A single dated fact belonging to exactly one [`TimelinePeriod`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineEvent {
    /// Identifier, unique across all events of a timeline.
    pub id: u32,
    /// Year the event happened.
    pub year: i32,
    /// Short heading.
    pub title: String,
    /// Body text shown on the event card.
    pub description: String,
}

impl TimelineEvent {
    /// Creates an event record.
    #[must_use]
    pub fn new(
        id: u32,
        year: i32,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            year,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A named span of years with its ordered events.
///
/// `start_year <= end_year` is expected but not checked; that is a content
/// concern of whoever supplies the records.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TimelinePeriod {
    /// Identifier, unique across the periods of a timeline.
    pub id: u32,
    /// Display name, shown as the ring label for the active period.
    pub name: String,
    /// First year covered by the period.
    pub start_year: i32,
    /// Last year covered by the period.
    pub end_year: i32,
    /// Events in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<TimelineEvent>,
}

impl TimelinePeriod {
    /// Creates a period with no events.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            id,
            name: name.into(),
            start_year,
            end_year,
            events: Vec::new(),
        }
    }

    /// Replaces the events of this period, keeping their order.
    #[must_use]
    pub fn with_events<I>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = TimelineEvent>,
    {
        self.events = events.into_iter().collect();
        self
    }

    /// Returns `(start_year, end_year)`, the pair a years display shows.
    #[must_use]
    pub fn year_span(&self) -> (i32, i32) {
        (self.start_year, self.end_year)
    }

    /// Returns `true` if `year` falls within `start_year..=end_year`.
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}
