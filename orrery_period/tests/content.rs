// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading period records from content files.

#![cfg(feature = "serde")]

use orrery_period::{TimelineEvent, TimelinePeriod};

#[test]
fn loads_camel_case_content() {
    let json = r#"[
        {
            "id": 1,
            "name": "Science",
            "startYear": 2015,
            "endYear": 2022,
            "events": [
                { "id": 10, "year": 2015, "title": "Eclipse", "description": "Partial solar eclipse." }
            ]
        },
        { "id": 2, "name": "Cinema", "startYear": 1987, "endYear": 1991 }
    ]"#;

    let periods: Vec<TimelinePeriod> = serde_json::from_str(json).unwrap();
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].year_span(), (2015, 2022));
    assert_eq!(
        periods[0].events,
        [TimelineEvent::new(10, 2015, "Eclipse", "Partial solar eclipse.")]
    );
    assert!(periods[1].events.is_empty(), "missing events default to empty");
}

#[test]
fn writes_camel_case_fields() {
    let period = TimelinePeriod::new(3, "Sport", 2000, 2004);
    let value = serde_json::to_value(&period).unwrap();
    assert_eq!(value["startYear"], 2000);
    assert_eq!(value["endYear"], 2004);
}
