// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline walkthrough.
//!
//! Load the bundled periods, mount a timeline, and print a text frame for
//! each gesture that changes it.
//!
//! Run:
//! - `cargo run -p orrery_demos --example timeline_text`

use orrery_demos::{TextAdapter, sample_periods};
use orrery_timeline::{TimelineConfig, TimelineInput, mount};

fn main() {
    let periods = match sample_periods() {
        Ok(periods) => periods,
        Err(err) => {
            eprintln!("failed to load sample periods: {err}");
            return;
        }
    };

    let mut adapter = TextAdapter::default();
    let Some(mut timeline) = mount(&periods, TimelineConfig::default(), &mut adapter) else {
        for diagnostic in &adapter.diagnostics {
            eprintln!("{diagnostic}");
        }
        return;
    };

    for input in [
        TimelineInput::SlideNext,
        TimelineInput::Next,
        TimelineInput::Next,
        TimelineInput::Select(9), // ignored
        TimelineInput::Resize(700.0),
        TimelineInput::SlideNext,
        TimelineInput::Select(0),
        TimelineInput::Prev, // already first
    ] {
        if !timeline.handle(input, &mut adapter) {
            println!("{input:?}: no change\n");
            continue;
        }
        println!("{input:?}:");
    }

    for frame in &adapter.frames {
        println!("{frame}");
    }

    // A single period is not a timeline.
    let mut declined = TextAdapter::default();
    let _ = mount(&periods[..1], TimelineConfig::default(), &mut declined);
    for diagnostic in &declined.diagnostics {
        eprintln!("{diagnostic}");
    }
}
