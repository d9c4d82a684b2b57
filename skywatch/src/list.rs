//! One-shot listing.
//!
//! Fetch the feed once and format what is in range, either as a table or as JSON.  Unlike the
//! full-screen display, a failed fetch is an error here.
//!

use eyre::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{info, trace};

use skywatch_formats::TrackedAircraft;
use skywatch_sources::{Fetchable, OwnerRegistry, Reference};

use crate::display::COLUMNS;
use crate::tracker::sort_by_distance;

/// Fetch from `src` and return the formatted result.
///
#[tracing::instrument(skip(src, registry))]
pub fn list_aircraft(
    src: &dyn Fetchable,
    registry: &OwnerRegistry,
    reference: &Reference,
    proximity: f64,
    json: bool,
) -> Result<String> {
    trace!("list from {}", src.name());

    let mut list = src.fetch(registry, reference)?;
    sort_by_distance(&mut list);
    info!("{} aircraft in range", list.len());

    if json {
        Ok(serde_json::to_string_pretty(&list)?)
    } else {
        Ok(table(&list, proximity, reference.home.to_string()))
    }
}

/// Text table with the same columns as the display.
///
fn table(list: &[TrackedAircraft], proximity: f64, home: String) -> String {
    let mut builder = Builder::default();
    builder.push_record(COLUMNS.map(|(label, _)| label));

    list.iter().for_each(|ac| {
        let alert = if ac.distance <= proximity { "YES" } else { "" };
        let row: [&str; 9] = [
            &ac.flight,
            ac.hex(),
            &ac.altitude,
            &ac.speed,
            &ac.distance_display,
            &ac.owner,
            &ac.heading,
            &ac.direction,
            alert,
        ];
        builder.push_record(row);
    });

    let table = builder.build().with(Style::modern()).to_string();
    format!("{} aircraft around {home}:\n{table}", list.len())
}
