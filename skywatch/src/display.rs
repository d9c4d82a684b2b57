//! Display renderer.
//!
//! The screen has a fixed layout:
//!
//! ```text
//! +--------------------------------------------------------------+
//! | Skywatch ADS-B Tracker                                        |
//! | Last Update: 2024-09-27 14:33:15                              |
//! +--------------------------------------------------------------+
//! | Flight     | Hex      | Altitude   | Speed      | ...        |
//! +--------------------------------------------------------------+
//! | UAL123     | A1B2C3   | 35000      | 279.6 mph  | ...        |
//! ...
//! +--------------------------------------------------------------+
//! Total Unique Aircraft Tracked: 42
//! ```
//!
//! Eight lines are used by the header and footer, the rest is for aircraft.  Nothing is ever
//! wrapped: lines are cut at the terminal width and rows that do not fit are not drawn.
//!

use chrono::{DateTime, Local};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use thiserror::Error;
use tracing::trace;

use skywatch_formats::TrackedAircraft;

use crate::tracker::Tracker;

/// Title line
const TITLE: &str = "| Skywatch ADS-B Tracker";

/// Lines used by the header and footer
const RESERVED: usize = 8;

/// First line used by aircraft
const FIRST_ROW: u16 = 6;

/// Column labels and widths
pub const COLUMNS: [(&str, usize); 9] = [
    ("Flight", 10),
    ("Hex", 8),
    ("Altitude", 10),
    ("Speed", 10),
    ("Distance", 10),
    ("Owner", 30),
    ("Heading", 8),
    ("Direction", 10),
    ("Alert", 8),
];

/// Drawing outside of the viewport
///
#[derive(Debug, Error, PartialEq)]
pub enum DisplayError {
    #[error("line {0} is outside of the viewport")]
    OutOfBounds(u16),
}

/// Number of aircraft rows for a terminal of `height` lines, at least one.
///
#[inline]
pub fn max_rows(height: u16) -> usize {
    (height as usize).saturating_sub(RESERVED).max(1)
}

/// Pad or cut `s` to exactly `width` characters.
///
#[inline]
fn fit(s: &str, width: usize) -> String {
    format!("{:<width$.width$}", s, width = width)
}

/// Build a table line from one value per column.
///
fn table_line(fields: [&str; 9]) -> String {
    let cells: Vec<String> = fields
        .iter()
        .zip(COLUMNS.iter())
        .map(|(f, (_, w))| fit(f, *w))
        .collect();
    format!("| {} |", cells.join(" | "))
}

/// `+----+` spanning the whole width
///
fn border(width: u16) -> String {
    format!("+{}+", "-".repeat((width as usize).saturating_sub(2)))
}

/// Left-justify `s` and close the box at the last column
///
fn boxed(s: &str, width: u16) -> String {
    let inner = (width as usize).saturating_sub(1);
    format!("{:<inner$}|", s, inner = inner)
}

/// Everything needed to draw one screen.
///
#[derive(Debug)]
pub struct Board<'a> {
    /// Aircraft, closest first
    pub aircraft: &'a [TrackedAircraft],
    /// Aircraft to emphasize
    pub alerts: &'a [TrackedAircraft],
    /// Number of unique aircraft since start
    pub seen: usize,
    /// Time displayed in the header
    pub now: DateTime<Local>,
}

impl<'a> Board<'a> {
    pub fn new(tracker: &'a Tracker, now: DateTime<Local>) -> Self {
        Board {
            aircraft: tracker.aircraft(),
            alerts: tracker.alerts(),
            seen: tracker.seen(),
            now,
        }
    }

    /// Write one line at `row`, cut at the viewport width.
    ///
    fn put(
        area: Rect,
        buf: &mut Buffer,
        row: u16,
        text: &str,
        style: Style,
    ) -> Result<(), DisplayError> {
        if row >= area.height || area.width == 0 {
            return Err(DisplayError::OutOfBounds(row));
        }
        buf.set_stringn(area.x, area.y + row, text, area.width as usize, style);
        Ok(())
    }

    fn row(&self, ac: &TrackedAircraft) -> (String, Style) {
        let alert = self.alerts.contains(ac);
        let line = table_line([
            &ac.flight,
            ac.hex(),
            &ac.altitude,
            &ac.speed,
            &ac.distance_display,
            &ac.owner,
            &ac.heading,
            &ac.direction,
            if alert { "YES" } else { "" },
        ]);
        let style = if alert {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        (line, style)
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) -> Result<(), DisplayError> {
        let plain = Style::default();
        let width = area.width;

        // Header
        //
        let update = format!("| Last Update: {}", self.now.format("%Y-%m-%d %H:%M:%S"));
        let labels = COLUMNS.map(|(label, _)| label);

        Self::put(area, buf, 0, &border(width), plain)?;
        Self::put(area, buf, 1, &boxed(TITLE, width), plain)?;
        Self::put(area, buf, 2, &boxed(&update, width), plain)?;
        Self::put(area, buf, 3, &border(width), plain)?;
        Self::put(area, buf, 4, &table_line(labels), plain)?;
        Self::put(area, buf, 5, &border(width), plain)?;

        // Aircraft, stop at the first line we can not draw
        //
        let mut row = FIRST_ROW;
        for ac in self.aircraft.iter().take(max_rows(area.height)) {
            let (line, style) = self.row(ac);
            if let Err(e) = Self::put(area, buf, row, &line, style) {
                trace!("rows clipped: {e}");
                break;
            }
            row += 1;
        }

        // Footer
        //
        Self::put(area, buf, row, &border(width), plain)?;
        let total = format!("Total Unique Aircraft Tracked: {}", self.seen);
        Self::put(area, buf, row + 1, &total, plain)
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Err(e) = self.draw(area, buf) {
            trace!("display clipped: {e}");
        }
    }
}
