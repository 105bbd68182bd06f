//! Side-by-side text rendering of two day grids.
//!
//! One rendered line per grid slot, two columns. A column whose fetch
//! failed shows its error message in place of a grid; the sibling column is
//! unaffected.

use chrono::NaiveDate;

use daypair_core::{
    CalendarEvent, FIRST_HOUR, HourSlot, SLOT_COUNT, build_slots, date_string,
    format_display_date, format_hour,
};

/// Width of one rendered column, in characters.
pub const COLUMN_WIDTH: usize = 34;

/// One side of the day view: a calendar's grid, or its fetch failure.
#[derive(Debug, Clone)]
pub struct SideView {
    /// Column heading (the calendar id or name).
    pub title: String,
    /// The built grid, or the failure message to display.
    pub outcome: Result<Vec<HourSlot>, String>,
}

impl SideView {
    /// Builds the grid for a successfully fetched calendar.
    pub fn grid(title: impl Into<String>, date: NaiveDate, events: &[CalendarEvent]) -> Self {
        Self {
            title: title.into(),
            outcome: Ok(build_slots(date, events)),
        }
    }

    /// A column standing in for a failed fetch.
    pub fn failed(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outcome: Err(message.into()),
        }
    }
}

/// Renders the full day view: header, column titles, 18 slot rows.
///
/// `current_hour` marks a row with `▸`; pass it only when the displayed
/// date is today.
pub fn render_day(
    date: NaiveDate,
    current_hour: Option<u32>,
    left: &SideView,
    right: &SideView,
) -> String {
    let left_cells = column_cells(left);
    let right_cells = column_cells(right);

    let mut out = String::new();
    out.push_str(&format!(
        "{} ({})\n\n",
        format_display_date(date),
        date_string(date)
    ));

    push_row(
        &mut out,
        ' ',
        "",
        &truncate(&left.title, COLUMN_WIDTH),
        &truncate(&right.title, COLUMN_WIDTH),
    );

    for (i, (left_cell, right_cell)) in left_cells.iter().zip(&right_cells).enumerate() {
        let hour = FIRST_HOUR + i as u32;
        let marker = if current_hour == Some(hour) { '▸' } else { ' ' };
        push_row(&mut out, marker, &format_hour(hour), left_cell, right_cell);
    }

    out
}

/// Appends one aligned row, trimming trailing padding.
fn push_row(out: &mut String, marker: char, label: &str, left: &str, right: &str) {
    let line = format!(
        "{} {:>5}  {:<width$}  {}",
        marker,
        label,
        left,
        right,
        width = COLUMN_WIDTH
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

/// The 18 cells of one column.
fn column_cells(view: &SideView) -> Vec<String> {
    match &view.outcome {
        Ok(slots) => slots.iter().map(cell).collect(),
        Err(message) => {
            let mut cells = vec![truncate(&format!("unavailable: {message}"), COLUMN_WIDTH)];
            cells.resize(SLOT_COUNT, String::new());
            cells
        }
    }
}

/// One slot cell: the overlapping titles, or a free marker.
fn cell(slot: &HourSlot) -> String {
    if slot.busy {
        let titles: Vec<&str> = slot.events.iter().map(|e| e.title.as_str()).collect();
        truncate(&titles.join(", "), COLUMN_WIDTH)
    } else {
        "·".to_string()
    }
}

/// Truncates to `width` characters, ending with an ellipsis when cut.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
