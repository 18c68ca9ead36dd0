use crate::error::ActivityError;
use crate::model::date::{days_in_month, CalendarDate};
use crate::model::grid::GridCell;
use crate::model::record::{ActivityRecord, MetricSelector};
use crate::service::score::score_level;
use crate::store::ActivityStore;

pub const GRID_COLUMNS: usize = 7;

/// Builds the render-ready cell sequence for one month.
///
/// The result is always a multiple of 7 cells long: leading padding
/// aligns day 1 to its Monday-first weekday column, trailing padding
/// fills the last row. A cell's label, lookup key and date all refer
/// to the same calendar date.
pub fn build_month_grid(
    year: i32,
    month: u32,
    store: &ActivityStore,
    metric: &MetricSelector,
) -> Result<Vec<GridCell>, ActivityError> {
    if month > 11 {
        return Err(ActivityError::InvalidMonth(month));
    }
    if let MetricSelector::Metric(name) = metric {
        store.validate_metric(name)?;
    }

    let Some(days) = days_in_month(year, month) else {
        // Year outside the representable calendar range.
        return Err(ActivityError::MalformedDate(format!(
            "{:04}-{:02}-01",
            year,
            month + 1
        )));
    };
    let days = days as i64;
    let first = CalendarDate { year, month, day: 1 };
    let leading_blanks = (first.weekday_monday_first() - 1) as usize;
    let total_cells = (leading_blanks + days as usize).div_ceil(GRID_COLUMNS) * GRID_COLUMNS;

    let mut cells = Vec::with_capacity(total_cells);
    for i in 0..total_cells {
        let day = i as i64 - leading_blanks as i64 + 1;
        if day < 1 || day > days {
            cells.push(GridCell::padding());
            continue;
        }
        let date = CalendarDate {
            year,
            month,
            day: day as u32,
        };
        let record = store.lookup(&date).cloned();
        let level = resolve_level(record.as_ref(), metric);
        cells.push(GridCell::day(date, record, level));
    }
    Ok(cells)
}

fn resolve_level(record: Option<&ActivityRecord>, metric: &MetricSelector) -> u8 {
    match metric {
        MetricSelector::Presence => {
            if record.is_some() {
                4
            } else {
                0
            }
        }
        MetricSelector::Metric(name) => {
            score_level(record.and_then(|r| r.metric(name)).unwrap_or(0))
        }
        MetricSelector::Overall => score_level(record.map(overall_value).unwrap_or(0)),
    }
}

/// Round-half-up mean of the record's own metrics; 0 when it has none.
/// Integer arithmetic keeps the rounding reproducible.
pub fn overall_value(record: &ActivityRecord) -> u8 {
    match record {
        ActivityRecord::Presence => 0,
        ActivityRecord::Metrics(metrics) => {
            if metrics.is_empty() {
                return 0;
            }
            let sum: u32 = metrics.values().map(|&v| u32::from(v)).sum();
            let n = metrics.len() as u32;
            ((2 * sum + n) / (2 * n)) as u8
        }
    }
}
