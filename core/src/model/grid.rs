use serde::{Deserialize, Serialize};

use crate::model::date::CalendarDate;
use crate::model::record::ActivityRecord;

/// One position in a rendered month grid. Padding cells align the
/// first day of the month to its weekday column and carry no data.
/// Cells are created fresh per build call and are immutable after.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub date: Option<CalendarDate>,
    pub day_of_month: Option<u32>,
    pub is_padding: bool,
    pub record: Option<ActivityRecord>,
    pub score_level: Option<u8>,
}

impl GridCell {
    pub fn padding() -> Self {
        Self {
            date: None,
            day_of_month: None,
            is_padding: true,
            record: None,
            score_level: None,
        }
    }

    pub fn day(date: CalendarDate, record: Option<ActivityRecord>, score_level: u8) -> Self {
        Self {
            date: Some(date),
            day_of_month: Some(date.day),
            is_padding: false,
            record,
            score_level: Some(score_level),
        }
    }
}
