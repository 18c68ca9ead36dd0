pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod store;
pub mod time;
pub mod usecase;

pub use error::ActivityError;
pub use model::date::{days_in_month, CalendarDate};
pub use model::grid::GridCell;
pub use model::record::{ActivityRecord, MetricSelector, RawActivity};
pub use repository::{ActivitySource, FileActivitySource};
pub use service::score::score_level;
pub use store::ActivityStore;
pub use time::{current_year_month, month_long_name, parse_year_month};
pub use usecase::grid::{build_month_grid, overall_value};
pub use usecase::stats::{
    all_time_stats, month_stats, ActivityCriterion, StatsRequest, StatsSummary,
};
