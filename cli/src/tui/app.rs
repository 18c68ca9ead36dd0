use fitgrid_core::{
    all_time_stats, build_month_grid, current_year_month, month_stats, ActivityCriterion,
    ActivityStore, GridCell, MetricSelector, StatsRequest, StatsSummary,
};

pub struct App {
    pub store: ActivityStore,
    pub criterion: ActivityCriterion,
    /// Every (year, 0-based month) with data, oldest first.
    pub positions: Vec<(i32, u32)>,
    pub position_index: usize,
    pub selectors: Vec<MetricSelector>,
    pub selector_index: usize,
    pub cells: Vec<GridCell>,
    pub cursor_day: u32,
    pub month_active: usize,
    pub all_time_active: usize,
    pub month_metrics: Option<StatsSummary>,
    pub all_time_metrics: Option<StatsSummary>,
}

impl App {
    pub fn new(store: ActivityStore, criterion: ActivityCriterion) -> App {
        let mut positions = Vec::new();
        let mut years = store.available_years();
        years.reverse();
        for year in years {
            for month in store.available_months(year) {
                positions.push((year, month));
            }
        }

        let mut selectors = vec![MetricSelector::Presence];
        let names = store.metric_names();
        if !names.is_empty() {
            selectors.push(MetricSelector::Overall);
            selectors.extend(names.into_iter().map(MetricSelector::Metric));
        }

        // Boot on today's month when it has data, else the newest one.
        let today = current_year_month();
        let position_index = positions
            .iter()
            .position(|&p| p == today)
            .unwrap_or(positions.len().saturating_sub(1));

        let mut app = App {
            store,
            criterion,
            positions,
            position_index,
            selectors,
            selector_index: 0,
            cells: Vec::new(),
            cursor_day: 1,
            month_active: 0,
            all_time_active: 0,
            month_metrics: None,
            all_time_metrics: None,
        };
        app.rebuild();
        app
    }

    pub fn position(&self) -> Option<(i32, u32)> {
        self.positions.get(self.position_index).copied()
    }

    pub fn selector(&self) -> &MetricSelector {
        &self.selectors[self.selector_index]
    }

    pub fn next_month(&mut self) {
        if !self.positions.is_empty() && self.position_index < self.positions.len() - 1 {
            self.position_index += 1;
            self.rebuild();
        }
    }

    pub fn previous_month(&mut self) {
        if self.position_index > 0 {
            self.position_index -= 1;
            self.rebuild();
        }
    }

    pub fn cycle_metric(&mut self) {
        self.selector_index = (self.selector_index + 1) % self.selectors.len();
        self.rebuild();
    }

    pub fn move_cursor(&mut self, delta: i64) {
        let days = self.cells.iter().filter(|c| !c.is_padding).count() as i64;
        if days == 0 {
            return;
        }
        self.cursor_day = (i64::from(self.cursor_day) + delta).clamp(1, days) as u32;
    }

    pub fn selected_cell(&self) -> Option<&GridCell> {
        self.cells
            .iter()
            .find(|c| c.day_of_month == Some(self.cursor_day))
    }

    /// Recomputes the grid and both summaries from the store. Nothing
    /// is cached across calls; the inputs all come from the store's
    /// own inventory and schema, so the core calls cannot fail.
    pub fn rebuild(&mut self) {
        let presence = StatsRequest::Presence(self.criterion.clone());
        let has_metrics = !self.store.metric_names().is_empty();

        if let Ok(StatsSummary::Presence { active_days }) = all_time_stats(&self.store, &presence)
        {
            self.all_time_active = active_days;
        }
        self.all_time_metrics = if has_metrics {
            all_time_stats(&self.store, &StatsRequest::Metrics).ok()
        } else {
            None
        };

        let Some((year, month)) = self.position() else {
            self.cells.clear();
            self.month_active = 0;
            self.month_metrics = None;
            return;
        };

        let selector = self.selector().clone();
        self.cells = build_month_grid(year, month, &self.store, &selector).unwrap_or_default();
        if let Ok(StatsSummary::Presence { active_days }) =
            month_stats(year, month, &self.store, &presence)
        {
            self.month_active = active_days;
        }
        self.month_metrics = if has_metrics {
            month_stats(year, month, &self.store, &StatsRequest::Metrics).ok()
        } else {
            None
        };

        // Clamp the cursor into the (possibly shorter) new month.
        self.move_cursor(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitgrid_core::RawActivity;
    use std::collections::HashMap;

    fn store(keys: &[&str]) -> ActivityStore {
        let raw: HashMap<String, RawActivity> = keys
            .iter()
            .map(|k| (k.to_string(), RawActivity::Logged(true)))
            .collect();
        ActivityStore::from_raw(raw).unwrap()
    }

    #[test]
    fn test_positions_are_oldest_first() {
        let app = App::new(
            store(&["2025-11-02", "2024-03-01", "2025-09-12"]),
            ActivityCriterion::AnyLogged,
        );
        assert_eq!(app.positions, vec![(2024, 2), (2025, 8), (2025, 10)]);
    }

    #[test]
    fn test_month_navigation_rebuilds_grid_and_stats() {
        let mut app = App::new(
            store(&["2025-09-12", "2025-09-14", "2025-10-10"]),
            ActivityCriterion::AnyLogged,
        );
        app.position_index = 0;
        app.rebuild();
        assert_eq!(app.month_active, 2);
        assert_eq!(app.all_time_active, 3);

        app.next_month();
        assert_eq!(app.position(), Some((2025, 9)));
        assert_eq!(app.month_active, 1);

        app.next_month(); // already at the newest month
        assert_eq!(app.position(), Some((2025, 9)));
        app.previous_month();
        assert_eq!(app.position(), Some((2025, 8)));
    }

    #[test]
    fn test_cursor_stays_inside_the_month() {
        let mut app = App::new(store(&["2025-09-12"]), ActivityCriterion::AnyLogged);
        app.cursor_day = 29;
        app.move_cursor(7);
        assert_eq!(app.cursor_day, 30); // September has 30 days
        app.move_cursor(-60);
        assert_eq!(app.cursor_day, 1);
    }

    #[test]
    fn test_empty_store_has_no_positions_and_zero_stats() {
        let app = App::new(ActivityStore::default(), ActivityCriterion::AnyLogged);
        assert!(app.positions.is_empty());
        assert!(app.cells.is_empty());
        assert_eq!(app.month_active, 0);
        assert_eq!(app.all_time_active, 0);
        assert!(app.selected_cell().is_none());
    }

    #[test]
    fn test_presence_only_store_offers_no_metric_selectors() {
        let app = App::new(store(&["2025-09-12"]), ActivityCriterion::AnyLogged);
        assert_eq!(app.selectors, vec![MetricSelector::Presence]);
    }
}
