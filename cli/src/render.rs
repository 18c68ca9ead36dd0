use chrono::Local;
use fitgrid_core::{month_long_name, CalendarDate, GridCell, StatsSummary};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

// 256-colour green scale, darkest (level 0) to brightest (level 4).
const LEVEL_COLORS: [u8; 5] = [236, 22, 28, 34, 40];

/// Prints the month heatmap to stdout with ANSI background colours.
/// Today's cell is underlined.
pub fn print_month(year: i32, month: u32, cells: &[GridCell]) {
    let today = CalendarDate::from_naive(Local::now().date_naive());

    println!("\n\x1b[1;36m{} {}\x1b[0m", month_long_name(month), year);
    println!("\x1b[90m Mo  Tu  We  Th  Fr  Sa  Su\x1b[0m");

    for week in cells.chunks(7) {
        for cell in week {
            print!("{}", format_cell(cell, today));
        }
        println!();
    }
}

/// One four-column cell: background colour from the score level, an
/// underline when the cell is today, blanks for padding.
fn format_cell(cell: &GridCell, today: CalendarDate) -> String {
    match (cell.day_of_month, cell.score_level) {
        (Some(day), Some(level)) => {
            let color = LEVEL_COLORS[level as usize % LEVEL_COLORS.len()];
            if cell.date == Some(today) {
                format!("\x1b[4;48;5;{}m {:>2} \x1b[0m", color, day)
            } else {
                format!("\x1b[48;5;{}m {:>2} \x1b[0m", color, day)
            }
        }
        _ => "    ".to_string(),
    }
}

pub fn print_active(month: &StatsSummary, all_time: &StatsSummary) {
    if let (
        StatsSummary::Presence {
            active_days: month_days,
        },
        StatsSummary::Presence {
            active_days: all_days,
        },
    ) = (month, all_time)
    {
        println!(
            "\nActive days: {} this month / {} all time",
            month_days, all_days
        );
    }
}

pub fn print_all_time_active(all_time: &StatsSummary) {
    if let StatsSummary::Presence { active_days } = all_time {
        println!("\nActive days all time: {}", active_days);
    }
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Average")]
    average: String,
}

/// Prints a metrics-mode summary as a table.
pub fn print_summary(label: &str, summary: &StatsSummary) {
    let StatsSummary::Metrics {
        avg_per_metric,
        avg_overall,
        total_days,
        perfect_days,
    } = summary
    else {
        return;
    };

    println!(
        "\n\x1b[1;36m{}\x1b[0m ({} logged days, {} perfect)",
        label, total_days, perfect_days
    );

    let mut rows: Vec<MetricRow> = avg_per_metric
        .iter()
        .map(|(name, avg)| MetricRow {
            metric: name.clone(),
            average: format!("{:.1}", avg),
        })
        .collect();
    rows.push(MetricRow {
        metric: "overall".to_string(),
        average: format!("{:.1}", avg_overall),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitgrid_core::{build_month_grid, ActivityStore, MetricSelector};

    #[test]
    fn test_format_cell_underlines_today_only() {
        let cells = build_month_grid(2025, 8, &ActivityStore::default(), &MetricSelector::Presence)
            .unwrap();
        let today = CalendarDate {
            year: 2025,
            month: 8,
            day: 12,
        };

        let twelfth = cells.iter().find(|c| c.day_of_month == Some(12)).unwrap();
        assert!(format_cell(twelfth, today).contains("\x1b[4;"));

        let thirteenth = cells.iter().find(|c| c.day_of_month == Some(13)).unwrap();
        assert!(!format_cell(thirteenth, today).contains("\x1b[4;"));
    }

    #[test]
    fn test_format_cell_renders_padding_as_blanks() {
        let cells = build_month_grid(2025, 8, &ActivityStore::default(), &MetricSelector::Presence)
            .unwrap();
        let today = CalendarDate {
            year: 2025,
            month: 8,
            day: 1,
        };
        let padding = cells.iter().find(|c| c.is_padding).unwrap();
        assert_eq!(format_cell(padding, today), "    ");
    }
}
