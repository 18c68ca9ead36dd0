mod render;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fitgrid_core::{
    all_time_stats, build_month_grid, current_year_month, month_stats, parse_year_month,
    ActivityCriterion, ActivitySource, ActivityStore, FileActivitySource, MetricSelector,
    StatsRequest,
};

#[derive(Parser)]
#[command(name = "fitgrid")]
#[command(about = "A per-month activity heatmap for the terminal", long_about = None)]
struct Cli {
    /// Path to the activity JSON file (defaults to ~/.fitgrid/activity.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print one month's heatmap and stats (usage: show --month 2025-09)
    Show {
        /// Target month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
        /// Metric to colour by: a metric name, "overall" or "presence"
        #[arg(long, default_value = "presence")]
        metric: String,
        /// Count a day active only when this metric is positive
        #[arg(long)]
        active_metric: Option<String>,
    },
    /// Print all-time statistics
    Stats {
        /// Count a day active only when this metric is positive
        #[arg(long)]
        active_metric: Option<String>,
    },
    /// Open the interactive heatmap browser
    Tui {
        /// Count a day active only when this metric is positive
        #[arg(long)]
        active_metric: Option<String>,
    },
}

fn open_store(data: Option<PathBuf>) -> Result<ActivityStore> {
    let source = match data {
        Some(path) => FileActivitySource::at(path),
        None => FileActivitySource::new(None)?,
    };
    source.load()
}

fn parse_selector(metric: &str) -> MetricSelector {
    match metric {
        "presence" => MetricSelector::Presence,
        "overall" => MetricSelector::Overall,
        name => MetricSelector::Metric(name.to_string()),
    }
}

fn parse_criterion(store: &ActivityStore, active_metric: Option<String>) -> Result<ActivityCriterion> {
    match active_metric {
        Some(name) => {
            store.validate_metric(&name)?;
            Ok(ActivityCriterion::MetricPositive(name))
        }
        None => Ok(ActivityCriterion::AnyLogged),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = open_store(cli.data)?;

    match cli.command {
        Some(Commands::Show {
            month,
            metric,
            active_metric,
        }) => {
            let (year, month0) = match month {
                Some(input) => parse_year_month(&input)?,
                None => current_year_month(),
            };
            let selector = parse_selector(&metric);
            let cells = build_month_grid(year, month0, &store, &selector)?;
            render::print_month(year, month0, &cells);

            let presence = StatsRequest::Presence(parse_criterion(&store, active_metric)?);
            let month_active = month_stats(year, month0, &store, &presence)?;
            let all_time_active = all_time_stats(&store, &presence)?;
            render::print_active(&month_active, &all_time_active);

            if !store.metric_names().is_empty() {
                render::print_summary(
                    "This month",
                    &month_stats(year, month0, &store, &StatsRequest::Metrics)?,
                );
                render::print_summary("All time", &all_time_stats(&store, &StatsRequest::Metrics)?);
            }
        }
        Some(Commands::Stats { active_metric }) => {
            let presence = StatsRequest::Presence(parse_criterion(&store, active_metric)?);
            let all_time_active = all_time_stats(&store, &presence)?;
            render::print_all_time_active(&all_time_active);
            if !store.metric_names().is_empty() {
                render::print_summary("All time", &all_time_stats(&store, &StatsRequest::Metrics)?);
            }
        }
        Some(Commands::Tui { active_metric }) => {
            let criterion = parse_criterion(&store, active_metric)?;
            tui::run(store, criterion)?;
        }
        None => {
            tui::run(store, ActivityCriterion::AnyLogged)?;
        }
    }
    Ok(())
}
