use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use fitgrid_core::{month_long_name, overall_value, ActivityRecord, MetricSelector, StatsSummary};

use crate::tui::app::App;

// GitHub-style green scale, level 0 (dark) to level 4 (bright).
const LEVEL_COLORS: [Color; 5] = [
    Color::Rgb(33, 38, 45),
    Color::Rgb(14, 68, 41),
    Color::Rgb(0, 109, 50),
    Color::Rgb(38, 166, 65),
    Color::Rgb(57, 211, 83),
];

pub fn draw(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let title = match app.position() {
        Some((year, month)) => format!(
            "FITGRID  {} {}  [{}]",
            month_long_name(month),
            year,
            selector_label(app.selector())
        ),
        None => "FITGRID  (no data)".to_string(),
    };
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[1]);

    draw_grid(f, app, content_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(1)])
        .split(content_chunks[1]);

    draw_detail(f, app, right_chunks[0]);
    draw_stats(f, app, right_chunks[1]);

    let footer = Paragraph::new("h/l: Month | Arrows: Day | m: Metric | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn selector_label(selector: &MetricSelector) -> &str {
    match selector {
        MetricSelector::Presence => "presence",
        MetricSelector::Overall => "overall",
        MetricSelector::Metric(name) => name.as_str(),
    }
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Mo  Tu  We  Th  Fr  Sa  Su",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for week in app.cells.chunks(7) {
        let mut spans = Vec::new();
        for cell in week {
            match (cell.day_of_month, cell.score_level) {
                (Some(day), Some(level)) => {
                    let mut style = Style::default()
                        .bg(LEVEL_COLORS[level as usize % LEVEL_COLORS.len()])
                        .fg(Color::White);
                    if day == app.cursor_day {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    spans.push(Span::styled(format!(" {:>2} ", day), style));
                }
                _ => spans.push(Span::raw("    ")),
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Heatmap ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn draw_detail(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(cell) = app.selected_cell() {
        if let Some(date) = cell.date {
            lines.push(Line::from(Span::styled(
                date.to_naive().format("%a, %b %-d, %Y").to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }
        match &cell.record {
            None => lines.push(Line::from(Span::styled(
                "No activity",
                Style::default().fg(Color::DarkGray),
            ))),
            Some(ActivityRecord::Presence) => lines.push(Line::from(Span::styled(
                "Logged ✔",
                Style::default().fg(Color::Green),
            ))),
            Some(record @ ActivityRecord::Metrics(metrics)) => {
                for (name, value) in metrics {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{}: ", name), Style::default().fg(Color::Blue)),
                        Span::raw(format!("{}/10", value)),
                    ]));
                }
                lines.push(Line::from(vec![
                    Span::styled("overall: ", Style::default().fg(Color::Blue)),
                    Span::raw(format!("{}/10", overall_value(record))),
                ]));
            }
        }
    } else {
        lines.push(Line::from(Span::styled(
            "No day selected",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let detail = Paragraph::new(lines).block(
        Block::default()
            .title(" Day ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(detail, area);
}

fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Overview",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Active this month: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.month_active.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Active all time:   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.all_time_active.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    push_metrics_lines(&mut lines, "This month", app.month_metrics.as_ref());
    push_metrics_lines(&mut lines, "All time", app.all_time_metrics.as_ref());

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stats, area);
}

fn push_metrics_lines(lines: &mut Vec<Line>, label: &str, summary: Option<&StatsSummary>) {
    let Some(StatsSummary::Metrics {
        avg_per_metric,
        avg_overall,
        total_days,
        perfect_days,
    }) = summary
    else {
        return;
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} ({} days, {} perfect)", label, total_days, perfect_days),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (name, avg) in avg_per_metric {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", name), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.1}", avg)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("overall: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{:.1}", avg_overall)),
    ]));
}
