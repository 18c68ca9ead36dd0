pub mod app;
pub mod ui;

use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use fitgrid_core::{ActivityCriterion, ActivityStore};

use crate::tui::app::App;

pub fn run(store: ActivityStore, criterion: ActivityCriterion) -> Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, criterion);

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('h') => app.previous_month(),
                        KeyCode::Char('l') => app.next_month(),
                        KeyCode::Left => app.move_cursor(-1),
                        KeyCode::Right => app.move_cursor(1),
                        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-7),
                        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(7),
                        KeyCode::Char('m') | KeyCode::Tab => app.cycle_metric(),
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
