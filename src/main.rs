use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tui_deck::app::{App, ScreenId};
use tui_deck::{data, ui};

fn main() -> Result<()> {
    // Warm the dataset handles before the TUI owns the terminal so load
    // warnings stay visible on stderr; the screens repeat them in-place
    if let Err(e) = data::country_types_long() {
        eprintln!("Warning: {e}");
    }
    if let Err(e) = data::menu() {
        eprintln!("Warning: {e}");
    }

    let mut terminal = ratatui::init();
    terminal.clear()?;

    let result = run(&mut terminal);

    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal) -> Result<()> {
    let mut app = App::new();

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

                        // Screen switching
                        KeyCode::Char('1') => app.set_screen(ScreenId::Picks),
                        KeyCode::Char('2') => app.set_screen(ScreenId::Spots),
                        KeyCode::Char('3') => app.set_screen(ScreenId::Types),
                        KeyCode::Char('4') => app.set_screen(ScreenId::Menu),
                        KeyCode::Tab => app.next_screen(),

                        // Selection with jk or arrow keys
                        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                        KeyCode::Down | KeyCode::Char('j') => app.select_next(),

                        // Top-N size on the Menu screen
                        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_top_n(1),
                        KeyCode::Char('-') | KeyCode::Char('_') => app.adjust_top_n(-1),

                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
