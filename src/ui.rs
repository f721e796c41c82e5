use crate::app::{App, ScreenId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab strip
            Constraint::Min(3),    // Active screen
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);

    match app.screen {
        ScreenId::Picks => app.picks.render(frame, chunks[1]),
        ScreenId::Spots => app.spots.render(frame, chunks[1]),
        ScreenId::Types => app.types.render(frame, chunks[1]),
        ScreenId::Menu => app.menu.render(frame, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ScreenId::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(screen.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)));

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let selection = match app.screen {
        ScreenId::Picks => app.picks.selected_type().to_string(),
        ScreenId::Spots => app.spots.selected_spot().name.to_string(),
        ScreenId::Types => app
            .types
            .selected_country()
            .unwrap_or("no source")
            .to_string(),
        ScreenId::Menu => app.menu.selected_company().unwrap_or("no source").to_string(),
    };

    let status = Line::from(vec![
        Span::styled(" Screen: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.screen.title(), Style::default().fg(Color::Yellow)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(selection, Style::default().fg(Color::Cyan)),
        Span::styled(" | 1-4/tab:screen ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.hint(), Style::default().fg(Color::DarkGray)),
        Span::styled(" q:quit", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(status);
    frame.render_widget(paragraph, area);
}
