mod menu;
mod picks;
mod spots;
mod types_chart;

pub use menu::{MenuScreen, MAX_TOP_N, MIN_TOP_N};
pub use picks::PicksScreen;
pub use spots::SpotsScreen;
pub use types_chart::TypesScreen;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Centered single-line notice, used for "no source" and "no data" states
pub(crate) fn render_message(frame: &mut Frame, area: Rect, msg: &str, color: Color) {
    let paragraph = Paragraph::new(Span::styled(msg, Style::default().fg(color)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();
    frame.render_widget(paragraph, area);
}
