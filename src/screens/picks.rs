use crate::data::{self, MBTI_TYPES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Static recommendation lists keyed by a 16-way type selector
pub struct PicksScreen {
    pub selected: usize,
}

impl PicksScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MBTI_TYPES.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + MBTI_TYPES.len() - 1) % MBTI_TYPES.len();
    }

    pub fn selected_type(&self) -> &'static str {
        MBTI_TYPES[self.selected]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(20)])
            .split(area);

        self.render_selector(frame, chunks[0]);
        self.render_detail(frame, chunks[1]);
    }

    fn render_selector(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = MBTI_TYPES.iter().map(|t| ListItem::new(*t)).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Type ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
            )
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let mbti = self.selected_type();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" Picks for {mbti} "),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));

        let lines = match data::recommendation_for(mbti) {
            Some(rec) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Books",
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    )),
                ];
                for book in rec.books {
                    lines.push(Line::from(format!("  - {book}")));
                }
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Films",
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                )));
                for film in rec.films {
                    lines.push(Line::from(format!("  - {film}")));
                }
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Two books and two films matched to your type.",
                    Style::default().fg(Color::DarkGray),
                )));
                lines
            }
            None => vec![
                Line::default(),
                Line::from(Span::styled(
                    format!("The {mbti} list is still being prepared."),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    "Check back soon!",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        };

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
