use crate::data::{Spot, HAN_RIVER, SPOTS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, List, ListItem, ListState, Paragraph, Wrap,
    },
    Frame,
};

/// Fixed geographic markers on a city map with a selectable detail panel
pub struct SpotsScreen {
    pub selected: usize,
}

impl SpotsScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SPOTS.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + SPOTS.len() - 1) % SPOTS.len();
    }

    pub fn selected_spot(&self) -> &'static Spot {
        &SPOTS[self.selected]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.render_map(frame, chunks[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(8)])
            .split(chunks[1]);

        self.render_list(frame, right[0]);
        self.render_detail(frame, right[1]);
    }

    fn render_map(&self, frame: &mut Frame, area: Rect) {
        let ((min_lon, max_lon), (min_lat, max_lat)) = map_bounds();
        let selected = self.selected;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Seoul Top 10 ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
            )
            .marker(Marker::Braille)
            .x_bounds([min_lon, max_lon])
            .y_bounds([min_lat, max_lat])
            .paint(move |ctx| {
                // River first, markers on top
                for pair in HAN_RIVER.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].0,
                        y1: pair[0].1,
                        x2: pair[1].0,
                        y2: pair[1].1,
                        color: Color::Blue,
                    });
                }

                ctx.layer();

                for (i, spot) in SPOTS.iter().enumerate() {
                    let (glyph, style) = if i == selected {
                        (
                            "◆",
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        ("●", Style::default().fg(Color::Cyan))
                    };
                    ctx.print(spot.lon, spot.lat, Span::styled(glyph, style));
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = SPOTS.iter().map(|s| ListItem::new(s.name)).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Spots ",
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
        let spot = self.selected_spot();
        let lines = vec![
            Line::from(Span::styled(
                spot.name,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "{:.4}N {:.4}E",
                spot.lat, spot.lon
            )),
            Line::default(),
            Line::from(spot.desc),
            Line::from(Span::styled(
                format!("More: {}", spot.link),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// Marker bounding box padded so no spot sits on the border
fn map_bounds() -> ((f64, f64), (f64, f64)) {
    let mut min_lon = f64::MAX;
    let mut max_lon = f64::MIN;
    let mut min_lat = f64::MAX;
    let mut max_lat = f64::MIN;
    for spot in &SPOTS {
        min_lon = min_lon.min(spot.lon);
        max_lon = max_lon.max(spot.lon);
        min_lat = min_lat.min(spot.lat);
        max_lat = max_lat.max(spot.lat);
    }
    let pad_lon = (max_lon - min_lon) * 0.12;
    let pad_lat = (max_lat - min_lat) * 0.12;
    (
        (min_lon - pad_lon, max_lon + pad_lon),
        (min_lat - pad_lat, max_lat + pad_lat),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contain_every_spot() {
        let ((min_lon, max_lon), (min_lat, max_lat)) = map_bounds();
        for spot in &SPOTS {
            assert!(spot.lon > min_lon && spot.lon < max_lon);
            assert!(spot.lat > min_lat && spot.lat < max_lat);
        }
    }

    #[test]
    fn test_selection_wraps() {
        let mut screen = SpotsScreen::new();
        screen.select_prev();
        assert_eq!(screen.selected, SPOTS.len() - 1);
        screen.select_next();
        assert_eq!(screen.selected, 0);
    }
}
