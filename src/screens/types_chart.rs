use crate::data;
use crate::rank::{assign_rank_colors, select_top_n, RankedSubset, Rgba};
use crate::screens::render_message;
use crate::table::Dataset;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Gold for the leading type, steel blue fading out for the rest
const HIGHLIGHT: Rgba = Rgba::opaque(255, 215, 0);
const BASE: Rgba = Rgba::opaque(70, 130, 180);
const MIN_ALPHA: f64 = 0.15;

/// Bar chart of the 16 type shares for a selected country
pub struct TypesScreen {
    data: Option<&'static Dataset>,
    source_error: Option<String>,
    countries: Vec<String>,
    pub selected: usize,
    chart: Option<(RankedSubset, Vec<Rgba>)>,
    notice: Option<String>,
}

impl TypesScreen {
    pub fn new() -> Self {
        let mut screen = match data::country_types_long() {
            Ok(data) => {
                let countries = data.unique_text("Country").unwrap_or_default();
                Self {
                    data: Some(data),
                    source_error: None,
                    countries,
                    selected: 0,
                    chart: None,
                    notice: None,
                }
            }
            Err(e) => Self {
                data: None,
                source_error: Some(e.to_string()),
                countries: Vec::new(),
                selected: 0,
                chart: None,
                notice: None,
            },
        };
        screen.recompute();
        screen
    }

    pub fn select_next(&mut self) {
        if !self.countries.is_empty() {
            self.selected = (self.selected + 1) % self.countries.len();
            self.recompute();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.countries.is_empty() {
            self.selected = (self.selected + self.countries.len() - 1) % self.countries.len();
            self.recompute();
        }
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.countries.get(self.selected).map(String::as_str)
    }

    /// One full recomputation per selection change
    fn recompute(&mut self) {
        self.chart = None;
        self.notice = None;

        let Some(data) = self.data else { return };
        let Some(country) = self.countries.get(self.selected).cloned() else {
            return;
        };

        match select_top_n(data, "Country", &country, "Share", data::MBTI_TYPES.len()) {
            Ok(subset) => {
                let colors = assign_rank_colors(subset.len(), HIGHLIGHT, BASE, MIN_ALPHA);
                self.chart = Some((subset, colors));
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(msg) = &self.source_error {
            render_message(frame, area, msg, Color::Red);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(30)])
            .split(area);

        self.render_selector(frame, chunks[0]);

        if let Some(msg) = &self.notice {
            render_message(frame, chunks[1], msg, Color::Yellow);
        } else if let Some((subset, colors)) = &self.chart {
            self.render_chart(frame, chunks[1], subset, colors);
        }
    }

    fn render_selector(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .countries
            .iter()
            .map(|c| ListItem::new(c.as_str()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Country ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
            )
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, subset: &RankedSubset, colors: &[Rgba]) {
        let bars: Vec<Bar> = (0..subset.len())
            .map(|i| {
                let share = subset.metric(i);
                let color = colors[i].to_color();
                Bar::default()
                    .label(subset.text(i, "Type").unwrap_or("?").into())
                    // shares are fractions; scale for bar resolution
                    .value((share * 1000.0).round() as u64)
                    .text_value(format!("{:.1}%", share * 100.0))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();

        let title = match self.selected_country() {
            Some(country) => format!(" {country} - type shares "),
            None => " Type shares ".to_string(),
        };
        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        title,
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1);

        frame.render_widget(chart, area);
    }
}
