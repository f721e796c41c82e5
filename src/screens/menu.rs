use crate::data;
use crate::rank::{assign_rank_colors, select_top_n, RankedSubset, Rgba};
use crate::screens::render_message;
use crate::table::{Dataset, Schema};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row,
        Table,
    },
    Frame,
};

pub const MIN_TOP_N: usize = 1;
pub const MAX_TOP_N: usize = 50;

/// Red for the fattiest item, blue fading out for the rest
const HIGHLIGHT: Rgba = Rgba::opaque(255, 0, 0);
const BASE: Rgba = Rgba::opaque(0, 0, 255);
const MIN_ALPHA: f64 = 0.15;

/// Extra nutrition columns shown in the detail table when the source has them
const DETAIL_COLUMNS: [&str; 5] = [
    "Calories",
    "Saturated Fat (g)",
    "Trans Fat (g)",
    "Protein (g)",
    "Sodium (mg)",
];

/// Top-N menu items by total fat for a selected company
pub struct MenuScreen {
    data: Option<&'static Dataset>,
    source_error: Option<String>,
    companies: Vec<String>,
    pub selected: usize,
    pub top_n: usize,
    fat_col: Option<String>,
    chart: Option<(RankedSubset, Vec<Rgba>)>,
    notice: Option<String>,
}

impl MenuScreen {
    pub fn new() -> Self {
        let mut screen = match data::menu() {
            Ok(data) => {
                let companies = data.unique_text("Company").unwrap_or_default();
                let fat_col = resolve_fat_column(data.schema());
                let source_error = fat_col
                    .is_none()
                    .then(|| "source has no fat column to rank by".to_string());
                Self {
                    data: Some(data),
                    source_error,
                    companies,
                    selected: 0,
                    top_n: 10,
                    fat_col,
                    chart: None,
                    notice: None,
                }
            }
            Err(e) => Self {
                data: None,
                source_error: Some(e.to_string()),
                companies: Vec::new(),
                selected: 0,
                top_n: 10,
                fat_col: None,
                chart: None,
                notice: None,
            },
        };
        screen.recompute();
        screen
    }

    pub fn select_next(&mut self) {
        if !self.companies.is_empty() {
            self.selected = (self.selected + 1) % self.companies.len();
            self.recompute();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.companies.is_empty() {
            self.selected = (self.selected + self.companies.len() - 1) % self.companies.len();
            self.recompute();
        }
    }

    /// Step N by `delta`, clamped to the widget's 1..=50 range
    pub fn adjust_top_n(&mut self, delta: i64) {
        let stepped = self.top_n as i64 + delta;
        let clamped = stepped.clamp(MIN_TOP_N as i64, MAX_TOP_N as i64) as usize;
        if clamped != self.top_n {
            self.top_n = clamped;
            self.recompute();
        }
    }

    pub fn selected_company(&self) -> Option<&str> {
        self.companies.get(self.selected).map(String::as_str)
    }

    /// One full recomputation per selection change
    fn recompute(&mut self) {
        self.chart = None;
        self.notice = None;

        let Some(data) = self.data else { return };
        let Some(fat_col) = self.fat_col.clone() else { return };
        let Some(company) = self.companies.get(self.selected).cloned() else {
            return;
        };

        match select_top_n(data, "Company", &company, &fat_col, self.top_n) {
            Ok(subset) => {
                let colors = assign_rank_colors(subset.len(), HIGHLIGHT, BASE, MIN_ALPHA);
                self.chart = Some((subset, colors));
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(30)])
            .split(area);

        self.render_sidebar(frame, chunks[0]);

        if let Some(msg) = &self.source_error {
            render_message(frame, chunks[1], msg, Color::Red);
            return;
        }
        if let Some(msg) = &self.notice {
            render_message(frame, chunks[1], msg, Color::Yellow);
            return;
        }

        if let Some((subset, colors)) = &self.chart {
            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(8), Constraint::Length(10)])
                .split(chunks[1]);
            self.render_chart(frame, body[0], subset, colors);
            self.render_table(frame, body[1], subset);
        }
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(3)])
            .split(area);

        let items: Vec<ListItem> = self
            .companies
            .iter()
            .map(|c| ListItem::new(c.as_str()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Company ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
            )
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        let n_line = Line::from(vec![
            Span::styled("Top N: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.top_n.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (+/-)", Style::default().fg(Color::DarkGray)),
        ]);
        let paragraph = Paragraph::new(n_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, chunks[1]);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, subset: &RankedSubset, colors: &[Rgba]) {
        let bars: Vec<Bar> = (0..subset.len())
            .map(|i| {
                let fat = subset.metric(i);
                let color = colors[i].to_color();
                let label: String = subset
                    .text(i, "Item")
                    .unwrap_or("?")
                    .chars()
                    .take(24)
                    .collect();
                Bar::default()
                    .label(label.into())
                    // tenths of a gram so small bars keep some width
                    .value((fat * 10.0).round() as u64)
                    .text_value(format!("{fat:.1} g"))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();

        let title = match (self.selected_company(), &self.fat_col) {
            (Some(company), Some(fat_col)) => {
                format!(" {company} - top {} by {fat_col} ", subset.len())
            }
            _ => " Fattiest items ".to_string(),
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
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(0);

        frame.render_widget(chart, area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, subset: &RankedSubset) {
        let Some(fat_col) = &self.fat_col else { return };

        let detail_cols: Vec<&str> = DETAIL_COLUMNS
            .iter()
            .copied()
            .filter(|c| c != &fat_col.as_str() && subset.schema().contains(c))
            .collect();

        let mut header = vec![
            Cell::from("Item"),
            Cell::from(fat_col.as_str()),
        ];
        header.extend(detail_cols.iter().map(|c| Cell::from(*c)));

        let rows: Vec<Row> = (0..subset.len())
            .map(|i| {
                let mut cells = vec![
                    Cell::from(subset.text(i, "Item").unwrap_or("?").to_string()),
                    Cell::from(format!("{:.1}", subset.metric(i))),
                ];
                cells.extend(detail_cols.iter().map(|c| {
                    let text = subset
                        .number(i, c)
                        .map(|n| format!("{n:.1}"))
                        .unwrap_or_else(|| "-".to_string());
                    Cell::from(text)
                }));
                Row::new(cells)
            })
            .collect();

        let mut widths = vec![Constraint::Percentage(34), Constraint::Fill(1)];
        widths.extend(detail_cols.iter().map(|_| Constraint::Fill(1)));

        let table = Table::new(rows, widths)
            .header(
                Row::new(header).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Details ",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
            );

        frame.render_widget(table, area);
    }
}

/// Header inference recovered from the source data's quirks: prefer a
/// column naming both "total" and "fat", else settle for any fat column
fn resolve_fat_column(schema: &Schema) -> Option<String> {
    schema
        .columns()
        .iter()
        .map(|c| c.name.as_str())
        .find(|name| {
            let lower = name.to_lowercase();
            lower.contains("total") && lower.contains("fat")
        })
        .or_else(|| {
            schema
                .columns()
                .iter()
                .map(|c| c.name.as_str())
                .find(|name| name.to_lowercase().contains("fat"))
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Schema;

    #[test]
    fn test_fat_column_prefers_total() {
        let schema = Schema::from_headers(
            ["Item", "Fat Calories", "Total Fat (g)"].into_iter(),
            &[],
        );
        assert_eq!(resolve_fat_column(&schema).as_deref(), Some("Total Fat (g)"));
    }

    #[test]
    fn test_fat_column_falls_back_to_any_fat() {
        let schema = Schema::from_headers(["Item", "Fat (g)", "Calories"].into_iter(), &[]);
        assert_eq!(resolve_fat_column(&schema).as_deref(), Some("Fat (g)"));
    }

    #[test]
    fn test_no_fat_column_at_all() {
        let schema = Schema::from_headers(["Item", "Calories"].into_iter(), &[]);
        assert_eq!(resolve_fat_column(&schema), None);
    }
}
