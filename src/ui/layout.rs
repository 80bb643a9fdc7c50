use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::{ui::app::App, ui::traits::View, util::colors};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let content_area = chunks[0];
        let footer_area = chunks[1];

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL))
            .title("nowtui")
            .title_alignment(Alignment::Center);

        let content_inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        self.app.view.render(f, content_inner, &self.app.ctx);

        let footer = Line::from(vec![
            Span::styled(" r ", Style::new().fg(colors::PRIMARY)),
            Span::styled("refresh  ", Style::new().fg(colors::NEUTRAL)),
            Span::styled("q ", Style::new().fg(colors::PRIMARY)),
            Span::styled("quit", Style::new().fg(colors::NEUTRAL)),
            Span::styled(
                format!("  {}", self.app.host),
                Style::new().fg(colors::NEUTRAL),
            ),
        ]);
        f.render_widget(footer, footer_area);
    }
}
