use crate::{event::events::Event, ui::context::AppContext};
use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Refresh,
}

#[async_trait]
pub trait View: Send {
    async fn on_mount(&mut self, _ctx: &AppContext) {}
    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}
    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext);
    async fn handle_input(&mut self, _key: KeyEvent, _ctx: &AppContext) -> Option<Action> {
        None
    }
}
