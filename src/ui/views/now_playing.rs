use async_trait::async_trait;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use tokio::task::JoinHandle;
use tracing::warn;

use crate::{
    event::events::Event,
    model::NowPlayingPayload,
    ui::{
        components::{
            artwork::{ArtworkImage, ArtworkWidget},
            spinner::Spinner,
        },
        context::AppContext,
        state::LoadState,
        traits::View,
    },
    util::{colors, links},
};

pub struct NowPlayingView {
    state: LoadState,
    artwork: Option<ArtworkImage>,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Default for NowPlayingView {
    fn default() -> Self {
        Self {
            state: LoadState::default(),
            artwork: None,
            fetch_handle: None,
        }
    }
}

impl Drop for NowPlayingView {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

impl NowPlayingView {
    /// Abort whatever request is in flight and start over from the
    /// loading state.
    pub fn reload(&mut self, ctx: &AppContext) {
        self.state = LoadState::Loading;
        self.artwork = None;
        self.spawn_fetch(ctx);
    }

    fn spawn_fetch(&mut self, ctx: &AppContext) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }

        let api = ctx.api.clone();
        let tx = ctx.event_tx.clone();

        self.fetch_handle = Some(tokio::spawn(async move {
            match api.fetch_playing().await {
                Ok(payload) => {
                    let _ = tx.send(Event::NowPlayingFetched(payload));
                }
                Err(e) => {
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        }));
    }

    fn render_ready(&self, f: &mut Frame, area: Rect, payload: &NowPlayingPayload) {
        let art_rows = self.artwork.as_ref().map(|a| a.rows()).unwrap_or(0);

        let mut constraints = Vec::with_capacity(6);
        if art_rows > 0 {
            constraints.push(Constraint::Length(art_rows));
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1)); // title
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(2)); // search links

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut next = 0;
        if let Some(image) = &self.artwork {
            let art_area = chunks[next];
            let cols = image.cols().min(art_area.width);
            let x = art_area.x + (art_area.width.saturating_sub(cols)) / 2;
            let centered = Rect::new(art_area.x.max(x), art_area.y, cols, art_area.height);
            f.render_widget(ArtworkWidget::new(image), centered);
            next += 2;
        }

        let title = Paragraph::new(payload.display_title())
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(title, chunks[next]);
        next += 2;

        let link_lines = vec![
            Line::from(vec![
                Span::styled("IMDb        ", Style::new().fg(colors::SECONDARY)),
                Span::styled(
                    links::imdb_search_url(&payload.title),
                    Style::new().fg(colors::NEUTRAL),
                ),
            ]),
            Line::from(vec![
                Span::styled("Letterboxd  ", Style::new().fg(colors::SECONDARY)),
                Span::styled(
                    links::letterboxd_search_url(&payload.title),
                    Style::new().fg(colors::NEUTRAL),
                ),
            ]),
        ];
        f.render_widget(
            Paragraph::new(link_lines).alignment(Alignment::Center),
            chunks[next],
        );
    }
}

#[async_trait]
impl View for NowPlayingView {
    async fn on_mount(&mut self, ctx: &AppContext) {
        self.spawn_fetch(ctx);
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::NowPlayingFetched(payload) => {
                self.artwork = payload.artwork.as_ref().and_then(|artwork| {
                    ArtworkImage::decode(artwork)
                        .map_err(|e| warn!("artwork discarded: {e}"))
                        .ok()
                });
                self.state = LoadState::Ready(payload.clone());
            }
            Event::FetchError(e) => {
                self.artwork = None;
                self.state = LoadState::Failed(e.clone());
            }
            Event::Refresh => {}
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &AppContext) {
        match &self.state {
            LoadState::Loading => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading...".to_string());
                f.render_widget(spinner, area);
            }
            LoadState::Failed(e) => {
                let lines = vec![
                    Line::from(Span::styled(
                        format!("Fetch failed: {e}"),
                        Style::new().fg(colors::ERROR),
                    )),
                    Line::from(Span::styled(
                        "press r to retry",
                        Style::new().fg(colors::NEUTRAL),
                    )),
                ];
                let message = Paragraph::new(lines).alignment(Alignment::Center);
                let message_area = Rect {
                    x: area.x,
                    y: area.y + area.height.saturating_sub(2) / 2,
                    width: area.width,
                    height: area.height.min(2),
                };
                f.render_widget(message, message_area);
            }
            LoadState::Ready(payload) => {
                let payload = payload.clone();
                self.render_ready(f, area, &payload);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, http::ApiService, model::Artwork};
    use std::sync::Arc;

    fn test_ctx() -> (AppContext, flume::Receiver<Event>) {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(&Config::new("http://127.0.0.1:9")));
        (AppContext { api, event_tx }, event_rx)
    }

    #[tokio::test]
    async fn starts_loading() {
        let view = NowPlayingView::default();
        assert!(view.state.is_loading());
        assert!(view.artwork.is_none());
    }

    #[tokio::test]
    async fn fetch_success_moves_to_ready() {
        let (ctx, _rx) = test_ctx();
        let mut view = NowPlayingView::default();
        let payload = NowPlayingPayload {
            title: "Inception".to_string(),
            artwork: None,
        };

        view.on_event(&Event::NowPlayingFetched(payload.clone()), &ctx).await;

        assert_eq!(view.state.payload(), Some(&payload));
        assert!(view.artwork.is_none());
    }

    #[tokio::test]
    async fn fetch_error_moves_to_failed_not_loading() {
        let (ctx, _rx) = test_ctx();
        let mut view = NowPlayingView::default();

        view.on_event(&Event::FetchError("connection refused".to_string()), &ctx).await;

        assert!(!view.state.is_loading());
        assert_eq!(
            view.state,
            LoadState::Failed("connection refused".to_string())
        );
    }

    #[tokio::test]
    async fn undecodable_artwork_keeps_payload() {
        let (ctx, _rx) = test_ctx();
        let mut view = NowPlayingView::default();
        let payload = NowPlayingPayload {
            title: "X".to_string(),
            artwork: Some(Artwork {
                bytes: "AAAA".to_string(),
                width: 180,
                height: 180,
            }),
        };

        view.on_event(&Event::NowPlayingFetched(payload.clone()), &ctx).await;

        assert_eq!(view.state.payload(), Some(&payload));
        assert!(view.artwork.is_none());
    }

    #[tokio::test]
    async fn reload_returns_to_loading() {
        let (ctx, _rx) = test_ctx();
        let mut view = NowPlayingView::default();

        view.on_event(&Event::FetchError("boom".to_string()), &ctx).await;
        view.reload(&ctx);

        assert!(view.state.is_loading());
        assert!(view.fetch_handle.is_some());
    }
}
