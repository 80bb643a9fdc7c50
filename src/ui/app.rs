use std::sync::Arc;

use flume::Receiver;

use ratatui::Frame;

use crate::{config::Config, event::events::Event, http::ApiService};

use super::{
    context::AppContext,
    layout::AppLayout,
    traits::View,
    tui,
    util::handler::EventHandler,
    views::NowPlayingView,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub view: NowPlayingView,
    pub host: String,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(&config));

        Self {
            event_rx,
            ctx: AppContext { api, event_tx },
            view: NowPlayingView::default(),
            host: config.host,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        self.view.on_mount(&self.ctx).await;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}
