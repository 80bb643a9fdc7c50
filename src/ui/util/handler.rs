use tracing::{debug, error};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        traits::{Action, View},
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_app_event(app, evt).await;
        }

        Ok(())
    }

    pub async fn handle_terminal_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Tick | TerminalEvent::Resize(_, _) => {}
        }

        Ok(())
    }

    pub async fn handle_app_event(app: &mut App, evt: Event) {
        match &evt {
            Event::NowPlayingFetched(payload) => {
                debug!("now playing: {:?}", payload.display_title());
            }
            Event::FetchError(e) => {
                error!("now-playing fetch failed: {e}");
            }
            Event::Refresh => {
                app.view.reload(&app.ctx);
                return;
            }
        }

        app.view.on_event(&evt, &app.ctx).await;
    }

    async fn handle_key_event(app: &mut App, key: ratatui::crossterm::event::KeyEvent) {
        if let Some(action) = app.view.handle_input(key, &app.ctx).await {
            Self::dispatch_action(app, action);
            return;
        }

        if let Some(action) = InputHandler::handle_key(key) {
            Self::dispatch_action(app, action);
        }
    }

    fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::Refresh => {
                let _ = app.ctx.event_tx.send(Event::Refresh);
            }
        }
    }
}
