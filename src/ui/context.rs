use crate::{event::events::Event, http::ApiService};
use flume::Sender;
use std::sync::Arc;

pub struct AppContext {
    pub api: Arc<ApiService>,
    pub event_tx: Sender<Event>,
}
