use crate::model::NowPlayingPayload;

#[derive(Debug, Clone)]
pub enum Event {
    // Events
    NowPlayingFetched(NowPlayingPayload),
    FetchError(String),

    // Commands
    Refresh,
}
