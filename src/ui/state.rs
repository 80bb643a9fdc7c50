use crate::model::NowPlayingPayload;

/// Fetch lifecycle of the now-playing view. A failed fetch is its own
/// state so it never masquerades as one still in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(NowPlayingPayload),
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn payload(&self) -> Option<&NowPlayingPayload> {
        match self {
            LoadState::Ready(payload) => Some(payload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        assert!(LoadState::default().is_loading());
    }

    #[test]
    fn failed_is_not_loading() {
        let state = LoadState::Failed("connection refused".to_string());
        assert!(!state.is_loading());
        assert!(state.payload().is_none());
    }

    #[test]
    fn ready_exposes_payload() {
        let payload = NowPlayingPayload {
            title: "Heat".to_string(),
            artwork: None,
        };
        let state = LoadState::Ready(payload.clone());
        assert_eq!(state.payload(), Some(&payload));
    }
}
