//! Load lifecycle of a single piece of remote data.

/// Exactly one of idle, loading, loaded or error.
///
/// Data exists only in `Loaded`, a message only in `Error`: loading new data
/// clears an old error and a failure clears old data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// No request has been issued, or a required key is absent.
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Loaded or error: the last request has been answered.
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Loaded(_) | FetchState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Loaded(_) => "loaded",
            FetchState::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_and_message_are_exclusive() {
        let loaded: FetchState<u32> = FetchState::Loaded(7);
        assert_eq!(loaded.data(), Some(&7));
        assert_eq!(loaded.error_message(), None);

        let failed: FetchState<u32> = FetchState::Error("boom".to_string());
        assert_eq!(failed.data(), None);
        assert_eq!(failed.error_message(), Some("boom"));
        assert!(failed.is_settled());
    }

    #[test]
    fn starts_idle() {
        let state: FetchState<()> = FetchState::default();
        assert!(state.is_idle());
        assert!(!state.is_settled());
        assert_eq!(state.label(), "idle");
    }
}
