//! Session settings for a [`HistoryStore`](crate::browser::HistoryStore).

use std::num::NonZeroUsize;

pub const DEFAULT_HOMEPAGE: &str = "newcastle.edu.au";

pub const DEFAULT_HISTORY_LIMIT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(limit) => limit,
    None => panic!("History limit must be positive."),
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Visited on startup and whenever the history is wiped.
    pub homepage: String,
    /// Maximum number of history entries; the oldest is evicted first.
    pub history_limit: NonZeroUsize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            homepage: DEFAULT_HOMEPAGE.to_owned(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
