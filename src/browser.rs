use std::num::NonZeroUsize;
use thiserror::Error;

use crate::{
    config::BrowserConfig,
    list::{LinkedList, ListError},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("Invalid index {0}. Current site has not been updated.")]
    InvalidIndex(i64),
    #[error(transparent)]
    List(#[from] ListError),
}

/// What [`HistoryStore::bookmark_current`] did to the bookmark list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkToggle {
    Added,
    Removed,
}

/// Browsing history and bookmarks, each kept in its own [`LinkedList`].
///
/// The history cursor is the current site. Visiting always appends at the
/// back and moves the cursor there, so there is never forward history after a
/// visit. The history is never left empty: operations that would empty it put
/// the homepage back.
#[derive(Debug)]
pub struct HistoryStore {
    homepage: String,
    history_limit: NonZeroUsize,
    history: LinkedList<String>,
    bookmarks: LinkedList<String>,
}

impl HistoryStore {
    pub fn new(homepage: impl Into<String>, history_limit: NonZeroUsize) -> Self {
        let mut store = Self {
            homepage: homepage.into(),
            history_limit,
            history: LinkedList::with_capacity(history_limit.get()),
            bookmarks: LinkedList::new(),
        };
        store.visit_homepage();
        store
    }

    pub fn from_config(config: &BrowserConfig) -> Self {
        Self::new(config.homepage.clone(), config.history_limit)
    }

    #[inline]
    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    #[inline]
    pub fn history_limit(&self) -> NonZeroUsize {
        self.history_limit
    }

    /// The site under the history cursor, falling back to the homepage.
    pub fn current_site(&self) -> &str {
        self.history
            .get_current()
            .map(String::as_str)
            .unwrap_or(&self.homepage)
    }

    fn visit_homepage(&mut self) {
        let homepage = self.homepage.clone();
        self.visit(&homepage);
    }

    /// Appends `url` to the history and makes it the current site. Visiting
    /// the current site again is ignored and returns `false`.
    pub fn visit(&mut self, url: &str) -> bool {
        if self.history.get_current().is_ok_and(|current| current == url) {
            log::debug!("Already on {url}, ignoring visit.");
            return false;
        }
        let excess = (self.history.len() + 1).saturating_sub(self.history_limit.get());
        for _ in 0..excess {
            if let Ok(evicted) = self.history.pop_front() {
                log::debug!("History limit reached, evicted {evicted}.");
            }
        }
        self.history.push_back(url.to_owned());
        self.history.end();
        log::info!("Visited {url}.");
        true
    }

    /// Moves the cursor up to `steps` entries toward the oldest one and
    /// returns how many steps were taken.
    pub fn back(&mut self, steps: i64) -> usize {
        let mut taken = 0;
        for _ in 0..steps.max(0) {
            if self.history.is_empty() || self.history.at_front() {
                break;
            }
            self.history.backward();
            taken += 1;
        }
        log::debug!("Moved back {taken} of {steps} steps.");
        taken
    }

    /// Moves the cursor up to `steps` entries toward the newest one and
    /// returns how many steps were taken.
    pub fn forward(&mut self, steps: i64) -> usize {
        let mut taken = 0;
        for _ in 0..steps.max(0) {
            if self.history.is_empty() || self.history.at_back() {
                break;
            }
            self.history.forward();
            taken += 1;
        }
        log::debug!("Moved forward {taken} of {steps} steps.");
        taken
    }

    /// Deletes every history entry equal to `url` and returns how many were
    /// deleted. Afterwards the cursor is on the newest entry.
    pub fn remove(&mut self, url: &str) -> usize {
        let target = url.to_owned();
        let mut removed = 0;
        while self.history.search(&target) {
            if self.history.remove().is_err() {
                break;
            }
            removed += 1;
        }
        if self.history.is_empty() {
            self.visit_homepage();
        } else {
            self.history.end();
        }
        log::info!("Removed {removed} history entries for {url}.");
        removed
    }

    /// Bookmarks the current site, or un-bookmarks it if it already is one.
    pub fn bookmark_current(&mut self) -> Result<BookmarkToggle, BrowserError> {
        let site = self.current_site().to_owned();
        if self.bookmarks.search(&site) {
            self.bookmarks.remove()?;
            log::info!("Removed bookmark {site}.");
            Ok(BookmarkToggle::Removed)
        } else {
            log::info!("Added bookmark {site}.");
            self.bookmarks.push_back(site);
            Ok(BookmarkToggle::Added)
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.visit_homepage();
    }

    /// The bookmarks, oldest first, or `None` when there are none. Leaves the
    /// bookmark cursor on the first bookmark.
    pub fn bookmarks(&mut self) -> Option<Vec<String>> {
        if self.bookmarks.is_empty() {
            return None;
        }
        self.bookmarks.begin();
        Some(self.bookmarks.collect())
    }

    /// The history, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.collect()
    }

    #[inline]
    pub fn count_history(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn count_bookmarks(&self) -> usize {
        self.bookmarks.len()
    }

    /// Visits the bookmark at the 0-based `index`. An out-of-range index
    /// leaves the history untouched.
    pub fn visit_bookmark(&mut self, index: i64) -> Result<(), BrowserError> {
        let steps = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.bookmarks.len())
            .ok_or(BrowserError::InvalidIndex(index))?;
        self.bookmarks.begin();
        for _ in 0..steps {
            self.bookmarks.forward();
        }
        let url = self.bookmarks.get_current()?.clone();
        self.visit(&url);
        Ok(())
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::from_config(&BrowserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn store() -> HistoryStore {
        HistoryStore::new("home", limit(10))
    }

    fn store_with(sites: &[&str]) -> HistoryStore {
        let mut store = store();
        sites.iter().for_each(|site| {
            store.visit(site);
        });
        store
    }

    #[test]
    fn test_starts_on_homepage() {
        let store = store();
        assert_eq!(store.current_site(), "home");
        assert_eq!(store.history(), vec!["home"]);
        assert_eq!(store.count_history(), 1);
        assert_eq!(store.count_bookmarks(), 0);
    }

    #[test]
    fn test_default_uses_config() {
        let store = HistoryStore::default();
        assert_eq!(store.homepage(), "newcastle.edu.au");
        assert_eq!(store.history_limit().get(), 10);
        assert_eq!(store.current_site(), "newcastle.edu.au");
    }

    #[test]
    fn test_visit_appends() {
        let store = store_with(&["a", "b"]);
        assert_eq!(store.history(), vec!["home", "a", "b"]);
        assert_eq!(store.current_site(), "b");
    }

    #[test]
    fn test_history_limit_evicts_oldest() {
        let mut store = HistoryStore::new("home", limit(2));
        assert!(store.visit("a"));
        assert_eq!(store.history(), vec!["home", "a"]);
        assert_eq!(store.current_site(), "a");

        assert!(store.visit("b"));
        assert_eq!(store.history(), vec!["a", "b"]);
        assert_eq!(store.current_site(), "b");
    }

    #[test]
    fn test_limit_of_one() {
        let mut store = HistoryStore::new("home", limit(1));
        store.visit("a");
        store.visit("b");
        assert_eq!(store.history(), vec!["b"]);
    }

    #[test]
    fn test_duplicate_visit_suppressed() {
        let mut store = store_with(&["a"]);
        assert!(!store.visit("a"));
        assert_eq!(store.count_history(), 2);

        // Only the current entry is compared.
        store.visit("b");
        assert!(store.visit("a"));
        assert_eq!(store.history(), vec!["home", "a", "b", "a"]);
    }

    #[test]
    fn test_back_and_forward_saturate() {
        let mut store = store_with(&["a", "b", "c"]);
        assert_eq!(store.back(2), 2);
        assert_eq!(store.current_site(), "a");
        assert_eq!(store.back(10), 1);
        assert_eq!(store.current_site(), "home");
        assert_eq!(store.back(1), 0);

        assert_eq!(store.forward(1), 1);
        assert_eq!(store.current_site(), "a");
        assert_eq!(store.forward(10), 2);
        assert_eq!(store.current_site(), "c");
        assert_eq!(store.forward(1), 0);
    }

    #[test]
    fn test_non_positive_steps_are_noops() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.back(0), 0);
        assert_eq!(store.back(-3), 0);
        assert_eq!(store.forward(-1), 0);
        assert_eq!(store.current_site(), "b");
    }

    #[test]
    fn test_back_with_duplicate_values() {
        let mut store = store_with(&["a", "home", "a"]);
        assert_eq!(store.back(3), 3);
        assert_eq!(store.current_site(), "home");
        assert_eq!(store.count_history(), 4);
    }

    #[test]
    fn test_visit_after_back_goes_to_end() {
        let mut store = store_with(&["a", "b"]);
        store.back(2);
        store.visit("c");
        assert_eq!(store.history(), vec!["home", "a", "b", "c"]);
        assert_eq!(store.current_site(), "c");
        assert_eq!(store.forward(1), 0);
    }

    #[test]
    fn test_remove_all_matches() {
        let mut store = store_with(&["a", "b", "a", "c"]);
        store.back(3);
        assert_eq!(store.remove("a"), 2);
        assert_eq!(store.history(), vec!["home", "b", "c"]);
        assert_eq!(store.current_site(), "c");
        assert_eq!(store.remove("missing"), 0);
        assert_eq!(store.current_site(), "c");
    }

    #[test]
    fn test_remove_everything_restores_homepage() {
        let mut store = store();
        assert_eq!(store.remove("home"), 1);
        assert_eq!(store.history(), vec!["home"]);
        assert_eq!(store.current_site(), "home");
    }

    #[test]
    fn test_bookmark_toggle() {
        let mut store = store_with(&["x"]);
        assert_eq!(store.bookmark_current(), Ok(BookmarkToggle::Added));
        assert_eq!(store.count_bookmarks(), 1);
        assert_eq!(store.bookmark_current(), Ok(BookmarkToggle::Removed));
        assert_eq!(store.count_bookmarks(), 0);
        assert_eq!(store.bookmarks(), None);
    }

    #[test]
    fn test_bookmarks_keep_insertion_order() {
        let mut store = store_with(&["a"]);
        store.bookmark_current().unwrap();
        store.visit("b");
        store.bookmark_current().unwrap();
        store.visit("c");
        store.bookmark_current().unwrap();
        store.visit("b");
        store.bookmark_current().unwrap();
        assert_eq!(store.bookmarks(), Some(vec!["a".to_owned(), "c".to_owned()]));
    }

    #[test]
    fn test_clear_history() {
        let mut store = store_with(&["a", "b"]);
        store.bookmark_current().unwrap();
        store.clear_history();
        assert_eq!(store.history(), vec!["home"]);
        assert_eq!(store.current_site(), "home");
        assert_eq!(store.count_bookmarks(), 1);
    }

    #[test]
    fn test_visit_bookmark() {
        let mut store = store_with(&["a"]);
        store.bookmark_current().unwrap();
        store.visit("b");
        store.bookmark_current().unwrap();
        store.visit("c");

        assert_eq!(store.visit_bookmark(0), Ok(()));
        assert_eq!(store.current_site(), "a");
        assert_eq!(store.visit_bookmark(1), Ok(()));
        assert_eq!(store.current_site(), "b");
        assert_eq!(store.history(), vec!["home", "a", "b", "c", "a", "b"]);
    }

    #[test]
    fn test_visit_bookmark_invalid_index() {
        let mut store = store_with(&["a"]);
        store.bookmark_current().unwrap();
        store.visit("b");
        let before = store.history();

        assert_eq!(store.visit_bookmark(1), Err(BrowserError::InvalidIndex(1)));
        assert_eq!(store.visit_bookmark(-1), Err(BrowserError::InvalidIndex(-1)));
        assert_eq!(store.history(), before);
        assert_eq!(store.current_site(), "b");

        let mut empty = HistoryStore::new("home", limit(10));
        assert_eq!(empty.visit_bookmark(0), Err(BrowserError::InvalidIndex(0)));
    }

    #[test]
    fn test_history_never_empty() {
        let mut store = HistoryStore::new("home", limit(3));
        for site in ["a", "b", "c", "d", "home", "a"] {
            store.visit(site);
            assert!(store.count_history() >= 1);
            assert!(store.count_history() <= 3);
        }
        store.remove("a");
        store.remove("d");
        store.remove("home");
        assert!(store.count_history() >= 1);
        store.clear_history();
        assert_eq!(store.count_history(), 1);
    }
}
