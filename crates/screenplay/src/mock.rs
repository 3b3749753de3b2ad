//! Recording page handle for tests and demos.
//!
//! [`MockPage`] stands in for a driver's page: clones share one state, every
//! call is recorded, and clicks or fills on unknown selectors fail the way a
//! real page would.

use crate::result::{ScreenplayError, ScreenplayResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MockPageState {
    url: String,
    elements: HashMap<String, String>,
    call_history: Vec<String>,
}

/// A cloneable fake page
#[derive(Debug, Clone, Default)]
pub struct MockPage {
    state: Arc<Mutex<MockPageState>>,
}

impl MockPage {
    /// Create a blank page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with empty text
    #[must_use]
    pub fn with_element(self, selector: impl Into<String>) -> Self {
        let _ = self.lock().elements.insert(selector.into(), String::new());
        self
    }

    fn lock(&self) -> MutexGuard<'_, MockPageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(state: &mut MockPageState, call: String) {
        state.call_history.push(call);
    }

    /// Navigate to `url`
    ///
    /// # Errors
    ///
    /// Fails when `url` is empty.
    pub async fn goto(&self, url: &str) -> ScreenplayResult<()> {
        let mut state = self.lock();
        Self::record(&mut state, format!("goto:{url}"));
        if url.is_empty() {
            return Err(ScreenplayError::step("goto", "empty url"));
        }
        state.url = url.to_string();
        Ok(())
    }

    /// Replace the text of the element matching `selector`
    ///
    /// # Errors
    ///
    /// Fails when no such element exists.
    pub async fn fill(&self, selector: &str, text: &str) -> ScreenplayResult<()> {
        let mut state = self.lock();
        Self::record(&mut state, format!("fill:{selector}"));
        match state.elements.get_mut(selector) {
            Some(value) => {
                *value = text.to_string();
                Ok(())
            }
            None => Err(ScreenplayError::step(
                "fill",
                format!("no element matches '{selector}'"),
            )),
        }
    }

    /// Click the element matching `selector`
    ///
    /// # Errors
    ///
    /// Fails when no such element exists.
    pub async fn click(&self, selector: &str) -> ScreenplayResult<()> {
        let mut state = self.lock();
        Self::record(&mut state, format!("click:{selector}"));
        if state.elements.contains_key(selector) {
            Ok(())
        } else {
            Err(ScreenplayError::step(
                "click",
                format!("no element matches '{selector}'"),
            ))
        }
    }

    /// Current URL
    pub async fn url(&self) -> String {
        self.lock().url.clone()
    }

    /// Text of the element matching `selector`
    pub async fn text_content(&self, selector: &str) -> Option<String> {
        self.lock().elements.get(selector).cloned()
    }

    /// Calls made so far, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.lock().call_history.clone()
    }

    /// Check if method was called
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.lock()
            .call_history
            .iter()
            .any(|c| c.starts_with(method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_page_creation() {
        let page = MockPage::new();
        assert!(page.history().is_empty());
        assert!(!page.was_called("goto"));
    }

    #[tokio::test]
    async fn test_goto_updates_url() {
        let page = MockPage::new();
        page.goto("https://example.com").await.unwrap();
        assert_eq!(page.url().await, "https://example.com");
        assert!(page.was_called("goto"));
    }

    #[tokio::test]
    async fn test_goto_empty_url_fails() {
        let page = MockPage::new();
        assert!(page.goto("").await.is_err());
        assert_eq!(page.history(), vec!["goto:"]);
    }

    #[tokio::test]
    async fn test_fill_and_click_known_element() {
        let page = MockPage::new().with_element("#user");
        page.fill("#user", "alice").await.unwrap();
        page.click("#user").await.unwrap();
        assert_eq!(page.text_content("#user").await.as_deref(), Some("alice"));
        assert_eq!(page.history(), vec!["fill:#user", "click:#user"]);
    }

    #[tokio::test]
    async fn test_unknown_element_fails() {
        let page = MockPage::new();
        let err = page.click("#missing").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Step 'click' failed: no element matches '#missing'"
        );
        assert!(page.fill("#missing", "x").await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let page = MockPage::new();
        let clone = page.clone();
        clone.goto("https://example.com/home").await.unwrap();
        assert_eq!(page.url().await, "https://example.com/home");
    }
}
