//! Scripted in-memory [`Page`] for page object tests
//!
//! Records every driver call and answers from canned state. Selectors are
//! matched verbatim: no CSS engine is involved.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::driver::{ClickOptions, Page, WaitState};
use crate::error::{DriverError, DriverResult};

/// A recorded driver call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Goto(String),
    Click { selector: String, click_count: u32 },
    Fill { selector: String, value: String },
    Press(String),
    Type(String),
    Wait { selector: String, state: WaitState },
    ClickAndNavigate(String),
    ClickAndOpenTab(String),
}

impl Action {
    pub fn click(selector: &str, click_count: u32) -> Self {
        Self::Click {
            selector: selector.into(),
            click_count,
        }
    }

    pub fn fill(selector: &str, value: &str) -> Self {
        Self::Fill {
            selector: selector.into(),
            value: value.into(),
        }
    }

    pub fn wait(selector: &str, state: WaitState) -> Self {
        Self::Wait {
            selector: selector.into(),
            state,
        }
    }
}

#[derive(Default)]
struct Script {
    actions: Vec<Action>,
    texts: HashMap<String, String>,
    checked: HashMap<String, bool>,
    missing: HashSet<String>,
    title: String,
    url: String,
    new_tab: Option<ScriptedPage>,
    /// Texts swapped in after the next navigation
    after_navigation: HashMap<String, String>,
}

/// Cloning shares the script, so a test can keep a handle on a tab it
/// hands to a page object.
#[derive(Clone, Default)]
pub struct ScriptedPage {
    script: Arc<Mutex<Script>>,
}

impl ScriptedPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, selector: &str, text: &str) -> Self {
        self.lock().texts.insert(selector.into(), text.into());
        self
    }

    pub fn with_text_after_navigation(self, selector: &str, text: &str) -> Self {
        self.lock()
            .after_navigation
            .insert(selector.into(), text.into());
        self
    }

    pub fn with_checked(self, selector: &str, checked: bool) -> Self {
        self.lock().checked.insert(selector.into(), checked);
        self
    }

    /// Waits on `selector` time out
    pub fn with_missing(self, selector: &str) -> Self {
        self.lock().missing.insert(selector.into());
        self
    }

    pub fn with_title(self, title: &str) -> Self {
        self.lock().title = title.into();
        self
    }

    /// Tab returned by the next `click_and_open_new_tab`
    pub fn with_new_tab(self, tab: ScriptedPage) -> Self {
        self.lock().new_tab = Some(tab);
        self
    }

    pub fn actions(&self) -> Vec<Action> {
        self.lock().actions.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, action: Action) {
        self.lock().actions.push(action);
    }
}

#[async_trait]
impl Page for ScriptedPage {
    async fn goto(&self, url: &str) -> DriverResult<()> {
        let mut script = self.lock();
        script.actions.push(Action::Goto(url.into()));
        script.url = url.into();
        Ok(())
    }

    async fn click(&self, selector: &str, options: ClickOptions) -> DriverResult<()> {
        let mut script = self.lock();
        if script.missing.contains(selector) {
            return Err(DriverError::NoSuchElement(selector.into()));
        }
        script.actions.push(Action::click(selector, options.click_count));
        if let Some(checked) = script.checked.get_mut(selector) {
            *checked = !*checked;
        }
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> DriverResult<()> {
        self.record(Action::fill(selector, value));
        Ok(())
    }

    async fn keyboard_press(&self, key: &str) -> DriverResult<()> {
        self.record(Action::Press(key.into()));
        Ok(())
    }

    async fn keyboard_type(&self, text: &str) -> DriverResult<()> {
        self.record(Action::Type(text.into()));
        Ok(())
    }

    async fn wait_for_selector(
        &self,
        selector: &str,
        state: WaitState,
        timeout: Duration,
    ) -> DriverResult<()> {
        let mut script = self.lock();
        script.actions.push(Action::wait(selector, state));
        let present = !script.missing.contains(selector);
        let resolved = match state {
            WaitState::Attached | WaitState::Visible => present,
            WaitState::Hidden | WaitState::Detached => !present,
        };
        if resolved {
            Ok(())
        } else {
            Err(DriverError::timeout(selector, timeout))
        }
    }

    async fn text_content(&self, selector: &str) -> DriverResult<Option<String>> {
        Ok(self.lock().texts.get(selector).cloned())
    }

    async fn is_checked(&self, selector: &str) -> DriverResult<bool> {
        Ok(self.lock().checked.get(selector).copied().unwrap_or(false))
    }

    async fn current_url(&self) -> DriverResult<String> {
        Ok(self.lock().url.clone())
    }

    async fn title(&self) -> DriverResult<String> {
        Ok(self.lock().title.clone())
    }

    async fn click_and_wait_for_navigation(
        &self,
        selector: &str,
        _timeout: Duration,
    ) -> DriverResult<()> {
        let mut script = self.lock();
        script
            .actions
            .push(Action::ClickAndNavigate(selector.into()));
        let next = std::mem::take(&mut script.after_navigation);
        script.texts.extend(next);
        Ok(())
    }

    async fn click_and_open_new_tab(&self, selector: &str) -> DriverResult<Box<dyn Page>> {
        let mut script = self.lock();
        script.actions.push(Action::ClickAndOpenTab(selector.into()));
        match script.new_tab.take() {
            Some(tab) => Ok(Box::new(tab)),
            None => Err(DriverError::NoNewWindow(selector.into())),
        }
    }
}
