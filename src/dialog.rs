//! src/dialog.rs
//!
//! The email prompt: a modal that asks for an address, stores it in the
//! remote table and sends the user home.
//!
//! ```text
//! Idle --confirm (invalid)--> Error --edit--> Idle
//! Idle --confirm (valid)----> Submitting --ok--> Navigated
//!                                        --err-> Error
//! Idle/Error --decline------> Navigated
//! ```
use crate::domain::{EmailAddress, EmailSubmission, PromptError};
use crate::navigation::{Navigator, HOME_PATH};
use crate::store::{EmailStore, DEFAULT_TABLE};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Idle,
    Submitting,
    Error(PromptError),
    Navigated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Navigated,
    Rejected(PromptError),
    /// The dialog is closed, busy or already gone.
    Ignored,
}

/// What a renderer needs to draw the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub email: String,
    pub error: Option<String>,
    pub is_loading: bool,
    pub is_open: bool,
}

#[derive(Debug)]
struct Inner {
    email: String,
    state: DialogState,
    is_open: bool,
}

impl Inner {
    // Controls are disabled while submitting, and nothing is left to
    // interact with once the user has been sent away.
    fn accepts_input(&self) -> bool {
        self.is_open && matches!(self.state, DialogState::Idle | DialogState::Error(_))
    }
}

pub struct EmailPromptDialog<S, N> {
    store: S,
    navigator: N,
    table: String,
    home_path: String,
    inner: Mutex<Inner>,
}

impl<S, N> EmailPromptDialog<S, N>
where
    S: EmailStore,
    N: Navigator,
{
    pub fn new(store: S, navigator: N) -> Self {
        Self {
            store,
            navigator,
            table: DEFAULT_TABLE.to_string(),
            home_path: HOME_PATH.to_string(),
            inner: Mutex::new(Inner {
                email: String::new(),
                state: DialogState::Idle,
                is_open: true,
            }),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_home_path(mut self, home_path: impl Into<String>) -> Self {
        self.home_path = home_path.into();
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_open
    }

    pub fn set_open(&self, is_open: bool) {
        self.lock().is_open = is_open;
    }

    pub fn state(&self) -> DialogState {
        self.lock().state
    }

    pub fn view(&self) -> DialogView {
        let inner = self.lock();
        let error = match inner.state {
            DialogState::Error(e) => Some(e.to_string()),
            _ => None,
        };

        DialogView {
            email: inner.email.clone(),
            error,
            is_loading: inner.state == DialogState::Submitting,
            is_open: inner.is_open,
        }
    }

    /// Replaces the typed text. Any error on display goes away, whether or
    /// not the new text is any better.
    pub fn set_email(&self, text: impl Into<String>) {
        let mut inner = self.lock();
        if !inner.accepts_input() {
            return;
        }

        inner.email = text.into();
        if let DialogState::Error(_) = inner.state {
            inner.state = DialogState::Idle;
        }
    }

    #[tracing::instrument(name = "Confirming the email prompt", skip(self))]
    pub async fn confirm(&self) -> ConfirmOutcome {
        let email = {
            let mut inner = self.lock();
            if !inner.accepts_input() {
                return ConfirmOutcome::Ignored;
            }

            match EmailAddress::parse(inner.email.clone()) {
                Ok(email) => {
                    inner.state = DialogState::Submitting;
                    email
                }
                Err(e) => {
                    inner.state = DialogState::Error(e);
                    return ConfirmOutcome::Rejected(e);
                }
            }
        };

        let submission = EmailSubmission::from(email);
        match self.store.insert(&self.table, &submission).await {
            Ok(()) => {
                self.lock().state = DialogState::Navigated;
                self.navigator.navigate_to(&self.home_path);
                ConfirmOutcome::Navigated
            }
            Err(e) => {
                tracing::error!("Error saving email: {:?}", e);
                self.lock().state = DialogState::Error(PromptError::SubmissionFailed);
                ConfirmOutcome::Rejected(PromptError::SubmissionFailed)
            }
        }
    }

    /// Sends the user home without storing anything. Returns false when
    /// the button could not have been pressed.
    pub fn decline(&self) -> bool {
        {
            let mut inner = self.lock();
            if !inner.accepts_input() {
                return false;
            }
            inner.state = DialogState::Navigated;
        }

        self.navigator.navigate_to(&self.home_path);
        true
    }

    /// Outside clicks and escape never close the prompt.
    pub fn request_dismiss(&self) -> bool {
        false
    }
}
