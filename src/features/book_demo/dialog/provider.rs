use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::features::book_demo::dialog::scope::DialogScope;
use crate::features::book_demo::dialog::{
    BookingTransport, DialogState, EscapeHandler, FormField, PageHost, SubmitStatus,
    TransportResponse, UnknownField,
};
use crate::shared::constants::{
    MSG_DIALOG_MISSING_CONTACT, MSG_DIALOG_SUBMIT_FAILED, MSG_DIALOG_UNREACHABLE,
};
use crate::shared::types::ErrorResponse;

struct Shared {
    state: DialogState,
    /// Bumped on every open and close; responses from older sessions are dropped
    session: u64,
    scope: Option<DialogScope>,
}

struct DialogCore {
    shared: Mutex<Shared>,
    transport: Arc<dyn BookingTransport>,
    host: Arc<dyn PageHost>,
}

impl DialogCore {
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn open(self: &Arc<Self>) {
        let mut shared = self.lock();
        shared.state.reset();
        shared.state.is_open = true;
        shared.session += 1;

        if shared.scope.is_none() {
            let core = Arc::downgrade(self);
            let on_escape: EscapeHandler = Arc::new(move || {
                if let Some(core) = core.upgrade() {
                    core.close();
                }
            });
            shared.scope = Some(DialogScope::acquire(self.host.as_ref(), on_escape));
        }
    }

    fn close(&self) {
        let scope = {
            let mut shared = self.lock();
            shared.state.reset();
            shared.state.is_open = false;
            shared.session += 1;
            shared.scope.take()
        };
        // Released outside the lock: hosts may call back into the dialog
        drop(scope);
    }
}

/// Owner of the "book a demo" dialog.
///
/// Create one per application at the root and hand descendants a
/// [`DialogOpener`]. While the dialog is open it holds the page's scroll lock
/// and escape listener; both are released on close and when the provider is
/// dropped.
pub struct BookDemoDialogProvider {
    core: Arc<DialogCore>,
}

impl BookDemoDialogProvider {
    pub fn new(transport: Arc<dyn BookingTransport>, host: Arc<dyn PageHost>) -> Self {
        Self {
            core: Arc::new(DialogCore {
                shared: Mutex::new(Shared {
                    state: DialogState::default(),
                    session: 0,
                    scope: None,
                }),
                transport,
                host,
            }),
        }
    }

    /// Handle that can only open the dialog
    pub fn opener(&self) -> DialogOpener {
        DialogOpener {
            core: Arc::downgrade(&self.core),
        }
    }

    /// Show the dialog with a blank form
    pub fn open(&self) {
        self.core.open();
    }

    /// Hide the dialog and discard the form
    pub fn close(&self) {
        self.core.close();
    }

    pub fn snapshot(&self) -> DialogState {
        self.core.lock().state.clone()
    }

    /// Ignored while the dialog is closed
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        let mut shared = self.core.lock();
        if !shared.state.is_open {
            return;
        }
        shared.state.form.set(field, value.into());
    }

    /// Update a field by its input name (`preferredDate`, ...)
    pub fn update_field(&self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = name.parse::<FormField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Leave the success panel for a fresh, idle form
    ///
    /// Returns `false` (and changes nothing) unless the last submission succeeded.
    pub fn send_another_request(&self) -> bool {
        let mut shared = self.core.lock();
        if shared.state.status != SubmitStatus::Success {
            return false;
        }
        shared.state.reset();
        true
    }

    /// Submit the current form to the gateway.
    ///
    /// Ignored while the dialog is closed or a submission is already loading.
    /// Returns the status the dialog is in afterwards.
    pub async fn submit(&self) -> SubmitStatus {
        let (form, session) = {
            let mut shared = self.core.lock();
            if !shared.state.is_open || shared.state.status == SubmitStatus::Loading {
                return shared.state.status;
            }

            shared.state.error = None;
            if !shared.state.form.has_contact() {
                shared.state.error = Some(MSG_DIALOG_MISSING_CONTACT.to_string());
                shared.state.status = SubmitStatus::Error;
                return SubmitStatus::Error;
            }

            shared.state.status = SubmitStatus::Loading;
            (shared.state.form.clone(), shared.session)
        };

        let (status, error) = match self.core.transport.post_booking(&form).await {
            Ok(response) if response.is_success() => (SubmitStatus::Success, None),
            Ok(response) => (SubmitStatus::Error, Some(error_message(&response))),
            Err(e) => {
                tracing::error!("Book demo request failed: {}", e);
                (SubmitStatus::Error, Some(MSG_DIALOG_UNREACHABLE.to_string()))
            }
        };

        let mut shared = self.core.lock();
        if shared.session != session {
            tracing::debug!("Dialog closed while submitting, dropping response");
            return shared.state.status;
        }

        shared.state.status = status;
        shared.state.error = error;
        if status == SubmitStatus::Success {
            shared.state.form = Default::default();
        }
        status
    }
}

/// Capability handed to page sections (hero, navbar, CTA) to open the dialog
#[derive(Clone)]
pub struct DialogOpener {
    core: Weak<DialogCore>,
}

impl DialogOpener {
    /// Returns `false` if the provider has already been torn down
    pub fn open(&self) -> bool {
        match self.core.upgrade() {
            Some(core) => {
                core.open();
                true
            }
            None => false,
        }
    }
}

/// Message from a `{ "error": "..." }` body, or the generic fallback.
///
/// An empty `error` string counts as no message and also gets the fallback,
/// so the dialog never shows a blank error line.
fn error_message(response: &TransportResponse) -> String {
    serde_json::from_str::<ErrorResponse>(&response.body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| MSG_DIALOG_SUBMIT_FAILED.to_string())
}
