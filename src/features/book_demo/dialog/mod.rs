//! Client-side controller for the "book a demo" dialog.
//!
//! State machine: `idle -> loading -> success | error`, `error -> loading`
//! on resubmission and `success -> idle` via "send another request".
//! Opening or closing always starts over from a blank, idle form.

mod provider;
mod scope;
mod state;
mod transport;

pub use provider::{BookDemoDialogProvider, DialogOpener};
pub use scope::{EscapeHandler, HeadlessPageHost, PageHost, ScopedEffect};
pub use state::{DialogState, FormField, FormState, SubmitStatus, UnknownField};
pub use transport::{BookingTransport, HttpBookingTransport, TransportError, TransportResponse};
