//! "Book a demo" lead capture.
//!
//! The gateway half validates demo requests and forwards them as Leads to
//! the Frappe CRM. The dialog half is the client-side controller that
//! collects the form and posts it to the gateway.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/book-demo` | No | Submit a demo request |

pub mod clients;
pub mod dialog;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::BookingService;
