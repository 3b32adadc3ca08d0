//! # API Module
//!
//! HTTP endpoints of the action server. The dialogue manager calls the webhook
//! once per custom action it wants executed.
//!
//! ## Endpoints
//!
//! - [`webhook`] - `POST /webhook`: runs the action named in `next_action`
//!   against the tracker's latest message and answers with
//!   `{"events": [...], "responses": [...]}`. Unknown actions get a 404,
//!   actions that fail on token or transport errors a 500, both with an
//!   `{"error", "action_name"}` body.
//! - [`list_actions`] - `GET /actions`: names of the registered actions.
//! - [`health`] - `GET /health`: status and version for monitoring.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::{get, post}};
//! use spotact::api::{health, list_actions, webhook};
//!
//! let app = Router::new()
//!     .route("/webhook", post(webhook))
//!     .route("/actions", get(list_actions))
//!     .route("/health", get(health))
//!     .layer(Extension(ctx));
//! ```

mod health;
mod webhook;

pub use health::health;
pub use webhook::list_actions;
pub use webhook::webhook;
