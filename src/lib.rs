pub use client::ChallengeClient;
pub use config::ClientConfig;
pub use dashboard::{DashboardDesync, DashboardEditor, DashboardView, HomePage};
pub use error::{ChallengeError, ErrorKind, Result};
pub use model::*;
pub use session::Session;

pub(crate) mod api;
pub mod carousel;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod model;
pub mod reactions;
pub mod scoring;
pub mod search;
pub mod session;
pub mod upload;
