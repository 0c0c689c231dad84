//! # plagtracker-client
//!
//! A Rust client library for the Plagtracker plagiarism detection API.
//!
//! This crate provides a type-safe, async interface for submitting texts, web
//! pages and documents for plagiarism checking, polling the progress of a
//! check, and fetching its result.
//!
//! ## Features
//!
//! - 🔐 HTTP Basic authentication with the Plagtracker API
//! - 📝 Text, URL and document submission
//! - 📊 Typed check results with matching sources
//! - 🛡️ Comprehensive error handling
//!
//! ## Example
//!
//! ```rust,no_run
//! use plagtracker_client::PlagtrackerClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlagtrackerClient::builder()
//!         .login("user@example.com")
//!         .password_from_env("PLAGTRACKER_PASSWORD")
//!         .build()?;
//!
//!     // Submit a text and keep its hash
//!     let submitted = client.texts().submit(plagtracker_client::sample_text()).await?;
//!     let hash = submitted.data().cloned().ok_or("no hash returned")?;
//!
//!     // Poll until the whole text has been checked
//!     loop {
//!         let status = client.texts().status(&hash).await?;
//!         if status.data() == Some(&100) {
//!             break;
//!         }
//!         tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//!     }
//!
//!     let result = client.texts().result(&hash).await?;
//!     if let Some(result) = result.data() {
//!         println!("{result}");
//!         for source in &result.sources {
//!             println!("  {source}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod models;

pub use api::endpoint::{ApiVersion, Endpoint};
pub use api::text::{sample_text, TextHandler};
pub use client::{PlagtrackerClient, PlagtrackerClientBuilder, DEFAULT_API_DOMAIN};
pub use error::{PlagtrackerError, PlagtrackerResult};
pub use models::api_response::Response;
pub use models::check_result::{CheckResult, Source};
pub use models::document::{
    is_allowed_extension, Document, ALLOWED_EXTENSIONS, MAX_DOCUMENT_SIZE,
};
