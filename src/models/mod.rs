//! Data models for the Plagtracker API.
//!
//! This module contains the response envelope and the payloads exchanged with
//! the service.

pub mod api_response;
pub mod check_result;
pub mod document;
