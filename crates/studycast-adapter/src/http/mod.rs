/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod config;
pub mod error;
pub mod process;
pub mod status;

pub use error::{Result, StudycastError};

pub use client::{ClientConfig, StudycastClient};
