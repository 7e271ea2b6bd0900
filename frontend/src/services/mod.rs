//! Backend communication.
//!
//! # Services
//!
//! - [`upload`] - Multipart transport and reply interpretation
//! - [`orchestrator`] - The upload flow driving [`crate::UploadState`]

pub mod upload;
pub mod orchestrator;

pub use upload::*;
pub use orchestrator::*;
