//! UI Components for the pipeline frontend.
//!
//! # Layout Components
//! - [`Hero`] - Page title and instructions
//!
//! # Feature Components
//! - [`UploadForm`] - Workbook picker and submit button
//! - [`Spinner`] - Busy indicator while the backend works
//! - [`ResultsDisplay`] - Summary, address samples and download links

mod hero;
mod upload;
mod spinner;
mod results;

pub use hero::*;
pub use upload::*;
pub use spinner::*;
pub use results::*;
