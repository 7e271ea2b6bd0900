//! Application configuration.
//!
//! Centralized configuration for the pipeline frontend. Everything here is
//! compiled in: the frontend reads no environment and persists nothing.

/// Backend API base URL.
///
/// The processing service that parses the workbook and generates reports.
pub const API_BASE_URL: &str = "http://127.0.0.1:5001";

/// Path of the multipart upload endpoint.
pub const UPLOAD_PATH: &str = "/upload";

/// Multipart field name, repeated once per selected file.
pub const UPLOAD_FIELD: &str = "files[]";

/// File picker filter.
pub const ACCEPTED_EXTENSIONS: &str = ".xlsx,.xls";

/// Maximum number of address samples shown in the results panel.
pub const MAX_ADDRESS_SAMPLES: usize = 5;

/// Addresses longer than this many characters are cut and suffixed with `...`.
pub const ADDRESS_DISPLAY_WIDTH: usize = 35;

/// Substring in the backend message that flags mocked geolocation.
pub const MOCK_GEOLOCATION_MARKER: &str = "Mock geolocation employed";

/// Prefix of the address list embedded in legacy backend messages.
pub const FAKE_ADDRESSES_MARKER: &str = "First 5 fake addresses: ";

/// Separator between addresses in legacy backend messages.
pub const FAKE_ADDRESSES_SEPARATOR: &str = " | ";

// User facing copy

pub const APP_TITLE: &str = "Customer Data Processing Pipeline";
pub const APP_SUBTITLE: &str =
    "Upload your Excel file containing Transactions, Customers, and Products sheets.";
pub const NO_FILES_MESSAGE: &str = "Please select files first.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";
pub const UNKNOWN_ADDRESS_LABEL: &str = "Unknown address";
pub const PROCESSING_HINT: &str =
    "Processing your data... Fake address detection may take longer.";

/// Full URL of the upload endpoint.
pub fn upload_url() -> String {
    format!("{}{}", API_BASE_URL, UPLOAD_PATH)
}

/// Absolute download URL for a path fragment returned by the backend.
pub fn download_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}
