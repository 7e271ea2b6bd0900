//! Display model for a processed upload.
//!
//! [`ResultsView::derive`] is a pure function of the backend payload: it
//! resolves the download links, detects mock geolocation and picks the
//! address samples to show. The structured `coordinates` list is the primary
//! source of samples. Older backends only embedded the addresses in the
//! message text, so [`legacy_addresses`] recovers them from there when
//! `coordinates` is absent.

use std::fmt;

use crate::config::{
    download_url, ADDRESS_DISPLAY_WIDTH, FAKE_ADDRESSES_MARKER, FAKE_ADDRESSES_SEPARATOR,
    MAX_ADDRESS_SAMPLES, MOCK_GEOLOCATION_MARKER, UNKNOWN_ADDRESS_LABEL,
};
use crate::types::{CoordinateEntry, ResultsPayload};

/// Coordinate annotation of an address sample.
#[derive(Clone, Debug, PartialEq)]
pub enum SampleCoordinates {
    /// Both latitude and longitude were reported.
    Located { lat: f64, lon: f64 },
    /// Structured entry without a usable pair.
    Missing,
    /// Recovered from the message text, which carries no coordinates.
    Unreported,
}

impl SampleCoordinates {
    /// Text appended after the address.
    pub fn suffix(&self) -> String {
        match self {
            SampleCoordinates::Located { lat, lon } => format!(" ({}, {})", lat, lon),
            SampleCoordinates::Missing => " (No coordinates)".to_string(),
            SampleCoordinates::Unreported => String::new(),
        }
    }
}

/// One address line in the mock geolocation panel.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressSample {
    pub address: String,
    pub coordinates: SampleCoordinates,
}

impl AddressSample {
    fn from_entry(entry: &CoordinateEntry) -> Self {
        let address = entry
            .address
            .as_deref()
            .map(truncate_address)
            .unwrap_or_else(|| UNKNOWN_ADDRESS_LABEL.to_string());

        // Zero is a real coordinate; only absent values count as missing.
        let coordinates = match (entry.lat, entry.lon) {
            (Some(lat), Some(lon)) => SampleCoordinates::Located { lat, lon },
            _ => SampleCoordinates::Missing,
        };

        Self {
            address,
            coordinates,
        }
    }

    fn from_legacy(address: String) -> Self {
        Self {
            address,
            coordinates: SampleCoordinates::Unreported,
        }
    }
}

impl fmt::Display for AddressSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.address, self.coordinates.suffix())
    }
}

/// Everything the results panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub excel_link: String,
    pub word_link: String,
    /// Backend message, blanked in mock mode
    pub base_message: String,
    pub mock_mode: bool,
    /// At most [`MAX_ADDRESS_SAMPLES`], empty unless in mock mode
    pub samples: Vec<AddressSample>,
}

impl ResultsView {
    pub fn derive(results: &ResultsPayload) -> Self {
        let mock_mode = is_mock_mode(&results.message);

        let base_message = if mock_mode {
            String::new()
        } else {
            results.message.clone()
        };

        let samples = if !mock_mode {
            Vec::new()
        } else if let Some(entries) = &results.coordinates {
            entries
                .iter()
                .take(MAX_ADDRESS_SAMPLES)
                .map(AddressSample::from_entry)
                .collect()
        } else {
            legacy_addresses(&results.message)
                .into_iter()
                .take(MAX_ADDRESS_SAMPLES)
                .map(AddressSample::from_legacy)
                .collect()
        };

        Self {
            excel_link: download_url(&results.excel_url),
            word_link: download_url(&results.word_url),
            base_message,
            mock_mode,
            samples,
        }
    }
}

/// Whether the backend fell back to mocked geolocation.
pub fn is_mock_mode(message: &str) -> bool {
    message.contains(MOCK_GEOLOCATION_MARKER)
}

/// Addresses embedded in a legacy message after the fake-address marker.
///
/// Only the segment between the first marker and any following marker is
/// read. Tokens are trimmed but otherwise kept as-is, empty ones included.
pub fn legacy_addresses(message: &str) -> Vec<String> {
    match message.split(FAKE_ADDRESSES_MARKER).nth(1) {
        Some(segment) if !segment.is_empty() => segment
            .split(FAKE_ADDRESSES_SEPARATOR)
            .map(|token| token.trim().to_string())
            .collect(),
        _ => Vec::new(),
    }
}

/// Cut an address to the display width, marking the cut with `...`.
pub fn truncate_address(address: &str) -> String {
    if address.chars().count() > ADDRESS_DISPLAY_WIDTH {
        let head: String = address.chars().take(ADDRESS_DISPLAY_WIDTH).collect();
        format!("{}...", head)
    } else {
        address.to_string()
    }
}
