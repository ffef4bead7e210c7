//! Structural validation of intake form input
//!
//! Only checks that the input has the right shape. Range and crop checks are
//! the backend's job and are not repeated here.

use thiserror::Error;

use crate::models::NewFarmerInput;

/// A form field that could not be turned into a request value
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct InvalidField {
    pub field: &'static str,
    pub message: &'static str,
}

impl InvalidField {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Parse a coordinate typed into the form
pub fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, InvalidField> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InvalidField::new(field, "is required"));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| InvalidField::new(field, "must be a number"))?;
    if !value.is_finite() {
        return Err(InvalidField::new(field, "must be a finite number"));
    }
    Ok(value)
}

/// Validate crop name is present
pub fn validate_crop_name(raw: &str) -> Result<String, InvalidField> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InvalidField::new("crop_name", "is required"));
    }
    Ok(name.to_string())
}

/// Build the `POST /farmer-input` body from raw form values
pub fn validate_intake(
    latitude: &str,
    longitude: &str,
    crop_name: &str,
) -> Result<NewFarmerInput, InvalidField> {
    Ok(NewFarmerInput {
        latitude: parse_coordinate("latitude", latitude)?,
        longitude: parse_coordinate("longitude", longitude)?,
        crop_name: validate_crop_name(crop_name)?,
    })
}
