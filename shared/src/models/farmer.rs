//! Farmer intake models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{timestamp, GpsCoordinates};

/// Crops the backend has water-requirement profiles for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Corn,
    Wheat,
    Rice,
    Tomato,
    Soybean,
    Other,
}

impl Crop {
    /// Selector order for the intake form
    pub const ALL: [Crop; 6] = [
        Crop::Corn,
        Crop::Wheat,
        Crop::Rice,
        Crop::Tomato,
        Crop::Soybean,
        Crop::Other,
    ];

    /// Map a crop name onto a known crop, ignoring case and surrounding
    /// whitespace. Unknown names map to [`Crop::Other`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "corn" => Crop::Corn,
            "wheat" => Crop::Wheat,
            "rice" => Crop::Rice,
            "tomato" => Crop::Tomato,
            "soybean" => Crop::Soybean,
            _ => Crop::Other,
        }
    }

    /// Wire value sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Corn => "corn",
            Crop::Wheat => "wheat",
            Crop::Rice => "rice",
            Crop::Tomato => "tomato",
            Crop::Soybean => "soybean",
            Crop::Other => "other",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crop::Corn => write!(f, "Corn"),
            Crop::Wheat => write!(f, "Wheat"),
            Crop::Rice => write!(f, "Rice"),
            Crop::Tomato => write!(f, "Tomato"),
            Crop::Soybean => write!(f, "Soybean"),
            Crop::Other => write!(f, "Other"),
        }
    }
}

/// A registered farm location, as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmerInput {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Title-cased by the backend ("Corn")
    pub crop_name: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl FarmerInput {
    pub fn crop(&self) -> Crop {
        Crop::from_name(&self.crop_name)
    }

    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }
}

/// Request body for `POST /farmer-input`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewFarmerInput {
    pub latitude: f64,
    pub longitude: f64,
    pub crop_name: String,
}
