//! Raw driver records as delivered by the external user-record source.
//!
//! The shape follows the randomuser.me response:
//!
//! ```json
//! { "results": [ {
//!     "name":    { "first": "Asha", "last": "Rao" },
//!     "email":   "asha.rao@example.com",
//!     "phone":   "011-555-0100",
//!     "picture": { "large": "…", "medium": "…", "thumbnail": "…" },
//!     "login":   { "uuid": "4f0c…" },
//!     "location": { "coordinates": { "latitude": "28.6", "longitude": "77.2" } }
//! } ] }
//! ```
//!
//! Fields the core never reads (`location`, `picture.medium`) are optional
//! so slimmer fixtures still parse.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordName {
    pub first: String,
    pub last:  String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordPicture {
    pub large:     String,
    #[serde(default)]
    pub medium:    String,
    pub thumbnail: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordLogin {
    pub uuid: String,
}

/// Coordinates as reported by the source (strings, unused by the core:
/// drivers are always placed around the user instead).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordCoordinates {
    pub latitude:  String,
    pub longitude: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordLocation {
    pub coordinates: RecordCoordinates,
}

/// One external user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawDriverRecord {
    pub name:     RecordName,
    pub email:    String,
    pub phone:    String,
    pub picture:  RecordPicture,
    pub login:    RecordLogin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<RecordLocation>,
}

/// Envelope returned by the source: `{"results": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse {
    pub results: Vec<RawDriverRecord>,
}
