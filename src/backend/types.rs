// SPDX-License-Identifier: MPL-2.0
//! Row types for the remote row store.
//!
//! Field names mirror the backend columns exactly so serde needs no rename
//! maps except for the note color tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pincode the service currently delivers to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AvailablePincode {
    pub id: String,
    pub pincode: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserAddress {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub flat_house_building: String,
    pub area_street_block: String,
    pub pincode: String,
    pub city: String,
    pub address_type: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAddress {
    /// Short single-line form used in the home header.
    #[must_use]
    pub fn short_line(&self) -> String {
        format!("{}, {}...", self.flat_house_building, self.area_street_block)
    }
}

/// Insert payload for `user_addresses`; the server fills in id/timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUserAddress {
    pub user_id: String,
    pub name: String,
    pub flat_house_building: String,
    pub area_street_block: String,
    pub pincode: String,
    pub city: String,
    pub address_type: String,
    pub is_default: bool,
}

/// Color tag attached to a note card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum NoteColor {
    #[serde(rename = "brown-300")]
    Brown300,
    #[serde(rename = "blue-200")]
    Blue200,
    #[serde(rename = "orange-300")]
    Orange300,
    #[serde(rename = "green-300")]
    Green300,
}

/// A shopping note.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub lists: Vec<String>,
    pub color: NoteColor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_row_deserializes_with_color_tag() {
        let json = r#"{
            "id": "n1",
            "user_id": "u1",
            "name": "Weekly staples",
            "lists": ["milk", "bread"],
            "color": "orange-300",
            "created_at": "2025-07-25T10:00:00Z",
            "updated_at": "2025-07-25T10:00:00Z"
        }"#;
        let note: Note = serde_json::from_str(json).expect("note should deserialize");
        assert_eq!(note.color, NoteColor::Orange300);
        assert_eq!(note.lists.len(), 2);
    }

    #[test]
    fn unknown_color_tag_is_rejected() {
        let json = r#"{
            "id": "n1",
            "user_id": "u1",
            "name": "Weekly staples",
            "lists": [],
            "color": "pink-100",
            "created_at": "2025-07-25T10:00:00Z",
            "updated_at": "2025-07-25T10:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Note>(json).is_err());
    }

    #[test]
    fn address_short_line_truncates_with_ellipsis() {
        let json = r#"{
            "id": "a1",
            "user_id": "u1",
            "name": "Lucy",
            "flat_house_building": "12B Maple Court",
            "area_street_block": "Old Mill Road",
            "pincode": "41001",
            "city": "Florence",
            "address_type": "home",
            "is_default": true,
            "created_at": "2025-07-25T10:00:00Z",
            "updated_at": "2025-07-25T10:00:00Z"
        }"#;
        let address: UserAddress = serde_json::from_str(json).expect("address should deserialize");
        assert_eq!(address.short_line(), "12B Maple Court, Old Mill Road...");
    }
}
