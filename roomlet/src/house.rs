//! Core house types for room listings.
//!
//! A house is a single bookable room listing owned by a landlord. Its
//! occupancy counters are the authoritative record the reservation
//! lifecycle reads and writes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A house identifier, assigned by the store on registration.
///
/// # Examples
///
/// ```
/// use roomlet::HouseId;
///
/// let id = HouseId::new(42);
/// assert_eq!(id.value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseId(i64);

impl HouseId {
    /// Create a new house identifier.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying identifier value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for HouseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// The room category of a house listing.
///
/// Each category carries a default capacity, used when the landlord does
/// not state `max_occupants` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// A single room for one occupant.
    Single,
    /// A double room for two occupants.
    Double,
    /// A dorm room for four occupants.
    Dorm,
}

impl RoomType {
    /// The capacity assumed for this room type when none is stated.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomlet::RoomType;
    ///
    /// assert_eq!(RoomType::Single.default_max_occupants(), 1);
    /// assert_eq!(RoomType::Double.default_max_occupants(), 2);
    /// assert_eq!(RoomType::Dorm.default_max_occupants(), 4);
    /// ```
    #[must_use]
    pub fn default_max_occupants(&self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Dorm => 4,
        }
    }

    /// Get the string representation used in storage.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Dorm => "dorm",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "dorm" => Ok(Self::Dorm),
            other => Err(ValidationError::new(
                "room_type",
                format!("unknown room type '{other}' (expected single, double, or dorm)"),
            )),
        }
    }
}

/// A house listing with its occupancy state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    /// The store-assigned identifier.
    pub id: HouseId,
    /// The landlord who owns this listing.
    pub landlord_id: String,
    /// Short listing title.
    pub title: String,
    /// Street address of the house.
    pub address: String,
    /// The room category.
    pub room_type: RoomType,
    /// Stated capacity, if the landlord provided one. When absent, the
    /// room type's default applies and is persisted on first use.
    pub max_occupants: Option<u32>,
    /// Number of currently approved occupants.
    pub current_occupants: u32,
    /// Whether the house accepts new reservations.
    pub is_available: bool,
    /// When the listing was registered.
    pub created_at: DateTime<Utc>,
}

impl House {
    /// The authoritative capacity: the stated value, or the room type
    /// default when none was stated.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomlet::{HouseBuilder, RoomType};
    ///
    /// let house = HouseBuilder::new("landlord-1", "Sunny room", "12 Elm St", RoomType::Double)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(house.effective_max_occupants(), 2);
    /// ```
    #[must_use]
    pub fn effective_max_occupants(&self) -> u32 {
        self.max_occupants
            .unwrap_or_else(|| self.room_type.default_max_occupants())
    }

    /// Whether the house has at least one open slot.
    #[must_use]
    pub fn has_open_slot(&self) -> bool {
        self.current_occupants < self.effective_max_occupants()
    }

    /// Recompute `is_available` from the occupancy counters.
    ///
    /// Every lifecycle mutation ends with this rule, so availability can
    /// never drift from the counters.
    pub fn recompute_availability(&mut self) {
        self.is_available = self.has_open_slot();
    }
}

/// Builder for constructing [`House`] instances with validation.
///
/// # Examples
///
/// ```
/// use roomlet::{HouseBuilder, RoomType};
///
/// let house = HouseBuilder::new("landlord-1", "Attic room", "3 Oak Ave", RoomType::Single)
///     .max_occupants(1)
///     .build()
///     .unwrap();
/// assert!(house.is_available);
/// ```
#[derive(Debug, Clone)]
pub struct HouseBuilder {
    landlord_id: String,
    title: String,
    address: String,
    room_type: RoomType,
    max_occupants: Option<u32>,
    created_at: Option<DateTime<Utc>>,
}

impl HouseBuilder {
    /// Create a new builder with the required fields.
    #[must_use]
    pub fn new(
        landlord_id: impl Into<String>,
        title: impl Into<String>,
        address: impl Into<String>,
        room_type: RoomType,
    ) -> Self {
        Self {
            landlord_id: landlord_id.into(),
            title: title.into(),
            address: address.into(),
            room_type,
            max_occupants: None,
            created_at: None,
        }
    }

    /// State an explicit capacity instead of the room type default.
    #[must_use]
    pub fn max_occupants(mut self, max: u32) -> Self {
        self.max_occupants = Some(max);
        self
    }

    /// Set the registration timestamp (defaults to now).
    #[must_use]
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Build the house, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any field is empty or the stated
    /// capacity is zero.
    pub fn build(self) -> Result<House, ValidationError> {
        if self.landlord_id.trim().is_empty() {
            return Err(ValidationError::new("landlord_id", "must be non-empty"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::new("title", "must be non-empty"));
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::new("address", "must be non-empty"));
        }
        if self.max_occupants == Some(0) {
            return Err(ValidationError::new(
                "max_occupants",
                "must be at least 1 when stated",
            ));
        }

        Ok(House {
            id: HouseId::new(0),
            landlord_id: self.landlord_id,
            title: self.title,
            address: self.address,
            room_type: self.room_type,
            max_occupants: self.max_occupants,
            current_occupants: 0,
            is_available: true,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}
