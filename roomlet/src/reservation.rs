//! Core reservation types and the status state machine.
//!
//! A reservation is a student's claim on one house. Its lifecycle runs
//! through an explicit state machine; every transition not listed in
//! [`ReservationStatus::can_transition_to`] is rejected with a typed error.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::house::HouseId;

/// Default reservation lifetime: pending requests expire after this many days.
pub const DEFAULT_TTL_DAYS: i64 = 7;

/// A reservation identifier, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Create a new reservation identifier.
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

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ReservationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// An opaque student identifier, supplied by the caller's auth context.
///
/// # Examples
///
/// ```
/// use roomlet::StudentId;
///
/// let id = StudentId::new("student-7").unwrap();
/// assert_eq!(id.as_str(), "student-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Create a student identifier, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the identifier is empty or
    /// whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::new("student_id", "must be non-empty"));
        }
        Ok(Self(id))
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Awaiting a landlord decision. Counts against the queue cap.
    Pending,
    /// Occupying a slot in the house. Counts against the queue cap.
    Approved,
    /// Declined by the landlord, or revoked after approval. Terminal.
    Rejected,
    /// Past its deadline without a decision. Terminal.
    Expired,
    /// Parked because the house filled up. May be promoted manually.
    Waitlist,
}

impl ReservationStatus {
    /// Get the string representation used in storage.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
            Self::Waitlist => "waitlist",
        }
    }

    /// Whether this status counts toward the per-house queue cap and the
    /// one-reservation-per-student rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomlet::ReservationStatus;
    ///
    /// assert!(ReservationStatus::Pending.is_active());
    /// assert!(ReservationStatus::Approved.is_active());
    /// assert!(!ReservationStatus::Waitlist.is_active());
    /// ```
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Approved)
    }

    /// Whether this status permits no further transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Expired)
    }

    /// Whether the state machine allows moving from `self` to `to`.
    ///
    /// Waitlist promotion is a manual landlord action; nothing promotes
    /// waitlisted reservations automatically.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomlet::ReservationStatus::*;
    ///
    /// assert!(Pending.can_transition_to(Approved));
    /// assert!(Waitlist.can_transition_to(Approved));
    /// assert!(!Rejected.can_transition_to(Approved));
    /// assert!(!Expired.can_transition_to(Pending));
    /// ```
    #[must_use]
    pub fn can_transition_to(&self, to: Self) -> bool {
        match self {
            Self::Pending => matches!(
                to,
                Self::Approved | Self::Rejected | Self::Waitlist | Self::Expired
            ),
            Self::Approved => matches!(to, Self::Rejected | Self::Waitlist),
            Self::Waitlist => matches!(to, Self::Approved | Self::Rejected),
            Self::Rejected | Self::Expired => false,
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "expired" => Ok(Self::Expired),
            "waitlist" => Ok(Self::Waitlist),
            other => Err(ValidationError::new(
                "status",
                format!("unknown reservation status '{other}'"),
            )),
        }
    }
}

/// A student's reservation on a house.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The store-assigned identifier.
    pub id: ReservationId,
    /// The reserving student.
    pub student_id: StudentId,
    /// The house being reserved.
    pub house_id: HouseId,
    /// Current lifecycle state.
    pub status: ReservationStatus,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// Deadline after which a still-pending reservation expires.
    pub expires_at: DateTime<Utc>,
}

impl Reservation {
    /// Whether this reservation should be treated as expired at `now`.
    ///
    /// Only pending reservations expire; a decision (approval, rejection,
    /// waitlisting) stops the clock.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == ReservationStatus::Pending && now > self.expires_at
    }
}

/// Builder for constructing [`Reservation`] instances with validation.
///
/// # Examples
///
/// ```
/// use roomlet::{HouseId, ReservationBuilder, ReservationStatus};
///
/// let reservation = ReservationBuilder::new("student-1", HouseId::new(3))
///     .build()
///     .unwrap();
/// assert_eq!(reservation.status, ReservationStatus::Pending);
/// ```
#[derive(Debug, Clone)]
pub struct ReservationBuilder {
    student_id: String,
    house_id: HouseId,
    created_at: Option<DateTime<Utc>>,
    ttl_days: i64,
}

impl ReservationBuilder {
    /// Create a new builder for a pending reservation.
    #[must_use]
    pub fn new(student_id: impl Into<String>, house_id: HouseId) -> Self {
        Self {
            student_id: student_id.into(),
            house_id,
            created_at: None,
            ttl_days: DEFAULT_TTL_DAYS,
        }
    }

    /// Set the creation timestamp (defaults to now).
    #[must_use]
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Override the reservation lifetime in days.
    #[must_use]
    pub fn ttl_days(mut self, days: i64) -> Self {
        self.ttl_days = days;
        self
    }

    /// Build the reservation, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the student id is empty or the TTL
    /// is not positive.
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let student_id = StudentId::new(self.student_id)?;
        if self.ttl_days <= 0 {
            return Err(ValidationError::new("ttl_days", "must be positive"));
        }
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Ok(Reservation {
            id: ReservationId::new(0),
            student_id,
            house_id: self.house_id,
            status: ReservationStatus::Pending,
            created_at,
            expires_at: created_at + Duration::days(self.ttl_days),
        })
    }
}

/// A validation error for domain type construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the failure.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Approved,
            ReservationStatus::Rejected,
            ReservationStatus::Expired,
            ReservationStatus::Waitlist,
        ] {
            let parsed: ReservationStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("cancelled".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_active_statuses() {
        assert!(ReservationStatus::Pending.is_active());
        assert!(ReservationStatus::Approved.is_active());
        assert!(!ReservationStatus::Rejected.is_active());
        assert!(!ReservationStatus::Expired.is_active());
        assert!(!ReservationStatus::Waitlist.is_active());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(ReservationStatus::Rejected.is_terminal());
        assert!(ReservationStatus::Expired.is_terminal());
        assert!(!ReservationStatus::Pending.is_terminal());
        assert!(!ReservationStatus::Waitlist.is_terminal());
    }

    #[test]
    fn test_pending_transitions() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Pending.can_transition_to(Waitlist));
        assert!(Pending.can_transition_to(Expired));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_approved_transitions() {
        use ReservationStatus::*;
        assert!(Approved.can_transition_to(Rejected));
        assert!(Approved.can_transition_to(Waitlist));
        assert!(!Approved.can_transition_to(Expired));
        assert!(!Approved.can_transition_to(Pending));
    }

    #[test]
    fn test_waitlist_transitions() {
        use ReservationStatus::*;
        assert!(Waitlist.can_transition_to(Approved));
        assert!(Waitlist.can_transition_to(Rejected));
        assert!(!Waitlist.can_transition_to(Pending));
        assert!(!Waitlist.can_transition_to(Expired));
    }

    #[test]
    fn test_terminal_states_allow_nothing() {
        use ReservationStatus::*;
        for from in [Rejected, Expired] {
            for to in [Pending, Approved, Rejected, Expired, Waitlist] {
                assert!(!from.can_transition_to(to), "{from} -> {to} should fail");
            }
        }
    }

    #[test]
    fn test_student_id_rejects_empty() {
        assert!(StudentId::new("").is_err());
        assert!(StudentId::new("   ").is_err());
        assert!(StudentId::new("s1").is_ok());
    }

    #[test]
    fn test_builder_sets_deadline() {
        let created = Utc::now();
        let reservation = ReservationBuilder::new("s1", HouseId::new(1))
            .created_at(created)
            .build()
            .unwrap();
        assert_eq!(reservation.expires_at, created + Duration::days(7));
        assert_eq!(reservation.status, ReservationStatus::Pending);
    }

    #[test]
    fn test_builder_custom_ttl() {
        let created = Utc::now();
        let reservation = ReservationBuilder::new("s1", HouseId::new(1))
            .created_at(created)
            .ttl_days(3)
            .build()
            .unwrap();
        assert_eq!(reservation.expires_at, created + Duration::days(3));
    }

    #[test]
    fn test_builder_rejects_bad_ttl() {
        assert!(ReservationBuilder::new("s1", HouseId::new(1))
            .ttl_days(0)
            .build()
            .is_err());
    }

    #[test]
    fn test_expiry_only_for_pending() {
        let created = Utc::now() - Duration::days(10);
        let mut reservation = ReservationBuilder::new("s1", HouseId::new(1))
            .created_at(created)
            .build()
            .unwrap();
        let now = Utc::now();
        assert!(reservation.is_expired(now));

        reservation.status = ReservationStatus::Approved;
        assert!(!reservation.is_expired(now));

        reservation.status = ReservationStatus::Waitlist;
        assert!(!reservation.is_expired(now));
    }

    #[test]
    fn test_not_expired_before_deadline() {
        let reservation = ReservationBuilder::new("s1", HouseId::new(1))
            .build()
            .unwrap();
        assert!(!reservation.is_expired(Utc::now()));
    }
}
