//! Trip: the join between a visitor and a park

use crate::error::Result;
use crate::limits::validate_date;
use crate::park::Park;
use crate::visitor::Visitor;
use chrono::{DateTime, Utc};
use serde::Serialize;
use ulid::Ulid;

/// Unique identifier for a trip
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TripId(pub Ulid);

impl TripId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A visit by one visitor to one park
///
/// Trips are only created through [`TripRegistry::record`], so every trip
/// lives in a registry.
///
/// [`TripRegistry::record`]: crate::registry::TripRegistry::record
#[derive(Debug)]
pub struct Trip {
    /// Unique identifier
    id: TripId,

    /// Who made the trip
    visitor: Visitor,

    /// Where they went
    park: Park,

    /// Free-form start date, at least 7 chars
    start_date: String,

    /// Free-form end date, at least 7 chars
    end_date: String,

    /// When the trip was registered
    recorded_at: DateTime<Utc>,
}

impl Trip {
    pub(crate) fn new(
        visitor: &Visitor,
        park: &Park,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self> {
        let start_date = start_date.into();
        let end_date = end_date.into();
        validate_date("start_date", &start_date)?;
        validate_date("end_date", &end_date)?;

        Ok(Self {
            id: TripId::new(),
            visitor: visitor.clone(),
            park: park.clone(),
            start_date,
            end_date,
            recorded_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &TripId {
        &self.id
    }

    pub fn visitor(&self) -> &Visitor {
        &self.visitor
    }

    pub fn park(&self) -> &Park {
        &self.park
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Reassign the visitor; the trip keeps its place in the registry
    pub fn set_visitor(&mut self, visitor: &Visitor) {
        self.visitor = visitor.clone();
    }

    /// Reassign the park; the trip keeps its place in the registry
    pub fn set_park(&mut self, park: &Park) {
        self.park = park.clone();
    }

    pub fn set_start_date(&mut self, date: impl Into<String>) -> Result<()> {
        let date = date.into();
        validate_date("start_date", &date)?;
        self.start_date = date;
        Ok(())
    }

    pub fn set_end_date(&mut self, date: impl Into<String>) -> Result<()> {
        let date = date.into();
        validate_date("end_date", &date)?;
        self.end_date = date;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn fixture() -> (Visitor, Park) {
        (
            Visitor::new("Matteo").unwrap(),
            Park::new("Yosemite").unwrap(),
        )
    }

    #[test]
    fn test_trip_round_trip() {
        let (matteo, yosemite) = fixture();
        let trip = Trip::new(&matteo, &yosemite, "May 1st", "May 5th").unwrap();

        assert_eq!(trip.visitor(), &matteo);
        assert_eq!(trip.park(), &yosemite);
        assert_eq!(trip.start_date(), "May 1st");
        assert_eq!(trip.end_date(), "May 5th");
    }

    #[test]
    fn test_short_dates_rejected() {
        let (matteo, yosemite) = fixture();

        let err = Trip::new(&matteo, &yosemite, "May 1", "May 5th").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);

        let err = Trip::new(&matteo, &yosemite, "May 1st", "May 5").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("end_date"));
    }

    #[test]
    fn test_setters_revalidate() {
        let (matteo, yosemite) = fixture();
        let mut trip = Trip::new(&matteo, &yosemite, "May 1st", "May 5th").unwrap();

        trip.set_start_date("June 1st").unwrap();
        assert_eq!(trip.start_date(), "June 1st");

        let err = trip.set_end_date("Jun 5").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(trip.end_date(), "May 5th");

        assert!(trip.set_start_date("").is_err());
        assert_eq!(trip.start_date(), "June 1st");
    }

    #[test]
    fn test_reassign_references() {
        let (matteo, yosemite) = fixture();
        let luca = Visitor::new("Luca").unwrap();
        let antelope = Park::new("Antelope").unwrap();
        let mut trip = Trip::new(&matteo, &yosemite, "May 1st", "May 5th").unwrap();

        trip.set_visitor(&luca);
        trip.set_park(&antelope);

        assert_eq!(trip.visitor(), &luca);
        assert_eq!(trip.park(), &antelope);
    }

    #[test]
    fn test_trip_sees_visitor_rename() {
        let (matteo, yosemite) = fixture();
        let trip = Trip::new(&matteo, &yosemite, "May 1st", "May 5th").unwrap();

        matteo.set_name("Matt").unwrap();
        assert_eq!(trip.visitor().name(), "Matt");
    }
}
