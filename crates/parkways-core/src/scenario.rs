//! Scenario documents: untyped JSON descriptions of visitors, parks and trips
//!
//! Scenario values stay as `serde_json::Value` until they are applied, so a
//! wrong kind of value (a number where a name belongs, a park where a visitor
//! belongs) is reported as [`ErrorKind::Type`](crate::ErrorKind::Type) rather
//! than a parse failure.

use crate::error::{Error, Result};
use crate::park::Park;
use crate::registry::TripRegistry;
use crate::visitor::Visitor;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A set of visitors, parks and trips to load into a [`Catalog`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Visitor names
    #[serde(default)]
    pub visitors: Vec<Value>,

    /// Park names
    #[serde(default)]
    pub parks: Vec<Value>,

    /// Trips, referencing visitors and parks by name
    #[serde(default)]
    pub trips: Vec<TripEntry>,
}

/// One trip in a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripEntry {
    #[serde(default)]
    pub visitor: Value,
    #[serde(default)]
    pub park: Value,
    #[serde(default)]
    pub start_date: Value,
    #[serde(default)]
    pub end_date: Value,
}

impl TripEntry {
    pub fn new(
        visitor: impl Into<Value>,
        park: impl Into<Value>,
        start_date: impl Into<Value>,
        end_date: impl Into<Value>,
    ) -> Self {
        Self {
            visitor: visitor.into(),
            park: park.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Two visitors, two parks, four trips
    pub fn demo() -> Self {
        Self::new()
            .with_visitor("Matteo")
            .with_visitor("Luca")
            .with_park("Yosemite")
            .with_park("Antelope")
            .with_trip(TripEntry::new("Matteo", "Yosemite", "May 1st", "May 5th"))
            .with_trip(TripEntry::new("Matteo", "Yosemite", "June 1st", "June 5th"))
            .with_trip(TripEntry::new("Luca", "Yosemite", "July 1st", "July 5th"))
            .with_trip(TripEntry::new("Matteo", "Antelope", "August 1st", "August 5th"))
    }

    pub fn with_visitor(mut self, name: impl Into<Value>) -> Self {
        self.visitors.push(name.into());
        self
    }

    pub fn with_park(mut self, name: impl Into<Value>) -> Self {
        self.parks.push(name.into());
        self
    }

    pub fn with_trip(mut self, trip: TripEntry) -> Self {
        self.trips.push(trip);
        self
    }

    /// Validate every entry and build the typed catalog.
    ///
    /// Stops at the first invalid entry.
    pub fn build(&self) -> Result<Catalog> {
        let mut catalog = Catalog::default();

        for value in &self.visitors {
            let name = expect_str(value, "visitor name", "a string")?;
            catalog.add_visitor(Visitor::new(name)?)?;
        }

        for value in &self.parks {
            let name = expect_str(value, "park name", "a string")?;
            catalog.add_park(Park::new(name)?)?;
        }

        for entry in &self.trips {
            let visitor = catalog.resolve_visitor(&entry.visitor)?;
            let park = catalog.resolve_park(&entry.park)?;
            let start_date = expect_str(&entry.start_date, "start_date", "a string")?;
            let end_date = expect_str(&entry.end_date, "end_date", "a string")?;
            catalog.trips.record(&visitor, &park, start_date, end_date)?;
        }

        tracing::info!(
            visitors = catalog.visitors.len(),
            parks = catalog.parks.len(),
            trips = catalog.trips.len(),
            "Loaded scenario"
        );
        Ok(catalog)
    }
}

fn expect_str<'a>(
    value: &'a Value,
    field: &'static str,
    expected: &'static str,
) -> Result<&'a str> {
    value
        .as_str()
        .ok_or(Error::InvalidType { field, expected })
}

/// Visitors, parks and the trips between them
#[derive(Debug, Default)]
pub struct Catalog {
    visitors: Vec<Visitor>,
    parks: Vec<Park>,
    trips: TripRegistry,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visitor; names must be unique within the catalog
    pub fn add_visitor(&mut self, visitor: Visitor) -> Result<()> {
        let name = visitor.name();
        if self.visitor(&name).is_some() {
            return Err(Error::DuplicateName {
                kind: "visitor",
                name,
            });
        }
        self.visitors.push(visitor);
        Ok(())
    }

    /// Add a park; names must be unique within the catalog
    pub fn add_park(&mut self, park: Park) -> Result<()> {
        if self.park(park.name()).is_some() {
            return Err(Error::DuplicateName {
                kind: "park",
                name: park.name().to_string(),
            });
        }
        self.parks.push(park);
        Ok(())
    }

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    pub fn trips(&self) -> &TripRegistry {
        &self.trips
    }

    pub fn trips_mut(&mut self) -> &mut TripRegistry {
        &mut self.trips
    }

    /// First visitor currently named `name`
    pub fn visitor(&self, name: &str) -> Option<&Visitor> {
        self.visitors.iter().find(|v| v.name() == name)
    }

    /// First park named `name`
    pub fn park(&self, name: &str) -> Option<&Park> {
        self.parks.iter().find(|p| p.name() == name)
    }

    fn resolve_visitor(&self, value: &Value) -> Result<Visitor> {
        let name = value.as_str().ok_or(Error::InvalidType {
            field: "visitor",
            expected: "a Visitor",
        })?;
        if let Some(visitor) = self.visitor(name) {
            return Ok(visitor.clone());
        }
        if self.park(name).is_some() {
            return Err(Error::InvalidType {
                field: "visitor",
                expected: "a Visitor",
            });
        }
        Err(Error::UnknownReference {
            field: "visitor",
            name: name.to_string(),
        })
    }

    fn resolve_park(&self, value: &Value) -> Result<Park> {
        let name = value.as_str().ok_or(Error::InvalidType {
            field: "park",
            expected: "a Park",
        })?;
        if let Some(park) = self.park(name) {
            return Ok(park.clone());
        }
        if self.visitor(name).is_some() {
            return Err(Error::InvalidType {
                field: "park",
                expected: "a Park",
            });
        }
        Err(Error::UnknownReference {
            field: "park",
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_demo_scenario() {
        let catalog = Scenario::demo().build().unwrap();
        let trips = catalog.trips();

        let matteo = catalog.visitor("Matteo").unwrap();
        let luca = catalog.visitor("Luca").unwrap();
        let yosemite = catalog.park("Yosemite").unwrap();
        let antelope = catalog.park("Antelope").unwrap();

        assert_eq!(trips.len(), 4);
        assert_eq!(yosemite.total_visits(trips), 3);
        assert_eq!(yosemite.visitors(trips), vec![matteo.clone(), luca.clone()]);
        assert_eq!(yosemite.best_visitor(trips).as_ref(), Some(matteo));
        assert_eq!(antelope.best_visitor(trips).as_ref(), Some(matteo));
        assert_eq!(luca.national_parks(trips), vec![yosemite.clone()]);
    }

    #[test]
    fn test_from_json_str() {
        let scenario = Scenario::from_json_str(
            r#"{
                "visitors": ["Ada"],
                "parks": ["Zion"],
                "trips": [
                    {
                        "visitor": "Ada",
                        "park": "Zion",
                        "start_date": "Oct 1st",
                        "end_date": "Oct 3rd"
                    }
                ]
            }"#,
        )
        .unwrap();

        let catalog = scenario.build().unwrap();
        let zion = catalog.park("Zion").unwrap();
        assert_eq!(zion.total_visits(catalog.trips()), 1);
    }

    #[test]
    fn test_malformed_json() {
        let err = Scenario::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }

    #[test]
    fn test_non_string_names_are_type_errors() {
        let err = Scenario::new().with_visitor(42).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = Scenario::new().with_park(Value::Null).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_short_names_are_value_errors() {
        let err = Scenario::new().with_park("Yo").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_wrong_entity_kind_is_type_error() {
        let base = Scenario::new().with_visitor("Ada").with_park("Zion");

        let err = base
            .clone()
            .with_trip(TripEntry::new("Zion", "Zion", "Oct 1st", "Oct 3rd"))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.to_string(), "visitor must be a Visitor");

        let err = base
            .clone()
            .with_trip(TripEntry::new("Ada", "Ada", "Oct 1st", "Oct 3rd"))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = base
            .with_trip(TripEntry::new(json!({"name": "Ada"}), "Zion", "Oct 1st", "Oct 3rd"))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_non_string_date_is_type_error() {
        let err = Scenario::new()
            .with_visitor("Ada")
            .with_park("Zion")
            .with_trip(TripEntry::new("Ada", "Zion", 20240101, "Oct 3rd"))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_missing_field_is_type_error() {
        let scenario = Scenario::from_json_str(
            r#"{
                "visitors": ["Ada"],
                "parks": ["Zion"],
                "trips": [{"visitor": "Ada", "park": "Zion", "start_date": "Oct 1st"}]
            }"#,
        )
        .unwrap();
        let err = scenario.build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_unknown_and_duplicate_names() {
        let err = Scenario::new()
            .with_park("Zion")
            .with_trip(TripEntry::new("Ada", "Zion", "Oct 1st", "Oct 3rd"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::UnknownReference { field: "visitor", .. }));

        let err = Scenario::new()
            .with_park("Zion")
            .with_park("Zion")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_add_rejects_duplicate_names() {
        let mut catalog = Catalog::new();
        catalog.add_visitor(Visitor::new("Ada").unwrap()).unwrap();
        catalog.add_park(Park::new("Zion").unwrap()).unwrap();

        let err = catalog.add_visitor(Visitor::new("Ada").unwrap()).unwrap_err();
        assert!(matches!(err, Error::DuplicateName { kind: "visitor", .. }));
        let err = catalog.add_park(Park::new("Zion").unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);

        // Same name across kinds is allowed
        catalog.add_park(Park::new("Ada").unwrap()).unwrap();

        assert_eq!(catalog.visitors().len(), 1);
        assert_eq!(catalog.parks().len(), 2);
    }

    #[test]
    fn test_serialized_scenario_loads_again() {
        let json = serde_json::to_string(&Scenario::demo()).unwrap();
        let catalog = Scenario::from_json_str(&json).unwrap().build().unwrap();
        assert_eq!(catalog.trips().len(), 4);
    }
}
