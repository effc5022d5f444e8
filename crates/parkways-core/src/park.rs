//! Park entity and its trip-derived statistics

use crate::error::{Error, Result};
use crate::limits::validate_park_name;
use crate::registry::{distinct, TripRegistry};
use crate::trip::Trip;
use crate::visitor::Visitor;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::cmp::Reverse;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use ulid::Ulid;

/// Unique identifier for a park
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParkId(pub Ulid);

impl ParkId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ParkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct ParkInner {
    id: ParkId,
    name: String,
}

/// A national park
///
/// `Park` is a shared handle: clones refer to the same park, and equality is
/// identity (two parks constructed with the same name are different parks).
/// The name is fixed at construction.
#[derive(Debug, Clone)]
pub struct Park {
    inner: Arc<ParkInner>,
}

impl Park {
    /// Create a new park; the name must be at least 3 chars long
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if let Err(e) = validate_park_name(&name) {
            tracing::debug!(name = %name, "Rejected park name: {}", e);
            return Err(e.into());
        }
        Ok(Self {
            inner: Arc::new(ParkInner {
                id: ParkId::new(),
                name,
            }),
        })
    }

    pub fn id(&self) -> &ParkId {
        &self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Park names are set once; every reassignment is rejected
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        tracing::debug!(park = %self.inner.name, attempted = %name, "Rejected park rename");
        Err(Error::Immutable { field: "name" })
    }

    /// All trips to this park, in registration order
    pub fn trips<'r>(&self, registry: &'r TripRegistry) -> Vec<&'r Trip> {
        registry.trips_for_park(self)
    }

    /// Distinct visitors who made a trip here, first-seen order
    pub fn visitors(&self, registry: &TripRegistry) -> Vec<Visitor> {
        distinct(self.trips(registry).into_iter().map(|t| t.visitor().clone()))
    }

    pub fn total_visits(&self, registry: &TripRegistry) -> usize {
        self.trips(registry).len()
    }

    /// Visitor with the most trips to this park.
    ///
    /// Ties go to the visitor whose first trip here was registered earliest.
    /// Returns `None` if nobody has visited.
    pub fn best_visitor(&self, registry: &TripRegistry) -> Option<Visitor> {
        self.visitors(registry)
            .into_iter()
            .map(|visitor| {
                let visits = visitor.total_visits_at_park(registry, self);
                (visitor, visits)
            })
            // min_by_key keeps the first of equal keys
            .min_by_key(|(_, visits)| Reverse(*visits))
            .map(|(visitor, _)| visitor)
    }
}

impl PartialEq for Park {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Park {}

impl Hash for Park {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl std::fmt::Display for Park {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.name)
    }
}

impl Serialize for Park {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Park", 2)?;
        state.serialize_field("id", &self.inner.id)?;
        state.serialize_field("name", &self.inner.name)?;
        state.end()
    }
}
