//! Visitor entity and its trip-derived statistics

use crate::error::Result;
use crate::limits::validate_visitor_name;
use crate::park::Park;
use crate::registry::{distinct, TripRegistry};
use crate::trip::Trip;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};
use ulid::Ulid;

/// Unique identifier for a visitor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VisitorId(pub Ulid);

impl VisitorId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for VisitorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VisitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct VisitorInner {
    id: VisitorId,
    name: RwLock<String>,
}

/// A park visitor
///
/// Like [`Park`], a `Visitor` is a shared handle compared by identity. Unlike
/// a park, a visitor can be renamed; the new name is seen through every
/// clone, including the ones held by trips.
#[derive(Debug, Clone)]
pub struct Visitor {
    inner: Arc<VisitorInner>,
}

impl Visitor {
    /// Create a new visitor; the name must be 1 to 15 chars long
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if let Err(e) = validate_visitor_name(&name) {
            tracing::debug!(name = %name, "Rejected visitor name: {}", e);
            return Err(e.into());
        }
        Ok(Self {
            inner: Arc::new(VisitorInner {
                id: VisitorId::new(),
                name: RwLock::new(name),
            }),
        })
    }

    pub fn id(&self) -> &VisitorId {
        &self.inner.id
    }

    pub fn name(&self) -> String {
        // The guarded String is always whole, so a poisoned lock is still readable
        self.inner
            .name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rename the visitor, applying the same rules as [`Visitor::new`]
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_visitor_name(&name)?;
        let mut current = self
            .inner
            .name
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(
            visitor = %self.inner.id,
            from = %current.as_str(),
            to = %name,
            "Renamed visitor"
        );
        *current = name;
        Ok(())
    }

    /// All trips made by this visitor, in registration order
    pub fn trips<'r>(&self, registry: &'r TripRegistry) -> Vec<&'r Trip> {
        registry.trips_for_visitor(self)
    }

    /// Distinct parks this visitor has been to, first-seen order
    pub fn national_parks(&self, registry: &TripRegistry) -> Vec<Park> {
        distinct(self.trips(registry).into_iter().map(|t| t.park().clone()))
    }

    pub fn total_visits_at_park(&self, registry: &TripRegistry, park: &Park) -> usize {
        self.trips(registry)
            .into_iter()
            .filter(|t| t.park() == park)
            .count()
    }
}

impl PartialEq for Visitor {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Visitor {}

impl Hash for Visitor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl std::fmt::Display for Visitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Visitor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Visitor", 2)?;
        state.serialize_field("id", &self.inner.id)?;
        state.serialize_field("name", &self.name())?;
        state.end()
    }
}
