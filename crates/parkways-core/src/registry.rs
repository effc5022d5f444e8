//! Trip registry: the owned, append-only list every relationship query scans

use crate::error::{Error, Result};
use crate::park::Park;
use crate::trip::{Trip, TripId};
use crate::visitor::Visitor;
use std::collections::HashSet;
use std::hash::Hash;

/// Append-only collection of trips, in registration order
///
/// Queries are linear scans. Entries only leave through [`TripRegistry::clear`].
#[derive(Debug, Default)]
pub struct TripRegistry {
    trips: Vec<Trip>,
}

impl TripRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a new trip.
    ///
    /// On error nothing is registered.
    pub fn record(
        &mut self,
        visitor: &Visitor,
        park: &Park,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<&Trip> {
        let trip = match Trip::new(visitor, park, start_date, end_date) {
            Ok(trip) => trip,
            Err(e) => {
                tracing::debug!(visitor = %visitor, park = %park, "Rejected trip: {}", e);
                return Err(e);
            }
        };
        tracing::debug!(
            trip = %trip.id(),
            visitor = %visitor,
            park = %park,
            "Recorded trip"
        );

        let index = self.trips.len();
        self.trips.push(trip);
        Ok(&self.trips[index])
    }

    pub fn get(&self, id: &TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id() == id)
    }

    pub fn get_mut(&mut self, id: &TripId) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| t.id() == id)
    }

    /// Apply a fallible change to a registered trip
    pub fn update<F>(&mut self, id: &TripId, f: F) -> Result<&Trip>
    where
        F: FnOnce(&mut Trip) -> Result<()>,
    {
        let trip = self
            .get_mut(id)
            .ok_or_else(|| Error::TripNotFound(id.to_string()))?;
        f(&mut *trip)?;
        Ok(trip)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Drop every registered trip
    pub fn clear(&mut self) {
        tracing::debug!(count = self.trips.len(), "Clearing trip registry");
        self.trips.clear();
    }

    pub fn trips_for_park(&self, park: &Park) -> Vec<&Trip> {
        self.trips.iter().filter(|t| t.park() == park).collect()
    }

    pub fn trips_for_visitor(&self, visitor: &Visitor) -> Vec<&Trip> {
        self.trips.iter().filter(|t| t.visitor() == visitor).collect()
    }
}

impl<'a> IntoIterator for &'a TripRegistry {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

/// Deduplicate, keeping the first occurrence of each item
pub(crate) fn distinct<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
