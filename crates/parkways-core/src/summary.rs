//! Serializable snapshots of parks, visitors and trips

use crate::park::{Park, ParkId};
use crate::registry::TripRegistry;
use crate::trip::{Trip, TripId};
use crate::visitor::{Visitor, VisitorId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Park with its visit statistics
#[derive(Debug, Clone, Serialize)]
pub struct ParkSummary {
    pub id: ParkId,
    pub name: String,
    pub total_visits: usize,
    pub visitors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_visitor: Option<String>,
}

impl ParkSummary {
    pub fn of(park: &Park, registry: &TripRegistry) -> Self {
        Self {
            id: park.id().clone(),
            name: park.name().to_string(),
            total_visits: park.total_visits(registry),
            visitors: park.visitors(registry).iter().map(Visitor::name).collect(),
            best_visitor: park.best_visitor(registry).map(|v| v.name()),
        }
    }
}

/// Visitor with the parks they have been to
#[derive(Debug, Clone, Serialize)]
pub struct VisitorSummary {
    pub id: VisitorId,
    pub name: String,
    pub total_trips: usize,
    pub national_parks: Vec<String>,
}

impl VisitorSummary {
    pub fn of(visitor: &Visitor, registry: &TripRegistry) -> Self {
        Self {
            id: visitor.id().clone(),
            name: visitor.name(),
            total_trips: visitor.trips(registry).len(),
            national_parks: visitor
                .national_parks(registry)
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
        }
    }
}

/// Flat view of a trip, with names in place of handles
#[derive(Debug, Clone, Serialize)]
pub struct TripRecord {
    pub id: TripId,
    pub visitor: String,
    pub park: String,
    pub start_date: String,
    pub end_date: String,
    pub recorded_at: DateTime<Utc>,
}

impl TripRecord {
    pub fn of(trip: &Trip) -> Self {
        Self {
            id: trip.id().clone(),
            visitor: trip.visitor().name(),
            park: trip.park().name().to_string(),
            start_date: trip.start_date().to_string(),
            end_date: trip.end_date().to_string(),
            recorded_at: trip.recorded_at(),
        }
    }
}
