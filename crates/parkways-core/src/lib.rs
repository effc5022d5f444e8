//! Parkways Core - visitors, parks and the trips between them
//!
//! Visitors and parks are linked many-to-many through trips. Every trip lives
//! in a [`TripRegistry`] owned by the caller; relationship queries on
//! [`Park`] and [`Visitor`] take that registry and scan it, matching entities
//! by identity.

pub mod error;
pub mod limits;
pub mod park;
pub mod registry;
pub mod scenario;
pub mod summary;
pub mod trip;
pub mod visitor;

pub use error::{Error, ErrorKind, Result};
pub use limits::ValidationError;
pub use park::{Park, ParkId};
pub use registry::TripRegistry;
pub use scenario::{Catalog, Scenario, TripEntry};
pub use summary::{ParkSummary, TripRecord, VisitorSummary};
pub use trip::{Trip, TripId};
pub use visitor::{Visitor, VisitorId};
