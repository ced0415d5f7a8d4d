//! # ghz-core
//!
//! Domain types and pure computations for the Geohazard Gateway.
//!
//! Everything in this crate is side-effect free:
//! - Geographic points and great-circle distance
//! - Typed seismic event and volcano records
//! - Distance ranking and text filtering of volcano lists
//! - Seismic risk classification
//! - Response shapes returned by the gateway operations
//!
//! Upstream fetching lives in `ghz-upstream`; orchestration and input
//! validation live in `ghz-ops`.

pub mod geo;
pub mod models;
pub mod rank;
pub mod responses;
pub mod risk;

pub use geo::{GeoPoint, distance_km};
pub use models::{RankedVolcano, SeismicEvent, VolcanoRecord};
pub use rank::{filter_by_text, rank_by_distance};
pub use risk::{RiskLevel, SIGNIFICANT_MAGNITUDE, classify};
