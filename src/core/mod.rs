//! Core-Domänentypen: Koordinaten, Projektion, Schnitt-Test, Messung.

pub mod distance_format;
pub mod intersect;
pub mod lat_lng;
pub mod measurement;
pub mod mercator;
pub mod projection;

pub use distance_format::{
    readable_distance, DistanceFormatter, DistancePrecision, DistanceUnits, ReadableDistance,
};
pub use intersect::{first_crossed_segment, new_point_intersects, segments_intersect};
pub use lat_lng::LatLng;
pub use measurement::MeasurementTracker;
pub use mercator::{haversine_distance, WebMercatorView};
pub use projection::{PlanarView, Projection, ViewControl};
