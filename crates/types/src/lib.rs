pub mod airport;
pub mod flight;
pub mod geometry;
pub mod passenger;
pub mod raster;

pub use airport::Airport;
pub use flight::Flight;
pub use geometry::{Point, Rect, Size, Transform};
pub use passenger::Passenger;
pub use raster::Raster;
