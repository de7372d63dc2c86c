//! A type safe codec for [GeoJSON](https://tools.ietf.org/html/rfc7946).
//!
//! Geometries are a closed enum, bounding boxes are derived from the
//! coordinates, and application properties stay in the host's own structs.
//! A host type keeps a [`Feature`] next to its fields and forwards encode and
//! decode through it:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use typed_geojson::{Collection, Coord, Entity, Feature, Options, Result};
//! use serde_json::value::RawValue;
//!
//! #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
//! struct City {
//!     name: String,
//! }
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct GeoCity {
//!     feature: Feature,
//!     city: City,
//! }
//!
//! impl Entity for GeoCity {
//!     fn bounding_box(&self) -> Option<typed_geojson::BoundingBox> {
//!         self.feature.bounding_box()
//!     }
//!
//!     fn encode_raw(&self, options: &Options) -> Result<Box<RawValue>> {
//!         self.feature.to_raw(&self.city, options)
//!     }
//!
//!     fn from_geojson(bytes: &[u8]) -> Result<Self> {
//!         let mut value = GeoCity::default();
//!         value.feature.decode(bytes, &mut value.city)?;
//!         Ok(value)
//!     }
//! }
//!
//! let cities: Collection<GeoCity> = vec![GeoCity {
//!     feature: Feature::point("city:helsinki", Coord::new(24.94, 60.17)),
//!     city: City { name: "Helsinki".into() },
//! }]
//! .into();
//!
//! let bytes = cities.to_geojson().unwrap();
//! let back = Collection::<GeoCity>::from_geojson(&bytes).unwrap();
//! assert_eq!(back, cities);
//! ```

pub use self::bbox::BoundingBox;
pub use self::collection::Collection;
pub use self::error::{Error, Result};
pub use self::feature::{Entity, Feature};
pub use self::geometry::{Geometry, GeometryType};
pub use self::id::Id;
pub use self::options::Options;
pub use self::shape::{Coord, Curve, Shape, Surface, Surfaces};

mod bbox;
mod collection;
mod error;
mod feature;
mod geo;
mod geometry;
mod id;
mod options;
mod shape;
#[cfg(test)]
mod test_helpers;
