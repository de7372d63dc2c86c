use super::bbox::BoundingBox;
use super::error::{Error, Result};
use super::geometry::Geometry;
use super::id::Id;
use super::options::Options;
use super::shape::{Coord, Curve, Surface, Surfaces};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::value::{to_raw_value, RawValue};

const FEATURE: &str = "Feature";

/// Something that can be written to and read from GeoJSON on its own, and
/// that knows its bounding box. Host types wrapping a [`Feature`] implement
/// this by forwarding to [`Feature::encode_with`] and [`Feature::decode`],
/// which is what lets them live in a [`Collection`](super::Collection).
pub trait Entity: Sized {
    fn bounding_box(&self) -> Option<BoundingBox>;

    fn encode_raw(&self, options: &Options) -> Result<Box<RawValue>>;

    fn from_geojson(bytes: &[u8]) -> Result<Self>;

    fn to_geojson(&self) -> Result<Vec<u8>> {
        let raw = self.encode_raw(&Options::default())?;
        Ok(raw.get().as_bytes().to_vec())
    }
}

/// A spatially bounded thing: an optional identifier and an optional geometry.
///
/// Properties are not stored here. The host type keeps its own fields next
/// to a `Feature` and passes them in on every encode and decode:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use typed_geojson::{Coord, Feature};
///
/// #[derive(Serialize, Deserialize, Default)]
/// struct City {
///     name: String,
/// }
///
/// let feature = Feature::point("city:helsinki", Coord::new(24.94, 60.17));
/// let city = City { name: "Helsinki".into() };
/// let bytes = feature.encode(&city).unwrap();
///
/// let mut decoded = Feature::default();
/// let mut props = City::default();
/// decoded.decode(&bytes, &mut props).unwrap();
/// assert_eq!(props.name, "Helsinki");
/// assert_eq!(decoded, feature);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    pub id: Option<Id>,
    pub geometry: Option<Geometry>,
}

#[derive(Serialize)]
struct FeatureObject<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bbox: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a Id>,
    geometry: Option<&'a Geometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Box<RawValue>>,
}

#[derive(Deserialize)]
struct RawFeature<'a> {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    id: Option<Id>,
    #[serde(borrow, default)]
    geometry: Option<&'a RawValue>,
    #[serde(borrow, default)]
    properties: Option<&'a RawValue>,
}

/// Serializes host properties to a raw fragment; `null` counts as absent.
pub(crate) fn encode_properties<P: Serialize + ?Sized>(
    properties: &P,
) -> Result<Option<Box<RawValue>>> {
    let raw = to_raw_value(properties).map_err(Error::PropertiesCodec)?;
    if raw.get() == "null" {
        return Ok(None);
    }
    Ok(Some(raw))
}

pub(crate) fn decode_properties<P: DeserializeOwned>(raw: Option<&RawValue>) -> Result<Option<P>> {
    raw.map(|raw| serde_json::from_str(raw.get()).map_err(Error::PropertiesCodec))
        .transpose()
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Feature {
            id: None,
            geometry: Some(geometry),
        }
    }

    /// Feature without geometry.
    pub fn unlocated() -> Self {
        Feature::default()
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn point(id: impl Into<Id>, coord: impl Into<Coord>) -> Self {
        Feature::new(Geometry::Point(coord.into())).with_id(id)
    }

    pub fn multi_point(id: impl Into<Id>, coords: impl Into<Curve>) -> Self {
        Feature::new(Geometry::MultiPoint(coords.into())).with_id(id)
    }

    pub fn line_string(id: impl Into<Id>, coords: impl Into<Curve>) -> Self {
        Feature::new(Geometry::LineString(coords.into())).with_id(id)
    }

    pub fn multi_line_string(id: impl Into<Id>, coords: impl Into<Surface>) -> Self {
        Feature::new(Geometry::MultiLineString(coords.into())).with_id(id)
    }

    pub fn polygon(id: impl Into<Id>, coords: impl Into<Surface>) -> Self {
        Feature::new(Geometry::Polygon(coords.into())).with_id(id)
    }

    pub fn multi_polygon(id: impl Into<Id>, coords: impl Into<Surfaces>) -> Self {
        Feature::new(Geometry::MultiPolygon(coords.into())).with_id(id)
    }

    /// `None` for unlocated features, else the box of the geometry (points
    /// included).
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.geometry.as_ref().and_then(Geometry::bounding_box)
    }

    /// Encodes the feature with `properties` as its `properties` member.
    pub fn encode<P: Serialize + ?Sized>(&self, properties: &P) -> Result<Vec<u8>> {
        self.encode_with(properties, &Options::default())
    }

    pub fn encode_with<P: Serialize + ?Sized>(
        &self,
        properties: &P,
        options: &Options,
    ) -> Result<Vec<u8>> {
        let raw = self.to_raw(properties, options)?;
        Ok(raw.get().as_bytes().to_vec())
    }

    /// Like [`encode_with`](Feature::encode_with), but keeps the result as a
    /// JSON fragment ready to embed in a larger document.
    pub fn to_raw<P: Serialize + ?Sized>(
        &self,
        properties: &P,
        options: &Options,
    ) -> Result<Box<RawValue>> {
        let properties = encode_properties(properties)?;
        let object = FeatureObject {
            kind: FEATURE,
            bbox: self.wire_bbox(options),
            id: self.id.as_ref(),
            geometry: self.geometry.as_ref(),
            properties,
        };
        Ok(to_raw_value(&object)?)
    }

    fn wire_bbox(&self, options: &Options) -> Option<BoundingBox> {
        if !options.bbox {
            return None;
        }
        match &self.geometry {
            Some(Geometry::Point(_)) if !options.point_bbox => None,
            Some(geometry) => geometry.bounding_box(),
            None => None,
        }
    }

    /// Decodes a Feature object into `self`, and its `properties` member
    /// into `properties`.
    ///
    /// Nothing is written unless the whole document decodes. A missing or
    /// `null` `properties` member leaves `properties` as it was.
    pub fn decode<P: DeserializeOwned>(&mut self, bytes: &[u8], properties: &mut P) -> Result<()> {
        let raw: RawFeature = serde_json::from_slice(bytes)?;
        if raw.kind != FEATURE {
            return Err(Error::unsupported(&raw.kind));
        }

        let geometry = match raw.geometry {
            Some(geometry) => Geometry::from_raw(geometry)?,
            None => None,
        };
        let props = decode_properties(raw.properties)?;
        log::trace!(
            "decoded feature {:?} with {} geometry",
            raw.id.as_ref().map(Id::as_str),
            geometry.as_ref().map_or("no", |g| g.geometry_type().as_str())
        );

        self.id = raw.id;
        self.geometry = geometry;
        if let Some(props) = props {
            *properties = props;
        }
        Ok(())
    }
}

impl Entity for Feature {
    fn bounding_box(&self) -> Option<BoundingBox> {
        Feature::bounding_box(self)
    }

    fn encode_raw(&self, options: &Options) -> Result<Box<RawValue>> {
        self.to_raw(&(), options)
    }

    fn from_geojson(bytes: &[u8]) -> Result<Self> {
        let mut feature = Feature::default();
        feature.decode(bytes, &mut IgnoredAny)?;
        Ok(feature)
    }
}
