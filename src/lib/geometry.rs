use super::bbox::BoundingBox;
use super::error::{Error, Result};
use super::shape::{Coord, Curve, Surface, Surfaces};
use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use std::fmt;
use std::str::FromStr;

/// The six geometry tags of RFC 7946 (GeometryCollection is not supported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

const NAMES: &[&str] = &[
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
];

impl GeometryType {
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
        }
    }
}

impl FromStr for GeometryType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "Point" => Ok(GeometryType::Point),
            "MultiPoint" => Ok(GeometryType::MultiPoint),
            "LineString" => Ok(GeometryType::LineString),
            "MultiLineString" => Ok(GeometryType::MultiLineString),
            "Polygon" => Ok(GeometryType::Polygon),
            "MultiPolygon" => Ok(GeometryType::MultiPolygon),
            other => Err(Error::unsupported(other)),
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A geometry object: points, curves and surfaces in coordinate space.
///
/// Each variant owns its coordinates and fixes the nesting depth of the
/// `coordinates` member on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single position.
    Point(Coord),
    /// An array of positions.
    MultiPoint(Curve),
    /// An array of two or more positions.
    LineString(Curve),
    /// An array of LineString coordinate arrays.
    MultiLineString(Surface),
    /// Exterior ring first, interior rings after. Closure and winding are
    /// not checked.
    Polygon(Surface),
    /// An array of Polygon coordinate arrays.
    MultiPolygon(Surfaces),
}

#[derive(Deserialize)]
struct GeometryObject<'a> {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(borrow, default)]
    coordinates: Option<&'a RawValue>,
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
        }
    }

    /// Envelope of all positions; `None` when the first element path of the
    /// coordinates is empty.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Geometry::Point(coord) => BoundingBox::of(coord),
            Geometry::MultiPoint(curve) | Geometry::LineString(curve) => BoundingBox::of(curve),
            Geometry::MultiLineString(surface) | Geometry::Polygon(surface) => {
                BoundingBox::of(surface)
            }
            Geometry::MultiPolygon(surfaces) => BoundingBox::of(surfaces),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decodes a geometry object.
    ///
    /// A `null` document, or an object without a `type`, is the null geometry
    /// and yields `Ok(None)`.
    pub fn decode(bytes: &[u8]) -> Result<Option<Self>> {
        let object: Option<GeometryObject> = serde_json::from_slice(bytes)?;
        match object {
            Some(object) => Geometry::from_object(object),
            None => Ok(None),
        }
    }

    pub(crate) fn from_raw(raw: &RawValue) -> Result<Option<Self>> {
        Geometry::decode(raw.get().as_bytes())
    }

    fn from_object(object: GeometryObject<'_>) -> Result<Option<Self>> {
        let kind: GeometryType = match object.kind.as_deref() {
            None | Some("") => return Ok(None),
            Some(tag) => tag.parse()?,
        };
        log::trace!("decoding {} geometry", kind);

        let coordinates = object
            .coordinates
            .ok_or_else(|| Error::Malformed(serde_json::Error::missing_field("coordinates")))?;
        let mut de = serde_json::Deserializer::from_str(coordinates.get());
        let geometry = Geometry::from_coordinates(kind, &mut de)?;
        Ok(Some(geometry))
    }

    fn from_coordinates<'de, D>(kind: GeometryType, coordinates: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let geometry = match kind {
            GeometryType::Point => Geometry::Point(Coord::deserialize(coordinates)?),
            GeometryType::MultiPoint => Geometry::MultiPoint(Curve::deserialize(coordinates)?),
            GeometryType::LineString => Geometry::LineString(Curve::deserialize(coordinates)?),
            GeometryType::MultiLineString => {
                Geometry::MultiLineString(Surface::deserialize(coordinates)?)
            }
            GeometryType::Polygon => Geometry::Polygon(Surface::deserialize(coordinates)?),
            GeometryType::MultiPolygon => {
                Geometry::MultiPolygon(Surfaces::deserialize(coordinates)?)
            }
        };
        Ok(geometry)
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Geometry", 2)?;
        state.serialize_field("type", self.geometry_type().as_str())?;
        match self {
            Geometry::Point(coord) => state.serialize_field("coordinates", coord)?,
            Geometry::MultiPoint(curve) | Geometry::LineString(curve) => {
                state.serialize_field("coordinates", curve)?
            }
            Geometry::MultiLineString(surface) | Geometry::Polygon(surface) => {
                state.serialize_field("coordinates", surface)?
            }
            Geometry::MultiPolygon(surfaces) => state.serialize_field("coordinates", surfaces)?,
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Tagged {
            #[serde(rename = "type")]
            kind: String,
            coordinates: serde_json::Value,
        }

        let tagged = Tagged::deserialize(deserializer)?;
        let kind: GeometryType = tagged
            .kind
            .parse()
            .map_err(|_| D::Error::unknown_variant(&tagged.kind, NAMES))?;
        Geometry::from_coordinates(kind, tagged.coordinates).map_err(D::Error::custom)
    }
}

impl From<Coord> for Geometry {
    fn from(coord: Coord) -> Self {
        Geometry::Point(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn decode(json: &str) -> Geometry {
        Geometry::decode(json.as_bytes()).unwrap().unwrap()
    }

    #[test]
    fn decode_point() {
        let geometry = decode(GEOMETRY_POINT);
        assert_eq!(geometry, Geometry::Point(Coord::new(100.0, 0.0)));
    }

    #[test]
    fn decode_multi_point() {
        let geometry = decode(GEOMETRY_MULTI_POINT);
        let curve = Curve::from(vec![(100.0, 0.0), (101.0, 1.0)]);
        assert_eq!(geometry, Geometry::MultiPoint(curve));
    }

    #[test]
    fn decode_line_string() {
        let geometry = decode(GEOMETRY_LINE_STRING);
        let curve = Curve::from(vec![(100.0, 0.0), (101.0, 1.0)]);
        assert_eq!(geometry, Geometry::LineString(curve));
    }

    #[test]
    fn decode_multi_line_string() {
        let geometry = decode(GEOMETRY_MULTI_LINE_STRING);
        match &geometry {
            Geometry::MultiLineString(surface) => {
                assert_eq!(surface.len(), 2);
                assert_eq!(surface[1][1], Coord::new(103.0, 3.0));
            }
            other => panic!("unexpected geometry {:?}", other),
        }
        assert_eq!(
            geometry.bounding_box(),
            Some(BoundingBox::new(100.0, 0.0, 103.0, 3.0))
        );
    }

    #[test]
    fn decode_polygon() {
        let geometry = decode(GEOMETRY_POLYGON);
        assert_eq!(geometry, Geometry::Polygon(Surface::from(vec![square(100.0, 0.0)])));
        assert_eq!(
            geometry.bounding_box(),
            Some(BoundingBox::new(100.0, 0.0, 101.0, 1.0))
        );
    }

    #[test]
    fn decode_polygon_with_hole() {
        let geometry = decode(GEOMETRY_POLYGON_WITH_HOLE);
        match &geometry {
            Geometry::Polygon(surface) => assert_eq!(surface.len(), 2),
            other => panic!("unexpected geometry {:?}", other),
        }
        assert_eq!(
            geometry.bounding_box(),
            Some(BoundingBox::new(100.0, 0.0, 101.0, 1.0))
        );
    }

    #[test]
    fn decode_multi_polygon() {
        let geometry = decode(GEOMETRY_MULTI_POLYGON);
        assert_eq!(geometry.geometry_type(), GeometryType::MultiPolygon);
        assert_eq!(
            geometry.bounding_box(),
            Some(BoundingBox::new(100.0, 0.0, 103.0, 3.0))
        );
    }

    #[test]
    fn encode_round_trip() {
        for json in &[
            GEOMETRY_POINT,
            GEOMETRY_MULTI_POINT,
            GEOMETRY_LINE_STRING,
            GEOMETRY_MULTI_LINE_STRING,
            GEOMETRY_POLYGON,
            GEOMETRY_POLYGON_WITH_HOLE,
            GEOMETRY_MULTI_POLYGON,
        ] {
            let geometry = decode(json);
            let bytes = geometry.encode().unwrap();
            let back = Geometry::decode(&bytes).unwrap();
            assert_eq!(back, Some(geometry));
        }
    }

    #[test]
    fn empty_round_trip() {
        let empties = vec![
            Geometry::Point(Coord::empty()),
            Geometry::MultiPoint(Curve::new()),
            Geometry::LineString(Curve::new()),
            Geometry::MultiLineString(Surface::new()),
            Geometry::Polygon(Surface::new()),
            Geometry::MultiPolygon(Surfaces::new()),
        ];
        for geometry in empties {
            assert_eq!(geometry.bounding_box(), None);
            let bytes = geometry.encode().unwrap();
            assert_eq!(Geometry::decode(&bytes).unwrap(), Some(geometry));
        }
    }

    #[test]
    fn wire_shape() {
        let geometry = Geometry::LineString(Curve::from(vec![(1.0, 2.0), (3.0, 4.0)]));
        let json = String::from_utf8(geometry.encode().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"type":"LineString","coordinates":[[1.0,2.0],[3.0,4.0]]}"#
        );

        let point = Geometry::Point(Coord::new(1.0, 2.0));
        let json = String::from_utf8(point.encode().unwrap()).unwrap();
        assert_eq!(json, r#"{"type":"Point","coordinates":[1.0,2.0]}"#);
    }

    #[test]
    fn unknown_type() {
        let err = Geometry::decode(br#"{"type":"Unknown","coordinates":[1.0,2.0]}"#).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(ref tag) if tag == "Unknown"));

        let err = Geometry::decode(br#"{"type":"point","coordinates":[1.0,2.0]}"#).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(ref tag) if tag == "point"));
    }

    #[test]
    fn malformed_bytes() {
        let err = Geometry::decode(br#"{"type":"Point","coordinates":[1.0,"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));

        let err = Geometry::decode(br#"{"type":"Point"}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn wrong_depth() {
        let err = Geometry::decode(br#"{"type":"Polygon","coordinates":[[1.0,2.0]]}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));

        let err = Geometry::decode(br#"{"type":"Point","coordinates":[[1.0,2.0]]}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn null_geometry() {
        assert_eq!(Geometry::decode(b"null").unwrap(), None);
        assert_eq!(Geometry::decode(b"{}").unwrap(), None);
        assert_eq!(Geometry::decode(br#"{"type":""}"#).unwrap(), None);
    }

    #[test]
    fn serde_embedding() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Site {
            name: String,
            location: Option<Geometry>,
        }

        let site = Site {
            name: "pier".into(),
            location: Some(Geometry::Point(Coord::new(24.95, 60.16))),
        };
        let json = serde_json::to_string(&site).unwrap();
        let back: Site = serde_json::from_str(&json).unwrap();
        assert_eq!(back, site);

        let bad = r#"{"name":"pier","location":{"type":"Circle","coordinates":[0.0,0.0]}}"#;
        let err = serde_json::from_str::<Site>(bad).unwrap_err();
        assert!(err.to_string().contains("Circle"));
    }

    #[test]
    fn geometry_type_tags() {
        for name in NAMES {
            let kind: GeometryType = name.parse().unwrap();
            assert_eq!(kind.to_string(), *name);
        }
    }
}
