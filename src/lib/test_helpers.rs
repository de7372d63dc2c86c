use super::bbox::BoundingBox;
use super::error::Result;
use super::feature::{Entity, Feature};
use super::options::Options;
use super::shape::Curve;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

pub const CITY_HELSINKI: &str = "city:helsinki";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct City {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// Host type: a feature with typed properties next to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoCity {
    pub feature: Feature,
    pub city: City,
}

impl Entity for GeoCity {
    fn bounding_box(&self) -> Option<BoundingBox> {
        self.feature.bounding_box()
    }

    fn encode_raw(&self, options: &Options) -> Result<Box<RawValue>> {
        self.feature.to_raw(&self.city, options)
    }

    fn from_geojson(bytes: &[u8]) -> Result<Self> {
        let mut city = GeoCity::default();
        city.feature.decode(bytes, &mut city.city)?;
        Ok(city)
    }
}

/// Closed unit square ring with its south-west corner at `(x, y)`.
pub fn square(x: f64, y: f64) -> Curve {
    Curve::from(vec![
        (x, y),
        (x + 1.0, y),
        (x + 1.0, y + 1.0),
        (x, y + 1.0),
        (x, y),
    ])
}

pub const FEATURE_INVALID: &str = r#"
    {
        "type": "Unknown",
        "geometry": {
            "type": "Point",
            "coordinates": [102.0, 0.5]
        },
        "properties": {
            "name": "Helsinki"
        }
    }
"#;

pub const FEATURE_POINT: &str = r#"
    {
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [102.0, 0.5]
        },
        "properties": {
            "name": "Helsinki"
        }
    }
"#;

pub const GEOMETRY_POINT: &str = r#"
    {
        "type": "Point",
        "coordinates": [100.0, 0.0]
    }
"#;

pub const GEOMETRY_MULTI_POINT: &str = r#"
    {
        "type": "MultiPoint",
        "coordinates": [
            [100.0, 0.0],
            [101.0, 1.0]
        ]
    }
"#;

pub const GEOMETRY_LINE_STRING: &str = r#"
    {
        "type": "LineString",
        "coordinates": [
            [100.0, 0.0],
            [101.0, 1.0]
        ]
    }
"#;

pub const GEOMETRY_MULTI_LINE_STRING: &str = r#"
    {
        "type": "MultiLineString",
        "coordinates": [
            [[100.0, 0.0], [101.0, 1.0]],
            [[102.0, 2.0], [103.0, 3.0]]
        ]
    }
"#;

pub const GEOMETRY_POLYGON: &str = r#"
    {
        "type": "Polygon",
        "coordinates": [
            [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]]
        ]
    }
"#;

pub const GEOMETRY_POLYGON_WITH_HOLE: &str = r#"
    {
        "type": "Polygon",
        "coordinates": [
            [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
            [[100.8, 0.8], [100.8, 0.2], [100.2, 0.2], [100.2, 0.8], [100.8, 0.8]]
        ]
    }
"#;

pub const GEOMETRY_MULTI_POLYGON: &str = r#"
    {
        "type": "MultiPolygon",
        "coordinates": [
            [
                [[102.0, 2.0], [103.0, 2.0], [103.0, 3.0], [102.0, 3.0], [102.0, 2.0]]
            ],
            [
                [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
                [[100.2, 0.2], [100.2, 0.8], [100.8, 0.8], [100.8, 0.2], [100.2, 0.2]]
            ]
        ]
    }
"#;
