//! Conversions to and from [`geo_types`], so decoded shapes can be handed to
//! the georust algorithms.
//!
//! Only x/y survive the trip: altitudes are dropped.

use super::bbox::BoundingBox;
use super::error::Error;
use super::geometry::Geometry;
use super::shape::{Coord, Curve, Surface};
use geo_types::{Coordinate, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Rect};
use std::convert::TryFrom;

fn to_coordinate(coord: &Coord) -> Option<Coordinate<f64>> {
    let (x, y) = coord.xy()?;
    Some(Coordinate { x, y })
}

fn to_line_string(curve: &Curve) -> LineString<f64> {
    curve.iter().filter_map(to_coordinate).collect()
}

fn to_polygon(surface: &Surface) -> Polygon<f64> {
    let mut rings = surface.iter().map(to_line_string);
    let exterior = rings.next().unwrap_or_else(|| LineString(vec![]));
    Polygon::new(exterior, rings.collect())
}

impl From<&Geometry> for geo_types::Geometry<f64> {
    /// An empty Point has no geo-types counterpart and becomes an empty
    /// MultiPoint.
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(coord) => match to_coordinate(coord) {
                Some(c) => Point(c).into(),
                None => MultiPoint(vec![]).into(),
            },
            Geometry::MultiPoint(curve) => {
                let points: Vec<Point<f64>> =
                    curve.iter().filter_map(to_coordinate).map(Point).collect();
                MultiPoint(points).into()
            }
            Geometry::LineString(curve) => to_line_string(curve).into(),
            Geometry::MultiLineString(surface) => {
                MultiLineString(surface.iter().map(to_line_string).collect()).into()
            }
            Geometry::Polygon(surface) => to_polygon(surface).into(),
            Geometry::MultiPolygon(surfaces) => {
                MultiPolygon(surfaces.iter().map(to_polygon).collect()).into()
            }
        }
    }
}

impl From<Geometry> for geo_types::Geometry<f64> {
    fn from(geometry: Geometry) -> Self {
        (&geometry).into()
    }
}

fn from_coordinate(c: Coordinate<f64>) -> Coord {
    Coord::new(c.x, c.y)
}

fn from_line_string(line_string: &LineString<f64>) -> Curve {
    line_string.0.iter().copied().map(from_coordinate).collect()
}

fn from_polygon(polygon: &Polygon<f64>) -> Surface {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(from_line_string)
        .collect()
}

fn ring(corners: &[Coordinate<f64>]) -> Surface {
    let mut curve: Curve = corners.iter().copied().map(from_coordinate).collect();
    if let Some(first) = corners.first() {
        curve.push(from_coordinate(*first));
    }
    Surface::from(vec![curve])
}

impl TryFrom<geo_types::Geometry<f64>> for Geometry {
    type Error = Error;

    /// `Line`, `Rect` and `Triangle` widen to LineString and Polygon;
    /// `GeometryCollection` is not supported.
    fn try_from(geometry: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        let geometry = match geometry {
            geo_types::Geometry::Point(point) => Geometry::Point(from_coordinate(point.0)),
            geo_types::Geometry::Line(line) => {
                let curve: Curve = vec![from_coordinate(line.start), from_coordinate(line.end)].into();
                Geometry::LineString(curve)
            }
            geo_types::Geometry::LineString(line_string) => {
                Geometry::LineString(from_line_string(&line_string))
            }
            geo_types::Geometry::Polygon(polygon) => Geometry::Polygon(from_polygon(&polygon)),
            geo_types::Geometry::MultiPoint(points) => {
                Geometry::MultiPoint(points.0.iter().map(|p| from_coordinate(p.0)).collect())
            }
            geo_types::Geometry::MultiLineString(lines) => {
                Geometry::MultiLineString(lines.0.iter().map(from_line_string).collect())
            }
            geo_types::Geometry::MultiPolygon(polygons) => {
                Geometry::MultiPolygon(polygons.0.iter().map(from_polygon).collect())
            }
            geo_types::Geometry::Rect(rect) => {
                let (min, max) = (rect.min(), rect.max());
                Geometry::Polygon(ring(&[
                    min,
                    Coordinate { x: max.x, y: min.y },
                    max,
                    Coordinate { x: min.x, y: max.y },
                ]))
            }
            geo_types::Geometry::Triangle(triangle) => {
                Geometry::Polygon(ring(&[triangle.0, triangle.1, triangle.2]))
            }
            geo_types::Geometry::GeometryCollection(_) => {
                return Err(Error::unsupported("GeometryCollection"))
            }
        };
        Ok(geometry)
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        let (sw, ne) = bbox.sw_ne();
        Rect::new(
            Coordinate { x: sw[0], y: sw[1] },
            Coordinate { x: ne[0], y: ne[1] },
        )
    }
}
