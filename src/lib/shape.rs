//! Coordinate containers shared by all geometry variants.
//!
//! A [`Coord`] is a single position, a [`Curve`] an ordered run of positions,
//! a [`Surface`] an ordered run of curves (exterior ring first, holes after)
//! and [`Surfaces`] an ordered run of surfaces. All of them encode as plain
//! nested JSON arrays.

use super::error::Error;
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::iter::FromIterator;
use std::ops::Deref;

/// Read-only traversal over the leaf positions of a shape.
pub trait Shape {
    /// Visit every non-empty position in document order.
    fn for_each_coord<F: FnMut(&Coord)>(&self, visitor: &mut F);

    /// First position reached by taking the first element at every level.
    ///
    /// `None` as soon as one level on that path is empty, even if later
    /// elements carry positions.
    fn seed(&self) -> Option<&Coord>;
}

/// A position: `[x, y, ...]`, longitude and latitude for geographic data.
///
/// Either empty (an unset point) or at least two elements long.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Coord(Vec<f64>);

const POSITION: &str = "an empty position or one with at least two elements";

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Coord(vec![x, y])
    }

    /// Position with a third (altitude) element.
    pub fn with_altitude(x: f64, y: f64, z: f64) -> Self {
        Coord(vec![x, y, z])
    }

    pub fn empty() -> Self {
        Coord(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn xy(&self) -> Option<(f64, f64)> {
        match self.0.as_slice() {
            [x, y, ..] => Some((*x, *y)),
            _ => None,
        }
    }

    pub fn lng(&self) -> Option<f64> {
        self.xy().map(|(x, _)| x)
    }

    pub fn lat(&self) -> Option<f64> {
        self.xy().map(|(_, y)| y)
    }

    /// `(lat, lng)`, the reverse of the wire order.
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        self.xy().map(|(x, y)| (y, x))
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        if values.len() == 1 {
            return Err(D::Error::invalid_length(1, &POSITION));
        }
        Ok(Coord(values))
    }
}

impl TryFrom<Vec<f64>> for Coord {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        if values.len() == 1 {
            let err = serde_json::Error::invalid_length(1, &POSITION);
            return Err(Error::Malformed(err));
        }
        Ok(Coord(values))
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::new(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Coord::new(x, y)
    }
}

impl From<[f64; 3]> for Coord {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Coord::with_altitude(x, y, z)
    }
}

impl Shape for Coord {
    fn for_each_coord<F: FnMut(&Coord)>(&self, visitor: &mut F) {
        if self.xy().is_some() {
            visitor(self)
        }
    }

    fn seed(&self) -> Option<&Coord> {
        self.xy().map(|_| self)
    }
}

macro_rules! sequence {
    ($(#[$meta:meta])* $name:ident of $item:ty) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
        #[serde(transparent)]
        pub struct $name(Vec<$item>);

        impl $name {
            pub fn new() -> Self {
                $name(Vec::new())
            }

            pub fn push(&mut self, item: impl Into<$item>) {
                self.0.push(item.into())
            }

            pub fn into_inner(self) -> Vec<$item> {
                self.0
            }
        }

        impl Deref for $name {
            type Target = [$item];

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<T: Into<$item>> From<Vec<T>> for $name {
            fn from(items: Vec<T>) -> Self {
                items.into_iter().collect()
            }
        }

        impl<T: Into<$item>> FromIterator<T> for $name {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                $name(iter.into_iter().map(Into::into).collect())
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl Shape for $name {
            fn for_each_coord<F: FnMut(&Coord)>(&self, visitor: &mut F) {
                for item in &self.0 {
                    item.for_each_coord(visitor);
                }
            }

            fn seed(&self) -> Option<&Coord> {
                self.0.first()?.seed()
            }
        }
    };
}

sequence! {
    /// Positions of a `LineString` or `MultiPoint`.
    Curve of Coord
}

sequence! {
    /// Curves of a `Polygon` (rings) or `MultiLineString`.
    Surface of Curve
}

sequence! {
    /// Polygons of a `MultiPolygon`.
    Surfaces of Surface
}
