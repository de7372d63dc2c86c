use super::shape::{Coord, Shape};
use serde::{Deserialize, Serialize};

/// Axis-aligned envelope `[west, south, east, north]`.
///
/// Always four elements: a wire bbox of any other length fails to decode.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    west: f64,
    south: f64,
    east: f64,
    north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        BoundingBox {
            west,
            south,
            east,
            north,
        }
    }

    /// Seeds the box from `seed`, then widens it by every position of `shape`.
    ///
    /// `None` if the seed carries no x/y.
    pub fn compute<S: Shape + ?Sized>(seed: &Coord, shape: &S) -> Option<Self> {
        let (x, y) = seed.xy()?;
        let mut bbox = BoundingBox::new(x, y, x, y);
        shape.for_each_coord(&mut |coord: &Coord| {
            if let Some((x, y)) = coord.xy() {
                bbox.extend(x, y);
            }
        });
        Some(bbox)
    }

    /// Bounding box of `shape`, seeded from its first position.
    pub fn of<S: Shape + ?Sized>(shape: &S) -> Option<Self> {
        BoundingBox::compute(shape.seed()?, shape)
    }

    /// Folds boxes together; the first defined box seeds the result and
    /// absent ones are skipped.
    pub fn fold<I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<BoundingBox>>,
    {
        boxes
            .into_iter()
            .flatten()
            .fold(None, |acc: Option<BoundingBox>, bbox| match acc {
                Some(acc) => Some(acc.merged(&bbox)),
                None => Some(bbox),
            })
    }

    /// Widens `self` to also cover `other`.
    pub fn merge(&mut self, other: &BoundingBox) {
        self.west = self.west.min(other.west);
        self.south = self.south.min(other.south);
        self.east = self.east.max(other.east);
        self.north = self.north.max(other.north);
    }

    pub fn merged(mut self, other: &BoundingBox) -> Self {
        self.merge(other);
        self
    }

    fn extend(&mut self, x: f64, y: f64) {
        self.west = self.west.min(x);
        self.south = self.south.min(y);
        self.east = self.east.max(x);
        self.north = self.north.max(y);
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    /// South-west and north-east corners as `[x, y]` pairs.
    pub fn sw_ne(&self) -> ([f64; 2], [f64; 2]) {
        ([self.west, self.south], [self.east, self.north])
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        BoundingBox::new(west, south, east, north)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.west, bbox.south, bbox.east, bbox.north]
    }
}
