use super::bbox::BoundingBox;
use super::error::{Error, Result};
use super::feature::{decode_properties, encode_properties, Entity};
use super::options::Options;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::value::{to_raw_value, RawValue};
use std::iter::FromIterator;

const FEATURE_COLLECTION: &str = "FeatureCollection";

/// An ordered list of feature-like members.
///
/// The collection's own properties, if any, belong to the host type and go
/// through [`encode`](Collection::encode) and
/// [`decode`](Collection::decode) the same way feature properties do.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    pub features: Vec<T>,
}

#[derive(Serialize)]
struct CollectionObject {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bbox: Option<BoundingBox>,
    features: Vec<Box<RawValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Box<RawValue>>,
}

#[derive(Deserialize)]
struct RawCollection<'a> {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(borrow, default)]
    features: Option<Vec<&'a RawValue>>,
    #[serde(borrow, default)]
    properties: Option<&'a RawValue>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection {
            features: Vec::new(),
        }
    }
}

impl<T> Collection<T> {
    pub fn new(features: Vec<T>) -> Self {
        Collection { features }
    }

    pub fn push(&mut self, feature: T) {
        self.features.push(feature)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.features.iter()
    }
}

impl<T: Entity> Collection<T> {
    /// Fold of the member boxes. Members without a box are skipped; `None`
    /// if no member has one.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::fold(self.features.iter().map(Entity::bounding_box))
    }

    pub fn encode<P: Serialize + ?Sized>(&self, properties: &P) -> Result<Vec<u8>> {
        self.encode_with(properties, &Options::default())
    }

    /// Encodes the collection; `options` also applies to every member.
    pub fn encode_with<P: Serialize + ?Sized>(
        &self,
        properties: &P,
        options: &Options,
    ) -> Result<Vec<u8>> {
        let raw = self.to_raw(properties, options)?;
        Ok(raw.get().as_bytes().to_vec())
    }

    pub fn to_raw<P: Serialize + ?Sized>(
        &self,
        properties: &P,
        options: &Options,
    ) -> Result<Box<RawValue>> {
        let features = self
            .features
            .iter()
            .map(|feature| feature.encode_raw(options))
            .collect::<Result<Vec<_>>>()?;
        let properties = encode_properties(properties)?;
        let bbox = if options.bbox {
            self.bounding_box()
        } else {
            None
        };
        log::trace!("encoding collection of {} features", features.len());

        let object = CollectionObject {
            kind: FEATURE_COLLECTION,
            bbox,
            features,
            properties,
        };
        Ok(to_raw_value(&object)?)
    }

    /// Decodes a FeatureCollection into `self`, and its `properties` member
    /// into `properties`.
    ///
    /// A missing `features` member is an empty collection. Nothing is written
    /// unless every member and the properties decode.
    pub fn decode<P: DeserializeOwned>(&mut self, bytes: &[u8], properties: &mut P) -> Result<()> {
        let raw: RawCollection = serde_json::from_slice(bytes)?;
        if raw.kind != FEATURE_COLLECTION {
            return Err(Error::unsupported(&raw.kind));
        }

        let features = raw
            .features
            .unwrap_or_default()
            .into_iter()
            .map(|feature| T::from_geojson(feature.get().as_bytes()))
            .collect::<Result<Vec<_>>>()?;
        let props = decode_properties(raw.properties)?;
        log::trace!("decoded collection of {} features", features.len());

        self.features = features;
        if let Some(props) = props {
            *properties = props;
        }
        Ok(())
    }
}

impl<T: Entity> Entity for Collection<T> {
    fn bounding_box(&self) -> Option<BoundingBox> {
        Collection::bounding_box(self)
    }

    fn encode_raw(&self, options: &Options) -> Result<Box<RawValue>> {
        self.to_raw(&(), options)
    }

    fn from_geojson(bytes: &[u8]) -> Result<Self> {
        let mut collection = Collection::default();
        collection.decode(bytes, &mut IgnoredAny)?;
        Ok(collection)
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(features: Vec<T>) -> Self {
        Collection::new(features)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
