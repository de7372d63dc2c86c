use serde::{Deserialize, Serialize};

/// Encoder settings.
///
/// Missing keys fall back to the defaults, so a host can embed this in its
/// own configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Write `bbox` members at all.
    pub bbox: bool,
    /// Also write `bbox` for features whose geometry is a bare Point. Off by
    /// default: the box of a point repeats its coordinates.
    pub point_bbox: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            bbox: true,
            point_bbox: false,
        }
    }
}

impl Options {
    pub fn without_bbox() -> Self {
        Options {
            bbox: false,
            ..Options::default()
        }
    }

    pub fn with_point_bbox() -> Self {
        Options {
            point_bbox: true,
            ..Options::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config() {
        let options: Options = serde_json::from_str(r#"{"point_bbox":true}"#).unwrap();
        assert_eq!(options, Options::with_point_bbox());

        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options, Options::default());
    }
}
