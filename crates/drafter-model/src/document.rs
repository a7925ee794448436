//! The `.drafter` document envelope.

use serde::{Deserialize, Serialize};

use crate::Model;

/// A drafter document — a versioned model tree.
///
/// This is the on-disk JSON interchange format consumed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Format version string (e.g. "0.1").
    pub version: String,
    /// The root model.
    pub model: Model,
}

impl Document {
    /// Wrap a model in a current-version document.
    pub fn new(model: Model) -> Self {
        Self {
            version: "0.1".to_string(),
            model,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Extrusion, Sketch};
    use drafter_geom::Point;

    #[test]
    fn test_roundtrip_document() {
        let mut sketch = Sketch::new();
        sketch.add_rectangle(Point::new(0.0, 0.0), Point::new(10.0, 20.0));

        let mut model = Model::new();
        model.add_extrusion(Extrusion::new(5.0, sketch));

        let doc = Document::new(model);
        let json = doc.to_json().expect("serialize");
        let restored = Document::from_json(&json).expect("deserialize");
        assert_eq!(doc, restored);
        assert_eq!(restored.version, "0.1");
    }
}
