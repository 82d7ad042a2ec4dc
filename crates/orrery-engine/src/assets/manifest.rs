use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the materials a scene can reference by name.
/// Loaded from a JSON file at runtime; texture decoding stays on the host side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named materials: entity tag → texture and shading hints.
    #[serde(default)]
    pub materials: HashMap<String, MaterialDescriptor>,
    /// Optional cube-map texture used on all six skybox faces.
    #[serde(default)]
    pub skybox: Option<String>,
}

/// Describes a single material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescriptor {
    /// Relative path to the image (e.g., "img/earth.jpg").
    pub texture: String,
    /// Skip scene lighting (emissive surfaces).
    #[serde(default)]
    pub unlit: bool,
    /// Render both faces (flat rings).
    #[serde(default)]
    pub double_sided: bool,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_skybox() {
        let json = r#"{
            "skybox": "img/stars.jpg",
            "materials": {
                "sun": { "texture": "img/sun.jpg", "unlit": true },
                "saturn ring": { "texture": "img/saturn ring.png", "unlit": true, "double_sided": true },
                "earth": { "texture": "img/earth.jpg" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.skybox.as_deref(), Some("img/stars.jpg"));
        assert_eq!(manifest.materials.len(), 3);

        let earth = &manifest.materials["earth"];
        assert_eq!(earth.texture, "img/earth.jpg");
        assert!(!earth.unlit);
        assert!(!earth.double_sided);
        assert!(manifest.materials["saturn ring"].double_sided);
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.materials.is_empty());
        assert!(manifest.skybox.is_none());
    }

    #[test]
    fn missing_texture_is_an_error() {
        let json = r#"{ "materials": { "earth": { "unlit": true } } }"#;
        assert!(AssetManifest::from_json(json).is_err());
    }
}
