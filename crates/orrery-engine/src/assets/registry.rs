use std::collections::HashMap;
use crate::assets::manifest::{AssetManifest, MaterialDescriptor};

/// Opaque handle to a material. The host renderer indexes its texture table with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// Registry of named materials, built from an AssetManifest.
///
/// Ids are assigned in sorted-name order so the host can rebuild the same
/// table from the same manifest.
pub struct MaterialRegistry {
    ids: HashMap<String, MaterialId>,
    descriptors: Vec<MaterialDescriptor>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            descriptors: Vec::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut names: Vec<&String> = manifest.materials.keys().collect();
        names.sort();

        let mut ids = HashMap::with_capacity(names.len());
        let mut descriptors = Vec::with_capacity(names.len());
        for (index, name) in names.into_iter().enumerate() {
            ids.insert(name.clone(), MaterialId(index as u32));
            descriptors.push(manifest.materials[name].clone());
        }
        Self { ids, descriptors }
    }

    /// Look up a material by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<MaterialId> {
        self.ids.get(name).copied()
    }

    pub fn descriptor(&self, id: MaterialId) -> Option<&MaterialDescriptor> {
        self.descriptors.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}
