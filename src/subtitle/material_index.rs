/*!
 * Lookup of text materials by identifier.
 */

use std::collections::HashMap;

use crate::project::TextMaterial;

/// Read-only map from material id to material, built once per conversion
#[derive(Debug, Clone, Default)]
pub struct MaterialIndex {
    materials: HashMap<String, TextMaterial>,
}

impl MaterialIndex {
    /// Build the index. Later materials overwrite earlier ones sharing an id.
    pub fn build<I>(materials: I) -> Self
    where
        I: IntoIterator<Item = TextMaterial>,
    {
        let iter = materials.into_iter();
        let mut map = HashMap::with_capacity(iter.size_hint().0);
        for material in iter {
            map.insert(material.id.clone(), material);
        }
        Self { materials: map }
    }

    pub fn get(&self, id: &str) -> Option<&TextMaterial> {
        self.materials.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.materials.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl FromIterator<TextMaterial> for MaterialIndex {
    fn from_iter<T: IntoIterator<Item = TextMaterial>>(iter: T) -> Self {
        Self::build(iter)
    }
}
