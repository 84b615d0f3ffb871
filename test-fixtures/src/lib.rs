//! Test fixture loader for annotated descriptor databases and label files.
//!
//! Fixture JSON lives next to this crate; every crate in the workspace can
//! load it by relative path.

use std::path::PathBuf;
use std::sync::Arc;

use refind_core::{Descriptor, Item};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // Walk up from the calling crate to the workspace root.
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One database entry as stored on disk. Components are listed in the order
/// they are added, which fixes the merged layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureItem {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub descriptors: Vec<Descriptor>,
}

impl FixtureItem {
    /// # Panics
    /// Panics if the fixture lists a descriptor type twice or lists `merged`.
    pub fn into_item(self) -> Item {
        let id = self.id.clone();
        let mut item = Item::with_descriptors(self.id, self.descriptors)
            .unwrap_or_else(|e| panic!("Invalid fixture item {id}: {e}"));
        item.set_label(self.label);
        item
    }
}

/// Load a fixture database as plain items, ready for normalization.
pub fn load_items(relative_path: &str) -> Vec<Item> {
    load_fixture::<Vec<FixtureItem>>(relative_path)
        .into_iter()
        .map(FixtureItem::into_item)
        .collect()
}

/// Load a fixture database as shared items.
pub fn load_database(relative_path: &str) -> Vec<Arc<Item>> {
    load_items(relative_path).into_iter().map(Arc::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use refind_core::DescriptorType;

    #[test]
    fn corel_mini_loads_with_merged_descriptors() {
        let db = load_database("databases/corel_mini.json");
        assert_eq!(db.len(), 18);
        for item in &db {
            assert_eq!(item.values(DescriptorType::Merged).unwrap().len(), 5);
            assert_eq!(
                item.order(),
                &[DescriptorType::ColorHisto, DescriptorType::MpegEhd]
            );
        }
    }

    #[test]
    fn fixture_path_points_inside_the_crate() {
        assert!(fixture_path("databases/corel_mini.json").exists());
    }
}
