#![allow(dead_code)]

pub mod command;
pub mod file;

use sprout::artifacts::objects::object_id::ObjectId;
use std::path::Path;

pub fn read_index(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".sprout").join("index")).expect("Failed to read index")
}

pub fn read_head(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".sprout").join("HEAD")).expect("Failed to read HEAD")
}

pub fn read_object(dir: &Path, oid: &str) -> Vec<u8> {
    std::fs::read(dir.join(".sprout").join("objects").join(oid))
        .unwrap_or_else(|e| panic!("Failed to read object {}: {}", oid, e))
}

pub fn stored_objects(dir: &Path) -> Vec<String> {
    let mut objects = std::fs::read_dir(dir.join(".sprout").join("objects"))
        .expect("Failed to read objects dir")
        .map(|entry| {
            entry
                .expect("Failed to read dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect::<Vec<_>>();
    objects.sort();
    objects
}

pub fn oid_of(content: &str) -> String {
    ObjectId::hash_bytes(content.as_bytes()).to_string()
}
