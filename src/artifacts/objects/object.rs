use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Anything that can be written to the object store
///
/// The ID is always derived from the serialized bytes, so two objects with
/// identical serializations share one key.
pub trait Object: Packable {
    fn object_id(&self) -> Result<ObjectId> {
        Ok(ObjectId::hash_bytes(&self.serialize()?))
    }

    fn display(&self) -> String;
}
