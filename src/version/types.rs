use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::version::loose::Tagged;

/// A version entry as supplied by a registry payload.
///
/// Only `tag` matters for ordering; every other field of the record is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    pub tag: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tagged for TagRecord {
    fn tag(&self) -> &str {
        &self.tag
    }
}
