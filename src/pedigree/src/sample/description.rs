use serde::{Deserialize, Deserializer, Serialize};

/// Raw, unvalidated description of a pedigree member, as found in a test-suite file.
///
/// `status` and `sex` are kept as plain strings here: they are only checked when the
/// description is turned into a [`Sample`](super::Sample), so that errors can name the
/// offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDescription {
    #[serde(deserialize_with = "scalar_id")]
    pub id    : String,
    pub status: String,
    pub sex   : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<ParentDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<ParentDescription>,
}

/// Reference to a parent. Only `id` is read: any other key is ignored, which allows a whole
/// sample description to be reused through a YAML alias (`father: *dad`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentDescription {
    #[serde(deserialize_with = "scalar_id")]
    pub id: String,
}

impl SampleDescription {
    pub fn new(id: &str, status: &str, sex: &str) -> Self {
        Self { id: id.to_string(), status: status.to_string(), sex: sex.to_string(), father: None, mother: None }
    }

    /// Builder-style setter for both parents.
    #[must_use]
    pub fn with_parents(mut self, father: &str, mother: &str) -> Self {
        self.father = Some(ParentDescription { id: father.to_string() });
        self.mother = Some(ParentDescription { id: mother.to_string() });
        self
    }
}

/// Sample identifiers are strings, but YAML happily parses `id: 101` as an integer.
fn scalar_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Str(id) => id,
        Scalar::Int(id) => id.to_string(),
    })
}
