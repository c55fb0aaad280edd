use serde::{Deserialize, Deserializer, Serialize};

/// A Mendelian inheritance test case.
/// # Fields:
/// - `alts`     : genotype-call variants of this case. Each variant holds one alt allele count
///                per pedigree sample, in declaration order (`3` meaning no-call).
/// - `modes`    : inheritance modes this case is expected to match.
/// - `not_modes`: inheritance modes this case is expected to be excluded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(deserialize_with = "one_or_many_variants")]
    pub alts     : Vec<Vec<u8>>,
    #[serde(default)]
    pub modes    : Vec<String>,
    #[serde(default, rename = "not-modes", alias = "not_modes")]
    pub not_modes: Vec<String>,
}

impl TestCase {
    pub fn new(alts: Vec<Vec<u8>>) -> Self {
        Self { alts, ..Default::default() }
    }

    #[must_use]
    pub fn with_modes(mut self, modes: &[&str], not_modes: &[&str]) -> Self {
        self.modes     = modes.iter().map(ToString::to_string).collect();
        self.not_modes = not_modes.iter().map(ToString::to_string).collect();
        self
    }

    /// Iterate over the variants of this test case.
    pub fn variants(&self) -> impl Iterator<Item = &[u8]> {
        self.alts.iter().map(Vec::as_slice)
    }
}

/// Accept either a list of variants (`[[0, 1, 1], [1, 1, 2]]`), or a single flat variant (`[0, 1, 1]`).
fn one_or_many_variants<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Alts {
        Many(Vec<Vec<u8>>),
        Single(Vec<u8>),
    }

    Ok(match Alts::deserialize(deserializer)? {
        Alts::Many(variants) => variants,
        Alts::Single(variant) => vec![variant],
    })
}
