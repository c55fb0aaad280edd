use std::{fmt::{self, Formatter, Display}, str::FromStr};

use super::SampleError;

/// Affection status of a pedigree member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Affected,
    Unaffected,
    Carrier,
    Unknown,
}

impl Status {
    /// PED-format phenotype code. Carriers are encoded as unaffected.
    #[must_use]
    pub fn code(&self) -> i8 {
        match self {
            Self::Affected                   => 2,
            Self::Unaffected | Self::Carrier => 1,
            Self::Unknown                    => -9,
        }
    }

    #[must_use]
    pub fn is_affected(&self) -> bool {
        matches!(self, Self::Affected)
    }
}

impl FromStr for Status {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "affected"   => Ok(Self::Affected),
            "unaffected" => Ok(Self::Unaffected),
            "carrier"    => Ok(Self::Carrier),
            "unknown"    => Ok(Self::Unknown),
            other        => Err(SampleError::InvalidStatus(other.to_string())),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Affected   => "affected",
            Self::Unaffected => "unaffected",
            Self::Carrier    => "carrier",
            Self::Unknown    => "unknown",
        })
    }
}
