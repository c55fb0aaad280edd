use std::{fmt::{self, Formatter, Display}, str::FromStr};

use super::SampleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
    Unknown
}

impl Sex {
    /// PED-format encoding of this sex.
    #[must_use]
    pub fn code(&self) -> i8 {
        match self {
            Self::Male    => 1,
            Self::Female  => 2,
            Self::Unknown => -9,
        }
    }
}

impl FromStr for Sex {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male"    => Ok(Self::Male),
            "female"  => Ok(Self::Female),
            "unknown" => Ok(Self::Unknown),
            other     => Err(SampleError::InvalidSex(other.to_string())),
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Female  => "female",
            Self::Male    => "male",
            Self::Unknown => "unknown"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", Sex::Female), "female");
        assert_eq!(format!("{}", Sex::Male), "male");
        assert_eq!(format!("{}", Sex::Unknown), "unknown");
    }

    #[test]
    fn from_str() {
        assert_eq!(Sex::from_str("female"), Ok(Sex::Female));
        assert_eq!(Sex::from_str("male"), Ok(Sex::Male));
        assert_eq!(Sex::from_str("unknown"), Ok(Sex::Unknown));
    }

    #[test]
    fn from_str_rejects_codes_and_unknown_labels() {
        for label in ["1", "2", "-9", "", "FEMALE", "hermaphrodite"] {
            assert_eq!(Sex::from_str(label), Err(SampleError::InvalidSex(label.to_string())));
        }
    }

    #[test]
    fn codes() {
        assert_eq!(Sex::Male.code(), 1);
        assert_eq!(Sex::Female.code(), 2);
        assert_eq!(Sex::Unknown.code(), -9);
    }
}
