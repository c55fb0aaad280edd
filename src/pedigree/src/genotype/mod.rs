use std::fmt::{self, Display, Formatter};

/// Per-sample FORMAT column declared in every VCF record.
pub const FORMAT: &str = "GT:AD:DP:GQ:PL";

/// Synthetic read depth of every called genotype. Allelic depths always sum to this value.
pub const READ_DEPTH: u8 = 20;

/// Synthetic genotype quality of every called genotype.
pub const GENOTYPE_QUALITY: u8 = 99;

/// Diploid genotype call, derived from a number of alternate alleles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genotype {
    HomRef,
    Het,
    HomAlt,
    Missing,
}

impl From<u8> for Genotype {
    /// Any alt allele count outside of `0..=2` is a no-call.
    fn from(alt_count: u8) -> Self {
        match alt_count {
            0 => Self::HomRef,
            1 => Self::Het,
            2 => Self::HomAlt,
            _ => Self::Missing,
        }
    }
}

impl Genotype {
    /// Unphased `GT` subfield.
    #[must_use]
    pub fn gt(&self) -> &'static str {
        match self {
            Self::HomRef  => "0/0",
            Self::Het     => "0/1",
            Self::HomAlt  => "1/1",
            Self::Missing => "./.",
        }
    }

    /// Number of alternate alleles, or `None` for a no-call.
    #[must_use]
    pub fn alt_count(&self) -> Option<u8> {
        match self {
            Self::HomRef  => Some(0),
            Self::Het     => Some(1),
            Self::HomAlt  => Some(2),
            Self::Missing => None,
        }
    }

    /// Phred-scaled likelihoods `(0/0, 0/1, 1/1)`, favouring the called genotype.
    #[must_use]
    pub fn phred_likelihoods(&self) -> Option<&'static str> {
        match self {
            Self::HomRef  => Some("0,10,20"),
            Self::Het     => Some("10,0,20"),
            Self::HomAlt  => Some("10,20,0"),
            Self::Missing => None,
        }
    }

    /// Synthetic `(ref, alt)` read counts, summing to [`READ_DEPTH`].
    #[must_use]
    pub fn allelic_depths(&self) -> Option<[u8; 2]> {
        let step = READ_DEPTH / 2;
        self.alt_count().map(|alt| [step * (2 - alt), step * alt])
    }

    #[must_use]
    pub fn is_called(&self) -> bool {
        *self != Self::Missing
    }
}

/// Genotype fields of a single sample column, following the `GT:AD:DP:GQ:PL` layout.
///
/// No-calls only carry their `GT` subfield (`./.`), and thus expose fewer subfields than
/// what the FORMAT column declares. Downstream fixtures rely on this exact output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenotypeFields {
    genotype: Genotype,
}

impl GenotypeFields {
    #[must_use]
    pub fn genotype(&self) -> Genotype {
        self.genotype
    }
}

impl Display for GenotypeFields {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let genotype = self.genotype;
        write!(f, "{}", genotype.gt())?;
        if let (Some([ref_depth, alt_depth]), Some(likelihoods)) = (genotype.allelic_depths(), genotype.phred_likelihoods()) {
            write!(f, ":{ref_depth},{alt_depth}:{READ_DEPTH}:{GENOTYPE_QUALITY}:{likelihoods}")?;
        }
        Ok(())
    }
}

/// Encode an alt allele count into the genotype fields of a VCF sample column.
#[must_use]
pub fn encode(alt_count: u8) -> GenotypeFields {
    GenotypeFields { genotype: Genotype::from(alt_count) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(alt_count: u8) -> Vec<String> {
        encode(alt_count).to_string().split(':').map(ToString::to_string).collect()
    }

    #[test]
    fn called_genotypes_carry_every_subfield() {
        let n_format_fields = FORMAT.split(':').count();
        for alt_count in 0..=2 {
            assert_eq!(fields(alt_count).len(), n_format_fields);
        }
    }

    #[test]
    fn allelic_depths_sum_to_read_depth() {
        for alt_count in 0..=2 {
            let ad: u32 = fields(alt_count)[1].split(',')
                .map(|depth| depth.parse::<u32>().expect("AD should be numeric"))
                .sum();
            assert_eq!(ad, u32::from(READ_DEPTH));
        }
    }

    #[test]
    fn encoded_values() {
        assert_eq!(encode(0).to_string(), "0/0:20,0:20:99:0,10,20");
        assert_eq!(encode(1).to_string(), "0/1:10,10:20:99:10,0,20");
        assert_eq!(encode(2).to_string(), "1/1:0,20:20:99:10,20,0");
    }

    // No-calls are GT-only, although the FORMAT column declares five subfields.
    #[test]
    fn missing_genotype_is_gt_only() {
        for alt_count in [3, 4, 42, u8::MAX] {
            assert_eq!(encode(alt_count).to_string(), "./.");
            assert_eq!(fields(alt_count).len(), 1);
            assert!(!encode(alt_count).genotype().is_called());
        }
    }

    #[test]
    fn genotype_from_alt_count() {
        assert_eq!(Genotype::from(0), Genotype::HomRef);
        assert_eq!(Genotype::from(1), Genotype::Het);
        assert_eq!(Genotype::from(2), Genotype::HomAlt);
        assert_eq!(Genotype::from(3), Genotype::Missing);
        for alt_count in 0..=2 {
            assert_eq!(Genotype::from(alt_count).alt_count(), Some(alt_count));
        }
        assert_eq!(Genotype::Missing.alt_count(), None);
    }
}
