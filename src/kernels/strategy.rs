use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four column materialization strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelStrategy {
    /// expand to dense, transform every element
    DenseDirect,
    /// expand to dense, transform nonzeros only
    DenseConditional,
    /// fill with `transform(0)`, transform explicit nonzeros in place
    SparseExpanded,
    /// as `SparseExpanded`, placing nonzeros through a row subset's reverse map
    SparseIndexed,
}

impl KernelStrategy {
    /// every strategy, reference kernel first
    pub const ALL: [KernelStrategy; 4] = [
        KernelStrategy::DenseDirect,
        KernelStrategy::DenseConditional,
        KernelStrategy::SparseExpanded,
        KernelStrategy::SparseIndexed,
    ];

    /// human readable name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            KernelStrategy::DenseDirect => "dense direct",
            KernelStrategy::DenseConditional => "dense conditional",
            KernelStrategy::SparseExpanded => "sparse expanded",
            KernelStrategy::SparseIndexed => "sparse indexed",
        }
    }
}

impl fmt::Display for KernelStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown kernel \"{0}\" (expected one of: dense-direct, dense-conditional, sparse-expanded, sparse-indexed)")]
pub struct ParseKernelError(pub String);

impl FromStr for KernelStrategy {
    type Err = ParseKernelError;

    // accepts "dense-direct", "dense_direct" or "dense direct",
    // in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        KernelStrategy::ALL
            .into_iter()
            .find(|k| k.name() == key)
            .ok_or_else(|| ParseKernelError(s.to_string()))
    }
}

#[test]
fn test_strategy_from_str() {
    assert_eq!(
        "dense-direct".parse::<KernelStrategy>(),
        Ok(KernelStrategy::DenseDirect)
    );
    assert_eq!(
        "Sparse_Indexed".parse::<KernelStrategy>(),
        Ok(KernelStrategy::SparseIndexed)
    );
    assert_eq!(
        "sparse expanded".parse::<KernelStrategy>(),
        Ok(KernelStrategy::SparseExpanded)
    );
    assert!("dense".parse::<KernelStrategy>().is_err());

    for k in KernelStrategy::ALL {
        assert_eq!(k.to_string().parse::<KernelStrategy>(), Ok(k));
    }
}
