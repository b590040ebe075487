//! Bands of a triangular fuzzy number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One band of a triangular fuzzy judgment: lower, modal or upper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyBand {
    Lower,
    Modal,
    Upper,
}

impl FuzzyBand {
    /// All bands in (L, M, U) order.
    pub const ALL: [FuzzyBand; 3] = [FuzzyBand::Lower, FuzzyBand::Modal, FuzzyBand::Upper];

    /// Position of the band within an (L, M, U) triple.
    pub fn index(&self) -> usize {
        match self {
            FuzzyBand::Lower => 0,
            FuzzyBand::Modal => 1,
            FuzzyBand::Upper => 2,
        }
    }

    /// Short symbol used in reports.
    pub fn symbol(&self) -> &'static str {
        match self {
            FuzzyBand::Lower => "L",
            FuzzyBand::Modal => "M",
            FuzzyBand::Upper => "U",
        }
    }
}

impl fmt::Display for FuzzyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_lmu_order() {
        let indices: Vec<usize> = FuzzyBand::ALL.iter().map(|b| b.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&FuzzyBand::Modal).unwrap();
        assert_eq!(json, "\"modal\"");
    }

    #[test]
    fn displays_symbol() {
        assert_eq!(format!("{}", FuzzyBand::Upper), "U");
    }
}
