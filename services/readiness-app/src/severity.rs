//! Severity codes reported by the regression analysis

use std::fmt;

/// Regression status of one grid cell, decoded from its integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    ExtremeRegression,
    SignificantRegression,
    MissingSample,
    NotSignificant,
    MissingBasis,
    SignificantImprovement,
    MissingBasisAndSample,
    /// A code newer than this dashboard knows about
    Unrecognized(i32),
}

impl Severity {
    pub fn from_code(code: i32) -> Self {
        match code {
            i32::MIN..=-3 => Severity::ExtremeRegression,
            -2 => Severity::SignificantRegression,
            -1 => Severity::MissingSample,
            0 => Severity::NotSignificant,
            1 => Severity::MissingBasis,
            2 => Severity::SignificantImprovement,
            3 => Severity::MissingBasisAndSample,
            other => Severity::Unrecognized(other),
        }
    }

    pub fn is_regression(&self) -> bool {
        matches!(
            self,
            Severity::ExtremeRegression | Severity::SignificantRegression
        )
    }

    /// Icon glyph shown in the cell
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::ExtremeRegression => "\u{23EC}",
            Severity::SignificantRegression => "\u{25BC}",
            Severity::MissingSample => "?",
            Severity::NotSignificant => "\u{2714}",
            Severity::MissingBasis | Severity::MissingBasisAndSample => "\u{2205}",
            Severity::SignificantImprovement => "\u{25B2}",
            Severity::Unrecognized(_) => "\u{2022}",
        }
    }

    /// Icon colour
    pub fn color(&self) -> &'static str {
        match self {
            Severity::ExtremeRegression => "#8b0000",
            Severity::SignificantRegression => "#dc3545",
            Severity::NotSignificant | Severity::SignificantImprovement => "#28a745",
            Severity::MissingSample
            | Severity::MissingBasis
            | Severity::MissingBasisAndSample
            | Severity::Unrecognized(_) => "#6c757d",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::ExtremeRegression => write!(f, "Extreme regression detected"),
            Severity::SignificantRegression => write!(f, "Significant regression detected"),
            Severity::MissingSample => write!(f, "Missing sample data"),
            Severity::NotSignificant => write!(f, "No significant regression"),
            Severity::MissingBasis => write!(f, "Missing basis data"),
            Severity::SignificantImprovement => write!(f, "Significant improvement"),
            Severity::MissingBasisAndSample => write!(f, "Missing basis and sample data"),
            Severity::Unrecognized(code) => write!(f, "Unrecognized status {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_codes() {
        assert_eq!(Severity::from_code(-3), Severity::ExtremeRegression);
        assert_eq!(Severity::from_code(-2), Severity::SignificantRegression);
        assert_eq!(Severity::from_code(-1), Severity::MissingSample);
        assert_eq!(Severity::from_code(0), Severity::NotSignificant);
        assert_eq!(Severity::from_code(1), Severity::MissingBasis);
        assert_eq!(Severity::from_code(2), Severity::SignificantImprovement);
        assert_eq!(Severity::from_code(3), Severity::MissingBasisAndSample);
    }

    #[test]
    fn anything_below_extreme_is_extreme() {
        assert_eq!(Severity::from_code(-50), Severity::ExtremeRegression);
        assert_eq!(Severity::from_code(i32::MIN), Severity::ExtremeRegression);
    }

    #[test]
    fn unknown_positive_codes_are_kept() {
        assert_eq!(Severity::from_code(7), Severity::Unrecognized(7));
        assert_eq!(Severity::from_code(7).to_string(), "Unrecognized status 7");
    }

    #[test]
    fn only_regressions_are_flagged() {
        assert!(Severity::from_code(-3).is_regression());
        assert!(Severity::from_code(-2).is_regression());
        for code in -1..=4 {
            assert!(!Severity::from_code(code).is_regression(), "code {}", code);
        }
    }

    #[test]
    fn regressions_are_red() {
        assert_eq!(Severity::SignificantRegression.color(), "#dc3545");
        assert_eq!(Severity::NotSignificant.color(), "#28a745");
        assert_eq!(Severity::MissingBasis.glyph(), Severity::MissingBasisAndSample.glyph());
    }
}
