//! The five-star severity scale.

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A severity rating from 1 (mild) to 5 (extreme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const MIN: Severity = Severity(1);
    pub const MAX: Severity = Severity(5);

    /// Star count.
    pub fn stars(self) -> u8 {
        self.0
    }

    /// Description shown under the stars.
    pub fn description(self) -> &'static str {
        match self.0 {
            1 => "轻微 - 言语上的不适，如不当玩笑或刻板印象评论",
            2 => "一般 - 明显的偏见言论或态度，但未造成实质影响",
            3 => "中等 - 涉及服务拒绝、区别对待或持续性骚扰",
            4 => "严重 - 威胁性言行、职场/学校歧视或造成经济损失",
            _ => "极严重 - 涉及肢体冲突、暴力威胁或严重心理创伤",
        }
    }

    /// All ratings, mildest first.
    pub fn all() -> impl Iterator<Item = Severity> {
        (Self::MIN.0..=Self::MAX.0).map(Severity)
    }
}

impl TryFrom<u8> for Severity {
    type Error = ReportError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        match stars {
            0 => Err(ReportError::MissingSeverity),
            1..=5 => Ok(Severity(stars)),
            _ => Err(ReportError::InvalidSeverity(stars.to_string())),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_to_five() {
        let stars: Vec<u8> = Severity::all().map(Severity::stars).collect();
        assert_eq!(stars, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Severity::try_from(0), Err(ReportError::MissingSeverity));
        assert_eq!(
            Severity::try_from(6),
            Err(ReportError::InvalidSeverity("6".into()))
        );
    }

    #[test]
    fn descriptions_escalate() {
        assert!(Severity::MIN.description().starts_with("轻微"));
        assert!(Severity::MAX.description().starts_with("极严重"));
    }

    #[test]
    fn serde_uses_plain_number() {
        let s = Severity::try_from(3).unwrap();
        assert_eq!(serde_json::to_string(&s).unwrap(), "3");
        assert!(serde_json::from_str::<Severity>("9").is_err());
    }
}
