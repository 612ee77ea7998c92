//! Randomised verdicts standing in for a detection service

use crate::model::{AnalysisResult, RiskLevel};
use crate::report;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_CONFIDENCE: u8 = 70;
pub const MAX_CONFIDENCE: u8 = 99;

/// Draws authenticity and confidence independently.
///
/// Risk is derived from confidence only, so an authentic verdict can carry a
/// high risk and a suspicious one a low risk. That is the product behaviour
/// and is kept as is.
pub struct VerdictGenerator {
    rng: StdRng,
    authentic_probability: f64,
}

impl VerdictGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            authentic_probability: 0.7,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            authentic_probability: 0.7,
        }
    }

    /// Clamped to [0, 1]
    pub fn with_authentic_probability(mut self, probability: f64) -> Self {
        self.authentic_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn authentic_probability(&self) -> f64 {
        self.authentic_probability
    }

    pub fn draw(&mut self) -> AnalysisResult {
        let is_authentic = self.rng.gen_bool(self.authentic_probability);
        let confidence = self.rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE);
        Self::build(is_authentic, confidence)
    }

    pub fn build(is_authentic: bool, confidence: u8) -> AnalysisResult {
        AnalysisResult {
            is_authentic,
            confidence,
            risk_level: RiskLevel::from_confidence(confidence),
            details: report::details(is_authentic),
            report: report::report(is_authentic, confidence),
        }
    }
}

impl Default for VerdictGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_range_and_risk() {
        let mut generator = VerdictGenerator::seeded(7);
        for _ in 0..2000 {
            let result = generator.draw();
            assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&result.confidence));
            assert_eq!(result.risk_level, RiskLevel::from_confidence(result.confidence));
            assert_eq!(result.details.len(), 5);
        }
    }

    #[test]
    fn test_authenticity_rate() {
        let mut generator = VerdictGenerator::seeded(42);
        let authentic = (0..10_000).filter(|_| generator.draw().is_authentic).count();
        // 70% expected; generous band for a fixed seed
        assert!((6_600..=7_400).contains(&authentic), "got {}", authentic);
    }

    #[test]
    fn test_authenticity_independent_of_risk() {
        let mut generator = VerdictGenerator::seeded(3);
        let results: Vec<_> = (0..5_000).map(|_| generator.draw()).collect();

        assert!(results
            .iter()
            .any(|r| r.is_authentic && r.risk_level == RiskLevel::High));
        assert!(results
            .iter()
            .any(|r| !r.is_authentic && r.risk_level == RiskLevel::Low));
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a: Vec<_> = {
            let mut g = VerdictGenerator::seeded(99);
            (0..20).map(|_| g.draw()).collect()
        };
        let b: Vec<_> = {
            let mut g = VerdictGenerator::seeded(99);
            (0..20).map(|_| g.draw()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_probability_extremes() {
        let mut always = VerdictGenerator::seeded(1).with_authentic_probability(1.0);
        assert!((0..100).all(|_| always.draw().is_authentic));

        let mut never = VerdictGenerator::seeded(1).with_authentic_probability(-3.0);
        assert_eq!(never.authentic_probability(), 0.0);
        assert!((0..100).all(|_| !never.draw().is_authentic));
    }

    #[test]
    fn test_build_uses_authenticity_for_text() {
        let result = VerdictGenerator::build(true, 72);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.details[0], "Metadata consistency verified");
        assert!(result.report.contains("AUTHENTIC CONTENT VERIFIED"));
    }
}
