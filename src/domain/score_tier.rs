/// Coarse band a score falls into. Presentation decides how each band looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Low,
    Medium,
    High,
}

impl ScoreTier {
    const HIGH_THRESHOLD: f64 = 8.0;
    const MEDIUM_THRESHOLD: f64 = 5.0;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}
