//! Credit score eligibility tiers. Boundary scores belong to the higher tier.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CreditTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 750.0 {
            CreditTier::Excellent
        } else if score >= 700.0 {
            CreditTier::Good
        } else if score >= 650.0 {
            CreditTier::Fair
        } else {
            CreditTier::Poor
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CreditTier::Excellent => "Excellent - You qualify for the best rates!",
            CreditTier::Good => "Good - You qualify for most loans",
            CreditTier::Fair => "Fair - Limited loan options available",
            CreditTier::Poor => "Poor - Work on improving your credit score",
        }
    }
}

pub fn eligibility_message(score: f64) -> &'static str {
    CreditTier::from_score(score).message()
}
