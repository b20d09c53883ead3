use serde::{Deserialize, Serialize};

use super::super::domain::NATIONWIDE_STATE;

/// Point weights applied once every hard gate has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: u8,
    pub domicile_bonus: u8,
    pub preferred_state_bonus: u8,
    pub nationwide_bonus: u8,
    pub category_benefit_bonus: u8,
    pub higher_qualification_bonus: u8,
    pub max_score: u8,
    pub nationwide_state: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            domicile_bonus: 20,
            preferred_state_bonus: 10,
            nationwide_bonus: 10,
            category_benefit_bonus: 15,
            higher_qualification_bonus: 15,
            max_score: 100,
            nationwide_state: NATIONWIDE_STATE.to_string(),
        }
    }
}

impl ScoringConfig {
    pub fn with_nationwide_state(mut self, sentinel: impl Into<String>) -> Self {
        self.nationwide_state = sentinel.into();
        self
    }
}
