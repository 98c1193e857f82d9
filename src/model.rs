use crate::error::QuizError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Investor risk tolerance. Closed set: every tally and lookup matches on it exhaustively.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Balanced,
        RiskProfile::Aggressive,
    ];

    /// Tag as stored and exchanged (`conservative`, `balanced`, `aggressive`).
    pub fn as_str(self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Balanced => "balanced",
            RiskProfile::Aggressive => "aggressive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative (Safe)",
            RiskProfile::Balanced => "Balanced",
            RiskProfile::Aggressive => "Aggressive",
        }
    }

    /// First word of the label, used in the dashboard greeting.
    pub fn short_label(self) -> &'static str {
        self.label().split(' ').next().unwrap_or_default()
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(RiskProfile::Conservative),
            "balanced" => Ok(RiskProfile::Balanced),
            "aggressive" => Ok(RiskProfile::Aggressive),
            other => Err(QuizError::UnknownCategory(other.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub text: String,
    pub value: RiskProfile,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

/// Completed outcome of a quiz run, as kept in the durable slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub profile: RiskProfile,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    pub fn now(profile: RiskProfile) -> Self {
        Self {
            profile,
            completed_at: Utc::now(),
        }
    }
}

/// Pages reachable from the top navigation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    MarketUpdates,
    MarketUpdateDetail(String),
    AiUpdates,
    AiUpdateDetail(String),
    MythsFacts,
    Quiz,
    Admin,
}

impl Page {
    pub fn is_quiz(&self) -> bool {
        matches!(self, Page::Quiz)
    }
}
