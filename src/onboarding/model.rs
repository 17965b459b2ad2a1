//! Profile and answer types collected by the wizard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ProfileDefaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Nutrition goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Lose fat and weight.
    Loss,
    /// Keep current weight and shape.
    Maintenance,
    /// Build muscle mass.
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Loss, Goal::Maintenance, Goal::Gain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loss => "loss",
            Self::Maintenance => "maintenance",
            Self::Gain => "gain",
        }
    }

    /// Card descriptor shown in the goal carousel.
    pub fn option(&self) -> GoalOption {
        match self {
            Self::Loss => GoalOption {
                id: Goal::Loss,
                title: "Loss",
                description: "Burn excess fat and lose weight",
                color: "#FF3B30",
                icon: "🔥",
            },
            Self::Maintenance => GoalOption {
                id: Goal::Maintenance,
                title: "Maintenance",
                description: "Keep your current weight and shape",
                color: "#4CAF50",
                icon: "🥗",
            },
            Self::Gain => GoalOption {
                id: Goal::Gain,
                title: "Gain",
                description: "Build muscle mass and strength",
                color: "#FFCC00",
                icon: "💪",
            },
        }
    }

    /// All goal cards in carousel order.
    pub fn options() -> Vec<GoalOption> {
        Self::ALL.iter().map(Goal::option).collect()
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loss" => Ok(Self::Loss),
            "maintenance" => Ok(Self::Maintenance),
            "gain" => Ok(Self::Gain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// One card in the goal carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalOption {
    pub id: Goal,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Answers accumulated across the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub weight_kg: i32,
    pub height_cm: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Default for Profile {
    fn default() -> Self {
        Self::with_defaults(ProfileDefaults::default())
    }
}

impl Profile {
    pub fn with_defaults(defaults: ProfileDefaults) -> Self {
        Self {
            gender: None,
            weight_kg: defaults.weight_kg,
            height_cm: defaults.height_cm,
            goal: None,
            completed: false,
            completed_at: None,
        }
    }

    /// One-line summary for logs and the dev harness.
    pub fn summary(&self) -> String {
        let gender = self.gender.map_or("unset".to_string(), |g| g.to_string());
        let goal = self.goal.map_or("unset".to_string(), |g| g.to_string());
        format!(
            "gender={} weight={}kg height={}cm goal={}{}",
            gender,
            self.weight_kg,
            self.height_cm,
            goal,
            if self.completed { " (complete)" } else { "" }
        )
    }
}
