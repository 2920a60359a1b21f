// pmis-backend/src/domain/priority_level.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// タスクの優先度を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityLevel {
    Low,
    Normal,
    High,
    Critical,
}

impl PriorityLevel {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "NORMAL" => Some(Self::Normal),
            "HIGH" => Some(Self::High),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl Default for PriorityLevel {
    fn default() -> Self {
        Self::Normal
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<PriorityLevel> for String {
    fn from(priority: PriorityLevel) -> Self {
        priority.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(PriorityLevel::default(), PriorityLevel::Normal);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(PriorityLevel::from_str("high"), Some(PriorityLevel::High));
        assert_eq!(PriorityLevel::from_str("HIGH"), Some(PriorityLevel::High));
        assert_eq!(PriorityLevel::from_str("urgent"), None);
    }
}
