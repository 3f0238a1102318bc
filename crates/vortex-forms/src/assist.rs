//! Message-field assists: subject-specific prompts and a character counter.
//!
//! Neither affects validation. The prompt replaces the message placeholder
//! when a subject is picked while the message is still blank; the counter
//! tracks how much of the suggested maximum length has been used.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vortex_core::VortexError;

/// The options of the subject select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    General,
    Cloud,
    Digital,
    Security,
    Managed,
    Consultation,
    Partnership,
    Support,
}

impl Subject {
    /// Every subject, in the order the select lists them.
    pub const ALL: [Self; 8] = [
        Self::General,
        Self::Cloud,
        Self::Digital,
        Self::Security,
        Self::Managed,
        Self::Consultation,
        Self::Partnership,
        Self::Support,
    ];

    /// Returns the option value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Cloud => "cloud",
            Self::Digital => "digital",
            Self::Security => "security",
            Self::Managed => "managed",
            Self::Consultation => "consultation",
            Self::Partnership => "partnership",
            Self::Support => "support",
        }
    }

    /// Returns the message placeholder suggested for this subject.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::General => "Please describe your general inquiry or question.",
            Self::Cloud => "Tell us about your cloud migration needs and current infrastructure.",
            Self::Digital => "Describe your digital transformation goals and current challenges.",
            Self::Security => "What cybersecurity concerns or requirements do you have?",
            Self::Managed => "What IT services do you need help managing?",
            Self::Consultation => "What would you like to discuss in your free consultation?",
            Self::Partnership => {
                "Tell us about the partnership opportunity you'd like to explore."
            }
            Self::Support => "Please describe the technical issue you're experiencing.",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = VortexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| VortexError::SerializationError(format!("unknown subject: {s}")))
    }
}

/// How close the message is to its suggested maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    /// At most 70% used.
    Normal,
    /// More than 70% used.
    Warning,
    /// More than 90% used.
    Critical,
}

impl CounterLevel {
    /// Returns the counter's text color.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Normal => "#718096",
            Self::Warning => "#d69e2e",
            Self::Critical => "#e53e3e",
        }
    }
}

/// The message character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    /// Characters currently in the message, untrimmed.
    pub current: usize,
    /// Suggested maximum.
    pub max: usize,
}

impl CharCounter {
    /// Counts the characters of `message` against `max`.
    pub fn new(message: &str, max: usize) -> Self {
        Self {
            current: message.chars().count(),
            max,
        }
    }

    /// Returns the counter level.
    pub const fn level(&self) -> CounterLevel {
        // current > max * 0.9, in integer arithmetic
        if self.current * 10 > self.max * 9 {
            CounterLevel::Critical
        } else if self.current * 10 > self.max * 7 {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }
}

impl fmt::Display for CharCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} characters", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_parse() {
        assert_eq!("cloud".parse::<Subject>().unwrap(), Subject::Cloud);
        assert!("".parse::<Subject>().is_err());
        assert!("Cloud".parse::<Subject>().is_err());
    }

    #[test]
    fn test_every_subject_has_a_prompt() {
        for subject in Subject::ALL {
            assert!(!subject.prompt().is_empty());
            assert_eq!(subject.as_str().parse::<Subject>().unwrap(), subject);
        }
    }

    #[test]
    fn test_counter_label() {
        let counter = CharCounter::new("héllo", 1000);
        assert_eq!(counter.to_string(), "5/1000 characters");
    }

    #[test]
    fn test_counter_levels() {
        assert_eq!(CharCounter { current: 0, max: 1000 }.level(), CounterLevel::Normal);
        assert_eq!(CharCounter { current: 700, max: 1000 }.level(), CounterLevel::Normal);
        assert_eq!(CharCounter { current: 701, max: 1000 }.level(), CounterLevel::Warning);
        assert_eq!(CharCounter { current: 900, max: 1000 }.level(), CounterLevel::Warning);
        assert_eq!(CharCounter { current: 901, max: 1000 }.level(), CounterLevel::Critical);
        assert_eq!(CharCounter { current: 1500, max: 1000 }.level(), CounterLevel::Critical);
    }

    #[test]
    fn test_counter_colors() {
        assert_eq!(CounterLevel::Normal.color(), "#718096");
        assert_eq!(CounterLevel::Warning.color(), "#d69e2e");
        assert_eq!(CounterLevel::Critical.color(), "#e53e3e");
    }
}
