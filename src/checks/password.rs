//! Password strength heuristic
//!
//! Five independent character-class and length checks; the score is the
//! number that pass.

use serde::Serialize;
use utoipa::ToSchema;

const MIN_LENGTH: usize = 8;

/// Outcome of each individual check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PasswordChecks {
    /// At least 8 characters
    pub length: bool,
    /// Contains A-Z
    pub uppercase: bool,
    /// Contains a-z
    pub lowercase: bool,
    /// Contains 0-9
    pub numbers: bool,
    /// Contains anything outside A-Z, a-z, 0-9
    pub symbols: bool,
}

impl PasswordChecks {
    pub fn run(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            numbers: password.chars().any(|c| c.is_ascii_digit()),
            symbols: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    fn as_array(&self) -> [bool; 5] {
        [
            self.length,
            self.uppercase,
            self.lowercase,
            self.numbers,
            self.symbols,
        ]
    }

    pub fn score(&self) -> u8 {
        self.as_array().iter().filter(|passed| **passed).count() as u8
    }

    /// One hint per failing check, in check order
    pub fn recommendations(&self) -> Vec<String> {
        const HINTS: [&str; 5] = [
            "Use at least 8 characters",
            "Add uppercase letters",
            "Add lowercase letters",
            "Add numbers",
            "Add special characters",
        ];
        self.as_array()
            .iter()
            .zip(HINTS)
            .filter(|(passed, _)| !**passed)
            .map(|(_, hint)| hint.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            5.. => Strength::VeryStrong,
            4 => Strength::Strong,
            3 => Strength::Medium,
            2 => Strength::Weak,
            _ => Strength::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    /// Display colour used by the dashboard gauge
    pub fn color(&self) -> &'static str {
        match self {
            Strength::VeryWeak | Strength::Weak => "red",
            Strength::Medium => "orange",
            Strength::Strong => "yellow",
            Strength::VeryStrong => "green",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result returned by the password-check endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PasswordReport {
    #[schema(example = "Very Strong")]
    pub strength: String,
    #[schema(example = 5, minimum = 0, maximum = 5)]
    pub score: u8,
    #[schema(example = "green")]
    pub color: String,
    pub checks: PasswordChecks,
    pub recommendations: Vec<String>,
}

impl PasswordReport {
    pub fn evaluate(password: &str) -> Self {
        let checks = PasswordChecks::run(password);
        let score = checks.score();
        let strength = Strength::from_score(score);
        Self {
            strength: strength.label().to_string(),
            score,
            color: strength.color().to_string(),
            checks,
            recommendations: checks.recommendations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        let report = PasswordReport::evaluate("Abc12345!");
        assert_eq!(report.score, 5);
        assert_eq!(report.strength, "Very Strong");
        assert_eq!(report.color, "green");
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_short_lowercase_only() {
        let report = PasswordReport::evaluate("abc");
        assert_eq!(report.score, 1);
        assert_eq!(report.strength, "Very Weak");
        assert_eq!(
            report.recommendations,
            [
                "Use at least 8 characters",
                "Add uppercase letters",
                "Add numbers",
                "Add special characters",
            ]
        );
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(Strength::from_score(0), Strength::VeryWeak);
        assert_eq!(Strength::from_score(1), Strength::VeryWeak);
        assert_eq!(Strength::from_score(2), Strength::Weak);
        assert_eq!(Strength::from_score(3), Strength::Medium);
        assert_eq!(Strength::from_score(4), Strength::Strong);
        assert_eq!(Strength::from_score(5), Strength::VeryStrong);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Strength::Weak.color(), "red");
        assert_eq!(Strength::Medium.color(), "orange");
        assert_eq!(Strength::Strong.color(), "yellow");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        assert!(!PasswordChecks::run("éééé").length);
        assert!(PasswordChecks::run("éééééééé").length);
    }

    #[test]
    fn test_non_ascii_letters_count_as_symbols() {
        let checks = PasswordChecks::run("ü");
        assert!(checks.symbols);
        assert!(!checks.lowercase);
    }

    #[test]
    fn test_whitespace_is_a_symbol() {
        assert!(PasswordChecks::run("pass word").symbols);
    }

    #[test]
    fn test_strong_missing_symbol() {
        let report = PasswordReport::evaluate("Password1");
        assert_eq!(report.score, 4);
        assert_eq!(report.strength, "Strong");
        assert_eq!(report.recommendations, ["Add special characters"]);
    }

    #[test]
    fn test_serialized_checks_field_names() {
        let json = serde_json::to_value(PasswordReport::evaluate("abc")).unwrap();
        let checks = &json["checks"];
        for key in ["length", "uppercase", "lowercase", "numbers", "symbols"] {
            assert!(checks.get(key).is_some(), "missing {key}");
        }
    }
}
