//! Per-topic keyword gates and canned answers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Salary,
    Insurance,
}

/// A case-insensitive pattern and the answer returned verbatim when it matches.
#[derive(Debug, Clone, Copy)]
pub struct CannedAnswer {
    pub pattern: &'static str,
    pub answer: &'static str,
}

const SALARY_KEYWORDS: &[&str] = &["salary", "pay", "deduction", "annual", "monthly", "gross", "net"];
const INSURANCE_KEYWORDS: &[&str] = &["insurance", "policy", "coverage", "premium", "claim"];

const SALARY_ANSWERS: &[CannedAnswer] = &[CannedAnswer {
    pattern: r"annual.*salary",
    answer: "Your annual salary is monthly salary × 12, minus deductions.",
}];
const INSURANCE_ANSWERS: &[CannedAnswer] = &[CannedAnswer {
    pattern: r"(what.*included|insurance policy|coverage)",
    answer: "Your insurance policy includes room rent (up to limit), doctor fees, medicines, diagnostic tests, and surgery charges.",
}];

impl Topic {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Insurance => "insurance",
        }
    }

    /// Lower-case substrings that mark a query as belonging to this topic.
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Salary => SALARY_KEYWORDS,
            Self::Insurance => INSURANCE_KEYWORDS,
        }
    }

    /// Canned answers in match priority order.
    pub const fn canned_answers(&self) -> &'static [CannedAnswer] {
        match self {
            Self::Salary => SALARY_ANSWERS,
            Self::Insurance => INSURANCE_ANSWERS,
        }
    }

    /// Routing description used when none is configured.
    pub const fn default_description(&self) -> &'static str {
        match self {
            Self::Salary => "salary compensation payroll",
            Self::Insurance => "insurance policy coverage",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}
