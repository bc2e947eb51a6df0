use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Security,
    Performance,
    Bug,
    Style,
}

impl IssueType {
    pub const ALL: [IssueType; 4] = [IssueType::Security, IssueType::Performance, IssueType::Bug, IssueType::Style];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Security => "security",
            IssueType::Performance => "performance",
            IssueType::Bug => "bug",
            IssueType::Style => "style",
        }
    }

    /// Label used when asking the model to focus on this category.
    pub fn focus_label(&self) -> &'static str {
        match self {
            IssueType::Security => "security vulnerabilities",
            IssueType::Performance => "performance problems",
            IssueType::Bug => "potential bugs",
            IssueType::Style => "code style and conventions",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IssueType::Security => "Security",
            IssueType::Performance => "Performance",
            IssueType::Bug => "Bug",
            IssueType::Style => "Style",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "security" => Ok(IssueType::Security),
            "performance" => Ok(IssueType::Performance),
            "bug" | "bugs" => Ok(IssueType::Bug),
            "style" => Ok(IssueType::Style),
            other => Err(format!("unknown issue type '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bugs_alias() {
        assert_eq!("bugs".parse::<IssueType>(), Ok(IssueType::Bug));
        assert_eq!("Security".parse::<IssueType>(), Ok(IssueType::Security));
        assert!("naming".parse::<IssueType>().is_err());
    }
}
