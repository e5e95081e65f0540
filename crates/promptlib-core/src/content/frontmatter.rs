use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PromptlibError;

/// Prompt category declared in frontmatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Coding,
    Writing,
    Productivity,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Coding,
        Category::Writing,
        Category::Productivity,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coding => "Coding",
            Category::Writing => "Writing",
            Category::Productivity => "Productivity",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PromptlibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                PromptlibError::invalid_value(
                    "category",
                    format!("{} (expected: Coding, Writing, Productivity, Other)", s),
                )
            })
    }
}

/// Prompt frontmatter (YAML header)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptFrontmatter {
    /// Prompt title (required)
    pub title: String,
    /// One-line description (required)
    pub description: String,
    /// Category (required)
    pub category: Category,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Publication date, see [`coerce_date`] for the accepted forms
    #[serde(rename = "pubDate", deserialize_with = "deserialize_coerced_date")]
    pub pub_date: DateTime<Utc>,
    /// Replaces the id derived from the file path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl PromptFrontmatter {
    /// Format tags as comma-separated values, using "-" for empty tags
    pub fn format_tags(&self) -> String {
        if self.tags.is_empty() {
            "-".to_string()
        } else {
            self.tags.join(",")
        }
    }
}

/// Bare-date layouts accepted for `pubDate`, read as midnight UTC
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%b %d %Y", "%b %d, %Y"];

/// Parse a date the way the content schema coerces it.
///
/// Accepts RFC 3339 timestamps, `2022-07-08`, `Jul 08 2022` and
/// `July 8, 2022`.
pub fn coerce_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

fn deserialize_coerced_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    coerce_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid pubDate: {}", raw)))
}
