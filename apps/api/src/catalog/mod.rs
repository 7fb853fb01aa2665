//! Domain keyword catalog — the closed vocabulary for `hotKeywords` / `matchedTags`.
//!
//! Keywords are grouped by category, kept in insertion order and deduplicated
//! case-insensitively across the whole catalog.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How many keywords are quoted in analyzer prompts.
pub const PROMPT_SAMPLE_SIZE: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub category: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct KeywordCatalog {
    groups: Vec<KeywordGroup>,
    index: HashSet<String>,
}

impl KeywordCatalog {
    /// Builds a catalog, dropping blanks and any keyword already seen in an earlier group.
    pub fn from_groups(groups: Vec<KeywordGroup>) -> Self {
        let mut index = HashSet::new();
        let groups = groups
            .into_iter()
            .map(|group| {
                let keywords = group
                    .keywords
                    .into_iter()
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty() && index.insert(k.to_lowercase()))
                    .collect();
                KeywordGroup {
                    category: group.category,
                    keywords,
                }
            })
            .filter(|g: &KeywordGroup| !g.keywords.is_empty())
            .collect();

        Self { groups, index }
    }

    /// Loads a catalog from a JSON file: `[{"category": "...", "keywords": ["..."]}]`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword catalog {}", path.display()))?;
        let groups: Vec<KeywordGroup> = serde_json::from_str(&raw)
            .with_context(|| format!("Keyword catalog {} is not valid JSON", path.display()))?;
        Ok(Self::from_groups(groups))
    }

    pub fn builtin() -> Self {
        let groups = BUILTIN_CATALOG
            .iter()
            .map(|(category, keywords)| KeywordGroup {
                category: category.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();
        Self::from_groups(groups)
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.keywords.iter().map(String::as_str))
    }

    /// The first `limit` keywords in catalog order.
    pub fn sample(&self, limit: usize) -> Vec<&str> {
        self.keywords().take(limit).collect()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains(&term.trim().to_lowercase())
    }

    /// Keeps only the tags that are in the vocabulary AND occur in `source_text`
    /// as a whole term. Returns canonical catalog spelling, deduplicated, in input order.
    pub fn restrict(&self, tags: &[String], source_text: &str) -> Vec<String> {
        let mut seen = HashSet::new();

        tags.iter()
            .filter_map(|tag| self.canonical(tag))
            .filter(|canonical| mentions_term(source_text, canonical))
            .filter(|canonical| seen.insert(canonical.to_lowercase()))
            .map(str::to_string)
            .collect()
    }

    fn canonical(&self, term: &str) -> Option<&str> {
        if !self.contains(term) {
            return None;
        }
        let needle = term.trim().to_lowercase();
        self.keywords().find(|k| k.to_lowercase() == needle)
    }
}

/// Case-insensitive whole-term search: an occurrence counts only when the
/// neighbouring characters are not alphanumeric. Edges of the term that are
/// symbols (`C#`, `.NET`) need no boundary on that side.
pub fn mentions_term(text: &str, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return false;
    }
    let text = text.to_lowercase();
    let check_left = term.chars().next().is_some_and(char::is_alphanumeric);
    let check_right = term.chars().next_back().is_some_and(char::is_alphanumeric);

    text.match_indices(term.as_str()).any(|(start, found)| {
        let end = start + found.len();
        let left_ok = !check_left
            || !text[..start].chars().next_back().is_some_and(char::is_alphanumeric);
        let right_ok = !check_right || !text[end..].chars().next().is_some_and(char::is_alphanumeric);
        left_ok && right_ok
    })
}

const BUILTIN_CATALOG: &[(&str, &[&str])] = &[
    (
        "software",
        &[
            "Java", "Python", "JavaScript", "TypeScript", "C#", ".NET", "Go", "Rust", "React",
            "Angular", "Node.js", "SQL", "Kubernetes", "Docker", "AWS", "Azure", "DevOps",
            "Full Stack", "Backend", "Frontend", "QA", "Automation", "Microservices",
        ],
    ),
    (
        "data",
        &[
            "Data Analyst", "Data Science", "Machine Learning", "BI", "Power BI", "Tableau",
            "Excel", "ETL", "Big Data",
        ],
    ),
    (
        "finance",
        &[
            "Accounting", "Bookkeeping", "CPA", "Controller", "Payroll", "Audit", "Tax",
            "Financial Analysis", "SAP", "Priority",
        ],
    ),
    (
        "sales_marketing",
        &[
            "Sales", "Account Manager", "Business Development", "Customer Success", "Marketing",
            "Digital Marketing", "SEO", "PPC", "Content", "CRM",
        ],
    ),
    (
        "operations",
        &[
            "Logistics", "Supply Chain", "Procurement", "Warehouse", "Operations",
            "Project Management", "Product Management", "Scrum", "Agile",
        ],
    ),
    (
        "engineering",
        &[
            "Mechanical Engineering", "Electrical Engineering", "Civil Engineering",
            "Embedded", "Hardware", "AutoCAD", "SolidWorks", "Quality Assurance",
        ],
    ),
    (
        "people",
        &[
            "HR", "Recruitment", "Talent Acquisition", "Office Manager", "Administration",
            "Customer Service", "Team Lead", "Management",
        ],
    ),
];
