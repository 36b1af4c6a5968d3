use std::fs;
use std::path::Path;
use std::str::FromStr;

use gsm_core::errors::{ErrorInfo, GsmError};
use gsm_core::serde::from_json_slice as parse_json;
use serde::{Deserialize, Serialize};
use tracing::info;

const CORE_KEYWORDS: [&str; 2] = ["核心", "core"];
const FOUNDER_KEYWORDS: [&str; 2] = ["创始人", "founder"];
const ADVISOR_KEYWORDS: [&str; 2] = ["顾问", "advisor"];

/// One card on the contributors wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Display name.
    pub name: String,
    /// Free-form role; drives filtering and badges.
    pub role: String,
    /// Avatar image path or URL.
    #[serde(default)]
    pub avatar: String,
    /// GitHub login, used to match upstream counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Contribution count.
    #[serde(default)]
    pub contributions: u64,
    /// Short biography.
    #[serde(default)]
    pub bio: String,
    /// ISO date the contributor joined, e.g. `2024-03-01`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined: Option<String>,
    /// Expertise tags.
    #[serde(default)]
    pub expertise: Vec<String>,
}

fn role_contains(role: &str, keywords: &[&str]) -> bool {
    let role = role.to_lowercase();
    keywords.iter().any(|keyword| role.contains(keyword))
}

impl Contributor {
    /// Whether the role names a core team member.
    pub fn is_core(&self) -> bool {
        role_contains(&self.role, &CORE_KEYWORDS)
    }

    /// Whether the role names an advisor.
    pub fn is_advisor(&self) -> bool {
        role_contains(&self.role, &ADVISOR_KEYWORDS)
    }

    /// Whether the card carries the core badge; founders get it too.
    pub fn is_core_badge(&self) -> bool {
        self.is_core() || role_contains(&self.role, &FOUNDER_KEYWORDS)
    }
}

/// Filter buttons above the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoleFilter {
    /// Everyone.
    #[default]
    All,
    /// Core team roles.
    Core,
    /// Advisor roles.
    Advisor,
    /// Everyone who is neither core nor advisor.
    Community,
}

impl RoleFilter {
    /// Whether `contributor` is shown under this filter.
    pub fn matches(self, contributor: &Contributor) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Core => contributor.is_core(),
            RoleFilter::Advisor => contributor.is_advisor(),
            RoleFilter::Community => !contributor.is_core() && !contributor.is_advisor(),
        }
    }
}

impl FromStr for RoleFilter {
    type Err = GsmError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(RoleFilter::All),
            "core" => Ok(RoleFilter::Core),
            "advisor" => Ok(RoleFilter::Advisor),
            "community" => Ok(RoleFilter::Community),
            other => Err(GsmError::Catalog(
                ErrorInfo::new("unknown_filter", "unknown contributor filter")
                    .with_context("value", other)
                    .with_hint("use all, core, advisor or community"),
            )),
        }
    }
}

/// Entry of the GitHub contributors listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamContributor {
    /// GitHub login.
    pub login: String,
    /// Commit contribution count.
    pub contributions: u64,
    /// Avatar URL.
    #[serde(default)]
    pub avatar_url: String,
}

/// Outcome of [`Roster::merge_upstream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MergeSummary {
    /// Known contributors whose counts were refreshed.
    pub updated: usize,
    /// Upstream logins appended as new contributors.
    pub added: usize,
}

/// Headline numbers shown above the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStats {
    /// Number of contributors.
    pub contributors: usize,
    /// Sum of all contribution counts.
    pub total_contributions: u64,
    /// Rounded mean contribution count.
    pub average_contributions: u64,
}

/// Contributor list loaded from `contributors.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Roster {
    contributors: Vec<Contributor>,
}

impl Roster {
    /// Wraps an in-memory contributor list.
    pub fn new(contributors: Vec<Contributor>) -> Self {
        Self { contributors }
    }

    /// Parses a JSON array of contributors.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, GsmError> {
        let roster: Roster = parse_json(data)?;
        info!(count = roster.len(), "loaded contributors");
        Ok(roster)
    }

    /// Reads and parses a contributors file.
    pub fn load(path: &Path) -> Result<Self, GsmError> {
        let bytes = fs::read(path).map_err(|err| GsmError::io("roster_read", path, err))?;
        Self::from_json_slice(&bytes)
    }

    /// Contributors in file order.
    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    /// Number of contributors.
    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    /// Whether the roster has no contributors.
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    /// Contributors ordered by contribution count, highest first; ties keep file order.
    pub fn sorted_by_contributions(&self) -> Vec<&Contributor> {
        let mut sorted: Vec<&Contributor> = self.contributors.iter().collect();
        sorted.sort_by(|a, b| b.contributions.cmp(&a.contributions));
        sorted
    }

    /// Sum of all contribution counts.
    pub fn total_contributions(&self) -> u64 {
        self.contributors.iter().map(|c| c.contributions).sum()
    }

    /// Rounded mean contribution count; zero for an empty roster.
    pub fn average_contributions(&self) -> u64 {
        if self.contributors.is_empty() {
            return 0;
        }
        (self.total_contributions() as f64 / self.contributors.len() as f64).round() as u64
    }

    /// Rounded share of all contributions, in percent; zero when nothing was contributed.
    pub fn contribution_percentage(&self, contributions: u64) -> u64 {
        let total = self.total_contributions();
        if total == 0 {
            return 0;
        }
        (contributions as f64 / total as f64 * 100.0).round() as u64
    }

    /// Headline numbers for the wall.
    pub fn stats(&self) -> RosterStats {
        RosterStats {
            contributors: self.len(),
            total_contributions: self.total_contributions(),
            average_contributions: self.average_contributions(),
        }
    }

    /// Sorted contributors visible under `filter`.
    pub fn filter(&self, filter: RoleFilter) -> Vec<&Contributor> {
        self.sorted_by_contributions()
            .into_iter()
            .filter(|contributor| filter.matches(contributor))
            .collect()
    }

    /// Folds a GitHub contributors listing into the roster.
    ///
    /// Known logins get their counts replaced; unknown logins are appended
    /// as code contributors who joined on `joined`.
    pub fn merge_upstream(&mut self, upstream: &[UpstreamContributor], joined: &str) -> MergeSummary {
        let mut summary = MergeSummary::default();
        for entry in upstream {
            let existing = self
                .contributors
                .iter_mut()
                .find(|c| c.github.as_deref() == Some(entry.login.as_str()));
            match existing {
                Some(contributor) => {
                    contributor.contributions = entry.contributions;
                    summary.updated += 1;
                }
                None => {
                    self.contributors.push(Contributor {
                        name: entry.login.clone(),
                        role: "Code contributor".to_string(),
                        avatar: entry.avatar_url.clone(),
                        github: Some(entry.login.clone()),
                        contributions: entry.contributions,
                        bio: "Contributed code through GitHub".to_string(),
                        joined: Some(joined.to_string()),
                        expertise: vec![
                            "Programming".to_string(),
                            "Open source collaboration".to_string(),
                        ],
                    });
                    summary.added += 1;
                }
            }
        }
        info!(updated = summary.updated, added = summary.added, "merged upstream contributors");
        summary
    }
}
