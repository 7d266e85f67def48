//! Roadmap data model — the structured artifact produced by roadmap generation.
//!
//! `SkillCategory` and `Difficulty` are closed enums. Any label outside the known
//! set fails deserialization; they are never widened to free strings.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad competency area a skill belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Programming & Software")]
    Programming,
    #[serde(rename = "Hardware & Electronics")]
    Hardware,
    #[serde(rename = "Math & Theory")]
    Math,
    #[serde(rename = "AI & Machine Learning")]
    Ai,
    #[serde(rename = "Soft Skills & Management")]
    SoftSkills,
}

impl SkillCategory {
    /// Every category, in display order.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Programming,
        SkillCategory::Hardware,
        SkillCategory::Math,
        SkillCategory::Ai,
        SkillCategory::SoftSkills,
    ];

    /// The wire label, identical to the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming & Software",
            SkillCategory::Hardware => "Hardware & Electronics",
            SkillCategory::Math => "Math & Theory",
            SkillCategory::Ai => "AI & Machine Learning",
            SkillCategory::SoftSkills => "Soft Skills & Management",
        }
    }

    /// Label used on filter chips: the part before `&`.
    pub fn short_label(self) -> &'static str {
        self.label()
            .split('&')
            .next()
            .map(str::trim)
            .unwrap_or_else(|| self.label())
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Expected proficiency level for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// One recommended competency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub difficulty: Difficulty,
    pub description: String,
    /// Why this skill matters for the interest the user typed.
    pub importance: String,
    /// Resource names or search keywords, in the order the model listed them.
    pub resources: Vec<String>,
}

/// A generated roadmap. Immutable once decoded; a new interest replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub title: String,
    pub summary: String,
    /// Presentation order.
    pub skills: Vec<Skill>,
}

/// Structural problems that serde alone cannot catch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadmapViolation {
    #[error("roadmap contains no skills")]
    NoSkills,

    #[error("skill #{skill_index} has a blank `{field}`")]
    BlankField {
        skill_index: usize,
        field: &'static str,
    },

    #[error("duplicate skill id '{0}'")]
    DuplicateId(String),
}

/// Category selection for the skill grid. `All` is the unfiltered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl CategoryFilter {
    /// Parses `"ALL"` or a category label.
    pub fn parse(value: &str) -> Option<Self> {
        if value == "ALL" {
            return Some(CategoryFilter::All);
        }
        SkillCategory::from_label(value).map(CategoryFilter::Only)
    }

    pub fn matches(self, skill: &Skill) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => skill.category == category,
        }
    }
}

impl Roadmap {
    /// Checks the invariants a usable roadmap must hold. Returns the first violation.
    pub fn validate(&self) -> Result<(), RoadmapViolation> {
        if self.skills.is_empty() {
            return Err(RoadmapViolation::NoSkills);
        }

        let mut seen = HashSet::new();
        for (skill_index, skill) in self.skills.iter().enumerate() {
            let required = [
                ("id", &skill.id),
                ("name", &skill.name),
                ("description", &skill.description),
                ("importance", &skill.importance),
            ];
            if let Some(&(field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(RoadmapViolation::BlankField { skill_index, field });
            }
            if !seen.insert(skill.id.as_str()) {
                return Err(RoadmapViolation::DuplicateId(skill.id.clone()));
            }
        }

        Ok(())
    }

    /// Skills matching `filter`, original order preserved.
    pub fn filter_skills(&self, filter: CategoryFilter) -> Vec<&Skill> {
        self.skills.iter().filter(|s| filter.matches(s)).collect()
    }

    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.name.as_str())
    }

    /// Number of skills per category, in `SkillCategory::ALL` order. Empty categories included.
    pub fn category_counts(&self) -> Vec<(SkillCategory, usize)> {
        SkillCategory::ALL
            .into_iter()
            .map(|c| (c, self.skills.iter().filter(|s| s.category == c).count()))
            .collect()
    }
}
