//! Occupation relation graph.
//!
//! A small typed, weighted graph of occupations. Queries are keyed by a
//! normalized name so minor spelling variants ("Elektriker", "elektrik",
//! "UX designer", "ux-designer") resolve to the same node.

mod table;

use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Maximum number of steps in a career path walk.
pub const MAX_PATH_HOPS: usize = 5;

/// A progression edge must be strictly stronger than this to be followed.
pub const MIN_PROGRESSION_STRENGTH: f64 = 0.6;

/// Suffix morphemes stripped during normalization, tried in order.
const STRIPPED_SUFFIXES: &[&str] = &["are", "er"];

/// Kind of relation between two occupations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RelationKind {
    /// Largely the same tasks and skills.
    Similar,
    /// Another title for the same work.
    Alternative,
    /// A next career step.
    Progression,
    /// Adjacent field with transferable experience.
    Related,
}

impl RelationKind {
    /// Returns the kind as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Similar => "similar",
            Self::Alternative => "alternative",
            Self::Progression => "progression",
            Self::Related => "related",
        }
    }

    /// Fixed human-readable description of the kind.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Similar => "Similar role with largely overlapping tasks and skills",
            Self::Alternative => "Alternative title for the same kind of work",
            Self::Progression => "Career step along the same path",
            Self::Related => "Related field where much of your experience carries over",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OccupationRelation {
    /// Source occupation (display name).
    pub from: String,
    /// Target occupation (display name).
    pub to: String,
    /// Relation kind.
    pub kind: RelationKind,
    /// Strength in `(0, 1]`.
    pub strength: f64,
}

/// A related occupation returned by [`OccupationGraph::find_related`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OccupationSuggestion {
    /// The related occupation's display name.
    pub occupation: String,
    /// Relation kind.
    pub kind: RelationKind,
    /// Relation strength.
    pub strength: f64,
    /// Fixed description of the relation kind.
    pub description: String,
}

/// Immutable occupation graph.
#[derive(Debug, Clone)]
pub struct OccupationGraph {
    relations: Vec<OccupationRelation>,
    /// Normalized `(from, to)` per relation, same order.
    keys: Vec<(String, String)>,
}

static BUILTIN: LazyLock<OccupationGraph> = LazyLock::new(|| {
    OccupationGraph::from_trusted(
        table::BUILTIN_RELATIONS
            .iter()
            .map(|&(from, to, kind, strength)| OccupationRelation {
                from: from.to_string(),
                to: to.to_string(),
                kind,
                strength,
            })
            .collect(),
    )
});

/// Normalize an occupation name for lookup.
///
/// Lowercases, removes hyphens and whitespace, then strips one trailing
/// `are` or `er` if something is left afterwards.
pub fn normalize_occupation(name: &str) -> String {
    let compact: String = name
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    for suffix in STRIPPED_SUFFIXES {
        if let Some(stem) = compact.strip_suffix(suffix)
            && !stem.is_empty()
        {
            return stem.to_string();
        }
    }
    compact
}

impl OccupationGraph {
    /// The built-in, process-wide graph.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a graph from caller-supplied relations.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidArgument`] if a strength is outside `(0, 1]` or
    /// an endpoint name is blank.
    pub fn from_relations(relations: Vec<OccupationRelation>) -> EngineResult<Self> {
        for rel in &relations {
            if !(rel.strength > 0.0 && rel.strength <= 1.0) {
                return Err(EngineError::invalid(
                    "strength",
                    format!(
                        "{} -> {} has strength {}; expected a value in (0, 1]",
                        rel.from, rel.to, rel.strength
                    ),
                ));
            }
            if normalize_occupation(&rel.from).is_empty()
                || normalize_occupation(&rel.to).is_empty()
            {
                return Err(EngineError::invalid(
                    "occupation",
                    "relation endpoints must not be blank",
                ));
            }
        }
        Ok(Self::from_trusted(relations))
    }

    fn from_trusted(relations: Vec<OccupationRelation>) -> Self {
        let keys = relations
            .iter()
            .map(|r| (normalize_occupation(&r.from), normalize_occupation(&r.to)))
            .collect();
        Self { relations, keys }
    }

    /// All stored relations, in table order.
    pub fn relations(&self) -> &[OccupationRelation] {
        &self.relations
    }

    /// Returns `true` if some edge has an endpoint matching `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.display_name(&normalize_occupation(name)).is_some()
    }

    fn edges(&self) -> impl Iterator<Item = (&OccupationRelation, &str, &str)> {
        self.relations
            .iter()
            .zip(&self.keys)
            .map(|(rel, (from, to))| (rel, from.as_str(), to.as_str()))
    }

    /// Display name of the first endpoint whose key is `key`.
    fn display_name(&self, key: &str) -> Option<&str> {
        self.edges().find_map(|(rel, from, to)| {
            if from == key {
                Some(rel.from.as_str())
            } else if to == key {
                Some(rel.to.as_str())
            } else {
                None
            }
        })
    }

    /// Occupations connected to `query` by any edge, strongest first.
    ///
    /// Unknown occupations yield an empty list.
    #[tracing::instrument(skip(self))]
    pub fn find_related(&self, query: &str) -> Vec<OccupationSuggestion> {
        let key = normalize_occupation(query);
        if key.is_empty() {
            return Vec::new();
        }

        let mut suggestions: Vec<OccupationSuggestion> = self
            .edges()
            .filter_map(|(rel, from, to)| {
                let other = if from == key && to != key {
                    &rel.to
                } else if to == key && from != key {
                    &rel.from
                } else {
                    return None;
                };
                Some(OccupationSuggestion {
                    occupation: other.clone(),
                    kind: rel.kind,
                    strength: rel.strength,
                    description: rel.kind.description().to_string(),
                })
            })
            .collect();

        // stable: equal strengths keep table order
        suggestions.sort_by(|a, b| b.strength.total_cmp(&a.strength));
        tracing::debug!(found = suggestions.len(), "related occupations");
        suggestions
    }

    /// Greedy walk along the strongest progression edges from `occupation`.
    ///
    /// The path starts with the occupation itself and takes at most
    /// [`MAX_PATH_HOPS`] steps, never revisiting a node. Unknown occupations
    /// yield an empty list.
    #[tracing::instrument(skip(self))]
    pub fn find_career_path(&self, occupation: &str) -> Vec<String> {
        let start = normalize_occupation(occupation);
        let Some(start_name) = self.display_name(&start) else {
            return Vec::new();
        };

        let mut path = vec![start_name.to_string()];
        let mut visited = vec![start];
        let mut hops = 0;

        while hops < MAX_PATH_HOPS {
            let current = visited.last().map_or("", String::as_str);
            let mut best: Option<(&OccupationRelation, &str)> = None;
            for (rel, from, to) in self.edges() {
                if rel.kind != RelationKind::Progression
                    || from != current
                    || rel.strength <= MIN_PROGRESSION_STRENGTH
                    || visited.iter().any(|v| v == to)
                {
                    continue;
                }
                if best.is_none_or(|(b, _)| rel.strength > b.strength) {
                    best = Some((rel, to));
                }
            }

            let Some((rel, to)) = best else {
                break;
            };
            path.push(rel.to.clone());
            visited.push(to.to_string());
            hops += 1;
        }

        tracing::debug!(hops, "career path walked");
        path
    }

    /// Strength of the edge between `a` and `b` in either direction, or 0.
    pub fn calculate_match(&self, a: &str, b: &str) -> f64 {
        let a = normalize_occupation(a);
        let b = normalize_occupation(b);
        self.edges()
            .filter(|(_, from, to)| (*from == a && *to == b) || (*from == b && *to == a))
            .map(|(rel, _, _)| rel.strength)
            .fold(0.0, f64::max)
    }
}

/// [`OccupationGraph::find_related`] on the built-in graph.
pub fn find_related(query: &str) -> Vec<OccupationSuggestion> {
    OccupationGraph::builtin().find_related(query)
}

/// [`OccupationGraph::find_career_path`] on the built-in graph.
pub fn find_career_path(occupation: &str) -> Vec<String> {
    OccupationGraph::builtin().find_career_path(occupation)
}

/// [`OccupationGraph::calculate_match`] on the built-in graph.
pub fn calculate_match(a: &str, b: &str) -> f64 {
    OccupationGraph::builtin().calculate_match(a, b)
}
