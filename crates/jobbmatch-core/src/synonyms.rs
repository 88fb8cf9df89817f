//! Static synonym table used to widen exact term comparisons.
//!
//! Keys are normalized requirement terms (what [`crate::keywords`] emits);
//! values are related terms a candidate may list instead: abbreviations,
//! adjacent technologies, sibling methodologies, Swedish/English pairs.
//! The table is hand-curated and never inferred at runtime.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::keywords::normalize_literal;

/// Built-in synonym entries.
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    // Languages and runtimes
    (
        "javascript",
        &["js", "ecmascript", "typescript", "node.js", "nodejs"],
    ),
    ("typescript", &["ts", "javascript"]),
    ("node", &["node.js", "nodejs", "javascript"]),
    ("python", &["django", "flask", "fastapi", "pandas"]),
    ("java", &["kotlin", "spring", "spring boot", "jvm"]),
    ("kotlin", &["java", "android"]),
    ("net", &["dotnet", ".net", "c#", "asp.net"]),
    ("dotnet", &[".net", "c#", "asp.net"]),
    ("golang", &["go"]),
    // Frontend
    (
        "react",
        &["react.js", "reactjs", "next.js", "nextjs", "react native"],
    ),
    ("vue", &["vue.js", "vuejs", "nuxt"]),
    ("angular", &["angularjs", "typescript"]),
    ("frontend", &["react", "vue", "angular", "javascript", "css"]),
    ("css", &["scss", "sass", "tailwind", "html"]),
    ("html", &["html5", "css"]),
    // Data
    (
        "sql",
        &["postgresql", "postgres", "mysql", "mssql", "sqlite", "databaser"],
    ),
    ("postgresql", &["postgres", "sql"]),
    ("databaser", &["sql", "postgresql", "mysql", "mongodb"]),
    ("mongodb", &["nosql", "databaser"]),
    // Infrastructure
    ("kubernetes", &["k8s", "docker", "openshift"]),
    ("docker", &["containers", "podman", "kubernetes"]),
    (
        "devops",
        &["ci/cd", "jenkins", "github actions", "gitlab", "terraform"],
    ),
    ("aws", &["amazon web services", "azure", "gcp", "cloud"]),
    ("azure", &["microsoft azure", "aws", "gcp", "cloud"]),
    ("cloud", &["aws", "azure", "gcp", "molntjänster"]),
    ("molntjänster", &["aws", "azure", "gcp", "cloud"]),
    ("git", &["github", "gitlab", "bitbucket"]),
    ("linux", &["unix", "ubuntu", "bash"]),
    // Methodology
    ("agile", &["agil", "scrum", "kanban", "safe"]),
    ("agil", &["agile", "scrum", "kanban"]),
    ("agila", &["agile", "agil", "scrum", "kanban"]),
    ("scrum", &["agile", "agil", "kanban", "safe"]),
    ("kanban", &["scrum", "agile", "lean"]),
    ("lean", &["kanban", "six sigma"]),
    (
        "projektledning",
        &["projektledare", "project management", "pmp", "prince2"],
    ),
    (
        "testning",
        &["test", "qa", "kvalitetssäkring", "testautomation"],
    ),
    // Design
    ("design", &["ux", "ui", "figma"]),
    ("figma", &["sketch", "adobe xd"]),
    // Office and finance
    ("excel", &["microsoft office", "office", "kalkylprogram"]),
    ("ekonomi", &["redovisning", "bokföring", "controller"]),
    ("redovisning", &["bokföring", "ekonomi", "bokslut"]),
    ("bokföring", &["redovisning", "ekonomi"]),
    // Service, sales, care
    (
        "kundtjänst",
        &["kundservice", "support", "customer service"],
    ),
    ("kundservice", &["kundtjänst", "support", "customer service"]),
    ("försäljning", &["sälj", "säljare", "sales"]),
    ("sälj", &["försäljning", "sales"]),
    ("omvårdnad", &["vård", "omsorg", "undersköterska"]),
    ("vård", &["omvårdnad", "omsorg", "sjukvård"]),
    ("truckkort", &["truck", "truckförare"]),
];

static BUILTIN: LazyLock<SynonymTable> = LazyLock::new(|| {
    let entries = BUILTIN_SYNONYMS
        .iter()
        .map(|(term, related)| {
            (
                (*term).to_string(),
                related.iter().map(|r| (*r).to_string()).collect(),
            )
        })
        .collect();
    SynonymTable { entries }
});

/// Read-only mapping from a normalized term to related terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// The built-in, process-wide table.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a new table from the built-in entries plus `extra`.
    ///
    /// Extra entries extend (not replace) the built-in lists; keys and values
    /// are normalized and duplicates are dropped. Call once at startup.
    pub fn with_extra(extra: &HashMap<String, Vec<String>>) -> Self {
        let mut table = Self::builtin().clone();
        let mut keys: Vec<&String> = extra.keys().collect();
        keys.sort();
        for key in keys {
            let Some(term) = normalize_literal(key) else {
                continue;
            };
            let related = table.entries.entry(term).or_default();
            for value in &extra[key] {
                if let Some(value) = normalize_literal(value)
                    && !related.contains(&value)
                {
                    related.push(value);
                }
            }
        }
        tracing::debug!(
            extra = extra.len(),
            total = table.entries.len(),
            "synonym table extended"
        );
        table
    }

    /// Related terms for `term`, or an empty slice if it has no entry.
    pub fn expand(&self, term: &str) -> &[String] {
        self.entries.get(term).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of terms with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Expand `term` against the built-in table.
pub fn expand(term: &str) -> &'static [String] {
    SynonymTable::builtin().expand(term)
}
