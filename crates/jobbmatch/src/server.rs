//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes matching, occupation lookups and résumé checks over MCP on stdio,
//! so AI assistants can call them as tools. Each `#[tool]` method delegates to
//! `jobbmatch-core`; no matching logic lives here.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use jobbmatch_core::ats::{self, FormattingFlags, ResumeDocument};
use jobbmatch_core::matching::MatchEngine;
use jobbmatch_core::synonyms::SynonymTable;
use jobbmatch_core::{CandidateProfile, Config, JobPosting, occupations, readability};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_match` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeMatchParams {
    /// The job seeker's profile.
    pub candidate: CandidateProfile,
    /// The posting to match against.
    pub job: JobPosting,
}

/// Parameters for the `find_best_matches` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FindBestMatchesParams {
    /// The job seeker's profile.
    pub candidate: CandidateProfile,
    /// Postings to rank.
    pub jobs: Vec<JobPosting>,
    /// Number of postings to return. Defaults to the configured rank limit.
    pub limit: Option<usize>,
}

/// Parameters for the `find_related_occupations` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FindRelatedParams {
    /// Occupation name, any case.
    pub occupation: String,
    /// Maximum number of suggestions (at least 1).
    pub limit: Option<usize>,
}

/// Parameters for the `find_career_path` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CareerPathParams {
    /// Starting occupation.
    pub occupation: String,
}

/// Parameters for the `compare_occupations` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompareOccupationsParams {
    /// First occupation.
    pub first: String,
    /// Second occupation.
    pub second: String,
}

/// Parameters for the `check_ats` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckAtsParams {
    /// The résumé content.
    pub resume: ResumeDocument,
    /// Layout facts about the rendered file.
    #[serde(default)]
    pub flags: FormattingFlags,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text to score.
    pub text: String,
}

/// MCP server exposing jobbmatch to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    synonyms: Arc<SynonymTable>,
    rank_limit: usize,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a server with default configuration.
    pub fn new() -> Self {
        Self::with_config(&Config::default(), Some(jobbmatch_core::DEFAULT_MAX_INPUT_BYTES))
    }

    /// Create a server using the loaded configuration.
    pub fn with_config(config: &Config, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            synonyms: Arc::new(config.synonym_table().into_owned()),
            rank_limit: config.rank_limit(),
            max_input_bytes,
        }
    }

    fn check_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score a candidate against one posting.
    #[tool(
        description = "Match a candidate profile against a job posting. Returns a 0-100 score, assessment, matched and missing terms, and recommendations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_match(
        &self,
        Parameters(params): Parameters<AnalyzeMatchParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_match", "executing MCP tool");

        let result = MatchEngine::new(&self.synonyms)
            .analyze(&params.candidate, &params.job)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(tool = "analyze_match", score = result.score, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&result)?)]))
    }

    /// Rank postings for a candidate.
    #[tool(
        description = "Rank job postings for a candidate profile, best match first. Each entry carries the posting's index and full match result."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", jobs = params.jobs.len())
    )]
    fn find_best_matches(
        &self,
        Parameters(params): Parameters<FindBestMatchesParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.limit.unwrap_or(self.rank_limit);
        tracing::debug!(tool = "find_best_matches", limit, "executing MCP tool");

        let ranked = MatchEngine::new(&self.synonyms)
            .find_best_matches(&params.candidate, &params.jobs, limit)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(
            tool = "find_best_matches",
            returned = ranked.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&ranked)?)]))
    }

    /// Related occupations, strongest first.
    #[tool(
        description = "Find occupations related to the given one (similar, alternative, progression, related), sorted by strength."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", occupation = %params.occupation)
    )]
    fn find_related_occupations(
        &self,
        Parameters(params): Parameters<FindRelatedParams>,
    ) -> Result<CallToolResult, McpError> {
        if params.limit == Some(0) {
            return Err(McpError::invalid_params("limit must be at least 1", None));
        }
        let mut related = occupations::find_related(&params.occupation);
        if let Some(limit) = params.limit {
            related.truncate(limit);
        }
        Ok(CallToolResult::success(vec![Content::text(to_json(&related)?)]))
    }

    /// Career progression from an occupation.
    #[tool(
        description = "Suggest a career path from an occupation by following the strongest progression steps. Returns at most 6 occupations."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", occupation = %params.occupation)
    )]
    fn find_career_path(
        &self,
        Parameters(params): Parameters<CareerPathParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = occupations::find_career_path(&params.occupation);
        Ok(CallToolResult::success(vec![Content::text(to_json(&path)?)]))
    }

    /// Relation strength between two occupations.
    #[tool(
        description = "Relation strength between two occupations, 0.0 (unrelated) to 1.0, regardless of direction."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn compare_occupations(
        &self,
        Parameters(params): Parameters<CompareOccupationsParams>,
    ) -> Result<CallToolResult, McpError> {
        let strength = occupations::calculate_match(&params.first, &params.second);
        let json = to_json(&serde_json::json!({
            "first": params.first,
            "second": params.second,
            "strength": strength,
        }))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Résumé ATS compatibility.
    #[tool(
        description = "Check a résumé for applicant tracking system compatibility. Returns each check with importance and tip, a 0-100 score, scanability and readability."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_ats(
        &self,
        Parameters(params): Parameters<CheckAtsParams>,
    ) -> Result<CallToolResult, McpError> {
        let report = ats::check_compatibility(&params.resume, &params.flags)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        tracing::info!(tool = "check_ats", score = report.score, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }

    /// Reading-ease score.
    #[tool(
        description = "Score the readability of text (Flesch reading ease with Swedish vowels). Higher is easier."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(params.text.len())?;
        let report = readability::check_readability(&params.text);
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Match candidate profiles to job postings, explore related \
                 occupations and career paths, and check résumés for ATS compatibility.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
