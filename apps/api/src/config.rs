use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::chatbot::pipeline::MatchPolicy;
use crate::eligibility::colleges::COLLEGE_RESULT_LIMIT;
use crate::eligibility::scholarships::SCHOLARSHIP_RESULT_LIMIT;
use crate::llm_client::is_configured_key;
use crate::scoring::colleges::CourseSelection;

/// Where catalog records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// PostgreSQL, optionally seeded from a JSON file at startup.
    Postgres {
        database_url: String,
        seed_path: Option<PathBuf>,
    },
    /// JSON seed file held in memory.
    SeedFile(PathBuf),
}

/// Application configuration loaded from environment variables.
/// Startup fails if no catalog source is configured or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: CatalogSource,
    /// `None` when unset or a placeholder; the rule-based narrative is used then.
    pub openai_api_key: Option<String>,
    pub openai_api_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub college_result_limit: usize,
    pub scholarship_result_limit: usize,
    pub course_selection: CourseSelection,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Blank values count
    /// as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed_path = get("CATALOG_PATH").map(PathBuf::from);
        let catalog = match (get("DATABASE_URL"), seed_path) {
            (Some(database_url), seed_path) => CatalogSource::Postgres {
                database_url,
                seed_path,
            },
            (None, Some(path)) => CatalogSource::SeedFile(path),
            (None, None) => {
                return Err(anyhow!(
                    "No catalog configured: set DATABASE_URL or CATALOG_PATH"
                ))
            }
        };

        let course_selection = match get("COURSE_SELECTION") {
            None => CourseSelection::default(),
            Some(raw) => CourseSelection::parse(&raw)
                .with_context(|| format!("COURSE_SELECTION must be 'first' or 'best', got '{raw}'"))?,
        };

        Ok(Config {
            catalog,
            openai_api_key: get("OPENAI_API_KEY").filter(|k| is_configured_key(k)),
            openai_api_url: get("OPENAI_API_URL"),
            port: parse_or(&get, "PORT", 5000)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            college_result_limit: parse_or(&get, "COLLEGE_RESULT_LIMIT", COLLEGE_RESULT_LIMIT)?,
            scholarship_result_limit: parse_or(
                &get,
                "SCHOLARSHIP_RESULT_LIMIT",
                SCHOLARSHIP_RESULT_LIMIT,
            )?,
            course_selection,
        })
    }

    pub fn match_policy(&self) -> MatchPolicy {
        MatchPolicy {
            college_limit: self.college_result_limit,
            scholarship_limit: self.scholarship_result_limit,
            course_selection: self.course_selection,
        }
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
    }
}
