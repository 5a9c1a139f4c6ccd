use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classify::ClassifierThresholds;
use crate::layout::font_metrics::{default_page_config, FontFamily, PageConfig};

/// Pipeline configuration. Every field has a default; environment variables
/// override them one by one.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub page: PageConfig,
    pub font: FontFamily,
    pub thresholds: ClassifierThresholds,
    pub rust_log: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page: default_page_config(),
            font: FontFamily::default(),
            thresholds: ClassifierThresholds::default(),
            rust_log: "info".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Loads configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Missing keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let page = PageConfig {
            width_pt: parse_or("DOCRENDER_PAGE_WIDTH_PT", &lookup, defaults.page.width_pt)?,
            height_pt: parse_or("DOCRENDER_PAGE_HEIGHT_PT", &lookup, defaults.page.height_pt)?,
            margin_pt: parse_or("DOCRENDER_MARGIN_PT", &lookup, defaults.page.margin_pt)?,
            leading_pt: parse_or("DOCRENDER_LEADING_PT", &lookup, defaults.page.leading_pt)?,
        };
        page.validate()
            .context("DOCRENDER_* page variables describe an unusable page")?;

        let font = match lookup("DOCRENDER_FONT") {
            Some(name) => FontFamily::from_name(&name)
                .ok_or_else(|| anyhow!("DOCRENDER_FONT must be 'helvetica' or 'times', got '{name}'"))?,
            None => defaults.font,
        };

        let t = defaults.thresholds;
        let thresholds = ClassifierThresholds {
            section_header_max_len: parse_or(
                "DOCRENDER_SECTION_HEADER_MAX_LEN",
                &lookup,
                t.section_header_max_len,
            )?,
            sub_header_max_len: parse_or("DOCRENDER_SUB_HEADER_MAX_LEN", &lookup, t.sub_header_max_len)?,
            title_max_len: parse_or("DOCRENDER_TITLE_MAX_LEN", &lookup, t.title_max_len)?,
            closing_max_len: parse_or("DOCRENDER_CLOSING_MAX_LEN", &lookup, t.closing_max_len)?,
        };

        Ok(PipelineConfig {
            page,
            font,
            thresholds,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `docrender=<config.rust_log>`. Returns an error if a subscriber is already set.
pub fn init_tracing(config: &PipelineConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("tracing subscriber already initialized")
}
