//! gigscout CLI - Internship & job finder
//!
//! Enter skills and a domain of interest, search a provider, and print the
//! listings with skill suggestions.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input, Password};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::Config;
use gigscout::{
    render, DomainError, Finder, JSearchSource, ListingSource, Provider, QueryBuilder,
    RenderStyle, Report, SearchClient, SearchCriteria, SerpApiSource,
};

#[derive(Parser)]
#[command(name = "gigscout")]
#[command(about = "🎯 Internship & Job Finder - search opportunities by skills and interests", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search once and print the results
    Search {
        /// Technical skills, comma-separated (will prompt if not provided)
        #[arg(short, long)]
        skills: Option<String>,
        /// Domain or career interest (will prompt if not provided)
        #[arg(short, long)]
        interest: Option<String>,
        /// Provider: serpapi, jsearch
        #[arg(short, long)]
        provider: Option<Provider>,
        /// Output format: plain, markdown, json
        #[arg(short, long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Prompt for skills and interests repeatedly, reusing cached results
    Interactive {
        /// Provider: serpapi, jsearch
        #[arg(short, long)]
        provider: Option<Provider>,
        /// Output format: plain, markdown, json
        #[arg(short, long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Store a provider API key
    Login {
        /// Provider the key belongs to
        #[arg(short, long, default_value = "serpapi")]
        provider: Provider,
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Plain,
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { skills, interest, provider, format } => {
            cmd_search(skills, interest, provider, format).await
        }
        Commands::Interactive { provider, format } => cmd_interactive(provider, format).await,
        Commands::Login { provider, key } => cmd_login(provider, key),
        Commands::Config => cmd_config(),
    }
}

/// Logs go to stderr so stdout stays clean for piping
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_search(
    skills: Option<String>,
    interest: Option<String>,
    provider: Option<Provider>,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::load()?;
    let finder = build_finder(&config, config.resolve_provider(provider))?;

    let skills = match skills {
        Some(s) => s,
        None => prompt_skills()?,
    };
    let interest = match interest {
        Some(i) => i,
        None => prompt_interest()?,
    };

    run_search(&finder, skills, interest, format).await
}

async fn cmd_interactive(provider: Option<Provider>, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let finder = build_finder(&config, config.resolve_provider(provider))?;

    println!("{}", "🎯 Internship & Job Finder".bold());
    println!("Find opportunities in {} based on your skills and interests.", config.region);
    println!("{}\n", "👆 Please enter your skills and interests to begin.".dimmed());

    loop {
        let skills = prompt_skills()?;
        let interest = prompt_interest()?;

        run_search(&finder, skills, interest, format).await?;

        let again = Confirm::new()
            .with_prompt("Search again?")
            .default(true)
            .interact()
            .context("Failed to read input")?;
        if !again {
            break;
        }
        println!();
    }

    Ok(())
}

fn cmd_login(provider: Provider, key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt(format!("{} API Key", provider.display_name()))
            .interact()
            .context("Failed to read API key")?,
    };

    if api_key.trim().is_empty() {
        bail!("API key cannot be empty");
    }

    config.set_api_key(provider, api_key);
    config.save()?;

    println!(
        "{} {} key saved to {:?}",
        "✓".green(),
        provider.display_name(),
        Config::config_path()?
    );

    if config.default_provider.is_none() && provider != Provider::SerpApi {
        println!("\n{}", "Tip: pass the provider when searching:".yellow());
        println!("  gigscout search --provider {}", provider);
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!(
        "  Default Provider: {}",
        config.resolve_provider(None).to_string().cyan()
    );
    println!("  Region: {} ({})", config.region, config.country_code);
    println!("  Results per query: {}", config.result_count);

    for provider in [Provider::SerpApi, Provider::JSearch] {
        let key_status = if config.credential(provider).is_some() {
            "Set".green()
        } else {
            "Not set".red()
        };
        println!(
            "  {}: key {} (env {}), cache {}s",
            provider.display_name(),
            key_status,
            provider.credential_env_var().dimmed(),
            config.cache_ttl(provider).as_secs()
        );
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

/// Wire the configured provider into a finder
///
/// A missing credential is fatal here, before any input is read.
fn build_finder(config: &Config, provider: Provider) -> Result<Finder> {
    let api_key = config.credential(provider).with_context(|| {
        let path = Config::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "config.toml".to_string());
        format!(
            "🚨 {} API key not found. Run `gigscout login --provider {}`, add it to {}, or set {}.",
            provider.display_name(),
            provider,
            path,
            provider.credential_env_var()
        )
    })?;

    let settings = config.provider(provider);
    let source: Arc<dyn ListingSource> = match provider {
        Provider::SerpApi => {
            let mut source =
                SerpApiSource::new(api_key).with_locale(&config.region, &config.country_code);
            if let Some(url) = &settings.base_url {
                source = source.with_base_url(url);
            }
            Arc::new(source)
        }
        Provider::JSearch => {
            let mut source = JSearchSource::new(api_key);
            if let Some(host) = &settings.host {
                source = source.with_host(host);
            }
            if let Some(url) = &settings.base_url {
                source = source.with_base_url(url);
            }
            Arc::new(source)
        }
    };

    let client = SearchClient::new(source).with_cache_ttl(config.cache_ttl(provider));

    Ok(Finder::new(client)
        .with_query_builder(QueryBuilder::new(&config.region))
        .with_result_count(config.result_count))
}

fn prompt_skills() -> Result<String> {
    Input::<String>::new()
        .with_prompt("💻 Enter your technical skills (comma-separated, e.g. Python, SQL, React)")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")
}

fn prompt_interest() -> Result<String> {
    Input::<String>::new()
        .with_prompt("🎯 Enter your domain or career interest (e.g. Data Science, Web Dev)")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")
}

/// One search action: validate, search, print
///
/// Missing input is a warning, not an error; no search is made.
async fn run_search(
    finder: &Finder,
    skills: String,
    interest: String,
    format: OutputFormat,
) -> Result<()> {
    let criteria = match criteria_or_warning(skills, interest) {
        Ok(criteria) => criteria,
        Err(warning) => {
            eprintln!("{} {}", "⚠️".yellow(), warning.yellow());
            return Ok(());
        }
    };

    eprintln!("{}", "Searching for opportunities... 🕵️".dimmed());
    let report = finder.find(&criteria).await;

    print_report(&report, format)
}

/// Validated criteria, or the warning to show instead of searching
fn criteria_or_warning(skills: String, interest: String) -> std::result::Result<SearchCriteria, String> {
    SearchCriteria::new(skills, interest).map_err(|err| match err {
        DomainError::Validation(message) => message,
        other => other.to_string(),
    })
}

fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Markdown => println!("{}", render(report, RenderStyle::Markdown)),
        OutputFormat::Plain => {
            for line in render(report, RenderStyle::Plain).lines() {
                println!("{}", style_line(line));
            }
        }
    }

    Ok(())
}

/// Terminal colors for plain output
fn style_line(line: &str) -> String {
    if line.starts_with("== ") {
        line.cyan().bold().to_string()
    } else if line.starts_with("▼ ") {
        line.bold().to_string()
    } else if line.starts_with("❌") {
        line.red().to_string()
    } else if line.starts_with("⚠️") {
        line.yellow().to_string()
    } else if line.trim_start().starts_with("ℹ️") {
        line.blue().to_string()
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigscout::domain::MISSING_INPUT_WARNING;

    #[test]
    fn test_missing_input_yields_warning() {
        for (skills, interest) in [("", "Data Science"), ("Python", ""), ("  ", "\t")] {
            let warning = criteria_or_warning(skills.to_string(), interest.to_string()).unwrap_err();
            assert_eq!(warning, MISSING_INPUT_WARNING);
        }
    }

    #[test]
    fn test_valid_input_is_kept_verbatim() {
        let criteria =
            criteria_or_warning(" Python, SQL".to_string(), "Data Science".to_string()).unwrap();
        assert_eq!(criteria.skills(), " Python, SQL");
        assert_eq!(criteria.interest(), "Data Science");
    }
}
