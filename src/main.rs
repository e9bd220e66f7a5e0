//! tavily-search command line entry point

use anyhow::{bail, Result};
use std::path::PathBuf;
use tavily_search::{config::Settings, WebSearchClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the search text
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        return Ok(());
    };

    let settings = load_settings(args.config)?;
    debug!("Using endpoint {}", settings.tavily.endpoint);

    let client = WebSearchClient::with_settings(&settings)?;
    let text = client.search(&args.query).await?;
    print!("{}", text);

    Ok(())
}

struct Args {
    config: Option<PathBuf>,
    query: String,
}

/// Parse command line arguments; `None` when help or version was printed
fn parse_args<I: Iterator<Item = String>>(mut iter: I) -> Result<Option<Args>> {
    let mut config = None;
    let mut words = Vec::new();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("tavily-search {}", tavily_search::VERSION);
                return Ok(None);
            }
            "-c" | "--config" => match iter.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("{} requires a file argument", arg),
            },
            "--" => {
                words.extend(iter.by_ref());
            }
            _ => words.push(arg),
        }
    }

    if words.is_empty() {
        print_usage();
        bail!("no query given");
    }

    Ok(Some(Args {
        config,
        query: words.join(" "),
    }))
}

/// Load settings from file or use defaults, then apply the environment
fn load_settings(explicit: Option<PathBuf>) -> Result<Settings> {
    let mut settings = match find_settings_file(explicit)? {
        Some(path) => {
            debug!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            debug!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_env();
    Ok(settings)
}

fn find_settings_file(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("settings file not found: {}", path.display());
        }
        return Ok(Some(path));
    }

    if let Ok(path) = std::env::var("TAVILY_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(Some(path));
        }
    }

    let mut paths = vec![
        PathBuf::from("tavily.yml"),
        PathBuf::from("config/tavily.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("tavily-search/tavily.yml"));
    }

    Ok(paths.into_iter().find(|p| p.exists()))
}

fn print_usage() {
    eprintln!(
        r#"
tavily-search v{}
Search the web with Tavily and print the result snippets

USAGE:
    tavily-search [OPTIONS] <QUERY>...

OPTIONS:
    -c, --config <FILE>    Path to settings file
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    TAVILY_API_KEY         Tavily API key (required)
    TAVILY_SETTINGS_PATH   Path to tavily.yml
    RUST_LOG               Log filter (default: warn)
"#,
        tavily_search::VERSION
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Option<Args>> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_query_words_are_joined() {
        let parsed = args(&["rust", "async", "book"]).unwrap().unwrap();
        assert_eq!(parsed.query, "rust async book");
        assert!(parsed.config.is_none());
    }

    #[test]
    fn test_config_flag() {
        let parsed = args(&["-c", "my.yml", "query"]).unwrap().unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("my.yml")));
        assert_eq!(parsed.query, "query");
    }

    #[test]
    fn test_double_dash_keeps_flags_as_words() {
        let parsed = args(&["--", "-h", "meaning"]).unwrap().unwrap();
        assert_eq!(parsed.query, "-h meaning");
    }

    #[test]
    fn test_missing_query_is_an_error() {
        assert!(args(&[]).is_err());
        assert!(args(&["--config"]).is_err());
    }
}
