//! Language Portal CLI
//!
//! Command-line front-end for the Language Portal API:
//! - Dashboard statistics
//! - Browse and manage words, groups, activities and sessions
//! - Check server health
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lang_portal::client::LangPortalClient;
use lang_portal::config::{generate_default_config, Config, LoggingConfig};
use lang_portal::fetch::{FetchState, PageSnapshot, PaginatedResource, Resource};
use lang_portal::models::{
    ActivityType, Difficulty, NewStudyActivity, NewWord, NewWordGroup, WordFilters,
};
use lang_portal::views;

#[derive(Parser)]
#[command(name = "lang-portal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track your Japanese learning progress from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/lang-portal/config.toml or ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show study statistics
    Dashboard,

    /// Study activities
    Activities {
        #[command(subcommand)]
        command: ActivityCommands,
    },

    /// Study sessions
    Sessions {
        #[command(subcommand)]
        command: SessionCommands,
    },

    /// Vocabulary
    Words {
        #[command(subcommand)]
        command: WordCommands,
    },

    /// Word groups
    Groups {
        #[command(subcommand)]
        command: GroupCommands,
    },

    /// Check API server health
    Health,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// List all activities
    List,
    /// Show one activity
    Show { id: String },
    /// List the sessions of an activity
    Sessions {
        id: String,
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Create an activity
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// vocabulary, grammar, kanji or reading
        #[arg(long = "type")]
        activity_type: ActivityType,
        /// beginner, intermediate or advanced
        #[arg(long, default_value = "beginner")]
        difficulty: Difficulty,
        #[arg(long)]
        thumbnail: Option<String>,
    },
    /// Delete an activity
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// List sessions
    List {
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show one session
    Show { id: String },
    /// Delete a session
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum WordCommands {
    /// List words
    List {
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,
        /// JLPT level (N5..N1)
        #[arg(long)]
        jlpt: Option<String>,
        /// Part of speech
        #[arg(long)]
        pos: Option<String>,
        /// Group ID
        #[arg(long)]
        group: Option<String>,
    },
    /// Show one word
    Show { id: String },
    /// Add a word
    Create {
        #[arg(long)]
        japanese: String,
        #[arg(long)]
        reading: String,
        #[arg(long)]
        english: String,
        #[arg(long)]
        pos: String,
        #[arg(long)]
        jlpt: Option<String>,
        #[arg(long)]
        group: Option<String>,
    },
    /// Delete a word
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum GroupCommands {
    /// List groups
    List,
    /// Show one group
    Show { id: String },
    /// List the words of a group
    Words {
        id: String,
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Create a group
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "#3b82f6")]
        color: String,
    },
    /// Delete a group
    Delete { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Using API");

    let client = LangPortalClient::http(config.api.client_config())
        .context("Failed to create API client")?;
    let format = cli.format;
    let words_per_page = config.pagination.words_per_page;
    let sessions_per_page = config.pagination.sessions_per_page;

    let ok = match cli.command {
        Commands::Dashboard => {
            let resource = Resource::new(move || {
                let client = client.clone();
                async move { client.dashboard().stats().await }
            });
            show(&resource.mount().await, "dashboard", format, views::dashboard::render)
        }

        Commands::Activities { command } => match command {
            ActivityCommands::List => {
                let resource = Resource::new(move || {
                    let client = client.clone();
                    async move { client.activities().list().await }
                });
                show(&resource.mount().await, "activities", format, |a| {
                    views::activities::render_list(a)
                })
            }
            ActivityCommands::Show { id } => {
                let resource = Resource::with_dependencies(
                    {
                        let id = id.clone();
                        move || {
                            let client = client.clone();
                            let id = id.clone();
                            async move { client.activities().get(&id).await }
                        }
                    },
                    &id,
                );
                show(&resource.mount().await, "activity", format, views::activities::render_detail)
            }
            ActivityCommands::Sessions { id, page, per_page } => {
                let resource = PaginatedResource::new(
                    move |page, per_page| {
                        let client = client.clone();
                        let id = id.clone();
                        async move { client.activities().sessions(&id, page, per_page).await }
                    },
                    page,
                    per_page.unwrap_or(sessions_per_page),
                );
                show_page(&resource.mount().await, "sessions", format, views::sessions::render_table)
            }
            ActivityCommands::Create {
                name,
                description,
                activity_type,
                difficulty,
                thumbnail,
            } => {
                let new = NewStudyActivity {
                    name,
                    description,
                    activity_type,
                    thumbnail,
                    difficulty,
                };
                report(client.activities().create(&new).await.map(|a| format!("Created activity {}", a.id)))
            }
            ActivityCommands::Delete { id } => {
                report(client.activities().delete(&id).await.map(|_| format!("Deleted activity {}", id)))
            }
        },

        Commands::Sessions { command } => match command {
            SessionCommands::List { page, per_page } => {
                let resource = PaginatedResource::new(
                    move |page, per_page| {
                        let client = client.clone();
                        async move { client.sessions().list(page, per_page).await }
                    },
                    page,
                    per_page.unwrap_or(sessions_per_page),
                );
                show_page(&resource.mount().await, "sessions", format, views::sessions::render_table)
            }
            SessionCommands::Show { id } => {
                let resource = Resource::new(move || {
                    let client = client.clone();
                    let id = id.clone();
                    async move { client.sessions().get(&id).await }
                });
                show(&resource.mount().await, "session", format, views::sessions::render_detail)
            }
            SessionCommands::Delete { id } => {
                report(client.sessions().delete(&id).await.map(|_| format!("Deleted session {}", id)))
            }
        },

        Commands::Words { command } => match command {
            WordCommands::List {
                page,
                per_page,
                search,
                jlpt,
                pos,
                group,
            } => {
                let filters = WordFilters {
                    search,
                    jlpt_level: jlpt,
                    part_of_speech: pos,
                    group_id: group,
                };
                let resource = PaginatedResource::new(
                    move |page, per_page| {
                        let client = client.clone();
                        let filters = filters.clone();
                        async move { client.words().list(page, per_page, &filters).await }
                    },
                    page,
                    per_page.unwrap_or(words_per_page),
                );
                show_page(&resource.mount().await, "words", format, views::words::render_table)
            }
            WordCommands::Show { id } => {
                let resource = Resource::new(move || {
                    let client = client.clone();
                    let id = id.clone();
                    async move { client.words().get(&id).await }
                });
                show(&resource.mount().await, "word", format, views::words::render_detail)
            }
            WordCommands::Create {
                japanese,
                reading,
                english,
                pos,
                jlpt,
                group,
            } => {
                let new = NewWord {
                    japanese,
                    reading,
                    english,
                    part_of_speech: pos,
                    jlpt_level: jlpt,
                    frequency_rank: None,
                    group_id: group,
                };
                report(client.words().create(&new).await.map(|w| format!("Created word {}", w.id)))
            }
            WordCommands::Delete { id } => {
                report(client.words().delete(&id).await.map(|_| format!("Deleted word {}", id)))
            }
        },

        Commands::Groups { command } => match command {
            GroupCommands::List => {
                let resource = Resource::new(move || {
                    let client = client.clone();
                    async move { client.groups().list().await }
                });
                show(&resource.mount().await, "groups", format, |g| views::groups::render_list(g))
            }
            GroupCommands::Show { id } => {
                let resource = Resource::new(move || {
                    let client = client.clone();
                    let id = id.clone();
                    async move { client.groups().get(&id).await }
                });
                show(&resource.mount().await, "group", format, views::groups::render_detail)
            }
            GroupCommands::Words { id, page, per_page } => {
                let resource = PaginatedResource::new(
                    move |page, per_page| {
                        let client = client.clone();
                        let id = id.clone();
                        async move { client.groups().words(&id, page, per_page).await }
                    },
                    page,
                    per_page.unwrap_or(words_per_page),
                );
                show_page(&resource.mount().await, "words", format, views::words::render_table)
            }
            GroupCommands::Create {
                name,
                description,
                color,
            } => {
                let new = NewWordGroup {
                    name,
                    description,
                    color,
                };
                report(client.groups().create(&new).await.map(|g| format!("Created group {}", g.id)))
            }
            GroupCommands::Delete { id } => {
                report(client.groups().delete(&id).await.map(|_| format!("Deleted group {}", id)))
            }
        },

        Commands::Health => match client.health().await {
            Ok(health) => {
                println!("Lang Portal CLI v{}", env!("CARGO_PKG_VERSION"));
                println!("API: {}", config.api.base_url);
                println!("Status: {}", health.status);
                if let Some(version) = &health.version {
                    println!("Server version: {}", version);
                }
                health.is_healthy()
            }
            Err(e) => {
                eprintln!("Cannot connect to Language Portal API at {}", config.api.base_url);
                eprintln!("Error: {}", e.user_message());
                false
            }
        },

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("lang_portal={}", config.level)));

    let json = config.format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .init();
}

/// Print a single-request view. Returns `false` if the request failed.
fn show<T: Serialize>(
    state: &FetchState<T>,
    what: &str,
    format: OutputFormat,
    render: impl FnOnce(&T) -> String,
) -> bool {
    match (format, state) {
        (OutputFormat::Json, FetchState::Ready(data)) => print_json(data),
        (_, FetchState::Failed(message)) => eprintln!("Error: {}", message),
        _ => println!("{}", views::render_state(state, what, render)),
    }
    state.error().is_none()
}

/// Print a paginated view. Returns `false` if the page request failed.
fn show_page<T: Serialize>(
    snapshot: &PageSnapshot<T>,
    what: &str,
    format: OutputFormat,
    render: impl FnOnce(&[T]) -> String,
) -> bool {
    match format {
        OutputFormat::Json if snapshot.error.is_none() => print_json(&serde_json::json!({
            "data": snapshot.items,
            "total": snapshot.total,
            "page": snapshot.page,
            "per_page": snapshot.per_page,
            "total_pages": snapshot.total_pages,
        })),
        _ => println!("{}", views::render_page(snapshot, what, render)),
    }
    snapshot.error.is_none()
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode JSON: {}", e),
    }
}

/// Print the outcome of a mutation
fn report(result: lang_portal::ClientResult<String>) -> bool {
    match result {
        Ok(message) => {
            println!("{}", message);
            true
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            false
        }
    }
}
