//! TrustAuth CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use futures::channel::mpsc;
use futures::StreamExt;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use ta_core::report;
use ta_core::{
    AppConfig, CoreError, FileId, FileStore, QueueEvent, SessionStore, TokioRuntime,
    UploadRequest, UploadService,
};
use tokio::task::LocalSet;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "trustauth")]
#[command(about = "Content authenticity checks from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the session and upload records
    #[arg(long, global = true, env = "TRUSTAUTH_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run files through the upload and analysis lifecycle
    Analyze {
        /// Files to verify
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,

        /// Seed the verdict generator for reproducible results
        #[arg(long)]
        seed: Option<u64>,

        /// Analysis delay in milliseconds
        #[arg(long)]
        analysis_delay_ms: Option<u64>,

        /// Skip every artificial delay
        #[arg(long)]
        fast: bool,

        /// Keep the queue in memory only
        #[arg(long)]
        ephemeral: bool,
    },

    /// Inspect or clear the persisted upload queue
    Uploads {
        #[command(subcommand)]
        action: UploadsAction,
    },

    /// Start a session (any credentials are accepted)
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Create an account and start a session
    Register {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Print the effective configuration
    Config,
}

#[derive(Subcommand)]
enum UploadsAction {
    /// List persisted uploads
    List {
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Remove every persisted upload
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let mut config = AppConfig::default();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    // Lifecycle tasks are spawned with spawn_local
    LocalSet::new().run_until(run(cli.command, config)).await
}

async fn run(command: Commands, config: AppConfig) -> Result<()> {
    match command {
        Commands::Analyze {
            files,
            output,
            seed,
            analysis_delay_ms,
            fast,
            ephemeral,
        } => {
            let mut config = if fast { config.without_delays() } else { config };
            if let Some(ms) = analysis_delay_ms {
                config.analysis_delay_ms = ms;
            }
            if ephemeral {
                config.persist_uploads = false;
            }
            cmd_analyze(config, files, output, seed).await
        }
        Commands::Uploads { action } => match action {
            UploadsAction::List { output } => cmd_uploads_list(config, output),
            UploadsAction::Clear => cmd_uploads_clear(config),
        },
        Commands::Login { email, password } => {
            let session = open_session(config)?;
            let user = session.login(&email, &password).await?;
            println!("Logged in as {} <{}>", user.name, user.email);
            Ok(())
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            let session = open_session(config)?;
            let user = session.register(&name, &email, &password).await?;
            println!("Registered {} <{}> (id {})", user.name, user.email, user.id);
            Ok(())
        }
        Commands::Logout => {
            let session = open_session(config)?;
            match session.user() {
                Some(user) => {
                    session.logout()?;
                    println!("Logged out {}", user.email);
                }
                None => println!("Not logged in"),
            }
            Ok(())
        }
        Commands::Whoami => {
            let session = open_session(config)?;
            match session.user() {
                Some(user) => println!("{} <{}> (id {})", user.name, user.email, user.id),
                None => println!("Not logged in"),
            }
            Ok(())
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn open_session(config: AppConfig) -> Result<SessionStore<FileStore, TokioRuntime>> {
    let store = FileStore::open(&config.data_dir)
        .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?;
    let session = SessionStore::new(store, TokioRuntime, config);
    session.init()?;
    Ok(session)
}

fn open_uploads(config: AppConfig) -> Result<UploadService<FileStore, TokioRuntime>> {
    let store = FileStore::open(&config.data_dir)
        .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?;
    Ok(UploadService::open(store, TokioRuntime, config)?)
}

async fn cmd_analyze(
    config: AppConfig,
    paths: Vec<PathBuf>,
    output: OutputFormat,
    seed: Option<u64>,
) -> Result<()> {
    let uploads = open_uploads(config)?;
    let uploads = match seed {
        Some(seed) => uploads.with_seed(seed),
        None => uploads,
    };

    let (tx, mut events) = mpsc::unbounded();
    uploads.subscribe(move |event, _| {
        let _ = tx.unbounded_send(event.clone());
    });

    let mut accepted = Vec::new();
    for path in &paths {
        // Skipped like a rejection; files queued before it still complete
        let request = match request_for(path).await {
            Ok(request) => request,
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                continue;
            }
        };
        match uploads.enqueue(request) {
            Ok(id) => accepted.push(id),
            Err(CoreError::Rejected(rejection)) => {
                warn!("Skipping {}: {}", path.display(), rejection.description());
            }
            Err(e) => return Err(e.into()),
        }
    }

    if accepted.is_empty() {
        bail!("No file was accepted for analysis");
    }

    let mut pending: HashSet<FileId> = accepted.iter().cloned().collect();
    while !pending.is_empty() {
        let Some(event) = events.next().await else {
            break;
        };
        match &event {
            QueueEvent::Completed { id, .. } | QueueEvent::ReadFailed { id, .. } => {
                pending.remove(id);
            }
            QueueEvent::StatusChanged { id, status } => debug!("{} -> {}", id, status),
            // Already reported by the enqueue loop
            QueueEvent::Rejected { .. } => continue,
            _ => {}
        }
        if let Some(notice) = event.notice() {
            info!("{}: {}", notice.title, notice.description);
        }
    }

    let files: Vec<_> = accepted.iter().filter_map(|id| uploads.get(id)).collect();
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&files)?),
        OutputFormat::Text => {
            for file in &files {
                println!("{}", report::render_text(file));
            }
        }
    }
    Ok(())
}

fn cmd_uploads_list(config: AppConfig, output: OutputFormat) -> Result<()> {
    let uploads = open_uploads(config)?;
    let files = uploads.files();

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&files)?),
        OutputFormat::Text => {
            if files.is_empty() {
                println!("No uploads");
                return Ok(());
            }
            for file in &files {
                let verdict = file
                    .result
                    .as_ref()
                    .map(|r| format!("{} {}%", r.verdict_label(), r.confidence))
                    .unwrap_or_else(|| file.status.label().to_string());
                println!(
                    "{}  {:<32} {:>10}  {}",
                    file.id,
                    file.name,
                    report::format_file_size(file.size_bytes),
                    verdict
                );
            }
            let stats = uploads.stats();
            println!(
                "\n{} total, {} completed ({} authentic, {} suspicious)",
                stats.total, stats.completed, stats.authentic, stats.suspicious
            );
        }
    }
    Ok(())
}

fn cmd_uploads_clear(config: AppConfig) -> Result<()> {
    let uploads = open_uploads(config)?;
    let count = uploads.files().len();
    uploads.clear()?;
    println!("Cleared {} upload(s)", count);
    Ok(())
}

/// Build a request whose content reader hashes the file from disk
async fn request_for(path: &Path) -> Result<UploadRequest> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let owned = path.to_path_buf();

    Ok(
        UploadRequest::new(name, mime_for(path), metadata.len()).with_content(async move {
            tokio::fs::read(&owned)
                .await
                .map_err(|e| CoreError::FileRead(format!("{}: {}", owned.display(), e)))
        }),
    )
}

fn mime_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ta_core::UploadStatus;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(mime_for(Path::new("voice.mp3")), "audio/mpeg");
        assert_eq!(mime_for(Path::new("notes")), "application/octet-stream");
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "trustauth", "analyze", "a.png", "b.wav", "--seed", "7", "--fast", "-o", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                files, seed, fast, ..
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(seed, Some(7));
                assert!(fast);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[tokio::test]
    async fn test_request_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.png");
        std::fs::write(&path, b"hello").unwrap();

        let request = request_for(&path).await.unwrap();
        assert_eq!(request.name, "hello.png");
        assert_eq!(request.mime_type, "image/png");
        assert_eq!(request.size_bytes, 5);
        let bytes = request.content.unwrap().await.unwrap();
        assert_eq!(bytes, b"hello");

        assert!(request_for(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_analyze_persists_results() {
        let dir = tempfile::tempdir().unwrap();
        let media = dir.path().join("photo.jpg");
        std::fs::write(&media, b"jpeg bytes").unwrap();
        let text = dir.path().join("notes.txt");
        std::fs::write(&text, b"plain").unwrap();

        let mut config = AppConfig::default().without_delays();
        config.data_dir = dir.path().join("data");

        LocalSet::new()
            .run_until(cmd_analyze(
                config.clone(),
                vec![media, text],
                OutputFormat::Json,
                Some(3),
            ))
            .await
            .unwrap();

        let files = open_uploads(config).unwrap().files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "photo.jpg");
        assert_eq!(files[0].status, UploadStatus::Completed);
        assert!(files[0].sha256.is_some());
    }

    #[tokio::test]
    async fn test_analyze_skips_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let media = dir.path().join("photo.jpg");
        std::fs::write(&media, b"jpeg bytes").unwrap();
        let missing = dir.path().join("gone.png");

        let mut config = AppConfig::default().without_delays();
        config.data_dir = dir.path().join("data");

        LocalSet::new()
            .run_until(cmd_analyze(
                config.clone(),
                vec![media, missing],
                OutputFormat::Json,
                Some(1),
            ))
            .await
            .unwrap();

        let files = open_uploads(config).unwrap().files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "photo.jpg");
        assert!(files.iter().all(|f| f.status == UploadStatus::Completed));
    }

    #[tokio::test]
    async fn test_analyze_fails_when_nothing_readable() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default().without_delays();
        config.data_dir = dir.path().join("data");

        let result = LocalSet::new()
            .run_until(cmd_analyze(
                config.clone(),
                vec![dir.path().join("gone.png")],
                OutputFormat::Text,
                None,
            ))
            .await;

        assert!(result.is_err());
        assert!(open_uploads(config).unwrap().files().is_empty());
    }
}
