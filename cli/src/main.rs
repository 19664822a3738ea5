use clap::{Parser, Subcommand};
use provenance::{
    bool_env, git_sha_with, read_git_sha, write_app_version, FlagDefault, TracingReporter,
    VersionConfig, VersionFileError,
};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "app-version")]
#[command(about = "Record and inspect the commit a build was made from")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current HEAD commit, or "unknown"
    Sha {
        /// Directory to start the repository search from
        #[arg(short, long)]
        repo: Option<PathBuf>,
    },
    /// Write the current HEAD commit to the version file
    Write {
        /// Version file path (defaults to $APP_VERSION_FILE or ./app_version)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Directory to start the repository search from
        #[arg(short, long)]
        repo: Option<PathBuf>,
    },
    /// Print the commit stored in the version file
    Read {
        /// Version file path (defaults to $APP_VERSION_FILE or ./app_version)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print an environment variable coerced to true/false
    Flag {
        /// Environment variable name
        name: String,
        /// Value used when the variable is unset
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Compare the current HEAD commit with the recorded one
    Info {
        /// Version file path (defaults to $APP_VERSION_FILE or ./app_version)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Directory to start the repository search from
        #[arg(short, long)]
        repo: Option<PathBuf>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct BuildInfo {
    version_file: PathBuf,
    current_commit: Option<String>,
    recorded_commit: Option<String>,
    matches: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = VersionConfig::from_env();

    match cli.command {
        Commands::Sha { repo } => {
            let config = apply_overrides(config, None, repo)?;
            let sha = git_sha_with(&config.search, &TracingReporter);
            println!("{}", sha.as_deref().unwrap_or("unknown"));
        }
        Commands::Write { file, repo } => {
            let config = apply_overrides(config, file, repo)?;
            let sha = write_app_version(&config.version_file, &config.search, &TracingReporter)?;
            info!(sha = %sha, path = %config.version_file.display(), "Recorded commit");
            println!("{}", sha);
        }
        Commands::Read { file } => {
            let config = apply_overrides(config, file, None)?;
            match read_git_sha(&config.version_file)? {
                Some(sha) => println!("{}", sha),
                None => println!("unknown"),
            }
        }
        Commands::Flag { name, default } => {
            let default = default.map(FlagDefault::from).unwrap_or_default();
            println!("{}", bool_env(&name, default));
        }
        Commands::Info { file, repo, json } => {
            let config = apply_overrides(config, file, repo)?;
            let build_info = build_info(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&build_info)?);
            } else {
                print_build_info(&build_info);
            }
        }
    }

    Ok(())
}

fn apply_overrides(
    mut config: VersionConfig,
    file: Option<PathBuf>,
    repo: Option<PathBuf>,
) -> Result<VersionConfig, Box<dyn std::error::Error>> {
    if let Some(file) = file {
        config.version_file = file;
    }
    if let Some(repo) = repo {
        config.search.start_dir = repo;
    }
    config.validate()?;
    Ok(config)
}

fn build_info(config: &VersionConfig) -> Result<BuildInfo, VersionFileError> {
    let current_commit = git_sha_with(&config.search, &TracingReporter);

    // A version file that was never written is reported, not fatal.
    let recorded_commit = match read_git_sha(&config.version_file) {
        Ok(sha) => sha,
        Err(VersionFileError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            None
        }
        Err(e) => return Err(e),
    };

    let matches = current_commit.is_some() && current_commit == recorded_commit;

    Ok(BuildInfo {
        version_file: config.version_file.clone(),
        current_commit,
        recorded_commit,
        matches,
    })
}

fn print_build_info(build_info: &BuildInfo) {
    println!("Version file: {}", build_info.version_file.display());
    println!(
        "Current commit: {}",
        build_info.current_commit.as_deref().unwrap_or("unknown")
    );
    println!(
        "Recorded commit: {}",
        build_info.recorded_commit.as_deref().unwrap_or("unknown")
    );
    if build_info.matches {
        println!("✓ Recorded commit matches HEAD");
    } else {
        println!("✗ Recorded commit does not match HEAD");
    }
}
