use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use auto_release::config;
use auto_release::host::GitHubHost;
use auto_release::orchestrator::ReleaseOrchestrator;
use auto_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "auto-release",
    about = "Publish a release with a computed tag and generated notes"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Repository slug (owner/name), defaults to GITHUB_REPOSITORY"
    )]
    repo: Option<String>,

    #[arg(short, long, help = "Authentication token, defaults to GITHUB_TOKEN")]
    token: Option<String>,

    #[arg(
        long,
        help = "Path to the triggering event payload, defaults to GITHUB_EVENT_PATH"
    )]
    event_path: Option<String>,

    #[arg(long, help = "Preview the tag and notes without publishing")]
    dry_run: bool,

    #[arg(long, help = "Skip issue lookups when generating notes")]
    skip_issues: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("auto-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = match config::resolve_config(
        args.config.as_deref(),
        args.repo.as_deref(),
        args.token.as_deref(),
        args.event_path.as_deref(),
    ) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.skip_issues {
        config.behavior.issue_notes = false;
    }

    let host = match GitHubHost::new(&config.repo.owner, &config.repo.name, &config.token) {
        Ok(host) => host
            .with_draft(config.behavior.draft)
            .with_prerelease(config.behavior.prerelease),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_status(&format!("Creating release in {}", config.repo));
    let orchestrator = ReleaseOrchestrator::new(&host, config).with_dry_run(args.dry_run);

    match orchestrator.run().await {
        Ok(outcome) if outcome.published => {
            ui::display_success(&format!(
                "Successfully published new release with tag {}",
                outcome.tag
            ));
            if let Some(url) = outcome.release_url {
                println!("  {}", url);
            }
            Ok(())
        }
        Ok(outcome) => {
            ui::display_status(&format!(
                "Dry run complete, release {} was not published",
                outcome.tag
            ));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
