use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tandem_release::config::{self, Config};
use tandem_release::context::RepositoryContext;
use tandem_release::domain::UpdateKind;
use tandem_release::gateway::{GitGateway, GoProxy, NpmRegistry};
use tandem_release::ui;
use tandem_release::workflow::{Publisher, VersionUpdater};

#[derive(Parser)]
#[command(
    name = "release",
    about = "Prepare and publish lockstep releases for a tag-versioned and a manifest-versioned package"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Repository root to operate on"
    )]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bump both package versions and record the change in the changelog
    Version {
        #[arg(help = "Version component to bump: major, minor, or patch")]
        update: String,
    },

    /// Publish the manifest package, tag the release, and verify it resolves
    Publish,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(&args.dir, args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let ctx = RepositoryContext::new(&args.dir);

    let result = match args.command {
        Command::Version { update } => run_version(&ctx, &config, &update),
        Command::Publish => run_publish(&ctx, &config),
    };

    if let Err(e) = result {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run_version(
    ctx: &RepositoryContext,
    config: &Config,
    update: &str,
) -> tandem_release::Result<()> {
    let kind: UpdateKind = update.parse()?;

    let vcs = GitGateway::open(ctx.root())?;
    let registry = NpmRegistry::new(ctx.manifest_dir(config));

    let updater = VersionUpdater::new(ctx, config, &vcs, &registry);
    let prepared = updater.prepare(kind)?;

    ui::display_prepared(&prepared);
    Ok(())
}

fn run_publish(ctx: &RepositoryContext, config: &Config) -> tandem_release::Result<()> {
    let vcs = GitGateway::open(ctx.root())?;
    let registry = NpmRegistry::new(ctx.manifest_dir(config));
    let proxy = GoProxy::new(ctx.root(), &config.tagged.module, &config.tagged.proxy);

    let publisher = Publisher::new(config, &vcs, &registry, &proxy);
    let published = publisher.publish()?;

    ui::display_published(&published);
    Ok(())
}
