use anyhow::Result;
use clap::Parser;

use git_semver::boundary::BoundaryWarning;
use git_semver::config;
use git_semver::git::GitRepository;
use git_semver::resolver::VersionResolver;
use git_semver::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    about = "Derive and validate semantic versions from git tags",
    version
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Repository path (discovered from the current directory by default)")]
    repo: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    #[command(about = "Print the effective version for the current repository state")]
    Get,

    #[command(about = "Check a version string against the grammar and the reference tag")]
    Validate {
        #[arg(
            short = 'v',
            long = "version",
            value_name = "VERSION",
            help = "Version string to check"
        )]
        version: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Open the repository before touching any version logic
    let repo_path = args.repo.as_deref().unwrap_or(".");
    let repo = match GitRepository::discover(repo_path) {
        Ok(repo) => repo.with_tag_prefix(&config.tags.prefix),
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let reference_depth = config.validate.reference_depth;
    let resolver = VersionResolver::new(config);

    match args.command.unwrap_or(Command::Get) {
        Command::Get => match resolver.resolve(&repo) {
            Ok(resolved) => {
                if resolved.snapshot.is_detached() {
                    let warning = BoundaryWarning::DetachedHead {
                        short_hash: resolved.snapshot.short_hash.clone(),
                    };
                    ui::display_boundary_warning(&warning);
                }

                // Bare output on stdout so scripts can consume it
                println!("{}", resolved.version);
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },

        Command::Validate { version } => match resolver.validate(&repo, &version) {
            Ok(validated) => {
                match &validated.reference {
                    Some(tag) => {
                        ui::display_status(&format!("Compared against reference tag '{}'", tag));
                    }
                    None => {
                        let warning = BoundaryWarning::NoReferenceTag {
                            depth: reference_depth,
                        };
                        ui::display_boundary_warning(&warning);
                    }
                }

                ui::display_success(&format!("Version {} is valid", validated.candidate));
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
