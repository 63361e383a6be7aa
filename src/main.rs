use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use git_plan::services::editor::INTERRUPTED_EXIT_CODE;
use git_plan::{App, EditorError, Result};
use std::io;

#[derive(Parser)]
#[command(name = "git-plan")]
#[command(author = "Rory Byrne <rory@rory.bio>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan your commits before you write the code", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize git plan in the current repository
    Init,

    /// Plan a new commit in your editor (default)
    #[command(alias = "add")]
    Plan,

    /// List planned commits
    List {
        /// Show headlines only
        #[arg(long)]
        oneline: bool,
    },

    /// Edit an existing plan
    Edit,

    /// Delete a plan
    Delete {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Commit staged changes using a plan as the message
    Commit {
        /// Keep the plan after committing
        #[arg(long)]
        keep: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Initialize tracing on stderr so rendered plans on stdout stay clean
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "git_plan=debug" } else { "git_plan=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        if matches!(e.downcast_ref::<EditorError>(), Some(EditorError::Interrupted)) {
            eprintln!("{}", "Interrupted. Nothing saved.".yellow());
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Plan);

    if let Commands::Completions { shell } = command {
        generate(shell, &mut Cli::command(), "git-plan", &mut io::stdout());
        return Ok(());
    }

    let app = App::from_env()?;

    match command {
        Commands::Init => git_plan::cli::init::run(&app)?,
        Commands::Plan => git_plan::cli::plan::run(&app)?,
        Commands::List { oneline } => git_plan::cli::list::run(&app, oneline)?,
        Commands::Edit => git_plan::cli::edit::run(&app)?,
        Commands::Delete { yes } => git_plan::cli::delete::run(&app, yes)?,
        Commands::Commit { keep } => git_plan::cli::commit::run(&app, keep)?,
        Commands::Completions { .. } => unreachable!("completions handled before app setup"),
    }

    Ok(())
}
