//! Pypack CLI - scaffolds new src-layout Python packages

use anyhow::Result;
use clap::{Parser, Subcommand};
use pypack_core::{CreateArgs, EnvDefaults};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pypack")]
#[command(about = "CLI for scaffolding src-layout Python packages")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Python package skeleton
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Local directory to use for templates instead of the installed set
    /// (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Package name (skips the prompt)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Package version (skips the prompt)
    #[arg(long = "package-version")]
    pub package_version: Option<String>,

    /// Package description (skips the prompt)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Directory to create the package under (skips the prompt)
    #[arg(short, long)]
    pub code_root: Option<PathBuf>,

    /// Skip git repository initialization
    #[arg(long = "skip-git")]
    pub skip_git: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            name: args.name,
            package_version: args.package_version,
            description: args.description,
            code_root: args.code_root,
            skip_git: args.skip_git,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let defaults = EnvDefaults::load();

    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args.into(),
        // No subcommand provided, default to interactive create
        None => CreateArgs::default(),
    };

    let result = pypack_core::run(&defaults, create_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
