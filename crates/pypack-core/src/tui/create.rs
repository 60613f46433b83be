//! Interactive creation workflow

use super::prompts::{prompt, yes_or_no, YesNoDefault};
use crate::config::EnvDefaults;
use crate::context::{Context, PackageSpec};
use crate::scaffold;
use crate::templates::TemplateStore;
use crate::vcs;
use anyhow::Result;
use chrono::Datelike;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the installed set
    pub template_dir: Option<PathBuf>,

    /// Package name (skips the prompt)
    pub name: Option<String>,

    /// Package version (skips the prompt)
    pub package_version: Option<String>,

    /// Package description (skips the prompt)
    pub description: Option<String>,

    /// Directory to create the package under (skips the prompt)
    pub code_root: Option<PathBuf>,

    /// Skip git repository initialization
    pub skip_git: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the interactive creation workflow
pub async fn run(defaults: &EnvDefaults, args: CreateArgs) -> Result<()> {
    cliclack::intro("pypack")?;

    // Step 1: Resolve the template directory and its manifest
    let store = TemplateStore::discover(&args.template_dir)?;
    if args.template_dir.is_some() {
        cliclack::log::info(format!("Using templates from {}", store.root().display()))?;
    }
    let manifest = store.load_manifest()?;
    cliclack::log::info(format!("{} - {}", manifest.name, manifest.description))?;

    // Step 2: Gather answers
    let spec = gather_answers(defaults, &args)?;

    // Step 3: Assemble the render context
    let context = Context::from_spec(&spec, chrono::Local::now().year());

    // Step 4: Create directories (hard stop if the target exists)
    let package_root =
        scaffold::create_package_directories(&spec.code_root, &spec.package_name).await?;

    // Steps 5-6: Render the files, touch the markers
    let spinner = cliclack::spinner();
    spinner.start("Rendering package files...");
    let written = scaffold::render_files(&store, &manifest, &package_root, &context).await?;
    scaffold::create_markers(&package_root, &spec.package_name).await?;
    spinner.stop(format!(
        "Created {} files in {}",
        written.len() + 2,
        package_root.display()
    ));

    // Step 7: Optionally initialize git
    maybe_init_git(&args, &package_root).await?;

    cliclack::outro(format!(
        "Created Python package '{}'",
        package_root.display()
    ))?;

    Ok(())
}

fn gather_answers(defaults: &EnvDefaults, args: &CreateArgs) -> Result<PackageSpec> {
    let package_name = match &args.name {
        Some(name) => name.clone(),
        None if args.yes => anyhow::bail!("--yes needs a package name; pass --name"),
        None => prompt("Package name", None)?,
    };

    let package_version = answer(args, &args.package_version, "Version", "0.1.0")?;
    let description = answer(args, &args.description, "Description", "")?;

    let full_name = answer(args, &None, "Your full name", &defaults.full_name)?;
    let email = answer(args, &None, "Your email", &defaults.email)?;
    let gh_username = answer(args, &None, "Your GitHub username", &defaults.gh_username)?;

    let code_root = match &args.code_root {
        Some(root) => root.clone(),
        None => {
            let default_root = defaults.code_root.to_string_lossy().into_owned();
            PathBuf::from(answer(args, &None, "Code root directory", &default_root)?)
        }
    };

    Ok(PackageSpec {
        package_name,
        package_version,
        description,
        full_name,
        email,
        gh_username,
        code_root,
    })
}

/// One answer: a flag value wins, `--yes` takes the default, otherwise ask.
fn answer(args: &CreateArgs, flag: &Option<String>, message: &str, default: &str) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value.clone());
    }
    if args.yes {
        return Ok(default.to_string());
    }
    prompt(message, Some(default))
}

async fn maybe_init_git(args: &CreateArgs, package_root: &Path) -> Result<()> {
    if args.skip_git {
        cliclack::log::info("Skipping git init")?;
        return Ok(());
    }

    if !vcs::git_is_installed() {
        cliclack::log::warning("git is not installed; skipping repository init")?;
        return Ok(());
    }

    let init = args.yes || yes_or_no("Initialize a git repository", YesNoDefault::Yes)?;
    if !init {
        return Ok(());
    }

    vcs::init_repository(package_root).await?;

    let version = vcs::git_version().unwrap_or_else(|| "unknown".to_string());
    cliclack::log::success(format!("Initialized git repository ({})", version))?;

    Ok(())
}
