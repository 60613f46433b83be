//! Pypack Core - library behind the `pypack` scaffolding CLI
//!
//! This library creates new src-layout Python package skeletons: it prompts
//! for project metadata, renders a fixed set of templates, and lays the
//! result out on disk.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template loading/rendering, skeleton
//!   creation, environment defaults, git probing
//! - **Layer 2: Workflow Orchestration** - `tui::run` sequences one
//!   interactive creation run from intro to outro
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and workflow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use pypack_core::{templates::TemplateStore, scaffold, Context};
//!
//! let store = TemplateStore::discover(&None)?;
//! let manifest = store.load_manifest()?;
//! let root = scaffold::create_package_directories(&code_root, "demo").await?;
//! scaffold::render_files(&store, &manifest, &root, &context).await?;
//! ```

pub mod config;
pub mod context;
pub mod scaffold;
pub mod templates;
pub mod vcs;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::EnvDefaults;
pub use context::{Context, PackageSpec};
pub use scaffold::ScaffoldError;
pub use templates::{render, RenderError, TemplateFile, TemplateManifest, TemplateStore};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};
