//! Core library for the navgen sidebar generator.
//!
//! Scans a documentation tree for markdown files, normalizes their paths
//! into navigation identifiers and assembles them into a nested sidebar
//! structure for a static documentation site builder.
//!
//! The pipeline is deliberately small and synchronous:
//!
//! 1. [`FsSource`] walks the filesystem and lists `.md` files.
//! 2. [`collect`] normalizes the paths into sorted identifiers.
//! 3. [`SidebarBuilder`] assembles identifiers and static entries into a
//!    [`Sidebar`] ready for JSON serialization.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use navgen_core::{FsSource, SidebarBuilder, collect};
//!
//! let source = FsSource::new(PathBuf::from("docs/api/0.8.1"));
//! let mut builder = SidebarBuilder::new();
//! builder.collected_section("client", collect(&source, "client")?);
//! let sidebar = builder.build();
//! println!("{}", sidebar.to_json_pretty()?);
//! ```

mod collector;
mod sidebar;
mod source;

pub use collector::{collect, normalize_path};
pub use sidebar::{NavEntry, Section, Sidebar, SidebarBuilder};
pub use source::{FsSource, MarkdownSource, SourceError};
