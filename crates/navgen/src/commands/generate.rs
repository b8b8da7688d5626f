//! `navgen generate` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use navgen_config::{CliSettings, Config, EntryConfig};
use navgen_core::{FsSource, MarkdownSource, NavEntry, Section, Sidebar, SidebarBuilder, collect};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Documentation base path (overrides config).
    #[arg(short, long)]
    base_path: Option<PathBuf>,

    /// Output file for the sidebar JSON (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the sidebar to stdout instead of a file.
    #[arg(long)]
    stdout: bool,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Path to configuration file (default: auto-discover navgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl GenerateArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base_path: self.base_path.clone(),
            output: self.output.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Source: {}",
            config.base_path_resolved.display()
        ));

        let source = FsSource::new(config.base_path_resolved.clone());
        let sidebar = build_sidebar(&config, &source, &output)?;

        let json = if self.compact {
            sidebar.to_json()?
        } else {
            sidebar.to_json_pretty()?
        };

        if self.stdout {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        } else {
            std::fs::write(&config.output_resolved, format!("{json}\n"))?;
            output.success(&format!(
                "Sidebar written to {}",
                config.output_resolved.display()
            ));
        }

        Ok(())
    }
}

/// Assemble the sidebar from configured entries.
///
/// Collected sections run the path collector against the markdown source;
/// the remaining entry kinds are passed through unchanged.
fn build_sidebar<S>(config: &Config, source: &S, output: &Output) -> Result<Sidebar, CliError>
where
    S: MarkdownSource + ?Sized,
{
    let mut builder = SidebarBuilder::new();

    for entry in &config.entries {
        match entry {
            EntryConfig::Collected {
                title,
                subdirectory,
                collapsable,
            } => {
                let identifiers = collect(source, subdirectory)?;
                if identifiers.is_empty() {
                    output.warning(&format!(
                        "No markdown files found under '{subdirectory}'"
                    ));
                }
                tracing::info!(
                    section = %title,
                    subdirectory = %subdirectory,
                    pages = identifiers.len(),
                    "collected section"
                );
                builder.section(Section {
                    title: title.clone(),
                    collapsable: *collapsable,
                    children: identifiers.into_iter().map(NavEntry::Page).collect(),
                });
            }
            EntryConfig::Static {
                title,
                children,
                collapsable,
            } => {
                builder.section(Section {
                    title: title.clone(),
                    collapsable: *collapsable,
                    children: children.iter().cloned().map(NavEntry::Page).collect(),
                });
            }
            EntryConfig::Link { title, path } => builder.link(title.clone(), path.clone()),
            EntryConfig::Page { page } => builder.page(page.clone()),
        }
    }

    Ok(builder.build())
}
