//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use zetteldeck_ast::ZettelId;
use zetteldeck_core::{Presenter, PresenterConfig};

use crate::dirstore::DirStore;

#[derive(Parser)]
#[command(name = "zetteldeck")]
#[command(author, version, about = "Slide shows and handouts from zettel", long_about = None)]
struct Cli {
    /// Directory holding the zettel
    #[arg(short, long, default_value = ".")]
    store: PathBuf,

    /// Presenter configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Zettel whose metadata overrides the configuration
    #[arg(long, value_parser = ZettelId::parse)]
    config_zettel: Option<ZettelId>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a slide set as reveal.js slide show
    Show {
        /// Zettel listing the slides
        #[arg(value_parser = ZettelId::parse)]
        id: ZettelId,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a slide set as handout
    Handout {
        /// Zettel listing the slides
        #[arg(value_parser = ZettelId::parse)]
        id: ZettelId,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a single zettel
    Zettel {
        /// Zettel to render
        #[arg(value_parser = ZettelId::parse)]
        id: ZettelId,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the table of contents of a slide set
    Toc {
        /// Zettel listing the slides
        #[arg(value_parser = ZettelId::parse)]
        id: ZettelId,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the raw content of a zettel, e.g. an image
    Content {
        /// Zettel holding the content
        #[arg(value_parser = ZettelId::parse)]
        id: ZettelId,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write an SVG zettel as standalone XML document
    Svg {
        /// Zettel holding the SVG image
        #[arg(value_parser = ZettelId::parse)]
        id: ZettelId,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List zettel with their titles
    List {
        /// Zettel to list (defaults to all zettel of the store)
        #[arg(value_parser = ZettelId::parse)]
        ids: Vec<ZettelId>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Pages that can be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Show,
    Handout,
    Zettel,
    Toc,
}

/// Where zettel and configuration come from
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub store: PathBuf,
    pub config: Option<PathBuf>,
    pub config_zettel: Option<ZettelId>,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let options = StoreOptions {
        store: cli.store,
        config: cli.config,
        config_zettel: cli.config_zettel,
    };

    match cli.command {
        Commands::Show { id, output } => {
            render_command(&options, Page::Show, id, output.as_deref())?;
        }
        Commands::Handout { id, output } => {
            render_command(&options, Page::Handout, id, output.as_deref())?;
        }
        Commands::Zettel { id, output } => {
            render_command(&options, Page::Zettel, id, output.as_deref())?;
        }
        Commands::Toc { id, output } => {
            render_command(&options, Page::Toc, id, output.as_deref())?;
        }
        Commands::Content { id, output } => {
            content_command(&options, id, output.as_deref())?;
        }
        Commands::Svg { id, output } => {
            svg_command(&options, id, output.as_deref())?;
        }
        Commands::List { ids, output } => {
            list_command(&options, &ids, output.as_deref())?;
        }
    }

    Ok(())
}

/// Set up a presenter for the store directory and configuration
pub fn open_presenter(options: &StoreOptions) -> Result<Presenter<DirStore>> {
    if !options.store.is_dir() {
        anyhow::bail!("Store directory not found: {}", options.store.display());
    }

    let config = match &options.config {
        Some(path) => PresenterConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PresenterConfig::default(),
    };

    let mut presenter = Presenter::new(DirStore::new(&options.store), config);
    if let Some(id) = options.config_zettel {
        presenter
            .apply_config_zettel(id)
            .with_context(|| format!("Failed to read configuration zettel {id}"))?;
    }
    Ok(presenter)
}

/// Render one page as HTML
pub fn render_page(presenter: &Presenter<DirStore>, page: Page, id: ZettelId) -> Result<String> {
    let html = match page {
        Page::Show => presenter.render_show(id),
        Page::Handout => presenter.render_handout(id),
        Page::Zettel => presenter.render_zettel(id),
        Page::Toc => presenter.render_toc(id),
    };
    html.with_context(|| format!("Failed to render {page:?} of zettel {id}"))
}

/// Execute one of the page commands
pub fn render_command(
    options: &StoreOptions,
    page: Page,
    id: ZettelId,
    output: Option<&Path>,
) -> Result<()> {
    let presenter = open_presenter(options)?;
    let html = render_page(&presenter, page, id)?;
    write_output(html.as_bytes(), output)
}

/// Execute the content command
pub fn content_command(options: &StoreOptions, id: ZettelId, output: Option<&Path>) -> Result<()> {
    let presenter = open_presenter(options)?;
    let data = presenter
        .content(id)
        .with_context(|| format!("Failed to read content of zettel {id}"))?;
    write_output(&data, output)
}

/// Execute the svg command
pub fn svg_command(options: &StoreOptions, id: ZettelId, output: Option<&Path>) -> Result<()> {
    let presenter = open_presenter(options)?;
    let data = presenter
        .svg(id)
        .with_context(|| format!("Failed to read SVG of zettel {id}"))?;
    write_output(&data, output)
}

/// Execute the list command
///
/// Without identifiers every zettel of the store is listed.
pub fn list_command(options: &StoreOptions, ids: &[ZettelId], output: Option<&Path>) -> Result<()> {
    let presenter = open_presenter(options)?;
    let html = if ids.is_empty() {
        let all = presenter
            .store()
            .zettel_ids()
            .with_context(|| format!("Failed to list store: {}", options.store.display()))?;
        presenter.render_list(&all, None)
    } else {
        let search = ids
            .iter()
            .map(ZettelId::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        presenter.render_list(ids, Some(&search))
    };
    write_output(html.as_bytes(), output)
}

fn write_output(data: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, data)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(data)
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_command() {
        let cli = Cli::try_parse_from([
            "zetteldeck",
            "--store",
            "zettel",
            "show",
            "20240101120000",
            "--output",
            "deck.html",
        ])
        .unwrap();
        assert_eq!(cli.store, PathBuf::from("zettel"));
        match cli.command {
            Commands::Show { id, output } => {
                assert_eq!(id.to_string(), "20240101120000");
                assert_eq!(output, Some(PathBuf::from("deck.html")));
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from(["zetteldeck", "list", "00000000000001", "20240101120000"]).unwrap();
        match cli.command {
            Commands::List { ids, output } => {
                assert_eq!(ids.len(), 2);
                assert!(output.is_none());
            }
            _ => panic!("expected list command"),
        }
        let cli = Cli::try_parse_from(["zetteldeck", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List { ids, .. } if ids.is_empty()));
    }

    #[test]
    fn test_rejects_invalid_id() {
        assert!(Cli::try_parse_from(["zetteldeck", "toc", "not-an-id"]).is_err());
    }

    #[test]
    fn test_missing_store_directory() {
        let options = StoreOptions {
            store: PathBuf::from("/nonexistent/zetteldeck/store"),
            ..StoreOptions::default()
        };
        let err = open_presenter(&options).unwrap_err();
        assert!(err.to_string().contains("Store directory not found"));
    }
}
