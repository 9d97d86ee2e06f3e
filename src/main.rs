//! docindex — build `index.json` for a folder of Markdown documentation.
//!
//! Each subdirectory of the docs root is a project; each `.md` file inside it
//! is a document. Titles are derived from the names (`01-Getting-Started.md`
//! → "Getting Started"). The `site` block of an existing index is kept as is.
//!
//! - **default**: `docindex` scans `docs/` and rewrites `docs/index.json`
//! - **check mode**: `docindex --check` fails if the index on disk is stale

mod model;
mod render;
mod scan;
mod site;
mod title;

use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "docindex",
    about = "Generate a JSON index of Markdown documentation projects"
)]
struct Cli {
    /// Docs root; every subdirectory holding .md files becomes a project
    #[arg(short = 'd', long, default_value = "docs")]
    docs_dir: PathBuf,

    /// Index file to read site metadata from and write to [default: <DOCS_DIR>/index.json]
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Additional directory names to skip (glob patterns, repeatable)
    #[arg(short = 'x', long)]
    exclude: Vec<String>,

    /// Verify the index is current instead of writing it
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.docs_dir.join("index.json"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let exclusions = scan::Exclusions::new(&cli.exclude)?;
    let root = cli.docs_dir.as_path();
    let output = cli.output_path();

    println!("Scanning directory: {}", root.display());

    if !root.exists() {
        if cli.check {
            bail!("docs directory not found: {}", root.display());
        }
        println!("Error: {} not found.", root.display());
        return Ok(());
    }

    let site = site::load_site_metadata(&output);

    let projects = match scan::scan_projects(root, &exclusions) {
        Ok(projects) => projects,
        Err(e) if !cli.check => {
            println!("Error accessing docs directory: {:#}", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let index = model::Index { site, projects };

    if cli.check {
        return check(&output, &index);
    }

    match render::write_index(&output, &index) {
        Ok(()) => println!("Success! Updated {}", output.display()),
        Err(e) => println!("Error writing {}: {:#}", output.display(), e),
    }
    Ok(())
}

/// Compare the freshly built index with the one on disk.
fn check(output: &Path, index: &model::Index) -> Result<()> {
    if render::is_up_to_date(output, index)? {
        println!("Index is up to date: {}", output.display());
        Ok(())
    } else {
        bail!(
            "index is stale: {} (run docindex to regenerate)",
            output.display()
        )
    }
}
