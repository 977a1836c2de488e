//! monogen CLI - generate concrete Rust code from parameterized templates
//!
//! Usage:
//! - `monogen -t a:i64 templates/convert_slice.trs` - derive the destination
//!   name from the template and bindings
//! - `monogen -t a:i64 -t b:f64 templates/process.trs generated/process` -
//!   write to an explicit destination (`.rs` appended when absent)
//!
//! The package name and source root come from `CARGO_PKG_NAME` and
//! `CARGO_MANIFEST_DIR`, which Cargo provides when the tool runs from a
//! consumer crate's build script.

use clap::Parser;
use monogen_core::{BuildContext, Generator, parse_bindings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "monogen")]
#[command(author, version, about = "Generate concrete Rust code from type-parameterized templates", long_about = None)]
struct Cli {
    /// Type binding as alias:type (repeatable)
    #[arg(short = 't', long = "type", value_name = "ALIAS:TYPE", required = true)]
    types: Vec<String>,

    /// Template source path, resolved against the source root
    source: String,

    /// Destination file (default: derived from the source name and bindings)
    destination: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // Degraded-output errors land here too: the destination file exists
        // but holds unformatted code, and the exit code still signals it.
        println!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let types = parse_bindings(&cli.types)?;
    let context = BuildContext::from_env()?;

    let generator = Generator::new(context, types, cli.source, cli.destination);
    generator.generate()?;

    Ok(())
}
