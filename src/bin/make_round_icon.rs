use anyhow::Result;
use clap::Parser;
use edudash_icons::{
    logging,
    palette::Palette,
    round_icon::{create_all_round_icons, default_targets, load_targets, RoundIconOptions, DEFAULT_SOURCE},
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "make-round-icon",
    about = "Cut an existing icon into round app, splash and favicon variants"
)]
struct Args {
    /// Path to the source icon (square PNG).
    #[clap(value_name = "INPUT", default_value = DEFAULT_SOURCE)]
    input: PathBuf,

    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "assets")]
    output: PathBuf,

    /// JSON list of `{ "file", "size" }` targets replacing the built-in list.
    #[clap(long, value_name = "FILE")]
    targets: Option<PathBuf>,

    /// Also write icons.json listing the generated files
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let targets = match &args.targets {
        Some(path) => load_targets(path)?,
        None => default_targets(),
    };
    let options = RoundIconOptions {
        input: args.input,
        output: args.output,
        targets,
        palette: Palette::default(),
        manifest: args.manifest,
    };

    println!("🔄 Making EduDashPro icons round...");
    create_all_round_icons(&options)?;
    println!("\n🎉 All icons are now perfectly round!");

    Ok(())
}
