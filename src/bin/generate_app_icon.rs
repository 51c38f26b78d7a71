use anyhow::Result;
use clap::Parser;
use edudash_icons::{
    app_icon::{generate_app_icons, AppIconOptions, DEFAULT_LABEL},
    logging,
    palette::Palette,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "generate-app-icon",
    about = "Paint the EduDashPro app icon and write the app, splash, notification and favicon assets"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "assets")]
    output: PathBuf,

    /// Label drawn under the book.
    #[clap(long, default_value = DEFAULT_LABEL)]
    label: String,

    /// TrueType font for the label. Defaults to a bold system sans font.
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Gradient colour at the top edge (CSS color format)
    #[clap(long, value_name = "COLOR")]
    gradient_top: Option<String>,

    /// Gradient colour at the bottom edge (CSS color format)
    #[clap(long, value_name = "COLOR")]
    gradient_bottom: Option<String>,

    /// Also write icons.json listing the generated files
    #[clap(long)]
    manifest: bool,
}

impl From<Args> for AppIconOptions {
    fn from(args: Args) -> Self {
        let palette = Palette::default()
            .with_gradient(args.gradient_top.as_deref(), args.gradient_bottom.as_deref());
        Self {
            output: args.output,
            label: args.label,
            font: args.font,
            palette,
            manifest: args.manifest,
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let options = AppIconOptions::from(Args::parse());

    println!("🎨 Generating custom EduDashPro app icons...");
    generate_app_icons(&options)?;
    println!("\n🎉 Custom app icons generated successfully!");

    Ok(())
}
