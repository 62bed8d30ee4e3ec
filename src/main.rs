use anyhow::Result;
use clap::Parser;
use mipmap_placeholder::icon_gen;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "mipmap-placeholder",
    about = "Generate placeholder Android launcher icons for every mipmap density"
)]
struct Args {
    /// Resource directory that receives the mipmap-* folders.
    #[clap(
        short,
        long,
        value_name = "DIR",
        default_value = "android/app/src/main/res"
    )]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    icon_gen::generate_icons(&args.output)?;

    Ok(())
}
