use anyhow::Result;
use clap::Parser;
use mipmap_placeholder::{density::Density, verify};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "verify_icons",
    about = "Check launcher icons produced by mipmap-placeholder"
)]
struct Args {
    /// Resource directory containing the mipmap-* folders.
    #[clap(value_name = "DIR", default_value = "android/app/src/main/res")]
    root: PathBuf,

    /// Only check this density (mdpi, hdpi, xhdpi, xxhdpi, xxxhdpi).
    #[clap(short, long, value_name = "DENSITY")]
    density: Option<Density>,

    /// Print the reports as JSON
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reports = verify::inspect_icons(&args.root, args.density)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("Checking launcher icons in: {}", args.root.display());
        for report in &reports {
            let problems = report.problems();
            if problems.is_empty() {
                println!(
                    "✓ {} {}x{}",
                    report.path.display(),
                    report.width,
                    report.height
                );
            } else {
                println!("⚠ {}: {}", report.path.display(), problems.join(", "));
            }
        }
    }

    let invalid = reports.iter().filter(|report| !report.valid).count();
    if invalid > 0 {
        anyhow::bail!("{invalid} of {} icons do not match", reports.len());
    }

    Ok(())
}
