//! Split `assets/css/style.css` into per-section files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use portfolio_devserver::css_split;

#[derive(Debug, Parser)]
#[command(name = "split-css")]
#[command(about = "Split the monolithic stylesheet into modular files")]
struct Args {
    /// Stylesheet to split
    #[arg(long, default_value = "assets/css/style.css")]
    input: PathBuf,

    /// Directory receiving the section files
    #[arg(long, default_value = "assets/css")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match css_split::split_file(&args.input, &args.out_dir) {
        Ok(written) => {
            println!("Split {} into {} files:", args.input.display(), written.len());
            for path in &written {
                let shown = path.strip_prefix(&args.out_dir).unwrap_or(path);
                println!("   - {}", shown.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}
