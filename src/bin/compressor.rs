use bitfold::io_utils::CliError;
use bitfold::{compress, decompress, CompressionStats, Config};
use clap::Parser;
use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};

/// Compress a file, or every file in a directory, into the bitfold format.
#[derive(Parser)]
struct Args {
    /// Input file or directory
    input: PathBuf,
    /// Output file, or output directory in directory mode
    output: PathBuf,
    /// Ceiling on the replacement-pattern length tried per chunk (1-32)
    #[arg(long, default_value_t = 10)]
    max_sequence_length: usize,
    /// Fraction of the best score a candidate may trail by and still be tried
    #[arg(long, default_value_t = 0.01)]
    relaxation: f64,
    /// Print a progress line every N chunks (0 = quiet)
    #[arg(long, default_value_t = 0)]
    status_interval: u64,
    /// Print a JSON report to stdout instead of the text summary
    #[arg(long)]
    json: bool,
    /// Decompress the result in memory and verify byte-for-byte equality
    #[arg(long)]
    verify: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (mut cfg, clamped) = Config::new(args.max_sequence_length, args.relaxation)?;
    if clamped {
        eprintln!(
            "Max sequence length reset to {}",
            cfg.max_sequence_length
        );
    }
    cfg.status_interval = args.status_interval;

    if args.input.is_dir() {
        compress_directory(&args, &cfg)?;
    } else {
        compress_file(&args.input, &args.output, &cfg, &args)?;
    }
    Ok(())
}

fn compress_file(input: &Path, output: &Path, cfg: &Config, args: &Args) -> Result<(), CliError> {
    let data = fs::read(input).map_err(|e| CliError::io("reading input file", input, e))?;

    let mut stats = CompressionStats::new();
    let compressed =
        compress(&data, cfg, &mut stats).map_err(|e| CliError::bitfold("compression failed", e))?;

    if args.verify {
        let restored = decompress(&compressed)
            .map_err(|e| CliError::bitfold("verification decompress failed", e))?;
        if restored != data {
            return Err(CliError::new(format!(
                "verification failed for '{}': decompressed data differs from the original",
                input.display()
            )));
        }
        eprintln!("{} Verification passed for '{}'", stats.timestamp(), input.display());
    }

    fs::write(output, &compressed).map_err(|e| CliError::io("writing output file", output, e))?;

    if args.json {
        let report = stats.to_report(data.len(), compressed.len());
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::new(format!("serializing report: {e}")))?
        );
    } else {
        stats.report(data.len(), compressed.len());
    }
    Ok(())
}

/// Compress every regular file in the input directory. Per-file failures are
/// reported and the batch continues.
fn compress_directory(args: &Args, cfg: &Config) -> Result<(), CliError> {
    fs::create_dir_all(&args.output)
        .map_err(|e| CliError::io("creating output directory", &args.output, e))?;

    let mut files: Vec<PathBuf> = fs::read_dir(&args.input)
        .map_err(|e| CliError::io("reading input directory", &args.input, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    let bar = ProgressBar::new(files.len() as u64);
    let mut failures = 0usize;
    for path in &files {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".bfd");
        let out_path = args.output.join(name);
        if let Err(e) = compress_file(path, &out_path, cfg, args) {
            bar.suspend(|| eprintln!("Error processing '{}': {e}", path.display()));
            failures += 1;
        }
        bar.inc(1);
    }
    bar.finish();

    if failures > 0 {
        eprintln!("{failures}/{} files failed", files.len());
    }
    Ok(())
}
