use bitfold::decompress;
use bitfold::io_utils::CliError;
use clap::Parser;
use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};

/// Decompress a bitfold file created by the compressor.
#[derive(Parser)]
struct Args {
    /// Input .bfd file or a directory of .bfd files
    input: PathBuf,
    /// Output file, or output directory in directory mode
    output: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.input.is_dir() {
        decompress_directory(&args)?;
    } else {
        decompress_file(&args.input, &args.output)?;
    }
    Ok(())
}

fn has_bfd_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bfd"))
}

fn decompress_file(input: &Path, output: &Path) -> Result<(), CliError> {
    if !has_bfd_extension(input) {
        return Err(CliError::extension(input));
    }
    let data = fs::read(input).map_err(|e| CliError::io("reading input file", input, e))?;
    let restored =
        decompress(&data).map_err(|e| CliError::bitfold("decompression failed", e))?;
    fs::write(output, &restored).map_err(|e| CliError::io("writing output file", output, e))?;
    Ok(())
}

/// Decompress every `.bfd` file in the input directory, dropping the
/// extension for the output name. Per-file failures are reported and the
/// batch continues.
fn decompress_directory(args: &Args) -> Result<(), CliError> {
    fs::create_dir_all(&args.output)
        .map_err(|e| CliError::io("creating output directory", &args.output, e))?;

    let mut files: Vec<PathBuf> = fs::read_dir(&args.input)
        .map_err(|e| CliError::io("reading input directory", &args.input, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && has_bfd_extension(p))
        .collect();
    files.sort();

    let bar = ProgressBar::new(files.len() as u64);
    let mut failures = 0usize;
    for path in &files {
        let out_path = args.output.join(path.file_stem().unwrap_or_default());
        if let Err(e) = decompress_file(path, &out_path) {
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
