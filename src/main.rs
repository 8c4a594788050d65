use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use flate2::read::MultiGzDecoder;
use log::{debug, info};
use serde::Serialize;

use analogy::solve_str;

/// Analogical proportion solver (a : b = c : x)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First sequence of the proportion
    a: Option<String>,

    /// Second sequence of the proportion
    b: Option<String>,

    /// Third sequence of the proportion
    c: Option<String>,

    /// Solve whitespace-separated `a b c [expected]` lines from a file
    /// (plain text or gzipped)
    #[arg(long)]
    batch: Option<String>,

    /// Optional JSON output path for batch results
    #[arg(long)]
    json: Option<String>,

    /// Solve batch lines in parallel (requires the `parallel` feature)
    #[arg(long, default_value_t = false)]
    threads: bool,

    /// Number of worker threads for batch solving (default: max available - 1)
    #[arg(long, default_value_t = num_cpus::get().saturating_sub(1).max(1))]
    max_workers: usize,

    /// Verbose/info output (default: quiet)
    #[arg(long, short = 'v', alias = "info")]
    verbose: bool,

    /// Debug output
    #[arg(long)]
    debug: bool,

    /// Trace output
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();
    // Set log level based on CLI flags
    let log_level = if args.trace {
        "trace"
    } else if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "error"
    };
    std::env::set_var("RUST_LOG", log_level);
    env_logger::init();

    if let Err(error) = run(&args) {
        eprintln!("Solving failed: {error:?}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(batch_path) = &args.batch {
        let records = run_batch(batch_path, args.threads, args.max_workers)?;
        report_batch(&records, args.json.as_deref())?;
        return Ok(());
    }

    match (&args.a, &args.b, &args.c) {
        (Some(a), Some(b), Some(c)) => {
            let x = solve_str(a, b, c)
                .with_context(|| format!("no solution for {a} : {b} = {c} : x"))?;
            println!("{x}");
            Ok(())
        }
        _ => bail!("supply either three sequences or --batch FILE"),
    }
}

/// One solved (or failed) proportion from a batch file.
#[derive(Debug, Clone, Serialize)]
struct BatchRecord {
    a: String,
    b: String,
    c: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl BatchRecord {
    fn solve(a: String, b: String, c: String, expected: Option<String>) -> Self {
        let (solution, error) = match solve_str(&a, &b, &c) {
            Ok(x) => (Some(x), None),
            Err(e) => (None, Some(e.to_string())),
        };
        BatchRecord {
            a,
            b,
            c,
            expected,
            solution,
            error,
        }
    }

    fn matches_expected(&self) -> Option<bool> {
        match (&self.expected, &self.solution) {
            (Some(expected), Some(solution)) => Some(expected == solution),
            (Some(_), None) => Some(false),
            (None, _) => None,
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz") || ext.eq_ignore_ascii_case("bgz"))
        .unwrap_or(false)
}

fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    if is_gzip(path) {
        let decoder = MultiGzDecoder::new(file);
        Ok(Box::new(BufReader::new(decoder)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parse `a b c [expected]` lines; blank lines and `#` comments are skipped.
fn read_batch(path: &Path) -> Result<Vec<(String, String, String, Option<String>)>> {
    let reader = open_reader(path)?;
    let mut proportions = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Error reading {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        match fields.as_slice() {
            [a, b, c] => proportions.push((a.to_string(), b.to_string(), c.to_string(), None)),
            [a, b, c, expected] => proportions.push((
                a.to_string(),
                b.to_string(),
                c.to_string(),
                Some(expected.to_string()),
            )),
            _ => bail!(
                "{}:{}: expected `a b c [expected]`, got {} fields",
                path.display(),
                line_no + 1,
                fields.len()
            ),
        }
    }
    Ok(proportions)
}

fn run_batch(path: &str, use_threads: bool, max_workers: usize) -> Result<Vec<BatchRecord>> {
    let proportions = read_batch(Path::new(path))?;
    info!("Solving {} proportions from {}", proportions.len(), path);

    #[cfg(not(feature = "parallel"))]
    if use_threads {
        log::warn!(
            "Threaded batch solving requested, but the 'parallel' feature is not enabled; falling back to sequential mode"
        );
    }

    let records: Vec<BatchRecord> = if use_threads {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            use rayon::ThreadPoolBuilder;
            let pool = ThreadPoolBuilder::new()
                .num_threads(max_workers)
                .build()
                .context("Failed to build rayon thread pool")?;
            pool.install(|| {
                proportions
                    .into_par_iter()
                    .map(|(a, b, c, expected)| BatchRecord::solve(a, b, c, expected))
                    .collect()
            })
        }
        #[cfg(not(feature = "parallel"))]
        {
            let _ = max_workers;
            proportions
                .into_iter()
                .map(|(a, b, c, expected)| BatchRecord::solve(a, b, c, expected))
                .collect()
        }
    } else {
        proportions
            .into_iter()
            .map(|(a, b, c, expected)| BatchRecord::solve(a, b, c, expected))
            .collect()
    };

    Ok(records)
}

fn report_batch(records: &[BatchRecord], json_path: Option<&str>) -> Result<()> {
    let mut failed = 0usize;
    let mut mismatched = 0usize;

    for record in records {
        match (&record.solution, &record.error) {
            (Some(x), _) => {
                println!("{} : {} = {} : {}", record.a, record.b, record.c, x);
                if record.matches_expected() == Some(false) {
                    mismatched += 1;
                    println!(
                        "  mismatch: expected {}",
                        record.expected.as_deref().unwrap_or_default()
                    );
                }
            }
            (None, Some(error)) => {
                failed += 1;
                println!("{} : {} = {} : ?  ({error})", record.a, record.b, record.c);
            }
            (None, None) => debug!("record without solution or error: {record:?}"),
        }
    }

    info!(
        "{} solved, {} unsolvable, {} mismatched",
        records.len() - failed,
        failed,
        mismatched
    );

    if let Some(path) = json_path {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {path}"))?;
        writeln!(file, "{}", serde_json::to_string_pretty(records)?)?;
        info!("Batch results written to {path}");
    }

    if mismatched > 0 {
        bail!("{mismatched} solutions did not match the expected forms");
    }
    Ok(())
}
