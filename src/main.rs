use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use keyscan::matcher::SearchReport;
use keyscan::{files, graph, input, matcher, output};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Parser)]
#[command(name = "keyscan")]
#[command(about = "Multi-pattern keyword scanner built on an Aho-Corasick automaton")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pattern to scan for (repeatable)
    #[arg(short, long = "pattern", global = true)]
    patterns: Vec<String>,

    /// File with one pattern per line
    #[arg(long, global = true)]
    patterns_file: Option<PathBuf>,

    /// Emit machine-readable JSON instead of report lines
    #[arg(long, global = true)]
    json: bool,

    /// Append occurrence spans to report lines
    #[arg(long, global = true)]
    spans: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Scan this string instead of files or stdin
    #[arg(long)]
    text: Option<String>,

    /// Filter directory walks by glob (relative to the walked root)
    #[arg(long)]
    glob: Option<String>,

    /// Files or directories to scan (stdin when empty)
    paths: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a structured JSON record: {"text": "...", "patterns": [...]}
    Record {
        /// Path to the record file
        path: PathBuf,
    },
    /// Export the compiled automaton as Graphviz DOT (JSON with --json)
    Graph,
}

/// A file's report, for JSON output.
#[derive(Serialize)]
struct FileReport<'a> {
    path: &'a Path,
    matches: &'a SearchReport,
}

/// A file queued for scanning. Walked files get the binary filter;
/// explicitly named files are always scanned.
struct ScanTarget {
    path: PathBuf,
    from_walk: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Record { path }) => run_record(path, &cli),
        Some(Commands::Graph) => run_graph(&cli),
        None => run_scan(&cli),
    }
}

/// Merge -p flags with the patterns file, one pattern per line.
fn load_patterns(cli: &Cli) -> Result<Vec<String>> {
    let mut patterns = cli.patterns.clone();
    if let Some(path) = &cli.patterns_file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        patterns.extend(raw.lines().filter(|l| !l.is_empty()).map(str::to_string));
    }
    if patterns.is_empty() {
        bail!("no patterns given (use -p or --patterns-file)");
    }
    Ok(patterns)
}

fn run_scan(cli: &Cli) -> Result<()> {
    let patterns = load_patterns(cli)?;
    let automaton = matcher::build(&patterns)?;

    if let Some(text) = &cli.text {
        let report = matcher::search(&automaton, text.as_bytes());
        return emit_single(&report, cli);
    }

    if cli.paths.is_empty() {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        let report = matcher::search(&automaton, &buf);
        return emit_single(&report, cli);
    }

    let mut targets: Vec<ScanTarget> = Vec::new();
    for path in &cli.paths {
        if path.is_dir() {
            for walked in files::collect(path, cli.glob.as_deref())? {
                targets.push(ScanTarget {
                    path: walked,
                    from_walk: true,
                });
            }
        } else {
            targets.push(ScanTarget {
                path: path.clone(),
                from_walk: false,
            });
        }
    }

    // One shared automaton, one scan per file. Scans are read-only, so
    // no locking is involved.
    let skipped = AtomicUsize::new(0);
    let results: Vec<(PathBuf, SearchReport)> = targets
        .par_iter()
        .filter_map(|target| {
            let contents = match files::map_contents(&target.path) {
                Ok(c) => c,
                Err(_) => {
                    skipped.fetch_add(1, Ordering::Relaxed);
                    return None;
                }
            };
            let bytes = contents.as_bytes();
            if target.from_walk && files::is_binary(bytes) {
                return None;
            }
            let report = matcher::search(&automaton, bytes);
            if report.is_empty() {
                None
            } else {
                Some((target.path.clone(), report))
            }
        })
        .collect();

    if cli.json {
        let file_reports: Vec<FileReport> = results
            .iter()
            .map(|(path, matches)| FileReport { path, matches })
            .collect();
        output::print_json(&file_reports)?;
    } else {
        output::print_file_reports(&results, !cli.no_color, cli.spans)?;
    }

    let skipped = skipped.into_inner();
    if skipped > 0 {
        eprintln!("keyscan: skipped {} unreadable file(s)", skipped);
    }
    Ok(())
}

fn run_record(path: &Path, cli: &Cli) -> Result<()> {
    let record = input::load_record(path)?;
    let automaton = matcher::build(&record.patterns)?;
    let report = matcher::search(&automaton, record.text.as_bytes());
    emit_single(&report, cli)
}

fn run_graph(cli: &Cli) -> Result<()> {
    let patterns = load_patterns(cli)?;
    let automaton = matcher::build(&patterns)?;
    let graph = graph::export(&automaton);

    if cli.json {
        output::print_json(&graph)?;
    } else {
        print!("{}", graph.to_dot());
    }
    Ok(())
}

fn emit_single(report: &SearchReport, cli: &Cli) -> Result<()> {
    if cli.json {
        output::print_json(report)?;
    } else {
        output::print_report(None, report, !cli.no_color, cli.spans)?;
    }
    Ok(())
}
