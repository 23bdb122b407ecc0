//! Sentiment Trend Report
//!
//! Scores every paragraph of a PDF or text file and writes a PDF report with
//! a trend chart and the annotated text.
//!
//! Usage:
//!   cargo run --release --bin sentiment_report -- letters.pdf -o report.pdf
//!   cargo run --release --bin sentiment_report -- notes.txt --summary --no-chart
//!
//! Options:
//!   -o, --output <file>    Report PDF path (default: report.pdf)
//!   --title <text>         Report title
//!   --no-chart             Omit the trend chart
//!   --chart-out <file>     Also write the chart PNG
//!   --json <file>          Also write scores and summary as JSON
//!   --summary              Print per-paragraph scores to stdout
//!   --config <file>        JSON configuration file
//!   --format <pdf|text>    Force the input kind instead of detecting it
//!   -v, --verbose          Debug logging

use pdf_sentiment::summary::{to_json, write_console_summary};
use pdf_sentiment::{Pipeline, PipelineConfig, SourceKind};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

struct ReportArgs {
    input: PathBuf,
    output: PathBuf,
    title: Option<String>,
    no_chart: bool,
    chart_out: Option<PathBuf>,
    json_out: Option<PathBuf>,
    summary: bool,
    config: Option<PathBuf>,
    format: Option<SourceKind>,
    verbose: bool,
}

impl ReportArgs {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut output = PathBuf::from("report.pdf");
        let mut title = None;
        let mut no_chart = false;
        let mut chart_out = None;
        let mut json_out = None;
        let mut summary = false;
        let mut config = None;
        let mut format = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            let mut value = || -> Result<String, String> {
                i += 1;
                args.get(i).cloned().ok_or_else(|| format!("{} requires a value", flag))
            };
            match flag {
                "-o" | "--output" => output = PathBuf::from(value()?),
                "--title" => title = Some(value()?),
                "--no-chart" => no_chart = true,
                "--chart-out" => chart_out = Some(PathBuf::from(value()?)),
                "--json" => json_out = Some(PathBuf::from(value()?)),
                "--summary" => summary = true,
                "--config" => config = Some(PathBuf::from(value()?)),
                "--format" => {
                    let name = value()?;
                    format = Some(
                        SourceKind::from_name(&name)
                            .ok_or_else(|| format!("unknown format '{}' (expected pdf or text)", name))?,
                    );
                },
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => return Err(String::new()),
                other if other.starts_with('-') => return Err(format!("unknown option '{}'", other)),
                other => {
                    if input.is_some() {
                        return Err(format!("unexpected argument '{}'", other));
                    }
                    input = Some(PathBuf::from(other));
                },
            }
            i += 1;
        }

        Ok(Self {
            input: input.ok_or_else(|| "missing input file".to_string())?,
            output,
            title,
            no_chart,
            chart_out,
            json_out,
            summary,
            config,
            format,
            verbose,
        })
    }
}

fn usage() {
    eprintln!(
        "Usage: sentiment_report <input> [-o report.pdf] [--title T] [--no-chart] \
         [--chart-out chart.png] [--json results.json] [--summary] [--config cfg.json] \
         [--format pdf|text] [--verbose]"
    );
}

fn run(args: &ReportArgs) -> pdf_sentiment::Result<()> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }
    if args.no_chart {
        config = config.with_chart(false);
    }
    let pipeline = Pipeline::new(config)?;

    let bytes = fs::read(&args.input)?;
    let kind = args.format.unwrap_or_else(|| SourceKind::detect(&bytes));
    let start = Instant::now();
    let output = pipeline.run(&bytes, kind)?;
    log::info!("Pipeline finished in {:.2?}", start.elapsed());

    // Every output is staged next to its destination and renamed into place
    // only once all of them were written.
    let mut outputs = StagedOutputs::default();
    outputs.stage(&args.output, output.report.pdf())?;
    if let Some(path) = &args.chart_out {
        match output.report.chart() {
            Some(png) => outputs.stage(path, png)?,
            None => log::warn!("No chart was rendered; {} not written", path.display()),
        }
    }
    if let Some(path) = &args.json_out {
        let json = to_json(&output.paragraphs, &output.summary)?;
        outputs.stage(path, json.as_bytes())?;
    }
    for path in outputs.commit()? {
        println!("Wrote {}", path.display());
    }
    println!(
        "{} paragraphs, {} pages",
        output.paragraphs.len(),
        output.report.layout().pages
    );

    if args.summary {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out)?;
        write_console_summary(&mut out, &output.paragraphs, &output.summary)?;
    }

    Ok(())
}

/// Output files written to `<name>.partial` siblings first.
///
/// Dropping without `commit` removes every staged file.
#[derive(Default)]
struct StagedOutputs {
    /// (staging path, final path)
    files: Vec<(PathBuf, PathBuf)>,
}

impl StagedOutputs {
    fn staging_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".partial");
        path.with_file_name(name)
    }

    fn stage(&mut self, path: &Path, data: &[u8]) -> io::Result<()> {
        let staging = Self::staging_path(path);
        fs::write(&staging, data)?;
        self.files.push((staging, path.to_path_buf()));
        Ok(())
    }

    /// Move every staged file to its destination.
    fn commit(mut self) -> io::Result<Vec<PathBuf>> {
        let files = std::mem::take(&mut self.files);
        let mut written = Vec::with_capacity(files.len());
        for (i, (staging, path)) in files.iter().enumerate() {
            if let Err(e) = fs::rename(staging, path) {
                self.files = files[i..].to_vec();
                return Err(e);
            }
            written.push(path.clone());
        }
        Ok(written)
    }
}

impl Drop for StagedOutputs {
    fn drop(&mut self) {
        for (staging, _) in &self.files {
            if let Err(e) = fs::remove_file(staging) {
                log::warn!("Could not remove {}: {}", staging.display(), e);
            }
        }
    }
}

fn main() {
    let args = match ReportArgs::from_args() {
        Ok(args) => args,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("Error: {}", message);
            }
            usage();
            std::process::exit(2);
        },
    };

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&args) {
        eprintln!("{}", e.report_message());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_moves_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("report.pdf");
        let json = dir.path().join("scores.json");

        let mut outputs = StagedOutputs::default();
        outputs.stage(&pdf, b"%PDF-1.7").unwrap();
        outputs.stage(&json, b"{}").unwrap();
        assert!(!pdf.exists());

        assert_eq!(outputs.commit().unwrap(), vec![pdf.clone(), json.clone()]);
        assert_eq!(fs::read(&pdf).unwrap(), b"%PDF-1.7");
        assert_eq!(fs::read(&json).unwrap(), b"{}");
        assert!(!StagedOutputs::staging_path(&pdf).exists());
    }

    #[test]
    fn test_failed_write_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("report.pdf");
        let unwritable = dir.path().join("missing").join("chart.png");

        let mut outputs = StagedOutputs::default();
        outputs.stage(&pdf, b"%PDF-1.7").unwrap();
        assert!(outputs.stage(&unwritable, b"png").is_err());
        drop(outputs);

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
