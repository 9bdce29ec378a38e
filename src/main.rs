use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};

use recap::clients::asr::{AsrClient, AsrOptions, OutputFormat, Task, DEFAULT_BASE_URL as ASR_URL};
use recap::clients::generation::{OllamaClient, DEFAULT_BASE_URL as GENERATION_URL, DEFAULT_MODEL};
use recap::clients::GenerateText;
use recap::config::SplitConfig;
use recap::pipeline;
use recap::transcribe;

/// Recap - batch transcription and summarization pipeline
///
/// Transcribes recorded media through a Whisper ASR webservice and turns
/// transcripts into structured meeting summaries through an Ollama-compatible
/// generation service.
#[derive(Parser, Debug)]
#[command(name = "recap", version, about = "Batch transcription and summarization pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transcribe media files through the ASR webservice.
    Transcribe(TranscribeArgs),
    /// Summarize transcript files through the generation service.
    Summarize(SummarizeArgs),
    /// Check connectivity and model availability of the generation service.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct TranscribeArgs {
    /// Directory containing media files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Directory where transcripts will be written
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Base URL of the ASR webservice
    #[arg(long, default_value = ASR_URL)]
    asr_url: String,

    /// Transcription output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Transcribe in the source language or translate to English
    #[arg(long, value_enum, default_value_t = Task::Transcribe)]
    task: Task,

    /// Source language code (e.g. en, es); omit for auto-detection
    #[arg(long)]
    language: Option<String>,

    /// Disable word-level timestamps
    #[arg(long)]
    no_word_timestamps: bool,

    /// Enable voice-activity-detection filtering
    #[arg(long)]
    vad_filter: bool,

    /// Disable speaker diarization
    #[arg(long)]
    no_diarize: bool,

    /// Minimum speaker count for diarization
    #[arg(long, default_value_t = 1)]
    min_speakers: u32,

    /// Maximum speaker count for diarization
    #[arg(long, default_value_t = 10)]
    max_speakers: u32,
}

impl TranscribeArgs {
    fn validate(&self) -> Result<()> {
        ensure!(
            self.input_dir.is_dir(),
            "input directory does not exist: {:?}",
            self.input_dir
        );
        ensure!(
            self.min_speakers <= self.max_speakers,
            "min_speakers ({}) must not exceed max_speakers ({})",
            self.min_speakers,
            self.max_speakers
        );
        if self.output_dir.exists() {
            ensure!(
                self.output_dir.is_dir(),
                "output path must be a directory: {:?}",
                self.output_dir
            );
        }
        Ok(())
    }

    fn asr_options(&self) -> AsrOptions {
        AsrOptions {
            output: self.format,
            task: self.task,
            language: self.language.clone(),
            word_timestamps: !self.no_word_timestamps,
            vad_filter: self.vad_filter,
            diarize: !self.no_diarize,
            min_speakers: self.min_speakers,
            max_speakers: self.max_speakers,
        }
    }
}

#[derive(Args, Debug)]
struct SummarizeArgs {
    /// Directory containing transcript .txt files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Directory where summaries and the run index will be written
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Generation model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of the generation service
    #[arg(long, default_value = GENERATION_URL)]
    generation_url: String,

    /// Maximum segment size in characters
    #[arg(long, default_value_t = SplitConfig::DEFAULT_MAX_SIZE)]
    max_size: usize,

    /// Overlap between consecutive segments in characters
    #[arg(long, default_value_t = SplitConfig::DEFAULT_OVERLAP)]
    overlap: usize,

    /// Trailing window region scanned for sentence boundaries, in characters
    #[arg(long, default_value_t = SplitConfig::DEFAULT_BOUNDARY_WINDOW)]
    boundary_window: usize,
}

impl SummarizeArgs {
    fn validate(&self) -> Result<()> {
        ensure!(
            self.input_dir.is_dir(),
            "input directory does not exist: {:?}",
            self.input_dir
        );
        if self.output_dir.exists() {
            ensure!(
                self.output_dir.is_dir(),
                "output path must be a directory: {:?}",
                self.output_dir
            );
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Base URL of the generation service
    #[arg(long, default_value = GENERATION_URL)]
    generation_url: String,

    /// Model to probe with a short generation call
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Transcribe(args) => cmd_transcribe(&args),
        Command::Summarize(args) => cmd_summarize(&args),
        Command::Check(args) => cmd_check(&args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("recap=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn cmd_transcribe(args: &TranscribeArgs) -> Result<()> {
    args.validate()
        .context("failed to validate command-line arguments")?;
    let client = AsrClient::new(&args.asr_url).context("failed to construct ASR client")?;
    let options = args.asr_options();

    println!("recap - media transcription");
    println!("Input:  {:?}", args.input_dir);
    println!("Output: {:?}", args.output_dir);
    println!("Format: {}", options.output.as_str());
    println!(
        "Language: {}",
        options.language.as_deref().unwrap_or("auto-detect")
    );

    let report = transcribe::run_batch(&args.input_dir, &args.output_dir, &client, &options)
        .context("transcription run failed")?;

    if report.total == 0 {
        println!("No supported media files found in {:?}", args.input_dir);
        return Ok(());
    }
    println!(
        "\nCompleted: {}/{} files transcribed successfully",
        report.succeeded, report.total
    );
    Ok(())
}

fn cmd_summarize(args: &SummarizeArgs) -> Result<()> {
    args.validate()
        .context("failed to validate command-line arguments")?;
    let config = SplitConfig::new(args.max_size, args.overlap, args.boundary_window)
        .context("invalid split configuration")?;
    let client = OllamaClient::new(&args.generation_url, &args.model)
        .context("failed to construct generation client")?;

    println!("recap - transcript summarization");
    println!("Input:  {:?}", args.input_dir);
    println!("Output: {:?}", args.output_dir);
    println!("Model:  {}", args.model);

    // Availability is informational only; the run proceeds either way.
    match client.model_info() {
        Ok(_) => println!("✓ Model {} is available", client.model()),
        Err(err) => println!("⚠ Could not query model info: {err}"),
    }

    let report = pipeline::run_batch(&args.input_dir, &args.output_dir, &config, &client)
        .context("summarization run failed")?;

    if report.total == 0 {
        println!("No .txt transcripts found in {:?}", args.input_dir);
        return Ok(());
    }

    println!("\n✓ Processing complete");
    println!("  Successful: {}", report.successful());
    println!("  Failed: {}", report.failed.len());
    for filename in &report.failed {
        println!("    - {filename}");
    }
    println!("\nOutput saved to {:?}", args.output_dir);
    println!("  Individual summaries: *_summary.json");
    println!("  Combined index: all_summaries_index.json");
    println!("  Readable digest: all_summaries.md");
    Ok(())
}

fn cmd_check(args: &CheckArgs) -> Result<()> {
    let client = OllamaClient::new(&args.generation_url, &args.model)
        .context("failed to construct generation client")?;

    println!("Testing generation service at {}", args.generation_url);
    let models = client
        .installed_models()
        .context("cannot reach the generation service; is it running?")?;
    println!("✓ Service is running ({} models installed)", models.len());
    for name in &models {
        println!("  - {name}");
    }

    println!("\nTesting model: {}", args.model);
    let reply = client
        .generate("Say 'OK' if you can read this.", None)
        .context("model probe failed")?;
    let preview: String = reply.chars().take(100).collect();
    println!("✓ Model responded: {preview}");
    println!("\n✓ All checks passed");
    Ok(())
}
