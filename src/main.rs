use anyhow::{Context, Result};
use cifra::{RenderedSheet, SongDocument, TransposeState};
use clap::{Arg, Command};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, PartialEq)]
enum FileFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    Text,
    Marked,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    genre: Option<&'a str>,
    steps: i32,
    lines: &'a RenderedSheet,
}

fn detect_file_format(file_path: &str) -> Result<FileFormat> {
    let path = Path::new(file_path);
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return Ok(FileFormat::Text);
    };

    match extension.to_lowercase().as_str() {
        "json" => Ok(FileFormat::Json),
        "txt" => Ok(FileFormat::Text),
        "cifra" => Ok(FileFormat::Text),
        "chords" => Ok(FileFormat::Text),
        _ => Err(anyhow::anyhow!(
            "Unsupported file extension: .{}",
            extension
        )),
    }
}

fn read_document(input_file: &str) -> Result<SongDocument> {
    let input_format = detect_file_format(input_file)
        .with_context(|| format!("Failed to detect input file format: {}", input_file))?;
    let content = std::fs::read_to_string(input_file)
        .with_context(|| format!("Failed to read input file: {}", input_file))?;

    match input_format {
        FileFormat::Json => SongDocument::from_json(&content)
            .with_context(|| format!("Failed to parse song document: {}", input_file)),
        FileFormat::Text => cifra::parse_document(&content)
            .with_context(|| format!("Failed to parse chord sheet: {}", input_file)),
    }
}

fn format_output(
    doc: &SongDocument,
    rendered: &RenderedSheet,
    steps: i32,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text | OutputFormat::Marked => {
            let mut out = String::new();
            if let Some(heading) = doc.heading() {
                out.push_str(&heading);
                out.push_str("\n\n");
            }
            let mark_chords = format == OutputFormat::Marked;
            out.push_str(&rendered.display_with_formatting(mark_chords).to_string());
            if !out.ends_with('\n') {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                title: doc.title.as_deref(),
                artist: doc.artist.as_deref(),
                genre: doc.genre.as_deref(),
                steps,
                lines: rendered,
            };
            let mut json =
                serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            log::error!("{:#}", err);
            1
        }
    });
}

fn main_result() -> Result<()> {
    let matches = Command::new("cifra")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Chord sheet transposer")
        .arg(
            Arg::new("input")
                .help("Input chord sheet (.txt, .cifra, .chords or .json)")
                .required(true)
                .value_name("INPUT_FILE")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file (defaults to stdout)")
                .value_name("OUTPUT_FILE")
                .index(2),
        )
        .arg(
            Arg::new("verbose")
                .help("Enable verbose output")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("transpose")
                .help("Transpose by semitones (e.g. +2, -3)")
                .long("transpose")
                .short('t')
                .allow_hyphen_values(true)
                .value_name("SEMITONES")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("up")
                .help("Press transpose + this many times")
                .long("up")
                .value_name("COUNT")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("down")
                .help("Press transpose - this many times")
                .long("down")
                .value_name("COUNT")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("format")
                .help("Output format")
                .long("format")
                .short('f')
                .value_name("FORMAT")
                .value_parser(["text", "marked", "json"])
                .default_value("text"),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let default_filter = if verbose { "cifra=debug" } else { "cifra=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let input_file = matches
        .get_one::<String>("input")
        .context("Missing input file")?;
    let output_file = matches.get_one::<String>("output");
    let transpose_amount = matches.get_one::<i32>("transpose").copied().unwrap_or(0);
    let up_presses = matches.get_one::<u32>("up").copied().unwrap_or(0);
    let down_presses = matches.get_one::<u32>("down").copied().unwrap_or(0);
    let output_format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("marked") => OutputFormat::Marked,
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    log::debug!("Reading chord sheet: {}", input_file);
    let doc = read_document(input_file)?;

    let mut state = TransposeState::from_steps(transpose_amount);
    for _ in 0..up_presses {
        state.step_up();
    }
    for _ in 0..down_presses {
        state.step_down();
    }

    let sheet = doc.sheet();
    log::debug!(
        "Parsed {} line(s), {} chord(s)",
        sheet.len(),
        sheet.chords().count()
    );
    log::info!("Transposing by {} semitone(s)", state.steps());

    let rendered = sheet.render(state.steps());
    let output = format_output(&doc, &rendered, state.steps(), output_format)?;

    match output_file {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            log::info!("Wrote transposed sheet to {}", path);
        }
        None => print!("{}", output),
    }

    Ok(())
}
