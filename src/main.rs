// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::io::Read;
use tagger::{render, AnnotatedText, ClickListener, CommandLineInput, RunConfig, Tagger};

/// Sets up logging configuration.
///
/// Logs go to stderr so stdout carries only the rendered text.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("tagger.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Returns the text given on the command line, or all of stdin.
fn read_input(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer)
        }
    }
}

/// Annotates the input according to the resolved configuration.
fn annotate(config: &RunConfig, text: &str) -> anyhow::Result<AnnotatedText> {
    let tagger = Tagger::new(config.tagger.clone()).context("Invalid tagger configuration")?;

    // Payloads are only produced for clickable output; HTML and Markdown
    // need them for hrefs, so the CLI always asks for them.
    let listener =
        ClickListener::new().on_any(|payload| log::info!("Activated token '{}'", payload));

    let annotated = if config.links {
        tagger.annotate_with_links_clickable(text, config.color, &listener)?
    } else {
        tagger.annotate_clickable(text, config.color, &listener)?
    };

    log::info!(
        "Annotated {} token(s) in {} chars",
        annotated.annotations().len(),
        text.chars().count()
    );
    Ok(annotated)
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    let config = RunConfig::resolve(cli)?;
    let text = read_input(config.text.clone())?;
    let annotated = annotate(&config, &text)?;

    let rendered = render(&annotated, config.format)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}
