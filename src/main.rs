use activitystreams::{
    config::{LogFormat, Settings},
    Document, ObjectOrLink,
};
use dotenv_flow::dotenv_flow;
use eyre::{Result, WrapErr};
use std::io::Read;
use tracing::info;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load dotenv-flow variables
    dotenv_flow().ok();

    let settings = Settings::from_env()?;

    // Enable logging
    config_tracing(settings.log_format);

    let (source, input) = read_input()?;
    info!("normalizing {source}");

    let codec = settings.codec();
    let document: Document<ObjectOrLink> = codec
        .decode_str(&input)
        .wrap_err_with(|| format!("failed to decode {source}"))?;

    let encoded = codec
        .encode_document(&document)
        .wrap_err("failed to encode document")?;
    println!("{}", serde_json::to_string_pretty(&encoded)?);

    Ok(())
}

/// Reads the file named by the first argument, or stdin when there is none.
fn read_input() -> Result<(String, String)> {
    match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            let input = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read {path}"))?;
            Ok((path, input))
        }
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .wrap_err("failed to read stdin")?;
            Ok(("stdin".to_owned(), input))
        }
    }
}

fn config_tracing(format: LogFormat) {
    let filter = filter::Targets::new()
        .with_target("as_codec", tracing::Level::DEBUG)
        .with_target("as_vocab", tracing::Level::DEBUG)
        .with_default(tracing::Level::INFO);

    // Logs go to stderr; stdout carries the document.
    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init(),
    }
}
