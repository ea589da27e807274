//! Qr command - decode a receipt QR image and import the invoice behind it.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use console::style;
use tracing::{debug, warn};

use tally_core::Store;

use super::add::{fetch_html, store_receipt};

/// Remote QR decode endpoint.
const QR_API: &str = "https://api.qrserver.com/v1/read-qr-code/?outputformat=json";

/// Images above this size are often rejected by the decode API.
const SIZE_WARN_BYTES: usize = 1_200_000;

/// Arguments for the qr command.
#[derive(Args)]
pub struct QrArgs {
    /// QR code image file
    image: PathBuf,

    /// Only print the decoded payload, do not import a receipt
    #[arg(long)]
    decode_only: bool,

    /// Roster name of the person who paid (default: first roster name)
    #[arg(short, long)]
    paid_by: Option<String>,

    /// Receipt title (default: the invoice number)
    #[arg(short, long)]
    title: Option<String>,

    /// Free-form notes
    #[arg(short, long)]
    notes: Option<String>,
}

pub async fn run(args: QrArgs, store: &Store) -> anyhow::Result<()> {
    let bytes = fs::read(&args.image)?;
    if bytes.is_empty() {
        anyhow::bail!("empty image file: {}", args.image.display());
    }
    if bytes.len() > SIZE_WARN_BYTES {
        warn!(bytes = bytes.len(), "image over recommended 1MB, API may reject");
    }

    let filename = args
        .image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "qr.png".to_string());
    let payload = decode_qr(bytes, filename).await?;
    println!("{} {}", style("QR payload:").bold(), payload);

    if args.decode_only {
        return Ok(());
    }

    // Some QR codes embed the invoice markup directly instead of a URL.
    let html = if payload.starts_with("http://") || payload.starts_with("https://") {
        fetch_html(&payload).await?
    } else {
        payload
    };

    let receipt = store_receipt(
        store,
        &html,
        args.paid_by.as_deref(),
        args.title.as_deref(),
        args.notes.as_deref(),
    )?;
    println!(
        "{} {} ({})",
        style("Added receipt").green().bold(),
        style(&receipt.title).bold(),
        receipt.id
    );
    Ok(())
}

/// Post the image to the decode API and pull the first symbol's data out of
/// the response (`[{ "symbol": [{ "data": "..." }] }]`).
async fn decode_qr(bytes: Vec<u8>, filename: String) -> anyhow::Result<String> {
    let client = reqwest::Client::builder()
        .user_agent("tally/1.0")
        .timeout(Duration::from_secs(10))
        .build()?;

    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(filename)
        .mime_str("application/octet-stream")?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = client
        .post(QR_API)
        .multipart(form)
        .send()
        .await?
        .error_for_status()?;
    let decoded: serde_json::Value = response.json().await?;
    debug!(%decoded, "qr api response");

    let data = decoded
        .get(0)
        .and_then(|entry| entry.get("symbol"))
        .and_then(|symbols| symbols.get(0))
        .and_then(|symbol| symbol.get("data"))
        .and_then(|data| data.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    data.map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("could not read QR code"))
}
