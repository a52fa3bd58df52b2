use std::path::PathBuf;

use clap::Parser;
use csnades_scraping::api::reqwest_client;
use csnades_scraping::csnades;
use csnades_scraping::csnades::export::{missing_console_count, render_config, ArtifactHeader};
use csnades_scraping_utils::fs_json_util::write_json;

#[derive(Parser)]
struct Opts {
    /// Map to scrape, e.g. `mirage`.
    map: String,
    #[arg(long, default_value = "https://csnades.gg")]
    origin: String,
    /// How many detail pages may be fetched at once.
    #[arg(long, default_value_t = 6)]
    concurrency: usize,
    /// Process at most this many discovered nades.
    #[arg(long)]
    max_nades: Option<usize>,
    /// Where to write the cfg artifact.  Defaults to `<map>.cfg`.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Additionally dump every result (including errors) as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let client = reqwest_client()?;
    let results = csnades::scrape_map(
        &client,
        &opts.origin,
        &opts.map,
        opts.concurrency,
        opts.max_nades,
    )
    .await?;
    let header = ArtifactHeader {
        source_label: csnades::listing_url(&opts.origin, &opts.map),
        total: results.len(),
    };
    let output = (opts.output)
        .unwrap_or_else(|| PathBuf::from(format!("{}.cfg", opts.map)));
    fs_err::write(&output, render_config(&results, &header))?;
    if let Some(json_path) = &opts.json {
        write_json(json_path, &results)?;
    }
    println!(
        "Successfully saved {} nades to {:?}",
        results.len(),
        output,
    );
    println!("Missing console: {}", missing_console_count(&results));
    Ok(())
}
