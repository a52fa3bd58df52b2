use anyhow::{bail, Context};
use csnades_scraping_utils::bounded::run_bounded;
use log::{info, warn};

use crate::api::fetch_document;
use crate::csnades::dedupe::dedupe_nades;
use crate::csnades::parser::console::extract_console_text;
use crate::csnades::parser::nade_list::extract_records;
use crate::csnades::schema::{NadeResult, NadeSummary};

pub mod dedupe;
pub mod export;
pub mod parser;
pub mod schema;

pub fn listing_url(origin: &str, map: &str) -> String {
    format!("{}/maps/{map}", origin.trim_end_matches('/'))
}

fn nade_url(origin: &str, map: &str, category: &str, slug: &str) -> String {
    format!(
        "{}/maps/{map}/{category}/{slug}",
        origin.trim_end_matches('/'),
    )
}

/// Discovers every nade on the map listing page, then resolves each one's
/// detail page with at most `concurrency` fetches in flight. Fails only when
/// the listing itself cannot be fetched or yields no records; per-nade
/// failures are recorded on the corresponding result instead. Results come
/// back in discovery order.
pub async fn scrape_map(
    client: &reqwest::Client,
    origin: &str,
    map: &str,
    concurrency: usize,
    max_nades: Option<usize>,
) -> anyhow::Result<Vec<NadeResult>> {
    let listing_url = listing_url(origin, map);
    let document = fetch_document(client, &listing_url)
        .await
        .with_context(|| format!("While fetching the nade listing for {map}"))?;
    let mut records = extract_records(&document);
    if records.is_empty() {
        bail!("No nade records found at {listing_url}");
    }
    info!("Found {} nade records on the listing page.", records.len());
    if let Some(max) = max_nades {
        records.truncate(max);
    }
    let records = dedupe_nades(records);
    let total = records.len();
    let jobs = (records.into_iter().enumerate())
        .map(|(i, summary)| resolve_nade(client, origin, map, summary, i + 1, total));
    Ok(run_bounded(jobs, concurrency).await)
}

async fn resolve_nade(
    client: &reqwest::Client,
    origin: &str,
    map: &str,
    summary: NadeSummary,
    position: usize,
    total: usize,
) -> NadeResult {
    let Some(category) = summary.nade_type().category_path() else {
        warn!(
            "[{position}/{total}] No category path for {:?}; not fetching",
            summary.nade_type(),
        );
        return NadeResult {
            error: Some(format!(
                "no category path for nade type {:?}",
                summary.nade_type(),
            )),
            summary,
            console_text: None,
            source_url: None,
        };
    };
    let url = nade_url(origin, map, category, summary.slug());
    info!("[{position}/{total}] {url}");
    match fetch_document(client, &url).await {
        Ok(document) => NadeResult {
            console_text: extract_console_text(&document),
            summary,
            error: None,
            source_url: Some(url),
        },
        Err(e) => {
            warn!("[{position}/{total}] {e:#}");
            NadeResult {
                summary,
                console_text: None,
                error: Some(format!("{e:#}")),
                source_url: Some(url),
            }
        }
    }
}
