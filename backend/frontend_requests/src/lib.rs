//! Requests the frontend makes against the directory backend.

use anyhow::Context;
use common_data::SearchResult;
use reqwest::Url;

mod sequencer;

pub use sequencer::{RequestSequencer, Ticket};

pub const SEARCH_PATH: &str = "/search.json";

/// `{api_base}/search.json?search=<keywords>`, with the keywords form-encoded.
pub fn search_url(api_base: &str, keywords: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(api_base)
        .and_then(|base| base.join(SEARCH_PATH))
        .with_context(|| format!("Bad API base address `{api_base}`"))?;
    url.query_pairs_mut().append_pair("search", keywords);
    Ok(url)
}

/// The backend signals "no matches" with `[]`, `null` or an empty body.
pub fn decode_search_body(body: &str) -> anyhow::Result<Vec<SearchResult>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let results: Option<Vec<SearchResult>> =
        serde_json::from_str(body).context("Search response is not a list of results")?;
    Ok(results.unwrap_or_default())
}

pub async fn search(api_base: &str, keywords: &str) -> anyhow::Result<Vec<SearchResult>> {
    let url = search_url(api_base, keywords)?;
    log::debug!("GET {url}");

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Could not reach search endpoint for [{keywords}]"))?
        .error_for_status()
        .with_context(|| format!("Search endpoint rejected [{keywords}]"))?;
    let body = response
        .text()
        .await
        .context("Could not read search response body")?;

    decode_search_body(&body)
}
