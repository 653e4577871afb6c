//! Pull draw records out of a fetched response body.
//!
//! The page is server-rendered HTML. Its container `<div>` (`id="app"` by
//! default) carries the page state as JSON in an attribute (`data-page`).
//! The HTML parser decodes entities such as `&quot;` before the JSON is read.
//!
//! With [`FetcherConfig::accept_json_body`] set, a bare JSON document as
//! served by proxies in front of the page is also accepted. Draws are then
//! read from `draws`, then `data`, then the document itself.

use crate::config::FetcherConfig;
use crate::error::{FetchError, Result};
use crate::types::Draw;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

/// JSON pointer to the draw list inside the page state.
const DRAWS_POINTER: &str = "/props/draws";
const DRAWS_PATH: &str = "props.draws";

/// Decode the draws from a response body. The list must not be empty.
pub fn extract_draws(body: &str, config: &FetcherConfig) -> Result<Vec<Draw>> {
    if config.accept_json_body && looks_like_json(body) {
        debug!("response body is JSON, reading draws directly");
        return draws_from_json_document(body);
    }

    let payload = page_payload(body, &config.container_id, &config.payload_attribute)?;
    debug!("found {} byte page payload", payload.len());
    draws_from_page_state(&payload)
}

/// Read the payload attribute off the first `<div>` whose `id` matches.
pub fn page_payload(html: &str, container_id: &str, attribute: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let missing = || FetchError::MissingContainer(container_id.to_string());
    let with_id = Selector::parse("div[id]").map_err(|_| missing())?;

    let container = document
        .select(&with_id)
        .find(|el| el.value().id() == Some(container_id))
        .ok_or_else(missing)?;

    container
        .value()
        .attr(attribute)
        .map(str::to_string)
        .ok_or_else(|| FetchError::MissingAttribute(attribute.to_string()))
}

/// Decode page state JSON and take `props.draws`.
pub fn draws_from_page_state(payload: &str) -> Result<Vec<Draw>> {
    let mut state: Value = serde_json::from_str(payload)?;

    let draws = state
        .pointer_mut(DRAWS_POINTER)
        .map(Value::take)
        .filter(|v| !v.is_null())
        .ok_or(FetchError::MissingDraws(DRAWS_PATH))?;

    non_empty(serde_json::from_value(draws)?, DRAWS_PATH)
}

/// Decode a bare JSON response.
pub fn draws_from_json_document(body: &str) -> Result<Vec<Draw>> {
    let mut doc: Value = serde_json::from_str(body)?;

    let key = ["draws", "data"]
        .into_iter()
        .find(|k| doc.get(*k).is_some_and(|v| !v.is_null()));
    let picked = match key {
        Some(k) => doc[k].take(),
        None => doc,
    };

    let list = match picked {
        Value::Array(items) => items,
        other => vec![other],
    };

    non_empty(serde_json::from_value(Value::Array(list))?, "draw list")
}

fn non_empty(draws: Vec<Draw>, path: &'static str) -> Result<Vec<Draw>> {
    if draws.is_empty() {
        return Err(FetchError::EmptyDraws(path));
    }
    Ok(draws)
}

fn looks_like_json(body: &str) -> bool {
    let trimmed = body.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}
