//! Shared query-string rendering for endpoint requests.
//!
//! Every endpoint goes through the same renderer: serialize the request,
//! drop the fields its URL path consumed, fold flat filter suffixes into
//! Polygon's dotted query keys, comma-join arrays, and merge the free-form
//! `params` map last.

use serde_json::Value;

use crate::endpoints::Endpoint;
use crate::error::RestResult;

/// Serialized name of the free-form parameter map every request carries.
const EXTRA_PARAMS_FIELD: &str = "params";

/// Flat filter suffixes and the dotted query keys they map to.
///
/// Checked in order; the set-membership suffixes come first so `_any_of`
/// is never split at `_of`.
const FILTER_SUFFIXES: &[(&str, &str)] = &[
    ("_any_of", ".any_of"),
    ("_all_of", ".all_of"),
    ("_search", ".search"),
    ("_gte", ".gte"),
    ("_lte", ".lte"),
    ("_gt", ".gt"),
    ("_lt", ".lt"),
];

/// Renders the query pairs for a request.
///
/// `None` fields are omitted. Keys named in the free-form `params` map win
/// over same-named typed fields and are never rewritten.
pub fn query_pairs<E: Endpoint>(request: &E) -> RestResult<Vec<(String, String)>> {
    let Value::Object(fields) = serde_json::to_value(request)? else {
        return Ok(Vec::new());
    };

    let mut pairs = Vec::with_capacity(fields.len());
    let mut extra = None;
    for (key, value) in fields {
        if key == EXTRA_PARAMS_FIELD {
            if let Value::Object(map) = value {
                extra = Some(map);
            }
            continue;
        }
        if E::PATH_FIELDS.contains(&key.as_str()) || value.is_null() {
            continue;
        }
        pairs.push((filter_key(&key), render_value(&value)));
    }

    if let Some(extra) = extra {
        for (key, value) in extra {
            if value.is_null() {
                continue;
            }
            pairs.retain(|(existing, _)| *existing != key);
            pairs.push((key, render_value(&value)));
        }
    }

    Ok(pairs)
}

fn filter_key(key: &str) -> String {
    for (suffix, dotted) in FILTER_SUFFIXES {
        if let Some(stem) = key.strip_suffix(suffix) {
            if !stem.is_empty() {
                return format!("{stem}{dotted}");
            }
        }
    }
    key.to_owned()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::GetAggsRequest;
    use crate::types::TimeInput;
    use serde_json::json;

    fn aggs_request() -> GetAggsRequest {
        GetAggsRequest {
            ticker: "AAPL".to_string(),
            multiplier: 1,
            timespan: "day".to_string(),
            from_: TimeInput::from("2024-01-02"),
            to: TimeInput::from("2024-01-05"),
            adjusted: Some(true),
            sort: Some("asc".to_string()),
            limit: Some(120),
            params: None,
        }
    }

    #[test]
    fn test_path_fields_and_nones_are_omitted() {
        let mut request = aggs_request();
        request.sort = None;

        let pairs = query_pairs(&request).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("adjusted".to_string(), "true".to_string()),
                ("limit".to_string(), "120".to_string()),
            ]
        );
    }

    #[test]
    fn test_booleans_render_lowercase() {
        let mut request = aggs_request();
        request.adjusted = Some(false);
        let pairs = query_pairs(&request).unwrap();
        assert!(pairs.contains(&("adjusted".to_string(), "false".to_string())));
    }

    #[test]
    fn test_extra_params_merge_last_and_override() {
        let mut request = aggs_request();
        request.params = Some(
            json!({
                "adjusted": "false",
                "cursor": "abc123",
                "skipped": null,
            })
            .as_object()
            .cloned()
            .unwrap(),
        );

        let pairs = query_pairs(&request).unwrap();
        let adjusted: Vec<_> = pairs.iter().filter(|(name, _)| name == "adjusted").collect();
        assert_eq!(adjusted, vec![&("adjusted".to_string(), "false".to_string())]);
        assert!(pairs.contains(&("cursor".to_string(), "abc123".to_string())));
        assert!(pairs.iter().all(|(name, _)| name != "skipped"));
    }

    #[test]
    fn test_extra_params_are_not_rewritten() {
        let mut request = aggs_request();
        request.params = Some(
            json!({ "custom_any_of": "a,b" }).as_object().cloned().unwrap(),
        );

        let pairs = query_pairs(&request).unwrap();
        assert!(pairs.contains(&("custom_any_of".to_string(), "a,b".to_string())));
    }

    #[test]
    fn test_filter_key_rewrites() {
        assert_eq!(filter_key("timestamp_gte"), "timestamp.gte");
        assert_eq!(filter_key("ticker_any_of"), "ticker.any_of");
        assert_eq!(filter_key("tickers_all_of"), "tickers.all_of");
        assert_eq!(filter_key("company_name_search"), "company_name.search");
        assert_eq!(filter_key("date_lt"), "date.lt");
        // No stem to attach the dot to: left alone.
        assert_eq!(filter_key("search"), "search");
        // Not a recognized suffix: left alone.
        assert_eq!(filter_key("as_of"), "as_of");
        assert_eq!(filter_key("include_otc"), "include_otc");
    }

    #[test]
    fn test_render_value_shapes() {
        assert_eq!(render_value(&json!("text")), "text");
        assert_eq!(render_value(&json!(120)), "120");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(["AAPL", "MSFT"])), "AAPL,MSFT");
        assert_eq!(render_value(&json!([1, 2, 3])), "1,2,3");
    }
}
