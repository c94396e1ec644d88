use url::{Url, form_urlencoded};

use crate::error::ProbeError;

/// Inject `api_key` into `base_url`'s query string under `param_name`.
///
/// When either the key or the parameter name is missing (or empty) the base URL
/// comes back untouched. An existing entry for `param_name` is replaced, never
/// appended to; every other parameter keeps its values.
pub fn build_request_url(
    base_url: &str,
    api_key: Option<&str>,
    param_name: Option<&str>,
) -> Result<String, ProbeError> {
    let (Some(api_key), Some(param_name)) = (non_empty(api_key), non_empty(param_name)) else {
        return Ok(base_url.to_string());
    };

    let mut url = Url::parse(base_url).map_err(|source| ProbeError::UrlConstruction {
        base_url: base_url.to_string(),
        param_name: param_name.to_string(),
        source,
    })?;

    // Values for a repeated name are grouped under its first occurrence.
    let mut params: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in url.query_pairs() {
        match params.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, values)) => values.push(value.into_owned()),
            None => params.push((name.into_owned(), vec![value.into_owned()])),
        }
    }

    match params.iter_mut().find(|(name, _)| name == param_name) {
        Some((_, values)) => *values = vec![api_key.to_string()],
        None => params.push((param_name.to_string(), vec![api_key.to_string()])),
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(
            params
                .iter()
                .flat_map(|(name, values)| values.iter().map(move |v| (name.as_str(), v.as_str()))),
        )
        .finish();
    url.set_query(Some(&query));

    Ok(url.into())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
