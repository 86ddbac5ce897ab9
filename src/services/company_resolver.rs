use serde::Deserialize;
use serde_aux::field_attributes::deserialize_string_from_number;
use thiserror::Error;

use crate::domain::company::ResolvedCompany;
use crate::services::site_client::{FetchError, ListingSite};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("typeahead request failed with status {0}")]
    Status(u16),
    #[error("typeahead response is not valid JSON: {body}")]
    Json {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    #[error("no suggestions found for the query")]
    NoSuggestions,
}

// employerId arrives as a JSON number for most companies but has been seen
// as a string too.
#[derive(Deserialize)]
struct Suggestion {
    suggestion: String,
    #[serde(
        rename = "employerId",
        deserialize_with = "deserialize_string_from_number"
    )]
    employer_id: String,
}

/// Resolves a free-text company name to its canonical name and employer id
/// by taking the first typeahead suggestion.
pub async fn resolve_company(
    site: &dyn ListingSite,
    query: &str,
) -> Result<ResolvedCompany, ResolveError> {
    let page = site.typeahead(query).await?;
    if page.status != 200 {
        return Err(ResolveError::Status(page.status));
    }

    let suggestions: Vec<Suggestion> =
        serde_json::from_str(&page.body).map_err(|source| ResolveError::Json {
            source,
            body: page.body.clone(),
        })?;

    let first = suggestions
        .into_iter()
        .next()
        .ok_or(ResolveError::NoSuggestions)?;

    Ok(ResolvedCompany {
        name: first.suggestion,
        employer_id: first.employer_id,
    })
}
