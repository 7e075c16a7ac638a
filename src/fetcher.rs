use crate::constants::YEAR_PLACEHOLDER;
use crate::errors::{AppError, AppResult};
use tracing::info;
use url::Url;

/// Builds the results page URL for a single year.
///
/// Substitutes the year into the `{year}` placeholder of the template and
/// validates that the result is a well-formed URL.
///
/// # Errors
///
/// Returns `InvalidInput` if the template has no placeholder, or `UrlError`
/// if the substituted string is not a valid URL.
pub fn year_url(template: &str, year: i32) -> AppResult<String> {
    if !template.contains(YEAR_PLACEHOLDER) {
        return Err(AppError::InvalidInput(format!(
            "URL template must contain '{YEAR_PLACEHOLDER}', got: {template}"
        )));
    }

    let url = template.replace(YEAR_PLACEHOLDER, &year.to_string());
    Url::parse(&url)?;
    Ok(url)
}

/// Fetches the full HTML document for a results page.
///
/// Single best-effort attempt: no retry, no caching. Network failures,
/// timeouts and non-2xx statuses all surface as `FetchError`.
///
/// # Arguments
///
/// * `client` - HTTP client to use for the request (carries the timeout)
/// * `url` - Absolute URL of the results page
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> AppResult<String> {
    info!(url, "Fetching results page");

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    info!(url, bytes = body.len(), "Results page fetched");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::year_url;
    use crate::errors::AppError;

    #[test]
    fn test_year_url_substitutes_year() {
        let url = year_url("https://example.com/results/{year}/race", 2015).unwrap();
        assert_eq!(url, "https://example.com/results/2015/race");
    }

    #[test]
    fn test_year_url_missing_placeholder_errors() {
        let err = year_url("https://example.com/results/race", 2015).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(err.to_string().contains("{year}"));
    }

    #[test]
    fn test_year_url_invalid_url_errors() {
        let err = year_url("not a url/{year}", 2015).unwrap_err();
        assert!(matches!(err, AppError::UrlError(_)));
    }

    #[test]
    fn test_year_url_placeholder_in_query() {
        let url = year_url("https://example.com/results?edition={year}", 2016).unwrap();
        assert_eq!(url, "https://example.com/results?edition=2016");
    }
}
