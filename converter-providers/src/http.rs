//! Minimal JSON-over-HTTP helper used by remote providers.

use serde::de::DeserializeOwned;
use tracing::debug;

/// Issues a GET to `url` and decodes the body as JSON into `T`.
///
/// The HTTP status is not inspected: upstream APIs report failures in the
/// body, and it is up to the caller to judge the decoded payload.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, reqwest::Error> {
    let response = client.get(url).send().await?;
    debug!(status = %response.status(), "Received response from {}", url);

    response.json::<T>().await
}
