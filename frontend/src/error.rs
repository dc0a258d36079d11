/// Failures talking to the backend. A non-success status is treated the
/// same as a network failure by every caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("could not encode request body for {url}: {source}")]
    Encode {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
}

impl ApiError {
    pub fn url(&self) -> &str {
        match self {
            ApiError::Network { url, .. }
            | ApiError::Status { url, .. }
            | ApiError::Decode { url, .. }
            | ApiError::Encode { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_code() {
        let err = ApiError::Status {
            url: "http://localhost:8080/metas".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "http://localhost:8080/metas answered with HTTP 500");
        assert_eq!(err.url(), "http://localhost:8080/metas");
    }
}
