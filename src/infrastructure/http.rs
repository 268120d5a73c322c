// src/infrastructure/http.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::retrieval::RetrievalStrategy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Placeholder replaced by the target URL as-is
pub const URL_PLACEHOLDER: &str = "{url}";
/// Placeholder replaced by the percent-encoded target URL
pub const ENCODED_URL_PLACEHOLDER: &str = "{encoded_url}";

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Builds the blocking client shared by all strategies of a chain
pub fn build_client(timeout_milliseconds: u64) -> DomainResult<Client> {
    Client::builder()
        .timeout(Duration::from_millis(timeout_milliseconds))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DomainError::Retrieval(format!("Failed to build HTTP client: {}", e)))
}

fn get_text(client: &Client, url: &str) -> DomainResult<String> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| DomainError::Retrieval(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DomainError::Retrieval(format!("HTTP {} from {}", status, url)));
    }

    response
        .text()
        .map_err(|e| DomainError::Retrieval(e.to_string()))
}

/// Fetches through a public relay, e.g. a CORS proxy, described by a URL
/// template containing `{url}` or `{encoded_url}`.
#[derive(Debug, Clone)]
pub struct RelayStrategy {
    name: String,
    template: String,
    client: Client,
}

impl RelayStrategy {
    pub fn new<S: Into<String>>(name: S, template: S, client: Client) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            client,
        }
    }

    /// Relay address for the given target
    pub fn relay_url(&self, target: &str) -> String {
        self.template
            .replace(ENCODED_URL_PLACEHOLDER, &encode_uri_component(target))
            .replace(URL_PLACEHOLDER, target)
    }
}

impl RetrievalStrategy for RelayStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(level = "debug", skip(self), fields(relay = %self.name))]
    fn retrieve(&self, url: &str) -> DomainResult<String> {
        let relay_url = self.relay_url(url);
        debug!("Trying to fetch via relay: {}", relay_url);
        get_text(&self.client, &relay_url)
    }
}

/// Plain GET against the target itself.
///
/// A non-success status fails the attempt, so an error page is never handed
/// to the converter as if it were the sharing page.
#[derive(Debug, Clone)]
pub struct DirectStrategy {
    client: Client,
}

impl DirectStrategy {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl RetrievalStrategy for DirectStrategy {
    fn name(&self) -> &str {
        "direct"
    }

    #[instrument(level = "debug", skip(self))]
    fn retrieve(&self, url: &str) -> DomainResult<String> {
        debug!("Trying direct fetch");
        get_text(&self.client, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const TARGET: &str = "https://arc.net/folder/AB-12?x=1&y=a b";

    fn relay(template: &str) -> RelayStrategy {
        RelayStrategy::new("test", template, Client::new())
    }

    #[test]
    fn given_encoded_placeholder_when_relay_url_then_encodes_like_uri_component() {
        let r = relay("https://api.allorigins.win/raw?url={encoded_url}");
        assert_eq!(
            r.relay_url(TARGET),
            "https://api.allorigins.win/raw?url=https%3A%2F%2Farc.net%2Ffolder%2FAB-12%3Fx%3D1%26y%3Da%20b"
        );
    }

    #[test]
    fn given_raw_placeholder_when_relay_url_then_appends_target_verbatim() {
        let r = relay("https://cors-anywhere.herokuapp.com/{url}");
        assert_eq!(
            r.relay_url("https://arc.net/folder/X"),
            "https://cors-anywhere.herokuapp.com/https://arc.net/folder/X"
        );
    }

    #[test]
    fn given_unreserved_marks_when_encode_then_left_untouched() {
        assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_uri_component("ä/"), "%C3%A4%2F");
    }

    #[test]
    fn given_timeout_when_build_client_then_succeeds() {
        assert!(build_client(1000).is_ok());
    }

    #[test]
    fn given_unreachable_host_when_direct_retrieve_then_retrieval_error() {
        let direct = DirectStrategy::new(build_client(500).unwrap());
        let result = direct.retrieve("http://127.0.0.1:9/nothing-listens-here");
        assert!(matches!(result, Err(DomainError::Retrieval(_))));
    }

    const SHARE_TARGET: &str = "https://arc.net/folder/AB-12?x=1&y=2";

    fn client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[test]
    fn given_503_response_when_direct_retrieve_then_retrieval_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/folder/down")
            .with_status(503)
            .with_body("<html>busy</html>")
            .create();
        let direct = DirectStrategy::new(client());

        let result = direct.retrieve(&format!("{}/folder/down", server.url()));

        assert!(matches!(result, Err(DomainError::Retrieval(ref m)) if m.contains("503")));
        mock.assert();
    }

    #[test]
    fn given_200_response_when_direct_retrieve_then_body_returned() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/folder/up")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>shared</html>")
            .create();
        let direct = DirectStrategy::new(client());

        let body = direct
            .retrieve(&format!("{}/folder/up", server.url()))
            .unwrap();

        assert_eq!(body, "<html>shared</html>");
        mock.assert();
    }

    #[test]
    fn given_encoded_template_when_relay_retrieve_then_target_sent_as_one_query_value() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", Matcher::Regex(r"^/raw".to_string()))
            .match_query(Matcher::UrlEncoded("url".into(), SHARE_TARGET.into()))
            .with_status(200)
            .with_body("<html>relayed</html>")
            .expect(1)
            .create();
        let relay = RelayStrategy::new(
            "mock".to_string(),
            format!("{}/raw?url={}", server.url(), ENCODED_URL_PLACEHOLDER),
            client(),
        );

        assert_eq!(relay.retrieve(SHARE_TARGET).unwrap(), "<html>relayed</html>");
        mock.assert();
    }

    #[test]
    fn given_relay_error_status_when_retrieve_then_retrieval_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", Matcher::Any)
            .with_status(429)
            .create();
        let relay = RelayStrategy::new(
            "mock".to_string(),
            format!("{}/{}", server.url(), URL_PLACEHOLDER),
            client(),
        );

        assert!(matches!(
            relay.retrieve("https://arc.net/folder/X"),
            Err(DomainError::Retrieval(_))
        ));
        mock.assert();
    }
}
