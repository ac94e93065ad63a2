use std::sync::Arc;
use log::{debug, info};
use reqwest::cookie::Jar;
use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;
use urlencoding::encode;
use crate::error::{Result, ScrapeError};
use crate::utils::credentials::Credentials;

pub const LOGIN_PATH: &str = "/system/login.pl";
const LOGIN_DESTINATION: &str = "/auth/?lang=en";
const SESSION_TTL_SECONDS: &str = "86400";

// Authenticated connection to the information system.
// Both clients share one cookie jar, so the login cookies reach every page request.
pub struct Session {
    base_url: Url,
    login_client: Client,
    page_client: Client,
}

impl Session {
    pub fn new(base_url: Url) -> Result<Self> {
        let jar = Arc::new(Jar::default());

        // The system answers a good login with a redirect, so this one must not follow it.
        let login_client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .redirect(Policy::none())
            .build()?;

        let page_client = Client::builder()
            .cookie_provider(jar)
            .build()?;

        Ok(Session { base_url, login_client, page_client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Posts the login form. Only a 3xx answer counts as a successful login.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<()> {
        let form = login_form(credentials);
        let url = self.base_url.join(LOGIN_PATH)?;

        let response = self.login_client.post(url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Login answered with HTTP {}", status);
        debug!("{}", body);

        if status.is_redirection() {
            info!("Logged in as {}!", credentials.login);
            Ok(())
        } else {
            Err(ScrapeError::Authentication { status })
        }
    }

    // GETs `path` with the filters appended as `key=value;key=value`.
    pub async fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = page_url(&self.base_url, path, params)?;
        debug!("Fetching {}", url);

        let response = self.page_client.get(url).send().await?;
        debug!("Page {} answered with HTTP {}", path, response.status());

        Ok(response.text().await?)
    }
}

fn login_form(credentials: &Credentials) -> [(&'static str, &str); 8] {
    [
        ("login_hidden", "1"),
        ("destination", LOGIN_DESTINATION),
        ("auth_id_hidden", "0"),
        ("auth_2fa_type", "no"),
        ("credential_0", credentials.login.as_str()),
        ("credential_1", credentials.password.as_str()),
        ("credential_k", ""),
        ("credential_2", SESSION_TTL_SECONDS),
    ]
}

pub fn page_url(base_url: &Url, path: &str, params: &[(&str, &str)]) -> Result<Url> {
    let mut url = base_url.join(path)?;
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join(";");
        url.set_query(Some(&query));
    }
    Ok(url)
}
