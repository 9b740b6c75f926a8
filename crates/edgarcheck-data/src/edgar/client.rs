//! SEC EDGAR API client with rate limiting.

use crate::edgar::ids::Cik;
use crate::edgar::source::SubmissionsSource;
use crate::edgar::submissions::{FilingIndex, Submissions};
use crate::error::{DataError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::debug;

/// SEC EDGAR API base URL
pub const EDGAR_BASE_URL: &str = "https://data.sec.gov";

/// Default rate limit: 10 requests per second (SEC requirement)
pub const DEFAULT_RATE_LIMIT: Duration = Duration::from_millis(100);

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent for SEC EDGAR requests (SEC requires identifying information)
pub const USER_AGENT: &str = "edgarcheck/0.1 (contact@example.com)";

/// Path of an issuer's submissions document relative to the API base URL.
///
/// # Example
/// ```
/// # use edgarcheck_data::edgar::{Cik, submissions_path};
/// let cik = Cik::parse("47217").unwrap();
/// assert_eq!(submissions_path(&cik), "submissions/CIK0000047217.json");
/// ```
pub fn submissions_path(cik: &Cik) -> String {
    format!("submissions/CIK{}.json", cik.padded())
}

/// Settings for [`EdgarClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Identifying User-Agent sent with every request
    pub user_agent: String,
    /// Transport timeout per request
    pub timeout: Duration,
    /// Minimum duration between requests
    pub min_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: EDGAR_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            min_interval: DEFAULT_RATE_LIMIT,
        }
    }
}

/// Rate limiter to ensure we don't exceed SEC's rate limits
struct RateLimiter {
    last_request: Instant,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Instant::now() - min_interval,
            min_interval,
        }
    }

    async fn wait(&mut self) {
        let elapsed = self.last_request.elapsed();
        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }
        self.last_request = Instant::now();
    }
}

/// SEC EDGAR API client with rate limiting
///
/// Cloning is cheap and clones share the rate limiter.
#[derive(Clone)]
pub struct EdgarClient {
    client: reqwest::Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    base_url: String,
}

impl EdgarClient {
    /// Create a new EDGAR client with default settings (10 req/sec)
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new EDGAR client with custom settings
    ///
    /// # Example
    /// ```no_run
    /// use edgarcheck_data::edgar::{ClientConfig, EdgarClient};
    /// use std::time::Duration;
    ///
    /// # fn example() -> edgarcheck_data::Result<()> {
    /// // 5 requests per second
    /// let client = EdgarClient::with_config(ClientConfig {
    ///     min_interval: Duration::from_millis(200),
    ///     ..ClientConfig::default()
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(config.min_interval))),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an issuer's submissions document.
    pub fn submissions_url(&self, cik: &Cik) -> String {
        format!("{}/{}", self.base_url, submissions_path(cik))
    }

    /// Fetch an issuer's recent filings.
    ///
    /// # Errors
    /// `DataError::Network` on transport failure, `DataError::Http` on a
    /// non-success status, and `DataError::Serialization` or
    /// `DataError::RaggedIndex` when the body does not have the submissions
    /// shape.
    ///
    /// # Example
    /// ```no_run
    /// use edgarcheck_data::edgar::{Cik, EdgarClient};
    ///
    /// # async fn example() -> edgarcheck_data::Result<()> {
    /// let client = EdgarClient::new()?;
    /// let index = client.get_submissions(&Cik::parse("47217")?).await?;
    /// println!("Found {} recent filings", index.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_submissions(&self, cik: &Cik) -> Result<FilingIndex> {
        self.rate_limiter.lock().await.wait().await;

        let url = self.submissions_url(cik);
        debug!(%url, "fetching submissions index");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(DataError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await.map_err(DataError::Network)?;
        let index = Submissions::from_json(&body)?.into_index()?;
        debug!(cik = %cik, filings = index.len(), "parsed submissions index");
        Ok(index)
    }
}

impl SubmissionsSource for EdgarClient {
    async fn fetch_index(&self, cik: &Cik) -> Result<FilingIndex> {
        self.get_submissions(cik).await
    }
}

impl std::fmt::Debug for EdgarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgarClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
