use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use url::Url;

use crate::{
    config::Config,
    error::{Result, TransportError, VpicError},
    model::{ModelsRequest, Vehicle},
    normalize::{DecodeVinResponse, vehicle_from_response},
    transport::{HttpTransport, Transport},
};

pub const DEFAULT_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const VIN_LEN: usize = 17;

/// Client for the vPIC vehicle API. One outbound GET per call, no retries.
#[derive(Debug)]
pub struct VpicService {
    base_url: Url,
    transport: Box<dyn Transport>,
}

/// Builder for [`VpicService`].
///
/// `timeout` only applies to the default HTTP transport; a custom transport
/// owns its own timeout policy.
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
}

impl ServiceBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn build(self) -> Result<VpicService> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw)
            .map_err(|e| VpicError::InvalidInput(format!("invalid base URL '{raw}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(VpicError::InvalidInput(format!("base URL '{raw}' cannot be a base")));
        }

        let transport: Box<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Box::new(HttpTransport::new(self.timeout.unwrap_or(DEFAULT_TIMEOUT))?),
        };

        Ok(VpicService { base_url, transport })
    }
}

/// The API paths this client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint<'a> {
    DecodeVin(&'a str),
    AllMakes,
    ModelsForMake(&'a str),
    ModelsForMakeYear(&'a str, i32),
}

impl Endpoint<'_> {
    fn segments(&self) -> Vec<String> {
        match *self {
            Endpoint::DecodeVin(vin) => vec!["decodevin".into(), vin.into()],
            Endpoint::AllMakes => vec!["getallmakes".into()],
            Endpoint::ModelsForMake(make) => vec!["getmodelsformake".into(), make.into()],
            Endpoint::ModelsForMakeYear(make, year) => vec![
                "getmodelsformakeyear".into(),
                "make".into(),
                make.into(),
                "modelyear".into(),
                year.to_string(),
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
struct MakesResponse {
    #[serde(rename = "Results", default)]
    results: Vec<MakeResult>,
}

#[derive(Debug, Deserialize)]
struct MakeResult {
    #[serde(rename = "Make_Name")]
    make_name: String,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(rename = "Results", default)]
    results: Vec<ModelResult>,
}

#[derive(Debug, Deserialize)]
struct ModelResult {
    #[serde(rename = "Model_Name")]
    model_name: String,
}

impl VpicService {
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Service against the public API with the default timeout.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Construct a service from stored configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let service = Self::builder()
            .base_url(config.base_url())
            .timeout(config.timeout())
            .build()?;
        Ok(service)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Decode a 17-character VIN.
    pub async fn decode_vin(&self, vin: &str) -> Result<Vehicle> {
        let len = vin.chars().count();
        if len != VIN_LEN {
            return Err(VpicError::InvalidInput(format!(
                "VIN must be {VIN_LEN} characters, got {len}"
            )));
        }

        let response: DecodeVinResponse = self.fetch(Endpoint::DecodeVin(vin)).await?;
        vehicle_from_response(&response)
    }

    /// All makes known to the API, in API order.
    pub async fn list_makes(&self) -> Result<Vec<String>> {
        let response: MakesResponse = self.fetch(Endpoint::AllMakes).await?;
        Ok(response.results.into_iter().map(|r| r.make_name).collect())
    }

    /// Models for a make, optionally narrowed to a model year (`year != 0`).
    pub async fn list_models(&self, request: &ModelsRequest) -> Result<Vec<String>> {
        if request.make.is_empty() {
            return Err(VpicError::InvalidInput("make is required".into()));
        }

        let endpoint = if request.year != 0 {
            Endpoint::ModelsForMakeYear(&request.make, request.year)
        } else {
            Endpoint::ModelsForMake(&request.make)
        };

        let response: ModelsResponse = self.fetch(endpoint).await?;
        Ok(response.results.into_iter().map(|r| r.model_name).collect())
    }

    fn url_for(&self, endpoint: Endpoint<'_>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(endpoint.segments());
        url.set_query(Some("format=json"));
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let url = self.url_for(endpoint)?;
        tracing::debug!(path = url.path(), "vPIC request");

        let res = self.transport.get(&url).await?;

        if !res.is_success() {
            tracing::warn!(status = res.status, path = url.path(), "vPIC request failed");
            return Err(TransportError::Status {
                status: res.status,
                body: truncate_body(&res.body),
            }
            .into());
        }

        let parsed = serde_json::from_str(&res.body)
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
