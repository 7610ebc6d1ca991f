use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    /// `None` when the CRM integration is not configured
    pub crm: Option<CrmConfig>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Credentials and endpoint for the Frappe CRM that stores leads
#[derive(Clone)]
pub struct CrmConfig {
    /// Base URL of the Frappe site, without trailing slash
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
    /// Upper bound for a single outbound lead request
    pub timeout: Duration,
}

impl Config {
    /// Reads all sections from the process environment.
    ///
    /// `.env` is loaded by the binary before logging starts, not here.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            crm: CrmConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024; // 64KB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "FarmLink Site API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Lead capture API for the FarmLink marketing site".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl CrmConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Reads the Frappe settings from the environment.
    ///
    /// Returns `Ok(None)` when any of `FRAPPE_BASE_URL`, `FRAPPE_API_KEY` or
    /// `FRAPPE_API_SECRET` is unset or empty. Only a malformed timeout is an error.
    pub fn from_env() -> Result<Option<Self>, String> {
        let timeout_secs = env::var("FRAPPE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "FRAPPE_TIMEOUT_SECS must be a valid number".to_string())?;

        if timeout_secs == 0 {
            return Err("FRAPPE_TIMEOUT_SECS must be greater than zero".to_string());
        }

        Ok(Self::from_parts(
            env::var("FRAPPE_BASE_URL").ok(),
            env::var("FRAPPE_API_KEY").ok(),
            env::var("FRAPPE_API_SECRET").ok(),
            Duration::from_secs(timeout_secs),
        ))
    }

    pub fn from_parts(
        base_url: Option<String>,
        api_key: Option<String>,
        api_secret: Option<String>,
        timeout: Duration,
    ) -> Option<Self> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Some(Self {
            base_url: sanitize_base_url(&present(base_url)?),
            api_key: present(api_key)?,
            api_secret: present(api_secret)?,
            timeout,
        })
    }

    /// Endpoint that creates a Lead document
    pub fn lead_url(&self) -> String {
        format!("{}/api/resource/Lead", self.base_url)
    }

    /// Value for the `Authorization` header (`token key:secret`)
    pub fn authorization(&self) -> String {
        format!("token {}:{}", self.api_key, self.api_secret)
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for CrmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrmConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn sanitize_base_url(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_string()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
