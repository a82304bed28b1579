/// Runtime settings read from the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl ServiceConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;

    pub fn from_env() -> Self {
        Self::from_values(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match port.as_deref().map(str::parse::<u16>) {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                tracing::warn!("Ignoring invalid PORT value ({}), using {}", e, Self::DEFAULT_PORT);
                Self::DEFAULT_PORT
            }
            None => Self::DEFAULT_PORT,
        };

        Self { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_values(None, None);
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_values(Some("127.0.0.1".into()), Some("9090".into()));
        assert_eq!(config.addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = ServiceConfig::from_values(None, Some("http".into()));
        assert_eq!(config.port, ServiceConfig::DEFAULT_PORT);
    }
}
