use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    pub port: u32,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u32) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.host.trim().is_empty() {
            return Err(Error::InvalidConfiguration(
                "endpoint host is empty".to_string(),
            ));
        }
        if self.port == 0 || self.port > u16::MAX as u32 {
            return Err(Error::InvalidConfiguration(format!(
                "endpoint {} port out of range",
                self
            )));
        }
        Ok(())
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = s.rsplit_once(':').ok_or_else(|| {
            Error::InvalidConfiguration(format!("malformed endpoint {}, expected host:port", s))
        })?;
        let port = port.parse::<u32>().map_err(|_| {
            Error::InvalidConfiguration(format!("malformed endpoint {}, port is not a number", s))
        })?;
        let endpoint = Endpoint::new(host, port);
        endpoint.validate()?;
        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::endpoint::Endpoint;
    use crate::error::Error;

    #[test]
    fn test_parse_endpoint() -> anyhow::Result<()> {
        let endpoint = Endpoint::from_str("node1.example.com:2113")?;
        assert_eq!(endpoint, Endpoint::new("node1.example.com", 2113));
        assert_eq!(endpoint.to_string(), "node1.example.com:2113");
        Ok(())
    }

    #[test]
    fn test_parse_rejects_malformed_endpoint() {
        for malformed in ["localhost", "localhost:", "localhost:http", ":2113", "localhost:0", "localhost:70000"] {
            let result = Endpoint::from_str(malformed);
            assert!(
                matches!(result, Err(Error::InvalidConfiguration(_))),
                "{} should not parse",
                malformed
            );
        }
    }

    #[test]
    fn test_validate_port_range() {
        assert!(Endpoint::new("localhost", 1).validate().is_ok());
        assert!(Endpoint::new("localhost", 65535).validate().is_ok());
        assert!(Endpoint::new("localhost", 65536).validate().is_err());
        assert!(Endpoint::new("localhost", 0).validate().is_err());
        assert!(Endpoint::new(" ", 2113).validate().is_err());
    }
}
