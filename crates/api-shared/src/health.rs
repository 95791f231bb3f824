use crate::wire::HealthRes;

/// Health service for the proxy server.
///
/// Provides a standardised way to check that the proxy process is up. It carries no state;
/// the generation API is not probed because every call needs a caller-supplied key.
pub struct HealthService;

impl HealthService {
    /// Returns a `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "motivate proxy is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_health_reports_ok() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert!(!res.message.is_empty());
    }
}
