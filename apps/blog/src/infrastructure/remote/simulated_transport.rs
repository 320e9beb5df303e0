use crate::domain::social::transport::{RemoteRequest, RemoteTransport, TransportError};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaultInjection {
    Never,
    Always,
    /// Each request fails independently with this probability. Rates outside
    /// 0.0..=1.0 are clamped; NaN and infinities count as 0.0.
    Random { failure_rate: f64 },
}

impl FaultInjection {
    fn should_fail(&self) -> bool {
        match *self {
            Self::Never => false,
            Self::Always => true,
            Self::Random { failure_rate } if failure_rate.is_finite() => {
                rand::thread_rng().gen_bool(failure_rate.clamp(0.0, 1.0))
            }
            Self::Random { .. } => false,
        }
    }
}

/// Stand-in for the site's backend: waits a fixed delay, then accepts or
/// rejects the request according to its fault injection mode.
pub struct SimulatedTransport {
    delay: Duration,
    faults: FaultInjection,
}

impl SimulatedTransport {
    pub fn new(delay: Duration, faults: FaultInjection) -> Self {
        Self { delay, faults }
    }

    pub fn instant(faults: FaultInjection) -> Self {
        Self::new(Duration::ZERO, faults)
    }
}

#[async_trait]
impl RemoteTransport for SimulatedTransport {
    async fn send(&self, request: RemoteRequest) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;

        if self.faults.should_fail() {
            debug!("Simulated remote failure for {}", request);
            return Err(TransportError(format!(
                "Request {} failed. Please try again.",
                request
            )));
        }

        debug!("Simulated remote success for {}", request);
        Ok(())
    }
}
