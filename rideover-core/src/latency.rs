use std::time::Duration;

/// Stand-in for a backend round-trip: a one-shot delay that is not
/// cancellable and not retried. Callers inject the duration so tests can
/// run with `none()`.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDelay(Duration);

impl SimulatedDelay {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Zero-length delay for deterministic tests.
    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_delay_completes_without_sleeping() {
        let delay = SimulatedDelay::none();
        assert_eq!(delay.duration(), Duration::ZERO);
        delay.wait().await;
    }

    #[test]
    fn millis_round_trip() {
        let delay = SimulatedDelay::from_millis(1500);
        assert_eq!(delay.duration(), Duration::from_millis(1500));
    }
}
