use std::time::{Duration, SystemTime};

/// Stretches the base interval by up to `fraction` of its length so agents
/// started together do not all hit the ESB on the same instant. Jitter only
/// ever lengthens the wait.
pub fn apply_jitter(base: Duration, fraction: f64) -> Duration {
    if fraction <= 0.0 {
        return base;
    }
    let span = base.as_secs_f64() * fraction.clamp(0.0, 1.0);
    Duration::from_secs_f64(base.as_secs_f64() + cheap_random() * span)
}

fn cheap_random() -> f64 {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    (nanos % 10_000) as f64 / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fraction_returns_base() {
        let base = Duration::from_secs(60);
        assert_eq!(apply_jitter(base, 0.0), base);
    }

    #[test]
    fn jitter_never_shortens_the_interval() {
        let base = Duration::from_secs(60);
        for _ in 0..100 {
            assert!(apply_jitter(base, 0.5) >= base);
        }
    }

    #[test]
    fn jitter_bounded_by_fraction() {
        let base = Duration::from_secs(60);
        for _ in 0..100 {
            assert!(apply_jitter(base, 0.1).as_secs_f64() <= 66.0 + 1e-9);
        }
    }
}
