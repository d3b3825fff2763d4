//! Idle-session tracking
//!
//! [`IdleMonitor`] is a pure state machine over an injected millisecond
//! clock. The browser glue (event listeners, the 1 Hz interval) lives in
//! the [`SessionTimeout`](crate::components::SessionTimeout) component;
//! everything time-dependent is testable here without a DOM.

use crate::config::AuthConfig;

/// Timing knobs for the idle monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleConfig {
    /// Total idle time before the session expires, in milliseconds.
    pub idle_timeout_ms: f64,
    /// How long before expiry the warning phase begins, in milliseconds.
    pub warning_lead_ms: f64,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: AuthConfig::IDLE_TIMEOUT_MS,
            warning_lead_ms: AuthConfig::WARNING_LEAD_MS,
        }
    }
}

/// Where an idle session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlePhase {
    /// Recent activity; nothing to show.
    Active,
    /// Expiry is imminent; `remaining_seconds` counts down to it.
    Warning { remaining_seconds: u32 },
    /// The idle timeout has elapsed.
    Expired,
}

/// Tracks the time since the last user activity.
#[derive(Debug)]
pub struct IdleMonitor {
    config: IdleConfig,
    last_activity_ms: f64,
    expired: bool,
    fired: bool,
}

impl IdleMonitor {
    pub fn new(config: IdleConfig, now_ms: f64) -> Self {
        Self {
            config,
            last_activity_ms: now_ms,
            expired: false,
            fired: false,
        }
    }

    /// Record user activity. Ignored once the session has expired:
    /// expiry is terminal until the monitor is replaced.
    pub fn record_activity(&mut self, now_ms: f64) {
        if !self.expired {
            self.last_activity_ms = now_ms;
        }
    }

    /// The phase at `now_ms`, without mutating the monitor.
    pub fn phase(&self, now_ms: f64) -> IdlePhase {
        if self.expired {
            return IdlePhase::Expired;
        }

        let idle_ms = now_ms - self.last_activity_ms;
        if idle_ms >= self.config.idle_timeout_ms {
            IdlePhase::Expired
        } else if idle_ms >= self.config.idle_timeout_ms - self.config.warning_lead_ms {
            let remaining_seconds = ((self.config.idle_timeout_ms - idle_ms) / 1000.0).ceil();
            IdlePhase::Warning {
                remaining_seconds: remaining_seconds as u32,
            }
        } else {
            IdlePhase::Active
        }
    }

    /// Advance the clock: latches `Expired` once crossed.
    pub fn tick(&mut self, now_ms: f64) -> IdlePhase {
        let phase = self.phase(now_ms);
        if phase == IdlePhase::Expired {
            self.expired = true;
        }
        phase
    }

    /// Whether expiry should be acted on now. Returns `true` exactly
    /// once per expiry so the caller does not log out twice.
    pub fn take_expiry(&mut self) -> bool {
        if self.expired && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f64 = 60.0 * 1000.0;

    fn monitor() -> IdleMonitor {
        IdleMonitor::new(IdleConfig::default(), 0.0)
    }

    #[test]
    fn active_until_warning_threshold() {
        let m = monitor();
        assert_eq!(m.phase(0.0), IdlePhase::Active);
        assert_eq!(m.phase(13.0 * MIN), IdlePhase::Active);
        assert_eq!(m.phase(14.0 * MIN - 1.0), IdlePhase::Active);
    }

    #[test]
    fn warning_starts_at_sixty_seconds() {
        let m = monitor();
        assert_eq!(
            m.phase(14.0 * MIN),
            IdlePhase::Warning {
                remaining_seconds: 60
            }
        );
    }

    #[test]
    fn warning_counts_down_each_second() {
        let m = monitor();
        assert_eq!(
            m.phase(14.0 * MIN + 1000.0),
            IdlePhase::Warning {
                remaining_seconds: 59
            }
        );
        assert_eq!(
            m.phase(15.0 * MIN - 1000.0),
            IdlePhase::Warning {
                remaining_seconds: 1
            }
        );
        // Fractional seconds round up so the display never shows 0.
        assert_eq!(
            m.phase(15.0 * MIN - 500.0),
            IdlePhase::Warning {
                remaining_seconds: 1
            }
        );
    }

    #[test]
    fn expires_at_timeout() {
        let mut m = monitor();
        assert_eq!(m.tick(15.0 * MIN), IdlePhase::Expired);
    }

    #[test]
    fn activity_during_warning_returns_to_active() {
        let mut m = monitor();
        assert!(matches!(m.tick(14.0 * MIN + 30_000.0), IdlePhase::Warning { .. }));
        m.record_activity(14.0 * MIN + 31_000.0);
        assert_eq!(m.tick(14.0 * MIN + 32_000.0), IdlePhase::Active);
    }

    #[test]
    fn expiry_is_latched_and_fires_once() {
        let mut m = monitor();
        m.tick(15.0 * MIN);

        // Activity after expiry is ignored.
        m.record_activity(15.0 * MIN + 1.0);
        assert_eq!(m.tick(15.0 * MIN + 2.0), IdlePhase::Expired);

        assert!(m.take_expiry());
        assert!(!m.take_expiry());
    }

    #[test]
    fn expiry_not_taken_before_tick_crosses_threshold() {
        let mut m = monitor();
        m.tick(14.0 * MIN);
        assert!(!m.take_expiry());
    }
}
