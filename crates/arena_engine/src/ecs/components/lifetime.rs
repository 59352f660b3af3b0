//! Lifetime Component
//!
//! Tracks how long a transient object (a bullet, an effect) may exist,
//! measured in simulated seconds.

/// Lifetime of an object that despawns after a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    /// Simulated time at which the object was spawned
    pub spawned_at: f32,
    /// Seconds the object may live
    pub duration: f32,
}

impl Lifetime {
    /// Lifetime that expires `duration` seconds after `spawned_at`
    pub const fn new(spawned_at: f32, duration: f32) -> Self {
        Self {
            spawned_at,
            duration,
        }
    }

    /// Simulated time at which the object expires
    pub fn expires_at(&self) -> f32 {
        self.spawned_at + self.duration
    }

    /// Whether the object should be removed at `now`
    pub fn is_expired(&self, now: f32) -> bool {
        now >= self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_not_expired() {
        let lifetime = Lifetime::new(1.0, 3.0);
        assert!(!lifetime.is_expired(3.9));
    }

    #[test]
    fn test_lifetime_expires_at_deadline() {
        let lifetime = Lifetime::new(1.0, 3.0);
        assert!(lifetime.is_expired(4.0));
        assert!(lifetime.is_expired(4.5));
    }
}
