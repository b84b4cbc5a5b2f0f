use std::time::{Duration, Instant};

/// Wofür das Mausrad benutzt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelPurpose {
    /// Heading eines Endpunkts ändern
    Heading,
    /// Kamera zoomen/verschieben
    Camera,
}

/// Teilt das Mausrad jeweils einem Zweck zu.
///
/// Ein Zweck behält das Rad, solange er es innerhalb der Haltezeit erneut
/// benutzt; ein anderer Zweck wird in dieser Zeit abgewiesen.
#[derive(Debug, Clone, Default)]
pub struct WheelArbiter {
    last: Option<(WheelPurpose, Instant)>,
}

impl WheelArbiter {
    /// Prüft ohne Zustandsänderung, ob `purpose` das Rad bekäme.
    pub fn would_grant(&self, purpose: WheelPurpose, now: Instant, hold: Duration) -> bool {
        match self.last {
            Some((owner, at)) if owner != purpose => now.saturating_duration_since(at) >= hold,
            _ => true,
        }
    }

    /// Beansprucht das Rad für `purpose`. Gibt `false` zurück, wenn es belegt ist.
    pub fn claim(&mut self, purpose: WheelPurpose, now: Instant, hold: Duration) -> bool {
        if !self.would_grant(purpose, now, hold) {
            return false;
        }
        self.last = Some((purpose, now));
        true
    }

    /// Aktueller bzw. letzter Besitzer.
    #[cfg(test)]
    pub(crate) fn owner(&self) -> Option<WheelPurpose> {
        self.last.map(|(purpose, _)| purpose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_millis(300);

    #[test]
    fn other_purpose_is_rejected_within_hold_time() {
        let t0 = Instant::now();
        let mut wheel = WheelArbiter::default();
        assert!(wheel.claim(WheelPurpose::Camera, t0, HOLD));
        assert!(!wheel.claim(WheelPurpose::Heading, t0 + Duration::from_millis(299), HOLD));
        assert!(wheel.claim(WheelPurpose::Heading, t0 + Duration::from_millis(300), HOLD));
        assert_eq!(wheel.owner(), Some(WheelPurpose::Heading));
    }

    #[test]
    fn same_purpose_keeps_the_wheel() {
        let t0 = Instant::now();
        let mut wheel = WheelArbiter::default();
        assert!(wheel.claim(WheelPurpose::Heading, t0, HOLD));
        assert!(wheel.claim(WheelPurpose::Heading, t0 + Duration::from_millis(10), HOLD));
        assert!(!wheel.would_grant(WheelPurpose::Camera, t0 + Duration::from_millis(20), HOLD));
    }
}
