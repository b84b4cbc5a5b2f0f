use crate::core::{TimerHandle, TimerQueue};
use std::time::{Duration, Instant};

/// Phase des Touch-Magnet-Automaten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TouchMagnetPhase {
    /// Kein Touch aktiv
    #[default]
    Idle,
    /// Timer läuft; jede Touch-Bewegung startet ihn neu
    Arming(TimerHandle),
    /// Magnet bleibt bis zum Touch-Ende aktiv
    Active,
}

/// Aktiviert den Magneten, wenn ein Touch-Drag eine Weile stillsteht.
#[derive(Debug, Clone, Default)]
pub struct TouchMagnet {
    phase: TouchMagnetPhase,
}

impl TouchMagnet {
    /// Aktuelle Phase.
    pub fn phase(&self) -> TouchMagnetPhase {
        self.phase
    }

    /// Gibt `true` zurück, wenn der Magnet aktiv ist.
    pub fn is_active(&self) -> bool {
        self.phase == TouchMagnetPhase::Active
    }

    /// Startet den Timer (neu). Im Zustand `Active` wirkungslos.
    pub fn arm(&mut self, timers: &mut TimerQueue, now: Instant, delay: Duration) {
        match self.phase {
            TouchMagnetPhase::Active => {}
            TouchMagnetPhase::Arming(handle) => {
                timers.cancel(handle);
                self.phase = TouchMagnetPhase::Arming(timers.schedule(now, delay));
            }
            TouchMagnetPhase::Idle => {
                self.phase = TouchMagnetPhase::Arming(timers.schedule(now, delay));
            }
        }
    }

    /// Verarbeitet einen gefeuerten Timer. Gibt `true` zurück, wenn der Magnet aktiv wurde.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.phase == TouchMagnetPhase::Arming(handle) {
            self.phase = TouchMagnetPhase::Active;
            true
        } else {
            false
        }
    }

    /// Bricht einen laufenden Timer ab und kehrt in den Ruhezustand zurück.
    pub fn reset(&mut self, timers: &mut TimerQueue) {
        if let TouchMagnetPhase::Arming(handle) = self.phase {
            timers.cancel(handle);
        }
        self.phase = TouchMagnetPhase::Idle;
    }
}
