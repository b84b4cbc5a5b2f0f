//! Uhr und abbrechbare Timer für die ereignisgesteuerte Verarbeitung.
//!
//! Es gibt keine Hintergrund-Threads: Timer werden mit einer Deadline
//! registriert und beim nächsten Ereignis (oder explizitem Tick) gegen die
//! aktuelle Uhrzeit abgefragt.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Zeitquelle der Editier-Sitzung.
pub trait Clock {
    /// Aktueller Zeitpunkt.
    fn now(&self) -> Instant;
}

/// Wanduhr des Systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manuell vorgestellte Uhr (Tests, Replays).
///
/// Klone teilen sich denselben Zeitstand.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Erstellt eine Uhr, die beim aktuellen Zeitpunkt steht.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Stellt die Uhr um `delta` vor.
    pub fn advance(&self, delta: Duration) {
        self.offset.set(self.offset.get() + delta);
    }

    /// Stellt die Uhr um `ms` Millisekunden vor.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

/// Handle eines registrierten Timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Warteschlange einmaliger Timer.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<(TimerHandle, Instant)>,
    next_id: u64,
}

impl TimerQueue {
    /// Erstellt eine leere Warteschlange.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Timer, der `delay` nach `now` fällig wird.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push((handle, now + delay));
        handle
    }

    /// Bricht einen Timer ab. Gibt `false` zurück, wenn er schon gefeuert hat oder unbekannt ist.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(h, _)| *h != handle);
        self.pending.len() < before
    }

    /// Entnimmt alle bis `now` fälligen Timer in Deadline-Reihenfolge.
    pub fn take_expired(&mut self, now: Instant) -> Vec<TimerHandle> {
        let mut expired: Vec<(TimerHandle, Instant)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.1 <= now {
                expired.push(*entry);
                false
            } else {
                true
            }
        });
        expired.sort_by_key(|(_, deadline)| *deadline);
        expired.into_iter().map(|(h, _)| h).collect()
    }

    /// Gibt `true` zurück, wenn der Timer noch aussteht.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|(h, _)| *h == handle)
    }

    /// Anzahl ausstehender Timer.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Gibt `true` zurück, wenn kein Timer aussteht.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
