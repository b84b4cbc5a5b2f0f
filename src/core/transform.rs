//! Umrechnung zwischen Bildschirm-Pixeln und Welt-Koordinaten (UOL).
//!
//! Der Kern kennt kein Canvas- oder DPI-Modell. Die View-Schicht liefert eine
//! Implementierung von [`CoordinateTransform`]; [`ViewTransform`] ist die
//! Standard-Kamera mit Pan und Zoom.

use super::Vector;

/// Invertierbare Abbildung Pixel ↔ Welt, stabil für die Dauer einer Geste.
pub trait CoordinateTransform {
    /// Pixel → Welt. `None`, wenn der Punkt nicht auflösbar ist.
    fn to_uol(&self, pixel: Vector) -> Option<Vector>;
    /// Welt → Pixel.
    fn to_px(&self, world: Vector) -> Vector;
}

/// 2D-Kamera mit Pan und Zoom (Y-Achse nach oben).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    /// Welt-Position im Viewport-Mittelpunkt
    pub center: Vector,
    /// Pixel pro Welt-Einheit
    pub pixels_per_unit: f64,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vector,
}

impl ViewTransform {
    /// Minimaler Zoom-Faktor (Pixel pro Einheit).
    pub const ZOOM_MIN: f64 = 0.01;
    /// Maximaler Zoom-Faktor (Pixel pro Einheit).
    pub const ZOOM_MAX: f64 = 10_000.0;

    /// Erstellt eine Kamera, die den Ursprung zentriert.
    pub fn new(viewport_size: Vector, pixels_per_unit: f64) -> Self {
        Self {
            center: Vector::ZERO,
            pixels_per_unit: pixels_per_unit.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
            viewport_size,
        }
    }

    /// Verschiebt die Kamera (Welt-Einheiten).
    pub fn pan(&mut self, delta: Vector) {
        self.center += delta;
    }

    /// Ändert den Zoom um einen Faktor.
    pub fn zoom_by(&mut self, factor: f64) {
        self.pixels_per_unit =
            (self.pixels_per_unit * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Welt-Einheiten pro Pixel.
    pub fn world_per_pixel(&self) -> f64 {
        1.0 / self.pixels_per_unit
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Vector::new(1280.0, 720.0), 10.0)
    }
}

impl CoordinateTransform for ViewTransform {
    fn to_uol(&self, pixel: Vector) -> Option<Vector> {
        if !pixel.is_finite() || self.pixels_per_unit <= 0.0 {
            return None;
        }
        let offset = pixel - self.viewport_size * 0.5;
        let world = self.center + Vector::new(offset.x, -offset.y) / self.pixels_per_unit;
        world.is_finite().then_some(world)
    }

    fn to_px(&self, world: Vector) -> Vector {
        let offset = (world - self.center) * self.pixels_per_unit;
        self.viewport_size * 0.5 + Vector::new(offset.x, -offset.y)
    }
}
