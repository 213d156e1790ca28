//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{Level, Line};

/// Trait für den Zugriff auf die Ausgangsleitungen zum 74HC595
///
/// Abstrahiert das Setzen und Pulsen der drei Steuerleitungen sowie das
/// kurze Busy-Wait für die Latch-Haltezeit.
///
/// # Implementierungen
/// - **Production:** GpioLineBus (esp-hal Output-Pins, in esp-firmware)
/// - **Testing:** RecordingLineBus (in-memory Mock, in esp-tests)
///
/// Die Methoden liefern kein Result: ein GPIO-Pegelwechsel kann auf dem
/// Target nicht fehlschlagen.
pub trait LineBus: Send {
    /// Setzt eine Leitung auf den gegebenen Pegel
    fn set_line(&mut self, line: Line, level: Level);

    /// Pulst eine Leitung: High setzen, sofort wieder Low
    fn pulse_line(&mut self, line: Line);

    /// Busy-Wait für die gegebene Anzahl Mikrosekunden
    fn hold_us(&mut self, micros: u32);
}
