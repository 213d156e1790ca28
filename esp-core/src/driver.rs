//! Treiber für das 74HC595 Schieberegister
//!
//! Serialisiert ein Byte MSB-first auf die Datenleitung und übernimmt es
//! per Latch-Puls auf die 8 Parallel-Ausgänge.

use crate::traits::LineBus;
use crate::types::{Level, Line};

/// Minimale Haltezeit des Speichertakts in Mikrosekunden
///
/// Das 74HC595-Datenblatt verlangt eine Mindest-Pulsbreite am
/// ST_CP-Eingang. Die Haltezeit ist eine Hardware-Anforderung des
/// Bausteins und nicht konfigurierbar.
pub const MIN_LATCH_PULSE_US: u32 = 1;

/// Treiber für ein 74HC595-kompatibles Schieberegister
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `B: LineBus` ermöglicht:
/// - Real Hardware (GpioLineBus) im Production-Code
/// - Mock Implementation (RecordingLineBus) in Tests
pub struct Hc595<B: LineBus> {
    bus: B,
}

impl<B: LineBus> Hc595<B> {
    /// Erstellt einen neuen Treiber
    ///
    /// Die Leitungen müssen bereits als Ausgänge konfiguriert sein -
    /// das erledigt der Konstruktor der Bus-Implementierung.
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Schreibt ein Byte seriell ins Schieberegister und latcht es
    ///
    /// Ablauf pro Bit, MSB zuerst:
    /// 1. Datenleitung entsprechend dem Bit setzen
    /// 2. Schiebetakt pulsen - die steigende Flanke übernimmt das Bit
    /// 3. Byte um ein Bit nach links schieben
    ///
    /// Nach 8 Bits wird der Speichertakt gepulst; erst damit erscheinen
    /// die Bits auf den Ausgängen Q0..Q7.
    ///
    /// Bit-Reihenfolge und Takt-Abfolge sind das 74HC595-Protokoll:
    /// Datenpegel muss vor der steigenden Schiebetakt-Flanke stehen,
    /// der Schiebetakt vor dem nächsten Bit wieder Low sein.
    pub fn write_byte(&mut self, value: u8) {
        let mut data = value;
        for _ in 0..8 {
            self.bus
                .set_line(Line::Data, Level::from_bit(data & 0x80 != 0));
            self.bus.pulse_line(Line::ShiftClock);
            data <<= 1;
        }
        self.latch();
    }

    // Übernimmt das geschobene Byte auf die Parallel-Ausgänge.
    // Haltezeit vor und nach der fallenden Flanke, siehe MIN_LATCH_PULSE_US.
    fn latch(&mut self) {
        self.bus.set_line(Line::StoreClock, Level::High);
        self.bus.hold_us(MIN_LATCH_PULSE_US);
        self.bus.set_line(Line::StoreClock, Level::Low);
        self.bus.hold_us(MIN_LATCH_PULSE_US);
    }

    /// Zugriff auf den Bus, z.B. für Assertions in Tests
    pub fn bus(&self) -> &B {
        &self.bus
    }
}
