//! Core Types für die Schieberegister-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Die drei Steuerleitungen zum 74HC595
///
/// Welche Leitung an welchem GPIO hängt, legt `config.rs` in esp-firmware
/// zur Build-Zeit fest - zur Laufzeit ist die Zuordnung nicht abfragbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Serielle Datenleitung (DS, Pin 14 am 74HC595)
    Data,
    /// Schiebetakt (SH_CP, Pin 11) - steigende Flanke übernimmt ein Bit
    /// ins interne Schieberegister
    ShiftClock,
    /// Speichertakt/Latch (ST_CP, Pin 12) - übernimmt die 8 geschobenen
    /// Bits auf die Parallel-Ausgänge Q0..Q7
    StoreClock,
}

/// Logischer Pegel einer Ausgangsleitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Pegel aus einem Bit: gesetzt → High, gelöscht → Low
    pub fn from_bit(bit: bool) -> Self {
        if bit { Level::High } else { Level::Low }
    }
}

/// Anzahl der Einträge in der Muster-Tabelle
pub const PATTERN_LEN: usize = 8;

/// LED-Muster: 8 Bytes, ein Bit pro Parallel-Ausgang
///
/// Das MSB wird zuerst geschoben und landet damit auf dem äußersten
/// Ausgang. Die Tabelle ist nach der Definition unveränderlich.
pub const LED_PATTERN: [u8; PATTERN_LEN] = [
    0b1010_1010,
    0b0101_0101,
    0b0011_0011,
    0b1100_1100,
    0b1111_0000,
    0b0000_1111,
    0b1111_1111,
    0b0000_0000,
];

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Line {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Line::Data => defmt::write!(fmt, "Data"),
            Line::ShiftClock => defmt::write!(fmt, "ShiftClock"),
            Line::StoreClock => defmt::write!(fmt, "StoreClock"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::Low => defmt::write!(fmt, "Low"),
            Level::High => defmt::write!(fmt, "High"),
        }
    }
}
