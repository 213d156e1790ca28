//! Tick-Timer-Konfiguration nach dem Compare-Match-Modell
//!
//! Ein Hardware-Zähler läuft mit dem vorgeteilten Referenztakt und löst
//! beim Erreichen des Compare-Wertes einen Tick aus; der Zähler wird dabei
//! zurückgesetzt (clear-on-compare-match).

/// Compare-Match-Konfiguration eines Tick-Timers
///
/// Alle Werte werden einmalig aus Taktrate und Prescaler berechnet.
/// Ungültige Kombinationen scheitern bei der const-Auswertung in der
/// Konfiguration, nie zur Laufzeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    clock_rate_hz: u32,
    prescaler_bits: u8,
}

impl TickTimer {
    /// Erstellt eine Timer-Konfiguration
    ///
    /// # Panics
    /// Wenn `clock_rate_hz >> prescaler_bits` nicht in das 16-Bit
    /// Compare-Register passt oder 0 ergibt. In const-Kontexten bricht
    /// das den Build ab (Design-Zeit-Invariante, kein Laufzeit-Check).
    pub const fn new(clock_rate_hz: u32, prescaler_bits: u8) -> Self {
        let target = clock_rate_hz >> prescaler_bits;
        assert!(target > 0, "Compare-Wert darf nicht 0 sein");
        assert!(
            target <= u16::MAX as u32,
            "Compare-Wert passt nicht ins 16-Bit Compare-Register"
        );
        Self {
            clock_rate_hz,
            prescaler_bits,
        }
    }

    /// Compare-Wert: Referenztakt geteilt durch den Prescaler
    ///
    /// Beispiel: 15.998.976 Hz >> 10 (Prescaler 1024) = 15624, exakt
    /// und ohne Rundung.
    pub const fn compare_target(&self) -> u16 {
        (self.clock_rate_hz >> self.prescaler_bits) as u16
    }

    /// Prescaler als Teilerfaktor, z.B. 1024 bei 10 Bits
    pub const fn prescaler(&self) -> u32 {
        1 << self.prescaler_bits
    }

    /// Tick-Periode in Mikrosekunden
    ///
    /// Periode = Compare-Wert * Prescaler / Taktrate. Mit den
    /// Beispielwerten exakt 1.000.000 µs, also ein Tick pro Sekunde.
    pub const fn tick_period_us(&self) -> u64 {
        let counted = self.compare_target() as u64 * self.prescaler() as u64;
        counted * 1_000_000 / self.clock_rate_hz as u64
    }
}
