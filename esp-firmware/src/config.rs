// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::TickTimer;

// ============================================================================
// GPIO-Zuordnung 74HC595
// ============================================================================
//
// Die Zuordnung ist eine Build-Zeit-Entscheidung; die eigentliche
// Pin-Übergabe passiert in src/bin/main.rs beim Spawnen des Tasks.

/// GPIO-Pin für die serielle Datenleitung (DS, Pin 14 am 74HC595)
pub const HC595_DATA_GPIO: u8 = 4;

/// GPIO-Pin für den Schiebetakt (SH_CP, Pin 11)
pub const HC595_SHIFT_CLOCK_GPIO: u8 = 5;

/// GPIO-Pin für den Speichertakt/Latch (ST_CP, Pin 12)
pub const HC595_STORE_CLOCK_GPIO: u8 = 6;

// ============================================================================
// Blink-Konfiguration
// ============================================================================

/// GPIO-Pin der Blink-LED
pub const BLINK_LED_GPIO: u8 = 8;

/// Blink-Intervall des Polling-Blinkers in Millisekunden
pub const BLINK_INTERVAL_MS: u32 = 150;

// ============================================================================
// Tick-Timer-Konfiguration
// ============================================================================

/// Referenztakt der Muster-Zeitbasis in Hz
///
/// 15.998.976 = 15624 * 1024: mit Prescaler 1024 ergibt sich ein glatter
/// Compare-Wert von 15624 und damit exakt ein Tick pro Sekunde.
pub const PATTERN_CLOCK_HZ: u32 = 15_998_976;

/// Prescaler in Bits (10 Bits = Teiler 1024)
pub const PATTERN_PRESCALER_BITS: u8 = 10;

/// Tick-Timer für Schieberegister-Muster und Timer-Blinker
///
/// Wird zur Compile-Zeit ausgewertet; ein Compare-Wert außerhalb des
/// 16-Bit-Registers bricht den Build ab statt zur Laufzeit zu scheitern.
pub const PATTERN_TICK: TickTimer = TickTimer::new(PATTERN_CLOCK_HZ, PATTERN_PRESCALER_BITS);
