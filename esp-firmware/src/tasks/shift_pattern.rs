// Shift-Pattern Task - schreibt pro Timer-Tick ein Muster-Byte ins 74HC595
use defmt::info;
use embassy_time::{Duration, Ticker};
use esp_core::{Hc595, LED_PATTERN, LineBus, PatternSequencer};
use esp_hal::gpio::{Level, Output, OutputConfig};

use crate::config::PATTERN_TICK;
use crate::hal::GpioLineBus;

/// Shift-Pattern Logic - Testbare Steuerlogik ohne Hardware-Abhängigkeit
///
/// Pro Tick der Zeitbasis:
/// - aktuellen Eintrag der Muster-Tabelle ins Schieberegister schreiben
/// - Index (mod 8) weiterzählen
///
/// Der Tick-Handler läuft immer vollständig durch, bevor der nächste Tick
/// verarbeitet wird (der Ticker kann sich nicht selbst unterbrechen).
/// 8 Bit-Writes plus Latch-Puls liegen im Mikrosekunden-Bereich, die
/// Tick-Periode bei einer Sekunde - mehr als genug Luft.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `B: LineBus` ermöglicht:
/// - Real Hardware (GpioLineBus) im Production-Code
/// - Mock Implementation (RecordingLineBus) in Tests
pub async fn shift_pattern_logic<B: LineBus>(bus: B) {
    let mut driver = Hc595::new(bus);
    let mut sequencer = PatternSequencer::new(LED_PATTERN);

    // Tick-Periode aus der Compare-Match-Konfiguration (1 s)
    let mut ticker = Ticker::every(Duration::from_micros(PATTERN_TICK.tick_period_us()));

    // Hauptschleife: ein Tabelleneintrag pro Tick, endlos
    loop {
        ticker.next().await;

        let index = sequencer.index();
        let value = sequencer.tick(&mut driver);
        info!("Tick: Eintrag {} geschrieben ({=u8:b})", index, value);
    }
}

/// Shift-Pattern Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung (GPIOs als
/// Ausgänge) und ruft dann die testbare `shift_pattern_logic()` auf.
///
/// # Parameter
/// - `data_gpio`: GPIO für die Datenleitung (DS)
/// - `shift_clock_gpio`: GPIO für den Schiebetakt (SH_CP)
/// - `store_clock_gpio`: GPIO für den Speichertakt (ST_CP)
#[embassy_executor::task]
pub async fn shift_pattern_task(
    data_gpio: esp_hal::peripherals::GPIO4<'static>,
    shift_clock_gpio: esp_hal::peripherals::GPIO5<'static>,
    store_clock_gpio: esp_hal::peripherals::GPIO6<'static>,
) {
    // Alle drei Leitungen starten auf Low; Output::new() konfiguriert
    // dabei die Richtung
    let bus = GpioLineBus::new(
        Output::new(data_gpio, Level::Low, OutputConfig::default()),
        Output::new(shift_clock_gpio, Level::Low, OutputConfig::default()),
        Output::new(store_clock_gpio, Level::Low, OutputConfig::default()),
    );

    // Steuerlogik aufrufen (testbar!)
    shift_pattern_logic(bus).await;
}
