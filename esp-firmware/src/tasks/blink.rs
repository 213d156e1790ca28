// Blink Task - toggelt die LED einmal pro Timer-Tick
use defmt::info;
use embassy_time::{Duration, Ticker};
use esp_hal::gpio::{Level, Output, OutputConfig};

use crate::config::PATTERN_TICK;

/// Timer-Tick-Variante des LED-Blinkers
///
/// Gegenstück zum Polling-Blinker (src/bin/blink.rs): statt Busy-Wait im
/// Hauptprogramm toggelt der Tick-Handler die LED. Kein Zustand außer
/// dem aktuellen Pegel des Pins.
#[embassy_executor::task]
pub async fn blink_tick_task(led_gpio: esp_hal::peripherals::GPIO8<'static>) {
    let mut led = Output::new(led_gpio, Level::Low, OutputConfig::default());

    let mut ticker = Ticker::every(Duration::from_micros(PATTERN_TICK.tick_period_us()));

    loop {
        ticker.next().await;
        led.toggle();
        info!("Blink!");
    }
}
