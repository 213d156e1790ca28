// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
#![no_main]

use defmt::info;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::main;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use esp_schieberegister::config::{BLINK_INTERVAL_MS, BLINK_LED_GPIO};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Polling-Blinker: Busy-Wait im Hauptprogramm
///
/// Einfachster Fall: LED toggeln, warten, wiederholen. Das Warten ist ein
/// blockierendes Busy-Wait - bewusst die simple Variante, als Gegenstück
/// zur Timer-Tick-Variante (blink-timer).
#[main]
fn main() -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let mut led = Output::new(peripherals.GPIO8, Level::Low, OutputConfig::default());
    let delay = Delay::new();

    info!("Polling-Blinker startet: LED an GPIO{}", BLINK_LED_GPIO);

    loop {
        led.toggle();
        delay.delay_millis(BLINK_INTERVAL_MS);
    }
}
