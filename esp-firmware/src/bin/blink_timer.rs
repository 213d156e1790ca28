// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use esp_schieberegister::config::{BLINK_LED_GPIO, PATTERN_TICK};
use esp_schieberegister::tasks::blink_tick_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Timer-Blinker: LED-Toggle im Tick-Handler statt Busy-Wait
///
/// Gleiche Tick-Infrastruktur wie das Schieberegister-Beispiel, nur mit
/// einem einzelnen Pin-Toggle als Handler.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!(
        "Timer-Blinker startet: LED an GPIO{}, Tick-Periode {} µs",
        BLINK_LED_GPIO,
        PATTERN_TICK.tick_period_us()
    );

    spawner.spawn(blink_tick_task(peripherals.GPIO8)).unwrap();

    // Hauptschleife: leer, die LED toggelt im Tick-Handler
    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
