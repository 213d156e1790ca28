// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_schieberegister::config::{
    HC595_DATA_GPIO, HC595_SHIFT_CLOCK_GPIO, HC595_STORE_CLOCK_GPIO, PATTERN_TICK,
};
use esp_schieberegister::tasks::shift_pattern_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt den
/// Shift-Pattern-Task. Danach schläft main() - alle Arbeit läuft im
/// Tick-Handler.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    // Entspricht dem Scharfschalten der Tick-Quelle samt Interrupts
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!(
        "Schieberegister-Muster startet: DS=GPIO{}, SH_CP=GPIO{}, ST_CP=GPIO{}",
        HC595_DATA_GPIO, HC595_SHIFT_CLOCK_GPIO, HC595_STORE_CLOCK_GPIO
    );
    info!(
        "Tick-Periode: {} µs (Compare-Wert {})",
        PATTERN_TICK.tick_period_us(),
        PATTERN_TICK.compare_target()
    );

    // Spawn Shift-Pattern Task mit den drei 74HC595-Leitungen
    spawner
        .spawn(shift_pattern_task(
            peripherals.GPIO4,
            peripherals.GPIO5,
            peripherals.GPIO6,
        ))
        .unwrap();

    // Hauptschleife: nichts zu tun, alle Arbeit passiert im Tick-Handler
    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
