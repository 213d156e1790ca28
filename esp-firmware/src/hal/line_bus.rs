// GPIO-Implementierung des LineBus-Traits
//
// Bindet die drei logischen Leitungen (Data, ShiftClock, StoreClock)
// an konkrete esp-hal Output-Pins.

use esp_core::{Level, Line, LineBus};
use esp_hal::delay::Delay;
use esp_hal::gpio::Output;

/// Real Hardware Line Bus
///
/// Hält die drei als Ausgang konfigurierten GPIOs und einen blocking
/// Delay für die Latch-Haltezeit.
pub struct GpioLineBus<'a> {
    data: Output<'a>,
    shift_clock: Output<'a>,
    store_clock: Output<'a>,
    delay: Delay,
}

impl<'a> GpioLineBus<'a> {
    /// Erstellt einen neuen GpioLineBus
    ///
    /// Output::new() hat die Richtung der Pins bereits konfiguriert -
    /// ein Direction-Register-Write kann nicht fehlschlagen, daher gibt
    /// es hier keinen Fehlerpfad.
    ///
    /// # Parameter
    /// - `data`: GPIO für die Datenleitung (DS)
    /// - `shift_clock`: GPIO für den Schiebetakt (SH_CP)
    /// - `store_clock`: GPIO für den Speichertakt (ST_CP)
    pub fn new(data: Output<'a>, shift_clock: Output<'a>, store_clock: Output<'a>) -> Self {
        Self {
            data,
            shift_clock,
            store_clock,
            delay: Delay::new(),
        }
    }

    fn pin(&mut self, line: Line) -> &mut Output<'a> {
        match line {
            Line::Data => &mut self.data,
            Line::ShiftClock => &mut self.shift_clock,
            Line::StoreClock => &mut self.store_clock,
        }
    }
}

impl LineBus for GpioLineBus<'_> {
    fn set_line(&mut self, line: Line, level: Level) {
        let hw_level = match level {
            Level::Low => esp_hal::gpio::Level::Low,
            Level::High => esp_hal::gpio::Level::High,
        };
        self.pin(line).set_level(hw_level);
    }

    fn pulse_line(&mut self, line: Line) {
        let pin = self.pin(line);
        pin.set_high();
        pin.set_low();
    }

    fn hold_us(&mut self, micros: u32) {
        self.delay.delay_micros(micros);
    }
}
