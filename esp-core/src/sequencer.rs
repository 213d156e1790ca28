//! Pattern Sequencer - Zustandsmaschine für das LED-Muster
//!
//! Pro Timer-Tick wird ein Eintrag der Muster-Tabelle ins Schieberegister
//! geschrieben und der Index (mod 8) weitergezählt.

use crate::driver::Hc595;
use crate::traits::LineBus;
use crate::types::PATTERN_LEN;

/// Sequencer über eine feste 8-Eintrag-Muster-Tabelle
///
/// 8 Zustände (einer pro Tabelleneintrag), Übergang bei jedem Tick,
/// kein Endzustand - läuft bis zum Ausschalten. Startzustand: Index 0.
///
/// Der Index ist der einzige veränderliche Zustand. Er gehört dem
/// Sequencer und wird ausschließlich im Tick-Handler geschrieben.
pub struct PatternSequencer {
    table: [u8; PATTERN_LEN],
    index: usize,
}

impl PatternSequencer {
    /// Erstellt einen Sequencer, beginnend bei Index 0
    pub fn new(table: [u8; PATTERN_LEN]) -> Self {
        Self { table, index: 0 }
    }

    /// Liefert den aktuellen Tabelleneintrag und zählt den Index weiter
    ///
    /// Pure Function über dem eigenen Zustand - testbar ohne Hardware.
    pub fn advance(&mut self) -> u8 {
        let value = self.table[self.index];
        self.index += 1;
        if self.index >= PATTERN_LEN {
            self.index = 0;
        }
        value
    }

    /// Ein Timer-Tick: aktuellen Eintrag schreiben, Index weiterzählen
    ///
    /// Liefert das geschriebene Byte zurück, z.B. fürs Logging.
    pub fn tick<B: LineBus>(&mut self, driver: &mut Hc595<B>) -> u8 {
        let value = self.advance();
        driver.write_byte(value);
        value
    }

    /// Aktueller Index, immer in [0, 8)
    pub fn index(&self) -> usize {
        self.index
    }
}
