// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig; die drei Beispiel-Binaries
// spawnen jeweils höchstens einen davon.

pub mod blink;
pub mod shift_pattern;

// Re-export Tasks für einfachen Import
pub use blink::blink_tick_task;
pub use shift_pattern::shift_pattern_task;
