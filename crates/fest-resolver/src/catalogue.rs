//! Built-in holiday catalogues.

use crate::rule::HolidayRule;
use crate::store::MemoryStore;

/// The Colombian statutory catalogue (Ley 51 de 1983, "Ley Emiliani").
///
/// Eighteen holidays covering all four rule kinds: fixed civic dates,
/// Emiliani dates moved to the next Monday, Holy Week days relative to
/// Easter, and Easter-relative feasts moved to Monday.
pub fn colombia() -> Vec<HolidayRule> {
    vec![
        HolidayRule::fixed("Año Nuevo", 1, 1),
        HolidayRule::fixed_moved_to_monday("Santos Reyes", 1, 6),
        HolidayRule::fixed_moved_to_monday("San José", 3, 19),
        HolidayRule::easter_relative("Jueves Santo", -3),
        HolidayRule::easter_relative("Viernes Santo", -2),
        HolidayRule::fixed("Día del Trabajo", 5, 1),
        HolidayRule::easter_relative_moved_to_monday("Ascensión del Señor", 40),
        HolidayRule::easter_relative_moved_to_monday("Corpus Christi", 61),
        HolidayRule::easter_relative_moved_to_monday("Sagrado Corazón de Jesús", 68),
        HolidayRule::fixed_moved_to_monday("San Pedro y San Pablo", 6, 29),
        HolidayRule::fixed("Independencia de Colombia", 7, 20),
        HolidayRule::fixed("Batalla de Boyacá", 8, 7),
        HolidayRule::fixed_moved_to_monday("Asunción de la Virgen", 8, 15),
        HolidayRule::fixed_moved_to_monday("Día de la Raza", 10, 12),
        HolidayRule::fixed_moved_to_monday("Todos los Santos", 11, 1),
        HolidayRule::fixed_moved_to_monday("Independencia de Cartagena", 11, 11),
        HolidayRule::fixed("Inmaculada Concepción", 12, 8),
        HolidayRule::fixed("Navidad", 12, 25),
    ]
}

/// A [`MemoryStore`] seeded with the Colombian catalogue.
pub fn colombia_store() -> MemoryStore {
    MemoryStore::with_rules(colombia())
}
