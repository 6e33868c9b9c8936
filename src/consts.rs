/// Offset between Gregorian and Metric year numbers (year 1 began in 1792)
pub const EPOCH_OFFSET: i32 = 1792;

/// Gregorian month on which every Metric year starts (September)
pub const YEAR_START_MONTH: u32 = 9;
/// Gregorian day on which every Metric year starts
pub const YEAR_START_DAY: u32 = 22;

/// Every Metric month has exactly thirty days
pub const DAYS_PER_MONTH: u8 = 30;
/// Number of regular months in a Metric year
pub const MONTHS_PER_YEAR: u8 = 12;
/// Days covered by the twelve regular months
pub const REGULAR_DAYS: u16 = 360;

/// Complementary days in a common year
pub const COMPLEMENTARY_DAYS_COMMON: u8 = 5;
/// Complementary days in a sextile year
pub const COMPLEMENTARY_DAYS_SEXTILE: u8 = 6;

/// Sextile years repeat every 4 years...
pub(crate) const SEXTILE_CYCLE: i32 = 4;
/// ...landing on the third year of each cycle
pub(crate) const SEXTILE_REMAINDER: i32 = 3;

/// Month names, Spanish descriptions and English meanings, Vendémiaire first
pub const MONTHS: [(&str, &str, &str); MONTHS_PER_YEAR as usize] = [
    ("Vendémiaire", "Mes de la vendimia", "Vintage/Wine Harvest"),
    ("Brumaire", "Mes de la niebla", "Fog"),
    ("Frimaire", "Mes del frío", "Frost"),
    ("Nivôse", "Mes de la nieve", "Snow"),
    ("Pluviôse", "Mes de la lluvia", "Rain"),
    ("Ventôse", "Mes del viento", "Wind"),
    ("Germinal", "Mes de la germinación", "Germination"),
    ("Floréal", "Mes de las flores", "Flowering"),
    ("Prairial", "Mes de los prados", "Meadows"),
    ("Messidor", "Mes de la cosecha", "Harvest"),
    ("Thermidor", "Mes del calor", "Heat"),
    ("Fructidor", "Mes de los frutos", "Fruits"),
];

/// Complementary day names; the sixth only exists in sextile years
pub const COMPLEMENTARY_DAY_NAMES: [&str; COMPLEMENTARY_DAYS_SEXTILE as usize] = [
    "Primero de Días Complementarios",
    "Segundo de Días Complementarios",
    "Tercero de Días Complementarios",
    "Cuarto de Días Complementarios",
    "Quinto de Días Complementarios",
    "Jour de la Révolution",
];

/// Name of the period following Fructidor
pub const COMPLEMENTARY_PERIOD_NAME: &str = "Días Complementarios";
/// French description of the period following Fructidor
pub const COMPLEMENTARY_PERIOD_DESCRIPTION: &str = "Jours complémentaires";

/// Label used when a date has no Metric mapping
pub const OUT_OF_RANGE_LABEL: &str = "Fecha fuera del rango válido";

/// Range separator for `START/END` year spans
pub const RANGE_SEPARATOR: char = '/';
/// Length separator for `START+YEARS` year spans
pub const LENGTH_SEPARATOR: char = '+';
