/// Crate version of the engine build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version tag attached to every computed result and persisted snapshot.
/// Bump whenever a threshold or curve changes what a stored input produces.
pub const ALGORITHM_VERSION: &str = "opterra-2.1.0";

/// House pressure (psi) at which pressure stress starts accumulating.
pub const PSI_WARNING: f64 = 60.0;
/// House pressure (psi) above which plumbing code requires a working PRV.
pub const PSI_CRITICAL: f64 = 80.0;
/// Pressure still reaching the heater through a PRV above this means the PRV
/// is not regulating.
pub const PSI_ELEVATED: f64 = 75.0;
/// Upper clamp for reported house pressure.
pub const PSI_MAX: f64 = 200.0;

/// Water hardness (grains per gallon) at which scale stress starts.
pub const HARDNESS_WARNING_GPG: f64 = 10.0;
/// Water hardness (gpg) treated as very hard.
pub const HARDNESS_CRITICAL_GPG: f64 = 15.0;
/// Hardness reference used to scale sediment and scale accumulation.
pub const HARDNESS_REFERENCE_GPG: f64 = 10.0;

/// Aging rate above which a unit is presented as wearing faster than its age.
pub const ACCELERATED_AGING_RATE: f64 = 1.2;

/// Months ahead within which two due tasks are offered as one visit.
pub const BUNDLE_WINDOW_MONTHS: i32 = 3;

/// Horizon used when searching for the month a threshold is crossed.
pub const MAX_PROJECTION_MONTHS: u32 = 600;

/// Household size clamp.
pub const MIN_PEOPLE: u32 = 1;
pub const MAX_PEOPLE: u32 = 12;

/// Upper clamp for unit age and service-history fields (years).
pub const MAX_AGE_YEARS: f64 = 60.0;
