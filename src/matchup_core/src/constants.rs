/// Logistic base of the Elo expected-score curve
pub const ELO_BASE: f64 = 10.0;

/// Rating difference that multiplies the odds by `ELO_BASE`
pub const ELO_SCALE: f64 = 400.0;

/// Number of team slots shown by the match-up board
pub const DEFAULT_SLOTS: usize = 4;

/// Minimum matches a competitor must have played to be selectable
pub const DEFAULT_MIN_MATCHES: u32 = 1;

/// A competitor must have competed within this many days to be selectable
pub const DEFAULT_LAST_MATCH_WITHIN_DAYS: i64 = 365;

/// Decimal places used when rendering a probability as a percentage
pub const DISPLAY_PRECISION: usize = 1;
