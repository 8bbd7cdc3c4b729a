// Ballot ceilings
pub const JURY_CEILING: u32 = 70;
pub const AUDIENCE_CEILING: u32 = 120;

// Floor score every group receives, and the spread available above it
pub const JURY_FLOOR: f64 = 14.0;
pub const JURY_SPREAD: f64 = 56.0;
pub const AUDIENCE_FLOOR: f64 = 6.0;
pub const AUDIENCE_SPREAD: f64 = 24.0;

pub const MIN_GROUPS: usize = 2;

pub const DEFAULT_LABEL_PREFIX: &str = "Group";
pub const DEFAULT_PRECISION: u32 = 2;
// Scores reach 100, so more digits than this exceed f64's exact integer range
pub const MAX_PRECISION: u32 = 12;

/// Height curve: (segment start, segment end, slope weight).
/// Breakpoints and weights are presentation constants; keep them literal.
pub const HEIGHT_SEGMENTS: [(f64, f64, f64); 4] = [
    (20.0, 60.0, 1.0),
    (60.0, 80.0, 0.6),
    (80.0, 90.0, 0.4),
    (90.0, 100.0, 0.2),
];

pub const HEIGHT_BASE_PERCENT: f64 = 20.0;
pub const HEIGHT_FULL_PERCENT: f64 = 100.0;
