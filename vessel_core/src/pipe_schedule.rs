//! Standard Pipe Sizes (NPS, Schedule STD)
//!
//! Nominal pipe size designations with outer diameter and standard wall
//! thickness, used for the UG-45 nozzle-neck thickness check. Covers NPS
//! 1/8 through NPS 12.
//!
//! ## Matching
//!
//! The UG-45 check matches a nozzle to the smallest standard size whose
//! outer diameter is at least the nozzle outer diameter. A nozzle larger
//! than NPS 12 is treated as NPS 12 or greater, taking the NPS 12 wall.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One row of the standard pipe schedule.
///
/// Serialize-only: the schedule is process-wide constant data, never
/// read back in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeSize {
    /// NPS designation (e.g., "4", "1\u{00bc}")
    pub nps: &'static str,
    /// Nominal diameter DN (mm)
    pub dn_mm: u32,
    /// Outer diameter (mm)
    pub od_mm: f64,
    /// Standard wall thickness (mm)
    pub wall_mm: f64,
}

/// Standard-weight pipe schedule, NPS 1/8 through 12
const SCHEDULE_STD: [PipeSize; 18] = [
    PipeSize { nps: "1/8", dn_mm: 6, od_mm: 10.29, wall_mm: 1.51 },
    PipeSize { nps: "1/4", dn_mm: 8, od_mm: 13.72, wall_mm: 1.96 },
    PipeSize { nps: "3/8", dn_mm: 10, od_mm: 17.12, wall_mm: 2.02 },
    PipeSize { nps: "1/2", dn_mm: 15, od_mm: 21.34, wall_mm: 2.42 },
    PipeSize { nps: "3/4", dn_mm: 20, od_mm: 26.67, wall_mm: 2.51 },
    PipeSize { nps: "1", dn_mm: 25, od_mm: 33.40, wall_mm: 2.96 },
    PipeSize { nps: "1\u{00bc}", dn_mm: 32, od_mm: 42.16, wall_mm: 3.12 },
    PipeSize { nps: "1\u{00bd}", dn_mm: 40, od_mm: 48.26, wall_mm: 3.22 },
    PipeSize { nps: "2", dn_mm: 50, od_mm: 60.33, wall_mm: 3.42 },
    PipeSize { nps: "2\u{00bd}", dn_mm: 65, od_mm: 73.03, wall_mm: 4.52 },
    PipeSize { nps: "3", dn_mm: 80, od_mm: 88.90, wall_mm: 4.80 },
    PipeSize { nps: "3\u{00bd}", dn_mm: 90, od_mm: 101.60, wall_mm: 5.02 },
    PipeSize { nps: "4", dn_mm: 100, od_mm: 114.30, wall_mm: 5.27 },
    PipeSize { nps: "5", dn_mm: 125, od_mm: 141.30, wall_mm: 5.73 },
    PipeSize { nps: "6", dn_mm: 150, od_mm: 168.28, wall_mm: 6.22 },
    PipeSize { nps: "8", dn_mm: 200, od_mm: 219.08, wall_mm: 7.16 },
    PipeSize { nps: "10", dn_mm: 250, od_mm: 273.05, wall_mm: 8.11 },
    PipeSize { nps: "12", dn_mm: 300, od_mm: 323.85, wall_mm: 8.34 },
];

/// Schedule sorted ascending by outer diameter.
///
/// The literal table above is already in OD order, but the matcher's
/// linear scan depends on it, so the invariant is enforced here once
/// rather than assumed.
static SCHEDULE_BY_OD: Lazy<Vec<PipeSize>> = Lazy::new(|| {
    let mut table = SCHEDULE_STD.to_vec();
    table.sort_by(|a, b| a.od_mm.total_cmp(&b.od_mm));
    table
});

/// Result of matching a nozzle outer diameter against the schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeMatch {
    /// The matched schedule row
    pub size: PipeSize,
    /// True when the target OD exceeded every entry and the largest
    /// size was used as a floor
    pub exceeds_table: bool,
}

impl SizeMatch {
    /// Display label, e.g. "NPS 4", or "NPS 12+" for the fallback
    pub fn label(&self) -> String {
        if self.exceeds_table {
            format!("NPS {}+", self.size.nps)
        } else {
            format!("NPS {}", self.size.nps)
        }
    }
}

/// Find the smallest standard size whose OD is at least `nozzle_od_mm`.
///
/// Falls back to the largest table entry (never fails) when the nozzle
/// is bigger than anything in the schedule.
pub fn match_standard_size(nozzle_od_mm: f64) -> SizeMatch {
    for size in SCHEDULE_BY_OD.iter() {
        if size.od_mm >= nozzle_od_mm {
            return SizeMatch {
                size: *size,
                exceeds_table: false,
            };
        }
    }
    // Larger than NPS 12 - take the largest entry as a floor
    SizeMatch {
        size: *SCHEDULE_BY_OD
            .last()
            .expect("pipe schedule table is non-empty"),
        exceeds_table: true,
    }
}

/// The full schedule in ascending-OD order (for UI listings)
pub fn schedule() -> &'static [PipeSize] {
    &SCHEDULE_BY_OD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_sorted_by_od() {
        let table = schedule();
        assert_eq!(table.len(), 18);
        for pair in table.windows(2) {
            assert!(pair[0].od_mm < pair[1].od_mm);
        }
    }

    #[test]
    fn test_match_picks_first_od_at_least_target() {
        // 100.0 mm: NPS 3-1/2 (OD 101.60) is the first row at or above
        // the target, not NPS 4 (OD 114.30)
        let matched = match_standard_size(100.0);
        assert_eq!(matched.size.od_mm, 101.60);
        assert!(!matched.exceeds_table);

        // 114.3 mm lands exactly on NPS 4
        let matched = match_standard_size(114.3);
        assert_eq!(matched.size.nps, "4");
        assert!((matched.size.wall_mm - 5.27).abs() < 1e-9);
        assert_eq!(matched.label(), "NPS 4");
    }

    #[test]
    fn test_match_smallest_size() {
        let matched = match_standard_size(5.0);
        assert_eq!(matched.size.nps, "1/8");
    }

    #[test]
    fn test_oversize_falls_back_to_largest() {
        let matched = match_standard_size(500.0);
        assert!(matched.exceeds_table);
        assert_eq!(matched.size.nps, "12");
        assert!((matched.size.wall_mm - 8.34).abs() < 1e-9);
        assert_eq!(matched.label(), "NPS 12+");
    }
}
