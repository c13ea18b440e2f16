//! Planar site placement for visualization.
//!
//! Sites are laid out on an offset rectangular grid approximating a
//! hexagonal tiling, bounded to the service-area extent. The layout is a
//! visualization aid; the authoritative site count comes from sizing.

use log::debug;
use serde::Serialize;

/// Planar position in kilometers from the zone origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Generate site positions on an offset grid approximating hexagonal tiling.
///
/// Rows are spaced `isd * sqrt(3)/2` apart and columns `isd` apart, with odd
/// rows shifted by half a column. Candidates are scanned in row-major order
/// and accepted while both coordinates stay within `sqrt(zone_area) * 1.2`
/// of the origin, stopping once `site_count` points are accepted.
///
/// The candidate grid is sized from `site_count` alone
/// (`cols = floor(sqrt(n*1.5)) + 1`, `rows = floor(n/cols) + 2`), so when
/// the zone bound rejects many candidates the grid can run out before
/// `site_count` points are accepted. The returned layout then holds fewer
/// points than requested; callers needing the full count must check `len()`.
pub fn layout_sites(site_count: u32, inter_site_distance_km: f64, zone_area_km2: f64) -> Vec<Point> {
    let target = site_count as usize;
    let num_cols = ((target as f64 * 1.5).sqrt() as usize) + 1;
    let num_rows = target / num_cols + 2;

    let dx = inter_site_distance_km;
    let dy = inter_site_distance_km * 3.0_f64.sqrt() / 2.0;
    let bound = zone_area_km2.sqrt() * 1.2;

    let mut sites = Vec::with_capacity(target.min(num_cols * num_rows));
    'rows: for row in 0..num_rows {
        for col in 0..num_cols {
            if sites.len() >= target {
                break 'rows;
            }
            let mut x = col as f64 * dx;
            let y = row as f64 * dy;
            if row % 2 == 1 {
                // Hexagonal offset on every other row
                x += dx / 2.0;
            }
            if x <= bound && y <= bound {
                sites.push(Point { x, y });
            }
        }
    }

    if sites.len() < target {
        debug!(
            "site layout grid exhausted: placed {} of {} sites within the zone bound",
            sites.len(),
            target
        );
    }
    sites
}
