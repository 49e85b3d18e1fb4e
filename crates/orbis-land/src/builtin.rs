//! Bundled low-poly continent outlines.

use crate::landmass::Landmass;
use crate::polygon::Polygon;

/// `(name, [lon, lat] ring)` for each bundled continent.
const CONTINENTS: &[(&str, &[[f64; 2]])] = &[
    (
        "North America",
        &[
            [-130.0, 50.0],
            [-110.0, 25.0],
            [-80.0, 30.0],
            [-60.0, 45.0],
            [-70.0, 60.0],
            [-150.0, 70.0],
        ],
    ),
    (
        "South America",
        &[[-80.0, 10.0], [-70.0, -55.0], [-40.0, -55.0], [-35.0, 10.0]],
    ),
    (
        "Africa",
        &[[-10.0, 35.0], [50.0, 35.0], [50.0, -35.0], [-10.0, -35.0]],
    ),
    (
        "Eurasia",
        &[
            [-10.0, 35.0],
            [180.0, 35.0],
            [180.0, 70.0],
            [30.0, 70.0],
            [10.0, 50.0],
        ],
    ),
    (
        "Australia",
        &[[110.0, -10.0], [110.0, -40.0], [155.0, -40.0], [155.0, -10.0]],
    ),
    (
        "Greenland",
        &[[-70.0, 80.0], [-70.0, 60.0], [-20.0, 60.0], [-20.0, 80.0]],
    ),
];

/// The six coarse continental outlines used by the procedural globe.
pub fn builtin_landmasses() -> Vec<Landmass> {
    CONTINENTS
        .iter()
        .filter_map(|(name, ring)| match Polygon::from_lon_lat(ring) {
            Ok(polygon) => Some(Landmass::new(*name, vec![polygon])),
            Err(err) => {
                tracing::warn!(name, %err, "skipping bundled outline");
                None
            }
        })
        .collect()
}
