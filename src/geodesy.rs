//! Great-circle distance between chart positions

/// Mean Earth radius for the spherical model (km)
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per nautical mile
const KM_PER_NM: f64 = 1.852;

fn to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Haversine distance between two positions, in nautical miles.
///
/// Coordinates are degrees. The haversine intermediate is clamped to [0, 1]
/// so antipodal points cannot push `asin` out of domain through
/// floating-point overshoot; identical points yield exactly 0.
pub fn haversine_nm(a_lat: f64, a_lon: f64, b_lat: f64, b_lon: f64) -> f64 {
    let d_lat = to_rad(b_lat - a_lat);
    let d_lon = to_rad(b_lon - a_lon);
    let lat1 = to_rad(a_lat);
    let lat2 = to_rad(b_lat);

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    let km = 2.0 * EARTH_RADIUS_KM * h.sqrt().asin();
    km / KM_PER_NM
}
