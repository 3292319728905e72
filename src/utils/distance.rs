use crate::model::coordinate::Coordinate;
use crate::utils::constants::EARTH_RADIUS;

/// Equirectangular approximation, good enough for the few hundred meters a
/// bus travels between two polls.
pub fn calculate_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat_1_rad = from.latitude().to_radians();
    let lat_2_rad = to.latitude().to_radians();
    let lon_1_rad = from.longitude().to_radians();
    let lon_2_rad = to.longitude().to_radians();

    let x = (lon_2_rad - lon_1_rad) * ((lat_1_rad + lat_2_rad) / 2f64).cos();
    let y = lat_2_rad - lat_1_rad;

    (x * x + y * y).sqrt() * EARTH_RADIUS
}
