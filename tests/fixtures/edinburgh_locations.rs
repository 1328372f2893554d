//! Central Edinburgh locations around the University's George Square campus.
//!
//! No-fly zones and landmarks are the ones the map server publishes for the
//! drone service; shop and delivery points sit outside their hull.

use drone_planner::geometry::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lng: f64,
    pub lat: f64,
}

impl Location {
    pub const fn new(name: &'static str, lng: f64, lat: f64) -> Self {
        Self { name, lng, lat }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

pub const APPLETON_TOWER: Location = Location::new("Appleton Tower", -3.186874, 55.944494);

// ============================================================================
// No-fly zones (outer rings, closing vertex repeated as served)
// ============================================================================

pub const GEORGE_SQUARE_AREA: &[(f64, f64)] = &[
    (-3.190578818321228, 55.94402412577528),
    (-3.1899887323379517, 55.94284650540911),
    (-3.187097311019897, 55.94328811724263),
    (-3.187682032585144, 55.944477740393744),
    (-3.190578818321228, 55.94402412577528),
];

pub const ELSIE_INGLIS_QUADRANGLE: &[(f64, f64)] = &[
    (-3.1907182931900024, 55.94519570234043),
    (-3.1906163692474365, 55.94498241796357),
    (-3.1900262832641597, 55.94507554227258),
    (-3.190133571624756, 55.94529783810495),
    (-3.1907182931900024, 55.94519570234043),
];

pub const BRISTO_SQUARE_OPEN_AREA: &[(f64, f64)] = &[
    (-3.189543485641479, 55.94552313663306),
    (-3.189382553100586, 55.94553214854692),
    (-3.189259171485901, 55.94544803726933),
    (-3.1892001628875732, 55.94533688994374),
    (-3.189208507537842, 55.94519570234043),
    (-3.189121246337891, 55.94513839563359),
    (-3.188962936401367, 55.94487575969542),
    (-3.189544677734375, 55.94487575969542),
    (-3.189543485641479, 55.94552313663306),
];

pub const BAYES_CENTRAL_AREA: &[(f64, f64)] = &[
    (-3.1876927614212036, 55.94520696732767),
    (-3.187555968761444, 55.9449621408666),
    (-3.186981976032257, 55.94505676722831),
    (-3.1871529817581172, 55.94530216893517),
    (-3.1876927614212036, 55.94520696732767),
];

pub const NO_FLY_ZONES: &[&[(f64, f64)]] = &[
    GEORGE_SQUARE_AREA,
    ELSIE_INGLIS_QUADRANGLE,
    BRISTO_SQUARE_OPEN_AREA,
    BAYES_CENTRAL_AREA,
];

/// Every no-fly vertex, flattened the way the planner receives them.
pub fn no_fly_vertices() -> Vec<Point> {
    NO_FLY_ZONES
        .iter()
        .flat_map(|zone| zone.iter().map(|&(lng, lat)| Point::new(lng, lat)))
        .collect()
}

// ============================================================================
// Landmarks
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("Greyfriars Kirkyard", -3.1916, 55.9458),
    Location::new("Potterrow", -3.1882, 55.9461),
];

// ============================================================================
// Shops
// ============================================================================

pub const CIVERINOS_SLICE: Location = Location::new("Civerinos Slice", -3.1912, 55.9456);
pub const RUDIS: Location = Location::new("Rudis", -3.1861, 55.9447);
pub const BING_TEA: Location = Location::new("Bing Tea", -3.1853, 55.9441);
pub const SODEBERG_PAVILION: Location = Location::new("Soderberg Pavilion", -3.1917, 55.9433);

pub const SHOPS: &[Location] = &[CIVERINOS_SLICE, RUDIS, BING_TEA, SODEBERG_PAVILION];

// ============================================================================
// Delivery points
// ============================================================================

pub const DELIVERY_POINTS: &[Location] = &[
    Location::new("Buccleuch Street", -3.1850, 55.9430),
    Location::new("Lauriston Place", -3.1915, 55.9440),
    Location::new("Nicolson Square", -3.1848, 55.9460),
    Location::new("Middle Meadow Walk", -3.1896, 55.9427),
    Location::new("Forrest Road", -3.1922, 55.9452),
];
