#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Interpret an optional wire pair under the absence contract.
    ///
    /// A coordinate is absent when either side is missing, either side is
    /// non-finite, or both sides are exactly zero. The backend writes
    /// `(0, 0)` for "location not set"; nothing in this service region sits
    /// on the equator/prime-meridian intersection, so the collision is
    /// accepted and stated here rather than assumed.
    #[must_use]
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Option<Self> {
        let (lat, lon) = (lat?, lon?);
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if lat == 0.0 && lon == 0.0 {
            return None;
        }
        Some(Self { lat, lon })
    }
}

/// Axis-aligned latitude/longitude box over one or more coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Smallest box containing every coordinate; `None` for an empty slice.
    #[must_use]
    pub fn over(points: &[Coordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };
        for point in rest {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    /// Grow the box to include `point`.
    pub fn extend(&mut self, point: Coordinate) {
        self.south = self.south.min(point.lat);
        self.west = self.west.min(point.lon);
        self.north = self.north.max(point.lat);
        self.east = self.east.max(point.lon);
    }

    #[must_use]
    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(self.south, self.west)
    }

    #[must_use]
    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(self.north, self.east)
    }

    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }

    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lon >= self.west
            && point.lon <= self.east
    }
}
