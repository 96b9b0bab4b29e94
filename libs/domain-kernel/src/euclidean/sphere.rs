use super::point::Point;

/// Sphere given by its centre and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub centre: Point,
    pub radius: f64,
}

impl Sphere {
    pub fn new(centre: Point, radius: f64) -> Self {
        Self { centre, radius }
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.centre.distance_to(point) <= self.radius
    }
}
