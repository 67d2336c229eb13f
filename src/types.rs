use nalgebra::{Vector2, Vector3};

/// Axis-aligned bounding box in 3D.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox3 {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl BBox3 {
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self { Self { min, max } }
    pub fn center(&self) -> Vector3<f64> { (self.min + self.max) * 0.5 }
    pub fn size(&self) -> Vector3<f64> { self.max - self.min }
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// The same box shifted by `offset`.
    pub fn translate(&self, offset: Vector3<f64>) -> BBox3 {
        BBox3::new(self.min + offset, self.max + offset)
    }

    /// Smallest box enclosing both boxes.
    pub fn hull(&self, other: &BBox3) -> BBox3 {
        BBox3::new(self.min.inf(&other.min), self.max.sup(&other.max))
    }

    /// Overlap of both boxes. May be inverted (min > max) when they are disjoint.
    pub fn overlap(&self, other: &BBox3) -> BBox3 {
        BBox3::new(self.min.sup(&other.min), self.max.inf(&other.max))
    }
}

/// Axis-aligned bounding box in the XY plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BBox2 {
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self { Self { min, max } }
    pub fn center(&self) -> Vector2<f64> { (self.min + self.max) * 0.5 }
    pub fn size(&self) -> Vector2<f64> { self.max - self.min }
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn translate(&self, offset: Vector2<f64>) -> BBox2 {
        BBox2::new(self.min + offset, self.max + offset)
    }

    pub fn hull(&self, other: &BBox2) -> BBox2 {
        BBox2::new(self.min.inf(&other.min), self.max.sup(&other.max))
    }
}
