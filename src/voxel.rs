//! Voxelization: sample an SDF onto a regular 3D grid.
//!
//! The [`VoxelGrid`] stores signed-distance values (as `f32`) at each voxel
//! center. Sampling is parallelized with rayon; any [`Sdf`] is safe to
//! evaluate from several threads.

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::error::SdfError;
use crate::shape::Sdf;

/// A regular 3D grid of signed-distance values.
pub struct VoxelGrid {
    /// Number of voxels along each axis `[nx, ny, nz]`.
    pub resolution: [usize; 3],
    /// Edge length of each cubic voxel.
    pub voxel_size: f64,
    /// World-space position of the grid's minimum corner.
    pub origin: Vector3<f64>,
    /// Flat array of SDF values, index `ix * ny * nz + iy * nz + iz`.
    pub data: Vec<f32>,
}

fn voxel_center(origin: Vector3<f64>, voxel_size: f64, ix: usize, iy: usize, iz: usize) -> Vector3<f64> {
    origin + Vector3::new(ix as f64 + 0.5, iy as f64 + 0.5, iz as f64 + 0.5) * voxel_size
}

impl VoxelGrid {
    /// Sample `sdf` over its bounding box, padded by one voxel on every side.
    ///
    /// Fails for a voxel size that is not finite and positive, or so small
    /// that the voxel count overflows.
    pub fn sample<S: Sdf + ?Sized>(sdf: &S, voxel_size: f64) -> Result<Self, SdfError> {
        if voxel_size.is_nan() || voxel_size <= 0.0 || voxel_size.is_infinite() {
            return Err(SdfError::InvalidVoxelSize(voxel_size));
        }
        let bbox = sdf.bounding_box();
        let pad = Vector3::repeat(voxel_size);
        let origin = bbox.min - pad;
        let cells = ((bbox.max + pad - origin) / voxel_size).map(|n| n.ceil().max(1.0) as usize);
        let [nx, ny, nz] = [cells.x, cells.y, cells.z];
        let total = nx
            .checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .ok_or(SdfError::InvalidVoxelSize(voxel_size))?;
        log::debug!("sampling {nx}x{ny}x{nz} voxels of size {voxel_size}");

        let data: Vec<f32> = (0..total)
            .into_par_iter()
            .map(|idx| {
                let world = voxel_center(origin, voxel_size, idx / (ny * nz), (idx / nz) % ny, idx % nz);
                sdf.evaluate(world) as f32
            })
            .collect();

        Ok(VoxelGrid {
            resolution: [nx, ny, nz],
            voxel_size,
            origin,
            data,
        })
    }

    /// Flat index of the voxel containing `world`, clamped to the grid.
    pub fn index_at(&self, world: Vector3<f64>) -> usize {
        let [nx, ny, nz] = self.resolution;
        let cell = (world - self.origin) / self.voxel_size;
        let clamp = |v: f64, n: usize| (v as isize).clamp(0, n as isize - 1) as usize;
        clamp(cell.x, nx) * ny * nz + clamp(cell.y, ny) * nz + clamp(cell.z, nz)
    }

    /// World-space center of the voxel at `(ix, iy, iz)`.
    pub fn world_at(&self, ix: usize, iy: usize, iz: usize) -> Vector3<f64> {
        voxel_center(self.origin, self.voxel_size, ix, iy, iz)
    }

    /// Number of voxels with a negative (inside) value.
    pub fn inside_count(&self) -> usize {
        self.data.iter().filter(|&&d| d < 0.0).count()
    }
}
