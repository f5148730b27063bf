//! Camera transform - projection, view and the cached inverse used to unproject

use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector3};

use crate::config::CameraConfig;
use crate::error::{Result, SceneError};

/// Camera state read from the renderer
#[derive(Clone, Debug)]
pub struct CameraTransform {
    position: Point3<f32>,
    /// inverse(projection * view), NDC -> world
    inverse_view_projection: Matrix4<f32>,
}

impl CameraTransform {
    /// Build from projection and view matrices plus the camera's world position
    pub fn new(
        projection: Matrix4<f32>,
        view: Matrix4<f32>,
        position: Point3<f32>,
    ) -> Result<Self> {
        let inverse_view_projection = (projection * view)
            .try_inverse()
            .ok_or(SceneError::SingularCamera)?;

        Ok(Self {
            position,
            inverse_view_projection,
        })
    }

    /// Perspective camera looking at the origin, y up
    pub fn perspective(config: &CameraConfig) -> Result<Self> {
        let projection = Perspective3::new(
            config.aspect,
            config.fov_degrees.to_radians(),
            config.near,
            config.far,
        )
        .to_homogeneous();

        let [x, y, z] = config.position;
        let eye = Point3::new(x, y, z);
        let view = Isometry3::look_at_rh(&eye, &Point3::origin(), &Vector3::y()).to_homogeneous();

        Self::new(projection, view, eye)
    }

    /// Build from column-major arrays as found in three.js `Matrix4.elements`
    pub fn from_column_slices(projection: &[f32], view: &[f32], position: &[f32]) -> Result<Self> {
        check_len("projection matrix", projection, 16)?;
        check_len("view matrix", view, 16)?;
        check_len("camera position", position, 3)?;

        Self::new(
            Matrix4::from_column_slice(projection),
            Matrix4::from_column_slice(view),
            Point3::new(position[0], position[1], position[2]),
        )
    }

    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    /// NDC point -> world space, with perspective divide
    pub fn unproject(&self, ndc: Point3<f32>) -> Point3<f32> {
        self.inverse_view_projection.transform_point(&ndc)
    }
}

fn check_len(name: &'static str, data: &[f32], expected: usize) -> Result<()> {
    if data.len() != expected {
        return Err(SceneError::MatrixLength {
            name,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
