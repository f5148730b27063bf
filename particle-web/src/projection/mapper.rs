//! Screen-to-world mapping for the tracked fingertip

use nalgebra::Point3;

use super::camera::CameraTransform;

/// NDC depth used for the unprojected point (mid-frustum)
const UNPROJECT_DEPTH: f32 = 0.5;

/// Convert normalized (0-1) screen coordinates to NDC (-1 to 1), flip Y
pub fn to_ndc(x: f32, y: f32) -> (f32, f32) {
    (x * 2.0 - 1.0, -(y * 2.0 - 1.0))
}

/// Place a normalized screen point `distance` units in front of the camera
/// along its viewing ray
pub fn screen_to_world(x: f32, y: f32, camera: &CameraTransform, distance: f32) -> Point3<f32> {
    let (ndc_x, ndc_y) = to_ndc(x, y);
    let on_ray = camera.unproject(Point3::new(ndc_x, ndc_y, UNPROJECT_DEPTH));

    let origin = camera.position();
    let direction = (on_ray - origin).normalize();
    origin + direction * distance
}
