//! Per-frame hand interaction on the particle buffer

use nalgebra::Point3;

use crate::config::EffectConfig;
use crate::hand::Gesture;
use crate::particles::ParticleBuffer;

/// 1 at distance 0, 0 at `falloff` and beyond, linear between
pub fn proximity(distance: f32, falloff: f32) -> f32 {
    (1.0 - distance / falloff).max(0.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Run one frame of the hand effect.
///
/// Distance is planar (x, y); z is ignored. A fist paints everything in the
/// blast color at blast size. Any other gesture eases each particle's color
/// toward white by `proximity * blend_rate` of the remaining gap, so colors
/// keep brightening while the hand stays close. The point size is global and
/// ends up with the last particle's proximity.
pub fn update_particles(
    buffer: &mut ParticleBuffer,
    hand: &Point3<f32>,
    gesture: Gesture,
    effect: &EffectConfig,
) {
    let mut size = buffer.size();
    {
        let (positions, tints) = buffer.arrays_mut();
        for (position, tint) in positions.iter().zip(tints.iter_mut()) {
            let dx = position[0] - hand.x;
            let dy = position[1] - hand.y;
            let closeness = proximity((dx * dx + dy * dy).sqrt(), effect.falloff);

            if gesture == Gesture::Fist {
                size = effect.fist_size;
                *tint = effect.fist_color;
            } else {
                let t = closeness * effect.blend_rate;
                for channel in tint.iter_mut() {
                    *channel = lerp(*channel, 1.0, t);
                }
                size = effect.base_size + closeness * effect.size_gain;
            }
        }
    }

    buffer.set_size(size);
    buffer.mark_dirty();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(points: &[[f32; 3]], color: [f32; 3]) -> ParticleBuffer {
        let mut buffer = ParticleBuffer::new(points.len());
        let (positions, tints) = buffer.arrays_mut();
        positions.copy_from_slice(points);
        tints.iter_mut().for_each(|c| *c = color);
        buffer
    }

    #[test]
    fn test_proximity_values() {
        assert_eq!(proximity(0.0, 2.0), 1.0);
        assert!((proximity(1.0, 2.0) - 0.5).abs() < 1e-6);
        assert_eq!(proximity(2.0, 2.0), 0.0);
        assert_eq!(proximity(7.5, 2.0), 0.0);
    }

    #[test]
    fn test_fist_is_fixed_point() {
        let effect = EffectConfig::default();
        let hand = Point3::new(0.0, 0.0, 0.0);
        let mut buffer = buffer_with(&[[0.0, 0.0, 0.0], [5.0, 5.0, 0.0]], [1.0, 0.4, 0.6]);

        for _ in 0..2 {
            update_particles(&mut buffer, &hand, Gesture::Fist, &effect);
            assert!(buffer.colors().iter().all(|c| *c == [1.0, 0.0, 0.0]));
            assert_eq!(buffer.size(), 0.5);
        }
    }

    #[test]
    fn test_open_blends_toward_white() {
        let effect = EffectConfig::default();
        let hand = Point3::new(0.0, 0.0, 0.0);
        let mut buffer = buffer_with(&[[0.0, 0.0, 9.0]], [0.0, 0.5, 1.0]);

        update_particles(&mut buffer, &hand, Gesture::Open, &effect);
        // proximity 1 (z ignored) -> t = 0.1
        let c = buffer.colors()[0];
        assert!((c[0] - 0.1).abs() < 1e-6);
        assert!((c[1] - 0.55).abs() < 1e-6);
        assert_eq!(c[2], 1.0);
        assert!((buffer.size() - 0.15).abs() < 1e-6);

        update_particles(&mut buffer, &hand, Gesture::Pointing, &effect);
        // accumulates from the stored color
        assert!((buffer.colors()[0][0] - 0.19).abs() < 1e-6);
    }

    #[test]
    fn test_far_hand_leaves_colors() {
        let effect = EffectConfig::default();
        let hand = Point3::new(1000.0, 1000.0, 1000.0);
        let mut buffer = buffer_with(&[[0.5, -0.5, 0.0], [1.0, 1.0, 1.0]], [1.0, 0.4, 0.6]);

        update_particles(&mut buffer, &hand, Gesture::None, &effect);
        assert!(buffer.colors().iter().all(|c| *c == [1.0, 0.4, 0.6]));
        assert!((buffer.size() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_size_follows_last_particle() {
        let effect = EffectConfig::default();
        let hand = Point3::new(0.0, 0.0, 0.0);
        // first particle touching the hand, last one 1 unit away
        let mut buffer = buffer_with(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]], [0.0; 3]);

        update_particles(&mut buffer, &hand, Gesture::Open, &effect);
        assert!((buffer.size() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_marks_dirty_without_rebind() {
        let mut buffer = buffer_with(&[[0.0; 3]], [0.0; 3]);
        update_particles(&mut buffer, &Point3::origin(), Gesture::Open, &EffectConfig::default());
        let flags = buffer.take_flags();
        assert!(flags.positions_dirty && flags.colors_dirty);
        assert!(!flags.rebind);
    }
}
