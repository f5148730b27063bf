//! Scene state - everything that lives across frames
//!
//! Detection callbacks write the hand position and gesture (last write
//! wins); the render loop reads them in [`SceneState::update`].

use nalgebra::Point3;

use crate::config::SceneConfig;
use crate::error::Result;
use crate::hand::{classify, Gesture, GestureTracker, LandmarkSet};
use crate::particles::{generate, ParticleBuffer, RenderFlags, Template, XorShift32};
use crate::projection::{screen_to_world, CameraTransform};

use super::controller::TemplateSwitch;
use super::update::update_particles;

/// Hand position used when no hand is detected; far outside the scene so
/// every particle sees zero proximity
pub const FAR_AWAY: Point3<f32> = Point3::new(1000.0, 1000.0, 1000.0);

pub struct SceneState {
    config: SceneConfig,
    camera: CameraTransform,
    particles: ParticleBuffer,
    switch: TemplateSwitch,
    gestures: GestureTracker,
    hand_position: Point3<f32>,
    rng: XorShift32,
}

impl SceneState {
    /// Validate `config`, set up the default camera and generate the
    /// initial template
    pub fn new(config: SceneConfig, mut rng: XorShift32) -> Result<Self> {
        config.validate()?;

        let camera = CameraTransform::perspective(&config.camera)?;
        let mut particles = ParticleBuffer::new(config.particle_count);
        generate(config.initial_template, &mut particles, &mut rng);
        particles.set_size(config.effect.base_size);

        tracing::info!(
            "scene ready: {} particles, template {}",
            config.particle_count,
            config.initial_template
        );

        Ok(Self {
            switch: TemplateSwitch::new(config.initial_template),
            config,
            camera,
            particles,
            gestures: GestureTracker::new(),
            hand_position: FAR_AWAY,
            rng,
        })
    }

    /// Replace the camera used to place the hand
    pub fn set_camera(&mut self, camera: CameraTransform) {
        self.camera = camera;
    }

    /// Consume one detection result (`None` when no hand is visible).
    /// Returns the new template if this detection switched it.
    pub fn apply_detection(&mut self, hand: Option<&LandmarkSet>) -> Option<Template> {
        let gesture = match hand {
            Some(landmarks) => {
                let tip = landmarks.index_tip();
                self.hand_position = screen_to_world(
                    tip.x,
                    tip.y,
                    &self.camera,
                    self.config.effect.target_distance,
                );
                classify(landmarks)
            }
            None => {
                self.hand_position = FAR_AWAY;
                Gesture::None
            }
        };

        let entered = self.gestures.observe(gesture);
        match entered {
            Some(Gesture::Pointing) => {
                tracing::info!("gesture detected: pointing (switch template)")
            }
            Some(Gesture::Fist) => tracing::info!("gesture detected: fist (color blast)"),
            Some(other) => tracing::debug!("gesture: {}", other),
            None => {}
        }

        self.switch.on_transition(entered, &mut self.particles, &mut self.rng)
    }

    /// One render frame of the hand effect
    pub fn update(&mut self) {
        update_particles(
            &mut self.particles,
            &self.hand_position,
            self.gestures.current(),
            &self.config.effect,
        );
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleBuffer {
        &self.particles
    }

    pub fn take_render_flags(&mut self) -> RenderFlags {
        self.particles.take_flags()
    }

    pub fn template(&self) -> Template {
        self.switch.active()
    }

    pub fn gesture(&self) -> Gesture {
        self.gestures.current()
    }

    pub fn hand_position(&self) -> Point3<f32> {
        self.hand_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{
        HandLandmark, INDEX_MCP, INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP, MIDDLE_TIP, THUMB_TIP, WRIST,
    };
    use crate::particles::colors;

    fn scene() -> SceneState {
        let config = SceneConfig {
            particle_count: 256,
            ..SceneConfig::default()
        };
        SceneState::new(config, XorShift32::new(99)).unwrap()
    }

    /// Hand with the index fingertip at screen (0.5, 0.5)
    fn hand(gesture: Gesture) -> LandmarkSet {
        let mut points = [HandLandmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[WRIST].y = 0.9;
        points[THUMB_TIP].y = 0.85;
        points[MIDDLE_MCP].y = 0.6;
        match gesture {
            Gesture::Pointing => {
                points[INDEX_MCP].y = 0.7;
                points[MIDDLE_TIP].y = 0.7;
            }
            Gesture::Fist => {
                points[INDEX_MCP].y = 0.4;
                points[MIDDLE_TIP].y = 0.7;
            }
            _ => {
                points[INDEX_MCP].y = 0.4;
                points[MIDDLE_TIP].y = 0.3;
            }
        }
        points[INDEX_TIP] = HandLandmark::new(0.5, 0.5, 0.0);
        LandmarkSet::new(points)
    }

    #[test]
    fn test_initial_state() {
        let mut scene = scene();
        assert_eq!(scene.template(), Template::Sphere);
        assert_eq!(scene.gesture(), Gesture::None);
        assert_eq!(scene.hand_position(), FAR_AWAY);
        assert_eq!(scene.particles().len(), 256);
        assert!(scene.take_render_flags().rebind);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SceneConfig {
            particle_count: 0,
            ..SceneConfig::default()
        };
        assert!(SceneState::new(config, XorShift32::default()).is_err());
    }

    #[test]
    fn test_detection_places_hand_in_front_of_camera() {
        let mut scene = scene();
        scene.apply_detection(Some(&hand(Gesture::Open)));
        assert_eq!(scene.gesture(), Gesture::Open);

        let p = scene.hand_position();
        // default camera at z = 5 looking at the origin, 3 units ahead
        assert!(p.x.abs() < 1e-4 && p.y.abs() < 1e-4);
        assert!((p.z - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_lost_hand_resets_to_sentinel() {
        let mut scene = scene();
        scene.apply_detection(Some(&hand(Gesture::Fist)));
        assert_eq!(scene.gesture(), Gesture::Fist);

        scene.apply_detection(None);
        assert_eq!(scene.gesture(), Gesture::None);
        assert_eq!(scene.hand_position(), FAR_AWAY);
    }

    #[test]
    fn test_pointing_cycles_templates() {
        let mut scene = scene();
        let pointing = hand(Gesture::Pointing);

        assert_eq!(scene.apply_detection(Some(&pointing)), Some(Template::Heart));
        // held: no re-fire
        assert_eq!(scene.apply_detection(Some(&pointing)), None);
        assert!(scene.particles().colors().iter().all(|c| *c == colors::HEART));

        scene.apply_detection(None);
        assert_eq!(scene.apply_detection(Some(&pointing)), Some(Template::Flower));
        scene.apply_detection(Some(&hand(Gesture::Open)));
        assert_eq!(scene.apply_detection(Some(&pointing)), Some(Template::Sphere));
        assert_eq!(scene.template(), Template::Sphere);
    }

    #[test]
    fn test_fist_frame_paints_red() {
        let mut scene = scene();
        scene.apply_detection(Some(&hand(Gesture::Fist)));
        scene.update();
        scene.update();

        assert!(scene.particles().colors().iter().all(|c| *c == [1.0, 0.0, 0.0]));
        assert_eq!(scene.particles().size(), 0.5);
        let flags = scene.take_render_flags();
        assert!(flags.colors_dirty && flags.positions_dirty);
    }

    #[test]
    fn test_no_hand_frame_keeps_template_colors() {
        let mut scene = scene();
        scene.update();
        assert!(scene.particles().colors().iter().all(|c| *c == colors::SPHERE));
        assert!((scene.particles().size() - 0.05).abs() < 1e-6);
    }
}
