//! Template switching on the pointing gesture

use crate::hand::Gesture;
use crate::particles::{generate, ParticleBuffer, Template, XorShift32};

/// Active template plus the edge-triggered switch that advances it
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateSwitch {
    active: Template,
}

impl TemplateSwitch {
    pub fn new(initial: Template) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Template {
        self.active
    }

    /// Feed the gesture entered on this detection (if any).
    /// Entering pointing advances the template and regenerates the buffer.
    pub fn on_transition(
        &mut self,
        entered: Option<Gesture>,
        buffer: &mut ParticleBuffer,
        rng: &mut XorShift32,
    ) -> Option<Template> {
        if entered != Some(Gesture::Pointing) {
            return None;
        }

        let from = self.active;
        self.active = from.next();
        generate(self.active, buffer, rng);
        tracing::info!("template switched: {} -> {}", from, self.active);
        Some(self.active)
    }
}
