//! Particle position/color arrays shared with the renderer
//!
//! Length is fixed at construction. The renderer polls [`RenderFlags`] each
//! frame and re-uploads whatever is dirty.

/// What the renderer has to do with the buffers this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderFlags {
    /// Position array changed, re-upload
    pub positions_dirty: bool,
    /// Color array changed, re-upload
    pub colors_dirty: bool,
    /// Arrays were regenerated, re-bind them as geometry attributes
    pub rebind: bool,
}

/// Fixed-length particle storage, one `[f32; 3]` per particle
#[derive(Clone, Debug)]
pub struct ParticleBuffer {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    /// Global point size for the material
    size: f32,
    flags: RenderFlags,
}

impl ParticleBuffer {
    pub fn new(count: usize) -> Self {
        Self {
            positions: vec![[0.0; 3]; count],
            colors: vec![[1.0; 3]; count],
            size: 0.05,
            flags: RenderFlags::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Positions as `[x0, y0, z0, x1, ...]`
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as `[r0, g0, b0, r1, ...]`
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Both arrays at once, for in-place rewrites
    pub fn arrays_mut(&mut self) -> (&mut [[f32; 3]], &mut [[f32; 3]]) {
        (&mut self.positions, &mut self.colors)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    /// Flag both arrays for re-upload
    pub fn mark_dirty(&mut self) {
        self.flags.positions_dirty = true;
        self.flags.colors_dirty = true;
    }

    /// Flag a full re-bind after regeneration
    pub fn mark_rebind(&mut self) {
        self.mark_dirty();
        self.flags.rebind = true;
    }

    #[cfg(test)]
    pub(crate) fn flags(&self) -> RenderFlags {
        self.flags
    }

    /// Read and clear the flags
    pub fn take_flags(&mut self) -> RenderFlags {
        std::mem::take(&mut self.flags)
    }
}
