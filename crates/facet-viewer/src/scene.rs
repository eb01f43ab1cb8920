use facet_engine::geometry::{GeometryError, Mesh, Palette, Solid};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What the GPU mesh is built from. Changes mark the mesh stale.
pub struct Scene {
    solid: Solid,
    palette: Palette,
    rng: StdRng,
    dirty: bool,
}

impl Scene {
    pub fn new(solid: Solid, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            solid,
            palette: Palette::default(),
            rng,
            dirty: true,
        }
    }

    pub fn solid(&self) -> Solid {
        self.solid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns false when `solid` is already shown.
    pub fn select(&mut self, solid: Solid) -> bool {
        if solid == self.solid {
            return false;
        }
        self.solid = solid;
        self.dirty = true;
        true
    }

    /// One fresh color per vertex of the current solid.
    pub fn randomize_palette(&mut self) {
        let count = self.solid.polyhedron().positions.len();
        self.palette = Palette::random(&mut self.rng, count);
        self.dirty = true;
    }

    pub fn reset_palette(&mut self) {
        if self.palette != Palette::default() {
            self.palette = Palette::default();
            self.dirty = true;
        }
    }

    /// Clears and returns the stale flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn build_mesh(&self) -> Result<Mesh, GeometryError> {
        Mesh::build(self.solid, &self.palette)
    }
}
