use rand::Rng;

const DEFAULT_COLORS: [[f32; 4]; 6] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
];

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Lower bound for randomized channels; keeps lines visible on dark backgrounds.
const RANDOM_CHANNEL_MIN: f32 = 0.2;

/// Vertex colors, cycled across a mesh's vertices in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<[f32; 4]>,
}

impl Palette {
    pub fn new(colors: Vec<[f32; 4]>) -> Self {
        Self { colors }
    }

    /// `count` opaque colors with each RGB channel drawn from `[0.2, 1.0]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let colors = (0..count)
            .map(|_| {
                [
                    rng.random_range(RANDOM_CHANNEL_MIN..=1.0),
                    rng.random_range(RANDOM_CHANNEL_MIN..=1.0),
                    rng.random_range(RANDOM_CHANNEL_MIN..=1.0),
                    1.0,
                ]
            })
            .collect();
        Self { colors }
    }

    /// Color for vertex `index`; white when the palette is empty.
    pub fn color_for(&self, index: usize) -> [f32; 4] {
        if self.colors.is_empty() {
            return WHITE;
        }
        self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS.to_vec())
    }
}
