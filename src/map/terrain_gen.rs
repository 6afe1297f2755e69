use noise::{NoiseFn, Perlin};

use crate::map::tiles::TerrainType;

/// Noise-driven land terrain for generated worlds.
pub struct TerrainGenerator {
    elevation_noise: Perlin,
    moisture_noise: Perlin,
    temperature_noise: Perlin,
}

impl TerrainGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            // Different seeds per layer so the layers do not line up
            elevation_noise: Perlin::new(seed),
            moisture_noise: Perlin::new(seed.wrapping_add(1000)),
            temperature_noise: Perlin::new(seed.wrapping_add(2000)),
        }
    }

    /// Land terrain at `(x, y)`. Never returns water; the world generator
    /// places seas itself.
    pub fn generate_terrain(&self, x: u32, y: u32, width: u32, height: u32) -> TerrainType {
        let norm_x = f64::from(x) / f64::from(width.max(1));
        let norm_y = f64::from(y) / f64::from(height.max(1));

        let elevation = sample(&self.elevation_noise, norm_x * 4.0, norm_y * 4.0);
        let moisture = sample(&self.moisture_noise, norm_x * 6.0, norm_y * 6.0);
        let temperature = sample(&self.temperature_noise, norm_x * 8.0, norm_y * 8.0);

        classify_terrain(elevation, moisture, temperature)
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Perlin output mapped from [-1, 1] to [0, 1].
fn sample(noise: &Perlin, x: f64, y: f64) -> f64 {
    (noise.get([x, y]) + 1.0) / 2.0
}

fn classify_terrain(elevation: f64, moisture: f64, temperature: f64) -> TerrainType {
    if elevation > 0.72 {
        return if moisture < 0.4 {
            TerrainType::BarrenHills
        } else {
            TerrainType::Mountains
        };
    }
    if elevation > 0.62 {
        return TerrainType::Hills;
    }
    if temperature < 0.25 {
        return TerrainType::Tundra;
    }
    if moisture < 0.3 && temperature > 0.6 {
        return TerrainType::Desert;
    }
    if moisture > 0.7 && elevation < 0.4 {
        return TerrainType::Swamp;
    }
    if moisture > 0.6 {
        return if temperature > 0.55 {
            TerrainType::HardwoodForest
        } else {
            TerrainType::Forest
        };
    }
    if moisture > 0.45 {
        return if temperature > 0.6 {
            TerrainType::Orchard
        } else {
            TerrainType::Farm
        };
    }
    if moisture > 0.35 && temperature > 0.55 {
        return TerrainType::CottonField;
    }
    if moisture < 0.35 {
        return if temperature > 0.45 {
            TerrainType::OpenRange
        } else {
            TerrainType::HorseRanch
        };
    }
    TerrainType::Grassland
}
