//! Seed management for world generation
//!
//! Provides separate seeds for each noise channel and random stream, allowing
//! fine-grained control over which aspects of a world to vary or keep constant.

/// Seeds for all generation layers of one world.
///
/// Noise channels are offset from the master seed (`seed`, `seed + 1`, ...)
/// so their layouts stay comparable with older worlds. Random streams that
/// place islands and structures get hashed sub-seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Height channel
    pub height: u64,
    /// Biome variety channel
    pub variety: u64,
    /// Moisture channel (Pangea)
    pub moisture: u64,
    /// High-frequency volcanic channel
    pub volcanic: u64,
    /// Island count, placement, radius and per-tile choices
    pub islands: u64,
    /// Post-processing passes (volcanoes, mountain ranges, walls)
    pub structures: u64,
}

const VARIETY_OFFSET: u64 = 1;
const MOISTURE_OFFSET: u64 = 2;
const VOLCANIC_OFFSET: u64 = 100;
const ISLAND_STRIDE: u64 = 100;

impl WorldSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            height: master,
            variety: master.wrapping_add(VARIETY_OFFSET),
            moisture: master.wrapping_add(MOISTURE_OFFSET),
            volcanic: master.wrapping_add(VOLCANIC_OFFSET),
            islands: derive_seed(master, "islands"),
            structures: derive_seed(master, "structures"),
        }
    }

    /// Noise seed for the `index`-th stamped island.
    pub fn island(&self, index: usize) -> u64 {
        self.master.wrapping_add((index as u64).wrapping_mul(ISLAND_STRIDE))
    }

    /// Create a builder for customizing individual seeds
    pub fn builder(master: u64) -> WorldSeedsBuilder {
        WorldSeedsBuilder::new(master)
    }
}

/// Builder for customizing individual seeds while deriving others from master
pub struct WorldSeedsBuilder {
    seeds: WorldSeeds,
}

impl WorldSeedsBuilder {
    pub fn new(master: u64) -> Self {
        Self {
            seeds: WorldSeeds::from_master(master),
        }
    }

    pub fn height(mut self, seed: u64) -> Self {
        self.seeds.height = seed;
        self
    }

    pub fn variety(mut self, seed: u64) -> Self {
        self.seeds.variety = seed;
        self
    }

    pub fn moisture(mut self, seed: u64) -> Self {
        self.seeds.moisture = seed;
        self
    }

    pub fn volcanic(mut self, seed: u64) -> Self {
        self.seeds.volcanic = seed;
        self
    }

    pub fn islands(mut self, seed: u64) -> Self {
        self.seeds.islands = seed;
        self
    }

    pub fn structures(mut self, seed: u64) -> Self {
        self.seeds.structures = seed;
        self
    }

    /// Build the final WorldSeeds
    pub fn build(self) -> WorldSeeds {
        self.seeds
    }
}

/// Derive a sub-seed from a master seed and a system name.
///
/// FNV-1a over the name followed by a splitmix64 finalizer. Unlike
/// `DefaultHasher` the result is fixed across toolchains, so saved seeds keep
/// reproducing the same worlds.
fn derive_seed(master: u64, system: &str) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in system.bytes() {
        h ^= byte as u64;
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    splitmix64(master ^ h)
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Display format for seeds (useful for sharing world configurations)
impl std::fmt::Display for WorldSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WorldSeeds {{ master: {}, height: {}, variety: {}, moisture: {}, \
             volcanic: {}, islands: {}, structures: {} }}",
            self.master,
            self.height,
            self.variety,
            self.moisture,
            self.volcanic,
            self.islands,
            self.structures,
        )
    }
}
