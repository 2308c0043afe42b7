/// MWC256 random number generator
/// This is a random int generator suggested by Marsaglia in his DIEHARD
/// suite. It provides a great combination of speed and quality, and a run
/// is fully reproducible from its seed.
pub struct Mwc256 {
    q: [u32; 256],
    carry: u32,
    i: u8,
}

impl Mwc256 {
    /// Create a new random number generator with a default seed
    pub fn new() -> Self {
        Self::with_seed(123456789)
    }

    /// Create a new random number generator with the given seed
    pub fn with_seed(seed: u32) -> Self {
        let mut q = [0u32; 256];
        let mut j = seed;

        for q_val in &mut q {
            j = j.wrapping_mul(69069).wrapping_add(12345);
            *q_val = j;
        }

        Self {
            q,
            carry: 362436,
            i: 255,
        }
    }

    /// Generate a random u32
    pub fn rand32(&mut self) -> u32 {
        const A: u64 = 809430660;

        self.i = self.i.wrapping_add(1);
        let t = A * (self.q[self.i as usize] as u64) + (self.carry as u64);
        self.carry = (t >> 32) as u32;
        self.q[self.i as usize] = (t & 0xFFFFFFFF) as u32;
        self.q[self.i as usize]
    }

    /// Generate a random integer in [low, high], both bounds inclusive.
    /// Requires low <= high. The modulo fold has negligible bias for the
    /// small demo ranges this generator serves.
    pub fn int_range(&mut self, low: i32, high: i32) -> i32 {
        debug_assert!(low <= high);
        let span = (high as i64) - (low as i64) + 1;
        let offset = (self.rand32() as i64) % span;
        (low as i64 + offset) as i32
    }
}

impl Default for Mwc256 {
    fn default() -> Self {
        Self::new()
    }
}
