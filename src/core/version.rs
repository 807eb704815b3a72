use crate::domain::model::Version;

/// Value at which a component rolls over into the next-higher one. A
/// component counts 0..=100 before the carry happens.
pub const ROLLOVER_CEILING: u32 = 100;

impl Version {
    /// Next version under the capped rollover rule: patch increments until
    /// it hits the ceiling, then carries into minor (patch reset to zero),
    /// then into major (minor and patch reset to zero).
    pub fn bumped(&self) -> Version {
        if self.patch < ROLLOVER_CEILING {
            Version::new(self.major, self.minor, self.patch + 1)
        } else if self.minor < ROLLOVER_CEILING {
            Version::new(self.major, self.minor + 1, 0)
        } else {
            Version::new(self.major + 1, 0, 0)
        }
    }
}
