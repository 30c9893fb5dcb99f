//! Enabled-level set.

use std::fmt;

use super::severity::Level;

/// The set of levels a logger writes. All other levels are dropped silently.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSet(u8);

impl LevelSet {
    pub const fn empty() -> Self {
        LevelSet(0)
    }

    pub const fn all() -> Self {
        LevelSet(u8::MAX)
    }

    /// `{emergency, critical, error, alert, warning}`.
    pub fn default_enabled() -> Self {
        [
            Level::Emergency,
            Level::Critical,
            Level::Error,
            Level::Alert,
            Level::Warning,
        ]
        .into_iter()
        .collect()
    }

    /// Build the set a logger is constructed with: no levels means the
    /// default set.
    pub fn from_levels<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = Level>,
    {
        let set: LevelSet = levels.into_iter().collect();
        if set.is_empty() {
            Self::default_enabled()
        } else {
            set
        }
    }

    pub fn insert(&mut self, level: Level) {
        self.0 |= level.bit();
    }

    pub fn contains(&self, level: Level) -> bool {
        self.0 & level.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Level> + '_ {
        Level::ALL.into_iter().filter(move |level| self.contains(*level))
    }
}

impl FromIterator<Level> for LevelSet {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        let mut set = LevelSet::empty();
        for level in iter {
            set.insert(level);
        }
        set
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
