//! Terrain types and helpers.

/// Classification of a single maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Open,
    Wall,
    Start,
    Goal,
}

impl Terrain {
    /// Whether a walker may stand on this terrain.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Wall)
    }

    /// Character representation of terrain.
    pub const fn rune(self) -> char {
        match self {
            Terrain::Open => '.',
            Terrain::Wall => '#',
            Terrain::Start => 'S',
            Terrain::Goal => 'E',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Terrain::Open),
            '#' => Some(Terrain::Wall),
            'S' => Some(Terrain::Start),
            'E' => Some(Terrain::Goal),
            _ => None,
        }
    }
}
