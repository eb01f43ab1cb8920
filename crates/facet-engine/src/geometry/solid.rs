use std::fmt;
use std::str::FromStr;

use super::Polyhedron;

/// The five Platonic solids.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Solid {
    Tetrahedron,
    Hexahedron,
    #[default]
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl Solid {
    pub const ALL: [Solid; 5] = [
        Solid::Tetrahedron,
        Solid::Hexahedron,
        Solid::Octahedron,
        Solid::Dodecahedron,
        Solid::Icosahedron,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Solid::Tetrahedron => "tetrahedron",
            Solid::Hexahedron => "hexahedron",
            Solid::Octahedron => "octahedron",
            Solid::Dodecahedron => "dodecahedron",
            Solid::Icosahedron => "icosahedron",
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next solid in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous solid in `ALL`, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn polyhedron(self) -> Polyhedron {
        match self {
            Solid::Tetrahedron => Polyhedron::tetrahedron(),
            Solid::Hexahedron => Polyhedron::hexahedron(),
            Solid::Octahedron => Polyhedron::octahedron(),
            Solid::Dodecahedron => Polyhedron::dodecahedron(),
            Solid::Icosahedron => Polyhedron::icosahedron(),
        }
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `Solid::from_str` for unrecognized names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSolid(pub String);

impl fmt::Display for UnknownSolid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown solid '{}'; expected one of tetrahedron, hexahedron (cube), octahedron, dodecahedron, icosahedron",
            self.0
        )
    }
}

impl std::error::Error for UnknownSolid {}

impl FromStr for Solid {
    type Err = UnknownSolid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tetrahedron" | "tetra" | "d4" => Ok(Solid::Tetrahedron),
            "hexahedron" | "cube" | "hexa" | "d6" => Ok(Solid::Hexahedron),
            "octahedron" | "octa" | "d8" => Ok(Solid::Octahedron),
            "dodecahedron" | "dodeca" | "d12" => Ok(Solid::Dodecahedron),
            "icosahedron" | "icosa" | "d20" => Ok(Solid::Icosahedron),
            _ => Err(UnknownSolid(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_cycle_through_all() {
        let mut s = Solid::Tetrahedron;
        for expected in Solid::ALL.iter().skip(1).chain(Solid::ALL.iter().take(1)) {
            s = s.next();
            assert_eq!(s, *expected);
        }
        assert_eq!(Solid::Tetrahedron.prev(), Solid::Icosahedron);
        assert_eq!(Solid::Icosahedron.next(), Solid::Tetrahedron);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("cube".parse::<Solid>(), Ok(Solid::Hexahedron));
        assert_eq!(" Icosahedron ".parse::<Solid>(), Ok(Solid::Icosahedron));
        assert_eq!("d12".parse::<Solid>(), Ok(Solid::Dodecahedron));
        for s in Solid::ALL {
            assert_eq!(s.name().parse::<Solid>(), Ok(s));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "torus".parse::<Solid>().unwrap_err();
        assert_eq!(err, UnknownSolid("torus".to_string()));
        assert!(err.to_string().contains("torus"));
    }

    #[test]
    fn index_round_trips() {
        for (i, s) in Solid::ALL.into_iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(Solid::from_index(i), Some(s));
        }
        assert_eq!(Solid::from_index(5), None);
    }
}
