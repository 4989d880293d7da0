/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive; on the wire it is `0` or `1`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between dead and alive
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Matrix encoding: dead is 0, alive is 1
    pub const fn as_bit(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    /// Strict decoding; anything other than 0 or 1 is rejected
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Cell::Dead),
            1 => Some(Cell::Alive),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle(), Cell::Dead);
    }

    #[test]
    fn test_bit_encoding() {
        assert_eq!(Cell::Alive.as_bit(), 1);
        assert_eq!(Cell::Dead.as_bit(), 0);
        assert_eq!(Cell::from_bit(1), Some(Cell::Alive));
        assert_eq!(Cell::from_bit(0), Some(Cell::Dead));
        assert_eq!(Cell::from_bit(2), None);
    }

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }
}
