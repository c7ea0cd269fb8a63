use super::board::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to slot mark
    pub fn to_slot(self) -> Slot {
        match self {
            Player::One => Slot::One,
            Player::Two => Slot::Two,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Name used when no display name is configured
    pub fn default_name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_to_slot_never_empty() {
        assert_eq!(Player::One.to_slot(), Slot::One);
        assert_eq!(Player::Two.to_slot(), Slot::Two);
        assert_eq!(Player::One.to_slot().owner(), Some(Player::One));
    }

    #[test]
    fn test_player_names() {
        assert_eq!(Player::One.default_name(), "Player 1");
        assert_eq!(Player::Two.default_name(), "Player 2");
        assert_eq!(Player::Two.number(), 2);
    }
}
