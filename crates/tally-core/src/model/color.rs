use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Yellow = 1,
    Green = 2,
    Blue = 3,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Color::Red),
            1 => Some(Color::Yellow),
            2 => Some(Color::Green),
            3 => Some(Color::Blue),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive match against the four color names.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("red") {
            Some(Color::Red)
        } else if token.eq_ignore_ascii_case("yellow") {
            Some(Color::Yellow)
        } else if token.eq_ignore_ascii_case("green") {
            Some(Color::Green)
        } else if token.eq_ignore_ascii_case("blue") {
            Some(Color::Blue)
        } else {
            None
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
