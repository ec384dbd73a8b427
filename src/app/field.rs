/// Focusable controls, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Uppercase,
    Symbols,
    Numbers,
    Generate,
    Copy,
}

impl Field {
    pub const ORDER: [Field; 6] = [
        Field::Length,
        Field::Uppercase,
        Field::Symbols,
        Field::Numbers,
        Field::Generate,
        Field::Copy,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    pub fn is_toggle(self) -> bool {
        matches!(self, Field::Uppercase | Field::Symbols | Field::Numbers)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Length => "Length    :",
            Field::Uppercase => "Uppercase :",
            Field::Symbols => "Symbols   :",
            Field::Numbers => "Numbers   :",
            Field::Generate => "GENERATE \u{2192}",
            Field::Copy => "Copy \u{2192}",
        }
    }
}
