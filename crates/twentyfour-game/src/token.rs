use std::fmt::{self, Display};

use twentyfour_core::format_value;

/// Identifies a number token within a session.
///
/// Ids are distinct from values: two tokens may hold the same value and still
/// be told apart by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(u64);

impl TokenId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out [`TokenId`]s in increasing order.
///
/// An allocator never returns the same id twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenIdAllocator {
    next: u64,
}

impl TokenIdAllocator {
    /// Creates an allocator starting at id 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns a fresh id.
    pub fn allocate(&mut self) -> TokenId {
        let id = TokenId(self.next);
        self.next += 1;
        id
    }

    /// Returns the id the next call to [`allocate`](Self::allocate) will hand out.
    #[must_use]
    pub const fn peek(&self) -> TokenId {
        TokenId(self.next)
    }
}

/// A number in play.
///
/// The label records how the value was built, for example `"(8 ÷ 3)"`. It is
/// display data only; arithmetic always uses [`value`](Self::value).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    id: TokenId,
    value: f64,
    label: String,
}

impl Token {
    /// Creates a token labeled with its formatted value.
    #[must_use]
    pub fn new(id: TokenId, value: f64) -> Self {
        Self::with_label(id, value, format_value(value))
    }

    /// Creates a token with an explicit label.
    #[must_use]
    pub fn with_label(id: TokenId, value: f64, label: impl Into<String>) -> Self {
        Self {
            id,
            value,
            label: label.into(),
        }
    }

    /// Returns the token id.
    #[must_use]
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// Returns the numeric value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}
