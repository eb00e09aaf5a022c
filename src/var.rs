use std::fmt;

pub const NEGATION: char = '!';

/// A propositional variable, possibly negated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lit {
    negated: bool,
    name: String,
}

impl Lit {
    pub fn pos(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            negated: false,
        }
    }

    pub fn neg(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            negated: true,
        }
    }

    /// Reads a single token: a leading `!` negates the rest, which must not be empty.
    ///
    /// Only one `!` is consumed, so `!!P` yields the negation of a variable named `!P`.
    pub fn parse(token: &str) -> Option<Self> {
        let (negated, name) = match token.strip_prefix(NEGATION) {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_owned(),
            negated,
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn negate(&self) -> Self {
        Self {
            name: self.name.clone(),
            negated: !self.negated,
        }
    }

    /// Same variable, opposite polarity.
    pub fn is_complementary(&self, other: &Lit) -> bool {
        self.name == other.name && self.negated != other.negated
    }

    /// Whether the name is an identifier (`[A-Za-z_][A-Za-z0-9_]*`) as the file format expects.
    pub fn is_well_formed(&self) -> bool {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{NEGATION}")?;
        }
        write!(f, "{}", self.name)
    }
}
