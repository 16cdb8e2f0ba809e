//! String-interned identifiers for diagram nodes.
//!
//! Node identifiers are referenced from relations, topology edges, and the
//! DOT exporter. Interning makes [`Id`] a `Copy` value that is cheap to
//! compare and hash while still resolving back to its original text.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultSymbol, StringInterner, backend::DefaultBackend};

type Interner = StringInterner<DefaultBackend>;

static INTERNER: OnceLock<Mutex<Interner>> = OnceLock::new();

fn interner() -> &'static Mutex<Interner> {
    INTERNER.get_or_init(|| Mutex::new(Interner::default()))
}

/// A string-interned identifier for a diagram node.
///
/// Interning the same string twice yields equal identifiers, so an `Id`
/// created where a node is declared compares equal to an `Id` created where
/// a relation references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("identifier interner poisoned");
        Id(interner.get_or_intern(name))
    }

    /// Resolves the identifier back to its original text.
    pub fn resolve(&self) -> String {
        let interner = interner().lock().expect("identifier interner poisoned");
        interner
            .resolve(self.0)
            .expect("symbol was created by Id::new")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}
