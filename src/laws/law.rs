//! The catalogue of laws the harness checks.

use std::fmt;

/// One algebraic law of the Functor, Applicative or Monad type class.
///
/// The [`Display`](fmt::Display) form is the human-readable statement printed
/// before the law's scenarios run.
///
/// # Examples
///
/// ```rust
/// use maybe_laws::laws::Law;
///
/// assert_eq!(
///     Law::FunctorIdentity.to_string(),
///     "Functor Law #1 (Identity): fmap id = id"
/// );
/// assert_eq!(Law::ALL.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `fmap id = id`
    FunctorIdentity,
    /// `fmap (f . g) = fmap f . fmap g`
    FunctorComposition,
    /// `pure id <*> x = x`
    ApplicativeIdentity,
    /// `pure f <*> pure x = pure (f x)`
    ApplicativeHomomorphism,
    /// `u <*> pure y = pure ($ y) <*> u`
    ApplicativeInterchange,
    /// `f <*> (g <*> x) = pure (.) <*> f <*> g <*> x`
    ApplicativeComposition,
    /// `pure f <*> x = fmap f x`
    ApplicativeFunctorConsistency,
    /// `return x >>= f = f x`
    MonadLeftIdentity,
    /// `m >>= return = m`
    MonadRightIdentity,
    /// `(m >>= f) >>= g = m >>= (\x -> f x >>= g)`
    MonadAssociativity,
}

impl Law {
    /// Every law, in the order the harness checks them.
    pub const ALL: [Self; 10] = [
        Self::FunctorIdentity,
        Self::FunctorComposition,
        Self::ApplicativeIdentity,
        Self::ApplicativeHomomorphism,
        Self::ApplicativeInterchange,
        Self::ApplicativeComposition,
        Self::ApplicativeFunctorConsistency,
        Self::MonadLeftIdentity,
        Self::MonadRightIdentity,
        Self::MonadAssociativity,
    ];

    /// The law's name and statement.
    #[must_use]
    pub const fn statement(self) -> &'static str {
        match self {
            Self::FunctorIdentity => "Functor Law #1 (Identity): fmap id = id",
            Self::FunctorComposition => {
                "Functor Law #2 (Composition): fmap (f . g) = fmap f . fmap g"
            }
            Self::ApplicativeIdentity => "Applicative Functor Law #1 (Identity): pure id <*> x = x",
            Self::ApplicativeHomomorphism => {
                "Applicative Functor Law #2 (Homomorphism): pure f <*> pure x = pure (f x)"
            }
            Self::ApplicativeInterchange => {
                "Applicative Functor Law #3 (Interchange): u <*> pure y = pure ($ y) <*> u"
            }
            Self::ApplicativeComposition => {
                "Applicative Functor Law #4 (Composition): f <*> (g <*> x) = pure (.) <*> f <*> g <*> x"
            }
            Self::ApplicativeFunctorConsistency => {
                "Applicative Functor Law #5: pure f <*> x = fmap f x"
            }
            Self::MonadLeftIdentity => "Monad law #1 (Left Identity): return x >>= f = f x",
            Self::MonadRightIdentity => "Monad law #2 (Right Identity): m >>= return = m",
            Self::MonadAssociativity => {
                "Monad law #3 (Associativity): (m >>= f) >>= g = m >>= (\\x -> f x >>= g)"
            }
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.statement())
    }
}
