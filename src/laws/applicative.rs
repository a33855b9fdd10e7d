//! Applicative law scenarios for `Maybe`.
//!
//! `Lift` is `Maybe<()>`, used only to name `pure` for the `Maybe`
//! constructor: `Lift::pure(x)` is `Maybe::Just(x)`.

use std::io::Write;

use super::error::HarnessError;
use super::fixtures::{Endo, increment, increment_within, multiply};
use super::law::Law;
use super::verifier::Verifier;
use crate::compose::{apply, compose, flip, identity};
use crate::control::Maybe;
use crate::curry2;
use crate::typeclass::{Applicative, Functor};

type Lift = Maybe<()>;

struct ValueScenario {
    label: &'static str,
    x: Maybe<i32>,
}

const VALUE_SCENARIOS: [ValueScenario; 2] = [
    ValueScenario {
        label: "x = Nothing",
        x: Maybe::Nothing,
    },
    ValueScenario {
        label: "x = Just(1)",
        x: Maybe::Just(1),
    },
];

struct HomomorphismScenario {
    label: &'static str,
    f: fn(Maybe<i32>) -> Maybe<i32>,
    x: Maybe<i32>,
}

const HOMOMORPHISM_SCENARIOS: [HomomorphismScenario; 2] = [
    HomomorphismScenario {
        label: "f = fmap inc, x = Nothing",
        f: increment_within,
        x: Maybe::Nothing,
    },
    HomomorphismScenario {
        label: "f = fmap inc, x = Just(1)",
        f: increment_within,
        x: Maybe::Just(1),
    },
];

struct InterchangeScenario<'a> {
    label: &'static str,
    u: Maybe<Endo<'a>>,
    y: i32,
}

struct CompositionScenario<'a> {
    label: &'static str,
    f: Endo<'a>,
    g: Endo<'a>,
    x: Maybe<i32>,
}

struct ConsistencyScenario<'a> {
    label: &'static str,
    f: Endo<'a>,
    x: Maybe<i32>,
}

/// Checks the identity, homomorphism, interchange, composition and
/// Functor-consistency laws, in that order.
///
/// # Errors
///
/// Stops at the first scenario whose sides differ, or at the first failed
/// write.
pub fn verify<W: Write>(verifier: &mut Verifier<W>) -> Result<(), HarnessError> {
    verify_identity(verifier)?;
    verify_homomorphism(verifier)?;
    verify_interchange(verifier)?;
    verify_composition(verifier)?;
    verify_functor_consistency(verifier)
}

fn verify_identity<W: Write>(verifier: &mut Verifier<W>) -> Result<(), HarnessError> {
    verifier.announce(Law::ApplicativeIdentity)?;
    for scenario in &VALUE_SCENARIOS {
        verifier.check(
            Law::ApplicativeIdentity,
            scenario.label,
            &Lift::pure(identity::<i32>).apply(scenario.x),
            &scenario.x,
        )?;
    }
    Ok(())
}

fn verify_homomorphism<W: Write>(verifier: &mut Verifier<W>) -> Result<(), HarnessError> {
    verifier.announce(Law::ApplicativeHomomorphism)?;
    for scenario in &HOMOMORPHISM_SCENARIOS {
        verifier.check(
            Law::ApplicativeHomomorphism,
            scenario.label,
            &Lift::pure(scenario.f).apply(Lift::pure(scenario.x)),
            &Lift::pure((scenario.f)(scenario.x)),
        )?;
    }
    Ok(())
}

fn verify_interchange<W: Write>(verifier: &mut Verifier<W>) -> Result<(), HarnessError> {
    let scenarios = [
        InterchangeScenario {
            label: "u = Nothing, y = 1",
            u: Maybe::Nothing,
            y: 1,
        },
        InterchangeScenario {
            label: "u = Just(inc), y = 1",
            u: Maybe::Just(&increment),
            y: 1,
        },
    ];

    verifier.announce(Law::ApplicativeInterchange)?;
    for scenario in &scenarios {
        // ($ y): flip apply, with y fixed as the argument
        let apply_to_y = curry2!(flip(apply::<i32, i32, Endo<'_>>))(scenario.y);
        verifier.check(
            Law::ApplicativeInterchange,
            scenario.label,
            &scenario.u.apply(Lift::pure(scenario.y)),
            &Lift::pure(apply_to_y).apply(scenario.u),
        )?;
    }
    Ok(())
}

fn verify_composition<W: Write>(verifier: &mut Verifier<W>) -> Result<(), HarnessError> {
    let times_eight = curry2!(multiply)(8);
    let scenarios = [
        CompositionScenario {
            label: "f = inc, g = multiply(8), x = Nothing",
            f: &increment,
            g: &times_eight,
            x: Maybe::Nothing,
        },
        CompositionScenario {
            label: "f = inc, g = multiply(8), x = Just(1)",
            f: &increment,
            g: &times_eight,
            x: Maybe::Just(1),
        },
    ];

    // (.) curried: f -> g -> f . g
    let curried_compose = curry2!(compose::<i32, i32, i32, Endo<'_>, Endo<'_>>);

    verifier.announce(Law::ApplicativeComposition)?;
    for scenario in &scenarios {
        verifier.check(
            Law::ApplicativeComposition,
            scenario.label,
            &Lift::pure(curried_compose.clone())
                .apply(Maybe::Just(scenario.f))
                .apply(Maybe::Just(scenario.g))
                .apply(scenario.x),
            &Maybe::Just(scenario.f).apply(Maybe::Just(scenario.g).apply(scenario.x)),
        )?;
    }
    Ok(())
}

fn verify_functor_consistency<W: Write>(verifier: &mut Verifier<W>) -> Result<(), HarnessError> {
    let scenarios = [
        ConsistencyScenario {
            label: "f = inc, x = Nothing",
            f: &increment,
            x: Maybe::Nothing,
        },
        ConsistencyScenario {
            label: "f = inc, x = Just(1)",
            f: &increment,
            x: Maybe::Just(1),
        },
    ];

    verifier.announce(Law::ApplicativeFunctorConsistency)?;
    for scenario in &scenarios {
        verifier.check(
            Law::ApplicativeFunctorConsistency,
            scenario.label,
            &Lift::pure(scenario.f).apply(scenario.x),
            &scenario.x.fmap(scenario.f),
        )?;
    }
    Ok(())
}
