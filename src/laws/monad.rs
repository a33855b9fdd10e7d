//! Monad law scenarios for `Maybe`.

use std::io::Write;

use super::error::HarnessError;
use super::fixtures::{Kleisli, always_just_one, always_nothing, just_incremented};
use super::law::Law;
use super::verifier::Verifier;
use crate::control::Maybe;
use crate::typeclass::Monad;

type Lift = Maybe<()>;

struct LeftIdentityScenario {
    label: &'static str,
    x: i32,
    f: Kleisli,
}

const LEFT_IDENTITY_SCENARIOS: [LeftIdentityScenario; 2] = [
    LeftIdentityScenario {
        label: "x = 1, f = const Nothing",
        x: 1,
        f: always_nothing,
    },
    LeftIdentityScenario {
        label: "x = 1, f = Just . inc",
        x: 1,
        f: just_incremented,
    },
];

struct RightIdentityScenario {
    label: &'static str,
    m: Maybe<i32>,
}

const RIGHT_IDENTITY_SCENARIOS: [RightIdentityScenario; 2] = [
    RightIdentityScenario {
        label: "m = Just(1)",
        m: Maybe::Just(1),
    },
    RightIdentityScenario {
        label: "m = Nothing",
        m: Maybe::Nothing,
    },
];

struct AssociativityScenario {
    label: &'static str,
    m: Maybe<i32>,
    f: Kleisli,
    g: Kleisli,
}

const ASSOCIATIVITY_SCENARIOS: [AssociativityScenario; 8] = [
    AssociativityScenario {
        label: "m = Nothing, f = const Nothing, g = const Nothing",
        m: Maybe::Nothing,
        f: always_nothing,
        g: always_nothing,
    },
    AssociativityScenario {
        label: "m = Nothing, f = const Nothing, g = const Just(1)",
        m: Maybe::Nothing,
        f: always_nothing,
        g: always_just_one,
    },
    AssociativityScenario {
        label: "m = Nothing, f = const Just(1), g = const Nothing",
        m: Maybe::Nothing,
        f: always_just_one,
        g: always_nothing,
    },
    AssociativityScenario {
        label: "m = Nothing, f = const Just(1), g = const Just(1)",
        m: Maybe::Nothing,
        f: always_just_one,
        g: always_just_one,
    },
    AssociativityScenario {
        label: "m = Just(1), f = const Nothing, g = const Nothing",
        m: Maybe::Just(1),
        f: always_nothing,
        g: always_nothing,
    },
    AssociativityScenario {
        label: "m = Just(1), f = const Nothing, g = const Just(1)",
        m: Maybe::Just(1),
        f: always_nothing,
        g: always_just_one,
    },
    AssociativityScenario {
        label: "m = Just(1), f = const Just(1), g = const Nothing",
        m: Maybe::Just(1),
        f: always_just_one,
        g: always_nothing,
    },
    AssociativityScenario {
        label: "m = Just(1), f = const Just(1), g = const Just(1)",
        m: Maybe::Just(1),
        f: always_just_one,
        g: always_just_one,
    },
];

/// Checks left identity, right identity and associativity of `flat_map`.
///
/// # Errors
///
/// Stops at the first scenario whose sides differ, or at the first failed
/// write.
pub fn verify<W: Write>(verifier: &mut Verifier<W>) -> Result<(), HarnessError> {
    verifier.announce(Law::MonadLeftIdentity)?;
    for scenario in &LEFT_IDENTITY_SCENARIOS {
        verifier.check(
            Law::MonadLeftIdentity,
            scenario.label,
            &Lift::r#return(scenario.x).flat_map(scenario.f),
            &(scenario.f)(scenario.x),
        )?;
    }

    verifier.announce(Law::MonadRightIdentity)?;
    for scenario in &RIGHT_IDENTITY_SCENARIOS {
        verifier.check(
            Law::MonadRightIdentity,
            scenario.label,
            &scenario.m.flat_map(Lift::r#return::<i32>),
            &scenario.m,
        )?;
    }

    verifier.announce(Law::MonadAssociativity)?;
    for scenario in &ASSOCIATIVITY_SCENARIOS {
        let (f, g) = (scenario.f, scenario.g);
        verifier.check(
            Law::MonadAssociativity,
            scenario.label,
            &scenario.m.flat_map(f).flat_map(g),
            &scenario.m.flat_map(|x| f(x).flat_map(g)),
        )?;
    }

    Ok(())
}
