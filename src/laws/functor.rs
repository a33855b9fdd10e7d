//! Functor law scenarios for `Maybe`.

use std::io::Write;

use super::error::HarnessError;
use super::fixtures::{Endo, increment, multiply};
use super::law::Law;
use super::verifier::Verifier;
use crate::compose::identity;
use crate::control::Maybe;
use crate::{compose, curry2};
use crate::typeclass::Functor;

struct IdentityScenario {
    label: &'static str,
    x: Maybe<i32>,
}

const IDENTITY_SCENARIOS: [IdentityScenario; 2] = [
    IdentityScenario {
        label: "x = Nothing",
        x: Maybe::Nothing,
    },
    IdentityScenario {
        label: "x = Just(1)",
        x: Maybe::Just(1),
    },
];

struct CompositionScenario<'a> {
    label: &'static str,
    f: Endo<'a>,
    g: Endo<'a>,
    x: Maybe<i32>,
}

/// Checks `fmap id = id` and `fmap (f . g) = fmap f . fmap g`.
///
/// # Errors
///
/// Stops at the first scenario whose sides differ, or at the first failed
/// write.
pub fn verify<W: Write>(verifier: &mut Verifier<W>) -> Result<(), HarnessError> {
    verifier.announce(Law::FunctorIdentity)?;
    for scenario in &IDENTITY_SCENARIOS {
        verifier.check(
            Law::FunctorIdentity,
            scenario.label,
            &scenario.x.fmap(identity),
            &identity(scenario.x),
        )?;
    }

    let times_eight = curry2!(multiply)(8);
    let composition_scenarios = [
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

    verifier.announce(Law::FunctorComposition)?;
    for scenario in &composition_scenarios {
        verifier.check(
            Law::FunctorComposition,
            scenario.label,
            &scenario.x.fmap(compose!(scenario.f, scenario.g)),
            &scenario.x.fmap(scenario.g).fmap(scenario.f),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_functor_scenario_holds() {
        let mut output = Vec::new();
        let mut verifier = Verifier::new(&mut output);

        verify(&mut verifier).unwrap();

        assert_eq!(verifier.assertions(), 4);
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(
            printed.lines().collect::<Vec<_>>(),
            vec![Law::FunctorIdentity.statement(), Law::FunctorComposition.statement()]
        );
    }

    #[rstest]
    fn composition_scenarios_reach_expected_values() {
        let times_eight = curry2!(multiply)(8);
        let composed = Maybe::Just(1).fmap(compose!(increment, &times_eight));
        assert_eq!(composed, Maybe::Just(9));
        assert_eq!(Maybe::Nothing.fmap(compose!(increment, &times_eight)), Maybe::Nothing);
    }
}
