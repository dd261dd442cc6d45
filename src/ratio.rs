//! Exact integer quotients, rounded only when a number leaves the crate.

use gcd::Gcd;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) struct Ratio {
    numer: i64,
    denom: u64,
}

impl Ratio {
    /// Returns `None` for a zero denominator; callers decide what an undefined quotient means.
    pub(crate) fn new(numer: i64, denom: u64) -> Option<Ratio> {
        if denom == 0 {
            return None;
        }
        let gcd = numer.unsigned_abs().gcd(denom);
        Some(Ratio {
            numer: numer / (gcd as i64),
            denom: denom / gcd,
        })
    }

    pub(crate) fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Multiplies by an integer factor, `None` on overflow.
    pub(crate) fn scale(self, factor: i64) -> Option<Ratio> {
        let numer = self.numer.checked_mul(factor)?;
        Ratio::new(numer, self.denom)
    }

    /// Nearest integer, halves away from zero.
    fn round(self) -> i64 {
        let numer = self.numer.unsigned_abs();
        let quo = numer / self.denom;
        let rem = numer % self.denom;

        let result = match (rem.cmp(&(self.denom >> 1)), self.denom & 1 == 0) {
            (Ordering::Greater, _) | (Ordering::Equal, true) => quo + 1,
            _ => quo,
        } as i64;

        result * self.numer.signum()
    }

    /// Rounds to `places` decimal places and converts to a float.
    pub(crate) fn to_places(self, places: u32) -> f64 {
        let mult = 10_i64.pow(places);
        match self.scale(mult) {
            Some(scaled) => scaled.round() as f64 / mult as f64,
            // sums this large never come out of a game log, but stay total anyway
            None => (self.to_f64() * mult as f64).round() / mult as f64,
        }
    }
}
