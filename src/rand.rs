use crate::error::LcgError;

/// Linear Congruential Generator
///
/// Xi+1 = (a x Xi + c) mod m
///
/// here state is Xi. The seed is only the starting state, it is never emitted.
#[derive(Debug, Clone)]
pub struct Lcg {
    a: i64,
    c: i64,
    modulus: i64,
    state: i64,
}

/// Shape of the state orbit: `tail` values are emitted before the cycle is
/// entered, after which the values repeat every `length` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub tail: u64,
    pub length: u64,
}

impl Lcg {
    pub fn new(a: i64, c: i64, modulus: i64, seed: i64) -> Result<Lcg, LcgError> {
        if modulus <= 0 {
            return Err(LcgError::InvalidParameter {
                name: "modulus",
                value: modulus,
                reason: "must be positive",
            });
        }
        Ok(Lcg {
            a,
            c,
            modulus,
            state: seed,
        })
    }

    /// Advances the state once and returns the new value, always in `[0, modulus)`.
    pub fn next_value(&mut self) -> i64 {
        self.state = self.apply(self.state);
        self.state
    }

    // Widened to i128 so a * x + c cannot overflow for any i64 inputs.
    fn apply(&self, x: i64) -> i64 {
        let next = (self.a as i128 * x as i128 + self.c as i128).rem_euclid(self.modulus as i128);
        next as i64
    }

    /// Measures tail and cycle length of the values this generator would emit
    /// next, without advancing it.
    ///
    /// Uses Brent's cycle detection, so memory stays constant however large
    /// the modulus is. Time is proportional to `tail + length`, which can be as
    /// large as the modulus, so the search gives up and returns `None` once it
    /// has taken `limit` steps without closing the cycle.
    pub fn period(&self, limit: u64) -> Option<Period> {
        let start = self.apply(self.state);

        let mut power = 1u64;
        let mut length = 1u64;
        let mut steps = 1u64;
        let mut tortoise = start;
        let mut hare = self.apply(start);
        while tortoise != hare {
            if steps >= limit {
                log::debug!("No cycle found within {limit} steps (m={})", self.modulus);
                return None;
            }
            if power == length {
                tortoise = hare;
                power *= 2;
                length = 0;
            }
            hare = self.apply(hare);
            length += 1;
            steps += 1;
        }

        let mut tortoise = start;
        let mut hare = start;
        for _ in 0..length {
            hare = self.apply(hare);
        }
        let mut tail = 0u64;
        while tortoise != hare {
            tortoise = self.apply(tortoise);
            hare = self.apply(hare);
            tail += 1;
        }

        Some(Period { tail, length })
    }
}

impl Iterator for Lcg {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(self.next_value())
    }
}

/// Produces `count` values of the recurrence x <- (a * x + c) mod modulus,
/// starting from `seed`. The seed itself is not part of the output.
///
/// Fails before generating anything when `modulus <= 0` or `count < 0`.
pub fn generate(a: i64, c: i64, modulus: i64, count: i64, seed: i64) -> Result<Vec<i64>, LcgError> {
    let lcg = Lcg::new(a, c, modulus, seed)?;
    if count < 0 {
        return Err(LcgError::InvalidParameter {
            name: "count",
            value: count,
            reason: "must not be negative",
        });
    }
    let count = usize::try_from(count).map_err(|_| LcgError::InvalidParameter {
        name: "count",
        value: count,
        reason: "too large for this platform",
    })?;

    log::debug!("Generating {count} values: a={a} c={c} m={modulus} x0={seed}");
    let values = lcg
        .take(count)
        .inspect(|x| log::trace!("x = {x}"))
        .collect();
    Ok(values)
}
