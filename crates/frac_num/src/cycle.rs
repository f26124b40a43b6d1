//! Floyd cycle detection over iterated step functions.
//!
//! Works on any eventually-periodic sequence without materializing it.
//! The step closure is fallible so callers can thread checked arithmetic
//! through the walk.

/// Location of the first cycle: `start` steps of lead-in, then a block
/// of `len` states that repeats forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub start: usize,
    pub len: usize,
}

/// Tortoise-and-hare over the sequence `seed, step(seed), ...`.
///
/// The sequence must be eventually periodic or the walk never ends.
pub fn find_cycle<T, E, F>(seed: &T, mut step: F) -> Result<Cycle, E>
where
    T: Clone + PartialEq,
    F: FnMut(&T) -> Result<T, E>,
{
    let mut tortoise = step(seed)?;
    let mut hare = step(&tortoise)?;
    while tortoise != hare {
        tortoise = step(&tortoise)?;
        hare = step(&hare)?;
        hare = step(&hare)?;
    }

    // The meeting point is a cycle-length multiple from the seed, so
    // walking both pointers at the same pace meets at the cycle start.
    let mut start = 0;
    let mut tortoise = seed.clone();
    while tortoise != hare {
        tortoise = step(&tortoise)?;
        hare = step(&hare)?;
        start += 1;
    }

    let mut len = 1;
    let mut hare = step(&tortoise)?;
    while tortoise != hare {
        hare = step(&hare)?;
        len += 1;
    }

    Ok(Cycle { start, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    // x -> x + 1 capped into a loop over [3, 7)
    fn capped(x: &u32) -> Result<u32, ()> {
        Ok(if *x >= 6 { 3 } else { x + 1 })
    }

    #[test]
    fn finds_lead_in_and_period() {
        let cycle = find_cycle(&0u32, capped).unwrap();
        assert_eq!(cycle, Cycle { start: 3, len: 4 });
    }

    #[test]
    fn fixed_point_is_a_unit_cycle() {
        let cycle = find_cycle(&5u32, |_| Ok::<u32, ()>(5)).unwrap();
        assert_eq!(cycle, Cycle { start: 0, len: 1 });
    }

    #[test]
    fn errors_bubble_out() {
        let result = find_cycle(&0u32, |x| if *x > 2 { Err("boom") } else { Ok(x + 1) });
        assert_eq!(result, Err("boom"));
    }
}
