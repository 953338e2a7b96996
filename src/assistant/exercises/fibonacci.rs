use crate::error::{BotError, Result};

/// Memoized Fibonacci numbers.
///
/// The cache is a plain vector indexed by `n`. Filling it bottom-up means a
/// large first request never recurses.
#[derive(Debug, Clone)]
pub struct FibonacciCache {
    values: Vec<u128>,
}

impl Default for FibonacciCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciCache {
    pub fn new() -> Self {
        Self { values: vec![0, 1] }
    }

    /// The `n`-th Fibonacci number, with `fib(0) == 0` and `fib(1) == 1`.
    ///
    /// Fails with `Overflow` past `n == 186`, the last value that fits in a `u128`.
    pub fn get(&mut self, n: u64) -> Result<u128> {
        let index = usize::try_from(n).map_err(|_| BotError::Overflow(n))?;

        while self.values.len() <= index {
            let len = self.values.len();
            let next = self.values[len - 1]
                .checked_add(self.values[len - 2])
                .ok_or(BotError::Overflow(n))?;
            self.values.push(next);
        }

        Ok(self.values[index])
    }
}

/// Lazy Fibonacci values: 0, 1, 1, 2, 3, 5, …
///
/// Ends instead of overflowing, so `collect()` on it terminates. Build a new
/// one to start over.
#[derive(Debug, Clone)]
pub struct FibonacciSequence {
    current: Option<u128>,
    following: Option<u128>,
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciSequence {
    pub fn new() -> Self {
        Self {
            current: Some(0),
            following: Some(1),
        }
    }
}

impl Iterator for FibonacciSequence {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let value = self.current.take()?;
        self.current = self.following;
        self.following = self.following.and_then(|f| f.checked_add(value));
        Some(value)
    }
}
