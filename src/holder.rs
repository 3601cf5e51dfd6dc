use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds a single signed integer that can be read, replaced, or accumulated.
///
/// Accumulation wraps on overflow in every build profile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueHolder {
    value: i32,
}

impl ValueHolder {
    /// Creates a holder with the given initial value.
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// Returns the held value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Replaces the held value.
    pub fn set_value(&mut self, value: i32) {
        trace!("Replacing value {} with {}", self.value, value);
        self.value = value;
    }

    /// Adds `amount` to the held value and returns the result.
    pub fn add(&mut self, amount: i32) -> i32 {
        let previous = self.value;
        self.value = previous.wrapping_add(amount);
        trace!("Added {} to {}, now {}", amount, previous, self.value);
        self.value
    }
}

impl From<i32> for ValueHolder {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ValueHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_wraps_past_max() {
        let mut holder = ValueHolder::new(i32::MAX);
        assert_eq!(holder.add(1), i32::MIN);
        assert_eq!(holder.value(), i32::MIN);
    }

    #[test]
    fn test_add_wraps_past_min() {
        let mut holder = ValueHolder::new(i32::MIN);
        assert_eq!(holder.add(-1), i32::MAX);
        assert_eq!(holder.value(), i32::MAX);
    }

    #[test]
    fn test_default_holds_zero() {
        assert_eq!(ValueHolder::default(), ValueHolder::new(0));
    }
}
