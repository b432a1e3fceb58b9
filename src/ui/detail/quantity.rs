use std::fmt;

/// Order quantity on the detail screen, always within
/// [`Quantity::MIN`]..=[`Quantity::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Clamp any value into range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::new(i64::from(self.0) + 1)
    }

    pub fn decrement(self) -> Self {
        Self::new(i64::from(self.0) - 1)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        assert_eq!(Quantity::default().get(), 1);
    }

    #[test]
    fn stepper_is_clamped() {
        let q = Quantity::default().increment();
        assert_eq!(q.get(), 2);
        assert_eq!(q.decrement().decrement().decrement().get(), 1);

        let mut q = Quantity::default();
        for _ in 0..15 {
            q = q.increment();
        }
        assert_eq!(q.get(), 10);
    }

    #[test]
    fn new_clamps_out_of_range() {
        assert_eq!(Quantity::new(0).get(), 1);
        assert_eq!(Quantity::new(-3).get(), 1);
        assert_eq!(Quantity::new(11).get(), 10);
        assert_eq!(Quantity::new(7).get(), 7);
    }
}
