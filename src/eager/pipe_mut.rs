//! Eager pipeline that updates its value in place.

use std::fmt;

/// A value flowing through a chain of same-type functions, updated in place.
///
/// [`then`](PipeMut::then) applies a function to the held value, stores the
/// result back into the same wrapper and returns that wrapper, so calls can be
/// chained. Every step maps `T` to `T`; a type-changing chain needs [`Pipe`](super::Pipe).
///
/// Steps receive the held value by value. Stepping requires `T: Clone`: the
/// wrapper keeps its current value until a step returns, so a panicking or
/// failing step leaves it untouched.
///
/// Not meant to be mutated from several places at once.
///
/// # Examples
///
/// ```rust
/// use pipekit::eager::PipeMut;
///
/// let mut pipeline = PipeMut::new(2);
/// pipeline.then(|x| x + 1).then(|x| x * 10);
/// assert_eq!(*pipeline.get(), 30);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct PipeMut<T> {
    value: T,
}

impl<T> PipeMut<T> {
    /// Starts a pipeline at `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Applies `function` to the held value and stores the result in place.
    ///
    /// Returns the same wrapper for chaining. `function` receives a clone of
    /// the held value, so a panic in `function` propagates unchanged and
    /// leaves the held value as it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipekit::eager::PipeMut;
    ///
    /// fn add_one(x: i32) -> i32 { x + 1 }
    ///
    /// let mut counter = PipeMut::new(2);
    /// counter.then(add_one).then(add_one);
    /// assert_eq!(*counter.get(), 4);
    ///
    /// let mut text = PipeMut::new(String::from("cab"));
    /// text.then(|value| {
    ///     let mut characters: Vec<char> = value.chars().collect();
    ///     characters.sort_unstable();
    ///     characters.into_iter().collect()
    /// });
    /// assert_eq!(text.get(), "abc");
    /// ```
    #[inline]
    pub fn then<F>(&mut self, function: F) -> &mut Self
    where
        T: Clone,
        F: FnOnce(T) -> T,
    {
        self.value = function(self.value.clone());
        self
    }

    /// Applies a fallible `function`, storing the result only on success.
    ///
    /// # Errors
    ///
    /// Returns whatever error `function` returns; the held value is left
    /// unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipekit::eager::PipeMut;
    ///
    /// let mut counter = PipeMut::new(250_u8);
    /// assert!(counter.try_then(|value| value.checked_add(5).ok_or("overflow")).is_ok());
    /// assert_eq!(counter.try_then(|value| value.checked_add(1).ok_or("overflow")).err(), Some("overflow"));
    /// assert_eq!(*counter.get(), 255);
    /// ```
    #[inline]
    pub fn try_then<E, F>(&mut self, function: F) -> Result<&mut Self, E>
    where
        T: Clone,
        F: FnOnce(T) -> Result<T, E>,
    {
        self.value = function(self.value.clone())?;
        Ok(self)
    }

    /// Returns a reference to the current value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Consumes the pipeline and returns the current value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for PipeMut<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for PipeMut<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("PipeMut").field(&self.value).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PipeMut<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for PipeMut<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_then_returns_the_same_wrapper() {
        let mut pipeline = PipeMut::new(1);
        let address = std::ptr::from_ref(&pipeline);
        let returned = pipeline.then(|x| x + 1);
        assert!(std::ptr::eq(address, std::ptr::from_ref(returned)));
    }

    #[test]
    fn test_chained_steps_accumulate() {
        let mut pipeline = PipeMut::new(String::from("a"));
        pipeline
            .then(|text| format!("{text}b"))
            .then(|text| format!("{text}c"));
        assert_eq!(pipeline.into_inner(), "abc");
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", PipeMut::new("x")), "PipeMut(\"x\")");
    }

    #[test]
    fn test_then_accepts_plain_functions() {
        fn add_one(x: i32) -> i32 {
            x + 1
        }

        let mut pipeline = PipeMut::new(2);
        pipeline.then(add_one);
        assert_eq!(*pipeline.get(), 3);
    }

    #[test]
    fn test_panicking_step_keeps_value() {
        let mut pipeline = PipeMut::new(String::from("kept"));
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            pipeline.then(|_| panic!("stage failed"));
        }));
        assert!(outcome.is_err());
        assert_eq!(pipeline.get(), "kept");
    }

    #[test]
    fn test_try_then_error_keeps_value() {
        let mut pipeline = PipeMut::new(10);
        let result = pipeline.try_then(|_| Err::<i32, _>("rejected"));
        assert_eq!(result.err(), Some("rejected"));
        assert_eq!(*pipeline.get(), 10);
    }
}
