//! Eager pipeline that returns a new wrapper at every step.

use std::fmt;

/// A value flowing through a chain of functions, one new wrapper per step.
///
/// [`then`](Pipe::then) applies a function right away and returns a fresh
/// `Pipe` holding the result. The receiver keeps its value, so a pipeline
/// prefix can be shared by several continuations.
///
/// Because the receiver survives, `then` hands each step a clone of the held
/// value and needs `T: Clone`. [`map`](Pipe::map) consumes the wrapper
/// instead, so values that cannot be cloned flow through it without copies.
///
/// # Examples
///
/// ```rust
/// use pipekit::eager::Pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn to_text(x: i32) -> String { x.to_string() }
///
/// let prefix = Pipe::new(2).then(add_one);
/// let as_number = prefix.then(|x| x * 10);
/// let as_text = prefix.then(to_text);
///
/// assert_eq!(*as_number.get(), 30);
/// assert_eq!(as_text.get(), "3");
/// assert_eq!(*prefix.get(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pipe<T> {
    value: T,
}

impl<T> Pipe<T> {
    /// Starts a pipeline at `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Applies `function` to a copy of the held value and wraps the result.
    ///
    /// The receiver is not modified. A panic in `function` propagates
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipekit::eager::Pipe;
    ///
    /// let original = Pipe::new(String::from("abc"));
    /// let length = original.then(|text| text.len());
    /// assert_eq!(*length.get(), 3);
    /// assert_eq!(original.get(), "abc");
    /// ```
    #[inline]
    pub fn then<U, F>(&self, function: F) -> Pipe<U>
    where
        T: Clone,
        F: FnOnce(T) -> U,
    {
        Pipe::new(function(self.value.clone()))
    }

    /// Applies `function` to the held value, consuming the wrapper.
    ///
    /// The linear counterpart of [`then`](Pipe::then): no clone is made, so
    /// `T` need not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipekit::eager::Pipe;
    ///
    /// struct Token(u32);
    ///
    /// let next = Pipe::new(Token(1)).map(|Token(id)| Token(id + 1));
    /// assert_eq!(next.into_inner().0, 2);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe::new(function(self.value))
    }

    /// Applies a fallible `function`, returning its error as-is.
    ///
    /// # Errors
    ///
    /// Returns whatever error `function` returns; the receiver is unchanged
    /// either way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipekit::eager::Pipe;
    ///
    /// let text = Pipe::new("42");
    /// let number = text.try_then(str::parse::<i32>).unwrap();
    /// assert_eq!(*number.get(), 42);
    ///
    /// let broken = Pipe::new("forty-two");
    /// assert!(broken.try_then(str::parse::<i32>).is_err());
    /// ```
    #[inline]
    pub fn try_then<U, E, F>(&self, function: F) -> Result<Pipe<U>, E>
    where
        T: Clone,
        F: FnOnce(T) -> Result<U, E>,
    {
        function(self.value.clone()).map(Pipe::new)
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

impl<T> From<T> for Pipe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Pipe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Pipe").field(&self.value).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Pipe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Pipe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

static_assertions::assert_impl_all!(Pipe<i32>: Send, Sync, Clone, Copy);
