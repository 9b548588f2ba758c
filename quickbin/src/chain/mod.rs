//! Combinators that let imperative code run inside a fluent chain.
//!
//! [`Chain`] is implemented for every type. Each combinator takes the receiver
//! by mutable reference, does its work, and hands back the very same
//! reference, so a chain of serializer writes can carry side effects,
//! branches and loops without being broken up into statements:
//!
//! ```
//! use quickbin::chain::Chain;
//! use quickbin::serialize::Serializer;
//!
//! # fn main() -> Result<(), quickbin::error::Error> {
//! let points = [(1u8, 2u8), (3, 4)];
//! let mut written = 0;
//! let mut serializer = Serializer::new();
//! serializer
//!     .write(points.len() as u32)?
//!     .try_for_each_with(&points, |s, &(x, y)| {
//!         s.write(x)?.write(y)?;
//!         Ok::<_, quickbin::error::Error>(())
//!     })?
//!     .try_when(points.is_empty(), |s| s.write(0u8).map(drop))?
//!     .then(|| written += 1);
//! assert_eq!(serializer.as_bytes(), &[2, 0, 0, 0, 1, 2, 3, 4]);
//! assert_eq!(written, 1);
//! # Ok(())
//! # }
//! ```
//!
//! The plain combinators take infallible actions. Their `try_` twins take
//! actions that return a [`Result`], stop at the first error and return it,
//! which is what you need when the action itself writes or reads.

mod production;

pub use production::{Produced, Production};

/// Fluent combinators available on every type.
pub trait Chain {
    /// Run `action` for its side effect.
    fn then(&mut self, action: impl FnOnce()) -> &mut Self {
        action();
        self
    }

    /// Fallible version of [`Chain::then`].
    fn try_then<E>(&mut self, action: impl FnOnce() -> Result<(), E>) -> Result<&mut Self, E> {
        action()?;
        Ok(self)
    }

    /// Store `value` in `variable`, which lives outside the chain.
    fn assign<T>(&mut self, value: T, variable: &mut T) -> &mut Self {
        *variable = value;
        self
    }

    /// End the chain with an unrelated `value`, dropping the receiver.
    fn output<T>(self, value: T) -> T
    where
        Self: Sized,
    {
        value
    }

    /// Run `action` on the receiver if `condition` holds.
    fn when(&mut self, condition: bool, action: impl FnOnce(&mut Self)) -> &mut Self {
        if condition {
            action(self);
        }
        self
    }

    /// Fallible version of [`Chain::when`].
    fn try_when<E>(&mut self, condition: bool, action: impl FnOnce(&mut Self) -> Result<(), E>) -> Result<&mut Self, E> {
        if condition {
            action(self)?;
        }
        Ok(self)
    }

    /// Run `action` on each of `values`, in order.
    fn for_each_value<I: IntoIterator>(&mut self, values: I, mut action: impl FnMut(I::Item)) -> &mut Self {
        for value in values {
            action(value);
        }
        self
    }

    /// Fallible version of [`Chain::for_each_value`].
    fn try_for_each_value<I: IntoIterator, E>(
        &mut self,
        values: I,
        mut action: impl FnMut(I::Item) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        for value in values {
            action(value)?;
        }
        Ok(self)
    }

    /// Run `action` on the receiver and each of `values`, in order.
    fn for_each_with<I: IntoIterator>(&mut self, values: I, mut action: impl FnMut(&mut Self, I::Item)) -> &mut Self {
        for value in values {
            action(self, value);
        }
        self
    }

    /// Fallible version of [`Chain::for_each_with`].
    fn try_for_each_with<I: IntoIterator, E>(
        &mut self,
        values: I,
        mut action: impl FnMut(&mut Self, I::Item) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        for value in values {
            action(self, value)?;
        }
        Ok(self)
    }

    /// Prepare a sequence of `count` values, each produced by calling `func`
    /// on the receiver.
    ///
    /// Nothing is called yet: `func` runs only as the sequence is iterated,
    /// and every call to [`Production::iter`] starts over and calls `func`
    /// again from the first element. The [`Production`] holds on to the
    /// receiver; get it back with [`Production::finish`] to continue the chain.
    ///
    /// ```
    /// use quickbin::chain::Chain;
    /// use quickbin::deserialize::Deserializer;
    ///
    /// let mut deserializer = Deserializer::new([1, 0, 2, 0, 3, 0, 0xFF]);
    /// let mut values = deserializer.produce(|d| d.read::<u16>(), 3);
    /// let values: Result<Vec<_>, _> = values.iter().collect();
    /// assert_eq!(values, Ok(vec![1, 2, 3]));
    /// ```
    fn produce<T, F>(&mut self, func: F, count: usize) -> Production<'_, Self, F>
    where
        F: FnMut(&mut Self) -> T,
    {
        Production::new(self, func, count)
    }
}

impl<T: ?Sized> Chain for T {}
