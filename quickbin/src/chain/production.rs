use core::iter::FusedIterator;

/// A lazily produced sequence of values, created by [`super::Chain::produce`].
///
/// The production borrows the receiver of the chain and remembers the
/// producing function and the number of elements. It does not cache
/// anything: each [`Production::iter`] call yields a fresh enumeration that
/// invokes the function again for every element it yields, so side effects of
/// the function are repeated per enumeration.
pub struct Production<'r, R: ?Sized, F> {
    receiver: &'r mut R,
    func: F,
    count: usize,
}

/// One enumeration of a [`Production`].
///
/// Every call to [`Iterator::next`] invokes the producing function once on
/// the receiver, until `count` values have been produced.
pub struct Produced<'p, R: ?Sized, F> {
    receiver: &'p mut R,
    func: &'p mut F,
    remaining: usize,
}

impl<'r, R: ?Sized, F> Production<'r, R, F> {
    pub(super) fn new(receiver: &'r mut R, func: F, count: usize) -> Self {
        Self { receiver, func, count }
    }

    /// The number of values each enumeration yields.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether each enumeration yields nothing.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Start a new enumeration from the first element.
    pub fn iter(&mut self) -> Produced<'_, R, F> {
        Produced { receiver: &mut *self.receiver, func: &mut self.func, remaining: self.count }
    }

    /// Give back the receiver so that the chain can continue.
    pub fn finish(self) -> &'r mut R {
        self.receiver
    }
}

impl<'p, 'r, R: ?Sized, T, F> IntoIterator for &'p mut Production<'r, R, F>
where
    F: FnMut(&mut R) -> T,
{
    type Item = T;
    type IntoIter = Produced<'p, R, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'p, R: ?Sized, T, F> Iterator for Produced<'p, R, F>
where
    F: FnMut(&mut R) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.func)(&mut *self.receiver))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'p, R: ?Sized, T, F> ExactSizeIterator for Produced<'p, R, F> where F: FnMut(&mut R) -> T {}

impl<'p, R: ?Sized, T, F> FusedIterator for Produced<'p, R, F> where F: FnMut(&mut R) -> T {}

impl<'r, R: ?Sized, F> core::fmt::Debug for Production<'r, R, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Production").field("count", &self.count).finish_non_exhaustive()
    }
}
