//! Lazy mirrors of the graded collections.
//!
//! A [`Seq`] has the same head-and-rest shape as a [`Prefixed`] but only borrows or iterates.
//! Projecting a collection into its mirror with `seq` never fails and copies nothing.
//!
//! [`Prefixed`]: crate::Prefixed

use core::iter::FusedIterator;
use core::num::NonZeroUsize;

use crate::vec0::Vec0;

pub type Seq0<'a, T> = &'a Vec0<T>;

pub type Seq1<'a, T> = Seq<&'a T, Seq0<'a, T>>;

pub type Seq2<'a, T> = Seq<&'a T, Seq1<'a, T>>;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Seq<T, R> {
    head: T,
    rest: R,
}

impl<T, R> Seq<T, R> {
    pub const fn from_head_and_rest(head: T, rest: R) -> Self {
        Seq { head, rest }
    }

    pub fn into_head_and_rest(self) -> (T, R) {
        (self.head, self.rest)
    }

    pub const fn head(&self) -> &T {
        &self.head
    }

    pub const fn rest(&self) -> &R {
        &self.rest
    }
}

impl<T, R> Seq<T, R>
where
    R: IntoIterator<Item = T>,
{
    pub fn first(self) -> T {
        self.head
    }

    pub fn last(self) -> T {
        let Seq { head, rest } = self;
        rest.into_iter().last().unwrap_or(head)
    }

    pub fn count(self) -> NonZeroUsize {
        NonZeroUsize::MIN.saturating_add(self.rest.into_iter().count())
    }
}

impl<T, R> IntoIterator for Seq<T, R>
where
    R: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = SeqIter<T, R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter::from_head_and_rest(self.head, self.rest)
    }
}

/// An iterator over a head and then the items of a rest.
///
/// Nested collections nest their iterators, so iterating a `Vec2` yields from a
/// `SeqIter<T, SeqIter<T, _>>`.
#[derive(Clone, Debug)]
pub struct SeqIter<T, I> {
    head: Option<T>,
    rest: I,
}

impl<T, I> SeqIter<T, I>
where
    I: Iterator<Item = T>,
{
    pub(crate) fn from_head_and_rest<R>(head: T, rest: R) -> Self
    where
        R: IntoIterator<IntoIter = I>,
    {
        SeqIter {
            head: Some(head),
            rest: rest.into_iter(),
        }
    }
}

impl<T, I> DoubleEndedIterator for SeqIter<T, I>
where
    I: DoubleEndedIterator<Item = T>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.rest.next_back().or_else(|| self.head.take())
    }
}

impl<T, I> ExactSizeIterator for SeqIter<T, I> where I: ExactSizeIterator<Item = T> {}

impl<T, I> FusedIterator for SeqIter<T, I> where I: FusedIterator<Item = T> {}

impl<T, I> Iterator for SeqIter<T, I>
where
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.rest.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.head.is_some());
        let (lower, upper) = self.rest.size_hint();
        (
            lower.saturating_add(n),
            upper.and_then(|upper| upper.checked_add(n)),
        )
    }
}
