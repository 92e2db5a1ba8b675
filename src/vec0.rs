//! An ordered collection of zero or more items.
//!
//! [`Vec0`] is the base of the graded collections: every guaranteed kind relaxes into it.

use alloc::string::String;
use alloc::vec::{self, Vec};
#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};
#[cfg(feature = "itertools")]
use core::fmt::Display;
use core::fmt::{self, Debug, Formatter};
use core::ops::{
    Deref, DerefMut, Index, IndexMut, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive,
    RangeTo, RangeToInclusive,
};
use core::slice;
#[cfg(feature = "serde")]
use ::serde_derive::{Deserialize, Serialize};

use crate::seq::Seq0;
use crate::{checked_position, checked_range, Graded, OutOfBoundsError, Prefixed, TooShortError};

#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vec0<T> {
    items: Vec<T>,
}

impl<T> Vec0<T> {
    pub const fn new() -> Self {
        Vec0 { items: Vec::new() }
    }

    pub const fn from_vec(items: Vec<T>) -> Self {
        Vec0 { items }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Vec0::from_vec(Vec::with_capacity(capacity))
    }

    pub fn from_head_and_tail<I>(head: T, tail: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Some(head).into_iter().chain(tail).collect()
    }

    pub fn from_init_and_last<I>(init: I, last: T) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        init.into_iter().chain(Some(last)).collect()
    }

    pub fn into_head_and_tail(self) -> Option<(T, Vec0<T>)> {
        let mut items = self.items.into_iter();
        items.next().map(|head| (head, items.collect()))
    }

    pub fn into_init_and_last(mut self) -> Option<(Vec0<T>, T)> {
        self.items.pop().map(|last| (self, last))
    }

    pub fn drop_first(self) -> Option<Vec0<T>> {
        self.into_head_and_tail().map(|(_, tail)| tail)
    }

    pub fn drop_last(self) -> Option<Vec0<T>> {
        self.into_init_and_last().map(|(init, _)| init)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn as_vec(&self) -> &Vec<T> {
        &self.items
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.items.as_mut_slice()
    }

    pub fn seq(&self) -> Seq0<'_, T> {
        self
    }

    pub fn slice<R>(&self, range: R) -> Vec0<T>
    where
        T: Clone,
        R: RangeBounds<usize>,
    {
        self.try_slice(range).unwrap_or_else(|error| panic!("{}", error))
    }

    pub fn try_slice<R>(&self, range: R) -> Result<Vec0<T>, OutOfBoundsError>
    where
        T: Clone,
        R: RangeBounds<usize>,
    {
        let range = checked_range(&range, self.items.len())?;
        Ok(Vec0::from_vec(self.items[range].to_vec()))
    }

    pub fn insert(&mut self, index: usize, item: T) {
        if let Err(error) = self.try_insert(index, item) {
            panic!("{}", error)
        }
    }

    pub fn try_insert(&mut self, index: usize, item: T) -> Result<(), OutOfBoundsError> {
        let index = checked_position(index, self.items.len())?;
        self.items.insert(index, item);
        Ok(())
    }

    pub fn insert_all<I>(&mut self, index: usize, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        if let Err(error) = self.try_insert_all(index, items) {
            panic!("{}", error)
        }
    }

    pub fn try_insert_all<I>(&mut self, index: usize, items: I) -> Result<(), OutOfBoundsError>
    where
        I: IntoIterator<Item = T>,
    {
        let index = checked_position(index, self.items.len())?;
        self.items.splice(index..index, items);
        Ok(())
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item)
    }

    pub fn map<U, F>(self, f: F) -> Vec0<U>
    where
        F: FnMut(T) -> U,
    {
        self.items.into_iter().map(f).collect()
    }

    pub fn try_map<U, E, F>(self, f: F) -> Result<Vec0<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        self.items.into_iter().map(f).collect()
    }

    pub fn filter<F>(self, f: F) -> Vec0<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.into_iter().filter(f).collect()
    }

    pub fn try_filter<E, F>(self, mut f: F) -> Result<Vec0<T>, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        let mut items = Vec::with_capacity(self.items.len());
        for item in self.items {
            if f(&item)? {
                items.push(item);
            }
        }
        Ok(Vec0::from_vec(items))
    }

    pub fn filter_map<U, F>(self, f: F) -> Vec0<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        self.items.into_iter().filter_map(f).collect()
    }

    pub fn try_filter_map<U, E, F>(self, f: F) -> Result<Vec0<U>, E>
    where
        F: FnMut(T) -> Result<Option<U>, E>,
    {
        self.items
            .into_iter()
            .map(f)
            .filter_map(Result::transpose)
            .collect()
    }

    pub fn flat_map<I, F>(self, f: F) -> Vec0<I::Item>
    where
        I: IntoIterator,
        F: FnMut(T) -> I,
    {
        self.items.into_iter().flat_map(f).collect()
    }

    pub fn try_flat_map<I, E, F>(self, mut f: F) -> Result<Vec0<I::Item>, E>
    where
        I: IntoIterator,
        F: FnMut(T) -> Result<I, E>,
    {
        let mut items = Vec::new();
        for item in self.items {
            items.extend(f(item)?);
        }
        Ok(Vec0::from_vec(items))
    }

    pub fn enumerate(self) -> Vec0<(usize, T)> {
        self.items.into_iter().enumerate().collect()
    }

    pub fn flatten(self) -> Vec0<T::Item>
    where
        T: IntoIterator,
    {
        self.items.into_iter().flatten().collect()
    }

    pub fn join(&self, separator: &str) -> String
    where
        T: AsRef<str>,
    {
        let mut output = String::new();
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                output.push_str(separator);
            }
            output.push_str(item.as_ref());
        }
        output
    }

    #[cfg(feature = "itertools")]
    #[cfg_attr(docsrs, doc(cfg(feature = "itertools")))]
    pub fn join_display(&self, separator: &str) -> String
    where
        T: Display,
    {
        itertools::Itertools::join(&mut self.items.iter(), separator)
    }
}

#[cfg(feature = "arbitrary")]
#[cfg_attr(docsrs, doc(cfg(feature = "arbitrary")))]
impl<'a, T> Arbitrary<'a> for Vec0<T>
where
    T: Arbitrary<'a>,
{
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        unstructured.arbitrary_iter()?.collect()
    }

    fn size_hint(_: usize) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<T> AsMut<[T]> for Vec0<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.items.as_mut()
    }
}

impl<T> AsRef<[T]> for Vec0<T> {
    fn as_ref(&self) -> &[T] {
        self.items.as_ref()
    }
}

impl<T> AsRef<Vec<T>> for Vec0<T> {
    fn as_ref(&self) -> &Vec<T> {
        &self.items
    }
}

impl<T> Debug for Vec0<T>
where
    T: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Deref for Vec0<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.items.as_slice()
    }
}

impl<T> DerefMut for Vec0<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.items.as_mut_slice()
    }
}

impl<T> Extend<T> for Vec0<T> {
    fn extend<I>(&mut self, extension: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(extension)
    }
}

impl<T, const N: usize> From<[T; N]> for Vec0<T> {
    fn from(items: [T; N]) -> Self {
        Vec0::from_vec(Vec::from(items))
    }
}

impl<'a, T> From<&'a [T]> for Vec0<T>
where
    T: Clone,
{
    fn from(items: &'a [T]) -> Self {
        Vec0::from_vec(items.to_vec())
    }
}

impl<T, R> From<Prefixed<T, R>> for Vec0<T>
where
    R: Graded<Item = T>,
{
    fn from(items: Prefixed<T, R>) -> Self {
        items.into_vec0()
    }
}

impl<T> From<Vec<T>> for Vec0<T> {
    fn from(items: Vec<T>) -> Self {
        Vec0::from_vec(items)
    }
}

impl<T> From<Vec0<T>> for Vec<T> {
    fn from(items: Vec0<T>) -> Self {
        items.items
    }
}

impl<T> FromIterator<T> for Vec0<T> {
    fn from_iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Vec0::from_vec(items.into_iter().collect())
    }
}

impl<T> Graded for Vec0<T> {
    type Item = T;
    type Seq<'a>
        = Seq0<'a, T>
    where
        Self: 'a;

    const MIN_LEN: usize = 0;

    fn count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    fn seq(&self) -> Self::Seq<'_> {
        self
    }

    fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn try_from_vec(items: Vec<T>) -> Result<Self, TooShortError<Vec<T>>> {
        Ok(Vec0::from_vec(items))
    }
}

impl<T> Index<usize> for Vec0<T> {
    type Output = T;

    fn index(&self, at: usize) -> &Self::Output {
        self.items.get(at).unwrap_or_else(|| {
            panic!(
                "{}",
                OutOfBoundsError::Index {
                    index: at,
                    len: self.items.len(),
                },
            )
        })
    }
}

impl<T> IndexMut<usize> for Vec0<T> {
    fn index_mut(&mut self, at: usize) -> &mut Self::Output {
        let len = self.items.len();
        self.items
            .get_mut(at)
            .unwrap_or_else(|| panic!("{}", OutOfBoundsError::Index { index: at, len }))
    }
}

macro_rules! impl_index_range_for_vec0 {
    ($R:ty$(,)?) => {
        impl<T> Index<$R> for Vec0<T> {
            type Output = [T];

            fn index(&self, range: $R) -> &Self::Output {
                match checked_range(&range, self.items.len()) {
                    Ok(range) => &self.items[range],
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl<T> IndexMut<$R> for Vec0<T> {
            fn index_mut(&mut self, range: $R) -> &mut Self::Output {
                match checked_range(&range, self.items.len()) {
                    Ok(range) => &mut self.items[range],
                    Err(error) => panic!("{}", error),
                }
            }
        }
    };
}
impl_index_range_for_vec0!(Range<usize>);
impl_index_range_for_vec0!(RangeFrom<usize>);
impl_index_range_for_vec0!(RangeFull);
impl_index_range_for_vec0!(RangeInclusive<usize>);
impl_index_range_for_vec0!(RangeTo<usize>);
impl_index_range_for_vec0!(RangeToInclusive<usize>);

impl<T> IntoIterator for Vec0<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vec0<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vec0<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

#[macro_export]
macro_rules! vec0 {
    ($($item:expr $(,)?)*) => {
        $crate::vec0::Vec0::from([$($item,)*])
    };
}
pub use vec0;

#[cfg(test)]
pub mod harness {
    use rstest::fixture;

    use crate::vec0::Vec0;

    #[fixture]
    pub fn xs0(#[default(4)] end: u8) -> Vec0<u8> {
        (0..=end).collect()
    }

    #[fixture]
    pub fn empty() -> Vec0<u8> {
        Vec0::new()
    }
}
