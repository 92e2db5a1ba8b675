//! Collections that statically guarantee a minimum number of items.
//!
//! [`Vec0`] is an ordered collection of zero or more items. [`Vec1`] holds a head and a [`Vec0`]
//! rest and so always has at least one item. [`Vec2`] holds a head and a [`Vec1`] rest and so
//! always has at least two. Both are instances of the single nesting type [`Prefixed`].
//!
//! Operations keep the strongest guarantee they can. [`Vec1::map`] returns a [`Vec1`],
//! [`Vec2::drop_last`] returns a [`Vec1`], and [`Prefixed::filter`] returns a [`Vec0`] because
//! no item may survive.
//!
//! ```rust
//! use prefixed::prelude::*;
//!
//! let xs = vec1![1, 2, 3];
//! let ys = vec1![4, 5];
//! let zs: Vec2<i32> = xs + ys;
//!
//! assert_eq!(zs.len().get(), 5);
//! assert_eq!(*zs.last(), 5);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::cloned_instead_of_copied,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::flat_map_option,
    clippy::from_iter_instead_of_collect,
    clippy::if_not_else,
    clippy::manual_ok_or,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::redundant_closure_for_method_calls,
    clippy::redundant_else,
    clippy::unreadable_literal,
    clippy::unused_self
)]
#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod serde;

pub mod ops;
pub mod seq;
pub mod vec0;
pub mod vec1;
pub mod vec2;
pub mod zip;

pub mod prelude {
    pub use crate::seq::{Seq, Seq0, Seq1, Seq2};
    pub use crate::vec0::{vec0, Vec0};
    pub use crate::vec1::{vec1, Vec1};
    pub use crate::vec2::{vec2, Vec2};
    pub use crate::zip::{zip, zip3, Zip as _, Zip3 as _};
    pub use crate::{Graded, OutOfBoundsError, Prefixed, TooShortError};
}

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};
use core::error::Error;
use core::fmt::{self, Debug, Display, Formatter};
use core::num::NonZeroUsize;
use core::ops::{Bound, Index, IndexMut, Range, RangeBounds};
#[cfg(feature = "serde")]
use {
    ::serde::{Deserialize, Serialize},
    ::serde_derive::{Deserialize, Serialize},
};

use crate::seq::SeqIter;

pub use crate::seq::Seq;
pub use crate::vec0::Vec0;
pub use crate::vec1::Vec1;
pub use crate::vec2::Vec2;

/// Collections with a statically known minimum length.
///
/// This trait is implemented by [`Vec0`] and by every [`Prefixed`] whose rest is itself
/// `Graded`. It carries the operations that must recurse through the nesting of a [`Prefixed`].
pub trait Graded: Sized {
    type Item;
    type Seq<'a>: Clone + IntoIterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// The minimum number of items in any value of this type.
    const MIN_LEN: usize;

    fn count(&self) -> usize;

    fn item(&self, index: usize) -> Option<&Self::Item>;

    fn item_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Projects the collection into its lazy mirror.
    fn seq(&self) -> Self::Seq<'_>;

    fn into_vec(self) -> Vec<Self::Item>;

    /// Strengthens a [`Vec`] into this type.
    ///
    /// # Errors
    ///
    /// Returns the items when there are fewer than [`MIN_LEN`][`Graded::MIN_LEN`] of them.
    fn try_from_vec(items: Vec<Self::Item>) -> Result<Self, TooShortError<Vec<Self::Item>>>;
}

/// An item followed by a collection of the remaining items.
///
/// `Prefixed` is the single mechanism behind the guaranteed kinds: [`Vec1`] is a head and a
/// [`Vec0`] rest and [`Vec2`] is a head and a [`Vec1`] rest. The head is always the logically
/// first item.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        bound(
            deserialize = "T: Deserialize<'de>, R: Graded<Item = T>,",
            serialize = "T: Clone + Serialize, R: Clone + Graded<Item = T>,",
        ),
        try_from = "Vec0<T>",
        into = "Vec0<T>",
    )
)]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Prefixed<T, R> {
    head: T,
    rest: R,
}

impl<T, R> Prefixed<T, R> {
    pub const fn from_head_and_rest(head: T, rest: R) -> Self {
        Prefixed { head, rest }
    }

    pub fn into_head_and_rest(self) -> (T, R) {
        (self.head, self.rest)
    }

    pub fn split_first(&self) -> (&T, &R) {
        (&self.head, &self.rest)
    }

    pub fn split_first_mut(&mut self) -> (&mut T, &mut R) {
        (&mut self.head, &mut self.rest)
    }

    pub fn drop_first(self) -> R {
        self.rest
    }

    pub const fn head(&self) -> &T {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut T {
        &mut self.head
    }

    pub const fn rest(&self) -> &R {
        &self.rest
    }

    pub fn rest_mut(&mut self) -> &mut R {
        &mut self.rest
    }
}

impl<T, R> Prefixed<T, R>
where
    R: Graded<Item = T>,
{
    pub fn try_from_iter<I>(items: I) -> Result<Self, TooShortError<Vec0<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_from_vec(items.into_iter().collect()).map_err(|error| error.map_items(Vec0::from))
    }

    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::MIN.saturating_add(self.rest.count())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.item(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.item_mut(index)
    }

    pub fn seq(&self) -> Seq<&T, R::Seq<'_>> {
        Seq::from_head_and_rest(&self.head, self.rest.seq())
    }

    pub fn iter(&self) -> SeqIter<&T, <R::Seq<'_> as IntoIterator>::IntoIter> {
        self.seq().into_iter()
    }

    pub fn iter_mut<'a>(&'a mut self) -> SeqIter<&'a mut T, <&'a mut R as IntoIterator>::IntoIter>
    where
        &'a mut R: IntoIterator<Item = &'a mut T>,
    {
        SeqIter::from_head_and_rest(&mut self.head, &mut self.rest)
    }

    pub fn into_vec(self) -> Vec<T> {
        Graded::into_vec(self)
    }

    pub fn into_vec0(self) -> Vec0<T> {
        Vec0::from_vec(self.into_vec())
    }

    pub fn slice<B>(&self, range: B) -> Vec0<T>
    where
        T: Clone,
        B: RangeBounds<usize>,
    {
        self.try_slice(range).unwrap_or_else(|error| panic!("{}", error))
    }

    pub fn try_slice<B>(&self, range: B) -> Result<Vec0<T>, OutOfBoundsError>
    where
        T: Clone,
        B: RangeBounds<usize>,
    {
        let Range { start, end } = checked_range(&range, self.rest.count() + 1)?;
        Ok(self.iter().skip(start).take(end - start).cloned().collect())
    }

    pub fn filter<F>(self, f: F) -> Vec0<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.into_vec0().filter(f)
    }

    pub fn try_filter<E, F>(self, f: F) -> Result<Vec0<T>, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        self.into_vec0().try_filter(f)
    }

    pub fn filter_map<U, F>(self, f: F) -> Vec0<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        self.into_vec0().filter_map(f)
    }

    pub fn try_filter_map<U, E, F>(self, f: F) -> Result<Vec0<U>, E>
    where
        F: FnMut(T) -> Result<Option<U>, E>,
    {
        self.into_vec0().try_filter_map(f)
    }

    pub fn flat_map<I, F>(self, f: F) -> Vec0<I::Item>
    where
        I: IntoIterator,
        F: FnMut(T) -> I,
    {
        self.into_vec0().flat_map(f)
    }

    pub fn try_flat_map<I, E, F>(self, f: F) -> Result<Vec0<I::Item>, E>
    where
        I: IntoIterator,
        F: FnMut(T) -> Result<I, E>,
    {
        self.into_vec0().try_flat_map(f)
    }

    pub fn flatten(self) -> Vec0<T::Item>
    where
        T: IntoIterator,
    {
        self.into_vec0().flatten()
    }

    pub fn join(&self, separator: &str) -> String
    where
        T: AsRef<str>,
    {
        let mut output = String::from(self.head.as_ref());
        for item in self.rest.seq() {
            output.push_str(separator);
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
        itertools::Itertools::join(&mut self.iter(), separator)
    }
}

#[cfg(feature = "arbitrary")]
#[cfg_attr(docsrs, doc(cfg(feature = "arbitrary")))]
impl<'a, T, R> Arbitrary<'a> for Prefixed<T, R>
where
    T: Arbitrary<'a>,
    R: Arbitrary<'a>,
{
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Prefixed::from_head_and_rest(
            T::arbitrary(unstructured)?,
            R::arbitrary(unstructured)?,
        ))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        arbitrary::size_hint::and(T::size_hint(depth), R::size_hint(depth))
    }
}

impl<T, R> Debug for Prefixed<T, R>
where
    T: Debug,
    R: Graded<Item = T>,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T, R> Extend<T> for Prefixed<T, R>
where
    R: Extend<T>,
{
    fn extend<I>(&mut self, extension: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.rest.extend(extension)
    }
}

impl<T, R> From<Prefixed<T, R>> for Vec<T>
where
    R: Graded<Item = T>,
{
    fn from(items: Prefixed<T, R>) -> Self {
        items.into_vec()
    }
}

impl<T, R> Graded for Prefixed<T, R>
where
    R: Graded<Item = T>,
{
    type Item = T;
    type Seq<'a>
        = crate::seq::Seq<&'a T, R::Seq<'a>>
    where
        Self: 'a;

    const MIN_LEN: usize = R::MIN_LEN + 1;

    fn count(&self) -> usize {
        self.rest.count() + 1
    }

    fn item(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.head),
            _ => self.rest.item(index - 1),
        }
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        match index {
            0 => Some(&mut self.head),
            _ => self.rest.item_mut(index - 1),
        }
    }

    fn seq(&self) -> Self::Seq<'_> {
        Prefixed::seq(self)
    }

    fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.count());
        items.push(self.head);
        items.extend(self.rest.into_vec());
        items
    }

    fn try_from_vec(items: Vec<T>) -> Result<Self, TooShortError<Vec<T>>> {
        if items.len() < Self::MIN_LEN {
            let len = items.len();
            return Err(TooShortError::new(items, len, Self::MIN_LEN));
        }
        let mut tail = items.into_iter();
        let Some(head) = tail.next() else {
            return Err(TooShortError::new(Vec::new(), 0, Self::MIN_LEN));
        };
        match R::try_from_vec(tail.collect()) {
            Ok(rest) => Ok(Prefixed::from_head_and_rest(head, rest)),
            Err(error) => {
                let mut items = error.into_items();
                items.insert(0, head);
                let len = items.len();
                Err(TooShortError::new(items, len, Self::MIN_LEN))
            },
        }
    }
}

impl<T, R> Index<usize> for Prefixed<T, R>
where
    R: Graded<Item = T>,
{
    type Output = T;

    fn index(&self, at: usize) -> &Self::Output {
        self.get(at).unwrap_or_else(|| {
            panic!("{}", OutOfBoundsError::Index { index: at, len: self.count() })
        })
    }
}

impl<T, R> IndexMut<usize> for Prefixed<T, R>
where
    R: Graded<Item = T>,
{
    fn index_mut(&mut self, at: usize) -> &mut Self::Output {
        let len = self.count();
        self.get_mut(at)
            .unwrap_or_else(|| panic!("{}", OutOfBoundsError::Index { index: at, len }))
    }
}

impl<T, R> IntoIterator for Prefixed<T, R>
where
    R: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = SeqIter<T, R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter::from_head_and_rest(self.head, self.rest)
    }
}

impl<'a, T, R> IntoIterator for &'a Prefixed<T, R>
where
    R: Graded<Item = T>,
{
    type Item = &'a T;
    type IntoIter = SeqIter<&'a T, <R::Seq<'a> as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, R> IntoIterator for &'a mut Prefixed<T, R>
where
    &'a mut R: IntoIterator<Item = &'a mut T>,
{
    type Item = &'a mut T;
    type IntoIter = SeqIter<&'a mut T, <&'a mut R as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter::from_head_and_rest(&mut self.head, &mut self.rest)
    }
}

impl<T, R> TryFrom<Vec<T>> for Prefixed<T, R>
where
    R: Graded<Item = T>,
{
    type Error = TooShortError<Vec<T>>;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from_vec(items)
    }
}

impl<T, R> TryFrom<Vec0<T>> for Prefixed<T, R>
where
    R: Graded<Item = T>,
{
    type Error = TooShortError<Vec0<T>>;

    fn try_from(items: Vec0<T>) -> Result<Self, Self::Error> {
        Self::try_from_vec(items.into_vec()).map_err(|error| error.map_items(Vec0::from))
    }
}

impl<'a, T, R> TryFrom<&'a [T]> for Prefixed<T, R>
where
    T: Clone,
    R: Graded<Item = T>,
{
    type Error = TooShortError<&'a [T]>;

    fn try_from(items: &'a [T]) -> Result<Self, Self::Error> {
        Self::try_from_vec(Vec::from(items)).map_err(|error| error.map_items(|_| items))
    }
}

/// The error returned when strengthening a collection that has too few items.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct TooShortError<T> {
    items: T,
    len: usize,
    min: usize,
}

impl<T> TooShortError<T> {
    pub(crate) const fn new(items: T, len: usize, min: usize) -> Self {
        TooShortError { items, len, min }
    }

    pub fn into_items(self) -> T {
        self.items
    }

    pub fn take(self) -> (T, TooShortError<()>) {
        let TooShortError { items, len, min } = self;
        (items, TooShortError::new((), len, min))
    }

    pub fn map_items<U, F>(self, f: F) -> TooShortError<U>
    where
        F: FnOnce(T) -> U,
    {
        let TooShortError { items, len, min } = self;
        TooShortError::new(f(items), len, min)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn min_len(&self) -> usize {
        self.min
    }
}

impl<T> Debug for TooShortError<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TooShortError")
            .field("len", &self.len)
            .field("min", &self.min)
            .finish_non_exhaustive()
    }
}

impl<T> Display for TooShortError<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "expected at least {} items but found {}",
            self.min, self.len,
        )
    }
}

impl<T> Error for TooShortError<T> {}

/// The error returned when an index or range lies outside of a collection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OutOfBoundsError {
    Index { index: usize, len: usize },
    Range { start: usize, end: usize, len: usize },
}

impl OutOfBoundsError {
    pub const fn len(&self) -> usize {
        match *self {
            OutOfBoundsError::Index { len, .. } | OutOfBoundsError::Range { len, .. } => len,
        }
    }
}

impl Display for OutOfBoundsError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            OutOfBoundsError::Index { index, len } => {
                write!(formatter, "index {} is out of bounds for length {}", index, len)
            },
            OutOfBoundsError::Range { start, end, .. } if start > end => write!(
                formatter,
                "range starts at {} but ends at {}",
                start, end,
            ),
            OutOfBoundsError::Range { start, end, len } => write!(
                formatter,
                "range {}..{} is out of bounds for length {}",
                start, end, len,
            ),
        }
    }
}

impl Error for OutOfBoundsError {}

// Insertion may target one past the last item, so positions are checked against `len`
// inclusively.
pub(crate) fn checked_position(index: usize, len: usize) -> Result<usize, OutOfBoundsError> {
    if index > len {
        Err(OutOfBoundsError::Index { index, len })
    }
    else {
        Ok(index)
    }
}

pub(crate) fn checked_range<B>(range: &B, len: usize) -> Result<Range<usize>, OutOfBoundsError>
where
    B: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(start) => Some(*start),
        Bound::Excluded(start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };
    let end = match range.end_bound() {
        Bound::Included(end) => end.checked_add(1),
        Bound::Excluded(end) => Some(*end),
        Bound::Unbounded => Some(len),
    };
    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => Ok(start..end),
        (start, end) => Err(OutOfBoundsError::Range {
            start: start.unwrap_or(usize::MAX),
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}

macro_rules! with_literals {
    ($f:ident$(,)?) => {};
    ($f:ident, [$($N:literal $(,)?)+]$(,)?) => {
        $(
            $f!($N);
        )+
    };
}
pub(crate) use with_literals;

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use proptest::prelude::*;
    use rstest::rstest;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn strengthen_to_vec1_then_ok_iff_non_empty(items in prop::collection::vec(any::<u8>(), 0..8)) {
            let n = items.len();
            let xs1 = Vec1::try_from(items.clone());
            prop_assert_eq!(xs1.is_ok(), n >= 1);
            if let Ok(xs1) = xs1 {
                prop_assert_eq!(xs1.into_vec(), items);
            }
        }

        #[test]
        fn strengthen_to_vec2_then_ok_iff_many(items in prop::collection::vec(any::<u8>(), 0..8)) {
            let n = items.len();
            match Vec2::try_from(items.clone()) {
                Ok(xs2) => {
                    prop_assert!(n >= 2);
                    prop_assert_eq!(xs2.into_vec(), items);
                },
                Err(error) => {
                    prop_assert!(n < 2);
                    prop_assert_eq!(error.len(), n);
                    prop_assert_eq!(error.min_len(), 2);
                    prop_assert_eq!(error.into_items(), items);
                },
            }
        }

        #[test]
        fn relax_then_strengthen_vec1_then_eq(head in any::<u8>(), tail in prop::collection::vec(any::<u8>(), 0..8)) {
            let xs1 = Vec1::from_head_and_tail(head, tail);
            prop_assert_eq!(Vec1::try_from(xs1.clone().relax()).ok(), Some(xs1));
        }

        #[test]
        fn relax_then_strengthen_vec2_then_eq(
            head in any::<u8>(),
            second in any::<u8>(),
            tail in prop::collection::vec(any::<u8>(), 0..8),
        ) {
            let xs2 = Vec2::from_head_and_tail(head, Vec1::from_head_and_tail(second, tail));
            prop_assert_eq!(Vec2::try_from(xs2.clone().relax()).ok(), Some(xs2.clone()));
            prop_assert_eq!(Vec2::try_from(xs2.clone().into_vec0()).ok(), Some(xs2));
        }

        #[test]
        fn index_vec2_then_eq_iteration_order(items in prop::collection::vec(any::<u8>(), 2..8)) {
            let xs2 = Vec2::try_from(items.clone()).unwrap();
            for (index, item) in items.iter().enumerate() {
                prop_assert_eq!(&xs2[index], item);
            }
            prop_assert!(xs2.iter().eq(items.iter()));
        }

        #[test]
        fn filter_vec1_then_source_order_preserved(items in prop::collection::vec(any::<u8>(), 1..8)) {
            let xs1 = Vec1::try_from(items.clone()).unwrap();
            let expected: Vec<_> = items.into_iter().filter(|item| item % 2 == 0).collect();
            prop_assert_eq!(xs1.filter(|item| item % 2 == 0).into_vec(), expected);
        }

        #[test]
        fn concatenate_vec1_and_vec1_then_len_eq_sum(
            lhs in prop::collection::vec(any::<u8>(), 1..8),
            rhs in prop::collection::vec(any::<u8>(), 1..8),
        ) {
            let n = lhs.len() + rhs.len();
            let mut expected = lhs.clone();
            expected.extend(rhs.iter().copied());
            let xs2: Vec2<u8> = Vec1::try_from(lhs).unwrap() + Vec1::try_from(rhs).unwrap();
            prop_assert_eq!(xs2.len().get(), n);
            prop_assert_eq!(xs2.into_vec(), expected);
        }

        #[test]
        fn concatenate_vec0_and_vec0_then_len_eq_sum(
            lhs in prop::collection::vec(any::<u8>(), 0..8),
            rhs in prop::collection::vec(any::<u8>(), 0..8),
        ) {
            let n = lhs.len() + rhs.len();
            let xs0 = Vec0::from(lhs) + Vec0::from(rhs);
            prop_assert_eq!(xs0.len(), n);
        }

        #[test]
        fn last_of_vec1_then_eq_last_of_rest_or_head(head in any::<u8>(), tail in prop::collection::vec(any::<u8>(), 0..8)) {
            let xs1 = Vec1::from_head_and_tail(head, tail.clone());
            prop_assert_eq!(*xs1.last(), tail.last().copied().unwrap_or(head));
        }
    }

    #[rstest]
    #[case::empty(0, false)]
    #[case::one(1, true)]
    #[case::many(3, true)]
    fn try_from_iter_into_vec1_then_ok_eq(#[case] n: u8, #[case] expected: bool) {
        assert_eq!(Vec1::try_from_iter(0..n).is_ok(), expected);
    }

    #[rstest]
    #[case::empty(0, false)]
    #[case::one(1, false)]
    #[case::many(2, true)]
    fn try_from_iter_into_vec2_then_ok_eq(#[case] n: u8, #[case] expected: bool) {
        assert_eq!(Vec2::try_from_iter(0..n).is_ok(), expected);
    }

    #[rstest]
    fn display_too_short_error_then_message_eq() {
        let error = Vec2::<u8>::try_from_iter([7]).unwrap_err();
        assert_eq!(
            alloc::format!("{}", error),
            "expected at least 2 items but found 1",
        );
        assert_eq!(error.into_items().as_slice(), &[7]);
    }

    #[rstest]
    #[case::index(OutOfBoundsError::Index { index: 3, len: 2 }, "index 3 is out of bounds for length 2")]
    #[case::range(
        OutOfBoundsError::Range { start: 1, end: 4, len: 2 },
        "range 1..4 is out of bounds for length 2",
    )]
    #[case::inverted(
        OutOfBoundsError::Range { start: 3, end: 1, len: 5 },
        "range starts at 3 but ends at 1",
    )]
    fn display_out_of_bounds_error_then_message_eq(
        #[case] error: OutOfBoundsError,
        #[case] expected: &str,
    ) {
        assert_eq!(alloc::format!("{}", error), expected);
    }

    #[rstest]
    #[case::index(OutOfBoundsError::Index { index: 3, len: 2 }, 2)]
    #[case::range(OutOfBoundsError::Range { start: 1, end: 4, len: 3 }, 3)]
    fn len_of_out_of_bounds_error_then_eq(
        #[case] error: OutOfBoundsError,
        #[case] expected: usize,
    ) {
        assert_eq!(error.len(), expected);
    }

    #[rstest]
    fn take_items_from_too_short_error_then_counts_kept() {
        let error = Vec2::try_from(alloc::vec![7u8]).unwrap_err();
        let (items, error) = error.take();
        assert_eq!(items, &[7]);
        assert_eq!(error.len(), 1);
        assert_eq!(error.min_len(), 2);
        assert_eq!(
            alloc::format!("{}", error),
            "expected at least 2 items but found 1",
        );
    }

    #[rstest]
    fn hash_vec2_built_three_ways_then_eq() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        fn hash<T>(item: &T) -> u64
        where
            T: Hash,
        {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            hasher.finish()
        }

        let xs2 = vec2![1u8, 2, 3];
        let ys2 = Vec2::try_from(alloc::vec![1u8, 2, 3]).unwrap();
        let zs2 = Vec2::from_head_and_tail(1u8, Vec1::from_head_and_tail(2, [3]));
        assert_eq!(xs2, ys2);
        assert_eq!(ys2, zs2);
        assert_eq!(hash(&xs2), hash(&ys2));
        assert_eq!(hash(&ys2), hash(&zs2));

        let ws2 = vec2![1u8, 2, 4];
        assert_eq!(xs2.head(), ws2.head());
        assert_ne!(xs2, ws2);
    }

    #[allow(clippy::reversed_empty_ranges)]
    #[rstest]
    #[case::full(.., Ok(0..3))]
    #[case::inclusive(1..=2, Ok(1..3))]
    #[case::empty(3..3, Ok(3..3))]
    #[case::past_end(2..4, Err(OutOfBoundsError::Range { start: 2, end: 4, len: 3 }))]
    #[case::inverted(2..1, Err(OutOfBoundsError::Range { start: 2, end: 1, len: 3 }))]
    fn checked_range_then_output_eq<B>(
        #[case] range: B,
        #[case] expected: Result<core::ops::Range<usize>, OutOfBoundsError>,
    ) where
        B: core::ops::RangeBounds<usize>,
    {
        assert_eq!(crate::checked_range(&range, 3), expected);
    }

    #[rstest]
    fn get_prefixed_out_of_bounds_then_none() {
        let xs2 = vec2![0u8, 1, 2];
        assert_eq!(xs2.get(2), Some(&2));
        assert_eq!(xs2.get(3), None);
    }

    #[rstest]
    #[should_panic(expected = "index 3 is out of bounds for length 3")]
    fn index_prefixed_out_of_bounds_then_panic() {
        let xs1 = vec1![0u8, 1, 2];
        let _ = xs1[3];
    }

    #[rstest]
    fn slice_prefixed_then_vec0_eq() {
        let xs2 = vec2![0u8, 1, 2, 3];
        assert_eq!(xs2.slice(1..3).as_slice(), &[1, 2]);
        assert_eq!(xs2.try_slice(..).map(Vec0::into_vec), Ok(alloc::vec![0, 1, 2, 3]));
        assert!(xs2.try_slice(3..5).is_err());
    }

    #[rstest]
    fn join_prefixed_then_eq() {
        let xs2 = vec2!["a", "b", "c"];
        assert_eq!(xs2.join(", "), "a, b, c");
        assert_eq!(vec1!["a"].join(", "), "a");
    }

    #[cfg(feature = "itertools")]
    #[rstest]
    fn join_display_prefixed_then_eq() {
        assert_eq!(vec2![1u8, 2, 3].join_display("-"), "1-2-3");
    }

    #[cfg(feature = "arbitrary")]
    #[rstest]
    fn arbitrary_vec2_then_len_at_least_two() {
        use arbitrary::{Arbitrary, Unstructured};

        let bytes = [0u8; 64];
        let mut unstructured = Unstructured::new(&bytes);
        let xs2 = Vec2::<u8>::arbitrary(&mut unstructured).unwrap();
        assert!(xs2.len().get() >= 2);
    }
}
