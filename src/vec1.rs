//! A non-empty ordered collection.
//!
//! [`Vec1`] is a head followed by a [`Vec0`] rest, so it always has at least one item.

use core::mem;

use crate::vec0::Vec0;
use crate::vec2::Vec2;
use crate::{checked_position, Graded, OutOfBoundsError, Prefixed};

pub type Vec1<T> = Prefixed<T, Vec0<T>>;

impl<T> Prefixed<T, Vec0<T>> {
    pub fn from_item(item: T) -> Self {
        Prefixed::from_head_and_rest(item, Vec0::new())
    }

    pub fn from_head_and_tail<I>(head: T, tail: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Prefixed::from_head_and_rest(head, tail.into_iter().collect())
    }

    pub fn from_init_and_last<I>(init: I, last: T) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut init = init.into_iter();
        match init.next() {
            Some(head) => Prefixed::from_head_and_rest(head, Vec0::from_init_and_last(init, last)),
            None => Vec1::from_item(last),
        }
    }

    /// Gets the last item.
    ///
    /// This is the last item of the rest or the head when the rest is empty.
    pub fn last(&self) -> &T {
        self.rest().last().unwrap_or(self.head())
    }

    pub fn last_mut(&mut self) -> &mut T {
        let (head, rest) = self.split_first_mut();
        rest.last_mut().unwrap_or(head)
    }

    pub fn insert(&mut self, index: usize, item: T) {
        if let Err(error) = self.try_insert(index, item) {
            panic!("{}", error)
        }
    }

    /// Inserts an item at the given position.
    ///
    /// Inserting at position zero replaces the head and moves the old head to the front of the
    /// rest.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is greater than the length of the collection.
    pub fn try_insert(&mut self, index: usize, item: T) -> Result<(), OutOfBoundsError> {
        let index = checked_position(index, self.count())?;
        let (head, rest) = self.split_first_mut();
        match index.checked_sub(1) {
            Some(index) => rest.insert(index, item),
            None => rest.insert(0, mem::replace(head, item)),
        }
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

    /// Inserts the items of an iterator at the given position.
    ///
    /// Inserting a non-empty source at position zero makes its first item the head. Inserting
    /// an empty source has no effect.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is greater than the length of the collection.
    pub fn try_insert_all<I>(&mut self, index: usize, items: I) -> Result<(), OutOfBoundsError>
    where
        I: IntoIterator<Item = T>,
    {
        let index = checked_position(index, self.count())?;
        let (head, rest) = self.split_first_mut();
        match index.checked_sub(1) {
            Some(index) => rest.insert_all(index, items),
            None => {
                let mut items = items.into_iter();
                if let Some(first) = items.next() {
                    let head = mem::replace(head, first);
                    rest.insert_all(0, items.chain(Some(head)));
                }
            },
        }
        Ok(())
    }

    pub fn push(&mut self, item: T) {
        self.rest_mut().push(item)
    }

    pub fn into_init_and_last(self) -> (Vec0<T>, T) {
        let (head, rest) = self.into_head_and_rest();
        match rest.into_init_and_last() {
            Some((init, last)) => (Vec0::from_head_and_tail(head, init), last),
            None => (Vec0::new(), head),
        }
    }

    pub fn drop_last(self) -> Vec0<T> {
        self.into_init_and_last().0
    }

    pub fn map<U, F>(self, mut f: F) -> Vec1<U>
    where
        F: FnMut(T) -> U,
    {
        let (head, rest) = self.into_head_and_rest();
        let head = f(head);
        Prefixed::from_head_and_rest(head, rest.map(f))
    }

    pub fn try_map<U, E, F>(self, mut f: F) -> Result<Vec1<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let (head, rest) = self.into_head_and_rest();
        let head = f(head)?;
        Ok(Prefixed::from_head_and_rest(head, rest.try_map(f)?))
    }

    pub fn enumerate(self) -> Vec1<(usize, T)> {
        let (head, rest) = self.into_head_and_rest();
        Prefixed::from_head_and_rest(
            (0, head),
            rest.into_iter()
                .enumerate()
                .map(|(index, item)| (index + 1, item))
                .collect(),
        )
    }

    pub fn relax(self) -> Vec0<T> {
        self.into_vec0()
    }
}

impl<T> From<Vec2<T>> for Vec1<T> {
    fn from(items: Vec2<T>) -> Self {
        let (head, rest) = items.into_head_and_rest();
        Vec1::from_head_and_tail(head, rest)
    }
}

macro_rules! impl_from_array_for_vec1 {
    ($N:literal) => {
        impl<T> From<[T; $N]> for $crate::vec1::Vec1<T> {
            fn from(items: [T; $N]) -> Self {
                let [head, tail @ ..] = items;
                $crate::vec1::Vec1::from_head_and_tail(head, tail)
            }
        }
    };
}
crate::with_literals!(
    impl_from_array_for_vec1,
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
);

#[macro_export]
macro_rules! vec1 {
    ($head:expr $(,)?) => {
        $crate::vec1::Vec1::from_item($head)
    };
    ($head:expr, $($tail:expr),+ $(,)?) => {
        $crate::vec1::Vec1::from_head_and_tail($head, [$($tail,)+])
    };
}
pub use vec1;
