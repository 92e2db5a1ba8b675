//! An ordered collection with at least two items.

use core::mem;

use crate::vec0::Vec0;
use crate::vec1::Vec1;
use crate::{checked_position, Graded, OutOfBoundsError, Prefixed, TooShortError};

pub type Vec2<T> = Prefixed<T, Vec1<T>>;

impl<T> Prefixed<T, Vec1<T>> {
    pub fn from_head_and_tail<U>(head: T, tail: U) -> Self
    where
        U: Into<Vec1<T>>,
    {
        Prefixed::from_head_and_rest(head, tail.into())
    }

    pub fn from_init_and_last<U>(init: U, last: T) -> Self
    where
        U: Into<Vec1<T>>,
    {
        let (head, rest) = init.into().into_head_and_rest();
        Prefixed::from_head_and_rest(head, Vec1::from_init_and_last(rest, last))
    }

    /// Constructs a `Vec2` from a head and an iterator over the remaining items.
    ///
    /// # Errors
    ///
    /// Returns the head if the iterator is empty.
    pub fn try_from_head_and_tail<I>(head: T, tail: I) -> Result<Self, TooShortError<Vec0<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = tail.into_iter();
        match tail.next() {
            Some(second) => Ok(Prefixed::from_head_and_rest(
                head,
                Vec1::from_head_and_tail(second, tail),
            )),
            None => Err(TooShortError::new(Vec0::from([head]), 1, Self::MIN_LEN)),
        }
    }

    /// Constructs a `Vec2` from an iterator over the leading items and a last item.
    ///
    /// # Errors
    ///
    /// Returns the last item if the iterator is empty.
    pub fn try_from_init_and_last<I>(init: I, last: T) -> Result<Self, TooShortError<Vec0<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut init = init.into_iter();
        match init.next() {
            Some(head) => Ok(Prefixed::from_head_and_rest(
                head,
                Vec1::from_init_and_last(init, last),
            )),
            None => Err(TooShortError::new(Vec0::from([last]), 1, Self::MIN_LEN)),
        }
    }

    pub fn second(&self) -> &T {
        self.rest().head()
    }

    pub fn last(&self) -> &T {
        self.rest().last()
    }

    pub fn last_mut(&mut self) -> &mut T {
        self.rest_mut().last_mut()
    }

    pub fn insert(&mut self, index: usize, item: T) {
        if let Err(error) = self.try_insert(index, item) {
            panic!("{}", error)
        }
    }

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

    pub fn into_init_and_last(self) -> (Vec1<T>, T) {
        let (head, rest) = self.into_head_and_rest();
        let (init, last) = rest.into_init_and_last();
        (Vec1::from_head_and_tail(head, init), last)
    }

    pub fn drop_last(self) -> Vec1<T> {
        self.into_init_and_last().0
    }

    pub fn map<U, F>(self, mut f: F) -> Vec2<U>
    where
        F: FnMut(T) -> U,
    {
        let (head, rest) = self.into_head_and_rest();
        let head = f(head);
        Prefixed::from_head_and_rest(head, rest.map(f))
    }

    pub fn try_map<U, E, F>(self, mut f: F) -> Result<Vec2<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let (head, rest) = self.into_head_and_rest();
        let head = f(head)?;
        Ok(Prefixed::from_head_and_rest(head, rest.try_map(f)?))
    }

    pub fn enumerate(self) -> Vec2<(usize, T)> {
        let (head, rest) = self.into_head_and_rest();
        Prefixed::from_head_and_rest(
            (0, head),
            rest.enumerate().map(|(index, item)| (index + 1, item)),
        )
    }

    /// Weakens the guarantee by one level.
    ///
    /// Use [`into_vec0`][`Prefixed::into_vec0`] to drop the guarantee entirely.
    pub fn relax(self) -> Vec1<T> {
        Vec1::from(self)
    }
}

impl<T> TryFrom<Vec1<T>> for Vec2<T> {
    type Error = TooShortError<Vec1<T>>;

    fn try_from(items: Vec1<T>) -> Result<Self, Self::Error> {
        let (head, rest) = items.into_head_and_rest();
        match rest.into_head_and_tail() {
            Some((second, tail)) => Ok(Prefixed::from_head_and_rest(
                head,
                Prefixed::from_head_and_rest(second, tail),
            )),
            None => Err(TooShortError::new(Vec1::from_item(head), 1, Self::MIN_LEN)),
        }
    }
}

macro_rules! impl_from_array_for_vec2 {
    ($N:literal) => {
        impl<T> From<[T; $N]> for $crate::vec2::Vec2<T> {
            fn from(items: [T; $N]) -> Self {
                let [head, second, tail @ ..] = items;
                $crate::vec2::Vec2::from_head_and_tail(
                    head,
                    $crate::vec1::Vec1::from_head_and_tail(second, tail),
                )
            }
        }
    };
}
crate::with_literals!(
    impl_from_array_for_vec2,
    [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
);

#[macro_export]
macro_rules! vec2 {
    ($head:expr, $($tail:expr),+ $(,)?) => {
        $crate::vec2::Vec2::from_head_and_tail($head, $crate::vec1![$($tail,)+])
    };
}
pub use vec2;
