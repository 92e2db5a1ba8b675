//! Concatenation.
//!
//! The guarantee of a concatenation is the sum of the guarantees of its operands, saturated at
//! two. For example, the concatenation of two [`Vec1`]s is a [`Vec2`].

use core::ops::Add;

use crate::vec0::Vec0;
use crate::vec1::Vec1;
use crate::vec2::Vec2;
use crate::Prefixed;

impl<T> Add for Vec0<T> {
    type Output = Vec0<T>;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.extend(rhs);
        self
    }
}

impl<T, R> Add<Vec0<T>> for Prefixed<T, R>
where
    R: Extend<T>,
{
    type Output = Self;

    fn add(mut self, rhs: Vec0<T>) -> Self::Output {
        self.extend(rhs);
        self
    }
}

impl<T> Add<Vec1<T>> for Vec0<T> {
    type Output = Vec1<T>;

    fn add(self, rhs: Vec1<T>) -> Self::Output {
        let (init, last) = rhs.into_init_and_last();
        Vec1::from_init_and_last(self + init, last)
    }
}

impl<T> Add<Vec2<T>> for Vec0<T> {
    type Output = Vec2<T>;

    fn add(self, rhs: Vec2<T>) -> Self::Output {
        let (init, last) = rhs.into_init_and_last();
        Vec2::from_init_and_last(self + init, last)
    }
}

impl<T> Add for Vec1<T> {
    type Output = Vec2<T>;

    fn add(self, rhs: Self) -> Self::Output {
        let (init, last) = rhs.into_init_and_last();
        Vec2::from_init_and_last(self + init, last)
    }
}

impl<T> Add<Vec2<T>> for Vec1<T> {
    type Output = Vec2<T>;

    fn add(self, rhs: Vec2<T>) -> Self::Output {
        let (init, last) = rhs.into_init_and_last();
        Vec2::from_init_and_last(self + init, last)
    }
}

// The left operand already carries the strongest guarantee.
impl<T, S> Add<Prefixed<T, S>> for Vec2<T>
where
    S: IntoIterator<Item = T>,
{
    type Output = Vec2<T>;

    fn add(mut self, rhs: Prefixed<T, S>) -> Self::Output {
        self.extend(rhs);
        self
    }
}
