//! Zipping of graded collections.
//!
//! A zip pairs items by position and carries the lesser guarantee of its operands. Zipping with
//! a [`Vec0`] relaxes every operand and truncates at the shortest. Zipping two [`Prefixed`]
//! collections pairs their heads and zips their rests.

use crate::vec0::Vec0;
use crate::{Graded, Prefixed};

pub trait Zip<Rhs>: Graded
where
    Rhs: Graded,
{
    type Output<U>: Graded<Item = U>;

    /// Combines the items of `self` and `rhs` by position.
    ///
    /// Items are combined from the front. Excess items of the longer operand are discarded.
    fn zip_with<U, F>(self, rhs: Rhs, f: F) -> Self::Output<U>
    where
        F: FnMut(Self::Item, Rhs::Item) -> U;

    fn zip(self, rhs: Rhs) -> Self::Output<(Self::Item, Rhs::Item)> {
        self.zip_with(rhs, |lhs, rhs| (lhs, rhs))
    }
}

impl<A, B> Zip<Vec0<B>> for Vec0<A> {
    type Output<U> = Vec0<U>;

    fn zip_with<U, F>(self, rhs: Vec0<B>, mut f: F) -> Self::Output<U>
    where
        F: FnMut(A, B) -> U,
    {
        self.into_iter()
            .zip(rhs)
            .map(|(lhs, rhs)| f(lhs, rhs))
            .collect()
    }
}

impl<A, B, S> Zip<Prefixed<B, S>> for Vec0<A>
where
    S: Graded<Item = B>,
{
    type Output<U> = Vec0<U>;

    fn zip_with<U, F>(self, rhs: Prefixed<B, S>, f: F) -> Self::Output<U>
    where
        F: FnMut(A, B) -> U,
    {
        self.zip_with(rhs.into_vec0(), f)
    }
}

impl<A, B, R> Zip<Vec0<B>> for Prefixed<A, R>
where
    R: Graded<Item = A>,
{
    type Output<U> = Vec0<U>;

    fn zip_with<U, F>(self, rhs: Vec0<B>, f: F) -> Self::Output<U>
    where
        F: FnMut(A, B) -> U,
    {
        self.into_vec0().zip_with(rhs, f)
    }
}

impl<A, B, R, S> Zip<Prefixed<B, S>> for Prefixed<A, R>
where
    R: Graded<Item = A> + Zip<S>,
    S: Graded<Item = B>,
{
    type Output<U> = Prefixed<U, R::Output<U>>;

    fn zip_with<U, F>(self, rhs: Prefixed<B, S>, mut f: F) -> Self::Output<U>
    where
        F: FnMut(A, B) -> U,
    {
        let (lhs, r) = self.into_head_and_rest();
        let (rhs, s) = rhs.into_head_and_rest();
        let head = f(lhs, rhs);
        Prefixed::from_head_and_rest(head, r.zip_with(s, f))
    }
}

pub trait Zip3<B, C>: Graded
where
    B: Graded,
    C: Graded,
{
    type Output: Graded<Item = (Self::Item, B::Item, C::Item)>;

    fn zip3(self, b: B, c: C) -> Self::Output;
}

impl<A, B, C> Zip3<B, C> for A
where
    A: Zip<<B as Zip<C>>::Output<(B::Item, C::Item)>>,
    B: Zip<C>,
    C: Graded,
{
    type Output = <A as Zip<<B as Zip<C>>::Output<(B::Item, C::Item)>>>::Output<(
        A::Item,
        B::Item,
        C::Item,
    )>;

    fn zip3(self, b: B, c: C) -> Self::Output {
        self.zip_with(b.zip(c), |a, (b, c)| (a, b, c))
    }
}

pub fn zip<A, B>(a: A, b: B) -> A::Output<(A::Item, B::Item)>
where
    A: Zip<B>,
    B: Graded,
{
    a.zip(b)
}

pub fn zip3<A, B, C>(a: A, b: B, c: C) -> A::Output
where
    A: Zip3<B, C>,
    B: Graded,
    C: Graded,
{
    a.zip3(b, c)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::vec0::harness::{empty, xs0};
    use crate::vec0::Vec0;
    use crate::vec1::harness::xs1;
    use crate::vec1::Vec1;
    use crate::vec2::harness::xs2;
    use crate::vec2::Vec2;
    use crate::zip::{zip, zip3, Zip};

    #[rstest]
    fn zip_vec2_and_vec2_then_vec2_truncated(#[with(2)] xs2: Vec2<u8>) {
        let ys2 = crate::vec2!['a', 'b', 'c', 'd', 'e'];
        let zs2: Vec2<(u8, char)> = zip(xs2, ys2);
        assert_eq!(zs2.into_vec(), &[(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[rstest]
    fn zip_vec1_and_vec2_then_vec1_eq(#[with(0)] xs1: Vec1<u8>, xs2: Vec2<u8>) {
        let zs1: Vec1<(u8, u8)> = xs1.zip(xs2);
        assert_eq!(zs1.into_vec(), &[(0, 0)]);
    }

    #[rstest]
    fn zip_vec2_and_vec1_then_vec1_eq(xs2: Vec2<u8>, xs1: Vec1<u8>) {
        let zs1: Vec1<(u8, u8)> = xs2.zip(xs1);
        assert_eq!(zs1.len().get(), 5);
    }

    #[rstest]
    fn zip_vec2_and_empty_vec0_then_empty_vec0(xs2: Vec2<u8>, empty: Vec0<u8>) {
        let zs0: Vec0<(u8, u8)> = xs2.zip(empty);
        assert!(zs0.is_empty());
    }

    #[rstest]
    fn zip_vec0_and_vec1_then_vec0_truncated(#[with(1)] xs0: Vec0<u8>, xs1: Vec1<u8>) {
        let zs0: Vec0<(u8, u8)> = xs0.zip(xs1);
        assert_eq!(zs0.as_slice(), &[(0, 0), (1, 1)]);
    }

    #[rstest]
    fn zip_with_vec1_and_vec1_then_combined(xs1: Vec1<u8>) {
        let zs1 = xs1.clone().zip_with(xs1, |lhs, rhs| lhs + rhs);
        assert_eq!(zs1.into_vec(), &[0, 2, 4, 6, 8]);
    }

    #[rstest]
    fn zip3_vec2_and_vec2_and_vec2_then_vec2_eq(#[with(1)] xs2: Vec2<u8>) {
        let zs2: Vec2<(u8, char, bool)> =
            zip3(xs2, crate::vec2!['a', 'b', 'c'], crate::vec2![true, false]);
        assert_eq!(zs2.into_vec(), &[(0, 'a', true), (1, 'b', false)]);
    }

    #[rstest]
    fn zip3_vec2_and_vec1_and_vec0_then_vec0_eq(
        xs2: Vec2<u8>,
        xs1: Vec1<u8>,
        #[with(2)] xs0: Vec0<u8>,
    ) {
        let zs0: Vec0<(u8, u8, u8)> = zip3(xs2, xs1, xs0);
        assert_eq!(zs0.len(), 3);
    }

    #[rstest]
    fn zip3_vec1_and_vec2_and_vec2_then_vec1_eq(xs1: Vec1<u8>, xs2: Vec2<u8>) {
        let zs1: Vec1<(u8, u8, u8)> = zip3(xs1, xs2.clone(), xs2);
        assert_eq!(*zs1.last(), (4, 4, 4));
    }
}
