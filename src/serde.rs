#![cfg(feature = "serde")]
#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

// Graded collections (de)serialize through `Vec0`. See the `serde` attributes on `Prefixed`.

#[cfg(test)]
pub mod harness {
    use alloc::vec::Vec;
    use core::fmt::Debug;
    use rstest::fixture;
    use serde::{Deserialize, Serialize};
    use serde_test::Token;

    #[fixture]
    pub fn sequence(#[default(5)] len: u8) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(usize::from(len) + 2);
        tokens.push(Token::Seq {
            len: Some(usize::from(len)),
        });
        tokens.extend((0..len).map(Token::U8));
        tokens.push(Token::SeqEnd);
        tokens
    }

    pub fn assert_into_and_from_tokens_eq<T>(items: T, tokens: Vec<Token>)
    where
        T: Debug + for<'de> Deserialize<'de> + PartialEq + Serialize,
    {
        serde_test::assert_tokens(&items, &tokens)
    }

    pub fn assert_deserialize_error_eq<T>(tokens: Vec<Token>, expected: &str)
    where
        T: Debug + for<'de> Deserialize<'de>,
    {
        serde_test::assert_de_tokens_error::<T>(&tokens, expected)
    }
}
