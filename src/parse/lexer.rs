use winnow::combinator::{alt, repeat};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::stream::LocatingSlice;
use winnow::token::take_while;

pub(crate) type Input<'i> = LocatingSlice<&'i str>;

/// A raw lexical item, before keyword classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lexeme<'i> {
    Word(&'i str),
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Spanned<'i> {
    pub(crate) lexeme: Lexeme<'i>,
    pub(crate) offset: usize,
}

/// Word characters: Unicode alphanumerics and `_`.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_separator(c: char) -> bool {
    !is_word_char(c) && c != '(' && c != ')'
}

// -- Lexemes ----------------------------------------------------------------

fn word<'i>(input: &mut Input<'i>) -> ModalResult<Lexeme<'i>> {
    take_while(1.., is_word_char)
        .map(Lexeme::Word)
        .parse_next(input)
}

fn paren<'i>(input: &mut Input<'i>) -> ModalResult<Lexeme<'i>> {
    alt(('('.value(Lexeme::Open), ')'.value(Lexeme::Close))).parse_next(input)
}

// Punctuation and whitespace carry no meaning.
fn separator(input: &mut Input<'_>) -> ModalResult<()> {
    take_while(1.., is_separator).void().parse_next(input)
}

fn lexeme<'i>(input: &mut Input<'i>) -> ModalResult<Option<Spanned<'i>>> {
    alt((
        alt((word, paren))
            .with_span()
            .map(|(lexeme, span)| {
                Some(Spanned {
                    lexeme,
                    offset: span.start,
                })
            }),
        separator.value(None),
    ))
    .parse_next(input)
}

// -- Top-level --------------------------------------------------------------

pub(crate) fn lexemes<'i>(input: &mut Input<'i>) -> ModalResult<Vec<Spanned<'i>>> {
    let items: Vec<Option<Spanned<'i>>> = repeat(0.., lexeme).parse_next(input)?;
    Ok(items.into_iter().flatten().collect())
}
