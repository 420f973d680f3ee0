//! Lazy HTML token stream built on `html5gum`.

use std::io::{self, Read};

use html5gum::{DefaultEmitter, IoReader, Tokenizer};

pub use html5gum::{StartTag, Token};

/// Tokenize `reader` on demand.
///
/// Tokens are produced one at a time while the input is read in chunks. Recoverable
/// markup errors show up as [`Token::Error`] and the scan carries on after them. A
/// failed read is yielded once as `Err` and ends the stream. Contents of raw-text
/// elements such as `<script>` and `<textarea>` come through as text, not tags.
pub fn tokens<R: Read>(reader: R) -> impl Iterator<Item = io::Result<Token>> {
    let mut emitter = DefaultEmitter::default();
    emitter.naively_switch_states(true);

    Tokenizer::new_with_emitter(IoReader::new(reader), emitter).scan(false, |failed, item| {
        if *failed {
            return None;
        }
        *failed = item.is_err();
        Some(item)
    })
}
