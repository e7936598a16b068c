//! The mask rule table.
//!
//! Every symbol a mask may contain maps to exactly one [`Rule`]. Placeholders
//! validate against ASCII character classes; literals only ever match
//! themselves.
//!
//! ```text
//! 9 A #                  placeholders   (consume one valid input char)
//! . , : - / ( ) <space>  literals       (pass through or synthesize)
//! ```

use crate::{CharClasses, Rule};


/// The full mask alphabet, placeholders first.
pub const SYMBOLS: &[char] = &['9', 'A', '#', '.', ',', ':', '-', '/', '(', ')', ' '];

/// Returns true when `c` has an entry in the rule table.
pub fn is_mask_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}

pub(crate) fn get() -> Vec<Rule> {
    vec![
        placeholder!('9', "digit", r"^[0-9]$", CharClasses::DIGIT),
        placeholder!('A', "letter", r"^[a-zA-Z]$", CharClasses::LETTER),
        placeholder!('#', "alphanumeric", r"^[a-zA-Z0-9]$", CharClasses::DIGIT.union(CharClasses::LETTER)),
        literal!('.', "dot", r"^\.$"),
        literal!(',', "comma", r"^,$"),
        literal!(':', "colon", r"^:$"),
        literal!('-', "hyphen", r"^-$"),
        literal!('/', "slash", r"^/$"),
        literal!('(', "open_paren", r"^\($"),
        literal!(')', "close_paren", r"^\)$"),
        literal!(' ', "space", r"^ $"),
    ]
}
