/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Implicit-multiplication normalizer.
//!
//! One left-to-right pass inserts `*` wherever two terms are juxtaposed:
//!
//! | before      | after        |
//! |-------------|--------------|
//! | `2(x+1)`    | `2*(x+1)`    |
//! | `(x+1)y`    | `(x+1)*y`    |
//! | `(a)(b)`    | `(a)*(b)`    |
//! | `2x`, `x2`  | `2*x`, `x*2` |
//!
//! The inserted `*` matches none of the rules, so running the pass on its own
//! output changes nothing.

/// Inserts explicit `*` markers between juxtaposed terms.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut chars = text.chars().peekable();
    while let Some(current) = chars.next() {
        out.push(current);
        // The successor is not consumed, so it can open the next boundary (`2x(` -> `2*x*(`).
        if let Some(&next) = chars.peek() {
            if needs_star(current, next) {
                out.push('*');
            }
        }
    }
    out
}

/// Returns whether `current` followed by `next` is an implicit product.
fn needs_star(current: char, next: char) -> bool {
    let alnum = |c: char| c.is_ascii_alphanumeric();
    (alnum(current) && next == '(')
        || (current == ')' && alnum(next))
        || (current == ')' && next == '(')
        || (current.is_ascii_alphabetic() && next.is_ascii_digit())
        || (current.is_ascii_digit() && next.is_ascii_alphabetic())
}
