/*!
Digit masks for keyboard input.
*/

/// Mask placeholder standing for one digit.
const SLOT: char = '#';

/// Keeps only the ASCII digits of `raw`.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Renders `raw` through `pattern`.
///
/// Non-digit characters in `raw` are ignored. Every `#` in `pattern` takes the next
/// digit; any other pattern character is a separator, emitted only when another digit
/// follows it. Digits left over once the pattern is exhausted are dropped, so the
/// output never grows past `pattern.len()`.
pub(crate) fn apply(raw: &str, pattern: &str) -> String {
    let mut input = raw.chars().filter(char::is_ascii_digit).peekable();
    let mut out = String::with_capacity(pattern.len());

    for slot in pattern.chars() {
        if input.peek().is_none() {
            break;
        }
        if slot == SLOT {
            if let Some(digit) = input.next() {
                out.push(digit);
            }
        } else {
            out.push(slot);
        }
    }

    out
}
