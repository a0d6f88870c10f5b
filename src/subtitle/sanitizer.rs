/*!
 * Subtitle text cleanup.
 *
 * Draft text carries editor markup (`<font ...>`, `<b>`), bracketed
 * annotations and HTML-escaped characters. The sanitizer turns it into
 * plain text in one left-to-right pass:
 *
 * - `<...>` is dropped with its contents; an unclosed `<` drops the rest
 * - `[` and `]` are dropped, the text between them is kept
 * - a fixed set of entities is decoded; anything else starting with `&`
 *   passes through
 *
 * Decoded characters are emitted directly and never scanned again, so
 * `&lt;b&gt;` becomes the literal text `<b>`.
 */

/// Entities decoded by the sanitizer, matched case-sensitively
const ENTITIES: [(&str, char); 6] = [
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&amp;", '&'),
    ("&quot;", '"'),
    ("&#39;", '\''),
    ("&nbsp;", ' '),
];

/// Characters that start a rule
const SPECIAL: [char; 4] = ['<', '[', ']', '&'];

/// Return the plain-text form of `raw`
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    sanitize_into(&mut out, raw);
    out
}

/// Append the plain-text form of `raw` to `out`.
///
/// `out` is not cleared; callers reusing a buffer clear it first.
pub fn sanitize_into(out: &mut String, raw: &str) {
    let mut rest = raw;

    while let Some(pos) = rest.find(SPECIAL) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        // All SPECIAL characters are single-byte
        rest = match tail.as_bytes()[0] {
            b'<' => match tail.find('>') {
                Some(close) => &tail[close + 1..],
                // Unterminated tag swallows the remainder
                None => return,
            },
            b'[' | b']' => &tail[1..],
            _ => match decode_entity(tail) {
                Some((decoded, len)) => {
                    out.push(decoded);
                    &tail[len..]
                }
                None => {
                    out.push('&');
                    &tail[1..]
                }
            },
        };
    }

    out.push_str(rest);
}

/// Match a known entity at the start of `input`, returning the character and
/// the number of bytes consumed
fn decode_entity(input: &str) -> Option<(char, usize)> {
    ENTITIES
        .iter()
        .find(|(entity, _)| input.starts_with(entity))
        .map(|(entity, decoded)| (*decoded, entity.len()))
}
