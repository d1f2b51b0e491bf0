//! Canonicalization of free-form names.
//!
//! Turns an arbitrary UTF-8 string into a [`CanonicalForm`]: the sequence of
//! code points every lookup in the engine is keyed on.
//!
//! ## Pipeline
//!
//! 1. Letter substitutions that must win over default Unicode behaviour
//!    (`Đ`, Turkish `ı`/`İ`, `Ø`, the `Œ`/`Æ` ligatures, the numero sign)
//! 2. Lower-casing
//! 3. Compatibility decomposition (NFKD)
//! 4. Removal of combining grave (U+0300) and acute (U+0301) accents only
//! 5. House-number marker cleanup: a `#` followed by optional ASCII spaces and
//!    then a digit or the end of the input becomes a space
//!
//! The output is a fixed point: canonicalizing it again yields the same form.
//! Code points that decomposition surfaces and that steps 1-2 would have
//! changed are folded once more right after step 3.

use smallvec::SmallVec;
use toponym_types::CanonicalForm;
use unicode_normalization::UnicodeNormalization;

const COMBINING_GRAVE: char = '\u{0300}';
const COMBINING_ACUTE: char = '\u{0301}';

/// Substitutions applied before lower-casing.
///
/// Returns the replacement and an optional second code point for the
/// ligatures that expand into two letters.
#[inline]
fn substitute(c: char) -> Option<(char, Option<char>)> {
    match c {
        // D with stroke (Vietnamese, Croatian). Unicode leaves it alone.
        '\u{0110}' | '\u{0111}' => Some(('d', None)),
        // Turkish dotless ı, and dotted İ which would otherwise lower-case
        // to i + U+0307.
        '\u{0131}' | '\u{0130}' => Some(('i', None)),
        // Ø ø
        '\u{00D8}' | '\u{00F8}' => Some(('o', None)),
        // Œ œ
        '\u{0152}' | '\u{0153}' => Some(('o', Some('e'))),
        // Æ æ
        '\u{00C6}' | '\u{00E6}' => Some(('a', Some('e'))),
        // №
        '\u{2116}' => Some(('#', None)),
        _ => None,
    }
}

/// Substitutes and lower-cases one code point into `out`.
#[inline]
fn fold_char<E: Extend<char>>(c: char, out: &mut E) {
    match substitute(c) {
        Some((first, Some(second))) => out.extend([first, second]),
        Some((first, None)) => out.extend([first]),
        None => out.extend(c.to_lowercase()),
    }
}

/// Returns true if [`fold_char`] would leave `c` untouched.
#[inline]
fn is_folded(c: char) -> bool {
    if substitute(c).is_some() {
        return false;
    }
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

#[inline(always)]
const fn is_stripped_accent(c: char) -> bool {
    matches!(c, COMBINING_GRAVE | COMBINING_ACUTE)
}

#[inline(always)]
const fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Replaces each `#` that is followed (after ASCII spaces) by a digit or the
/// end of input with a space.
///
/// Scans right to left so that every decision sees the final right-hand
/// context: `##5` becomes three code points `' ', ' ', '5'`, and a second pass
/// finds nothing left to replace.
fn clear_house_number_markers(s: &mut [char]) {
    let n = s.len();
    // Index of the first code point to the right that is not an ASCII space,
    // or `n` when only spaces remain.
    let mut next_significant = n;
    for i in (0..n).rev() {
        let c = s[i];
        if c == '#' && (next_significant == n || s[next_significant].is_ascii_digit()) {
            s[i] = ' ';
        }
        if !is_ascii_space(s[i]) {
            next_significant = i;
        }
    }
}

/// Canonicalizes `input` into `out`, clearing it first.
///
/// Reuses the buffer's capacity, so an indexer can canonicalize millions of
/// tokens through one buffer.
pub fn canonicalize_into(input: &str, out: &mut CanonicalForm) {
    out.clear();
    if input.is_empty() {
        return;
    }

    let mut folded: SmallVec<[char; 64]> = SmallVec::with_capacity(input.len());
    for c in input.chars() {
        fold_char(c, &mut folded);
    }

    let buf = out.as_mut_vec();
    buf.reserve(folded.len());

    if folded.iter().all(char::is_ascii) {
        // NFKD is the identity on ASCII.
        buf.extend_from_slice(&folded);
    } else {
        for c in folded.into_iter().nfkd() {
            if is_stripped_accent(c) {
                continue;
            }
            if is_folded(c) {
                buf.push(c);
            } else {
                fold_char(c, buf);
            }
        }
    }

    clear_house_number_markers(buf);
}

/// Canonicalizes `input` and returns a new form.
///
/// # Examples
///
/// ```
/// use toponym_core::analyzer::canonicalizer::canonicalize;
///
/// assert_eq!(canonicalize("Café").to_string(), "cafe");
/// assert_eq!(canonicalize("kv.№5").to_string(), "kv. 5");
/// ```
#[inline]
pub fn canonicalize(input: &str) -> CanonicalForm {
    let mut out = CanonicalForm::with_capacity(input.len());
    canonicalize_into(input, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(input: &str) -> String {
        canonicalize(input).to_string()
    }

    fn assert_fixed_point(input: &str) {
        let once = canonicalize(input);
        let twice = canonicalize(&once.to_string());
        assert_eq!(once, twice, "not a fixed point for {input:?}");
    }

    #[test]
    fn empty_input() {
        assert!(canonicalize("").is_empty());
    }

    #[test]
    fn ascii_lowercase() {
        assert_eq!(canon("MAIN Street"), "main street");
        assert_eq!(canon("123 ABC!"), "123 abc!");
    }

    #[test]
    fn case_and_accent_invariance() {
        assert_eq!(canonicalize("café"), canonicalize("CAFÉ"));
        assert_eq!(canon("Café"), "cafe");
        assert_eq!(canon("caf\u{0301}e"), "cafe");
        assert_eq!(canon("à la"), "a la");
    }

    #[test]
    fn other_combining_marks_survive() {
        assert_eq!(canon("Müller"), "mu\u{0308}ller");
        assert_eq!(canon("São"), "sa\u{0303}o");
    }

    #[test]
    fn d_with_stroke() {
        assert_eq!(canon("Đđ"), "dd");
        assert_eq!(canon("Đà"), "da");
    }

    #[test]
    fn turkish_i() {
        assert_eq!(canon("İstanbul"), "istanbul");
        assert_eq!(canon("ırmak"), "irmak");
        assert!(!canonicalize("İİİ").as_chars().contains(&'\u{0307}'));
    }

    #[test]
    fn danish_o() {
        assert_eq!(canon("Ørsted"), "orsted");
        assert_eq!(canon("København"), "kobenhavn");
    }

    #[test]
    fn ligatures_expand() {
        assert_eq!(canonicalize("Æble"), canonicalize("aeble"));
        assert_eq!(canon("æ"), "ae");
        assert_eq!(canon("Œuvre"), "oeuvre");
        assert_eq!(canon("cœur"), "coeur");
    }

    #[test]
    fn ligature_expansion_keeps_order() {
        assert_eq!(canon("ÆØÅ"), "aeoa\u{030A}");
    }

    #[test]
    fn numero_sign_becomes_house_number() {
        assert_eq!(canonicalize("kv.№5"), canonicalize("kv. 5"));
        assert_eq!(canon("№ 12"), "  12");
        assert_eq!(canon("#5"), " 5");
        assert_eq!(canon("dom #"), "dom  ");
    }

    #[test]
    fn hash_as_punctuation_is_kept() {
        assert_eq!(canon("C#sharp"), "c#sharp");
        assert_eq!(canon("a # b"), "a # b");
    }

    #[test]
    fn repeated_markers_are_stable() {
        assert_eq!(canon("##5"), "  5");
        assert_fixed_point("##5");
        assert_fixed_point("#a#1");
        assert_fixed_point("# # 7");
    }

    #[test]
    fn compatibility_decomposition() {
        assert_eq!(canon("ＡＢＣ"), "abc");
        assert_eq!(canon("ﬁre"), "fire");
        assert_eq!(canon("①"), "1");
        assert_eq!(canon("\u{00A0}x"), " x");
    }

    #[test]
    fn fullwidth_hash_is_cleaned() {
        assert_eq!(canon("＃5"), " 5");
    }

    #[test]
    fn decomposition_surfacing_uppercase_is_folded() {
        // BLACK-LETTER CAPITAL H has no lowercase mapping but decomposes to H.
        assert_eq!(canon("\u{210C}"), "h");
        // MATHEMATICAL ITALIC SMALL DOTLESS I decomposes to ı.
        assert_eq!(canon("\u{1D6A4}"), "i");
    }

    #[test]
    fn cyrillic_and_greek() {
        assert_eq!(canon("УЛИЦА"), "улица");
        assert_eq!(canon("ΟΔΟΣ"), "οδοσ");
    }

    #[test]
    fn vietnamese() {
        assert_eq!(canon("Đường"), "du\u{031B}o\u{031B}ng");
    }

    #[test]
    fn sharp_s_is_not_expanded() {
        assert_eq!(canon("Straße"), "straße");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "",
            "Main Street",
            "Café del Mar",
            "İstanbul Caddesi",
            "Ærøskøbing",
            "Œuvre",
            "kv.№5",
            "C#sharp",
            "##5",
            "Đại lộ Lê Lợi",
            "ＦＵＬＬ　ＷＩＤＴＨ",
            "\u{210C}\u{1D6A4}",
            "Ǆ",
            "náměstí Míru",
            "улица Ленина",
            "東京",
        ];
        for s in samples {
            assert_fixed_point(s);
        }
    }

    #[test]
    fn canonicalize_into_reuses_buffer() {
        let mut buf = CanonicalForm::with_capacity(64);
        canonicalize_into("RUE", &mut buf);
        assert_eq!(buf.to_string(), "rue");
        canonicalize_into("Straße", &mut buf);
        assert_eq!(buf.to_string(), "straße");
        canonicalize_into("", &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn long_ascii() {
        let input = "A".repeat(10_000);
        let out = canonicalize(&input);
        assert_eq!(out.len(), 10_000);
        assert!(out.as_chars().iter().all(|&c| c == 'a'));
    }

    #[test]
    fn unchanged_scripts() {
        assert_eq!(canon("東京"), "東京");
        assert_eq!(canon("שלום"), "שלום");
    }
}
