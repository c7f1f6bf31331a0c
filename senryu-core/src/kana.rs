//! Script normalization for Japanese kana
//!
//! Tokenizers, keyboards and stored ruby disagree about which kana script
//! they use. Everything in this crate is compared in hiragana, so these
//! conversions bring heterogeneous input into one comparable form:
//! - half-width katakana (U+FF61–U+FF9F) → full-width katakana
//! - full-width katakana (U+30A1–U+30F6) → hiragana
//! - hiragana (U+3041–U+3096) → full-width katakana
//!
//! All conversions are total: characters outside the source block pass
//! through unchanged, and converting already-converted text is a no-op.

/// Distance between a full-width katakana and its hiragana counterpart
const KANA_SHIFT: u32 = 0x60;

const FIRST_HALFWIDTH: u32 = 0xFF61;
const HALFWIDTH_VOICED_MARK: char = '\u{FF9E}';
const HALFWIDTH_SEMI_VOICED_MARK: char = '\u{FF9F}';

/// Full-width equivalents of U+FF61..=U+FF9F, in code point order
const HALFWIDTH_TABLE: [char; 63] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー',
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン', '゛', '゜',
];

/// Small kana that attach to the preceding character instead of forming a mora
pub const SMALL_KANA: [char; 8] = ['ゃ', 'ゅ', 'ょ', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ'];

/// Punctuation that appears in submissions but is not pronounced
pub const COUNTED_SYMBOLS: [char; 7] = ['。', '、', '「', '」', '・', '！', '？'];

/// Returns true for CJK unified ideographs and the iteration mark 々
pub fn is_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c) || c == '々'
}

/// Returns true if the string contains at least one ideograph
pub fn contains_ideograph(s: &str) -> bool {
    s.chars().any(is_ideograph)
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

pub fn is_halfwidth_katakana(c: char) -> bool {
    ('\u{FF61}'..='\u{FF9F}').contains(&c)
}

/// Small kana that do not add a mora of their own
pub fn is_small_kana(c: char) -> bool {
    SMALL_KANA.contains(&c)
}

/// Punctuation that is counted separately from morae
pub fn is_counted_symbol(c: char) -> bool {
    COUNTED_SYMBOLS.contains(&c)
}

/// Converts a single full-width katakana to hiragana
pub fn katakana_char_to_hiragana(c: char) -> char {
    if is_katakana(c) {
        shift(c, |code| code - KANA_SHIFT)
    } else {
        c
    }
}

/// Converts a single hiragana to full-width katakana
pub fn hiragana_char_to_katakana(c: char) -> char {
    if is_hiragana(c) {
        shift(c, |code| code + KANA_SHIFT)
    } else {
        c
    }
}

fn shift(c: char, f: impl Fn(u32) -> u32) -> char {
    char::from_u32(f(c as u32)).unwrap_or(c)
}

/// Maps half-width katakana and punctuation to their full-width forms.
///
/// A half-width base followed by ﾞ or ﾟ is composed into a single voiced
/// kana (`ｶﾞ` → `ガ`, `ﾊﾟ` → `パ`). A mark that cannot be composed becomes
/// the full-width spacing mark.
///
/// ```rust
/// use senryu_core::kana::halfwidth_kana_to_fullwidth;
///
/// assert_eq!(halfwidth_kana_to_fullwidth("ｻｸﾗ"), "サクラ");
/// assert_eq!(halfwidth_kana_to_fullwidth("ｶﾞｯｺｳ"), "ガッコウ");
/// assert_eq!(halfwidth_kana_to_fullwidth("abc"), "abc");
/// ```
pub fn halfwidth_kana_to_fullwidth(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if !is_halfwidth_katakana(c) {
            out.push(c);
            continue;
        }

        let base = HALFWIDTH_TABLE[(c as u32 - FIRST_HALFWIDTH) as usize];
        let composed = match chars.peek() {
            Some(&HALFWIDTH_VOICED_MARK) => compose_voiced(base),
            Some(&HALFWIDTH_SEMI_VOICED_MARK) => compose_semi_voiced(base),
            _ => None,
        };

        match composed {
            Some(voiced) => {
                chars.next();
                out.push(voiced);
            }
            None => out.push(base),
        }
    }

    out
}

fn compose_voiced(base: char) -> Option<char> {
    const VOICEABLE: &str = "カキクケコサシスセソタチツテトハヒフヘホ";
    if base == 'ウ' {
        Some('ヴ')
    } else if VOICEABLE.contains(base) {
        char::from_u32(base as u32 + 1)
    } else {
        None
    }
}

fn compose_semi_voiced(base: char) -> Option<char> {
    if "ハヒフヘホ".contains(base) {
        char::from_u32(base as u32 + 2)
    } else {
        None
    }
}

/// Shifts full-width katakana (U+30A1–U+30F6) down into the hiragana block.
///
/// ```rust
/// use senryu_core::kana::fullwidth_katakana_to_hiragana;
///
/// assert_eq!(fullwidth_katakana_to_hiragana("サクラ"), "さくら");
/// assert_eq!(fullwidth_katakana_to_hiragana("ラーメン"), "らーめん");
/// ```
pub fn fullwidth_katakana_to_hiragana(s: &str) -> String {
    s.chars().map(katakana_char_to_hiragana).collect()
}

/// Shifts hiragana (U+3041–U+3096) up into the full-width katakana block.
pub fn hiragana_to_fullwidth_katakana(s: &str) -> String {
    s.chars().map(hiragana_char_to_katakana).collect()
}

/// Brings any kana representation to hiragana: half-width katakana is
/// widened first, then full-width katakana is shifted down.
pub fn to_hiragana(s: &str) -> String {
    fullwidth_katakana_to_hiragana(&halfwidth_kana_to_fullwidth(s))
}
