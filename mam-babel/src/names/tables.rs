//! Fixed mnemonic tables for Hebrew characters.
//!
//! Mnemonics are Latin letters where a natural one exists, otherwise a Greek or
//! Cyrillic letter, a symbol, or a short bracketed code. Some codes are
//! ambiguous on purpose: `:` stands for both vocal and silent sheva, `a` for
//! both qamats gadol and qamats qatan written with the plain qamats point.

/// U+034F COMBINING GRAPHEME JOINER
pub const CGJ: char = '\u{034F}';

pub const LETTERS: &[(char, &str)] = &[
    ('\u{05D0}', "α"),  // alef: Greek alpha
    ('\u{05D1}', "v"),  // bet: v not b
    ('\u{05D2}', "g"),  // gimel
    ('\u{05D3}', "d"),  // dalet
    ('\u{05D4}', "h"),  // he
    ('\u{05D5}', "w"),  // vav
    ('\u{05D6}', "z"),  // zayin
    ('\u{05D7}', "x"),  // het
    ('\u{05D8}', "θ"),  // tet
    ('\u{05D9}', "y"),  // yod
    ('\u{05DA}', "k."), // final kaf
    ('\u{05DB}', "k"),  // kaf
    ('\u{05DC}', "l"),  // lamed
    ('\u{05DD}', "m."), // final mem
    ('\u{05DE}', "m"),  // mem
    ('\u{05DF}', "n."), // final nun
    ('\u{05E0}', "n"),  // nun
    ('\u{05E1}', "σ"),  // samekh: Greek sigma
    ('\u{05E2}', "ʕ"),  // ayin: pharyngeal voiced fricative
    ('\u{05E3}', "f."), // final pe: f. not p.
    ('\u{05E4}', "f"),  // pe: f not p
    ('\u{05E5}', "ц."), // final tsadi
    ('\u{05E6}', "ц"),  // tsadi: Cyrillic tse
    ('\u{05E7}', "q"),  // qof
    ('\u{05E8}', "r"),  // resh
    ('\u{05E9}', "$"),  // shin
    ('\u{05EA}', "τ"),  // tav: Greek tau
];

pub const POINTS: &[(char, &str)] = &[
    ('\u{FB1E}', "varika"), // Judeo-Spanish varika
    ('\u{05BC}', "·"),      // dagesh or mapiq
    ('\u{05BF}', "‾"),      // rafe
    ('\u{05C1}', "·sh"),    // shin dot
    ('\u{05C2}', "·si"),    // sin dot
    ('\u{05B0}', ":"),      // sheva
    ('\u{05B1}', ":∵"),     // hataf segol
    ('\u{05B2}', ":_"),     // hataf patah
    ('\u{05B3}', ":a"),     // hataf qamats
    ('\u{05B4}', "i"),      // hiriq
    ('\u{05B5}', "‥"),      // tsere
    ('\u{05B6}', "∵"),      // segol
    ('\u{05B7}', "_"),      // patah
    ('\u{05B8}', "a"),      // qamats
    ('\u{05C7}', "oa"),     // qamats qatan
    ('\u{05BA}', "hhfv"),   // holam haser for vav
    ('\u{05B9}', "o"),      // holam
    ('\u{05BB}', "u"),      // qubuts
];

pub const PUNCTUATION: &[(char, &str)] = &[
    ('\u{05BE}', "-"), // maqaf
    ('\u{05C0}', "|"), // paseq
    ('\u{05C3}', "."), // sof pasuq
];

/// Accents. Meteg is listed here rather than with the points.
pub const ACCENTS: &[(char, &str)] = &[
    ('\u{05BD}', "𝓂"),    // meteg
    ('\u{0591}', "⅄"),    // etnahta
    ('\u{0592}', "∴"),    // segol (accent)
    ('\u{0593}', "(sh)"), // shalshelet
    ('\u{0594}', "ƶ"),    // zaqef qatan
    ('\u{0595}', "Ƶ"),    // zaqef gadol
    ('\u{0596}', "(ti)"), // tipeha
    ('\u{0597}', "◆"),    // revia
    ('\u{0598}', "≁"),    // zarqa
    ('\u{0599}', "(p)"),  // pashta
    ('\u{059A}', "(ye)"), // yetiv
    ('\u{059B}', "⟓"),    // tevir
    ('\u{059C}', "(ge)"), // geresh
    ('\u{059D}', "γ"),    // geresh muqdam
    ('\u{059E}', "(G)"),  // gershayim
    ('\u{059F}', "(qp)"), // qarney para
    ('\u{05A0}', "⌕"),    // telisha gedola
    ('\u{05A1}', "μ"),    // pazer
    ('\u{05A2}', "(ah)"), // atnah hafukh
    ('\u{05A3}', "⅃"),    // munah
    ('\u{05A4}', "<"),    // mahapakh
    ('\u{05A5}', "(me)"), // merkha
    ('\u{05A6}', "(mk)"), // merkha kefula
    ('\u{05A7}', "(da)"), // darga
    ('\u{05A8}', "(qa)"), // qadma
    ('\u{05A9}', "(tq)"), // telisha qetana
    ('\u{05AA}', "(yy)"), // yerah ben yomo
    ('\u{05AB}', "(ol)"), // ole
    ('\u{05AC}', "(il)"), // iluy
    ('\u{05AD}', "(de)"), // dehi
    ('\u{05AE}', "~"),    // zinor
];

/// Non-Hebrew characters with fixed short names.
pub const MISC: &[(char, &str)] = &[(CGJ, "CGJ")];

/// Two-word Unicode name prefixes and their abbreviations.
pub const NAME_PREFIXES: &[((&str, &str), &str)] = &[
    (("HEBREW", "LETTER"), "HLE"),
    (("HEBREW", "POINT"), "HPO"),
    (("HEBREW", "ACCENT"), "HAC"),
    (("HEBREW", "PUNCTUATION"), "HPU"),
    (("HEBREW", "MARK"), "HMA"),
];
