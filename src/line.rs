//! Line break opportunities (UAX #14, Unicode 15.1).
//!
//! The heaviest of the four machines. The regular rules live in the usual
//! dense table; everything that needs more than the previous character's
//! class is layered on top:
//!
//! - orthogonal bits in the state for LB8a (ZWJ suffix), LB30 (close
//!   parenthesis that is not East-Asian wide), LB15a (open quote chain), and
//!   LB28a (dotted circle);
//! - space-run states (`OP SP*`, `ZW SP*`, `(CL|CP) SP*`, `B2 SP*`) so the
//!   through-space rules LB8, LB14, LB16, and LB17 survive LB18;
//! - one-code-point lookahead for LB15b, LB25, and LB28a;
//! - LB9/LB10 combining-mark attachment resolved before the table.
//!
//! Returned break classes are [`LineBreak::DontBreak`], [`CanBreak`],
//! or [`MustBreak`].
//!
//! [`CanBreak`]: LineBreak::CanBreak
//! [`MustBreak`]: LineBreak::MustBreak

use crate::config::Config;
use crate::decode::{decode_char, decode_last_char, REPLACEMENT};
use crate::properties::{
    EastAsianWidth, GeneralCategory, LineProperty, LINE_PROPERTY_COUNT,
};
use crate::tables::{EAST_ASIAN_WIDTH, LINE_BREAK};

/// Whether a line may, must, or must not be broken after a position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineBreak {
    /// The line may not be broken here.
    #[default]
    DontBreak = 0,
    /// The line may be broken here.
    CanBreak = 1,
    /// The line must be broken here.
    MustBreak = 2,
}

/// Opaque state of the line break machine. The default value is the initial
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineBreakState(pub(crate) i32);

// Machine states; zero is the initial state with an empty table row. The
// states remember the previous significant character and, where a rule works
// through spaces, what preceded the space run.
const LB_ANY: u32 = 1;
const LB_BK: u32 = 2;
const LB_CR: u32 = 3;
const LB_LF: u32 = 4;
const LB_NL: u32 = 5;
const LB_SP: u32 = 6;
const LB_ZW: u32 = 7;
const LB_ZWSP: u32 = 8;
const LB_WJ: u32 = 9;
const LB_GL: u32 = 10;
const LB_OP: u32 = 11;
const LB_OPSP: u32 = 12;
const LB_QU: u32 = 13;
const LB_CL: u32 = 14;
const LB_CP: u32 = 15;
const LB_CLCPSP: u32 = 16;
const LB_B2: u32 = 17;
const LB_B2SP: u32 = 18;
const LB_BA: u32 = 19;
const LB_HY: u32 = 20;
const LB_CB: u32 = 21;
const LB_BB: u32 = 22;
const LB_HL: u32 = 23;
const LB_HLHYBA: u32 = 24;
const LB_AL: u32 = 25;
const LB_NU: u32 = 26;
const LB_NUSY: u32 = 27;
const LB_NUIS: u32 = 28;
const LB_NUCL: u32 = 29;
const LB_NUCP: u32 = 30;
const LB_PR: u32 = 31;
const LB_PO: u32 = 32;
const LB_IS: u32 = 33;
const LB_SY: u32 = 34;
const LB_JL: u32 = 35;
const LB_JV: u32 = 36;
const LB_JT: u32 = 37;
const LB_H2: u32 = 38;
const LB_H3: u32 = 39;
const LB_RI_ODD: u32 = 40;
const LB_RI_EVEN: u32 = 41;
const LB_EB: u32 = 42;
const LB_IDEM: u32 = 43;
const LB_EXT_PIC_CN: u32 = 44;
const LB_AK: u32 = 45;
const LB_AP: u32 = 46;
const LB_AKVI: u32 = 47;
const LB_STATE_COUNT: usize = 48;

const LB_STATE_MASK: u32 = 0x3f;
/// The previous character was a zero-width joiner (LB8a).
const LB_ZWJ_BIT: u32 = 0x40;
/// The previous character was a CP with East-Asian width other than F, W, H
/// (right half of LB30).
const LB_CPEAFWH_BIT: u32 = 0x80;
/// Inside a `[Pi QU] SP*` chain opened in an LB15a context.
const LB_PIQU_BIT: u32 = 0x100;
/// The previous character was U+25CC DOTTED CIRCLE (LB28a).
const LB_DOTTED_BIT: u32 = 0x200;

const DOTTED_CIRCLE: char = '\u{25cc}';

#[derive(Clone, Copy)]
struct LbTransition {
    target: u32,
    break_class: LineBreak,
    rule: u16,
}

const LB_ABSENT: LbTransition = LbTransition {
    target: LB_ANY,
    break_class: LineBreak::CanBreak,
    rule: 0,
};

/// Line break transitions, resolved like the other machines: the specific
/// entry first, then the two wildcards with the lower-numbered rule deciding
/// the break class and the property column deciding the new state, then
/// LB31 (break everywhere).
static LB_TRANSITIONS: [LbTransition; LB_STATE_COUNT * LINE_PROPERTY_COUNT] =
    build_line_transitions();

const fn build_line_transitions() -> [LbTransition; LB_STATE_COUNT * LINE_PROPERTY_COUNT] {
    use LineBreak::{CanBreak, DontBreak, MustBreak};
    use LineProperty as P;
    type Rule = (u32, P, u32, LineBreak, u16);
    const RULES: &[Rule] = &[
        // Property wildcards: where each class leads and its default break
        // before, keyed off the rule that usually governs it.
        (LB_ANY, P::Bk, LB_BK, DontBreak, 60), // LB6
        (LB_ANY, P::Cr, LB_CR, DontBreak, 60),
        (LB_ANY, P::Lf, LB_LF, DontBreak, 60),
        (LB_ANY, P::Nl, LB_NL, DontBreak, 60),
        (LB_ANY, P::Sp, LB_SP, DontBreak, 70), // LB7
        (LB_ANY, P::Zw, LB_ZW, DontBreak, 70),
        (LB_ANY, P::Wj, LB_WJ, DontBreak, 110), // LB11
        (LB_ANY, P::Gl, LB_GL, DontBreak, 121), // LB12a
        (LB_ANY, P::Cl, LB_CL, DontBreak, 130), // LB13
        (LB_ANY, P::Cp, LB_CP, DontBreak, 130),
        (LB_ANY, P::Ex, LB_ANY, DontBreak, 130),
        (LB_ANY, P::Is, LB_IS, DontBreak, 130),
        (LB_ANY, P::Sy, LB_SY, DontBreak, 130),
        (LB_ANY, P::Qu, LB_QU, DontBreak, 190), // LB19
        (LB_ANY, P::Cb, LB_CB, CanBreak, 200),  // LB20
        (LB_ANY, P::Ba, LB_BA, DontBreak, 210), // LB21
        (LB_ANY, P::Hy, LB_HY, DontBreak, 210),
        (LB_ANY, P::Ns, LB_ANY, DontBreak, 210),
        (LB_ANY, P::In, LB_ANY, DontBreak, 220), // LB22
        // LB31 defaults for everything else.
        (LB_ANY, P::Op, LB_OP, CanBreak, 310),
        (LB_ANY, P::B2, LB_B2, CanBreak, 310),
        (LB_ANY, P::Bb, LB_BB, CanBreak, 310),
        (LB_ANY, P::Nu, LB_NU, CanBreak, 310),
        (LB_ANY, P::Al, LB_AL, CanBreak, 310),
        (LB_ANY, P::Hl, LB_HL, CanBreak, 310),
        (LB_ANY, P::Pr, LB_PR, CanBreak, 310),
        (LB_ANY, P::Po, LB_PO, CanBreak, 310),
        (LB_ANY, P::Id, LB_IDEM, CanBreak, 310),
        (LB_ANY, P::Em, LB_IDEM, CanBreak, 310),
        (LB_ANY, P::Eb, LB_EB, CanBreak, 310),
        (LB_ANY, P::Jl, LB_JL, CanBreak, 310),
        (LB_ANY, P::Jv, LB_JV, CanBreak, 310),
        (LB_ANY, P::Jt, LB_JT, CanBreak, 310),
        (LB_ANY, P::H2, LB_H2, CanBreak, 310),
        (LB_ANY, P::H3, LB_H3, CanBreak, 310),
        (LB_ANY, P::Ri, LB_RI_ODD, CanBreak, 310),
        (LB_ANY, P::Ak, LB_AK, CanBreak, 310),
        (LB_ANY, P::As, LB_AK, CanBreak, 310),
        (LB_ANY, P::Ap, LB_AP, CanBreak, 310),
        (LB_ANY, P::Vf, LB_ANY, CanBreak, 310),
        (LB_ANY, P::Vi, LB_ANY, CanBreak, 310),
        // State wildcards.
        (LB_BK, P::Xx, LB_ANY, MustBreak, 40), // LB4
        (LB_CR, P::Xx, LB_ANY, MustBreak, 50), // LB5
        (LB_LF, P::Xx, LB_ANY, MustBreak, 50),
        (LB_NL, P::Xx, LB_ANY, MustBreak, 50),
        (LB_ZW, P::Xx, LB_ANY, CanBreak, 80), // LB8
        (LB_ZWSP, P::Xx, LB_ANY, CanBreak, 80),
        (LB_SP, P::Xx, LB_ANY, CanBreak, 180), // LB18
        (LB_CLCPSP, P::Xx, LB_ANY, CanBreak, 180),
        (LB_B2SP, P::Xx, LB_ANY, CanBreak, 180),
        (LB_WJ, P::Xx, LB_ANY, DontBreak, 110), // LB11
        (LB_GL, P::Xx, LB_ANY, DontBreak, 120), // LB12
        (LB_OP, P::Xx, LB_ANY, DontBreak, 140), // LB14
        (LB_OPSP, P::Xx, LB_ANY, DontBreak, 140),
        (LB_QU, P::Xx, LB_ANY, DontBreak, 190), // LB19
        (LB_CB, P::Xx, LB_ANY, CanBreak, 200),  // LB20
        (LB_BB, P::Xx, LB_ANY, DontBreak, 210), // LB21
        (LB_HLHYBA, P::Xx, LB_ANY, DontBreak, 211), // LB21a
        // LB5: CR x LF.
        (LB_CR, P::Lf, LB_LF, DontBreak, 50),
        // LB7 with space-run memory for LB8, LB14, LB16, LB17.
        (LB_ZW, P::Sp, LB_ZWSP, DontBreak, 70),
        (LB_ZWSP, P::Sp, LB_ZWSP, DontBreak, 70),
        (LB_OP, P::Sp, LB_OPSP, DontBreak, 70),
        (LB_OPSP, P::Sp, LB_OPSP, DontBreak, 70),
        (LB_CL, P::Sp, LB_CLCPSP, DontBreak, 70),
        (LB_CP, P::Sp, LB_CLCPSP, DontBreak, 70),
        (LB_NUCL, P::Sp, LB_CLCPSP, DontBreak, 70),
        (LB_NUCP, P::Sp, LB_CLCPSP, DontBreak, 70),
        (LB_CLCPSP, P::Sp, LB_CLCPSP, DontBreak, 70),
        (LB_B2, P::Sp, LB_B2SP, DontBreak, 70),
        (LB_B2SP, P::Sp, LB_B2SP, DontBreak, 70),
        // LB12a does not protect GL after SP, BA, or HY.
        (LB_SP, P::Gl, LB_GL, CanBreak, 180),
        (LB_CLCPSP, P::Gl, LB_GL, CanBreak, 180),
        (LB_B2SP, P::Gl, LB_GL, CanBreak, 180),
        (LB_BA, P::Gl, LB_GL, CanBreak, 310),
        (LB_HY, P::Gl, LB_GL, CanBreak, 310),
        // LB16: (CL|CP) SP* x NS.
        (LB_CLCPSP, P::Ns, LB_ANY, DontBreak, 160),
        // LB17: B2 SP* x B2.
        (LB_B2, P::B2, LB_B2, DontBreak, 170),
        (LB_B2SP, P::B2, LB_B2, DontBreak, 170),
        // LB21a: HL (HY|BA) x.
        (LB_HL, P::Hy, LB_HLHYBA, DontBreak, 210),
        (LB_HL, P::Ba, LB_HLHYBA, DontBreak, 210),
        // LB21b: SY x HL.
        (LB_SY, P::Hl, LB_HL, DontBreak, 212),
        (LB_NUSY, P::Hl, LB_HL, DontBreak, 212),
        // LB23: letters and numerals attract.
        (LB_AL, P::Nu, LB_NU, DontBreak, 230),
        (LB_HL, P::Nu, LB_NU, DontBreak, 230),
        (LB_EXT_PIC_CN, P::Nu, LB_NU, DontBreak, 230),
        (LB_NU, P::Al, LB_AL, DontBreak, 230),
        (LB_NU, P::Hl, LB_HL, DontBreak, 230),
        // LB23a: prefixes and postfixes around ideographs.
        (LB_PR, P::Id, LB_IDEM, DontBreak, 231),
        (LB_PR, P::Em, LB_IDEM, DontBreak, 231),
        (LB_PR, P::Eb, LB_EB, DontBreak, 231),
        (LB_IDEM, P::Po, LB_PO, DontBreak, 231),
        (LB_EB, P::Po, LB_PO, DontBreak, 231),
        // LB24.
        (LB_PR, P::Al, LB_AL, DontBreak, 240),
        (LB_PR, P::Hl, LB_HL, DontBreak, 240),
        (LB_PO, P::Al, LB_AL, DontBreak, 240),
        (LB_PO, P::Hl, LB_HL, DontBreak, 240),
        (LB_AL, P::Pr, LB_PR, DontBreak, 240),
        (LB_AL, P::Po, LB_PO, DontBreak, 240),
        (LB_HL, P::Pr, LB_PR, DontBreak, 240),
        (LB_HL, P::Po, LB_PO, DontBreak, 240),
        (LB_EXT_PIC_CN, P::Pr, LB_PR, DontBreak, 240),
        (LB_EXT_PIC_CN, P::Po, LB_PO, DontBreak, 240),
        // LB25 numeric sequences (tailored regex form): the chain states
        // track NU (NU|SY|IS)* (CL|CP)? so LB13 cannot eat the closers.
        (LB_PR, P::Nu, LB_NU, DontBreak, 250),
        (LB_PO, P::Nu, LB_NU, DontBreak, 250),
        (LB_HY, P::Nu, LB_NU, DontBreak, 250),
        (LB_NU, P::Nu, LB_NU, DontBreak, 250),
        (LB_NU, P::Sy, LB_NUSY, DontBreak, 250),
        (LB_NU, P::Is, LB_NUIS, DontBreak, 250),
        (LB_NU, P::Cl, LB_NUCL, DontBreak, 250),
        (LB_NU, P::Cp, LB_NUCP, DontBreak, 250),
        (LB_NU, P::Po, LB_PO, DontBreak, 250),
        (LB_NU, P::Pr, LB_PR, DontBreak, 250),
        (LB_NUSY, P::Nu, LB_NU, DontBreak, 250),
        (LB_NUSY, P::Sy, LB_NUSY, DontBreak, 250),
        (LB_NUSY, P::Is, LB_NUIS, DontBreak, 250),
        (LB_NUSY, P::Cl, LB_NUCL, DontBreak, 250),
        (LB_NUSY, P::Cp, LB_NUCP, DontBreak, 250),
        (LB_NUSY, P::Po, LB_PO, DontBreak, 250),
        (LB_NUSY, P::Pr, LB_PR, DontBreak, 250),
        (LB_NUIS, P::Nu, LB_NU, DontBreak, 250),
        (LB_NUIS, P::Sy, LB_NUSY, DontBreak, 250),
        (LB_NUIS, P::Is, LB_NUIS, DontBreak, 250),
        (LB_NUIS, P::Cl, LB_NUCL, DontBreak, 250),
        (LB_NUIS, P::Cp, LB_NUCP, DontBreak, 250),
        (LB_NUIS, P::Po, LB_PO, DontBreak, 250),
        (LB_NUIS, P::Pr, LB_PR, DontBreak, 250),
        (LB_NUCL, P::Po, LB_PO, DontBreak, 250),
        (LB_NUCL, P::Pr, LB_PR, DontBreak, 250),
        (LB_NUCP, P::Po, LB_PO, DontBreak, 250),
        (LB_NUCP, P::Pr, LB_PR, DontBreak, 250),
        // LB26: Korean syllable blocks.
        (LB_JL, P::Jl, LB_JL, DontBreak, 260),
        (LB_JL, P::Jv, LB_JV, DontBreak, 260),
        (LB_JL, P::H2, LB_H2, DontBreak, 260),
        (LB_JL, P::H3, LB_H3, DontBreak, 260),
        (LB_JV, P::Jv, LB_JV, DontBreak, 260),
        (LB_JV, P::Jt, LB_JT, DontBreak, 260),
        (LB_H2, P::Jv, LB_JV, DontBreak, 260),
        (LB_H2, P::Jt, LB_JT, DontBreak, 260),
        (LB_JT, P::Jt, LB_JT, DontBreak, 260),
        (LB_H3, P::Jt, LB_JT, DontBreak, 260),
        // LB27: Korean syllables with prefixes and postfixes.
        (LB_JL, P::Po, LB_PO, DontBreak, 270),
        (LB_JV, P::Po, LB_PO, DontBreak, 270),
        (LB_JT, P::Po, LB_PO, DontBreak, 270),
        (LB_H2, P::Po, LB_PO, DontBreak, 270),
        (LB_H3, P::Po, LB_PO, DontBreak, 270),
        (LB_PR, P::Jl, LB_JL, DontBreak, 270),
        (LB_PR, P::Jv, LB_JV, DontBreak, 270),
        (LB_PR, P::Jt, LB_JT, DontBreak, 270),
        (LB_PR, P::H2, LB_H2, DontBreak, 270),
        (LB_PR, P::H3, LB_H3, DontBreak, 270),
        // LB28: alphabetics attract.
        (LB_AL, P::Al, LB_AL, DontBreak, 280),
        (LB_AL, P::Hl, LB_HL, DontBreak, 280),
        (LB_HL, P::Al, LB_AL, DontBreak, 280),
        (LB_HL, P::Hl, LB_HL, DontBreak, 280),
        (LB_EXT_PIC_CN, P::Al, LB_AL, DontBreak, 280),
        (LB_EXT_PIC_CN, P::Hl, LB_HL, DontBreak, 280),
        // LB29: IS x (AL|HL).
        (LB_IS, P::Al, LB_AL, DontBreak, 290),
        (LB_IS, P::Hl, LB_HL, DontBreak, 290),
        (LB_NUIS, P::Al, LB_AL, DontBreak, 290),
        (LB_NUIS, P::Hl, LB_HL, DontBreak, 290),
        // LB30a: Regional Indicator pairs.
        (LB_RI_ODD, P::Ri, LB_RI_EVEN, DontBreak, 301),
        (LB_RI_EVEN, P::Ri, LB_RI_ODD, CanBreak, 310),
        // LB30b: emoji bases and modifiers.
        (LB_EB, P::Em, LB_IDEM, DontBreak, 302),
        (LB_EXT_PIC_CN, P::Em, LB_IDEM, DontBreak, 302),
    ];

    let mut table = [LB_ABSENT; LB_STATE_COUNT * LINE_PROPERTY_COUNT];
    let mut i = 0;
    while i < RULES.len() {
        let rule = RULES[i];
        table[rule.0 as usize * LINE_PROPERTY_COUNT + rule.1 as usize] = LbTransition {
            target: rule.2,
            break_class: rule.3,
            rule: rule.4,
        };
        i += 1;
    }
    table
}

/// LB1: resolve AI, SG, XX, SA, and CJ to concrete classes.
fn resolve_line_property(prop: LineProperty, gc: GeneralCategory) -> LineProperty {
    match prop {
        LineProperty::Ai | LineProperty::Sg | LineProperty::Xx => LineProperty::Al,
        LineProperty::Sa => {
            if matches!(gc, GeneralCategory::Mn | GeneralCategory::Mc) {
                LineProperty::Cm
            } else {
                LineProperty::Al
            }
        }
        LineProperty::Cj => LineProperty::Ns,
        _ => prop,
    }
}

fn eaw_not_wide(r: char) -> bool {
    !matches!(
        EAST_ASIAN_WIDTH.search(r),
        EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Halfwidth
    )
}

/// States whose last character was a space, a hard break, ZW, or the start
/// of text; LB9 does not attach combining marks to those (LB10 applies).
fn no_cm_attach(state: u32) -> bool {
    matches!(
        state,
        0 | LB_BK | LB_CR | LB_LF | LB_NL | LB_SP | LB_ZW | LB_ZWSP | LB_OPSP | LB_CLCPSP
            | LB_B2SP
    )
}

/// States that open an LB15a quote chain: start of text, hard breaks, OP,
/// QU, GL, ZW, and anything whose last character was a space.
fn opens_pi_chain(state: u32) -> bool {
    matches!(
        state,
        0 | LB_BK
            | LB_CR
            | LB_LF
            | LB_NL
            | LB_OP
            | LB_OPSP
            | LB_QU
            | LB_GL
            | LB_ZW
            | LB_ZWSP
            | LB_SP
            | LB_CLCPSP
            | LB_B2SP
    )
}

/// The classes that may follow a Pf quote for LB15b to forbid the break
/// before it.
fn lb15b_follow(prop: LineProperty) -> bool {
    matches!(
        prop,
        LineProperty::Sp
            | LineProperty::Gl
            | LineProperty::Wj
            | LineProperty::Cl
            | LineProperty::Qu
            | LineProperty::Cp
            | LineProperty::Ex
            | LineProperty::Is
            | LineProperty::Sy
            | LineProperty::Bk
            | LineProperty::Cr
            | LineProperty::Lf
            | LineProperty::Nl
            | LineProperty::Zw
    )
}

/// Advances the line machine by the code point `r`, returning the new state
/// and the break class of the position between the previous code point and
/// `r`. `rest` must be the input following `r`; LB15b, LB25, and LB28a
/// decode one more code point from it without consuming it.
pub(crate) fn transition_line_break_state(
    state: LineBreakState,
    r: char,
    rest: &[u8],
) -> (LineBreakState, LineBreak) {
    let (raw_prop, gc) = LINE_BREAK.search(r);
    // Entries with class XX and category Cn are exactly the unassigned
    // Extended_Pictographic ranges kept for LB30b.
    let ext_pic_cn = raw_prop == LineProperty::Xx && gc == GeneralCategory::Cn;
    let mut prop = resolve_line_property(raw_prop, gc);

    let full = if state.0 > 0 { state.0 as u32 } else { 0 };
    let state = full & LB_STATE_MASK;
    let zwj = full & LB_ZWJ_BIT != 0;
    let cpeafwh = full & LB_CPEAFWH_BIT != 0;
    let piqu = full & LB_PIQU_BIT != 0;
    let dotted = full & LB_DOTTED_BIT != 0;

    let is_zwj = prop == LineProperty::Zwj;

    // LB9/LB10: combining marks and ZWJ attach to the previous character
    // unless it was a space, a hard break, or ZW.
    if prop == LineProperty::Cm || is_zwj {
        if !no_cm_attach(state) {
            let mut new_full = full;
            if is_zwj {
                new_full |= LB_ZWJ_BIT;
            }
            return (LineBreakState(new_full as i32), LineBreak::DontBreak);
        }
        // LB10: an unattached mark stands alone as AL.
        prop = LineProperty::Al;
    }

    // Table lookup with wildcard fallback.
    let specific = LB_TRANSITIONS[state as usize * LINE_PROPERTY_COUNT + prop as usize];
    let (mut new_state, mut break_class, mut rule);
    if specific.rule > 0 {
        new_state = specific.target;
        break_class = specific.break_class;
        rule = specific.rule;
    } else {
        let any_prop = LB_TRANSITIONS[state as usize * LINE_PROPERTY_COUNT];
        let any_state = LB_TRANSITIONS[LB_ANY as usize * LINE_PROPERTY_COUNT + prop as usize];
        if any_prop.rule > 0 && any_state.rule > 0 {
            new_state = any_state.target;
            break_class = any_state.break_class;
            rule = any_state.rule;
            if any_prop.rule < any_state.rule {
                break_class = any_prop.break_class;
                rule = any_prop.rule;
            }
        } else if any_prop.rule > 0 {
            new_state = any_prop.target;
            break_class = any_prop.break_class;
            rule = any_prop.rule;
        } else if any_state.rule > 0 {
            new_state = any_state.target;
            break_class = any_state.break_class;
            rule = any_state.rule;
        } else {
            // LB31: break everywhere.
            new_state = LB_ANY;
            break_class = LineBreak::CanBreak;
            rule = 310;
        }
    }

    if ext_pic_cn {
        new_state = LB_EXT_PIC_CN;
    }

    // LB25 lookahead: a prefix or postfix before OP, or anything before HY,
    // glues to a following numeral. The HY arm deliberately applies from any
    // state, matching the established behavior of this rule.
    if rule > 250 && (state == LB_PR || state == LB_PO) && prop == LineProperty::Op
        || prop == LineProperty::Hy
    {
        let (r2, l2) = decode_char(rest);
        if l2 > 0 && r2 != REPLACEMENT {
            let (p2, _) = LINE_BREAK.search(r2);
            if p2 == LineProperty::Nu {
                return (LineBreakState(LB_NU as i32), LineBreak::DontBreak);
            }
        }
    }

    // LB15a: after an opening context, a Pi quote glues to everything up to
    // and including the first non-space character.
    let mut new_piqu = false;
    if piqu {
        if prop == LineProperty::Sp {
            new_piqu = true;
        }
        if rule > 151 {
            break_class = LineBreak::DontBreak;
        }
    }
    if prop == LineProperty::Qu && gc == GeneralCategory::Pi && opens_pi_chain(state) {
        new_piqu = true;
    }

    // LB15b: no break before a Pf quote followed by a closing context or the
    // end of the text.
    if prop == LineProperty::Qu && gc == GeneralCategory::Pf && rule > 152 {
        let (r2, l2) = decode_char(rest);
        if l2 == 0 {
            break_class = LineBreak::DontBreak;
        } else if r2 != REPLACEMENT {
            let (p2, _) = LINE_BREAK.search(r2);
            if lb15b_follow(p2) {
                break_class = LineBreak::DontBreak;
            }
        }
    }

    // LB28a: orthographic syllables in Brahmic scripts. The dotted circle
    // stands in for a missing base and otherwise behaves as AL.
    let akish_in = prop == LineProperty::Ak
        || prop == LineProperty::As
        || (prop == LineProperty::Al && r == DOTTED_CIRCLE);
    let akish_prev = state == LB_AK || (state == LB_AL && dotted);
    if rule > 281 {
        if state == LB_AP && akish_in {
            break_class = LineBreak::DontBreak;
        }
        if akish_prev && matches!(prop, LineProperty::Vf | LineProperty::Vi) {
            break_class = LineBreak::DontBreak;
            if prop == LineProperty::Vi {
                new_state = LB_AKVI;
            }
        }
        if state == LB_AKVI
            && (prop == LineProperty::Ak || (prop == LineProperty::Al && r == DOTTED_CIRCLE))
        {
            break_class = LineBreak::DontBreak;
        }
        if akish_prev && akish_in {
            let (r2, l2) = decode_char(rest);
            if l2 > 0 && r2 != REPLACEMENT {
                let (p2, _) = LINE_BREAK.search(r2);
                if p2 == LineProperty::Vf {
                    break_class = LineBreak::DontBreak;
                }
            }
        }
    }

    // LB30: no break between alphanumerics and opening or closing
    // punctuation that is not East-Asian wide.
    if rule > 300 {
        if prop == LineProperty::Op
            && matches!(state, LB_AL | LB_HL | LB_NU | LB_EXT_PIC_CN)
            && eaw_not_wide(r)
        {
            break_class = LineBreak::DontBreak;
        }
        if cpeafwh
            && matches!(
                prop,
                LineProperty::Al | LineProperty::Hl | LineProperty::Nu
            )
        {
            break_class = LineBreak::DontBreak;
        }
    }

    // LB8a: nothing breaks right after a zero-width joiner.
    if zwj && rule > 81 {
        break_class = LineBreak::DontBreak;
    }

    let mut new_full = new_state;
    if is_zwj {
        new_full |= LB_ZWJ_BIT;
    }
    if prop == LineProperty::Cp && eaw_not_wide(r) {
        new_full |= LB_CPEAFWH_BIT;
    }
    if new_piqu {
        new_full |= LB_PIQU_BIT;
    }
    if prop == LineProperty::Al && r == DOTTED_CIRCLE {
        new_full |= LB_DOTTED_BIT;
    }

    (LineBreakState(new_full as i32), break_class)
}

/// Returns the prefix of `b` after which a line break decision can or must
/// be made, the remainder of `b`, whether the break is mandatory, and the
/// state to pass to the next call.
///
/// The returned segment should not be broken into smaller parts unless no
/// other opportunity presents itself. In accordance with LB3, the final
/// segment of a scan always reports a mandatory break; call
/// [`has_trailing_line_break`] to tell whether the text really ends in one.
///
/// Pass the default state for the first call of a scan; the concatenation of
/// all returned segments reproduces `b` byte-for-byte. Empty input returns
/// empty slices, no mandatory break, and the initial state.
///
/// # Examples
///
/// ```
/// let mut rest: &[u8] = b"First line.\nSecond line.";
/// let mut state = textseg::LineBreakState::default();
/// let mut segments = Vec::new();
/// while !rest.is_empty() {
///     let (segment, tail, must_break, new_state) =
///         textseg::first_line_segment(rest, state);
///     segments.push((segment, must_break));
///     rest = tail;
///     state = new_state;
/// }
/// assert_eq!(
///     segments,
///     [
///         (&b"First "[..], false),
///         (&b"line.\n"[..], true),
///         (&b"Second "[..], false),
///         (&b"line."[..], true),
///     ]
/// );
/// ```
#[must_use]
pub fn first_line_segment(
    b: &[u8],
    state: LineBreakState,
) -> (&[u8], &[u8], bool, LineBreakState) {
    if b.is_empty() {
        return (b, b, false, LineBreakState::default());
    }

    let (r, mut length) = decode_char(b);
    if b.len() <= length {
        return (b, &b[b.len()..], true, LineBreakState::default()); // LB3.
    }

    let mut state = state;
    if state.0 <= 0 {
        let (s, _) = transition_line_break_state(LineBreakState(0), r, &b[length..]);
        state = s;
    }

    loop {
        let (r, l) = decode_char(&b[length..]);
        let (new_state, break_class) =
            transition_line_break_state(state, r, &b[length + l..]);
        state = new_state;

        if break_class != LineBreak::DontBreak {
            return (
                &b[..length],
                &b[length..],
                break_class == LineBreak::MustBreak,
                state,
            );
        }

        length += l;
        if b.len() <= length {
            return (b, &b[b.len()..], true, LineBreakState::default()); // LB3.
        }
    }
}

/// Like [`first_line_segment`] but for a string slice.
#[must_use]
pub fn first_line_segment_str(
    s: &str,
    state: LineBreakState,
) -> (&str, &str, bool, LineBreakState) {
    let (segment, _, must_break, new_state) = first_line_segment(s.as_bytes(), state);
    let n = segment.len();
    (&s[..n], &s[n..], must_break, new_state)
}

/// Reports whether the byte slice ends in one of the hard line break code
/// points of LB4 and LB5 (BK, CR, LF, NL).
#[must_use]
pub fn has_trailing_line_break(b: &[u8]) -> bool {
    let (r, length) = decode_last_char(b);
    if length == 0 {
        return false;
    }
    let (prop, _) = LINE_BREAK.search(r);
    matches!(
        prop,
        LineProperty::Bk | LineProperty::Cr | LineProperty::Lf | LineProperty::Nl
    )
}

/// Like [`has_trailing_line_break`] but for a string slice.
#[must_use]
pub fn has_trailing_line_break_str(s: &str) -> bool {
    has_trailing_line_break(s.as_bytes())
}

impl Config {
    /// [`first_line_segment`]; line break opportunities do not depend on the
    /// width configuration, this method only mirrors the module-level
    /// surface.
    #[must_use]
    pub fn first_line_segment<'a>(
        &self,
        b: &'a [u8],
        state: LineBreakState,
    ) -> (&'a [u8], &'a [u8], bool, LineBreakState) {
        first_line_segment(b, state)
    }

    /// [`first_line_segment_str`].
    #[must_use]
    pub fn first_line_segment_str<'a>(
        &self,
        s: &'a str,
        state: LineBreakState,
    ) -> (&'a str, &'a str, bool, LineBreakState) {
        first_line_segment_str(s, state)
    }

    /// [`has_trailing_line_break`].
    #[must_use]
    pub fn has_trailing_line_break(&self, b: &[u8]) -> bool {
        has_trailing_line_break(b)
    }

    /// [`has_trailing_line_break_str`].
    #[must_use]
    pub fn has_trailing_line_break_str(&self, s: &str) -> bool {
        has_trailing_line_break_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(s: &str) -> Vec<(&str, bool)> {
        let mut out = Vec::new();
        let mut rest = s;
        let mut state = LineBreakState::default();
        while !rest.is_empty() {
            let (segment, tail, must, new_state) = first_line_segment_str(rest, state);
            out.push((segment, must));
            rest = tail;
            state = new_state;
        }
        out
    }

    fn pieces(s: &str) -> Vec<&str> {
        segments(s).into_iter().map(|(seg, _)| seg).collect()
    }

    #[test]
    fn test_empty() {
        let (segment, rest, must, state) =
            first_line_segment(b"", LineBreakState::default());
        assert!(segment.is_empty());
        assert!(rest.is_empty());
        assert!(!must);
        assert_eq!(state, LineBreakState::default());
    }

    #[test]
    fn test_spaces_and_newlines() {
        assert_eq!(
            segments("First line.\nSecond line."),
            vec![
                ("First ", false),
                ("line.\n", true),
                ("Second ", false),
                ("line.", true),
            ]
        );
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        assert_eq!(
            segments("a\r\nb"),
            vec![("a\r\n", true), ("b", true)]
        );
    }

    #[test]
    fn test_lb13_closing_punctuation() {
        // No break before closers, exclamation, or comma.
        assert_eq!(pieces("a) b!"), vec!["a) ", "b!"]);
        assert_eq!(pieces("one, two"), vec!["one, ", "two"]);
    }

    #[test]
    fn test_lb14_open_punctuation() {
        // No break after an opener, even through spaces.
        assert_eq!(pieces("( a"), vec!["( a"]);
        assert_eq!(pieces("(a b"), vec!["(a ", "b"]);
    }

    #[test]
    fn test_lb16_close_space_nonstarter() {
        // CL SP* x NS; the break opportunity moves past the nonstarter.
        assert_eq!(pieces(") \u{3005}a"), vec![") \u{3005}", "a"]);
        // Without the closer the space allows a break before the nonstarter.
        assert_eq!(pieces("a \u{3005}"), vec!["a ", "\u{3005}"]);
    }

    #[test]
    fn test_lb21_hyphenation() {
        // Break after a hyphen is allowed, not before.
        assert_eq!(pieces("e-mail me"), vec!["e-", "mail ", "me"]);
    }

    #[test]
    fn test_lb21a_hebrew_hyphen() {
        // No break after a hyphen that follows a Hebrew letter.
        assert_eq!(pieces("א-א"), vec!["א-א"]);
    }

    #[test]
    fn test_lb25_numeric_chain() {
        assert_eq!(pieces("3.14 x"), vec!["3.14 ", "x"]);
        assert_eq!(pieces("$1,000.00 x"), vec!["$1,000.00 ", "x"]);
        assert_eq!(pieces("(1.5) x"), vec!["(1.5) ", "x"]);
        assert_eq!(pieces("50% off"), vec!["50% ", "off"]);
    }

    #[test]
    fn test_lb25_lookahead_precedence() {
        // The prefix arm needs PR or PO before OP: "$(5" holds together.
        assert_eq!(pieces("$(5) x"), vec!["$(5) ", "x"]);
        // The hyphen arm applies from any state, even after a space; the
        // break opportunity LB18 would give between the space and "-5" is
        // deliberately suppressed.
        assert_eq!(pieces("x -5"), vec!["x -5"]);
        // Without a numeral after it, the hyphen breaks normally: after the
        // space (LB18) and after the hyphen (LB31).
        assert_eq!(pieces("x -y"), vec!["x ", "-", "y"]);
    }

    #[test]
    fn test_lb12_glue() {
        // U+00A0 NBSP is GL: no break on either side.
        assert_eq!(pieces("a\u{a0}b c"), vec!["a\u{a0}b ", "c"]);
        // But after a space, a break before GL is allowed (LB12a).
        assert_eq!(pieces("a \u{a0}b"), vec!["a ", "\u{a0}b"]);
    }

    #[test]
    fn test_lb19_quotes() {
        assert_eq!(pieces("say \"hi\" now"), vec!["say ", "\"hi\" ", "now"]);
    }

    #[test]
    fn test_lb15a_open_quote_chain() {
        // Pi quote after a space glues through following spaces.
        assert_eq!(pieces("say \u{201c} hi"), vec!["say ", "\u{201c} hi"]);
    }

    #[test]
    fn test_lb15b_close_quote() {
        // No break before a Pf quote followed by a space.
        assert_eq!(pieces("hi\u{201d} there"), vec!["hi\u{201d} ", "there"]);
        // Even after a space, if the quote is followed by a closer.
        assert_eq!(pieces("a \u{201d})"), vec!["a \u{201d})"]);
        // A letter after the quote does not qualify; LB18 breaks.
        assert_eq!(pieces("a \u{201d}x"), vec!["a ", "\u{201d}x"]);
    }

    #[test]
    fn test_lb30_narrow_parentheses() {
        // Alphanumeric x narrow OP and narrow CP x alphanumeric.
        assert_eq!(pieces("a(b)c"), vec!["a(b)c"]);
        // A fullwidth parenthesis allows the break.
        assert_eq!(pieces("a\u{ff08}b"), vec!["a", "\u{ff08}b"]);
    }

    #[test]
    fn test_lb26_hangul() {
        // A Jamo syllable holds together.
        assert_eq!(pieces("\u{1100}\u{1161}\u{11a8} a"), vec!["\u{1100}\u{1161}\u{11a8} ", "a"]);
    }

    #[test]
    fn test_lb30a_regional_indicators() {
        // Pairs hold, a break is allowed between pairs.
        assert_eq!(pieces("🇩🇪🇫🇷"), vec!["🇩🇪", "🇫🇷"]);
    }

    #[test]
    fn test_lb30b_emoji_modifier() {
        // EB x EM.
        assert_eq!(pieces("👶🏽 a"), vec!["👶🏽 ", "a"]);
    }

    #[test]
    fn test_lb8a_zwj() {
        // No break after a ZWJ, so the joined emoji holds together.
        assert_eq!(pieces("🏳️\u{200d}🌈 a"), vec!["🏳️\u{200d}🌈 ", "a"]);
    }

    #[test]
    fn test_ideographic_breaks() {
        // Breaks are allowed between ideographs.
        assert_eq!(pieces("日本語"), vec!["日", "本", "語"]);
    }

    #[test]
    fn test_has_trailing_line_break() {
        assert!(has_trailing_line_break_str("line\n"));
        assert!(has_trailing_line_break_str("line\r"));
        assert!(has_trailing_line_break_str("line\u{2028}"));
        assert!(has_trailing_line_break_str("line\u{0085}"));
        assert!(!has_trailing_line_break_str("line"));
        assert!(!has_trailing_line_break_str(""));
    }

    #[test]
    fn test_final_segment_is_mandatory() {
        let segs = segments("no newline");
        assert!(segs.last().unwrap().1, "LB3 requires a final must-break");
    }
}
