//! Prefix families in dispatch order.
//!
//! Within a family the first sub-rule whose pattern matches is the only one
//! tried. Its restorations run left to right, then its nested exception.

use super::{Carry, PrefixFamily, PrefixRule, Restoration, Strip, Trigger};

/// `restore!("mem")` drops the prefix; `restore!("mem" => "p")` also puts
/// back the root-initial consonant the nasal absorbed.
macro_rules! restore {
    ($prefix:literal) => {
        Restoration {
            strip: Strip::Prefix($prefix),
            prepend: "",
        }
    };
    ($prefix:literal => $initial:literal) => {
        Restoration {
            strip: Strip::Prefix($prefix),
            prepend: $initial,
        }
    };
}

macro_rules! rule {
    ($pattern:literal => halt) => {
        PrefixRule {
            trigger: Trigger::Pattern($pattern),
            restorations: &[],
            nested: None,
            halts: true,
        }
    };
    ($pattern:literal => [$($restoration:expr),+ $(,)?]) => {
        PrefixRule {
            trigger: Trigger::Pattern($pattern),
            restorations: &[$($restoration),+],
            nested: None,
            halts: false,
        }
    };
    ($pattern:literal => [$($restoration:expr),+ $(,)?], then $nested:ident) => {
        PrefixRule {
            trigger: Trigger::Pattern($pattern),
            restorations: &[$($restoration),+],
            nested: Some(&$nested),
            halts: false,
        }
    };
}

// Nested exceptions, tried after their parent's restorations miss.
static KEBER: PrefixRule = rule!(r"^keber" => [restore!("keber")]);
static MEMBER: PrefixRule = rule!(r"^member" => [restore!("member")]);
static PERSE: PrefixRule = rule!(r"^perse" => [restore!("perse")]);
static PELAJAR: PrefixRule = rule!(r"^pelajar" => [restore!("pel")]);

pub static PREFIX_FAMILIES: &[PrefixFamily] = &[
    PrefixFamily {
        name: "di-ke-se",
        trigger: Trigger::Pattern(r"^(di|[ks]e)\S+"),
        carry: Carry::Ignore,
        rules: &[
            rule!(r"^di" => [restore!("di")]),
            rule!(r"^ke" => [restore!("ke")], then KEBER),
            rule!(r"^se" => [restore!("se")]),
        ],
    },
    PrefixFamily {
        name: "reduplicated",
        trigger: Trigger::Reduplicated,
        carry: Carry::Ignore,
        rules: &[PrefixRule {
            trigger: Trigger::Reduplicated,
            restorations: &[Restoration {
                strip: Strip::Leading(2),
                prepend: "",
            }],
            nested: None,
            halts: false,
        }],
    },
    PrefixFamily {
        name: "be",
        trigger: Trigger::Pattern(r"^be\S+"),
        carry: Carry::Record,
        rules: &[
            rule!(r"^ber[aiueo]\S+" => [restore!("ber"), restore!("ber" => "r")]),
            rule!(r"^ber[^aiueor][a-z\-]+\S+" => [restore!("ber")]),
            rule!(r"^ber[^aiueor][a-z\-]+er[aiueo]\S+" => [restore!("ber")]),
            rule!(r"^belajar" => [restore!("bel")]),
            rule!(r"^be[^aiueolr]er[^aiueo]\S+" => [restore!("be")]),
        ],
    },
    PrefixFamily {
        name: "te",
        trigger: Trigger::Pattern(r"^te\S+"),
        carry: Carry::Record,
        rules: &[
            rule!(r"^terr\S+" => halt),
            rule!(r"^ter[aiueo]\S+" => [restore!("ter"), restore!("ter" => "r")]),
            rule!(r"^ter[^aiueor]er[aiueo]\S+" => [restore!("ter")]),
            rule!(r"^ter[^aiueor]\S+" => [restore!("ter")]),
            rule!(r"^te[^aiueor]er\S+" => [restore!("te")]),
            rule!(r"^ter[^aiueor]er[^aiueo]\S+" => [restore!("ter")]),
        ],
    },
    PrefixFamily {
        name: "me",
        trigger: Trigger::Pattern(r"^me\S+"),
        carry: Carry::Record,
        rules: &[
            rule!(r"^me[lrwyv][aiueo]" => [restore!("me")]),
            rule!(r"^mem[bfvp]\S+" => [restore!("mem")], then MEMBER),
            rule!(r"^mem(r[aiueo]|[aiueo])\S+" => [restore!("mem" => "m"), restore!("mem" => "p")]),
            rule!(r"^men[cdjszt]\S+" => [restore!("men")]),
            rule!(r"^men[aiueo]\S+" => [restore!("men" => "n"), restore!("men" => "t")]),
            rule!(r"^meng[ghqk]\S+" => [restore!("meng")]),
            rule!(r"^meng[aiueo]\S+" => [
                restore!("meng"),
                restore!("meng" => "k"),
                restore!("meng" => "ng"),
                restore!("menge"),
            ]),
            rule!(r"^meny[aiueo]\S+" => [restore!("meny" => "s"), restore!("me")]),
        ],
    },
    PrefixFamily {
        name: "pe",
        trigger: Trigger::Pattern(r"^pe\S+"),
        carry: Carry::Consume,
        rules: &[
            rule!(r"^pe[wy]\S+" => [restore!("pe")]),
            rule!(r"^per[aiueo]\S+" => [restore!("per"), restore!("per" => "r")]),
            rule!(r"^per[^aiueor]\S+" => [restore!("per")], then PERSE),
            rule!(r"^per[^aiueor][a-z\-]+er[aiueo]\S+" => [restore!("per")]),
            rule!(r"^pem[bfv]\S+" => [restore!("pem")]),
            rule!(r"^pem(r[aiueo]|[aiueo])\S+" => [restore!("pem" => "m"), restore!("pem" => "p")]),
            rule!(r"^pen[cdjzts]\S+" => [restore!("pen")]),
            rule!(r"^pen[aiueo]\S+" => [restore!("pen" => "n"), restore!("pen" => "t")]),
            rule!(r"^peng[ghq]\S+" => [restore!("peng")]),
            rule!(r"^peng[aiueo]\S+" => [restore!("peng"), restore!("peng" => "k"), restore!("penge")]),
            rule!(r"^peng[^ghq]\S+" => [restore!("peng")]),
            rule!(r"^peny[aiueo]\S+" => [restore!("peny" => "s"), restore!("pe")]),
            rule!(r"^pel[aiueo]\S+" => [restore!("pel" => "l")], then PELAJAR),
            rule!(r"^pe[^rwylmn]er[aiueo]\S+" => [restore!("pe")]),
            rule!(r"^pe[^rwylmn]\S+" => [restore!("pe")]),
            rule!(r"^pe[^aiueor]er[^aiueo]\S+" => [restore!("pe")]),
        ],
    },
];
