//! Ordered rule table for the tagging pass.
//!
//! At each position the rules are tried top to bottom and the first rule
//! whose guard holds runs its action; nothing after it is tried. A guard only
//! decides which branch owns the position. The action may still leave the
//! position untagged, e.g. a month name with no date context.

use crate::config::PosClass;
use crate::padded::Padded;
use crate::patterns::{
    is_am_pm, is_army_time_morning, is_currency_symbol, is_currency_word, is_day, is_month,
    is_ordinal, is_ordinal_suffix, is_part_of_day, is_scale_word, is_slash_date, is_time,
    is_weekday, is_year,
};
use crate::token::Category;

const O_CLOCK: &str = "o'clock";

pub(crate) struct Rule {
    pub name: &'static str,
    guard: fn(&Padded, isize) -> bool,
    action: fn(&mut Padded, isize),
}

pub(crate) static RULES: [Rule; 12] = [
    Rule {
        name: "currency-symbol",
        guard: |s, i| {
            is_currency_symbol(s.text(i))
                && (s.pos_class(i - 1) == PosClass::Numeric
                    || s.pos_class(i + 1) == PosClass::Numeric)
        },
        action: |s, i| s.set(i, Category::Money),
    },
    Rule {
        name: "time-shape",
        guard: |s, i| is_time(s.text(i)),
        action: |s, i| s.set(i, Category::Time),
    },
    Rule {
        name: "date-shape",
        guard: |s, i| is_slash_date(s.text(i)),
        action: |s, i| s.set(i, Category::Date),
    },
    Rule {
        name: "numeric",
        guard: |s, i| s.pos_class(i) == PosClass::Numeric,
        action: numeric,
    },
    Rule {
        name: "am-pm",
        guard: |s, i| {
            is_am_pm(s.text(i)) && (s.is(i - 1, Category::Time) || s.is(i - 1, Category::Number))
        },
        action: |s, i| {
            relabel(s, i - 1, Category::Time);
            s.set(i, Category::Time);
        },
    },
    Rule {
        name: "comma-in-date",
        guard: |s, i| {
            s.pos_class(i) == PosClass::Comma
                && s.is(i - 1, Category::Date)
                && is_year(s.text(i + 1))
        },
        action: |s, i| s.set(i, Category::Date),
    },
    Rule {
        name: "month",
        guard: |s, i| is_month(s.text(i)),
        action: month,
    },
    Rule {
        name: "number-and",
        guard: |s, i| s.pos_class(i) == PosClass::Conjunction,
        action: |s, i| {
            if s.text(i).eq_ignore_ascii_case("and")
                && s.pos_class(i - 1) == PosClass::Numeric
                && s.pos_class(i + 1) == PosClass::Numeric
                && is_scale_word(s.text(i - 1))
            {
                s.set(i, Category::Number);
            }
        },
    },
    Rule {
        name: "noun",
        guard: |s, i| s.pos_class(i) == PosClass::Noun,
        action: noun,
    },
    Rule {
        name: "adjective",
        guard: |s, i| s.pos_class(i) == PosClass::Adjective,
        action: |s, i| {
            if month_follows(s, i) || is_month(s.text(i - 1)) {
                s.set(i, Category::Date);
            } else if is_ordinal(s.text(i)) {
                s.set(i, Category::Ordinal);
            }
        },
    },
    Rule {
        name: "of-month",
        guard: |s, i| {
            s.pos_class(i) == PosClass::Preposition && s.text(i).eq_ignore_ascii_case("of")
        },
        action: |s, i| {
            if is_ordinal(s.text(i - 1)) && is_month(s.text(i + 1)) {
                s.set(i, Category::Date);
            }
        },
    },
    Rule {
        name: "o-clock",
        guard: |s, i| s.text(i) == O_CLOCK && s.pos_class(i - 1) == PosClass::Numeric,
        action: |s, i| s.set(i, Category::Time),
    },
];

/// Run the first matching rule at `i`. Returns the rule name, or `None` when
/// no guard held and the position stays background.
pub(crate) fn apply(seq: &mut Padded, i: isize) -> Option<&'static str> {
    let rule = RULES.iter().find(|rule| (rule.guard)(&*seq, i))?;
    (rule.action)(seq, i);
    Some(rule.name)
}

/// Write to an already visited position.
fn relabel(seq: &mut Padded, j: isize, category: Category) {
    tracing::trace!(
        position = j,
        from = ?seq.category(j),
        to = ?category,
        "retroactive relabel"
    );
    seq.set(j, category);
}

/// Month at `i + 1`, or "of" followed by a month.
fn month_follows(seq: &Padded, i: isize) -> bool {
    is_month(seq.text(i + 1))
        || (seq.text(i + 1).eq_ignore_ascii_case("of") && is_month(seq.text(i + 2)))
}

fn numeric(seq: &mut Padded, i: isize) {
    let text = seq.text(i);

    if is_day(text) && is_month(seq.text(i + 1)) {
        // day before month: "3 march", "tuesday 3 march"
        seq.set(i, Category::Date);
        if is_weekday(seq.text(i - 1)) {
            relabel(seq, i - 1, Category::Date);
        }
    } else if is_month(seq.text(i - 1)) && is_day(text) {
        seq.set(i, Category::Date);
    } else if is_army_time_morning(text) {
        seq.set(i, Category::Time);
    } else if is_year(text)
        && seq.is(i - 1, Category::Date)
        && (is_month(seq.text(i - 1)) || seq.is(i - 2, Category::Date))
    {
        seq.set(i, Category::Date);
    } else if seq.text(i + 1) == O_CLOCK {
        seq.set(i, Category::Time);
    } else if seq.is(i - 1, Category::Money) {
        seq.set(i, Category::Money);
    } else {
        seq.set(i, Category::Number);
    }
}

fn month(seq: &mut Padded, i: isize) {
    let next = seq.pos_class(i + 1);
    if seq.is(i - 1, Category::Date) || next == PosClass::Numeric || next == PosClass::Adjective {
        seq.set(i, Category::Date);
        if is_weekday(seq.text(i - 1)) {
            relabel(seq, i - 1, Category::Date);
        }
    }
}

fn noun(seq: &mut Padded, i: isize) {
    let text = seq.text(i);
    let currency = is_currency_word(text);
    let ordinal = is_ordinal(text);
    let part_of_day = is_part_of_day(text);
    let suffix = is_ordinal_suffix(text);

    if currency {
        if seq.pos_class(i - 1) == PosClass::Numeric && seq.is(i - 1, Category::Number) {
            seq.set(i, Category::Money);
            // "3 hundred dollars": the whole number run becomes MONEY, stopping at the first break
            let mut j = i - 1;
            while j >= 0
                && seq.pos_class(j) == PosClass::Numeric
                && seq.is(j, Category::Number)
            {
                relabel(seq, j, Category::Money);
                j -= 1;
            }
        }
    } else if ordinal && month_follows(seq, i) {
        seq.set(i, Category::Date);
    }

    if part_of_day {
        seq.set(i, Category::Time);
    }

    if suffix {
        if seq.is(i - 1, Category::Number) {
            seq.set(i, Category::Ordinal);
            relabel(seq, i - 1, Category::Ordinal);
        } else if seq.is(i - 1, Category::Date) {
            seq.set(i, Category::Date);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tagset;
    use crate::token::{sentence, Token};

    fn fire(tokens: &mut [Token], i: isize) -> Option<&'static str> {
        let tags = Tagset::default();
        let mut seq = Padded::new(tokens, &tags);
        apply(&mut seq, i)
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn test_currency_symbol_needs_numeric_neighbor() {
        let mut tokens = sentence([("$", "$"), ("5", "CD")]);
        assert_eq!(fire(&mut tokens, 0), Some("currency-symbol"));
        assert_eq!(tokens[0].category, Category::Money);

        let mut tokens = sentence([("$", "$"), ("sign", "NN")]);
        assert_eq!(fire(&mut tokens, 0), None);
        assert_eq!(tokens[0].category, Category::Background);
    }

    #[test]
    fn test_time_shape_wins_over_numeric() {
        let mut tokens = sentence([("9:30", "CD")]);
        assert_eq!(fire(&mut tokens, 0), Some("time-shape"));
        assert_eq!(tokens[0].category, Category::Time);
    }

    #[test]
    fn test_month_guard_owns_position_without_context() {
        // "may" is a month; with no date context it stays untagged but no later rule runs
        let mut tokens = sentence([("may", "JJ"), ("march", "NNP")]);
        assert_eq!(fire(&mut tokens, 0), Some("month"));
        assert_eq!(tokens[0].category, Category::Background);
    }

    #[test]
    fn test_conjunction_guard_without_scale_word() {
        let mut tokens = sentence([("3", "CD"), ("and", "CC"), ("4", "CD")]);
        assert_eq!(fire(&mut tokens, 1), Some("number-and"));
        assert_eq!(tokens[1].category, Category::Background);
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let mut tokens = sentence([("running", "VBG")]);
        assert_eq!(fire(&mut tokens, 0), None);
    }

    #[test]
    fn test_backward_scan_stops_at_break() {
        let mut tokens = sentence([
            ("5", "CD"),
            ("or", "CC"),
            ("6", "CD"),
            ("7", "CD"),
            ("dollars", "NNS"),
        ]);
        for (i, category) in [(0, Category::Number), (2, Category::Number), (3, Category::Number)] {
            tokens[i].category = category;
        }
        assert_eq!(fire(&mut tokens, 4), Some("noun"));
        assert_eq!(tokens[4].category, Category::Money);
        assert_eq!(tokens[3].category, Category::Money);
        assert_eq!(tokens[2].category, Category::Money);
        assert_eq!(tokens[0].category, Category::Number);
    }

    #[test]
    fn test_ordinal_suffix_after_number() {
        let mut tokens = sentence([("4", "CD"), ("th", "NN")]);
        tokens[0].category = Category::Number;
        fire(&mut tokens, 1);
        assert_eq!(tokens[0].category, Category::Ordinal);
        assert_eq!(tokens[1].category, Category::Ordinal);
    }
}
