//! Whole-token lexical predicates used by the rule table.
//!
//! Every predicate matches the complete token text, never a substring.
//! Patterns are compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

/// Compile an alternation anchored at both ends.
fn whole(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("built-in pattern should compile")
}

// ============================================================================
// Dates
// ============================================================================

static MONTH: LazyLock<Regex> = LazyLock::new(|| {
    whole(
        r"(?i)january|jan\.?|february|feb\.?|march|mar\.?|april|apr\.?|may|june|jun\.?|july|jul\.?|august|aug\.?|september|sept?\.?|october|oct\.?|november|nov\.?|december|dec\.",
    )
});

static WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    whole(r"(?i)monday|mon|tuesday|tues?|wednesday|wed|thursday|thu|friday|fri|saturday|sat|sunday|sun")
});

static DAY: LazyLock<Regex> = LazyLock::new(|| whole(r"(?:[1-9]|[12][0-9]|3[01])(?:st|nd|rd)?"));

static YEAR: LazyLock<Regex> = LazyLock::new(|| whole(r"[1-3][0-9]{3}|'?[0-9]{2}"));

static SLASH_DATES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // 3/4/2020, 03\/04\/20
        whole(r"(?:[1-9]|[0-3][0-9])\\?/(?:[1-9]|[0-3][0-9])\\?/(?:[1-3][0-9]{3}|[0-9]{2})"),
        // 2020-03-04, 2020/3/04
        whole(r"[12][0-9]{3}[-/](?:0?[1-9]|1[0-2])[-/][0-3][0-9]"),
    ]
});

// ============================================================================
// Times
// ============================================================================

static TIMES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // 9:30
        whole(r"[0-2]?[0-9]:[0-5][0-9]"),
        // 09:30:15
        whole(r"[0-2][0-9]:[0-5][0-9]:[0-5][0-9]"),
        // 9am, 9:30p.m.
        whole(r"(?i)[0-2]?[0-9](?::[0-5][0-9])?[ap]\.?m\.?"),
        // 0930am, 2130p
        whole(r"(?i)[0-2]?[0-9][0-5][0-9][ap]\.?m?\.?"),
    ]
});

static ARMY_TIME_MORNING: LazyLock<Regex> = LazyLock::new(|| whole(r"0[0-9][0-9]{2}"));

static AM_PM: LazyLock<Regex> = LazyLock::new(|| whole(r"(?i)a\.?m\.?|p\.?m\.?"));

static PART_OF_DAY: LazyLock<Regex> = LazyLock::new(|| whole(r"(?i)noon|midnight|midday"));

// ============================================================================
// Money
// ============================================================================

static CURRENCY_WORD: LazyLock<Regex> =
    LazyLock::new(|| whole(r"(?i)(?:dollar|cent|euro|buck)s?|penny|pence|yen|yuan|won"));

static CURRENCY_SYMBOL: LazyLock<Regex> = LazyLock::new(|| {
    whole(r"(?i)\$|#|&#163;|&pound;|\x{00A3}|\x{00A5}|\x{20AC}|\x{20A9}|(?:US|HK|A|C|NT|S|NZ)\$")
});

// ============================================================================
// Ordinals and plain numbers
// ============================================================================

static ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    whole(concat!(
        r"(?i)[2-9]?1st|[2-9]?2nd|[2-9]?3rd|1[0-9]th|[2-9]?[04-9]th|100+th|zeroth|",
        r"first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|",
        r"eleventh|twelfth|thirteenth|fourteenth|fifteenth|sixteenth|seventeenth|eighteenth|nineteenth|",
        r"twentieth|twenty-first|twenty-second|twenty-third|twenty-fourth|twenty-fifth|",
        r"twenty-sixth|twenty-seventh|twenty-eighth|twenty-ninth|thirtieth|thirty-first|",
        r"fortieth|fiftieth|sixtieth|seventieth|eightieth|ninetieth|hundredth|thousandth|millionth",
    ))
});

static ORDINAL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| whole(r"(?i)st|nd|th"));

static DIGITS: LazyLock<Regex> = LazyLock::new(|| whole(r"[0-9]+"));

/// Scale words that may be followed by "and" inside a spelled-out number.
const SCALE_WORDS: [&str; 5] = ["hundred", "thousand", "million", "billion", "trillion"];

pub fn is_month(text: &str) -> bool {
    MONTH.is_match(text)
}

pub fn is_weekday(text: &str) -> bool {
    WEEKDAY.is_match(text)
}

pub fn is_day(text: &str) -> bool {
    DAY.is_match(text)
}

pub fn is_year(text: &str) -> bool {
    YEAR.is_match(text)
}

pub fn is_slash_date(text: &str) -> bool {
    SLASH_DATES.iter().any(|re| re.is_match(text))
}

pub fn is_time(text: &str) -> bool {
    TIMES.iter().any(|re| re.is_match(text))
}

/// Zero-padded military time before ten o'clock, e.g. `0930`.
pub fn is_army_time_morning(text: &str) -> bool {
    ARMY_TIME_MORNING.is_match(text)
}

pub fn is_am_pm(text: &str) -> bool {
    AM_PM.is_match(text)
}

pub fn is_part_of_day(text: &str) -> bool {
    PART_OF_DAY.is_match(text)
}

pub fn is_currency_word(text: &str) -> bool {
    CURRENCY_WORD.is_match(text)
}

pub fn is_currency_symbol(text: &str) -> bool {
    CURRENCY_SYMBOL.is_match(text)
}

/// Ordinal word (`third`, `twenty-first`) or numeral (`3rd`, `100th`).
pub fn is_ordinal(text: &str) -> bool {
    ORDINAL.is_match(text)
}

/// Suffix split off an ordinal numeral by the tokenizer, e.g. the `th` of `4 th`.
pub fn is_ordinal_suffix(text: &str) -> bool {
    ORDINAL_SUFFIX.is_match(text)
}

pub fn is_digits(text: &str) -> bool {
    DIGITS.is_match(text)
}

pub fn is_scale_word(text: &str) -> bool {
    SCALE_WORDS.iter().any(|w| text.eq_ignore_ascii_case(w))
}

/// Names of every predicate matching `text`, in table order.
pub fn matching(text: &str) -> Vec<&'static str> {
    let table: [(&'static str, fn(&str) -> bool); 15] = [
        ("month", is_month),
        ("weekday", is_weekday),
        ("day", is_day),
        ("year", is_year),
        ("slash-date", is_slash_date),
        ("time", is_time),
        ("army-time-morning", is_army_time_morning),
        ("am-pm", is_am_pm),
        ("part-of-day", is_part_of_day),
        ("currency-word", is_currency_word),
        ("currency-symbol", is_currency_symbol),
        ("ordinal", is_ordinal),
        ("ordinal-suffix", is_ordinal_suffix),
        ("digits", is_digits),
        ("scale-word", is_scale_word),
    ];
    table
        .iter()
        .filter(|(_, predicate)| predicate(text))
        .map(|(name, _)| *name)
        .collect()
}
