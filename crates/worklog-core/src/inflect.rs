//! Numeral agreement for Russian nouns.
//!
//! `inflect("Сервер", 3)` gives "Сервера", `inflect("Облако", 5)` gives
//! "Облаков". The rules are suffix rewrites keyed on the last one or two
//! letters of the base word; they cover the category names the bot ships
//! with and degrade predictably for anything else.

/// Which form a count selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PluralForm {
    One,
    Few,
    Many,
}

fn plural_form(count: i64) -> PluralForm {
    // rem_euclid keeps remainders non-negative for negative counts
    if (11..=14).contains(&count.rem_euclid(100)) {
        return PluralForm::Many;
    }
    match count.rem_euclid(10) {
        1 => PluralForm::One,
        2..=4 => PluralForm::Few,
        _ => PluralForm::Many,
    }
}

/// Inflect `word` to agree with `count`.
///
/// Total and pure: any string and any integer produce a result.
pub fn inflect(word: &str, count: i64) -> String {
    match plural_form(count) {
        PluralForm::One => word.to_string(),
        PluralForm::Few => few_form(word),
        PluralForm::Many => many_form(word),
    }
}

fn few_form(word: &str) -> String {
    // "ка" is only special here; the many form treats it as a plain "а" ending.
    if let Some(stem) = word.strip_suffix("ка") {
        return format!("{stem}ки");
    }
    if let Some(stem) = word.strip_suffix('о') {
        return format!("{stem}а");
    }
    if let Some(stem) = word.strip_suffix('а') {
        return format!("{stem}ы");
    }
    format!("{word}а")
}

fn many_form(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('о') {
        return format!("{stem}ов");
    }
    if let Some(stem) = word.strip_suffix('а') {
        return format!("{stem}ок");
    }
    format!("{word}ов")
}
