use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase};

use crate::types::CaseOption;

/// Turns a plural identifier into its singular form.
pub trait Singularize {
    fn singularize(&self, word: &str) -> String;
}

/// Rails-style inflection rules from the `Inflector` crate.
///
/// The last word of the identifier is first checked against irregular plurals that
/// `Inflector` leaves untouched, so `person_children` becomes `person_child`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InflectorSingularizer;

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("people", "person"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("oxen", "ox"),
];

impl Singularize for InflectorSingularizer {
    fn singularize(&self, word: &str) -> String {
        let (head, last) = word.split_at(last_word_start(word));
        match irregular_singular(last) {
            Some(singular) => format!("{}{}", head, singular),
            None => inflector::string::singularize::to_singular(word),
        }
    }
}

/// Byte offset of the last word, split on separators and lower-to-upper case changes.
fn last_word_start(word: &str) -> usize {
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (i, c) in word.char_indices() {
        if matches!(c, '_' | '-' | ' ' | '.') {
            start = i + c.len_utf8();
        } else if c.is_uppercase() && prev.map_or(false, char::is_lowercase) {
            start = i;
        }
        prev = Some(c);
    }
    start
}

fn irregular_singular(word: &str) -> Option<String> {
    let lower = word.to_lowercase();
    let (_, singular) = IRREGULAR_PLURALS
        .iter()
        .find(|(plural, _)| *plural == lower)?;

    let singular = if word.chars().all(char::is_uppercase) {
        singular.to_uppercase()
    } else if word.starts_with(char::is_uppercase) {
        upper_first(singular)
    } else {
        (*singular).to_owned()
    };
    Some(singular)
}

impl CaseOption {
    pub fn apply(self, val: &str) -> String {
        match self {
            CaseOption::Original => val.to_owned(),
            CaseOption::Camel => val.to_lower_camel_case(),
            CaseOption::Lower => val.to_snake_case(),
            CaseOption::Pascal => upper_first(&val.to_lower_camel_case()),
            CaseOption::Upper => val.to_shouty_snake_case(),
        }
    }
}

/// Change the casing of `val` according to `opt`, singularizing it first when asked.
///
/// A missing value becomes the empty string. With no option the value is returned as is.
pub fn recase(opt: Option<CaseOption>, val: Option<&str>, singularize: bool) -> String {
    recase_with(&InflectorSingularizer, opt, val, singularize)
}

pub fn recase_with<S>(
    singularizer: &S,
    opt: Option<CaseOption>,
    val: Option<&str>,
    singularize: bool,
) -> String
where
    S: Singularize + ?Sized,
{
    let val = match val {
        None => return String::new(),
        Some(v) if singularize && !v.is_empty() => singularizer.singularize(v),
        Some(v) => v.to_owned(),
    };

    match opt {
        Some(opt) if !val.is_empty() => opt.apply(&val),
        _ => val,
    }
}

fn upper_first(val: &str) -> String {
    let mut chars = val.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
