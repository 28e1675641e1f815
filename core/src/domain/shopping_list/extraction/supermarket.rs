use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::shopping_list::extraction::HistoryMessage;

/// Known chains with the spellings users and the model tend to write. The
/// last slice holds spellings that only count with this exact casing.
const KNOWN_SUPERMARKETS: &[(&str, &[&str], &[&str])] = &[
    ("Mercadona", &["mercadona"], &[]),
    ("Carrefour", &["carrefour"], &[]),
    ("Lidl", &["lidl"], &[]),
    ("Aldi", &["aldi"], &[]),
    // A lowercase "dia" is far more often "día" typed without the accent.
    (
        "Dia",
        &["supermercado dia", "supermercados dia", "tienda dia", "tiendas dia"],
        &["Dia", "DIA"],
    ),
    ("Alcampo", &["alcampo"], &[]),
    ("Eroski", &["eroski"], &[]),
    (
        "El Corte Inglés",
        &["el corte inglés", "el corte ingles", "corte inglés", "corte ingles"],
        &[],
    ),
    ("Hipercor", &["hipercor"], &[]),
    ("Supercor", &["supercor"], &[]),
    ("Consum", &["consum"], &[]),
    ("Ahorramás", &["ahorramás", "ahorramas"], &[]),
    ("Caprabo", &["caprabo"], &[]),
    ("Bonpreu", &["bonpreu", "bon preu"], &[]),
    ("Gadis", &["gadis"], &[]),
    ("Froiz", &["froiz"], &[]),
    ("BM", &["bm supermercados"], &[]),
    ("Spar", &["spar"], &[]),
    ("Costco", &["costco"], &[]),
    ("Makro", &["makro"], &[]),
];

fn alternation(aliases: &[&str]) -> String {
    aliases
        .iter()
        .map(|alias| regex::escape(alias).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

static SUPERMARKET_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    KNOWN_SUPERMARKETS
        .iter()
        .map(|(canonical, aliases, exact)| {
            let mut pattern = format!(r"(?i:\b(?:{})\b)", alternation(aliases));
            if !exact.is_empty() {
                pattern.push_str(&format!(r"|\b(?:{})\b", alternation(exact)));
            }
            (
                *canonical,
                Regex::new(&pattern).expect("supermarket pattern is valid"),
            )
        })
        .collect()
});

/// Returns the chain mentioned earliest in `text`, if any.
pub fn find_supermarket(text: &str) -> Option<&'static str> {
    SUPERMARKET_PATTERNS
        .iter()
        .filter_map(|(canonical, re)| re.find(text).map(|m| (m.start(), *canonical)))
        .min_by_key(|(start, _)| *start)
        .map(|(_, canonical)| canonical)
}

/// The bot reply wins over anything the user said; user messages are
/// scanned from the most recent backwards.
pub fn detect_supermarket(reply: &str, history: &[HistoryMessage]) -> Option<String> {
    if let Some(found) = find_supermarket(reply) {
        return Some(found.to_string());
    }

    history
        .iter()
        .rev()
        .filter(|message| message.is_user())
        .find_map(|message| find_supermarket(&message.content))
        .map(str::to_string)
}
