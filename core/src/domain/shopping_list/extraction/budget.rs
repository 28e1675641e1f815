use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::shopping_list::extraction::{
    AMOUNT_PATTERN as AMOUNT, HistoryMessage, parse_amount,
};
const CURRENCY: &str = r"(?:€|euros?\b|eur\b)";

/// Phrasings tried in order against a single user message.
static BUDGET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(
            r"(?i)presupuesto\s*(?:es\s+de|de|es|:|=)?\s*(?:unos\s+|aproximadamente\s+|máximo\s+|maximo\s+)?(?:€\s*)?{AMOUNT}"
        ),
        format!(r"(?i)\b(?:tengo|dispongo\s+de|cuento\s+con)\s+(?:unos\s+)?{AMOUNT}\s*{CURRENCY}"),
        format!(
            r"(?i)\b(?:máximo|maximo|hasta|no\s+más\s+de|no\s+mas\s+de|gastar(?:me)?)\s+(?:de\s+)?(?:unos\s+)?{AMOUNT}\s*{CURRENCY}"
        ),
        format!(
            r"(?i){AMOUNT}\s*{CURRENCY}\s*(?:de\s+presupuesto|como\s+máximo|como\s+maximo|máximo|maximo)"
        ),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("budget pattern is valid"))
    .collect()
});

/// Budget stated in a single message, if any.
pub fn find_budget(text: &str) -> Option<f64> {
    BUDGET_PATTERNS.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|amount| parse_amount(amount.as_str()))
    })
}

/// Only the user's own words count; the model's replies often quote prices
/// that are not a budget.
pub fn extract_budget(history: &[HistoryMessage]) -> Option<f64> {
    history
        .iter()
        .rev()
        .filter(|message| message.is_user())
        .find_map(|message| find_budget(&message.content))
}
