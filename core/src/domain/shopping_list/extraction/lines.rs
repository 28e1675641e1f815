use once_cell::sync::Lazy;
use regex::Regex;

/// A strategy must produce at least this many lines to be accepted.
pub const MIN_CANDIDATE_LINES: usize = 2;

const MAX_CAPITALIZED_WORDS: usize = 8;
const MAX_CAPITALIZED_CHARS: usize = 80;

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•·+]\s+(\S.*)$").expect("bullet pattern is valid"));

static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}[.)]\s+(\S.*)$").expect("numbered pattern is valid"));

static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:total|subtotal|presupuesto|precio\s+total|coste\s+total|costo\s+total|importe|ahorro)\b",
    )
    .expect("summary pattern is valid")
});

/// Openers of prose lines that happen to start with a capital letter.
const PROSE_OPENERS: &[&str] = &[
    "lista", "aquí", "aqui", "hola", "espero", "recuerda", "nota", "consejo", "si", "puedes",
    "te", "con", "para", "esta", "este", "estos", "estas", "he", "claro", "perfecto", "por",
    "buen", "buena", "que",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStrategy {
    Bulleted,
    Numbered,
    Capitalized,
}

/// Removes markdown emphasis and surrounding whitespace.
pub fn clean_line(line: &str) -> String {
    line.replace("**", "").replace("__", "").trim().to_string()
}

fn is_heading_or_summary(body: &str) -> bool {
    let body = body.trim();
    body.is_empty() || body.ends_with(':') || SUMMARY_RE.is_match(body)
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn bulleted(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| {
            BULLET_RE
                .captures(line)
                .and_then(|caps| caps.get(1))
                .is_some_and(|body| !is_heading_or_summary(body.as_str()))
        })
        .cloned()
        .collect()
}

fn numbered(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| {
            NUMBERED_RE
                .captures(line)
                .and_then(|caps| caps.get(1))
                .is_some_and(|body| !is_heading_or_summary(body.as_str()))
        })
        .cloned()
        .collect()
}

fn is_capitalized_item(line: &str) -> bool {
    let Some(first) = line.chars().next() else {
        return false;
    };

    if !first.is_uppercase() || is_heading_or_summary(line) {
        return false;
    }

    if line.chars().count() > MAX_CAPITALIZED_CHARS || word_count(line) > MAX_CAPITALIZED_WORDS {
        return false;
    }

    if line.ends_with(['?', '!', '.']) {
        return false;
    }

    let opener = line
        .split_whitespace()
        .next()
        .map(|word| word.trim_end_matches([',', ':']).to_lowercase())
        .unwrap_or_default();

    !PROSE_OPENERS.contains(&opener.as_str())
}

fn capitalized(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| is_capitalized_item(line))
        .cloned()
        .collect()
}

/// Runs the bulleted, numbered and capitalised strategies in that order and
/// returns the first batch holding at least [`MIN_CANDIDATE_LINES`] lines.
pub fn candidate_lines(reply: &str) -> Option<(LineStrategy, Vec<String>)> {
    let lines: Vec<String> = reply
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect();

    let strategies: [(LineStrategy, fn(&[String]) -> Vec<String>); 3] = [
        (LineStrategy::Bulleted, bulleted),
        (LineStrategy::Numbered, numbered),
        (LineStrategy::Capitalized, capitalized),
    ];

    strategies
        .into_iter()
        .map(|(strategy, select)| (strategy, select(&lines)))
        .find(|(_, found)| found.len() >= MIN_CANDIDATE_LINES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_take_precedence() {
        let reply = "Tu lista:\n- Leche\n- Pan\n1. Huevos\n2. Arroz\n3. Sal";
        let (strategy, lines) = candidate_lines(reply).unwrap();
        assert_eq!(strategy, LineStrategy::Bulleted);
        assert_eq!(lines, vec!["- Leche", "- Pan"]);
    }

    #[test]
    fn test_single_bullet_falls_through_to_numbers() {
        let reply = "- Consejo suelto\n1. Huevos\n2) Arroz";
        let (strategy, lines) = candidate_lines(reply).unwrap();
        assert_eq!(strategy, LineStrategy::Numbered);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_capitalized_lines() {
        let reply = "Aquí tienes lo que necesitas:\nTomates 1 kg\nPechuga de pollo\n¿Quieres algo más?";
        let (strategy, lines) = candidate_lines(reply).unwrap();
        assert_eq!(strategy, LineStrategy::Capitalized);
        assert_eq!(lines, vec!["Tomates 1 kg", "Pechuga de pollo"]);
    }

    #[test]
    fn test_headings_and_totals_are_skipped() {
        let reply = "- **Lácteos:**\n- Leche\n- Total: 12€\n- Yogur";
        let (_, lines) = candidate_lines(reply).unwrap();
        assert_eq!(lines, vec!["- Leche", "- Yogur"]);
    }

    #[test]
    fn test_long_bullets_are_kept() {
        let reply = "- Pechuga de pollo fileteada de corral, mejor si es de la marca blanca del súper\n\
            - Tomates maduros de rama para hacer una salsa casera con ajo y albahaca fresca\n\
            - Pan - 1€";
        let (strategy, lines) = candidate_lines(reply).unwrap();
        assert_eq!(strategy, LineStrategy::Bulleted);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_horizontal_rule_is_not_a_bullet() {
        assert!(candidate_lines("---\n- Leche").is_none());
    }

    #[test]
    fn test_prose_only_yields_nothing() {
        let reply = "Hola, claro que puedo ayudarte.\n¿Para cuántas personas es la compra?";
        assert!(candidate_lines(reply).is_none());
    }
}
