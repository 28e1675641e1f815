use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::shopping_list::extraction::{
    AMOUNT_PATTERN, ExtractedProduct, categories::categorize, parse_amount,
};

pub const DEFAULT_QUANTITY: &str = "1";

const UNIT: &str = r"(?:kg|kilos?|gr|g|gramos|litros?|l|ml|cl|uds?\.?|unidades|unidad|paquetes?|latas?|botellas?|bricks?|docenas?|bolsas?|piezas?|botes?|tarros?|barras?|cajas?|mallas?|bandejas?|manojos?)";

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*•·+]|\d{1,2}[.)])\s*").expect("marker pattern is valid")
});

/// Trailing price forms, most specific first.
static PRICE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(
            r"(?i)\s*\(\s*(?:aprox\.?|aproximadamente|~)?\s*{AMOUNT_PATTERN}\s*(?:€|eur(?:os?)?)\s*\)\s*$"
        ),
        format!(
            r"(?i)[\s:=~–—-]*(?:aprox\.?\s*|aproximadamente\s*|~\s*)?{AMOUNT_PATTERN}\s*(?:€|eur(?:os?)?)(?:\s*/\s*\w+)?\s*(?:aprox\.?|aproximadamente)?\s*$"
        ),
        format!(r"(?i)[\s:=~–—-]*€\s*{AMOUNT_PATTERN}(?:\s*/\s*\w+)?\s*$"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("price pattern is valid"))
    .collect()
});

static LEADING_QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(\d+(?:[.,]\d+)?(?:\s*{UNIT}\b)?)\s*(?:x\s+|de\s+)?"
    ))
    .expect("leading quantity pattern is valid")
});

static TRAILING_QUANTITY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\s*\(\s*([^()]*\d[^()]*?)\s*\)\s*$".to_string(),
        format!(r"(?i)[\s,:–—-]+(\d+(?:[.,]\d+)?\s*{UNIT})\s*$"),
        r"(?i)\s+x\s*(\d+)\s*$".to_string(),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("trailing quantity pattern is valid"))
    .collect()
});

fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '—' | ':' | ',' | '.'))
}

/// Splits a trailing price off `text`, returning the rest and the price.
fn take_price(text: &str) -> (String, Option<f64>) {
    for re in PRICE_PATTERNS.iter() {
        if let Some(caps) = re.captures(text)
            && let (Some(whole), Some(amount)) = (caps.get(0), caps.get(1))
            && let Some(price) = parse_amount(amount.as_str())
        {
            return (text[..whole.start()].to_string(), Some(price));
        }
    }

    (text.to_string(), None)
}

/// Splits a leading quantity (`2 kg de`, `3x`) or, failing that, a trailing
/// one (`(1L)`, `- 500 g`, `x6`) off `text`.
fn take_quantity(text: &str) -> (String, Option<String>) {
    if let Some(caps) = LEADING_QUANTITY_RE.captures(text)
        && let (Some(whole), Some(quantity)) = (caps.get(0), caps.get(1))
    {
        let rest = &text[whole.end()..];
        if !trim_separators(rest).is_empty() {
            return (rest.to_string(), Some(quantity.as_str().trim().to_string()));
        }
    }

    for re in TRAILING_QUANTITY_PATTERNS.iter() {
        if let Some(caps) = re.captures(text)
            && let (Some(whole), Some(quantity)) = (caps.get(0), caps.get(1))
        {
            let rest = &text[..whole.start()];
            if !trim_separators(rest).is_empty() {
                return (rest.to_string(), Some(quantity.as_str().trim().to_string()));
            }
        }
    }

    (text.to_string(), None)
}

/// Parses one candidate line into a product. Returns `None` when nothing
/// resembling a name is left after removing marker, price and quantity.
pub fn parse_product_line(line: &str) -> Option<ExtractedProduct> {
    let body = MARKER_RE.replace(line, "");
    let body = trim_separators(&body);

    let (rest, price) = take_price(body);
    let (rest, quantity) = take_quantity(trim_separators(&rest));
    let name = trim_separators(&rest);

    if name.is_empty() || !name.chars().any(char::is_alphabetic) {
        return None;
    }

    Some(ExtractedProduct {
        name: name.to_string(),
        quantity: quantity.unwrap_or_else(|| DEFAULT_QUANTITY.to_string()),
        category: categorize(name).to_string(),
        price,
    })
}
