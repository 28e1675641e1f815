//! Turns a free-text chat reply into shopping-list data.
//!
//! The heuristic runs in a fixed order: supermarket detection, display
//! name, budget (user messages only), candidate lines (bulleted, numbered,
//! then capitalised), and finally per-line parsing of name, quantity,
//! price and category. Fewer than two products means "no list".

pub mod budget;
pub mod categories;
pub mod lines;
pub mod product_line;
pub mod supermarket;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::conversation::entities::{ChatMessage, MessageRole};

pub const DEFAULT_LIST_NAME: &str = "Lista de la compra";

/// Minimal view of a chat turn needed by the heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryMessage {
    pub role: MessageRole,
    pub content: String,
}

impl HistoryMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

impl From<&ChatMessage> for HistoryMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role.clone(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedProduct {
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedShoppingList {
    pub name: String,
    pub supermarket: Option<String>,
    pub budget: Option<f64>,
    pub products: Vec<ExtractedProduct>,
    pub estimated_total: f64,
}

impl ExtractedShoppingList {
    pub fn exceeds_budget(&self) -> bool {
        self.budget
            .is_some_and(|budget| self.estimated_total > budget)
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Euro amount: `12`, `12.5`, `12,50`, or with thousands separators as in
/// `1.000` and `1.250,50`. Exactly one capture group.
pub(crate) const AMOUNT_PATTERN: &str = r"(\d{1,3}(?:\.\d{3})+(?:,\d{1,2})?|\d+(?:[.,]\d{1,2})?)";

static THOUSANDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}(?:\.\d{3})+(?:,\d{1,2})?$").expect("thousands pattern is valid")
});

/// Parses an [`AMOUNT_PATTERN`] match into euros.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let normalized = if THOUSANDS_RE.is_match(raw) {
        raw.replace('.', "").replace(',', ".")
    } else {
        raw.replace(',', ".")
    };

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(round_cents)
}

pub fn list_name_for(supermarket: Option<&str>) -> String {
    match supermarket {
        Some(name) => format!("Lista de {name}"),
        None => DEFAULT_LIST_NAME.to_string(),
    }
}

/// Extracts a shopping list from `reply`. `history` holds the conversation
/// so far (the reply itself excluded) in chronological order.
pub fn extract_shopping_list(
    reply: &str,
    history: &[HistoryMessage],
) -> Option<ExtractedShoppingList> {
    let supermarket = supermarket::detect_supermarket(reply, history);
    let name = list_name_for(supermarket.as_deref());
    let budget = budget::extract_budget(history);

    let (strategy, candidates) = lines::candidate_lines(reply)?;

    let products: Vec<ExtractedProduct> = candidates
        .iter()
        .filter_map(|line| product_line::parse_product_line(line))
        .collect();

    if products.len() < lines::MIN_CANDIDATE_LINES {
        tracing::debug!(
            ?strategy,
            candidates = candidates.len(),
            parsed = products.len(),
            "not enough products in reply"
        );
        return None;
    }

    let estimated_total = round_cents(products.iter().filter_map(|p| p.price).sum());

    Some(ExtractedShoppingList {
        name,
        supermarket,
        budget,
        products,
        estimated_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MERCADONA_REPLY: &str = "¡Claro! Aquí tienes tu lista para Mercadona:\n\n\
        - Leche desnatada (1L) - 1.20€\n\
        - Pan integral - 0.95€\n\
        - Huevos (12 uds) - 2.10€\n\n\
        Total aproximado: 4.25€";

    #[test]
    fn test_mercadona_list() {
        let list = extract_shopping_list(MERCADONA_REPLY, &[]).unwrap();
        assert_eq!(list.name, "Lista de Mercadona");
        assert_eq!(list.supermarket.as_deref(), Some("Mercadona"));
        assert_eq!(list.products.len(), 3);
        assert_eq!(list.products[0].name, "Leche desnatada");
        assert_eq!(list.products[0].quantity, "1L");
        assert_eq!(list.products[0].category, "Lácteos");
        assert_eq!(list.products[2].quantity, "12 uds");
        assert_eq!(list.estimated_total, 4.25);
    }

    #[test]
    fn test_budget_comes_from_user_history() {
        let history = vec![
            HistoryMessage::user("Necesito hacer la compra, presupuesto de 30€"),
            HistoryMessage::assistant("¿Tienes alguna preferencia?"),
            HistoryMessage::user("Nada de gluten"),
        ];
        let list = extract_shopping_list(MERCADONA_REPLY, &history).unwrap();
        assert_eq!(list.budget, Some(30.0));
        assert!(!list.exceeds_budget());
    }

    #[test]
    fn test_generic_name_without_supermarket() {
        let reply = "1. Arroz - 1€\n2. Lentejas - 1.50€";
        let list = extract_shopping_list(reply, &[]).unwrap();
        assert_eq!(list.name, DEFAULT_LIST_NAME);
        assert_eq!(list.supermarket, None);
    }

    #[test]
    fn test_supermarket_from_user_message() {
        let history = vec![HistoryMessage::user("Voy a ir al Lidl")];
        let list = extract_shopping_list("- Leche\n- Pan", &history).unwrap();
        assert_eq!(list.name, "Lista de Lidl");
    }

    #[test]
    fn test_fewer_than_two_products_is_none() {
        assert!(extract_shopping_list("- Leche desnatada - 1.20€", &[]).is_none());
        assert!(extract_shopping_list("Hola, ¿en qué te ayudo?", &[]).is_none());
        assert!(extract_shopping_list("- 1€\n- 2€", &[]).is_none());
    }

    #[test]
    fn test_long_descriptive_items_still_form_a_list() {
        let reply = "- Pechuga de pollo fileteada de corral, mejor si es de la marca blanca\n\
            - Tomates maduros de rama para hacer una salsa casera con ajo y albahaca\n\
            - Pan - 1€";
        let list = extract_shopping_list(reply, &[]).unwrap();
        assert_eq!(list.products.len(), 3);
        assert_eq!(list.products[0].category, "Carnes");
        assert_eq!(list.estimated_total, 1.0);
    }

    #[test]
    fn test_todo_el_dia_is_not_a_supermarket() {
        let history = vec![HistoryMessage::user(
            "Necesito la compra para todo el dia, presupuesto de 20€",
        )];
        let list = extract_shopping_list("- Leche\n- Pan", &history).unwrap();
        assert_eq!(list.name, DEFAULT_LIST_NAME);
        assert_eq!(list.supermarket, None);
        assert_eq!(list.budget, Some(20.0));
    }

    #[test]
    fn test_exceeds_budget() {
        let history = vec![HistoryMessage::user("tengo 3 euros")];
        let list = extract_shopping_list(MERCADONA_REPLY, &history).unwrap();
        assert!(list.exceeds_budget());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("25,50"), Some(25.5));
        assert_eq!(parse_amount("7"), Some(7.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.000"), Some(1000.0));
        assert_eq!(parse_amount("1.250,50"), Some(1250.5));
        assert_eq!(parse_amount("12.50"), Some(12.5));
    }
}
