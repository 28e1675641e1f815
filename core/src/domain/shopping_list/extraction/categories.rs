pub const DEFAULT_CATEGORY: &str = "Otros";

/// Keywords are written without accents; names are folded the same way
/// before matching. The first category with a hit wins.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Lácteos",
        &[
            "leche", "yogur", "yogurt", "queso", "mantequilla", "nata", "kefir", "requeson",
            "batido",
        ],
    ),
    ("Huevos", &["huevo"]),
    (
        "Carnes",
        &[
            "pollo", "ternera", "cerdo", "carne", "pavo", "jamon", "chorizo", "salchicha",
            "hamburguesa", "lomo", "filete", "cordero", "bacon", "panceta", "pechuga", "muslo",
        ],
    ),
    (
        "Pescados",
        &[
            "pescado", "salmon", "merluza", "atun", "gamba", "langostino", "bacalao", "sardina",
            "dorada", "lubina", "mejillon", "calamar", "boqueron",
        ],
    ),
    (
        "Frutas",
        &[
            "manzana", "platano", "naranja", "pera", "fresa", "uva", "limon", "melon", "sandia",
            "kiwi", "fruta", "mandarina", "piña", "melocoton", "aguacate", "mango", "cereza",
        ],
    ),
    (
        "Verduras",
        &[
            "lechuga", "tomate", "cebolla", "zanahoria", "patata", "pimiento", "calabacin",
            "espinaca", "brocoli", "ajo", "pepino", "verdura", "berenjena", "judia", "coliflor",
            "champiñon", "puerro", "ensalada",
        ],
    ),
    (
        "Panadería",
        &[
            "pan", "baguette", "barra", "tostada", "bollo", "bolleria", "croissant", "magdalena",
        ],
    ),
    (
        "Despensa",
        &[
            "arroz", "pasta", "macarrones", "espagueti", "fideo", "lenteja", "garbanzo", "alubia",
            "harina", "cereales", "avena", "aceite", "sal", "azucar", "vinagre", "conserva",
            "legumbre", "especia", "pimienta", "caldo", "galleta",
        ],
    ),
    (
        "Bebidas",
        &[
            "agua", "zumo", "refresco", "cerveza", "vino", "cafe", "te", "infusion",
        ],
    ),
    ("Congelados", &["congelado", "congelada", "pizza", "helado"]),
    (
        "Limpieza",
        &[
            "detergente", "lejia", "jabon", "suavizante", "friegasuelos", "lavavajillas",
            "estropajo", "bayeta",
        ],
    ),
    (
        "Higiene",
        &[
            "champu", "gel", "desodorante", "dentifrico", "papel", "compresa", "pañal",
        ],
    ),
];

/// Lower-cases and strips the acute accents and diaeresis used in Spanish.
/// `ñ` is a distinct letter and is kept.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' => 'a',
            'é' | 'è' => 'e',
            'í' | 'ì' => 'i',
            'ó' | 'ò' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

/// Plural forms (`-s`, `-es`) always match; longer keywords also match as
/// word prefixes so `melocoton` covers `melocotones`.
fn keyword_matches(word: &str, keyword: &str) -> bool {
    if word == keyword {
        return true;
    }

    if let Some(suffix) = word.strip_prefix(keyword)
        && (suffix == "s" || suffix == "es")
    {
        return true;
    }

    keyword.chars().count() >= 5 && word.starts_with(keyword)
}

pub fn categorize(name: &str) -> &'static str {
    let folded = fold(name);
    let words: Vec<&str> = folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| words.iter().any(|word| keyword_matches(word, keyword)))
        })
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dairy() {
        assert_eq!(categorize("Leche desnatada"), "Lácteos");
        assert_eq!(categorize("Yogures naturales"), "Lácteos");
    }

    #[test]
    fn test_accents_and_plurals() {
        assert_eq!(categorize("Limones"), "Frutas");
        assert_eq!(categorize("Melocotones en almíbar"), "Frutas");
        assert_eq!(categorize("Jamón serrano"), "Carnes");
        assert_eq!(categorize("Café molido"), "Bebidas");
    }

    #[test]
    fn test_short_keywords_need_whole_words() {
        assert_eq!(categorize("Salmón ahumado"), "Pescados");
        assert_eq!(categorize("Sal fina"), "Despensa");
        assert_eq!(categorize("Pan integral"), "Panadería");
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(categorize("Pilas AA"), DEFAULT_CATEGORY);
    }
}
