use crate::domain::chat::entities::UserContext;

const NONE_LISTED: &str = "ninguna";

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        NONE_LISTED.to_string()
    } else {
        values.join(", ")
    }
}

/// Spanish system prompt describing the assistant and the user's profile.
/// The requested list format is what the extraction heuristic reads best.
pub fn build_system_prompt(context: &UserContext) -> String {
    format!(
        "Eres SmartFood, un asistente que ayuda a planificar la compra en supermercados españoles.\n\
         Estás hablando con {name}.\n\
         Alergias e intolerancias: {allergens}.\n\
         Preferencias alimentarias: {preferences}.\n\
         Nunca incluyas productos que contengan sus alérgenos.\n\
         Cuando propongas una lista de la compra, escribe un producto por línea con el formato \
         \"- Producto (cantidad) - precio€\" y termina con el total aproximado. \
         Si el usuario menciona un supermercado o un presupuesto, tenlos en cuenta.",
        name = context.name,
        allergens = join_or_none(&context.allergens),
        preferences = join_or_none(&context.preferences),
    )
}
