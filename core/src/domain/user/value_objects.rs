#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub allergens: Vec<String>,
    pub preferences: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub allergens: Option<Vec<String>>,
    pub preferences: Option<Vec<String>>,
}
