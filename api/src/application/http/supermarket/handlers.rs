pub mod get_supermarkets;
