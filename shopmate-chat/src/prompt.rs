//! Prompt construction for the shopping consultant.

use std::fmt::Write;

use shopmate_search::ProductRecord;

/// One listing line per product, prefixed with its position.
pub fn format_product_listing(products: &[ProductRecord]) -> String {
    let mut listing = String::new();
    for (index, product) in products.iter().enumerate() {
        let _ = writeln!(
            listing,
            "ID {index}: {} | Preço: {} | Loja: {}",
            product.title,
            product.display_price(),
            product.source
        );
    }
    listing
}

/// Builds the full prompt asking the model for a strict JSON recommendation.
pub fn build_prompt(message: &str, products: &[ProductRecord]) -> String {
    let listing = format_product_listing(products);
    let last_index = products.len().saturating_sub(1);

    format!(
        r#"Você é um assistente de compras.

LISTA DE PRODUTOS:
{listing}
USUÁRIO: "{message}"

Responda APENAS com um JSON puro, sem crases, sem markdown.
Formato obrigatório:
{{
    "reply": "Texto curto explicando a escolha.",
    "recommended_index": 0
}}
O recommended_index deve ser um ID da lista (de 0 a {last_index}).
Se não houver recomendação clara, use null no index.
"#
    )
}
