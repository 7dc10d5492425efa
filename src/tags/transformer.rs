//! Pool to contract tag transformation

use tracing::warn;
use crate::{
    config::{ADDRESS_NAMESPACE, ADDRESS_PLACEHOLDER},
    tags::sanitize::strip_markup,
    types::{ContractTag, Pool, PoolToken},
};

/// Per-invocation constants a transformer needs besides the pool itself.
#[derive(Debug, Clone, Copy)]
pub struct TagContext<'a> {
    pub network_id: &'a str,
    pub project_name: &'a str,
    pub website_template: &'a str,
}

pub type TransformFn = fn(&Pool, &TagContext<'_>) -> ContractTag;

pub fn namespaced_address(network_id: &str, address: &str) -> String {
    format!("{}:{}:{}", ADDRESS_NAMESPACE, network_id, address)
}

pub fn pool_to_tag(pool: &Pool, ctx: &TagContext<'_>) -> ContractTag {
    let tokens = ordered_tokens(&pool.tokens);

    let public_name = match pool.display_name() {
        Some(name) => name.to_string(),
        None => synthesized_name(&tokens, ctx.project_name),
    };

    ContractTag {
        contract_address: namespaced_address(ctx.network_id, &pool.id),
        public_name_tag: clean_text(&public_name, &pool.id, "name"),
        project_name: ctx.project_name.to_string(),
        ui_website_link: ctx.website_template.replace(ADDRESS_PLACEHOLDER, &pool.id),
        public_note: clean_text(&public_note(&tokens, ctx.project_name), &pool.id, "note"),
    }
}

// Pairs keep subgraph order, larger baskets are sorted by symbol.
fn ordered_tokens(tokens: &[PoolToken]) -> Vec<&PoolToken> {
    let mut ordered: Vec<&PoolToken> = tokens.iter().collect();
    if ordered.len() > 2 {
        ordered.sort_by(|a, b| {
            a.symbol
                .to_lowercase()
                .cmp(&b.symbol.to_lowercase())
                .then_with(|| a.symbol.cmp(&b.symbol))
        });
    }
    ordered
}

fn synthesized_name(tokens: &[&PoolToken], project_name: &str) -> String {
    let symbols: Vec<&str> = tokens
        .iter()
        .map(|token| token.symbol.trim())
        .filter(|symbol| !symbol.is_empty())
        .collect();

    if symbols.is_empty() {
        format!("{} Pool", project_name)
    } else {
        format!("{} Pool", symbols.join("/"))
    }
}

fn public_note(tokens: &[&PoolToken], project_name: &str) -> String {
    let described: Vec<String> = tokens
        .iter()
        .map(|token| describe_token(token))
        .filter(|text| !text.is_empty())
        .collect();

    if described.is_empty() {
        return format!("The liquidity pool contract on {}.", project_name);
    }

    format!(
        "The liquidity pool contract on {} for {}.",
        project_name,
        human_join(&described)
    )
}

fn describe_token(token: &PoolToken) -> String {
    let name = token.name.trim();
    let symbol = token.symbol.trim();
    match (name.is_empty(), symbol.is_empty()) {
        (false, false) => format!("{} ({})", name, symbol),
        (false, true) => name.to_string(),
        (true, false) => symbol.to_string(),
        (true, true) => String::new(),
    }
}

fn human_join(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

fn clean_text(text: &str, pool_id: &str, field: &str) -> String {
    let cleaned = strip_markup(text);
    if cleaned != text {
        warn!(pool = %pool_id, field, "Stripped markup from tag text");
    }
    cleaned.into_owned()
}
