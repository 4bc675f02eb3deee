use crate::core::Product;

/// Returns a new catalog containing only the products for which the
/// predicate is false. Relative order of retained products is preserved and
/// retained products are never mutated.
pub fn remove_where<F>(catalog: Vec<Product>, predicate: F) -> Vec<Product>
where
    F: Fn(&Product) -> bool,
{
    catalog.into_iter().filter(|p| !predicate(p)).collect()
}

/// Applies `update` to every product in sequence order, exactly once each.
/// Length and element identity are unchanged.
pub fn update_each<F>(catalog: &mut [Product], mut update: F)
where
    F: FnMut(&mut Product),
{
    for product in catalog.iter_mut() {
        update(product);
    }
}

/// The fixed multiplicative price increase: `price_raise(1.10)` raises every
/// price by 10%. Float precision loss is accepted as-is.
pub fn price_raise(rate: f64) -> impl Fn(&mut Product) {
    move |product| product.price *= rate
}
