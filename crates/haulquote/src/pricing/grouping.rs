use super::domain::{DetectedItem, ItemGroup};
use super::matching::normalize_label;

pub const BULK_THRESHOLD: u64 = 5;
pub const BULK_DISCOUNT: f64 = 0.9;
pub const LARGE_BULK_THRESHOLD: u64 = 10;
pub const LARGE_BULK_DISCOUNT: f64 = 0.85;

/// Discount factor earned by a category's combined quantity, if any.
pub fn bulk_discount_for(total_quantity: u64) -> Option<f64> {
    let mut discount = None;
    if total_quantity >= BULK_THRESHOLD {
        discount = Some(BULK_DISCOUNT);
    }
    if total_quantity >= LARGE_BULK_THRESHOLD {
        discount = Some(LARGE_BULK_DISCOUNT);
    }
    discount
}

/// Group items by normalized category label in first-seen order.
///
/// Labels are compared as written, so "appliance" and "appliances" form two groups. Use
/// [`QuoteCalculator::group_items`](super::QuoteCalculator::group_items) to group by the
/// fee table's category keys instead.
pub fn group_items(items: &[DetectedItem]) -> Vec<ItemGroup> {
    group_items_by(items, |item| normalize_label(&item.category))
}

/// Group items under the key `category_of` assigns to each, in first-seen order.
pub fn group_items_by<F>(items: &[DetectedItem], mut category_of: F) -> Vec<ItemGroup>
where
    F: FnMut(&DetectedItem) -> String,
{
    let mut groups: Vec<ItemGroup> = Vec::new();

    for item in items {
        let category = category_of(item);
        let quantity = u64::from(item.quantity);
        match groups.iter_mut().find(|group| group.category == category) {
            Some(group) => {
                group.total_quantity += quantity;
                group.items.push(item.clone());
            }
            None => groups.push(ItemGroup {
                category,
                items: vec![item.clone()],
                total_quantity: quantity,
                bulk_discount: None,
            }),
        }
    }

    for group in &mut groups {
        group.bulk_discount = bulk_discount_for(group.total_quantity);
    }

    groups
}
