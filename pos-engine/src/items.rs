//! Line item utilities
//!
//! - `generate_instance_id`: content-addressed instance IDs for items
//! - `input_to_item`: convert ItemInput to OrderItem
//! - `merge_items`: add inputs into an order, merging by instance id
//!
//! The instance_id is derived only from identity-defining input fields, so
//! the same product with the same price, add-ons and note always merges into
//! one line regardless of when it was added.

use shared::order::{ItemInput, Order, OrderItem};

/// Generate a content-addressed instance_id from an ItemInput.
///
/// Hashed fields: product_id, price, add-ons (name + price), note.
/// Quantity is excluded so repeated additions merge by quantity.
pub fn generate_instance_id(input: &ItemInput) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();

    hasher.update(input.product_id.as_bytes());
    hasher.update(input.price.to_be_bytes());

    for addon in &input.addons {
        hasher.update(addon.name.as_bytes());
        hasher.update(addon.price.to_be_bytes());
    }

    if let Some(note) = &input.note {
        hasher.update(note.as_bytes());
    }

    let result = hasher.finalize();
    hex::encode(&result[..16]) // First 16 bytes for a shorter ID
}

/// Convert an ItemInput into an OrderItem
pub fn input_to_item(input: &ItemInput, sent_to_kitchen: bool) -> OrderItem {
    OrderItem {
        product_id: input.product_id.clone(),
        instance_id: generate_instance_id(input),
        name: input.name.clone(),
        price: input.price,
        quantity: input.quantity,
        addons: input.addons.clone(),
        note: input.note.clone(),
        sent_to_kitchen,
    }
}

/// Merge inputs into an order's item list.
///
/// A quantity bump lands on an existing *unsent* line with the same
/// instance_id; lines already transmitted to the kitchen are left alone and a
/// fresh unsent line is appended instead, so re-sends stay explicit.
pub fn merge_items(order: &mut Order, inputs: &[ItemInput], sent_to_kitchen: bool) {
    for input in inputs {
        let instance_id = generate_instance_id(input);
        let existing = order
            .items
            .iter_mut()
            .find(|i| i.instance_id == instance_id && i.sent_to_kitchen == sent_to_kitchen);

        match existing {
            Some(item) => item.quantity += input.quantity,
            None => order.items.push(input_to_item(input, sent_to_kitchen)),
        }
    }
}
