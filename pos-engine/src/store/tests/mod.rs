use super::*;

use shared::command::ToastSeverity;
use shared::models::{EarningRule, Reward};
use shared::order::{
    ActorRole, Channel, CustomerInfo, ItemInput, OrderDraft, OrderStatus, PaymentInput,
    PaymentMethod,
};

mod test_flows;

fn create_test_store() -> Store {
    // First caller wins; later calls are no-ops
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut state = AppState::default();
    for (id, price, cost, stock) in [
        ("p1", 10.0, Some(4.0), 50),
        ("p2", 5.5, Some(2.0), 50),
        ("p3", 25.5, None, 10),
        ("p4", 40.0, Some(18.0), 10),
    ] {
        state.catalog.insert(
            id.to_string(),
            Product {
                id: id.to_string(),
                name: format!("Product {}", id),
                price,
                cost,
                stock,
            },
        );
    }
    state.programs.push(LoyaltyProgram {
        id: 1,
        name: "Puntos".to_string(),
        rule: EarningRule::AmountBased {
            amount_per_point: 10.0,
            points_per_unit: 5,
        },
        rewards: vec![Reward {
            id: 10,
            name: "Free drink".to_string(),
            points_cost: 50,
            product_id: Some("p2".to_string()),
        }],
        is_active: true,
    });
    Store::with_state(state)
}

fn meta() -> ActionMetadata {
    ActionMetadata::new(1, "Test Operator", ActorRole::Cashier)
}

fn item(product_id: &str, price: f64, quantity: i32) -> ItemInput {
    ItemInput {
        product_id: product_id.to_string(),
        name: format!("Product {}", product_id),
        price,
        quantity,
        addons: vec![],
        note: None,
    }
}

fn pickup_draft(items: Vec<ItemInput>, method: PaymentMethod) -> OrderDraft {
    OrderDraft {
        channel: Channel::Pickup,
        customer: CustomerInfo {
            name: "Luis".to_string(),
            phone: Some("987654321".to_string()),
            ..Default::default()
        },
        items,
        payment_method: method,
        tendered: None,
        exact_amount: false,
        estimated_minutes: None,
    }
}

fn dine_in_draft(items: Vec<ItemInput>) -> OrderDraft {
    OrderDraft {
        channel: Channel::DineIn,
        customer: CustomerInfo {
            name: "Mesa 4".to_string(),
            table: Some("4".to_string()),
            ..Default::default()
        },
        items,
        payment_method: PaymentMethod::Cash,
        tendered: None,
        exact_amount: false,
        estimated_minutes: None,
    }
}

fn delivery_draft(items: Vec<ItemInput>) -> OrderDraft {
    OrderDraft {
        channel: Channel::Delivery,
        customer: CustomerInfo {
            name: "Ana".to_string(),
            phone: Some("912345678".to_string()),
            address: Some("Av. Arequipa 123".to_string()),
            ..Default::default()
        },
        items,
        payment_method: PaymentMethod::Cash,
        tendered: None,
        exact_amount: false,
        estimated_minutes: Some(30),
    }
}

/// Place an order and return its id
fn place(store: &mut Store, draft: OrderDraft) -> i64 {
    let response = store.dispatch(Action::PlaceOrder { draft }, meta());
    assert!(response.success, "place failed: {:?}", response.error);
    response.order_id.unwrap()
}

/// Walk an order through a sequence of staff transitions
fn advance(store: &mut Store, order_id: i64, statuses: &[OrderStatus]) {
    for status in statuses {
        let response = store.dispatch(
            Action::UpdateOrderStatus {
                order_id,
                new_status: *status,
            },
            meta(),
        );
        assert!(
            response.success,
            "transition to {:?} failed: {:?}",
            status, response.error
        );
    }
}

fn open_session(store: &mut Store, opening_float: f64) {
    let response = store.dispatch(Action::OpenCashSession { opening_float }, meta());
    assert!(response.success, "open session failed: {:?}", response.error);
}

fn pay_cash_exact(store: &mut Store, order_id: i64) {
    let response = store.dispatch(
        Action::ConfirmPayment {
            order_id,
            payment: PaymentInput {
                method: PaymentMethod::Cash,
                tendered: None,
                exact_amount: true,
            },
        },
        meta(),
    );
    assert!(response.success, "payment failed: {:?}", response.error);
}
