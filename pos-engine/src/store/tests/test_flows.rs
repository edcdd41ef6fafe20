use super::*;

#[test]
fn test_dine_in_full_flow() {
    let mut store = create_test_store();
    open_session(&mut store, 100.0);

    let order_id = place(&mut store, dine_in_draft(vec![item("p1", 10.0, 2)]));
    assert_eq!(
        store.state().order(order_id).unwrap().status,
        OrderStatus::New
    );

    // Kitchen send, then the POS flow
    let response = store.dispatch(Action::MarkItemsSent { order_id }, meta());
    assert!(response.success);
    advance(&mut store, order_id, &[
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
    ]);

    // Table asks for the bill, then settles in cash
    let response = store.dispatch(Action::RequestBill { order_id }, meta());
    assert!(response.success);
    pay_cash_exact(&mut store, order_id);

    let order = store.state().order(order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Paid);
    let settlement = order.settlement.as_ref().unwrap();
    assert_eq!(settlement.total, 20.0);
    assert_eq!(settlement.change, Some(0.0));

    // Full history chain, in order
    let statuses: Vec<OrderStatus> = order.history.iter().map(|h| h.status).collect();
    assert_eq!(statuses, vec![
        OrderStatus::New,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::BillRequested,
        OrderStatus::Paid,
    ]);

    // Bookkeeping landed in the session
    let session = store.state().session.as_ref().unwrap();
    assert_eq!(session.total_sales, 20.0);
    assert_eq!(session.expected_cash, 120.0);
    assert_eq!(session.total_profit, 12.0); // 20 - 2*4
}

#[test]
fn test_delivery_flow_with_driver() {
    let mut store = create_test_store();
    open_session(&mut store, 0.0);

    // Delivery enters Preparing directly, items already in the kitchen
    let order_id = place(&mut store, delivery_draft(vec![item("p1", 10.0, 3)]));
    let order = store.state().order(order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Preparing);
    assert!(order.items.iter().all(|i| i.sent_to_kitchen));

    let response = store.dispatch(
        Action::AssignStaff {
            order_id,
            assignment: shared::order::StaffAssignment::Driver("Pedro".to_string()),
        },
        meta(),
    );
    assert!(response.success);

    advance(&mut store, order_id, &[
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ]);

    // Cash on delivery with change
    let response = store.dispatch(
        Action::ConfirmPayment {
            order_id,
            payment: PaymentInput {
                method: PaymentMethod::Cash,
                tendered: Some(50.0),
                exact_amount: false,
            },
        },
        meta(),
    );
    assert!(response.success);

    let order = store.state().order(order_id).unwrap();
    assert_eq!(order.assigned_driver.as_deref(), Some("Pedro"));
    assert_eq!(order.settlement.as_ref().unwrap().change, Some(20.0));
    assert_eq!(store.state().session.as_ref().unwrap().expected_cash, 30.0);
}

#[test]
fn test_pickup_gateway_flow() {
    let mut store = create_test_store();
    open_session(&mut store, 0.0);

    // Pay-now wallet waits for the gateway
    let order_id = place(
        &mut store,
        pickup_draft(vec![item("p4", 40.0, 1)], PaymentMethod::Yape),
    );
    assert_eq!(
        store.state().order(order_id).unwrap().status,
        OrderStatus::AwaitingPaymentConfirmation
    );

    // Gateway confirmation re-enters the core as a plain transition
    advance(&mut store, order_id, &[
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
    ]);

    let response = store.dispatch(
        Action::ConfirmPayment {
            order_id,
            payment: PaymentInput {
                method: PaymentMethod::Yape,
                tendered: None,
                exact_amount: false,
            },
        },
        meta(),
    );
    assert!(response.success);

    let order = store.state().order(order_id).unwrap();
    let settlement = order.settlement.as_ref().unwrap();
    assert_eq!(settlement.method, PaymentMethod::Yape);
    assert!(settlement.tendered.is_none());

    // Wallet sales never touch the drawer
    let session = store.state().session.as_ref().unwrap();
    assert_eq!(session.total_sales, 40.0);
    assert_eq!(session.expected_cash, 0.0);
}

#[test]
fn test_cash_session_reconciliation_scenario() {
    let mut store = create_test_store();
    open_session(&mut store, 100.0);

    // Sale 1: 25.50 cash
    let order1 = place(
        &mut store,
        pickup_draft(vec![item("p3", 25.5, 1)], PaymentMethod::Cash),
    );
    advance(&mut store, order1, &[
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
    ]);
    pay_cash_exact(&mut store, order1);

    // Sale 2: 40.00 card
    let order2 = place(
        &mut store,
        pickup_draft(vec![item("p4", 40.0, 1)], PaymentMethod::Card),
    );
    advance(&mut store, order2, &[
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
    ]);
    let response = store.dispatch(
        Action::ConfirmPayment {
            order_id: order2,
            payment: PaymentInput {
                method: PaymentMethod::Card,
                tendered: None,
                exact_amount: false,
            },
        },
        meta(),
    );
    assert!(response.success);

    // Card sales never enter the drawer
    let session = store.state().session.as_ref().unwrap();
    assert_eq!(session.expected_cash, 125.5);
    assert_eq!(session.total_sales, 65.5);

    // Counted exactly: perfect close
    let response = store.dispatch(
        Action::CloseCashSession {
            counted_cash: 125.5,
        },
        meta(),
    );
    assert!(response.success);
    assert_eq!(response.toasts[0].severity, ToastSeverity::Success);

    let closed = &store.state().closed_sessions[0];
    assert_eq!(closed.variance, Some(0.0));
}

#[test]
fn test_loyalty_accrual_and_redemption_flow() {
    let mut store = create_test_store();
    open_session(&mut store, 0.0);

    // 37.00 at 5 pts per 10.00 spent: 15 points
    let order_id = place(
        &mut store,
        pickup_draft(
            vec![item("p3", 25.5, 1), item("p2", 5.75, 2)],
            PaymentMethod::Cash,
        ),
    );
    assert_eq!(store.state().order(order_id).unwrap().total, 37.0);
    advance(&mut store, order_id, &[
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
    ]);
    pay_cash_exact(&mut store, order_id);

    let order = store.state().order(order_id).unwrap();
    assert_eq!(order.earned_points, Some(15));

    let customer = store.state().customers.get("987654321").unwrap();
    assert_eq!(customer.points, 15);
    assert_eq!(customer.orders, vec![order_id]);

    // 15 points cannot buy a 50-point reward
    let response = store.dispatch(
        Action::RedeemReward {
            phone: "987654321".to_string(),
            reward_id: 10,
        },
        meta(),
    );
    assert!(!response.success);
    assert_eq!(store.state().customers.get("987654321").unwrap().points, 15);

    // Three more identical orders bring the balance to 60
    for _ in 0..3 {
        let id = place(
            &mut store,
            pickup_draft(
                vec![item("p3", 25.5, 1), item("p2", 5.75, 2)],
                PaymentMethod::Cash,
            ),
        );
        advance(&mut store, id, &[
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::PickedUp,
        ]);
        pay_cash_exact(&mut store, id);
    }
    assert_eq!(store.state().customers.get("987654321").unwrap().points, 60);

    let response = store.dispatch(
        Action::RedeemReward {
            phone: "987654321".to_string(),
            reward_id: 10,
        },
        meta(),
    );
    assert!(response.success);
    assert_eq!(store.state().customers.get("987654321").unwrap().points, 10);
}

#[test]
fn test_dine_in_reorder_round() {
    let mut store = create_test_store();
    open_session(&mut store, 50.0);

    let order_id = place(&mut store, dine_in_draft(vec![item("p1", 10.0, 1)]));
    store.dispatch(Action::MarkItemsSent { order_id }, meta());
    advance(&mut store, order_id, &[
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
    ]);

    // Second round lands unsent
    let response = store.dispatch(
        Action::AddItems {
            order_id,
            items: vec![item("p2", 5.5, 2)],
        },
        meta(),
    );
    assert!(response.success);
    assert!(store.state().order(order_id).unwrap().has_unsent_items());

    // Pre-bill is blocked until the round is sent
    let response = store.dispatch(Action::RequestBill { order_id }, meta());
    assert!(!response.success);
    assert_eq!(
        response.error.unwrap().code,
        shared::command::CommandErrorCode::UnsentItems
    );

    store.dispatch(Action::MarkItemsSent { order_id }, meta());
    let response = store.dispatch(Action::RequestBill { order_id }, meta());
    assert!(response.success);

    pay_cash_exact(&mut store, order_id);
    assert_eq!(
        store.state().order(order_id).unwrap().settlement.as_ref().unwrap().total,
        21.0
    );
}

#[test]
fn test_cancel_releases_nothing_to_session() {
    let mut store = create_test_store();
    open_session(&mut store, 100.0);

    let order_id = place(&mut store, delivery_draft(vec![item("p1", 10.0, 2)]));
    let response = store.dispatch(
        Action::CancelOrder {
            order_id,
            reason: Some("kitchen out of stock".to_string()),
        },
        meta(),
    );
    assert!(response.success);

    let order = store.state().order(order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert!(order.settlement.is_none());

    // Nothing registered: no stock consumed, no sale recorded
    assert_eq!(store.state().catalog.get("p1").unwrap().stock, 50);
    assert_eq!(store.state().session.as_ref().unwrap().total_sales, 0.0);
}
