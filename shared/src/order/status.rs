//! Order status machine
//!
//! Channel, preparation area and status are closed enums with an explicit
//! transition table. Every status change goes through `can_transition`;
//! nothing is inferred from timers or payment callbacks.

use serde::{Deserialize, Serialize};

use super::types::PaymentMethod;

/// Service channel, fixed at order creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Delivery,
    DineIn,
    Pickup,
}

/// Kitchen lane an order is routed to, derived from its channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrepArea {
    Floor,
    Delivery,
    Pickup,
}

impl From<Channel> for PrepArea {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::DineIn => PrepArea::Floor,
            Channel::Delivery => PrepArea::Delivery,
            Channel::Pickup => PrepArea::Pickup,
        }
    }
}

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Pay-now wallet checkout pending gateway confirmation
    AwaitingPaymentConfirmation,
    /// Unattended pickup order pending staff acceptance
    AwaitingOrderConfirmation,
    /// Dine-in order just opened at the POS
    New,
    Confirmed,
    Preparing,
    ReadyForAssembly,
    Assembling,
    Ready,
    OutForDelivery,
    Delivered,
    PickedUp,
    /// Terminal. Set only by payment confirmation, never directly.
    Paid,
    /// Dine-in side branch: table asked for the bill
    BillRequested,
    /// Terminal escape hatch
    Cancelled,
}

impl OrderStatus {
    /// Entry status at order placement.
    ///
    /// Dine-in always starts the POS flow at `New`. Pay-now wallets wait for
    /// the gateway; unattended pickup paying in person waits for staff
    /// acceptance; everything else goes straight to the kitchen.
    pub fn entry_for(channel: Channel, method: PaymentMethod) -> Self {
        match channel {
            Channel::DineIn => OrderStatus::New,
            _ if method.is_pay_now() => OrderStatus::AwaitingPaymentConfirmation,
            Channel::Pickup => OrderStatus::AwaitingOrderConfirmation,
            Channel::Delivery => OrderStatus::Preparing,
        }
    }

    /// Terminal statuses accept no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Cancelled)
    }

    /// Dine-in "being served" lane: the states a table can request the bill from
    pub fn is_being_served(self) -> bool {
        matches!(
            self,
            OrderStatus::New
                | OrderStatus::Confirmed
                | OrderStatus::Preparing
                | OrderStatus::ReadyForAssembly
                | OrderStatus::Assembling
                | OrderStatus::Ready
        )
    }

    /// Transition table.
    ///
    /// The assembly sub-lane (`ReadyForAssembly`/`Assembling`) is optional per
    /// kitchen; `Preparing -> Ready` directly is also legal.
    pub fn can_transition(self, next: OrderStatus, channel: Channel) -> bool {
        use OrderStatus::*;

        if self == next {
            return false;
        }

        match (self, next) {
            // Gateway confirmed / staff accepted the order
            (AwaitingPaymentConfirmation, Preparing) => true,
            (AwaitingOrderConfirmation, Preparing) => true,

            // Dine-in POS flow
            (New, Confirmed) => channel == Channel::DineIn,
            (Confirmed, Preparing) => channel == Channel::DineIn,

            // Kitchen lanes
            (Preparing, ReadyForAssembly)
            | (ReadyForAssembly, Assembling)
            | (Assembling, Ready)
            | (Preparing, Ready) => true,

            // Channel tails
            (Ready, OutForDelivery) | (OutForDelivery, Delivered) => {
                channel == Channel::Delivery
            }
            (Ready, PickedUp) => channel == Channel::Pickup,

            // Bill side branch (dine-in only)
            (from, BillRequested) => channel == Channel::DineIn && from.is_being_served(),

            // Settlement
            (Ready | OutForDelivery | Delivered | PickedUp | BillRequested, Paid) => true,

            // Escape hatch
            (from, Cancelled) => !from.is_terminal(),

            _ => false,
        }
    }
}
