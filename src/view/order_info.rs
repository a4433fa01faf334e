//! Order summary renderer.

use chrono::Local;
use tracing::debug;

use super::date::format_creation_date;
use super::{Field, ItemRow, Screen, ViewState};
use crate::models::{DisplayValue, Order};

/// Shows the order summary region and fills it from `order`.
///
/// Every field is overwritten and the item table is rebuilt from scratch,
/// so rendering the same order twice leaves the same screen.
pub fn render_order(screen: &mut Screen, order: &Order) {
    screen.show(ViewState::ShowingOrder);

    let panel = &mut screen.order;
    let scalars: [(Field, &DisplayValue); 17] = [
        (Field::OrderUid, &order.order_uid),
        (Field::TrackNumber, &order.track_number),
        (Field::Locale, &order.locale),
        (Field::DeliveryService, &order.delivery_service),
        (Field::InternalSignature, &order.internal_signature),
        (Field::ReceiverName, &order.delivery.name),
        (Field::PhoneNumber, &order.delivery.phone),
        (Field::City, &order.delivery.city),
        (Field::Address, &order.delivery.address),
        (Field::Email, &order.delivery.email),
        (Field::Transaction, &order.payment.transaction),
        (Field::Currency, &order.payment.currency),
        (Field::Amount, &order.payment.amount),
        (Field::DeliveryCost, &order.payment.delivery_cost),
        (Field::GoodsTotal, &order.payment.goods_total),
        (Field::CustomFee, &order.payment.custom_fee),
        (Field::Bank, &order.payment.bank),
    ];
    for (field, value) in scalars {
        panel.set_field(field, value.to_string());
    }
    panel.set_field(
        Field::CreationDate,
        format_creation_date(&order.date_created, &Local),
    );

    panel.items_amount = order.items.len().to_string();
    panel.items.clear();
    panel.items.extend(order.items.iter().map(ItemRow::from));

    debug!(order_uid = %order.order_uid, items = order.items.len(), "Rendered order");
}
