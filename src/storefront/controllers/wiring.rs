//! # Application Wiring
//!
//! Subscribes the handlers that keep views in step with models. Models and
//! views never call each other; every reaction below is triggered by an
//! event on the bus and works on the shared `Shop`.

use anyhow::{anyhow, bail, Result};

use crate::storefront::context::Shop;
use crate::storefront::events::{
    EventBus, FormKind, ModelEvent, SimpleEventBus, StoreEvent, Topic, TopicPattern, ViewEvent,
};
use crate::storefront::models::{OrderField, Product};
use crate::storefront::views::card::{ADD_TO_BASKET, REMOVE_FROM_BASKET};
use crate::storefront::views::{Card, CardTemplate, ModalContent};

/// Error text order on the delivery step
const ORDER_ERROR_FIELDS: [OrderField; 2] = [OrderField::Address, OrderField::Payment];
/// Error text order on the contacts step
const CONTACT_ERROR_FIELDS: [OrderField; 2] = [OrderField::Phone, OrderField::Email];

/// Register every storefront handler on `bus`
pub fn subscribe_handlers(bus: &mut SimpleEventBus<Shop>) {
    bus.subscribe(Topic::ItemsChanged, Box::new(on_items_changed));
    bus.subscribe(Topic::CardSelected, Box::new(on_card_selected));
    bus.subscribe(Topic::PreviewChanged, Box::new(on_preview_changed));
    bus.subscribe(Topic::BasketToggleRequested, Box::new(on_basket_toggle));
    bus.subscribe(Topic::BasketItemRemoveRequested, Box::new(on_basket_remove));
    bus.subscribe(Topic::BasketChanged, Box::new(on_basket_changed));
    bus.subscribe(Topic::BasketOpened, Box::new(on_basket_opened));
    bus.subscribe(Topic::OrderOpened, Box::new(on_order_opened));
    bus.subscribe(Topic::PaymentChanged, Box::new(on_payment_changed));
    bus.subscribe_pattern(
        TopicPattern::field_changes(FormKind::Order),
        Box::new(on_order_field_changed),
    );
    bus.subscribe_pattern(
        TopicPattern::field_changes(FormKind::Contacts),
        Box::new(on_contacts_field_changed),
    );
    bus.subscribe(Topic::AddressErrorsChanged, Box::new(on_address_errors));
    bus.subscribe(Topic::ContactErrorsChanged, Box::new(on_contact_errors));
    bus.subscribe(Topic::OrderReady, Box::new(on_order_ready));
    bus.subscribe(Topic::OrderSubmitted, Box::new(on_order_submitted));
    bus.subscribe(Topic::ContactsSubmitted, Box::new(on_contacts_submitted));
    bus.subscribe(Topic::OrderPlaced, Box::new(on_order_placed));
    bus.subscribe(Topic::ModalOpened, Box::new(on_modal_opened));
    bus.subscribe(Topic::ModalClosed, Box::new(on_modal_closed));
}

fn unexpected(event: &StoreEvent) -> anyhow::Error {
    anyhow!("unexpected event '{}'", event.name())
}

fn catalog_cards(items: &[Product]) -> Vec<Card> {
    items
        .iter()
        .map(|item| Card::new(CardTemplate::Catalog, item))
        .collect()
}

fn basket_button_label(in_basket: bool) -> &'static str {
    if in_basket {
        REMOVE_FROM_BASKET
    } else {
        ADD_TO_BASKET
    }
}

fn on_items_changed(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::Model(ModelEvent::ItemsChanged { items }) = event else {
        return Err(unexpected(event));
    };
    shop.page.set_catalog(catalog_cards(items));
    Ok(())
}

fn on_card_selected(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::View(ViewEvent::CardSelected { product_id }) = event else {
        return Err(unexpected(event));
    };
    let product = shop
        .catalog
        .find(product_id)
        .cloned()
        .ok_or_else(|| anyhow!("product '{product_id}' is not in the catalog"))?;
    shop.catalog.set_preview(&product);
    Ok(())
}

fn on_preview_changed(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::Model(ModelEvent::PreviewChanged { product }) = event else {
        return Err(unexpected(event));
    };
    let mut card = Card::new(CardTemplate::Preview, product);
    card.set_button(basket_button_label(shop.basket.is_in_basket(product)));
    shop.preview = Some(card);
    shop.redraw.request();
    shop.modal.render(ModalContent::Preview);
    Ok(())
}

fn on_basket_toggle(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::View(ViewEvent::BasketToggleRequested { product_id }) = event else {
        return Err(unexpected(event));
    };
    let product = shop
        .catalog
        .find(product_id)
        .cloned()
        .ok_or_else(|| anyhow!("product '{product_id}' is not in the catalog"))?;
    if !product.is_purchasable() {
        bail!("product '{product_id}' is not for sale");
    }

    if shop.basket.is_in_basket(&product) {
        shop.basket.delete_from_basket(&product);
    } else {
        shop.basket.add_to_basket(&product);
    }

    let label = basket_button_label(shop.basket.is_in_basket(&product));
    if let Some(card) = shop.preview.as_mut().filter(|card| card.id() == product_id) {
        card.set_button(label);
        shop.redraw.request();
    }
    Ok(())
}

fn on_basket_remove(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::View(ViewEvent::BasketItemRemoveRequested { product_id }) = event else {
        return Err(unexpected(event));
    };
    let product = shop
        .basket
        .items()
        .iter()
        .find(|item| &item.id == product_id)
        .cloned()
        .ok_or_else(|| anyhow!("product '{product_id}' is not in the basket"))?;
    shop.basket.delete_from_basket(&product);
    Ok(())
}

fn on_basket_changed(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::Model(ModelEvent::BasketChanged { items, total }) = event else {
        return Err(unexpected(event));
    };
    shop.page.set_counter(items.len());

    let cards = items
        .iter()
        .map(|item| Card::new(CardTemplate::Basket, item))
        .collect();
    shop.basket_view.set_items(cards);
    shop.basket_view.set_indexes();
    shop.basket_view.set_price(*total);

    shop.order.set_total(*total);

    let selected: Vec<_> = items.iter().map(|item| item.id.clone()).collect();
    shop.catalog.sync_selection(&selected);
    shop.page.set_catalog(catalog_cards(shop.catalog.items()));
    Ok(())
}

fn on_basket_opened(shop: &mut Shop, _event: &StoreEvent) -> Result<()> {
    shop.modal.render(ModalContent::Basket);
    Ok(())
}

fn on_order_opened(shop: &mut Shop, _event: &StoreEvent) -> Result<()> {
    shop.order.set_items(shop.basket.item_ids());
    shop.order.set_total(shop.basket.total());

    let draft = shop.order.order().clone();
    shop.order_form.render_from(&draft);
    // Coming back to a half-filled step shows its current status
    if draft.payment.is_some() || !draft.address.is_empty() {
        shop.order.validate_order_address_and_payment();
    }
    shop.modal.render(ModalContent::Order);
    Ok(())
}

fn on_payment_changed(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::View(ViewEvent::PaymentChanged { method }) = event else {
        return Err(unexpected(event));
    };
    shop.order.set_payment(*method);
    Ok(())
}

fn on_order_field_changed(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::View(ViewEvent::FieldChanged { field, value, .. }) = event else {
        return Err(unexpected(event));
    };
    shop.order.set_order_address(*field, value);
    Ok(())
}

fn on_contacts_field_changed(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::View(ViewEvent::FieldChanged { field, value, .. }) = event else {
        return Err(unexpected(event));
    };
    shop.order.set_order_contacts(*field, value);
    Ok(())
}

fn on_address_errors(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::Model(ModelEvent::AddressErrorsChanged { errors }) = event else {
        return Err(unexpected(event));
    };
    shop.order_form.set_valid(errors.is_empty());
    shop.order_form.set_errors(errors.joined(&ORDER_ERROR_FIELDS));
    Ok(())
}

fn on_contact_errors(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::Model(ModelEvent::ContactErrorsChanged { errors }) = event else {
        return Err(unexpected(event));
    };
    shop.contacts_form.set_valid(errors.is_empty());
    shop.contacts_form.set_errors(errors.joined(&CONTACT_ERROR_FIELDS));
    Ok(())
}

fn on_order_ready(_shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::Model(ModelEvent::OrderReady { order }) = event else {
        return Err(unexpected(event));
    };
    tracing::debug!(
        "Order step complete: {} item(s), total {}",
        order.items.len(),
        order.total
    );
    Ok(())
}

fn on_order_submitted(shop: &mut Shop, _event: &StoreEvent) -> Result<()> {
    let draft = shop.order.order().clone();
    shop.contacts_form.render_from(&draft);
    if !draft.email.is_empty() || !draft.phone.is_empty() {
        shop.order.validate_contacts();
    }
    shop.modal.render(ModalContent::Contacts);
    Ok(())
}

fn on_contacts_submitted(shop: &mut Shop, _event: &StoreEvent) -> Result<()> {
    if shop.is_order_in_flight() {
        tracing::debug!("Order already submitted, waiting for the response");
        return Ok(());
    }
    let draft = shop.order.order().clone();
    tracing::info!("Submitting order for {} item(s)", draft.items.len());
    shop.request_order(draft);
    Ok(())
}

fn on_order_placed(shop: &mut Shop, event: &StoreEvent) -> Result<()> {
    let StoreEvent::Model(ModelEvent::OrderPlaced { result }) = event else {
        return Err(unexpected(event));
    };
    shop.success.set_total(result.total);
    shop.modal.render(ModalContent::Success);
    shop.basket.clear_basket();
    shop.order.reset();
    Ok(())
}

fn on_modal_opened(shop: &mut Shop, _event: &StoreEvent) -> Result<()> {
    shop.page.set_locked(true);
    Ok(())
}

fn on_modal_closed(shop: &mut Shop, _event: &StoreEvent) -> Result<()> {
    shop.page.set_locked(false);
    Ok(())
}
