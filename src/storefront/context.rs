//! # Application Context
//!
//! `Shop` owns every model and view of the storefront. Event handlers
//! receive it by `&mut`, so there is exactly one place that holds state and
//! no handler ever needs shared ownership of another component.

use crate::storefront::events::{EventEmitter, FormKind};
use crate::storefront::models::{BasketModel, CatalogModel, OrderDraft, OrderModel};
use crate::storefront::views::{
    BasketView, Card, Fragment, ModalContent, ModalView, OrderFormView, PageView, RedrawFlag,
    SuccessView,
};
use std::collections::VecDeque;

pub struct Shop {
    pub events: EventEmitter,
    pub redraw: RedrawFlag,

    pub catalog: CatalogModel,
    pub basket: BasketModel,
    pub order: OrderModel,

    pub page: PageView,
    pub modal: ModalView,
    pub basket_view: BasketView,
    pub order_form: OrderFormView,
    pub contacts_form: OrderFormView,
    pub success: SuccessView,
    /// Card currently shown in the preview modal
    pub preview: Option<Card>,

    notice: Option<String>,
    pending_orders: VecDeque<OrderDraft>,
    order_in_flight: bool,
    quit_requested: bool,
}

impl Shop {
    /// Build every component around one emitter and one redraw flag
    pub fn new(events: EventEmitter) -> Self {
        let redraw = RedrawFlag::new();
        Self {
            catalog: CatalogModel::new(events.clone()),
            basket: BasketModel::new(events.clone()),
            order: OrderModel::new(events.clone()),
            page: PageView::new(events.clone(), redraw.clone()),
            modal: ModalView::new(events.clone(), redraw.clone()),
            basket_view: BasketView::new(events.clone(), redraw.clone()),
            order_form: OrderFormView::new(FormKind::Order, events.clone(), redraw.clone()),
            contacts_form: OrderFormView::new(FormKind::Contacts, events.clone(), redraw.clone()),
            success: SuccessView::new(redraw.clone()),
            preview: None,
            notice: None,
            pending_orders: VecDeque::new(),
            order_in_flight: false,
            quit_requested: false,
            events,
            redraw,
        }
    }

    pub fn form(&self, kind: FormKind) -> &OrderFormView {
        match kind {
            FormKind::Order => &self.order_form,
            FormKind::Contacts => &self.contacts_form,
        }
    }

    pub fn form_mut(&mut self, kind: FormKind) -> &mut OrderFormView {
        match kind {
            FormKind::Order => &mut self.order_form,
            FormKind::Contacts => &mut self.contacts_form,
        }
    }

    /// Fragment of whatever the modal currently shows
    pub fn modal_fragment(&self) -> Option<Fragment> {
        let fragment = match self.modal.content()? {
            ModalContent::Preview => self.preview.as_ref()?.render(false),
            ModalContent::Basket => self.basket_view.render(),
            ModalContent::Order => self.order_form.render(),
            ModalContent::Contacts => self.contacts_form.render(),
            ModalContent::Success => self.success.render(),
        };
        Some(fragment)
    }

    /// One-line status message shown under the page, e.g. a failed request
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: Option<String>) {
        if self.notice != notice {
            self.notice = notice;
            self.redraw.request();
        }
    }

    /// Queue an order for submission by the controller; it stays in flight
    /// until `finish_order`
    pub fn request_order(&mut self, draft: OrderDraft) {
        self.order_in_flight = true;
        self.pending_orders.push_back(draft);
    }

    pub fn is_order_in_flight(&self) -> bool {
        self.order_in_flight
    }

    /// The order response arrived, successful or not
    pub fn finish_order(&mut self) {
        self.order_in_flight = false;
    }

    pub fn take_pending_order(&mut self) -> Option<OrderDraft> {
        self.pending_orders.pop_front()
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }
}
