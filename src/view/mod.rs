//! View model for the lookup widget.
//!
//! [`Screen`] is the single page-wide model the renderers write into and the
//! terminal UI draws from. It has two mutually exclusive regions: the order
//! summary ([`OrderPanel`]) and the not-found transcript ([`NotFoundPanel`]).
//! Every value is stored as plain text; nothing in here is ever interpreted
//! as markup.

pub mod date;
pub mod not_found;
pub mod order_info;
pub mod plain;

use std::collections::BTreeMap;

use crate::models::Item;

pub use not_found::{NOT_FOUND_MESSAGE, render_not_found};
pub use order_info::render_order;

/// Which region is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing looked up yet; both regions hidden.
    #[default]
    Idle,
    ShowingOrder,
    ShowingNotFound,
}

impl ViewState {
    /// Returns a display string for the state.
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "Idle",
            ViewState::ShowingOrder => "Order",
            ViewState::ShowingNotFound => "Not found",
        }
    }
}

/// The whole widget: view state plus both regions.
///
/// A hidden region keeps whatever it last held; only the visible one is
/// meaningful.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Screen {
    state: ViewState,
    pub order: OrderPanel,
    pub not_found: NotFoundPanel,
}

impl Screen {
    /// Creates an idle screen with empty regions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn order_visible(&self) -> bool {
        self.state == ViewState::ShowingOrder
    }

    pub fn not_found_visible(&self) -> bool {
        self.state == ViewState::ShowingNotFound
    }

    pub(crate) fn show(&mut self, state: ViewState) {
        self.state = state;
    }
}

/// Groups of order fields, drawn as separate boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Order,
    Delivery,
    Payment,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Order, Section::Delivery, Section::Payment];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Order => "Order",
            Section::Delivery => "Delivery",
            Section::Payment => "Payment",
        }
    }

    /// Fields of this section in display order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Section::Order => &[
                Field::OrderUid,
                Field::TrackNumber,
                Field::CreationDate,
                Field::Locale,
                Field::DeliveryService,
                Field::InternalSignature,
            ],
            Section::Delivery => &[
                Field::ReceiverName,
                Field::PhoneNumber,
                Field::City,
                Field::Address,
                Field::Email,
            ],
            Section::Payment => &[
                Field::Transaction,
                Field::Currency,
                Field::Amount,
                Field::DeliveryCost,
                Field::GoodsTotal,
                Field::CustomFee,
                Field::Bank,
            ],
        }
    }
}

/// Individually addressable scalar fields of the order summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    OrderUid,
    TrackNumber,
    CreationDate,
    Locale,
    DeliveryService,
    InternalSignature,
    ReceiverName,
    PhoneNumber,
    City,
    Address,
    Email,
    Transaction,
    Currency,
    Amount,
    DeliveryCost,
    GoodsTotal,
    CustomFee,
    Bank,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::OrderUid => "Order UID",
            Field::TrackNumber => "Track number",
            Field::CreationDate => "Created",
            Field::Locale => "Locale",
            Field::DeliveryService => "Delivery service",
            Field::InternalSignature => "Internal signature",
            Field::ReceiverName => "Receiver",
            Field::PhoneNumber => "Phone",
            Field::City => "City",
            Field::Address => "Address",
            Field::Email => "Email",
            Field::Transaction => "Transaction",
            Field::Currency => "Currency",
            Field::Amount => "Amount",
            Field::DeliveryCost => "Delivery cost",
            Field::GoodsTotal => "Goods total",
            Field::CustomFee => "Custom fee",
            Field::Bank => "Bank",
        }
    }
}

/// Column headers of the item table, in cell order.
pub const ITEM_COLUMNS: [&str; 5] = ["Name", "Brand", "Total price", "Size", "Status"];

/// One row of the item table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemRow {
    pub name: String,
    pub brand: String,
    pub total_price: String,
    pub size: String,
    pub status: String,
}

impl ItemRow {
    /// Cells in [`ITEM_COLUMNS`] order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.name,
            &self.brand,
            &self.total_price,
            &self.size,
            &self.status,
        ]
    }
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.to_string(),
            brand: item.brand.to_string(),
            total_price: item.total_price.to_string(),
            size: item.size.to_string(),
            status: item.status.to_string(),
        }
    }
}

/// The order summary region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderPanel {
    fields: BTreeMap<Field, String>,
    /// Item-count label.
    pub items_amount: String,
    /// Item table body, in document order.
    pub items: Vec<ItemRow>,
}

impl OrderPanel {
    /// Returns the text of `field`, or `""` if it was never set.
    pub fn field(&self, field: Field) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub(crate) fn set_field(&mut self, field: Field, text: impl Into<String>) {
        self.fields.insert(field, text.into());
    }
}

/// The "not found" region: a status label and the scripted transcript.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotFoundPanel {
    pub label: String,
    pub transcript: Vec<TerminalBlock>,
}

/// One appended block of the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalBlock {
    Line(Vec<Segment>),
    /// Blank separator appended after every line.
    Spacer,
}

impl TerminalBlock {
    /// Concatenated text of the block; empty for a spacer.
    pub fn text(&self) -> String {
        match self {
            TerminalBlock::Line(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
            TerminalBlock::Spacer => String::new(),
        }
    }
}

/// A run of transcript text sharing one tone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }
}

/// Highlight colour class of a transcript segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Error,
}
