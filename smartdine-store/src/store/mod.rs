//! DineStore - Domain collections and the occupancy rules binding them
//!
//! Four independently persisted collections (menu, tables, orders,
//! reservations), hydrated once at startup, plus the operations that
//! keep orders and tables consistent with each other.
//!
//! # Mutation Flow
//!
//! ```text
//! place_order(table_id, cart)
//!     ├─ 1. Reject empty cart, unknown table, occupied table
//!     ├─ 2. Validate cart lines (price, quantity)
//!     ├─ 3. Build order: fresh id, denormalized table name, frozen total
//!     ├─ 4. Replace orders and tables in memory: appended, occupied
//!     ├─ 5. Write both collections, returning the first failure
//!     └─ 6. Return the new order
//! ```
//!
//! Every mutator computes a full new collection value and hands it to
//! the backing cell; nothing edits a collection in place. Operations
//! touching two collections update memory for both, attempt both
//! durable writes, and report the first failure.

mod error;
pub use error::*;

use std::path::Path;

use shared::models::{
    DiningTable, MenuItem, MenuItemCreate, MenuItemUpdate, Order, OrderStatus, Reservation,
    ReservationCreate, ReservationStatus, TableStatus,
};
use shared::util;

use crate::cart::Cart;
use crate::cell::StateCell;
use crate::money;
use crate::storage::StateStorage;
use crate::validation;

/// Storage key for the menu collection.
const MENU_KEY: &str = "SMARTDINE_MENU";
/// Storage key for the tables collection.
const TABLES_KEY: &str = "SMARTDINE_TABLES";
/// Storage key for the orders collection.
const ORDERS_KEY: &str = "SMARTDINE_ORDERS";
/// Storage key for the reservations collection.
const RESERVATIONS_KEY: &str = "SMARTDINE_RESERVATIONS";

/// First-run menu.
fn default_menu() -> Vec<MenuItem> {
    [
        ("Margherita Pizza", "Main", 9.99),
        ("Caesar Salad", "Starter", 6.50),
        ("Grilled Salmon", "Main", 14.25),
        ("Chocolate Lava Cake", "Dessert", 5.75),
        ("Fresh Lemonade", "Beverage", 3.00),
    ]
    .into_iter()
    .map(|(name, category, price)| MenuItem {
        id: util::new_entity_id(),
        name: name.to_string(),
        category: category.to_string(),
        price,
    })
    .collect()
}

/// First-run tables: T-1 through T-10, four seats on the first six,
/// six seats on the rest, all available.
fn default_tables() -> Vec<DiningTable> {
    (1..=10)
        .map(|id| DiningTable {
            id,
            name: format!("T-{id}"),
            capacity: if id <= 6 { 4 } else { 6 },
            status: TableStatus::Available,
            current_order_id: None,
        })
        .collect()
}

/// Owner of the four persistent collections.
///
/// Constructed once at process start and passed by reference to every
/// consumer; there is no ambient singleton. All mutation goes through
/// the methods here, so the occupancy rules cannot be bypassed.
pub struct DineStore {
    menu: StateCell<Vec<MenuItem>>,
    tables: StateCell<Vec<DiningTable>>,
    orders: StateCell<Vec<Order>>,
    reservations: StateCell<Vec<Reservation>>,
}

impl DineStore {
    /// Opens the store at the given database path, seeding any
    /// collection that has never been written.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let storage = StateStorage::open(path)?;
        Self::with_storage(storage)
    }

    /// Create a store on an in-memory database (for testing)
    #[cfg(test)]
    pub(crate) fn open_in_memory() -> StoreResult<Self> {
        Self::with_storage(StateStorage::open_in_memory()?)
    }

    fn with_storage(storage: StateStorage) -> StoreResult<Self> {
        let menu = StateCell::load(&storage, MENU_KEY, default_menu())?;
        let tables = StateCell::load(&storage, TABLES_KEY, default_tables())?;
        let orders = StateCell::load(&storage, ORDERS_KEY, Vec::new())?;
        let reservations = StateCell::load(&storage, RESERVATIONS_KEY, Vec::new())?;
        tracing::info!(
            menu_items = menu.get().len(),
            tables = tables.get().len(),
            orders = orders.get().len(),
            reservations = reservations.get().len(),
            "Store hydrated"
        );
        Ok(Self {
            menu,
            tables,
            orders,
            reservations,
        })
    }

    // ========== Collections ==========

    pub fn menu(&self) -> &[MenuItem] {
        self.menu.get()
    }

    pub fn tables(&self) -> &[DiningTable] {
        self.tables.get()
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.get()
    }

    pub fn reservations(&self) -> &[Reservation] {
        self.reservations.get()
    }

    // ========== Replace Mutators ==========
    //
    // The raw contract: each collection accepts a full replacement
    // value. The higher-level operations below are all built on these.

    pub fn set_menu(&mut self, menu: Vec<MenuItem>) -> StoreResult<()> {
        self.menu.set(menu)?;
        Ok(())
    }

    pub fn set_tables(&mut self, tables: Vec<DiningTable>) -> StoreResult<()> {
        self.tables.set(tables)?;
        Ok(())
    }

    pub fn set_orders(&mut self, orders: Vec<Order>) -> StoreResult<()> {
        self.orders.set(orders)?;
        Ok(())
    }

    pub fn set_reservations(&mut self, reservations: Vec<Reservation>) -> StoreResult<()> {
        self.reservations.set(reservations)?;
        Ok(())
    }

    // ========== Queries ==========

    pub fn menu_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu.get().iter().find(|item| item.id == item_id)
    }

    pub fn table(&self, table_id: i64) -> Option<&DiningTable> {
        self.tables.get().iter().find(|table| table.id == table_id)
    }

    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.get().iter().find(|order| order.id == order_id)
    }

    // ========== Menu Management ==========

    /// Adds a menu item with a fresh id. Text fields are stored trimmed.
    pub fn add_menu_item(&mut self, create: MenuItemCreate) -> StoreResult<MenuItem> {
        validation::validate_required_text(&create.name, "name", validation::MAX_NAME_LEN)?;
        validation::validate_required_text(
            &create.category,
            "category",
            validation::MAX_CATEGORY_LEN,
        )?;
        money::validate_price(create.price)?;

        let item = MenuItem {
            id: util::new_entity_id(),
            name: create.name.trim().to_string(),
            category: create.category.trim().to_string(),
            price: create.price,
        };
        let mut menu = self.menu.get().clone();
        menu.push(item.clone());
        self.menu.set(menu)?;
        tracing::debug!(item_id = %item.id, name = %item.name, "Menu item added");
        Ok(item)
    }

    /// Replaces every field of an existing menu item.
    ///
    /// Orders already placed keep their denormalized copies; nothing
    /// here reaches into history.
    pub fn update_menu_item(
        &mut self,
        item_id: &str,
        update: MenuItemUpdate,
    ) -> StoreResult<MenuItem> {
        validation::validate_required_text(&update.name, "name", validation::MAX_NAME_LEN)?;
        validation::validate_required_text(
            &update.category,
            "category",
            validation::MAX_CATEGORY_LEN,
        )?;
        money::validate_price(update.price)?;

        let mut menu = self.menu.get().clone();
        let Some(item) = menu.iter_mut().find(|item| item.id == item_id) else {
            return Err(StoreError::MenuItemNotFound(item_id.to_string()));
        };
        item.name = update.name.trim().to_string();
        item.category = update.category.trim().to_string();
        item.price = update.price;
        let updated = item.clone();
        self.menu.set(menu)?;
        Ok(updated)
    }

    pub fn remove_menu_item(&mut self, item_id: &str) -> StoreResult<()> {
        let mut menu = self.menu.get().clone();
        let before = menu.len();
        menu.retain(|item| item.id != item_id);
        if menu.len() == before {
            return Err(StoreError::MenuItemNotFound(item_id.to_string()));
        }
        self.menu.set(menu)?;
        tracing::debug!(item_id, "Menu item removed");
        Ok(())
    }

    // ========== Reservations ==========

    /// Adds a reservation with a fresh id and status upcoming.
    pub fn add_reservation(&mut self, create: ReservationCreate) -> StoreResult<Reservation> {
        validation::validate_required_text(&create.customer, "customer", validation::MAX_NAME_LEN)?;
        validation::validate_party_size(create.party_size)?;

        let reservation = Reservation {
            id: util::new_entity_id(),
            customer: create.customer.trim().to_string(),
            when: create.when,
            party_size: create.party_size,
            status: ReservationStatus::Upcoming,
        };
        let mut reservations = self.reservations.get().clone();
        reservations.push(reservation.clone());
        self.reservations.set(reservations)?;
        tracing::debug!(reservation_id = %reservation.id, "Reservation added");
        Ok(reservation)
    }

    pub fn remove_reservation(&mut self, reservation_id: &str) -> StoreResult<()> {
        let mut reservations = self.reservations.get().clone();
        let before = reservations.len();
        reservations.retain(|reservation| reservation.id != reservation_id);
        if reservations.len() == before {
            return Err(StoreError::ReservationNotFound(reservation_id.to_string()));
        }
        self.reservations.set(reservations)?;
        tracing::debug!(reservation_id, "Reservation removed");
        Ok(())
    }

    // ========== Order/Table Consistency ==========

    /// Places the cart as a new order on `table_id`.
    ///
    /// The order is appended and the table is marked occupied, pointing
    /// at the new order id. Both halves of that pair always land in
    /// memory; the backing writes are separate durable updates, both
    /// attempted even when the first fails, with the first error
    /// returned. A failed write costs durability of its key until that
    /// key's next successful write, not in-memory consistency. The
    /// caller owns the cart and clears it after success.
    pub fn place_order(&mut self, table_id: i64, cart: &Cart) -> StoreResult<Order> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        let table = self
            .tables
            .get()
            .iter()
            .find(|table| table.id == table_id)
            .ok_or(StoreError::TableNotFound(table_id))?;
        if !table.is_available() {
            return Err(StoreError::TableOccupied(table_id));
        }
        let table_name = table.name.clone();

        for line in cart.lines() {
            money::validate_price(line.price)?;
            money::validate_quantity(line.qty)?;
        }

        let order = Order {
            id: util::new_entity_id(),
            table_id,
            table_name,
            items: cart.order_items(),
            total: cart.total(),
            status: OrderStatus::Pending,
            created_at: util::now_millis(),
        };

        let mut orders = self.orders.get().clone();
        orders.push(order.clone());
        let mut tables = self.tables.get().clone();
        if let Some(table) = tables.iter_mut().find(|table| table.id == table_id) {
            table.status = TableStatus::Occupied;
            table.current_order_id = Some(order.id.clone());
        }

        // Attempt both writes before reporting the first error; the
        // order and its occupancy stay paired in memory.
        let orders_write = self.orders.set(orders);
        let tables_write = self.tables.set(tables);
        orders_write?;
        tables_write?;

        tracing::info!(
            order_id = %order.id,
            table_id,
            total = order.total,
            item_count = order.items.len(),
            "Order placed"
        );
        Ok(order)
    }

    /// Sets an order's status.
    ///
    /// Transitioning into [`OrderStatus::Paid`] also releases the
    /// order's table; this is the only path that returns a table to
    /// availability after placement. Any other target leaves tables
    /// untouched, and moving an already paid order does not release or
    /// re-occupy anything. The status and the release land in memory
    /// together even when a durable write fails; the first write error
    /// is returned.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) -> StoreResult<()> {
        let mut orders = self.orders.get().clone();
        let Some(order) = orders.iter_mut().find(|order| order.id == order_id) else {
            return Err(StoreError::OrderNotFound(order_id.to_string()));
        };
        let was_paid = order.status == OrderStatus::Paid;
        order.status = status;
        let table_id = order.table_id;
        let releases_table = status == OrderStatus::Paid && !was_paid;

        // Attempt both writes before reporting the first error; the
        // paid status and the release stay paired in memory.
        let orders_write = self.orders.set(orders);
        let tables_write = if releases_table {
            let mut tables = self.tables.get().clone();
            if let Some(table) = tables.iter_mut().find(|table| table.id == table_id) {
                table.status = TableStatus::Available;
                table.current_order_id = None;
            }
            tracing::info!(order_id, table_id, "Order paid, table released");
            self.tables.set(tables)
        } else {
            Ok(())
        };
        orders_write?;
        tables_write?;
        Ok(())
    }

    /// Manually forces a table's status, independent of any order.
    ///
    /// Forcing to available always clears `current_order_id`. Forcing
    /// to occupied neither creates nor requires an order and keeps
    /// whatever id is already present.
    pub fn set_table_status(&mut self, table_id: i64, status: TableStatus) -> StoreResult<()> {
        let mut tables = self.tables.get().clone();
        let Some(table) = tables.iter_mut().find(|table| table.id == table_id) else {
            return Err(StoreError::TableNotFound(table_id));
        };
        table.status = status;
        if status == TableStatus::Available {
            table.current_order_id = None;
        }
        self.tables.set(tables)?;
        tracing::debug!(table_id, status = ?status, "Table status overridden");
        Ok(())
    }
}
