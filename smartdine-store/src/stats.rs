//! Dashboard statistics
//!
//! Pure projections over store state, recomputed on every call. At this
//! scale nothing is cached or invalidated; callers pass the current
//! collections and get owned or borrowed views back.

use serde::Serialize;
use shared::models::{DiningTable, MenuItem, Order, Reservation, ReservationStatus, TableStatus};

/// Number of orders shown in the recent list.
const RECENT_ORDER_COUNT: usize = 5;

/// Dashboard overview counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub menu_items: usize,
    pub occupied_tables: usize,
    pub available_tables: usize,
    pub active_orders: usize,
    pub upcoming_reservations: usize,
}

/// Computes the dashboard counters. Active means any order whose status
/// is not yet terminal.
pub fn dashboard_stats(
    menu: &[MenuItem],
    tables: &[DiningTable],
    orders: &[Order],
    reservations: &[Reservation],
) -> DashboardStats {
    DashboardStats {
        menu_items: menu.len(),
        occupied_tables: tables
            .iter()
            .filter(|table| table.status == TableStatus::Occupied)
            .count(),
        available_tables: tables
            .iter()
            .filter(|table| table.status == TableStatus::Available)
            .count(),
        active_orders: orders
            .iter()
            .filter(|order| !order.status.is_terminal())
            .count(),
        upcoming_reservations: reservations
            .iter()
            .filter(|reservation| reservation.status == ReservationStatus::Upcoming)
            .count(),
    }
}

/// Most recent orders, newest first, capped at five. Orders sharing a
/// timestamp keep their insertion order.
pub fn recent_orders(orders: &[Order]) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(RECENT_ORDER_COUNT);
    sorted
}

/// Reservations ordered by time, soonest first.
pub fn reservations_by_time(reservations: &[Reservation]) -> Vec<&Reservation> {
    let mut sorted: Vec<&Reservation> = reservations.iter().collect();
    sorted.sort_by(|a, b| a.when.cmp(&b.when));
    sorted
}
