//! Records shown in the admin and manager dashboards.

use crate::query::Listable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyStatus {
    Active,
    Pending,
    Inactive,
}

impl PropertyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::Active => "Active",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Inactive => "Inactive",
        }
    }
}

/// Property listing managed from the admin console
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub city: String,
    pub area: String,
    pub property_type: String,
    pub status: PropertyStatus,
    pub price: f64,
    pub rating: f64,
    pub amenities: Vec<String>,
    pub listed_on: NaiveDate,
}

impl Listable for Property {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self, attribute: &str) -> Option<&str> {
        match attribute {
            "city" => Some(&self.city),
            "area" => Some(&self.area),
            "type" => Some(&self.property_type),
            "status" => Some(self.status.as_str()),
            "name" => Some(&self.name),
            _ => None,
        }
    }

    fn tags(&self, attribute: &str) -> Option<&[String]> {
        (attribute == "amenities").then_some(self.amenities.as_slice())
    }

    fn numeric(&self, attribute: &str) -> Option<f64> {
        match attribute {
            "price" => Some(self.price),
            "rating" => Some(self.rating),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }
}

/// Reservation of a workspace by a customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub customer: String,
    pub workspace: String,
    pub workspace_type: String,
    pub city: String,
    pub status: BookingStatus,
    pub amount: f64,
    pub seats: u32,
    pub date: NaiveDate,
}

impl Listable for Booking {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self, attribute: &str) -> Option<&str> {
        match attribute {
            "city" => Some(&self.city),
            "type" => Some(&self.workspace_type),
            "status" => Some(self.status.as_str()),
            "customer" => Some(&self.customer),
            "workspace" => Some(&self.workspace),
            _ => None,
        }
    }

    fn tags(&self, _attribute: &str) -> Option<&[String]> {
        None
    }

    fn numeric(&self, attribute: &str) -> Option<f64> {
        match attribute {
            // price sorts on the booked amount
            "price" | "amount" => Some(self.amount),
            "seats" | "capacity" => Some(f64::from(self.seats)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub customer: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Listable for Payment {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self, attribute: &str) -> Option<&str> {
        match attribute {
            "status" => Some(self.status.as_str()),
            "method" => Some(self.method.as_str()),
            "customer" => Some(&self.customer),
            "booking" => Some(&self.booking_id),
            _ => None,
        }
    }

    fn tags(&self, _attribute: &str) -> Option<&[String]> {
        None
    }

    fn numeric(&self, attribute: &str) -> Option<f64> {
        match attribute {
            "price" | "amount" => Some(self.amount),
            _ => None,
        }
    }
}

/// Space manager account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manager {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub active: bool,
    pub properties: u32,
    pub rating: f64,
}

impl Listable for Manager {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self, attribute: &str) -> Option<&str> {
        match attribute {
            "city" => Some(&self.city),
            "status" => Some(if self.active { "Active" } else { "Inactive" }),
            "name" => Some(&self.name),
            _ => None,
        }
    }

    fn tags(&self, _attribute: &str) -> Option<&[String]> {
        None
    }

    fn numeric(&self, attribute: &str) -> Option<f64> {
        match attribute {
            "properties" => Some(f64::from(self.properties)),
            "rating" => Some(self.rating),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::{sample_bookings, sample_managers, sample_payments};
    use crate::query::{run, ListingKind, QueryParams, SortKey};

    #[test]
    fn test_bookings_filter_by_status_and_sort_by_amount() {
        let bookings = sample_bookings();
        let params = QueryParams::for_listing(ListingKind::Bookings)
            .with_equality("status", "Confirmed")
            .with_sort(SortKey::PriceHigh);
        let page = run(&bookings, &params);

        let ids: Vec<&str> = page.items.iter().map(|booking| booking.id.as_str()).collect();
        assert_eq!(ids, vec!["bk-009", "bk-006", "bk-001", "bk-004", "bk-010"]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_dashboard_tables_page_by_ten() {
        let bookings = sample_bookings();
        let params = QueryParams::for_listing(ListingKind::Bookings).with_page(2);
        let page = run(&bookings, &params);
        assert_eq!(page.total_count, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_payment_method_filter() {
        let payments = sample_payments();
        let params = QueryParams::new(10).with_one_of("method", ["UPI", "Bank Transfer"]);
        assert_eq!(run(&payments, &params).total_count, 5);
    }

    #[test]
    fn test_manager_status_is_derived() {
        let managers = sample_managers();
        let params = QueryParams::new(10).with_equality("status", "Inactive");
        let page = run(&managers, &params);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Farah Khan");
    }
}
