//! Hardcoded datasets the listing pages run on until the backend exists.

use crate::models::{
    Badge, Booking, BookingStatus, Location, Manager, Payment, PaymentMethod, PaymentStatus, Property,
    PropertyStatus, Workspace, WorkspaceKind,
};
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn workspace(
    id: &str,
    name: &str,
    city: &str,
    area: &str,
    kind: WorkspaceKind,
    price: f64,
    rating: f64,
    reviews: u32,
    badge: Option<Badge>,
    amenities: &[&str],
    images: Option<Vec<String>>,
) -> Workspace {
    Workspace {
        id: id.to_string(),
        name: name.to_string(),
        location: Location {
            city: city.to_string(),
            area: area.to_string(),
            address: format!("{}, {}", area, city),
        },
        description: format!("{} in {}, {}.", kind.label(), area, city),
        kind,
        price,
        rating,
        reviews,
        amenities: amenities.iter().map(|amenity| amenity.to_string()).collect(),
        badge,
        images,
    }
}

fn gallery(id: &str, count: usize) -> Option<Vec<String>> {
    Some((1..=count).map(|n| format!("/images/{}/{}.jpg", id, n)).collect())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Twelve Bangalore workspaces (nine of them coworking) and three in Mumbai
pub fn sample_workspaces() -> Vec<Workspace> {
    use Badge::{Featured, Popular, SpecialOffer};

    vec![
        workspace(
            "ws-blr-01", "Koramangala Hub", "Bangalore", "Koramangala",
            WorkspaceKind::Coworking { seats: 80 },
            350.0, 4.6, 214, Some(Featured),
            &["High-Speed WiFi", "Parking", "Cafeteria", "Meeting Rooms"],
            gallery("ws-blr-01", 3),
        ),
        workspace(
            "ws-blr-02", "HSR Collective", "Bangalore", "HSR Layout",
            WorkspaceKind::Coworking { seats: 40 },
            300.0, 4.3, 96, None,
            &["High-Speed WiFi", "Air Conditioning"],
            None,
        ),
        workspace(
            "ws-blr-03", "Indiranagar Loft", "Bangalore", "Indiranagar",
            WorkspaceKind::Coworking { seats: 60 },
            500.0, 4.8, 301, Some(Popular),
            &["High-Speed WiFi", "Parking", "Air Conditioning", "24/7 Access"],
            gallery("ws-blr-03", 4),
        ),
        workspace(
            "ws-blr-04", "Whitefield Tech Desks", "Bangalore", "Whitefield",
            WorkspaceKind::Coworking { seats: 120 },
            450.0, 4.3, 158, Some(SpecialOffer),
            &["High-Speed WiFi", "Parking", "Cafeteria"],
            gallery("ws-blr-04", 2),
        ),
        workspace(
            "ws-blr-05", "MG Road Commons", "Bangalore", "MG Road",
            WorkspaceKind::Coworking { seats: 90 },
            700.0, 4.7, 240, Some(Featured),
            &["High-Speed WiFi", "Reception", "Printing", "Air Conditioning"],
            gallery("ws-blr-05", 5),
        ),
        workspace(
            "ws-blr-06", "Koramangala Nest", "Bangalore", "Koramangala",
            WorkspaceKind::Coworking { seats: 25 },
            250.0, 4.1, 41, None,
            &["High-Speed WiFi"],
            Some(Vec::new()),
        ),
        workspace(
            "ws-blr-07", "HSR Startup Bay", "Bangalore", "HSR Layout",
            WorkspaceKind::Coworking { seats: 55 },
            399.0, 4.3, 87, None,
            &["High-Speed WiFi", "Parking", "Printing"],
            gallery("ws-blr-07", 2),
        ),
        workspace(
            "ws-blr-08", "Indiranagar Studio", "Bangalore", "Indiranagar",
            WorkspaceKind::Coworking { seats: 35 },
            550.0, 4.5, 132, Some(Popular),
            &["High-Speed WiFi", "Cafeteria", "Air Conditioning"],
            gallery("ws-blr-08", 3),
        ),
        workspace(
            "ws-blr-09", "Whitefield Workhouse", "Bangalore", "Whitefield",
            WorkspaceKind::Coworking { seats: 70 },
            300.0, 4.4, 118, Some(SpecialOffer),
            &["High-Speed WiFi", "Parking", "24/7 Access"],
            None,
        ),
        workspace(
            "ws-blr-10", "Boardroom One", "Bangalore", "Koramangala",
            WorkspaceKind::MeetingRoom { capacity: 12 },
            800.0, 4.6, 64, Some(Popular),
            &["High-Speed WiFi", "Air Conditioning", "Reception"],
            gallery("ws-blr-10", 2),
        ),
        workspace(
            "ws-blr-11", "Cabin Suites", "Bangalore", "Indiranagar",
            WorkspaceKind::PrivateOffice { cabins: 4, furnished: true },
            1500.0, 4.9, 52, Some(Featured),
            &["High-Speed WiFi", "Parking", "Air Conditioning", "Reception", "24/7 Access"],
            gallery("ws-blr-11", 4),
        ),
        workspace(
            "ws-blr-12", "Registered Address Plus", "Bangalore", "MG Road",
            WorkspaceKind::VirtualOffice {
                services: vec![
                    "Business Address".to_string(),
                    "Mail Handling".to_string(),
                    "GST Registration".to_string(),
                ],
            },
            999.0, 4.2, 77, None,
            &["Reception"],
            None,
        ),
        workspace(
            "ws-bom-01", "Bandra Social Desk", "Mumbai", "Bandra",
            WorkspaceKind::Coworking { seats: 65 },
            650.0, 4.5, 190, Some(Popular),
            &["High-Speed WiFi", "Cafeteria", "Air Conditioning"],
            gallery("ws-bom-01", 3),
        ),
        workspace(
            "ws-bom-02", "Lower Parel Board Room", "Mumbai", "Lower Parel",
            WorkspaceKind::MeetingRoom { capacity: 20 },
            1200.0, 4.7, 45, Some(Featured),
            &["High-Speed WiFi", "Reception", "Printing"],
            None,
        ),
        workspace(
            "ws-bom-03", "Andheri Private Cabins", "Mumbai", "Andheri",
            WorkspaceKind::PrivateOffice { cabins: 2, furnished: false },
            900.0, 4.0, 23, None,
            &["High-Speed WiFi", "Parking"],
            None,
        ),
    ]
}

pub fn sample_properties() -> Vec<Property> {
    let property = |id: &str, name: &str, city: &str, area: &str, kind: &str, status, price, rating, amenities: &[&str], listed_on| Property {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        area: area.to_string(),
        property_type: kind.to_string(),
        status,
        price,
        rating,
        amenities: amenities.iter().map(|amenity| amenity.to_string()).collect(),
        listed_on,
    };

    vec![
        property("prop-01", "Koramangala Hub", "Bangalore", "Koramangala", "Coworking", PropertyStatus::Active, 350.0, 4.6, &["High-Speed WiFi", "Parking"], date(2024, 1, 12)),
        property("prop-02", "Boardroom One", "Bangalore", "Koramangala", "Meeting Room", PropertyStatus::Active, 800.0, 4.6, &["High-Speed WiFi"], date(2024, 2, 3)),
        property("prop-03", "Cabin Suites", "Bangalore", "Indiranagar", "Private Office", PropertyStatus::Pending, 1500.0, 4.9, &["Parking", "Reception"], date(2024, 2, 20)),
        property("prop-04", "Bandra Social Desk", "Mumbai", "Bandra", "Coworking", PropertyStatus::Active, 650.0, 4.5, &["High-Speed WiFi", "Cafeteria"], date(2024, 3, 8)),
        property("prop-05", "Andheri Private Cabins", "Mumbai", "Andheri", "Private Office", PropertyStatus::Inactive, 900.0, 4.0, &["Parking"], date(2024, 3, 15)),
        property("prop-06", "Registered Address Plus", "Bangalore", "MG Road", "Virtual Office", PropertyStatus::Active, 999.0, 4.2, &["Reception"], date(2024, 4, 1)),
    ]
}

pub fn sample_bookings() -> Vec<Booking> {
    let booking = |n: u32, customer: &str, workspace: &str, kind: &str, city: &str, status, amount, seats| Booking {
        id: format!("bk-{:03}", n),
        customer: customer.to_string(),
        workspace: workspace.to_string(),
        workspace_type: kind.to_string(),
        city: city.to_string(),
        status,
        amount,
        seats,
        date: date(2024, 5, n),
    };

    use BookingStatus::{Cancelled, Completed, Confirmed, Pending};
    vec![
        booking(1, "Asha Rao", "Koramangala Hub", "Coworking", "Bangalore", Confirmed, 1750.0, 5),
        booking(2, "Vikram Shah", "Boardroom One", "Meeting Room", "Bangalore", Completed, 3200.0, 12),
        booking(3, "Meera Iyer", "Cabin Suites", "Private Office", "Bangalore", Pending, 24000.0, 16),
        booking(4, "Rahul Nair", "Bandra Social Desk", "Coworking", "Mumbai", Confirmed, 1300.0, 2),
        booking(5, "Sneha Kulkarni", "HSR Collective", "Coworking", "Bangalore", Cancelled, 600.0, 2),
        booking(6, "Arjun Mehta", "Lower Parel Board Room", "Meeting Room", "Mumbai", Confirmed, 4800.0, 20),
        booking(7, "Kavya Reddy", "Registered Address Plus", "Virtual Office", "Bangalore", Completed, 999.0, 1),
        booking(8, "Asha Rao", "Indiranagar Loft", "Coworking", "Bangalore", Pending, 2500.0, 5),
        booking(9, "Dev Patel", "Andheri Private Cabins", "Private Office", "Mumbai", Confirmed, 7200.0, 8),
        booking(10, "Nisha Gupta", "Whitefield Workhouse", "Coworking", "Bangalore", Confirmed, 900.0, 3),
        booking(11, "Vikram Shah", "MG Road Commons", "Coworking", "Bangalore", Completed, 2100.0, 3),
        booking(12, "Meera Iyer", "Boardroom One", "Meeting Room", "Bangalore", Cancelled, 1600.0, 6),
    ]
}

pub fn sample_payments() -> Vec<Payment> {
    let payment = |n: u32, booking: u32, customer: &str, method, status, amount| Payment {
        id: format!("pay-{:03}", n),
        booking_id: format!("bk-{:03}", booking),
        customer: customer.to_string(),
        method,
        status,
        amount,
        date: date(2024, 5, booking),
    };

    use PaymentMethod::{BankTransfer, Card, Upi};
    use PaymentStatus::{Failed, Paid, Pending, Refunded};
    vec![
        payment(1, 1, "Asha Rao", Upi, Paid, 1750.0),
        payment(2, 2, "Vikram Shah", Card, Paid, 3200.0),
        payment(3, 3, "Meera Iyer", BankTransfer, Pending, 24000.0),
        payment(4, 4, "Rahul Nair", Upi, Paid, 1300.0),
        payment(5, 5, "Sneha Kulkarni", Card, Refunded, 600.0),
        payment(6, 6, "Arjun Mehta", Card, Failed, 4800.0),
        payment(7, 7, "Kavya Reddy", Upi, Paid, 999.0),
        payment(8, 9, "Dev Patel", BankTransfer, Paid, 7200.0),
    ]
}

pub fn sample_managers() -> Vec<Manager> {
    let manager = |id: &str, name: &str, city: &str, active, properties, rating| Manager {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@workspace-market.in", name.to_lowercase().replace(' ', ".")),
        city: city.to_string(),
        active,
        properties,
        rating,
    };

    vec![
        manager("mgr-01", "Priya Menon", "Bangalore", true, 4, 4.7),
        manager("mgr-02", "Karan Malhotra", "Mumbai", true, 3, 4.4),
        manager("mgr-03", "Farah Khan", "Bangalore", false, 1, 3.9),
        manager("mgr-04", "Rohit Verma", "Mumbai", true, 2, 4.6),
    ]
}
