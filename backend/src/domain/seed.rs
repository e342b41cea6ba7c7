//! Seed datasets used when a persisted collection is missing or corrupt.
//!
//! Each collection falls back independently, so one bad blob never takes the
//! others down with it. Amounts are in the base currency.

use chrono::NaiveDate;

use crate::domain::records::{
    Appointment, Client, ClientStatus, FinancialRecord, Notification, RecordKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Every call site uses a literal calendar date.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn client(
    id: &str,
    name: &str,
    email: &str,
    company: &str,
    status: ClientStatus,
    last_contact: NaiveDate,
) -> Client {
    Client {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        company: company.to_owned(),
        status,
        last_contact,
    }
}

/// Initial client roster.
pub fn clients() -> Vec<Client> {
    use ClientStatus::{Active, Inactive};
    vec![
        client(
            "1",
            "Alice Johnson",
            "alice.j@example.com",
            "Innovate LLC",
            Active,
            date(2024, 6, 20),
        ),
        client(
            "2",
            "Bob Smith",
            "bob.s@example.com",
            "Solutions Inc.",
            Active,
            date(2024, 6, 18),
        ),
        client(
            "3",
            "Charlie Brown",
            "charlie.b@example.com",
            "Tech Forward",
            Inactive,
            date(2024, 3, 10),
        ),
        client(
            "4",
            "Diana Prince",
            "diana.p@example.com",
            "Global Synergy",
            Active,
            date(2024, 6, 21),
        ),
        client(
            "5",
            "Ethan Hunt",
            "ethan.h@example.com",
            "Mission Group",
            Active,
            date(2024, 5, 30),
        ),
    ]
}

fn record(
    id: &str,
    when: NaiveDate,
    description: &str,
    amount: f64,
    kind: RecordKind,
    category: &str,
) -> FinancialRecord {
    FinancialRecord {
        id: id.to_owned(),
        date: when,
        description: description.to_owned(),
        amount,
        kind,
        category: category.to_owned(),
    }
}

/// Initial ledger, one month of activity.
pub fn financial_records() -> Vec<FinancialRecord> {
    use RecordKind::{Expense, Revenue};
    vec![
        record(
            "txn1",
            date(2024, 6, 15),
            "Website Redesign Project",
            7500.0,
            Revenue,
            "Web Development",
        ),
        record(
            "txn2",
            date(2024, 6, 14),
            "Monthly Cloud Hosting",
            250.0,
            Expense,
            "Utilities",
        ),
        record(
            "txn3",
            date(2024, 6, 12),
            "Client Retainer - Acme Corp",
            3000.0,
            Revenue,
            "Consulting",
        ),
        record(
            "txn4",
            date(2024, 6, 11),
            "Marketing Campaign",
            1200.0,
            Expense,
            "Marketing",
        ),
        record(
            "txn5",
            date(2024, 6, 10),
            "Office Supplies Purchase",
            175.50,
            Expense,
            "Office",
        ),
        record(
            "txn6",
            date(2024, 6, 8),
            "Logo Design for Startup",
            1500.0,
            Revenue,
            "Design",
        ),
        record(
            "txn7",
            date(2024, 6, 5),
            "Annual Software License",
            800.0,
            Expense,
            "Software",
        ),
    ]
}

/// Initial day of appointments.
pub fn appointments() -> Vec<Appointment> {
    let entry = |id: &str, time: &str, title: &str, description: &str| Appointment {
        id: id.to_owned(),
        time: time.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        client_id: None,
        client_name: None,
    };
    vec![
        entry(
            "1",
            "10:00 AM",
            "Project Kickoff with Acme Inc.",
            "Discussing the new marketing campaign strategy.",
        ),
        entry(
            "2",
            "01:00 PM",
            "Team Sync-up",
            "Weekly check-in on project progress and blockers.",
        ),
        entry(
            "3",
            "03:30 PM",
            "Interview with Candidate",
            "Senior Frontend Developer position.",
        ),
    ]
}

/// The notification feed starts empty.
pub fn notifications() -> Vec<Notification> {
    Vec::new()
}
