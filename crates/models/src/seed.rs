//! Fixed records loaded at startup.

use crate::{Address, PersonRecord, ServiceRecord};

pub fn seed_services() -> Vec<ServiceRecord> {
    vec![
        ServiceRecord::new("customer1", "lan2lan"),
        ServiceRecord::new("customer2", "lan2lan"),
        ServiceRecord::new("customer3", "lan2lan").with_details("100", "1.1.1.1"),
    ]
}

pub fn seed_people() -> Vec<PersonRecord> {
    vec![
        PersonRecord {
            id: "1".into(),
            firstname: "Nic".into(),
            lastname: "Raboy".into(),
            address: Some(Address { city: "Dublin".into(), state: "CA".into() }),
        },
        PersonRecord {
            id: "2".into(),
            firstname: "Maria".into(),
            lastname: "Raboy".into(),
            address: None,
        },
    ]
}
