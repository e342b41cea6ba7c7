//! File-backed persistence through the server assembly.

use std::fs;

use bizview_backend::domain::finance::Currency;
use bizview_backend::domain::records::ClientStatus;
use bizview_backend::server::{ServerConfig, build_state};

fn config_for(dir: &std::path::Path) -> ServerConfig {
    ServerConfig::new("127.0.0.1:0".parse().expect("addr"), false)
        .with_data_dir(dir.to_path_buf())
}

#[test]
fn collections_survive_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let state = build_state(&config_for(dir.path())).expect("state");
        let mut clients = state.store.clients();
        clients[0].status = ClientStatus::Inactive;
        state.store.set_clients(clients).expect("persist clients");
        state.store.set_currency(Currency::INR).expect("persist currency");
    }

    let state = build_state(&config_for(dir.path())).expect("reopened state");
    assert_eq!(state.store.clients()[0].status, ClientStatus::Inactive);
    assert_eq!(state.store.currency(), Currency::INR);
}

#[test]
fn a_corrupt_collection_reseeds_without_touching_the_others() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let state = build_state(&config_for(dir.path())).expect("state");
        let mut clients = state.store.clients();
        clients.truncate(2);
        state.store.set_clients(clients).expect("persist clients");
    }
    fs::write(dir.path().join("financials.json"), "not json").expect("corrupt blob");

    let state = build_state(&config_for(dir.path())).expect("reopened state");
    // The corrupt ledger falls back to seed data; the client edit survives.
    assert_eq!(state.store.financial_records().len(), 7);
    assert_eq!(state.store.clients().len(), 2);
}
