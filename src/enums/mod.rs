pub mod fetch_state;
