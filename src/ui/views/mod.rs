pub mod admin;
pub mod ai_updates;
pub mod dashboard;
pub mod market_updates;
pub mod myths_facts;
pub mod quiz;
