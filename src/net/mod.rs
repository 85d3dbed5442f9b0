pub mod ad_client;
pub mod beacon;
