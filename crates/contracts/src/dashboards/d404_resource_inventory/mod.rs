pub mod dto;

pub use dto::{FetchResponse, Record, ServiceGroup, ServicesDataset, FETCH_PATH, SERVICES_PATH};
