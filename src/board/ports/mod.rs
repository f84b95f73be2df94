//! Port definitions for the board context.

mod gateway;

pub use gateway::{BoardGateway, BoardGatewayError, BoardGatewayResult};
