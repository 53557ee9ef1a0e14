pub mod auth;
pub mod booking;
pub mod contact;
pub mod health;
pub mod hotel;
pub mod payment;
pub mod review;
