pub mod form;
pub mod handler;
pub mod model;
pub mod service;

pub use form::{ReservationForm, ReservationInput};
pub use model::{NewReservation, Reservation};
pub use service::ReservationService;
