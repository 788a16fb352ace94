pub mod draft;
pub mod flow;

pub use draft::{BookingDraft, BookingStep};
pub use flow::{BookingError, BookingFlow, BookingReceipt};
