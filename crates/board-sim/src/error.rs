use board_core::SeatPos;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("boarding order has {got} entries for a roster of {expected}")]
    OrderSizeMismatch { expected: usize, got: usize },

    #[error("roster assigns seat {0}, which is outside the cabin")]
    SeatOutsideCabin(SeatPos),
}

pub type SimResult<T> = Result<T, SimError>;
