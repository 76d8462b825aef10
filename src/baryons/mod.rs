mod sigma_zero;

pub use sigma_zero::SigmaZero;
