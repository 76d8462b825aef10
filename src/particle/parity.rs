use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

//=====================================================================
// Multiplicative quantum numbers (P, C, G). Zero marks a quantum
// number that is not defined for the particle.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum Parity {
    Odd = -1,
    #[default]
    Undefined = 0,
    Even = 1,
}

impl Parity {
    pub fn is_defined(self) -> bool {
        self != Parity::Undefined
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Odd => write!(f, "-1"),
            Parity::Undefined => write!(f, "0"),
            Parity::Even => write!(f, "+1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i32() {
        assert_eq!(Parity::try_from(1i32).ok(), Some(Parity::Even));
        assert_eq!(Parity::try_from(-1i32).ok(), Some(Parity::Odd));
        assert_eq!(Parity::try_from(0i32).ok(), Some(Parity::Undefined));
        assert!(Parity::try_from(2i32).is_err());
        assert_eq!(Parity::default(), Parity::Undefined);
    }

    #[test]
    fn test_into_i32() {
        assert_eq!(i32::from(Parity::Even), 1);
        assert_eq!(i32::from(Parity::Odd), -1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Parity::Even), "+1");
        assert_eq!(format!("{}", Parity::Odd), "-1");
        assert!(!Parity::Undefined.is_defined());
    }
}
