use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic. Every operation is checked; nothing wraps.
pub struct Operation {}

impl Operation {
    pub fn negate(val: i64) -> Result<i64> {
        match val.checked_neg() {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    /// Truncates toward zero.
    pub fn divide(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn sum(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_divide() {
        assert_eq!(Operation::divide(7, 2).unwrap(), 3);
        assert_eq!(Operation::divide(-7, 2).unwrap(), -3);
        assert_eq!(
            Operation::divide(5, 0).unwrap_err().code(),
            ErrorCode::DivisionByZero
        );
        assert_eq!(
            Operation::divide(i64::MIN, -1).unwrap_err().code(),
            ErrorCode::Overflow
        );
    }

    #[test]
    fn test_overflow() {
        assert!(Operation::sum(i64::MAX, 1).is_err());
        assert!(Operation::subtract(i64::MIN, 1).is_err());
        assert!(Operation::multiply(i64::MAX, 2).is_err());
        assert!(Operation::negate(i64::MIN).is_err());
        assert_eq!(Operation::negate(5).unwrap(), -5);
    }
}
