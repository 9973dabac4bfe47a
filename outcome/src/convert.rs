//! Lossless conversions between [`Outcome`] and the std [`Result`], so outcome
//! chains compose with `?`-based code at either end.

use crate::outcome::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_outcome() {
        assert_eq!(Outcome::from(Ok::<_, String>(7u32)), Outcome::ok(7));
        assert_eq!(Outcome::from(Err::<u32, _>("boom".to_string())), Outcome::err("boom".to_string()));
    }

    #[test]
    fn test_outcome_into_result() {
        assert_eq!(Result::from(Outcome::<u32, String>::ok(7)), Ok(7));
        assert_eq!(Result::from(Outcome::<u32, String>::err("boom".to_string())), Err("boom".to_string()));
    }

    #[test]
    fn test_roundtrip_is_identity() {
        let success: Result<u32, String> = Ok(7);
        assert_eq!(Result::from(Outcome::from(success.clone())), success);

        let failure: Outcome<u32, String> = Outcome::err("boom".to_string());
        assert_eq!(Outcome::from(Result::from(failure.clone())), failure);
    }
}
