//! Whitespace-pair stream parser.

use std::io::BufRead;

use super::{DataError, WeightedSeries};

/// Load (value, weight) pairs from a reader until end of stream.
///
/// Tokens are separated by any whitespace; line structure carries no
/// meaning, so a pair may span a line break. Every token must parse as a
/// finite floating-point number and every weight must be strictly positive.
/// The stream is read exactly to exhaustion; no token is consumed beyond
/// the last one present.
///
/// # Errors
///
/// Returns [`DataError`] on IO failure, a malformed or non-finite token,
/// a non-positive weight, an unpaired trailing value, or an input with
/// zero complete pairs. Messages carry the 1-indexed pair position.
pub fn load_pairs<R: BufRead>(reader: R) -> Result<WeightedSeries, DataError> {
    let mut values = Vec::new();
    let mut weights = Vec::new();
    let mut pending: Option<f64> = None;

    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let index = values.len() + 1;
            let number: f64 = token.parse().map_err(|_| DataError::InvalidValue {
                index,
                token: token.to_string(),
            })?;
            if !number.is_finite() {
                return Err(DataError::NonFiniteValue { index });
            }
            match pending.take() {
                None => pending = Some(number),
                Some(value) => {
                    if number <= 0.0 {
                        return Err(DataError::NonPositiveWeight {
                            index,
                            value: number,
                        });
                    }
                    values.push(value);
                    weights.push(number);
                }
            }
        }
    }

    if pending.is_some() {
        return Err(DataError::TrailingValue {
            index: values.len() + 1,
        });
    }
    if values.is_empty() {
        return Err(DataError::Empty);
    }

    Ok(WeightedSeries { values, weights })
}
