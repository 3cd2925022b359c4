use crate::tokenizer::Tokenizer;
use crate::ChunkError;

/// Split `text` in two on `delimiter`, balancing the token count of the two
/// halves as closely as the delimiter positions allow.
///
/// Returns `(text, "")` when the delimiter is absent, signalling that no
/// split is possible. With exactly two parts both are returned directly.
/// Otherwise the split point is found by growing a left prefix part by part
/// and stopping at the first index where the distance to the halfway token
/// count stops strictly decreasing; ties and plateaus stop the scan early
/// rather than continuing to search.
pub fn halve(
    tokenizer: &Tokenizer,
    text: &str,
    delimiter: &str,
) -> Result<(String, String), ChunkError> {
    if delimiter.is_empty() {
        return Err(ChunkError::InvalidInput(
            "delimiter must be non-empty".to_string(),
        ));
    }

    let parts: Vec<&str> = text.split(delimiter).collect();
    match parts.len() {
        1 => Ok((text.to_string(), String::new())),
        2 => Ok((parts[0].to_string(), parts[1].to_string())),
        _ => {
            let halfway = tokenizer.count(text) / 2;
            let mut best_diff = halfway;
            let mut split_idx = parts.len() - 1;

            for i in 0..parts.len() {
                let left = parts[..=i].join(delimiter);
                let diff = halfway.abs_diff(tokenizer.count(&left));
                if diff >= best_diff {
                    split_idx = i;
                    break;
                }
                best_diff = diff;
            }

            let left = parts[..split_idx].join(delimiter);
            let right = parts[split_idx..].join(delimiter);
            Ok((left, right))
        }
    }
}
