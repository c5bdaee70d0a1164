//! Shareable plan tokens.
//!
//! A plan serializes to JSON and then to URL-safe base64, giving one
//! string that embeds directly in a `?state=` query parameter with no
//! percent-encoding. Decoding is the exact inverse and is total:
//! anything that is not a token produced here comes back as `None`.

use base64::{
    engine::general_purpose::URL_SAFE_NO_PAD,
    Engine,
};

use crate::core::{
    models::Plan,
    SetflowError,
};

const SHARE_BASE: &str = "https://setflow.app/";

pub fn encode_plan(plan: &Plan) -> Result<String, SetflowError> {
    let json = serde_json::to_string(plan)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Inverse of `encode_plan`. Invalid base64, invalid JSON, or a JSON
/// value of the wrong shape all yield `None`; this never panics on
/// hostile input.
pub fn decode_plan(token: &str) -> Option<Plan> {
    let cleaned = token.trim().replace(['\n', '\r', ' '], "");
    if cleaned.is_empty() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(cleaned).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Full link carrying the plan, suitable for pasting anywhere.
pub fn share_link(plan: &Plan) -> Result<String, SetflowError> {
    Ok(format!("{}?state={}", SHARE_BASE, encode_plan(plan)?))
}

/// Pull the token out of pasted input: accepts a full share link or a
/// bare token.
pub fn extract_token(input: &str) -> Option<&str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match input.split_once("state=") {
        Some((_, rest)) => rest.split('&').next().filter(|token| !token.is_empty()),
        None => Some(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        models::Exercise,
        Weekday,
    };

    fn sample_plan() -> Plan {
        let mut plan = Plan::default();

        let push = plan.add_workout();
        {
            let workout = plan.workout_mut(push).unwrap();
            workout.name = "Push".to_string();
            workout.exercises.push(Exercise {
                name: "Bench Press".to_string(),
                sets: 3,
                reps: 8,
                duration: String::new(),
            });
            workout.exercises.push(Exercise {
                name: "Plank".to_string(),
                sets: 2,
                reps: 1,
                duration: "45s".to_string(),
            });
        }

        let pull = plan.add_workout();
        plan.workout_mut(pull).unwrap().name = "Pull".to_string();

        plan.schedule.assign(Weekday::Monday, Some(push));
        plan.schedule.assign(Weekday::Thursday, Some(pull));
        plan
    }

    #[test]
    fn test_round_trip() {
        let plan = sample_plan();
        let token = encode_plan(&plan).unwrap();
        assert_eq!(decode_plan(&token), Some(plan));
    }

    #[test]
    fn test_round_trip_empty_plan() {
        let plan = Plan::default();
        let token = encode_plan(&plan).unwrap();
        assert_eq!(decode_plan(&token), Some(plan));
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode_plan(&sample_plan()).unwrap();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_decode_tolerates_garbage() {
        // Not base64 at all.
        assert_eq!(decode_plan("!!!not a token!!!"), None);
        // Valid base64 of invalid JSON.
        assert_eq!(decode_plan(&URL_SAFE_NO_PAD.encode(b"not json")), None);
        // Valid JSON of the wrong shape.
        assert_eq!(decode_plan(&URL_SAFE_NO_PAD.encode(b"{\"workouts\": 5}")), None);
        assert_eq!(decode_plan(""), None);
        assert_eq!(decode_plan("   "), None);
    }

    #[test]
    fn test_decode_tolerates_pasted_whitespace() {
        let plan = sample_plan();
        let token = encode_plan(&plan).unwrap();
        let (head, tail) = token.split_at(10);
        let pasted = format!(" {}\n{} ", head, tail);
        assert_eq!(decode_plan(&pasted), Some(plan));
    }

    #[test]
    fn test_extract_token() {
        let plan = sample_plan();
        let link = share_link(&plan).unwrap();

        let token = extract_token(&link).unwrap();
        assert_eq!(decode_plan(token), Some(plan.clone()));

        let bare = encode_plan(&plan).unwrap();
        assert_eq!(extract_token(&bare), Some(bare.as_str()));

        assert_eq!(extract_token(""), None);
        assert_eq!(extract_token("https://setflow.app/?state="), None);
    }
}
