use serde::{Deserialize, Serialize};

/// Request body for sign-up. Fields default to empty strings so an absent
/// field takes the same validation path as an empty one.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for sign-in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Acknowledgment returned on success. No token or session accompanies it.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_to_empty() {
        let req: SignupRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(req.username, "alice");
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }

    #[test]
    fn ack_serializes_to_the_wire_shape() {
        let json = serde_json::to_string(&AckResponse { success: true }).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
