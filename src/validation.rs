/// Characters accepted as the password's required special character.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

const PASSWORD_POLICY_MESSAGE: &str =
    "Password must contain: 8+ characters, uppercase, lowercase, number, and special character";

/// Check the registration password policy. All rules must hold; any
/// violation yields the single combined policy message.
pub fn validate_password(password: &str) -> Result<(), String> {
    let has_min_length = password.chars().count() >= 8;
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_number = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if has_min_length && has_uppercase && has_lowercase && has_number && has_special {
        Ok(())
    } else {
        Err(PASSWORD_POLICY_MESSAGE.to_string())
    }
}
