use gloo::timers::future::TimeoutFuture;
use shared::error::PaymentError;

/// Simulated processing time for the mock charge.
pub const PAYMENT_DELAY_MS: u32 = 2_000;

const TOKEN_PREFIX: &str = "pm_";
const TOKEN_DIGITS: usize = 9;

/// Mocked payment collaborator: waits out the simulated charge, then
/// mints an opaque payment-method token. A real integration would hand
/// the charge to the gateway here.
pub async fn initiate_payment() -> Result<String, PaymentError> {
    TimeoutFuture::new(PAYMENT_DELAY_MS).await;
    Ok(mint_payment_method_id())
}

/// Opaque non-empty token, `pm_` plus nine base-36 digits.
pub fn mint_payment_method_id() -> String {
    let mut token = String::from(TOKEN_PREFIX);
    for _ in 0..TOKEN_DIGITS {
        let digit = (js_sys::Math::random() * 36.0) as u32 % 36;
        token.push(char::from_digit(digit, 36).unwrap_or('0'));
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_shape() {
        let token = mint_payment_method_id();
        assert!(token.starts_with(TOKEN_PREFIX));
        assert_eq!(token.len(), TOKEN_PREFIX.len() + TOKEN_DIGITS);
        assert!(token[TOKEN_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[wasm_bindgen_test]
    async fn test_initiated_payment_yields_nonempty_token() {
        let token = initiate_payment().await.unwrap();
        assert!(!token.trim().is_empty());
    }
}
