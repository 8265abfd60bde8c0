// Relay identifiers are client-side values by design; the relay account is
// what the template is bound to.
pub const RELAY_SERVICE_ID: &str = "service_8a9bndk";
pub const RELAY_TEMPLATE_ID: &str = "template_n4df8s9";
pub const RELAY_PUBLIC_KEY: &str = "AOW1QKkjg-CxZJcYO";

#[cfg(debug_assertions)]
pub fn relay_endpoint() -> &'static str {
    "http://localhost:3001/api/v1.0/email/send" // Local relay stub during development
}

#[cfg(not(debug_assertions))]
pub fn relay_endpoint() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}
