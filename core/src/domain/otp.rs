//! One-time code generation for phone verification.

use rand::rngs::OsRng;
use rand::Rng;

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Generates a zero-padded six-digit code from the OS CSPRNG
pub fn generate_code() -> String {
    let code: u32 = OsRng.gen_range(0..1_000_000);
    format!("{:06}", code)
}
