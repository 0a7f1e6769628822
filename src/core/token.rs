//! Random token generation.
//!
//! Produces realistic-looking fake credentials: a fixed literal prefix
//! followed by a random suffix drawn uniformly from a fixed character set.
//! The RNG is passed in by the caller, so seeded runs and tests get
//! reproducible output.
//!
//! None of this is cryptographically secure. The values only have to
//! *look* like credentials well enough to trip a pattern scanner.

use rand::Rng;

use crate::error::{DecoyError, Result};

/// Upper and lower case letters plus digits.
pub const ALPHANUMERIC: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Upper case letters plus digits. AWS access key ids never contain lowercase.
pub const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A fake credential format.
///
/// Each kind is fully described by its literal prefix, suffix length, and
/// suffix character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    Stripe,
    Github,
    Aws,
}

impl SecretKind {
    /// All kinds, in report order.
    pub const ALL: [SecretKind; 3] = [Self::Stripe, Self::Github, Self::Aws];

    /// Literal prefix that makes the value look like the real format.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Stripe => "sk_live_",
            Self::Github => "ghp_",
            Self::Aws => "AKIA",
        }
    }

    /// Length of the random suffix.
    pub fn suffix_len(&self) -> usize {
        match self {
            Self::Stripe => 24,
            Self::Github => 36,
            Self::Aws => 16,
        }
    }

    /// Character set the suffix is drawn from.
    pub fn charset(&self) -> &'static [u8] {
        match self {
            Self::Stripe | Self::Github => ALPHANUMERIC,
            Self::Aws => UPPER_ALPHANUMERIC,
        }
    }

    /// Label for user-facing report lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Stripe => "Stripe Key",
            Self::Github => "GitHub Token",
            Self::Aws => "AWS Key",
        }
    }

    /// Generate a fake credential of this kind.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<String> {
        let suffix = random_string(rng, self.suffix_len(), self.charset())?;
        Ok(format!("{}{}", self.prefix(), suffix))
    }
}

impl std::fmt::Display for SecretKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Generate a random string of exactly `len` characters, each chosen
/// independently and uniformly from `charset`, with replacement.
///
/// # Errors
///
/// Returns an invalid-argument error when `len` is zero or `charset` is
/// empty. Both indicate a bug at the call site, so the failure is loud
/// rather than an empty or malformed string.
pub fn random_string(rng: &mut impl Rng, len: usize, charset: &[u8]) -> Result<String> {
    if len == 0 {
        return Err(DecoyError::InvalidLength(len));
    }
    if charset.is_empty() {
        return Err(DecoyError::EmptyCharset);
    }

    Ok((0..len)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_stripe_key_shape() {
        let key = SecretKind::Stripe.generate(&mut rng()).unwrap();

        assert!(key.starts_with("sk_live_"));
        assert_eq!(key.len(), 32);
        assert!(key["sk_live_".len()..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_github_token_shape() {
        let token = SecretKind::Github.generate(&mut rng()).unwrap();

        assert!(token.starts_with("ghp_"));
        assert_eq!(token.len(), 40);
        assert!(token["ghp_".len()..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_aws_key_shape() {
        let key = SecretKind::Aws.generate(&mut rng()).unwrap();

        assert!(key.starts_with("AKIA"));
        assert_eq!(key.len(), 20);
        // No lowercase in AWS access key ids
        assert!(key["AKIA".len()..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_repeated_generation_does_not_collide() {
        let mut rng = rng();
        let keys: HashSet<String> = (0..100)
            .map(|_| SecretKind::Stripe.generate(&mut rng).unwrap())
            .collect();

        assert_eq!(keys.len(), 100);
    }

    #[test]
    fn test_same_seed_produces_same_token() {
        let a = SecretKind::Github
            .generate(&mut StdRng::seed_from_u64(7))
            .unwrap();
        let b = SecretKind::Github
            .generate(&mut StdRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = random_string(&mut rng(), 0, ALPHANUMERIC).unwrap_err();
        assert!(matches!(err, DecoyError::InvalidLength(0)));
    }

    #[test]
    fn test_empty_charset_rejected() {
        let err = random_string(&mut rng(), 8, b"").unwrap_err();
        assert!(matches!(err, DecoyError::EmptyCharset));
    }

    #[test]
    fn test_single_char_charset() {
        let s = random_string(&mut rng(), 5, b"x").unwrap();
        assert_eq!(s, "xxxxx");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(50))]

            #[test]
            fn random_string_has_requested_length(len in 1usize..64, seed in any::<u64>()) {
                let mut rng = StdRng::seed_from_u64(seed);
                let s = random_string(&mut rng, len, ALPHANUMERIC).unwrap();
                prop_assert_eq!(s.len(), len);
            }

            #[test]
            fn random_string_stays_in_charset(seed in any::<u64>()) {
                let mut rng = StdRng::seed_from_u64(seed);
                let s = random_string(&mut rng, 32, UPPER_ALPHANUMERIC).unwrap();
                prop_assert!(s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
            }
        }
    }
}
