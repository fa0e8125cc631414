//! Test fixtures and constants.

/// Passphrase exported to every test command.
pub const PASSPHRASE: &str = "correct horse battery staple";

/// Standard plaintext values used across multiple tests.
pub const STANDARD_VALUES: &[(&str, &str)] = &[
    ("region", "us-east-1"),
    ("replicas", "3"),
    ("db-url", "postgres://localhost/mydb"),
    ("feature.flags", "a,b,c"),
];

/// Secret used in blinding tests.
pub const SECRET_VALUE: &str = "sk-test-12345";
