// generate_secrets.rs
// Utility to generate the two JWT signing secrets

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{rngs::OsRng, RngCore};

fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

fn main() {
    println!("Generating new JWT signing secrets...\n");

    let access = generate_secret();
    let mut refresh = generate_secret();
    while refresh == access {
        refresh = generate_secret();
    }

    println!("✅ Secrets generated successfully!\n");
    println!("Add these to your .env file:");
    println!("─────────────────────────────────────────────────");
    println!("JWT_SECRET_KEY={}", access);
    println!("JWT_REFRESH_SECRET_KEY={}", refresh);
    println!("─────────────────────────────────────────────────");
    println!("\n⚠️  IMPORTANT:");
    println!("  • Keep these secrets out of version control");
    println!("  • Rotating either secret invalidates every issued token of that kind");
}
