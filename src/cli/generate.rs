//! Generate command - fake secrets and demo prompts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cli::output;
use crate::core::prompt;
use crate::core::token::SecretKind;
use crate::error::Result;

/// Generate the three fake secrets, compose the demo prompts, and print
/// the report.
pub fn execute(seed: Option<u64>, json: bool) -> Result<()> {
    let secrets = match seed {
        Some(seed) => {
            debug!("seeding generator with {}", seed);
            generate_all(&mut StdRng::seed_from_u64(seed))?
        }
        None => generate_all(&mut rand::thread_rng())?,
    };

    let prompts = prompt::compose(&secrets[0], &secrets[1], &secrets[2]);

    if json {
        print_json(&secrets, &prompts)?;
    } else {
        print_report(&secrets, &prompts);
    }

    Ok(())
}

/// Generate one secret of each kind, in report order.
fn generate_all(rng: &mut impl Rng) -> Result<[String; 3]> {
    let [stripe, github, aws] = SecretKind::ALL;
    Ok([
        stripe.generate(rng)?,
        github.generate(rng)?,
        aws.generate(rng)?,
    ])
}

/// Print the human-readable, copy-paste-friendly report.
fn print_report(secrets: &[String; 3], prompts: &[String; prompt::PROMPT_COUNT]) {
    output::section("Generated Demo Secrets");
    for (kind, value) in SecretKind::ALL.iter().zip(secrets) {
        output::kv(kind.display_name(), value);
    }

    output::section("Demo Prompts");
    output::dimmed("Copy and paste these into the chat window:");
    for (i, prompt) in prompts.iter().enumerate() {
        println!();
        output::header(&format!("Prompt {}", i + 1));
        println!("{}", prompt);
    }
}

/// Print the report as JSON.
fn print_json(secrets: &[String; 3], prompts: &[String; prompt::PROMPT_COUNT]) -> Result<()> {
    let out = serde_json::json!({
        "secrets": {
            "stripe": secrets[0],
            "github": secrets[1],
            "aws": secrets[2],
        },
        "prompts": prompts,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
