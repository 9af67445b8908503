use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitscore::config::Config;
use fitscore::errors::AppError;
use fitscore::evaluate::Evaluator;
use fitscore::pdf::extract_resume_text;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fitscore v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let (resume_path, jd_path) = match (args.next(), args.next()) {
        (Some(r), Some(j)) => (r, j),
        _ => bail!("usage: fitscore <resume.pdf|resume.txt> <job_description.txt>"),
    };

    let resume_text = load_resume(Path::new(&resume_path))?;
    let jd_text = std::fs::read_to_string(&jd_path)
        .with_context(|| format!("could not read job description from {jd_path}"))?;

    let evaluator = Evaluator::new(&config);
    let evaluation = match evaluator.evaluate(&resume_text, &jd_text).await {
        Ok(evaluation) => evaluation,
        Err(AppError::RateLimited { service }) => {
            bail!("the {service} service is rate limiting us — try again in a minute")
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}

/// Reads the résumé from disk: PDFs go through the extraction boundary,
/// anything else is treated as plain text.
fn load_resume(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        let bytes = std::fs::read(path)
            .with_context(|| format!("could not read resume from {}", path.display()))?;
        Ok(extract_resume_text(&bytes)?)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("could not read resume from {}", path.display()))
    }
}
