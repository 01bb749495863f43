use std::{
    io::{stdin, stdout},
    process::ExitCode,
};

use clap::Parser;
use form::{
    FeedbackForm, SubmitClient,
    config::Config,
    prompt::{AnswerError, apply_answers, fill_missing},
    toast::Toaster,
};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Most important point learned, up to 3 times
    #[arg(long)]
    important: Vec<String>,

    /// Most interesting point, up to 2 times
    #[arg(long)]
    interesting: Vec<String>,

    /// Hardest question
    #[arg(long)]
    difficult: Option<String>,

    /// Overrides FEEDBACK_API_URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let config = Config::load(args.api_url)?;
    let client = SubmitClient::new(&config.api_url);

    let mut form = FeedbackForm::new();

    let missing = match apply_answers(&mut form, args.important, args.interesting, args.difficult)
    {
        Ok(missing) => missing,
        Err(AnswerError::Invalid(invalid)) => {
            for (id, error) in invalid {
                eprintln!("{}. {}: {error}", id.question().number, id.placeholder());
            }
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    fill_missing(
        &mut form,
        &missing,
        config.columns,
        &mut stdin().lock(),
        &mut stdout(),
    )?;

    let mut toaster = Toaster::new();
    let outcome = form
        .submit(&client, |notification| toaster.show(notification))
        .await?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
